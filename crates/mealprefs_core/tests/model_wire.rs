use mealprefs_core::{
    AllergyIntolerance, AllergyKind, AllergySeverity, DislikeSeverity, DislikedFood, FoodItem,
    MealCategory, PatientMealPreferences,
};

#[test]
fn allergy_serializes_with_host_wire_fields() {
    let entry = AllergyIntolerance::new("Peanuts", AllergyKind::Allergy, AllergySeverity::Severe);

    let json = serde_json::to_value(&entry).unwrap();
    assert_eq!(json["id"], entry.id().to_string());
    assert_eq!(json["name"], "Peanuts");
    assert_eq!(json["type"], "allergy");
    assert_eq!(json["severity"], "severe");
    assert_eq!(json["isCommon"], true);

    let decoded: AllergyIntolerance = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, entry);
}

#[test]
fn food_item_omits_absent_category() {
    let without = serde_json::to_value(FoodItem::new("Crackers", None)).unwrap();
    assert!(without.get("category").is_none());

    let with = serde_json::to_value(FoodItem::new("Tea", Some(MealCategory::Beverages))).unwrap();
    assert_eq!(with["category"], "beverages");
}

#[test]
fn dislike_severity_uses_snake_case_values() {
    let entry = DislikedFood::new("Okra", DislikeSeverity::AbsolutelyWontEat);
    let json = serde_json::to_value(&entry).unwrap();
    assert_eq!(json["severity"], "absolutely_wont_eat");
}

#[test]
fn aggregate_serializes_in_camel_case() {
    let record = PatientMealPreferences {
        patient_name: "Jane Doe".to_string(),
        favorite_foods: vec![FoodItem::new("Soup", Some(MealCategory::Lunch))],
        disliked_foods: Vec::new(),
        allergies_intolerances: Vec::new(),
        special_instructions: "No salt".to_string(),
    };

    let json = serde_json::to_value(&record).unwrap();
    assert_eq!(json["patientName"], "Jane Doe");
    assert_eq!(json["favoriteFoods"][0]["name"], "Soup");
    assert!(json["dislikedFoods"].as_array().unwrap().is_empty());
    assert!(json["allergiesIntolerances"].as_array().unwrap().is_empty());
    assert_eq!(json["specialInstructions"], "No salt");

    let decoded: PatientMealPreferences = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, record);
}

#[test]
fn aggregate_deserializes_from_sparse_host_json() {
    let decoded: PatientMealPreferences =
        serde_json::from_str(r#"{"patientName":"Jane Doe"}"#).unwrap();
    assert_eq!(decoded.patient_name, "Jane Doe");
    assert!(decoded.favorite_foods.is_empty());
    assert_eq!(decoded.special_instructions, "");
}
