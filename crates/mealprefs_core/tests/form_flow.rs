use mealprefs_core::{
    AllergyIntolerance, AllergyKind, AllergySeverity, DislikeSeverity, DislikedFood, FoodItem,
    FormError, FormHost, MealCategory, MealPreferencesForm, PatientMealPreferences, SaveError,
    SpecialInstructions,
};

/// Host double recording every callback the form fires.
#[derive(Default)]
struct RecordingHost {
    changes: Vec<PatientMealPreferences>,
    submitted: Vec<PatientMealPreferences>,
    saves: usize,
    fail_save: bool,
}

impl FormHost for RecordingHost {
    fn preferences_changed(&mut self, current: &PatientMealPreferences) {
        self.changes.push(current.clone());
    }

    fn save(&mut self, _data: &PatientMealPreferences) -> Result<(), SaveError> {
        self.saves += 1;
        if self.fail_save {
            Err(SaveError::new("backend unavailable"))
        } else {
            Ok(())
        }
    }

    fn preferences_submitted(&mut self, data: &PatientMealPreferences) {
        self.submitted.push(data.clone());
    }
}

#[test]
fn every_mutation_notifies_with_the_full_snapshot() {
    let mut form = MealPreferencesForm::new(RecordingHost::default());

    form.set_patient_name("Jane Doe");
    form.with_favorites(|favorites| {
        favorites
            .add(FoodItem::new("Soup", Some(MealCategory::Lunch)))
            .unwrap();
    });
    assert!(form.set_special_instructions("No salt"));

    let host = form.into_host();
    assert_eq!(host.changes.len(), 3);
    let last = host.changes.last().unwrap();
    assert_eq!(last.patient_name, "Jane Doe");
    assert_eq!(last.favorite_foods.len(), 1);
    assert_eq!(last.special_instructions, "No salt");
}

#[test]
fn submit_with_blank_name_never_reaches_the_host() {
    let mut form = MealPreferencesForm::new(RecordingHost::default());
    form.set_patient_name("   ");

    let err = form.submit().unwrap_err();

    assert_eq!(err, FormError::MissingPatientName);
    assert!(!form.is_submitting());
    let host = form.into_host();
    assert_eq!(host.saves, 0);
    assert!(host.submitted.is_empty());
}

#[test]
fn successful_submit_forwards_the_final_aggregate_once() {
    let mut form = MealPreferencesForm::new(RecordingHost::default());
    form.set_patient_name("Jane Doe");
    form.with_favorites(|favorites| {
        favorites.add(FoodItem::new("Soup", None)).unwrap();
    });

    form.submit().unwrap();

    assert!(!form.is_submitting());
    let host = form.into_host();
    assert_eq!(host.saves, 1);
    assert_eq!(host.submitted.len(), 1);
    assert_eq!(host.submitted[0].patient_name, "Jane Doe");
    assert_eq!(host.submitted[0].favorite_foods.len(), 1);
}

#[test]
fn failed_save_resets_the_flag_and_suppresses_the_submit_callback() {
    let mut form = MealPreferencesForm::new(RecordingHost {
        fail_save: true,
        ..RecordingHost::default()
    });
    form.set_patient_name("Jane Doe");

    let err = form.submit().unwrap_err();

    assert!(matches!(err, FormError::SaveFailed(_)));
    assert!(!form.is_submitting());
    let host = form.into_host();
    assert_eq!(host.saves, 1);
    assert!(host.submitted.is_empty());

    // The form stays usable for a retry after the host recovers.
}

#[test]
fn refused_instruction_append_does_not_notify() {
    let mut form = MealPreferencesForm::new(RecordingHost::default());
    assert!(form.set_special_instructions(&"x".repeat(498)));
    let changes_before = form.host().changes.len();

    assert!(!form.append_instruction_suggestion("far too long to fit"));

    assert_eq!(form.instructions().char_count(), 498);
    assert_eq!(form.host().changes.len(), changes_before);
}

#[test]
fn accepted_instruction_append_uses_bullet_separator() {
    let mut form = MealPreferencesForm::new(RecordingHost::default());
    assert!(form.set_special_instructions("No salt"));
    assert!(form.append_instruction_suggestion("Prefers familiar foods"));

    assert_eq!(
        form.instructions().as_str(),
        "No salt\n\u{2022} Prefers familiar foods"
    );
}

#[test]
fn over_limit_replacement_is_refused() {
    let mut form = MealPreferencesForm::new(RecordingHost::default());
    assert!(!form.set_special_instructions(&"x".repeat(
        SpecialInstructions::MAX_CHARS + 1
    )));
    assert_eq!(form.instructions().as_str(), "");
}

#[test]
fn seed_populates_stores_and_clamps_instructions() {
    let seed = PatientMealPreferences {
        patient_name: "Jane Doe".to_string(),
        favorite_foods: vec![FoodItem::new("Soup", Some(MealCategory::Lunch))],
        disliked_foods: vec![DislikedFood::new("Okra", DislikeSeverity::MildDislike)],
        allergies_intolerances: vec![AllergyIntolerance::new(
            "Peanuts",
            AllergyKind::Allergy,
            AllergySeverity::Severe,
        )],
        special_instructions: "x".repeat(600),
    };

    let form = MealPreferencesForm::with_seed(RecordingHost::default(), seed);

    assert_eq!(form.patient_name(), "Jane Doe");
    assert_eq!(form.favorites().len(), 1);
    assert_eq!(form.dislikes().len(), 1);
    assert_eq!(form.allergies().len(), 1);
    assert_eq!(
        form.instructions().char_count(),
        SpecialInstructions::MAX_CHARS
    );
    // Seeding itself is not a mutation; no change event fires.
    assert!(form.host().changes.is_empty());
}

#[test]
fn end_to_end_capture_scenario() {
    let mut form = MealPreferencesForm::new(RecordingHost::default());

    form.with_favorites(|favorites| {
        favorites
            .add(FoodItem::new("Soup", Some(MealCategory::Breakfast)))
            .unwrap();
    });
    form.with_dislikes(|dislikes| {
        dislikes
            .add(DislikedFood::new("Okra", DislikeSeverity::MildDislike))
            .unwrap();
    });
    form.with_allergies(|allergies| {
        allergies
            .add(AllergyIntolerance::new(
                "Peanuts",
                AllergyKind::Allergy,
                AllergySeverity::Severe,
            ))
            .unwrap();
    });
    assert!(form.allergies().entries()[0].is_common());

    assert_eq!(form.submit().unwrap_err(), FormError::MissingPatientName);

    form.set_patient_name("Jane Doe");
    form.submit().unwrap();

    let host = form.into_host();
    assert_eq!(host.submitted.len(), 1);
    let final_record = &host.submitted[0];
    assert_eq!(final_record.patient_name, "Jane Doe");
    assert_eq!(final_record.favorite_foods[0].name(), "Soup");
    assert_eq!(final_record.disliked_foods[0].name(), "Okra");
    assert_eq!(final_record.allergies_intolerances[0].name(), "Peanuts");
    assert!(final_record.allergies_intolerances[0].is_common());
}
