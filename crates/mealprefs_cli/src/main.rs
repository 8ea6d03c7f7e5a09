//! CLI smoke entry point.
//!
//! # Responsibility
//! - Exercise `mealprefs_core` end to end without any UI runtime.
//! - Keep output deterministic for quick local sanity checks.

use mealprefs_core::{
    AllergyIntolerance, AllergyKind, AllergySeverity, DislikeSeverity, DislikedFood, FoodItem,
    FormHost, MealCategory, MealPreferencesForm, PatientMealPreferences, SaveError,
};

/// Host probe counting callbacks and accepting every save.
#[derive(Default)]
struct SmokeHost {
    change_events: usize,
    submitted: Option<PatientMealPreferences>,
}

impl FormHost for SmokeHost {
    fn preferences_changed(&mut self, _current: &PatientMealPreferences) {
        self.change_events += 1;
    }

    fn save(&mut self, _data: &PatientMealPreferences) -> Result<(), SaveError> {
        Ok(())
    }

    fn preferences_submitted(&mut self, data: &PatientMealPreferences) {
        self.submitted = Some(data.clone());
    }
}

fn main() {
    println!("mealprefs_core version={}", mealprefs_core::core_version());

    // Why: replay the canonical capture flow so core wiring can be
    // verified independently from any host UI.
    let mut form = MealPreferencesForm::new(SmokeHost::default());

    form.with_favorites(|favorites| {
        favorites
            .add(FoodItem::new("Soup", Some(MealCategory::Breakfast)))
            .expect("fresh favorite should be accepted");
    });
    form.with_dislikes(|dislikes| {
        dislikes
            .add(DislikedFood::new("Okra", DislikeSeverity::MildDislike))
            .expect("fresh dislike should be accepted");
    });
    form.with_allergies(|allergies| {
        allergies
            .add(AllergyIntolerance::new(
                "Peanuts",
                AllergyKind::Allergy,
                AllergySeverity::Severe,
            ))
            .expect("fresh allergy should be accepted");
    });

    let rejected = form
        .submit()
        .expect_err("submit without a patient name must be rejected");
    println!("submit_without_name rejected={rejected}");

    form.set_patient_name("Jane Doe");
    form.submit().expect("submit with a patient name should pass");

    let host = form.into_host();
    let record = host.submitted.expect("successful submit forwards the record");
    println!(
        "submit_ok favorites={} dislikes={} allergies={} common_allergens={}",
        record.favorite_foods.len(),
        record.disliked_foods.len(),
        record.allergies_intolerances.len(),
        record
            .allergies_intolerances
            .iter()
            .filter(|entry| entry.is_common())
            .count()
    );
    println!("change_events={}", host.change_events);
}
