//! Core domain logic for patient meal-preference capture.
//! This crate is the single source of truth for form invariants.

pub mod form;
pub mod grouping;
pub mod logging;
pub mod model;
pub mod store;

pub use form::{FormError, FormHost, MealPreferencesForm, SaveError};
pub use grouping::{group_allergies_by_severity, group_dislikes_by_severity, group_foods_by_category};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::allergy::{
    available_common_allergens, is_common_allergen, AllergyIntolerance, AllergyKind,
    AllergySeverity, COMMON_ALLERGENS,
};
pub use model::dislike::{DislikeSeverity, DislikedFood};
pub use model::entry::{EntryId, PreferenceEntry};
pub use model::food::{FoodItem, MealCategory};
pub use model::instructions::{SpecialInstructions, INSTRUCTION_SUGGESTIONS};
pub use model::preferences::PatientMealPreferences;
pub use store::edit::EditState;
pub use store::list::{PreferenceError, PreferenceList, PreferenceResult};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
