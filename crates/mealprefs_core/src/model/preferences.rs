//! Aggregate patient meal-preference snapshot.
//!
//! # Responsibility
//! - Define the full record exchanged with the host on seed, change and
//!   submit notifications.
//!
//! # Invariants
//! - Field names serialize in the host schema's camelCase shape.

use crate::model::allergy::AllergyIntolerance;
use crate::model::dislike::DislikedFood;
use crate::model::food::FoodItem;
use serde::{Deserialize, Serialize};

/// Complete meal-preference record for one patient.
///
/// This is a plain value snapshot: the form aggregate owns the live
/// stores and produces one of these for every host notification.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PatientMealPreferences {
    /// Required for submission; free text otherwise.
    #[serde(default)]
    pub patient_name: String,
    #[serde(default)]
    pub favorite_foods: Vec<FoodItem>,
    #[serde(default)]
    pub disliked_foods: Vec<DislikedFood>,
    #[serde(default)]
    pub allergies_intolerances: Vec<AllergyIntolerance>,
    /// Bounded to 500 characters while owned by the form.
    #[serde(default)]
    pub special_instructions: String,
}
