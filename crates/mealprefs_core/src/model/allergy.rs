//! Allergy/intolerance record with derived common-allergen flag.
//!
//! # Responsibility
//! - Define the allergy entry stored by the allergies list.
//! - Keep the `is_common` flag derived from the fixed reference list.
//!
//! # Invariants
//! - `is_common` is recomputed from the current name and never settable
//!   by callers; seed data is re-derived at the store boundary.

use crate::model::entry::{EntryId, PreferenceEntry};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Fixed reference list of common allergens offered for quick add.
pub const COMMON_ALLERGENS: [&str; 9] = [
    "Nuts (Tree nuts)",
    "Peanuts",
    "Dairy/Milk",
    "Eggs",
    "Wheat/Gluten",
    "Soy",
    "Fish",
    "Shellfish",
    "Sesame",
];

static COMMON_ALLERGEN_LOOKUP: Lazy<Vec<String>> =
    Lazy::new(|| COMMON_ALLERGENS.iter().map(|n| n.to_lowercase()).collect());

/// Returns whether a name matches the common-allergen reference list.
///
/// Matching is case-insensitive over the trimmed name.
pub fn is_common_allergen(name: &str) -> bool {
    let needle = name.trim().to_lowercase();
    COMMON_ALLERGEN_LOOKUP.iter().any(|known| *known == needle)
}

/// Reference-list entries not yet present among `existing`.
///
/// Used by quick-add surfaces to hide allergens already recorded.
pub fn available_common_allergens(existing: &[AllergyIntolerance]) -> Vec<&'static str> {
    COMMON_ALLERGENS
        .iter()
        .copied()
        .filter(|candidate| {
            !existing
                .iter()
                .any(|entry| entry.name().eq_ignore_ascii_case(candidate))
        })
        .collect()
}

/// Whether the reaction is a true allergy or an intolerance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AllergyKind {
    Allergy,
    Intolerance,
}

impl AllergyKind {
    /// Stable machine name matching the serialized form.
    pub fn as_str(self) -> &'static str {
        match self {
            AllergyKind::Allergy => "allergy",
            AllergyKind::Intolerance => "intolerance",
        }
    }

    /// Human-readable label for display surfaces.
    pub fn label(self) -> &'static str {
        match self {
            AllergyKind::Allergy => "Allergy",
            AllergyKind::Intolerance => "Intolerance",
        }
    }
}

/// Reaction severity for an allergy or intolerance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AllergySeverity {
    Mild,
    Moderate,
    Severe,
}

impl AllergySeverity {
    /// Canonical display order for severity groupings.
    pub const ALL: [AllergySeverity; 3] = [
        AllergySeverity::Mild,
        AllergySeverity::Moderate,
        AllergySeverity::Severe,
    ];

    /// Stable machine name matching the serialized form.
    pub fn as_str(self) -> &'static str {
        match self {
            AllergySeverity::Mild => "mild",
            AllergySeverity::Moderate => "moderate",
            AllergySeverity::Severe => "severe",
        }
    }

    /// Human-readable label for display surfaces.
    pub fn label(self) -> &'static str {
        match self {
            AllergySeverity::Mild => "Mild",
            AllergySeverity::Moderate => "Moderate",
            AllergySeverity::Severe => "Severe",
        }
    }
}

/// One allergy or intolerance recorded for the patient.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AllergyIntolerance {
    id: EntryId,
    name: String,
    /// Serialized as `type` to match the host schema naming.
    #[serde(rename = "type")]
    pub kind: AllergyKind,
    /// Severity is directly updatable in place, unlike the name.
    pub severity: AllergySeverity,
    // Incoming values are re-derived at the store boundary; the flag is
    // accepted on deserialization only to tolerate host-produced JSON.
    #[serde(default)]
    is_common: bool,
}

impl AllergyIntolerance {
    /// Creates an allergy entry with a generated stable id.
    ///
    /// The common-allergen flag is derived from the provided name.
    pub fn new(name: impl Into<String>, kind: AllergyKind, severity: AllergySeverity) -> Self {
        let name = name.into();
        let is_common = is_common_allergen(&name);
        Self {
            id: Uuid::new_v4(),
            name,
            kind,
            severity,
            is_common,
        }
    }

    /// Stable id assigned at construction.
    pub fn id(&self) -> EntryId {
        self.id
    }

    /// Current display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Whether the current name matches the common-allergen list.
    pub fn is_common(&self) -> bool {
        self.is_common
    }
}

impl PreferenceEntry for AllergyIntolerance {
    fn id(&self) -> EntryId {
        self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn apply_name(&mut self, name: String) {
        self.is_common = is_common_allergen(&name);
        self.name = name;
    }
}
