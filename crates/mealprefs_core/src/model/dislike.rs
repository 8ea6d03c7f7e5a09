//! Disliked-food record and dislike severity.

use crate::model::entry::{EntryId, PreferenceEntry};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// How strongly the patient rejects a food.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DislikeSeverity {
    MildDislike,
    StrongDislike,
    AbsolutelyWontEat,
}

impl DislikeSeverity {
    /// Canonical display order for severity groupings.
    pub const ALL: [DislikeSeverity; 3] = [
        DislikeSeverity::MildDislike,
        DislikeSeverity::StrongDislike,
        DislikeSeverity::AbsolutelyWontEat,
    ];

    /// Stable machine name matching the serialized form.
    pub fn as_str(self) -> &'static str {
        match self {
            DislikeSeverity::MildDislike => "mild_dislike",
            DislikeSeverity::StrongDislike => "strong_dislike",
            DislikeSeverity::AbsolutelyWontEat => "absolutely_wont_eat",
        }
    }

    /// Human-readable label for display surfaces.
    pub fn label(self) -> &'static str {
        match self {
            DislikeSeverity::MildDislike => "Mild Dislike",
            DislikeSeverity::StrongDislike => "Strong Dislike",
            DislikeSeverity::AbsolutelyWontEat => "Absolutely Won't Eat",
        }
    }
}

/// One disliked food recorded for the patient.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DislikedFood {
    id: EntryId,
    name: String,
    /// Severity is directly updatable in place, unlike the name.
    pub severity: DislikeSeverity,
}

impl DislikedFood {
    /// Creates a disliked food with a generated stable id.
    pub fn new(name: impl Into<String>, severity: DislikeSeverity) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            severity,
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
}

impl PreferenceEntry for DislikedFood {
    fn id(&self) -> EntryId {
        self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn apply_name(&mut self, name: String) {
        self.name = name;
    }
}
