//! Favorite-food record and meal category.
//!
//! # Responsibility
//! - Define the `FoodItem` entry stored by the favorites list.
//! - Define the meal category used to partition favorites for display.
//!
//! # Invariants
//! - `id` is stable and never reused for another entry.
//! - A missing category is always displayed under snacks.

use crate::model::entry::{EntryId, PreferenceEntry};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Meal category a favorite food belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MealCategory {
    Breakfast,
    Lunch,
    Dinner,
    Snacks,
    Beverages,
}

impl MealCategory {
    /// Canonical display order for category groupings.
    pub const ALL: [MealCategory; 5] = [
        MealCategory::Breakfast,
        MealCategory::Lunch,
        MealCategory::Dinner,
        MealCategory::Snacks,
        MealCategory::Beverages,
    ];

    /// Stable machine name matching the serialized form.
    pub fn as_str(self) -> &'static str {
        match self {
            MealCategory::Breakfast => "breakfast",
            MealCategory::Lunch => "lunch",
            MealCategory::Dinner => "dinner",
            MealCategory::Snacks => "snacks",
            MealCategory::Beverages => "beverages",
        }
    }

    /// Human-readable label for display surfaces.
    pub fn label(self) -> &'static str {
        match self {
            MealCategory::Breakfast => "Breakfast",
            MealCategory::Lunch => "Lunch",
            MealCategory::Dinner => "Dinner",
            MealCategory::Snacks => "Snacks",
            MealCategory::Beverages => "Beverages",
        }
    }
}

/// One favorite food recorded for the patient.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FoodItem {
    id: EntryId,
    name: String,
    /// Optional meal category; absent entries group under snacks.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<MealCategory>,
}

impl FoodItem {
    /// Creates a favorite food with a generated stable id.
    pub fn new(name: impl Into<String>, category: Option<MealCategory>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            category,
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

    /// Category used for display grouping; absent maps to snacks.
    pub fn grouping_category(&self) -> MealCategory {
        self.category.unwrap_or(MealCategory::Snacks)
    }
}

impl PreferenceEntry for FoodItem {
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

#[cfg(test)]
mod tests {
    use super::{FoodItem, MealCategory};

    #[test]
    fn new_food_gets_fresh_id_and_keeps_category() {
        let food = FoodItem::new("Porridge", Some(MealCategory::Breakfast));
        assert!(!food.id().is_nil());
        assert_eq!(food.name(), "Porridge");
        assert_eq!(food.category, Some(MealCategory::Breakfast));
    }

    #[test]
    fn missing_category_groups_under_snacks() {
        let food = FoodItem::new("Crackers", None);
        assert_eq!(food.grouping_category(), MealCategory::Snacks);
    }

    #[test]
    fn two_foods_never_share_an_id() {
        let a = FoodItem::new("Soup", None);
        let b = FoodItem::new("Soup", None);
        assert_ne!(a.id(), b.id());
    }
}
