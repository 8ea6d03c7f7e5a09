//! Pure display partitioning over preference lists.
//!
//! # Responsibility
//! - Partition stored entries into discriminant buckets for rendering.
//!
//! # Invariants
//! - Grouping never mutates or reorders the underlying entries.
//! - The concatenation of all groups reproduces the input exactly once
//!   each, in canonical group order then original relative order.

use crate::model::allergy::{AllergyIntolerance, AllergySeverity};
use crate::model::dislike::{DislikeSeverity, DislikedFood};
use crate::model::food::{FoodItem, MealCategory};

/// Groups favorite foods by meal category in canonical category order.
///
/// Entries without a category are classified under snacks. Categories
/// with no entries are omitted.
pub fn group_foods_by_category(items: &[FoodItem]) -> Vec<(MealCategory, Vec<&FoodItem>)> {
    group_by(items, &MealCategory::ALL, FoodItem::grouping_category)
}

/// Groups disliked foods by severity in canonical severity order.
pub fn group_dislikes_by_severity(
    items: &[DislikedFood],
) -> Vec<(DislikeSeverity, Vec<&DislikedFood>)> {
    group_by(items, &DislikeSeverity::ALL, |item| item.severity)
}

/// Groups allergies/intolerances by severity in canonical severity order.
pub fn group_allergies_by_severity(
    items: &[AllergyIntolerance],
) -> Vec<(AllergySeverity, Vec<&AllergyIntolerance>)> {
    group_by(items, &AllergySeverity::ALL, |item| item.severity)
}

fn group_by<'a, T, K>(
    items: &'a [T],
    order: &[K],
    key_of: impl Fn(&T) -> K,
) -> Vec<(K, Vec<&'a T>)>
where
    K: Copy + PartialEq,
{
    order
        .iter()
        .copied()
        .filter_map(|key| {
            let members: Vec<&T> = items.iter().filter(|item| key_of(item) == key).collect();
            if members.is_empty() {
                None
            } else {
                Some((key, members))
            }
        })
        .collect()
}
