//! Domain model for a single patient's meal-preference record.
//!
//! # Responsibility
//! - Define the canonical value types held by the preference stores.
//! - Keep derived fields (common-allergen flag) consistent with names.
//!
//! # Invariants
//! - Every list entry is identified by a stable `EntryId`.
//! - Insertion order of list entries is display order.

pub mod allergy;
pub mod dislike;
pub mod entry;
pub mod food;
pub mod instructions;
pub mod preferences;
