//! Shared identity and naming contract for preference-list entries.
//!
//! # Responsibility
//! - Define the stable `EntryId` carried by every list entry.
//! - Define the trait the generic preference store operates on.
//!
//! # Invariants
//! - `EntryId` is assigned once at construction and never reused.
//! - Derived fields are refreshed whenever the display name changes.

use uuid::Uuid;

/// Stable identifier for every preference-list entry.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type EntryId = Uuid;

/// Contract the generic preference store requires from its entries.
///
/// Names are replaced only through [`PreferenceEntry::apply_name`], which
/// gives each entry type the chance to refresh fields derived from the
/// name (the allergy record recomputes its common-allergen flag there).
pub trait PreferenceEntry: Clone {
    /// Stable id assigned at construction.
    fn id(&self) -> EntryId;

    /// Current display name.
    fn name(&self) -> &str;

    /// Replaces the display name and refreshes derived fields.
    ///
    /// # Contract
    /// - Called by the store during add normalization and edit commit.
    /// - Direct field updates never rename; see
    ///   `PreferenceList::update_with`.
    fn apply_name(&mut self, name: String);
}
