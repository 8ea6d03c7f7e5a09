//! Ordered in-memory store for named preference entries.
//!
//! # Responsibility
//! - Hold entries in insertion order (insertion order = display order).
//! - Enforce case-insensitive name uniqueness on every write path.
//!
//! # Invariants
//! - `add` and `commit_edit` are the only paths that set entry names.
//! - A rejected mutation leaves the store byte-for-byte unchanged.

use crate::model::entry::{EntryId, PreferenceEntry};
use crate::store::edit::EditState;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type PreferenceResult<T> = Result<T, PreferenceError>;

/// Error for rejected preference-list mutations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PreferenceError {
    /// Another entry already uses this name (case-insensitive).
    DuplicateName(String),
}

impl Display for PreferenceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DuplicateName(name) => write!(f, "entry is already in the list: `{name}`"),
        }
    }
}

impl Error for PreferenceError {}

/// Ordered store for one category of preference entries.
///
/// Shared by the favorites, dislikes and allergies lists through the
/// [`PreferenceEntry`] trait. Each list instance also owns its inline
/// edit session; see the `edit` module for the session operations.
#[derive(Debug, Clone)]
pub struct PreferenceList<T: PreferenceEntry> {
    entries: Vec<T>,
    pub(crate) edit: EditState<T>,
}

impl<T: PreferenceEntry> Default for PreferenceList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: PreferenceEntry> PreferenceList<T> {
    /// Creates an empty list.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            edit: EditState::Idle,
        }
    }

    /// Creates a list from host-seeded entries.
    ///
    /// Seed names are trimmed and derived fields re-derived, so the
    /// store's invariants hold regardless of how the seed was produced.
    /// Seed entries are trusted to carry unique names and ids.
    pub fn from_entries(mut seed: Vec<T>) -> Self {
        for entry in &mut seed {
            let trimmed = entry.name().trim().to_string();
            entry.apply_name(trimmed);
        }
        Self {
            entries: seed,
            edit: EditState::Idle,
        }
    }

    /// Entries in display order.
    pub fn entries(&self) -> &[T] {
        &self.entries
    }

    /// Looks up one entry by id.
    pub fn get(&self, id: EntryId) -> Option<&T> {
        self.entries.iter().find(|entry| entry.id() == id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Appends a new entry after normalizing and validating its name.
    ///
    /// # Contract
    /// - The name is trimmed before any check.
    /// - A blank trimmed name is a silent no-op: `Ok(None)`.
    /// - A case-insensitive collision with an existing entry is rejected
    ///   with `DuplicateName` and the store is left unchanged.
    /// - Otherwise the entry is appended and its id returned.
    pub fn add(&mut self, mut entry: T) -> PreferenceResult<Option<EntryId>> {
        let trimmed = entry.name().trim().to_string();
        if trimmed.is_empty() {
            return Ok(None);
        }
        if self.name_taken(&trimmed, None) {
            return Err(PreferenceError::DuplicateName(trimmed));
        }

        entry.apply_name(trimmed);
        let id = entry.id();
        self.entries.push(entry);
        Ok(Some(id))
    }

    /// Removes the entry with a matching id.
    ///
    /// Absent ids are a silent no-op, making removal idempotent. An
    /// active edit session targeting the removed entry is discarded.
    pub fn remove(&mut self, id: EntryId) {
        self.entries.retain(|entry| entry.id() != id);
        if self.editing_id() == Some(id) {
            self.edit = EditState::Idle;
        }
    }

    /// Mutates one entry's directly-updatable fields in place.
    ///
    /// Position and id are preserved. The entry's name is restored if
    /// the closure changed it: renames go through the edit session so
    /// they cannot bypass duplicate validation. Returns `false` when the
    /// id is absent.
    pub fn update_with(&mut self, id: EntryId, mutate: impl FnOnce(&mut T)) -> bool {
        let Some(entry) = self.entries.iter_mut().find(|entry| entry.id() == id) else {
            return false;
        };

        let name_before = entry.name().to_string();
        mutate(entry);
        if entry.name() != name_before {
            entry.apply_name(name_before);
        }
        true
    }

    /// Mutable slot access for edit-session commits.
    pub(crate) fn entries_mut(&mut self) -> &mut [T] {
        &mut self.entries
    }

    /// Whether `name` collides case-insensitively with a stored entry,
    /// optionally ignoring one id (the entry being edited).
    pub(crate) fn name_taken(&self, name: &str, excluding: Option<EntryId>) -> bool {
        let needle = name.to_lowercase();
        self.entries
            .iter()
            .filter(|entry| Some(entry.id()) != excluding)
            .any(|entry| entry.name().to_lowercase() == needle)
    }
}
