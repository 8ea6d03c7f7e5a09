//! Inline edit session for one preference list.
//!
//! # Responsibility
//! - Track at most one in-progress entry edit per list.
//! - Keep draft mutations isolated from committed entries until commit.
//!
//! # Invariants
//! - Starting a new edit implicitly discards any active draft.
//! - A rejected commit keeps the draft and the session open.
//! - Cancel and failed commits leave committed entries untouched.
//!
//! Hosts map the enter key to [`PreferenceList::commit_edit`] and
//! escape to [`PreferenceList::cancel_edit`] while a draft is active.

use crate::model::entry::{EntryId, PreferenceEntry};
use crate::store::list::{PreferenceError, PreferenceList, PreferenceResult};

/// Explicit edit-session state carried by each list.
///
/// The draft is a full clone of the target entry, so its id rides along
/// unchanged and every mutable field can be staged before commit.
#[derive(Debug, Clone)]
pub enum EditState<T> {
    /// No entry is being edited.
    Idle,
    /// One entry is being edited through a draft copy.
    Editing { draft: T },
}

impl<T: PreferenceEntry> PreferenceList<T> {
    /// Starts editing the entry with a matching id.
    ///
    /// Snapshots the entry's current fields into a draft. Any previously
    /// active session is implicitly discarded (last start wins). Returns
    /// `false` and stays `Idle` when the id is absent.
    pub fn start_edit(&mut self, id: EntryId) -> bool {
        match self.get(id) {
            Some(entry) => {
                self.edit = EditState::Editing {
                    draft: entry.clone(),
                };
                true
            }
            None => {
                self.edit = EditState::Idle;
                false
            }
        }
    }

    /// Id of the entry being edited, if a session is active.
    pub fn editing_id(&self) -> Option<EntryId> {
        match &self.edit {
            EditState::Editing { draft } => Some(draft.id()),
            EditState::Idle => None,
        }
    }

    /// Read access to the active draft.
    pub fn draft(&self) -> Option<&T> {
        match &self.edit {
            EditState::Editing { draft } => Some(draft),
            EditState::Idle => None,
        }
    }

    /// Write access to the active draft's fields.
    ///
    /// Draft mutations never touch the committed entry; they become
    /// visible only through a successful [`commit_edit`].
    ///
    /// [`commit_edit`]: PreferenceList::commit_edit
    pub fn draft_mut(&mut self) -> Option<&mut T> {
        match &mut self.edit {
            EditState::Editing { draft } => Some(draft),
            EditState::Idle => None,
        }
    }

    /// Replaces the draft name. No-op while `Idle`; returns `false` then.
    pub fn update_draft_name(&mut self, name: &str) -> bool {
        match self.draft_mut() {
            Some(draft) => {
                draft.apply_name(name.to_string());
                true
            }
            None => false,
        }
    }

    /// Commits the active draft back onto its entry.
    ///
    /// # Contract
    /// - `Ok(true)`: all draft fields written back onto the committed
    ///   entry (same id, same position), session `Idle`. The draft name
    ///   is trimmed on the way in.
    /// - `Ok(false)`: nothing committed. Either no session was active,
    ///   the trimmed draft name is blank (session stays open for
    ///   correction), or the target entry was removed mid-session (the
    ///   stale draft is discarded).
    /// - `Err(DuplicateName)`: the trimmed name collides with another
    ///   entry. The draft is retained and the session stays open;
    ///   keeping the entry's own name is always allowed.
    pub fn commit_edit(&mut self) -> PreferenceResult<bool> {
        let EditState::Editing { draft } = &self.edit else {
            return Ok(false);
        };

        let trimmed = draft.name().trim().to_string();
        if trimmed.is_empty() {
            return Ok(false);
        }
        if self.name_taken(&trimmed, Some(draft.id())) {
            return Err(PreferenceError::DuplicateName(trimmed));
        }

        let mut committed = draft.clone();
        committed.apply_name(trimmed);
        let id = committed.id();
        let replaced = self.update_slot(id, committed);
        self.edit = EditState::Idle;
        Ok(replaced)
    }

    /// Discards the active draft and commits nothing.
    pub fn cancel_edit(&mut self) {
        self.edit = EditState::Idle;
    }

    fn update_slot(&mut self, id: EntryId, committed: T) -> bool {
        for slot in self.entries_mut() {
            if slot.id() == id {
                *slot = committed;
                return true;
            }
        }
        false
    }
}
