//! In-memory preference-list stores and inline edit sessions.
//!
//! # Responsibility
//! - Provide the ordered, uniquely-named entry store shared by the
//!   favorites, dislikes and allergies lists.
//! - Provide the single-active-edit draft machine per list.
//!
//! # Invariants
//! - Entry names are unique case-insensitively within one list.
//! - Renames happen only through edit-session commits.

pub mod edit;
pub mod list;
