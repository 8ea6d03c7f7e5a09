//! Form aggregate composing the patient's preference stores.
//!
//! # Responsibility
//! - Own the three preference lists, the bounded instructions and the
//!   patient name as one editable record.
//! - Notify the host synchronously after every mutation and run the
//!   guarded submit flow.
//!
//! # Invariants
//! - Change notifications carry the full current snapshot.
//! - At most one submit is in flight; the flag resets whether or not
//!   the save succeeds.
//! - Log events are metadata-only; patient names and free text never
//!   reach the log.

use crate::model::allergy::AllergyIntolerance;
use crate::model::dislike::DislikedFood;
use crate::model::food::FoodItem;
use crate::model::instructions::SpecialInstructions;
use crate::model::preferences::PatientMealPreferences;
use crate::store::list::PreferenceList;
use log::{info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Failure reported by the host's save operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SaveError {
    pub message: String,
}

impl SaveError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl Display for SaveError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "save failed: {}", self.message)
    }
}

impl Error for SaveError {}

/// Error for rejected form submissions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormError {
    /// The trimmed patient name is empty; submission requires it.
    MissingPatientName,
    /// A submit is already in flight for this form instance.
    SubmitInProgress,
    /// The host's save operation failed.
    SaveFailed(SaveError),
}

impl Display for FormError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingPatientName => write!(f, "patient name is required"),
            Self::SubmitInProgress => write!(f, "a submit is already in progress"),
            Self::SaveFailed(err) => write!(f, "{err}"),
        }
    }
}

impl Error for FormError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::SaveFailed(err) => Some(err),
            _ => None,
        }
    }
}

impl From<SaveError> for FormError {
    fn from(value: SaveError) -> Self {
        Self::SaveFailed(value)
    }
}

/// Host-side observer and save seam for one form instance.
///
/// The form owns its host exclusively; data flows one direction, from
/// the form to the host, through these callbacks.
pub trait FormHost {
    /// Fired synchronously after every mutation with the full snapshot.
    fn preferences_changed(&mut self, _current: &PatientMealPreferences) {}

    /// Performs the external save during submit.
    fn save(&mut self, data: &PatientMealPreferences) -> Result<(), SaveError>;

    /// Fired once per successful submit with the final snapshot.
    fn preferences_submitted(&mut self, _data: &PatientMealPreferences) {}
}

/// Editable meal-preference form for one patient.
pub struct MealPreferencesForm<H: FormHost> {
    host: H,
    patient_name: String,
    favorites: PreferenceList<FoodItem>,
    dislikes: PreferenceList<DislikedFood>,
    allergies: PreferenceList<AllergyIntolerance>,
    instructions: SpecialInstructions,
    submitting: bool,
}

impl<H: FormHost> MealPreferencesForm<H> {
    /// Creates an empty form owned by `host`.
    pub fn new(host: H) -> Self {
        Self {
            host,
            patient_name: String::new(),
            favorites: PreferenceList::new(),
            dislikes: PreferenceList::new(),
            allergies: PreferenceList::new(),
            instructions: SpecialInstructions::new(),
            submitting: false,
        }
    }

    /// Creates a form pre-populated from a host-supplied record.
    ///
    /// Seed instructions are clamped to the length ceiling; list entries
    /// pass through store normalization (trim + derived-field refresh).
    pub fn with_seed(host: H, seed: PatientMealPreferences) -> Self {
        let form = Self {
            host,
            patient_name: seed.patient_name,
            favorites: PreferenceList::from_entries(seed.favorite_foods),
            dislikes: PreferenceList::from_entries(seed.disliked_foods),
            allergies: PreferenceList::from_entries(seed.allergies_intolerances),
            instructions: SpecialInstructions::clamped(seed.special_instructions),
            submitting: false,
        };
        info!(
            "event=form_seeded module=form status=ok favorites={} dislikes={} allergies={} instruction_chars={}",
            form.favorites.len(),
            form.dislikes.len(),
            form.allergies.len(),
            form.instructions.char_count()
        );
        form
    }

    pub fn patient_name(&self) -> &str {
        &self.patient_name
    }

    pub fn instructions(&self) -> &SpecialInstructions {
        &self.instructions
    }

    pub fn favorites(&self) -> &PreferenceList<FoodItem> {
        &self.favorites
    }

    pub fn dislikes(&self) -> &PreferenceList<DislikedFood> {
        &self.dislikes
    }

    pub fn allergies(&self) -> &PreferenceList<AllergyIntolerance> {
        &self.allergies
    }

    /// Whether a submit is currently in flight.
    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    /// Read access to the owning host.
    pub fn host(&self) -> &H {
        &self.host
    }

    /// Consumes the form and returns its host.
    pub fn into_host(self) -> H {
        self.host
    }

    /// Full current record as a plain value snapshot.
    pub fn snapshot(&self) -> PatientMealPreferences {
        PatientMealPreferences {
            patient_name: self.patient_name.clone(),
            favorite_foods: self.favorites.entries().to_vec(),
            disliked_foods: self.dislikes.entries().to_vec(),
            allergies_intolerances: self.allergies.entries().to_vec(),
            special_instructions: self.instructions.as_str().to_string(),
        }
    }

    /// Replaces the patient name and notifies the host.
    pub fn set_patient_name(&mut self, name: &str) {
        self.patient_name = name.to_string();
        self.notify_changed();
    }

    /// Replaces the special instructions.
    ///
    /// Over-limit text is refused without mutation or notification;
    /// returns whether the replacement was applied.
    pub fn set_special_instructions(&mut self, text: &str) -> bool {
        if !self.instructions.replace(text) {
            return false;
        }
        self.notify_changed();
        true
    }

    /// Appends one quick suggestion to the instructions.
    ///
    /// Silently refused (no mutation, no notification) when the result
    /// would exceed the ceiling; returns whether it was applied.
    pub fn append_instruction_suggestion(&mut self, suggestion: &str) -> bool {
        if !self.instructions.append_suggestion(suggestion) {
            return false;
        }
        self.notify_changed();
        true
    }

    /// Runs list operations against the favorites store, then notifies.
    pub fn with_favorites<R>(&mut self, f: impl FnOnce(&mut PreferenceList<FoodItem>) -> R) -> R {
        let out = f(&mut self.favorites);
        self.notify_changed();
        out
    }

    /// Runs list operations against the dislikes store, then notifies.
    pub fn with_dislikes<R>(
        &mut self,
        f: impl FnOnce(&mut PreferenceList<DislikedFood>) -> R,
    ) -> R {
        let out = f(&mut self.dislikes);
        self.notify_changed();
        out
    }

    /// Runs list operations against the allergies store, then notifies.
    pub fn with_allergies<R>(
        &mut self,
        f: impl FnOnce(&mut PreferenceList<AllergyIntolerance>) -> R,
    ) -> R {
        let out = f(&mut self.allergies);
        self.notify_changed();
        out
    }

    /// Submits the form through the host's save operation.
    ///
    /// # Contract
    /// - Rejected with `SubmitInProgress` while a submit is in flight.
    /// - Rejected with `MissingPatientName` when the trimmed patient
    ///   name is empty; no sub-store validation happens at submit time.
    /// - Otherwise sets the submitting flag, calls `host.save`, clears
    ///   the flag regardless of outcome, and forwards
    ///   `preferences_submitted` only on success.
    pub fn submit(&mut self) -> Result<(), FormError> {
        if self.submitting {
            warn!("event=form_submit module=form status=rejected reason=submit_in_progress");
            return Err(FormError::SubmitInProgress);
        }
        if self.patient_name.trim().is_empty() {
            warn!("event=form_submit module=form status=rejected reason=missing_patient_name");
            return Err(FormError::MissingPatientName);
        }

        self.submitting = true;
        let snapshot = self.snapshot();
        let saved = self.host.save(&snapshot);
        self.submitting = false;

        match saved {
            Ok(()) => {
                info!(
                    "event=form_submit module=form status=ok favorites={} dislikes={} allergies={} instruction_chars={}",
                    snapshot.favorite_foods.len(),
                    snapshot.disliked_foods.len(),
                    snapshot.allergies_intolerances.len(),
                    self.instructions.char_count()
                );
                self.host.preferences_submitted(&snapshot);
                Ok(())
            }
            Err(err) => {
                warn!(
                    "event=form_submit module=form status=error error={}",
                    err.message
                );
                Err(FormError::SaveFailed(err))
            }
        }
    }

    fn notify_changed(&mut self) {
        let snapshot = self.snapshot();
        self.host.preferences_changed(&snapshot);
    }
}
