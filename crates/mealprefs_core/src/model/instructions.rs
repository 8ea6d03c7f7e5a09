//! Bounded free-text special instructions.
//!
//! # Responsibility
//! - Hold the patient's free-text dietary notes under the length ceiling.
//! - Provide bullet-style quick-suggestion appends.
//!
//! # Invariants
//! - The stored text never exceeds `MAX_CHARS` Unicode scalar values.
//! - Mutations that would exceed the ceiling are refused without change.

/// Fixed suggestion texts offered for one-click append.
pub const INSTRUCTION_SUGGESTIONS: [&str; 8] = [
    "Prefers food served warm",
    "Needs soft textures only",
    "Enjoys smaller, frequent meals",
    "Prefers familiar foods",
    "Cultural dietary preferences",
    "Religious dietary restrictions",
    "Liquid consistency needed",
    "Finger foods preferred",
];

const BULLET: &str = "\u{2022} ";

/// Free-text dietary notes bounded to 500 characters.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SpecialInstructions {
    text: String,
}

impl SpecialInstructions {
    /// Maximum stored length in Unicode scalar values.
    pub const MAX_CHARS: usize = 500;

    /// Creates empty instructions.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates instructions from seed text, truncating to the ceiling.
    ///
    /// Host-supplied seed data may be over-long; truncation keeps the
    /// length invariant without rejecting the whole seed.
    pub fn clamped(text: impl Into<String>) -> Self {
        let text: String = text.into();
        if text.chars().count() <= Self::MAX_CHARS {
            return Self { text };
        }
        Self {
            text: text.chars().take(Self::MAX_CHARS).collect(),
        }
    }

    /// Current text.
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Current length in Unicode scalar values.
    pub fn char_count(&self) -> usize {
        self.text.chars().count()
    }

    /// Whether the text is within 20% of the ceiling; used for meters.
    pub fn is_near_limit(&self) -> bool {
        self.char_count() > Self::MAX_CHARS * 4 / 5
    }

    /// Replaces the full text.
    ///
    /// Returns `false` and leaves the text unchanged when the replacement
    /// would exceed the ceiling.
    pub fn replace(&mut self, text: &str) -> bool {
        if text.chars().count() > Self::MAX_CHARS {
            return false;
        }
        self.text = text.to_string();
        true
    }

    /// Appends one suggestion as a bullet line.
    ///
    /// Empty text becomes `• suggestion`; otherwise `\n• suggestion` is
    /// appended. Returns `false` and changes nothing when the result
    /// would exceed the ceiling.
    pub fn append_suggestion(&mut self, suggestion: &str) -> bool {
        let appended = if self.text.is_empty() {
            format!("{BULLET}{suggestion}")
        } else {
            format!("{}\n{BULLET}{}", self.text, suggestion)
        };
        if appended.chars().count() > Self::MAX_CHARS {
            return false;
        }
        self.text = appended;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::{SpecialInstructions, INSTRUCTION_SUGGESTIONS};

    #[test]
    fn append_to_empty_uses_single_bullet_line() {
        let mut instructions = SpecialInstructions::new();
        assert!(instructions.append_suggestion(INSTRUCTION_SUGGESTIONS[0]));
        assert_eq!(
            instructions.as_str(),
            format!("\u{2022} {}", INSTRUCTION_SUGGESTIONS[0])
        );
    }

    #[test]
    fn append_to_existing_adds_newline_separator() {
        let mut instructions = SpecialInstructions::new();
        assert!(instructions.replace("No salt"));
        assert!(instructions.append_suggestion("Prefers familiar foods"));
        assert_eq!(
            instructions.as_str(),
            "No salt\n\u{2022} Prefers familiar foods"
        );
    }

    #[test]
    fn append_over_ceiling_is_silently_refused() {
        let mut instructions = SpecialInstructions::clamped("x".repeat(495));
        let before = instructions.as_str().to_string();
        assert!(!instructions.append_suggestion("too long to fit"));
        assert_eq!(instructions.as_str(), before);
    }

    #[test]
    fn append_exactly_at_ceiling_is_accepted() {
        // 496 chars + "\n• " (3 chars) + 1 char = 500.
        let mut instructions = SpecialInstructions::clamped("x".repeat(496));
        assert!(instructions.append_suggestion("y"));
        assert_eq!(instructions.char_count(), SpecialInstructions::MAX_CHARS);
    }

    #[test]
    fn replace_over_ceiling_is_refused() {
        let mut instructions = SpecialInstructions::new();
        assert!(!instructions.replace(&"x".repeat(501)));
        assert_eq!(instructions.as_str(), "");
    }

    #[test]
    fn clamped_truncates_over_long_seed_by_chars() {
        let seed = "\u{00e9}".repeat(600);
        let instructions = SpecialInstructions::clamped(seed);
        assert_eq!(instructions.char_count(), SpecialInstructions::MAX_CHARS);
    }

    #[test]
    fn near_limit_meter_trips_above_eighty_percent() {
        let mut instructions = SpecialInstructions::new();
        assert!(instructions.replace(&"x".repeat(400)));
        assert!(!instructions.is_near_limit());
        assert!(instructions.replace(&"x".repeat(401)));
        assert!(instructions.is_near_limit());
    }
}
