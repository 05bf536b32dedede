pub use validator::{Validate, ValidationError, ValidationErrors};

/// The required fields of a guess, read from the form before it is posted.
#[derive(Debug, Clone, PartialEq, Validate)]
pub struct GuessSubmission {
    #[validate(custom = "validate_present")]
    pub puzzle: String,
    #[validate(custom = "validate_present")]
    pub guess: String,
}

impl GuessSubmission {
    pub fn new(puzzle: impl Into<String>, guess: impl Into<String>) -> Self {
        Self {
            puzzle: puzzle.into(),
            guess: guess.into(),
        }
    }
}

/// Matches the `required` attribute: only an empty value is missing.
pub fn validate_present(value: &str) -> Result<(), ValidationError> {
    if value.is_empty() {
        return Err(ValidationError::new("missing"));
    }
    Ok(())
}
