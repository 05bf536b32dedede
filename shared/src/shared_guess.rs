use chrono::Timelike;
use serde::{Deserialize, Serialize};

use crate::constants::UNLOCK_TAG;

/// Outcome reported by the guess endpoint. Values the client does not know
/// about are kept verbatim so they can be reported.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(from = "String", into = "String")]
pub enum GuessResult {
    Correct,
    Incorrect,
    Unlock,
    Other(String),
}

impl From<String> for GuessResult {
    fn from(value: String) -> Self {
        match value.as_str() {
            "correct" => GuessResult::Correct,
            "incorrect" => GuessResult::Incorrect,
            "unlock" => GuessResult::Unlock,
            _ => GuessResult::Other(value),
        }
    }
}

impl From<GuessResult> for String {
    fn from(result: GuessResult) -> Self {
        match result {
            GuessResult::Correct => "correct".to_string(),
            GuessResult::Incorrect => "incorrect".to_string(),
            GuessResult::Unlock => "unlock".to_string(),
            GuessResult::Other(value) => value,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct GuessResponse {
    pub guess: String,
    pub result: GuessResult,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unlock: Option<String>,
    // Sent by some server revisions, not rendered.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub puzzle: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub replacement: Option<String>,
}

/// Visual state of the guess form after a recognised result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMark {
    Correct,
    Error,
}

/// The DOM changes a recognised result calls for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuessOutcome {
    pub mark: Option<FormMark>,
    pub guess_line: String,
    pub unlock_line: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuessVerdict {
    Recorded(GuessOutcome),
    Unrecognized(String),
}

/// Formats a wall-clock time as `HH:MM`, both fields zero-padded.
pub fn format_clock<T: Timelike>(at: &T) -> String {
    format!("{:02}:{:02}", at.hour(), at.minute())
}

impl GuessResponse {
    pub fn verdict<T: Timelike>(&self, submitted_at: &T) -> GuessVerdict {
        let stamp = format_clock(submitted_at);
        let line = format!("{} - {}", stamp, self.guess);

        match &self.result {
            GuessResult::Correct => GuessVerdict::Recorded(GuessOutcome {
                mark: Some(FormMark::Correct),
                guess_line: line,
                unlock_line: None,
            }),
            GuessResult::Incorrect => GuessVerdict::Recorded(GuessOutcome {
                mark: Some(FormMark::Error),
                guess_line: line,
                unlock_line: None,
            }),
            GuessResult::Unlock => {
                let unlock = match &self.unlock {
                    Some(unlock) => unlock.as_str(),
                    None => {
                        log::warn!("Unlock result for guess {:?} carried no unlock text", self.guess);
                        ""
                    }
                };
                GuessVerdict::Recorded(GuessOutcome {
                    mark: None,
                    guess_line: format!("{} {}", line, UNLOCK_TAG),
                    unlock_line: Some(format!("{} => {}", line, unlock)),
                })
            }
            GuessResult::Other(value) => GuessVerdict::Unrecognized(value.clone()),
        }
    }
}
