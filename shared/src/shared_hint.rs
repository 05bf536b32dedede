use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct HintRequest {
    pub puzzle: String,
    pub hint_requested: usize,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct HintResponse {
    pub hint_requested: usize,
    pub hint: String,
}

/// Confirmation text for revealing the hint at a zero-based index.
pub fn confirm_prompt(index: usize) -> String {
    format!("Are you sure you want to request hint {}?", index + 1)
}

/// Resolves an entry's hint index: an explicit attribute value wins when it
/// parses, otherwise the entry's position is used.
pub fn resolve_hint_index(attribute: Option<&str>, position: usize) -> usize {
    attribute
        .and_then(|value| value.trim().parse::<usize>().ok())
        .unwrap_or(position)
}
