use serde::{Deserialize, Serialize};

/// A free-text list field as the admin forms send it.
///
/// Accepts either a comma-separated string (`"React, Node.js"`) or a JSON
/// array; both normalize to the same trimmed, ordered sequence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged, expecting = "a comma-separated string or an array of strings")]
pub enum ListInput {
    Items(Vec<String>),
    Csv(String),
}

impl Default for ListInput {
    fn default() -> Self {
        ListInput::Items(Vec::new())
    }
}

impl ListInput {
    /// Trims every entry and drops empty ones. Never fails: an empty string
    /// is an empty list.
    pub fn normalize(self) -> Vec<String> {
        match self {
            ListInput::Csv(raw) => split_csv(&raw),
            ListInput::Items(items) => items
                .iter()
                .map(|item| item.trim())
                .filter(|item| !item.is_empty())
                .map(str::to_string)
                .collect(),
        }
    }
}

impl From<&str> for ListInput {
    fn from(raw: &str) -> Self {
        ListInput::Csv(raw.to_string())
    }
}

impl From<Vec<String>> for ListInput {
    fn from(items: Vec<String>) -> Self {
        ListInput::Items(items)
    }
}

pub fn split_csv(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|segment| !segment.is_empty())
        .map(str::to_string)
        .collect()
}
