use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A bookmarked URL with its labels and annotation.
///
/// The aliases accept files written with capitalised field names.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Link {
    #[serde(rename = "link", alias = "URL", alias = "url")]
    pub url: String,
    #[serde(default, alias = "Tags")]
    pub tags: Vec<String>,
    #[serde(default, alias = "Notes")]
    pub notes: String,
    #[serde(default, alias = "Timestamp")]
    pub timestamp: DateTime<Utc>,
}

impl Link {
    /// Create a link captured now.
    #[must_use]
    pub fn new(url: impl Into<String>, tags: Vec<String>, notes: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            tags,
            notes: notes.into(),
            timestamp: Utc::now(),
        }
    }

    /// Tags joined back into the comma-separated form used by the edit form.
    #[must_use]
    pub fn tag_string(&self) -> String {
        self.tags.join(",")
    }
}

/// Split a comma-separated tag field. No trimming, filtering or deduplication.
#[must_use]
pub fn parse_tags(input: &str) -> Vec<String> {
    input.split(',').map(str::to_string).collect()
}

#[cfg(test)]
#[path = "types_tests.rs"]
mod tests;
