use crate::link::{parse_tags, Link};
use serde::Deserialize;

/// Fields submitted by the add and edit forms.
///
/// The add form names the address `link`, the edit form `url`. A non-empty
/// `link` wins when both are sent.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LinkForm {
    #[serde(default)]
    pub link: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub tags: String,
    #[serde(default)]
    pub notes: String,
}

impl LinkForm {
    /// The submitted address, from `link` or else `url`.
    #[must_use]
    pub fn address(&self) -> &str {
        self.link
            .as_deref()
            .filter(|link| !link.is_empty())
            .or(self.url.as_deref())
            .unwrap_or_default()
    }

    /// A fresh link captured now; tags split on commas.
    #[must_use]
    pub fn into_link(self) -> Link {
        let url = self.address().to_string();
        Link::new(url, parse_tags(&self.tags), self.notes)
    }
}

/// A lone `url` parameter (edit form prefill, delete).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UrlParams {
    #[serde(default)]
    pub url: String,
}

/// `/search` query parameters.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchParams {
    pub tag: Option<String>,
    pub terms: Option<String>,
}

#[cfg(test)]
#[path = "forms_tests.rs"]
mod tests;
