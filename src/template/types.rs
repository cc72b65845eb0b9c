use crate::link::Link;
use serde::Serialize;
use url::{form_urlencoded, ParseError, Url};

/// The pages the service renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    List,
    Add,
    Edit,
}

impl Page {
    pub const ALL: [Self; 3] = [Self::List, Self::Add, Self::Edit];

    /// Name the template is registered under.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::List => "list",
            Self::Add => "add",
            Self::Edit => "edit",
        }
    }

    /// File looked up in a templates override directory.
    #[must_use]
    pub fn file_name(self) -> String {
        format!("{}.hbs", self.name())
    }
}

fn encode(value: &str) -> String {
    form_urlencoded::byte_serialize(value.as_bytes()).collect()
}

/// Schemes a stored link may point at from the listing.
const SAFE_SCHEMES: [&str; 3] = ["http", "https", "mailto"];

/// The stored URL if it is safe to follow, `#` otherwise.
///
/// Relative URLs are kept; absolute ones must use one of [`SAFE_SCHEMES`].
fn safe_href(raw: &str) -> String {
    let safe = match Url::parse(raw) {
        Ok(url) => SAFE_SCHEMES.contains(&url.scheme()),
        Err(e) => e == ParseError::RelativeUrlWithoutBase,
    };
    if safe {
        raw.to_string()
    } else {
        "#".to_string()
    }
}

/// A tag and the search URL that lists everything carrying it.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct TagView {
    pub name: String,
    pub href: String,
}

/// A link prepared for display.
/// Placeholders: {{url}}, {{href}}, {{`edit_href`}}, {{tags}}, {{`tags_text`}}, {{notes}}, {{timestamp}}, {{captured}}
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct LinkView {
    pub url: String,
    /// `url` when its scheme is safe to follow, `#` otherwise.
    pub href: String,
    pub edit_href: String,
    pub tags: Vec<TagView>,
    pub tags_text: String,
    pub notes: String,
    pub timestamp: String,
    pub captured: String,
}

impl From<&Link> for LinkView {
    fn from(link: &Link) -> Self {
        Self {
            url: link.url.clone(),
            href: safe_href(&link.url),
            edit_href: format!("/edit?url={}", encode(&link.url)),
            tags: link
                .tags
                .iter()
                .filter(|tag| !tag.is_empty())
                .map(|tag| TagView {
                    name: tag.clone(),
                    href: format!("/search?tag={}", encode(tag)),
                })
                .collect(),
            tags_text: link.tag_string(),
            notes: link.notes.clone(),
            timestamp: link.timestamp.to_rfc3339(),
            captured: link.timestamp.format("%Y-%m-%d %H:%M").to_string(),
        }
    }
}

/// Context for the listing and search results page.
#[derive(Debug, Clone, Serialize)]
pub struct ListContext {
    pub title: String,
    pub service_home: String,
    /// Text echoed back into the search box.
    pub query: String,
    /// Shown above the table for search results.
    pub heading: Option<String>,
    pub count: usize,
    pub links: Vec<LinkView>,
}

impl ListContext {
    #[must_use]
    pub fn new(title: &str, service_home: &str, links: &[Link]) -> Self {
        Self {
            title: title.to_string(),
            service_home: service_home.to_string(),
            query: String::new(),
            heading: None,
            count: links.len(),
            links: links.iter().map(LinkView::from).collect(),
        }
    }

    #[must_use]
    pub fn with_search(mut self, query: String, heading: String) -> Self {
        self.query = query;
        self.heading = Some(heading);
        self
    }
}

/// Context for the empty add form.
#[derive(Debug, Clone, Serialize)]
pub struct AddContext {
    pub title: String,
    pub service_home: String,
}

/// Context for the edit form, prefilled from the stored link.
/// Placeholders: {{url}}, {{`tag_string`}}, {{notes}}
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct EditContext {
    pub title: String,
    pub service_home: String,
    pub url: String,
    pub tag_string: String,
    pub notes: String,
}

impl EditContext {
    /// Prefill from `link`, or leave everything but the URL blank when the
    /// URL is not stored.
    #[must_use]
    pub fn new(title: &str, service_home: &str, url: &str, link: Option<&Link>) -> Self {
        Self {
            title: title.to_string(),
            service_home: service_home.to_string(),
            url: link.map_or_else(|| url.to_string(), |l| l.url.clone()),
            tag_string: link.map(Link::tag_string).unwrap_or_default(),
            notes: link.map(|l| l.notes.clone()).unwrap_or_default(),
        }
    }
}

#[cfg(test)]
#[path = "types_tests.rs"]
mod tests;
