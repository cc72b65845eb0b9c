use super::SearchQuery;
use crate::link::Link;

/// True if any term is a case-sensitive substring of the URL, the notes,
/// or any one tag.
#[must_use]
pub fn matches_terms(link: &Link, terms: &[String]) -> bool {
    terms.iter().any(|term| {
        link.url.contains(term.as_str())
            || link.notes.contains(term.as_str())
            || link.tags.iter().any(|tag| tag.contains(term.as_str()))
    })
}

/// True if `tag` equals one of the link's tags exactly.
#[must_use]
pub fn matches_tag(link: &Link, tag: &str) -> bool {
    link.tags.iter().any(|t| t == tag)
}

/// Filter `links` by `query`, keeping their order. An empty query matches nothing.
#[must_use]
pub fn search(links: &[Link], query: &SearchQuery) -> Vec<Link> {
    match query {
        SearchQuery::Terms(terms) => links
            .iter()
            .filter(|link| matches_terms(link, terms))
            .cloned()
            .collect(),
        SearchQuery::Tag(tag) => links
            .iter()
            .filter(|link| matches_tag(link, tag))
            .cloned()
            .collect(),
        SearchQuery::Empty => Vec::new(),
    }
}
