//! Brute-force search over links.
//!
//! Both modes are linear scans; no index is kept.

mod evaluator;
mod query;

pub use evaluator::{matches_tag, matches_terms, search};
pub use query::SearchQuery;

#[cfg(test)]
#[path = "search_tests.rs"]
mod tests;
