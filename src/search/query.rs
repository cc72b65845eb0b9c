/// What a `/search` request asks for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchQuery {
    /// Any term appearing anywhere in the URL, notes or a tag. No terms match nothing.
    Terms(Vec<String>),
    /// One tag, matched exactly.
    Tag(String),
    /// Neither parameter was given.
    Empty,
}

impl SearchQuery {
    /// Build a query from the raw `tag` and `terms` parameters.
    ///
    /// Non-empty `terms` wins over `tag`, even when it is only whitespace.
    /// Terms are split on whitespace, so a blank `terms` matches nothing.
    #[must_use]
    pub fn from_params(tag: Option<&str>, terms: Option<&str>) -> Self {
        if let Some(terms) = terms.filter(|t| !t.is_empty()) {
            return Self::Terms(terms.split_whitespace().map(str::to_string).collect());
        }
        match tag.filter(|t| !t.is_empty()) {
            Some(tag) => Self::Tag(tag.to_string()),
            None => Self::Empty,
        }
    }

    /// Text to echo back into the search box.
    #[must_use]
    pub fn describe(&self) -> String {
        match self {
            Self::Terms(terms) => terms.join(" "),
            Self::Tag(tag) => tag.clone(),
            Self::Empty => String::new(),
        }
    }
}
