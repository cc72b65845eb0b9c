use crate::search::SearchQuery;
use crate::server::{AppState, HandlerError, SearchParams};
use crate::template::ListContext;
use axum::extract::{Query, State};
use axum::response::Html;
use tracing::debug;

/// `GET /search?terms=...` or `GET /search?tag=...`.
pub async fn search_links(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Result<Html<String>, HandlerError> {
    let query = SearchQuery::from_params(params.tag.as_deref(), params.terms.as_deref());
    let links = state.store.search(&query).await;
    debug!(?query, matches = links.len(), "Search");

    let heading = match &query {
        SearchQuery::Terms(terms) if !terms.is_empty() => format!("Search: {}", terms.join(" ")),
        SearchQuery::Tag(tag) => format!("Tag: {tag}"),
        SearchQuery::Terms(_) | SearchQuery::Empty => "Search".to_string(),
    };
    let context = ListContext::new(&state.title, &state.service_url, &links)
        .with_search(query.describe(), heading);
    Ok(Html(state.templates.render_list(&context)?))
}
