use crate::server::{AppState, HandlerError};
use crate::template::ListContext;
use axum::extract::State;
use axum::response::Html;

/// `GET /` and `GET /listLinks`.
pub async fn list_links(State(state): State<AppState>) -> Result<Html<String>, HandlerError> {
    let links = state.store.snapshot().await;
    let context = ListContext::new(&state.title, &state.service_url, &links);
    Ok(Html(state.templates.render_list(&context)?))
}
