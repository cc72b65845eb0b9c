use crate::server::{AppState, UrlParams};
use axum::extract::State;
use axum::response::Redirect;
use axum::Form;
use tracing::{error, info};

/// Remove the link at `url`. Unknown URLs are a no-op.
pub async fn delete_link(State(state): State<AppState>, Form(params): Form<UrlParams>) -> Redirect {
    match state.store.remove(&params.url).await {
        Ok(Some(_)) => info!(url = %params.url, "Deleted link"),
        Ok(None) => info!(url = %params.url, "Delete requested for unknown link"),
        Err(e) => error!(url = %params.url, "Failed to save links after delete: {e}"),
    }
    Redirect::to(&state.service_url)
}
