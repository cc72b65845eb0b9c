use super::store_and_redirect;
use crate::server::{AppState, HandlerError, LinkForm, UrlParams};
use crate::template::EditContext;
use axum::extract::{Query, State};
use axum::response::{Html, Redirect};
use axum::Form;

/// Render the edit form prefilled from the stored link, if any.
pub async fn edit_form(
    State(state): State<AppState>,
    Query(params): Query<UrlParams>,
) -> Result<Html<String>, HandlerError> {
    let existing = state.store.get(&params.url).await;
    let context = EditContext::new(
        &state.title,
        &state.service_url,
        &params.url,
        existing.as_ref(),
    );
    Ok(Html(state.templates.render_edit(&context)?))
}

/// Overwrite the link at the submitted URL. The timestamp is reset to now.
pub async fn edit_link(State(state): State<AppState>, Form(form): Form<LinkForm>) -> Redirect {
    store_and_redirect(&state, form.into_link(), "Edited").await
}
