use super::store_and_redirect;
use crate::server::{AppState, HandlerError, LinkForm};
use crate::template::AddContext;
use axum::extract::State;
use axum::response::{Html, Redirect};
use axum::Form;

pub async fn add_form(State(state): State<AppState>) -> Result<Html<String>, HandlerError> {
    let context = AddContext {
        title: state.title.clone(),
        service_home: state.service_url.clone(),
    };
    Ok(Html(state.templates.render_add(&context)?))
}

/// Store the submitted link, replacing any link with the same URL.
pub async fn add_link(State(state): State<AppState>, Form(form): Form<LinkForm>) -> Redirect {
    store_and_redirect(&state, form.into_link(), "Added").await
}
