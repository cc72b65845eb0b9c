use super::CredentialStore;
use axum::extract::{Request, State};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use http::header::AUTHORIZATION;
use std::sync::Arc;
use tracing::{debug, warn};

/// Axum middleware rejecting requests without valid Basic credentials.
pub async fn require_basic_auth(
    State(credentials): State<Arc<CredentialStore>>,
    request: Request,
    next: Next,
) -> Response {
    match credentials.authenticate(request.headers().get(AUTHORIZATION)) {
        Ok(user) => {
            debug!(user = %user, path = %request.uri().path(), "Authenticated request");
            next.run(request).await
        }
        Err(e) => {
            warn!(
                user = e.username().unwrap_or("-"),
                path = %request.uri().path(),
                "Authentication failed: {e}"
            );
            e.into_response()
        }
    }
}
