//! HTTP surface: routing, shared state and request handlers.

mod error;
mod forms;
mod handlers;
mod state;
mod trace;

pub use error::HandlerError;
pub use forms::{LinkForm, SearchParams, UrlParams};
pub use state::AppState;

use crate::auth::require_basic_auth;
use axum::routing::{get, post};
use axum::{middleware, Router};
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

/// Build the router. Routes that change links require Basic authentication.
pub fn router(state: AppState) -> Router {
    let protected = Router::new()
        .route("/add", get(handlers::add_form).post(handlers::add_link))
        .route("/addLink", get(handlers::add_form).post(handlers::add_link))
        .route("/edit", get(handlers::edit_form).post(handlers::edit_link))
        .route("/delete", post(handlers::delete_link))
        .route_layer(middleware::from_fn_with_state(
            Arc::clone(&state.credentials),
            require_basic_auth,
        ));

    Router::new()
        .route("/", get(handlers::list_links))
        .route("/listLinks", get(handlers::list_links))
        .route("/search", get(handlers::search_links))
        .merge(protected)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(trace::make_span)
                .on_response(trace::on_response),
        )
        .with_state(state)
}

/// Serve until Ctrl-C.
pub async fn serve(listener: TcpListener, state: AppState) -> std::io::Result<()> {
    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Received shutdown signal, stopping server..."),
        Err(e) => {
            warn!("Failed to listen for Ctrl-C, running until killed: {e}");
            std::future::pending::<()>().await;
        }
    }
}
