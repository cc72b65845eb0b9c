//! Request logging hooks for `tower_http::trace::TraceLayer`.
//!
//! Events are emitted from this crate so the default `linkstash=<level>`
//! filter lets them through.

use axum::extract::Request;
use axum::response::Response;
use std::time::Duration;
use tracing::{info, info_span, Span};

/// One span per request carrying its method and path.
#[must_use]
pub fn make_span(request: &Request) -> Span {
    info_span!(
        "http",
        http.method = %request.method(),
        http.path = %request.uri().path(),
    )
}

/// Log the status and latency once the response is ready.
pub fn on_response(response: &Response, latency: Duration, _span: &Span) {
    info!(
        http.status = response.status().as_u16(),
        duration_ms = latency.as_millis(),
        "HTTP request completed"
    );
}
