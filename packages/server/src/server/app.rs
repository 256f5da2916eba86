//! Application setup and server configuration.

use axum::{routing::get, Router};
use tower_http::trace::TraceLayer;

use crate::domains::media_bridge::{self, WebhookState};
use crate::kernel::ServerDeps;
use crate::server::routes::health_handler;

/// Build the Axum application router
///
/// `deps` is built once at startup; every request shares it read-only.
pub fn build_app(deps: ServerDeps) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .merge(media_bridge::router(WebhookState { deps }))
        .layer(TraceLayer::new_for_http())
}
