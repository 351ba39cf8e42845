//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET  /{short_id}`  - Short link redirect
//! - `GET  /health`      - Health check
//! - `/api/*`            - JSON API
//!
//! Trailing slashes are normalized away, so `/api/id/` and `/api/id` hit
//! the same route.

use crate::api;
use crate::api::handlers::{health_handler, redirect_handler};
use crate::state::AppState;
use axum::routing::get;
use axum::Router;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};
use tower_http::trace::TraceLayer;

/// Constructs the application router with all routes and middleware.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    let router = Router::new()
        .route("/{short_id}", get(redirect_handler))
        .route("/health", get(health_handler))
        .nest("/api", api::routes::api_routes())
        .with_state(state)
        .layer(TraceLayer::new_for_http());

    NormalizePathLayer::trim_trailing_slash().layer(router)
}
