//! API route configuration.

use crate::api::handlers::{create_link_handler, resolve_link_handler, upload_files_handler};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// All `/api` routes.
///
/// # Endpoints
///
/// - `POST /id`              - Create a short link
/// - `GET  /id/{short_id}`   - Resolve a short link to its original URL
/// - `POST /files`           - Upload files to the Disk and shorten each
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/id", post(create_link_handler))
        .route("/id/{short_id}", get(resolve_link_handler))
        .route("/files", post(upload_files_handler))
}
