//! Handlers for the short link API endpoints.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use validator::Validate;

use crate::api::dto::links::{CreateLinkRequest, CreateLinkResponse, ResolveLinkResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Creates a new short link.
///
/// # Endpoint
///
/// `POST /api/id`
///
/// # Request Body
///
/// ```json
/// {
///   "url": "https://example.com/some/long/path",
///   "custom_id": "my1link"   // optional
/// }
/// ```
///
/// # Response
///
/// `201 Created`:
///
/// ```json
/// {
///   "url": "https://example.com/some/long/path",
///   "short_link": "http://localhost:3000/my1link"
/// }
/// ```
///
/// # Errors
///
/// Returns 400 for a missing/invalid URL or a reserved/malformed
/// `custom_id`, and 409 when the identifier is already taken.
pub async fn create_link_handler(
    State(state): State<AppState>,
    Json(payload): Json<CreateLinkRequest>,
) -> Result<(StatusCode, Json<CreateLinkResponse>), AppError> {
    payload.validate()?;

    let custom_id = payload.custom_id.filter(|id| !id.is_empty());

    let url_map = state
        .link_service
        .create_short_link(payload.url, custom_id)
        .await?;

    let response = CreateLinkResponse {
        short_link: state.short_url(&url_map.short_id),
        url: url_map.original_url,
    };

    Ok((StatusCode::CREATED, Json(response)))
}

/// Returns the original URL behind a short identifier.
///
/// # Endpoint
///
/// `GET /api/id/{short_id}`
///
/// # Errors
///
/// Returns 404 when the identifier is unknown.
pub async fn resolve_link_handler(
    Path(short_id): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<ResolveLinkResponse>, AppError> {
    let url_map = state.link_service.resolve(&short_id).await?;

    Ok(Json(ResolveLinkResponse {
        url: url_map.original_url,
    }))
}
