//! Handler for the file upload endpoint.

use axum::{
    Json,
    extract::{Multipart, State},
    http::StatusCode,
};
use serde_json::json;

use crate::api::dto::upload::{UploadResponse, UploadedItem};
use crate::error::AppError;
use crate::infrastructure::disk::UploadFile;
use crate::state::AppState;

/// Uploads a batch of files to the Disk and shortens each resulting link.
///
/// # Endpoint
///
/// `POST /api/files`
///
/// Accepts a multipart form; every part carrying a file name is uploaded.
/// Responds `201 Created` with one entry per file, in upload order:
///
/// ```json
/// {
///   "uploaded": [
///     { "filename": "cat.png", "short_link": "http://localhost:3000/Ab3dF9" }
///   ]
/// }
/// ```
///
/// # Errors
///
/// Returns 400 when the form contains no files, and 502 when the Disk
/// protocol fails. A 502 means some subset of the batch may still have
/// landed remotely; no short links are created in that case.
pub async fn upload_files_handler(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<(StatusCode, Json<UploadResponse>), AppError> {
    let mut files = Vec::new();

    while let Some(field) = multipart.next_field().await.map_err(|e| {
        AppError::bad_request("Malformed multipart body", json!({ "reason": e.to_string() }))
    })? {
        // Parts without a file name are form fields, not uploads.
        let Some(name) = field.file_name().map(str::to_owned) else {
            continue;
        };

        let bytes = field.bytes().await.map_err(|e| {
            AppError::bad_request(
                "Failed to read uploaded file",
                json!({ "filename": name, "reason": e.to_string() }),
            )
        })?;

        files.push(UploadFile { name, bytes });
    }

    if files.is_empty() {
        return Err(AppError::bad_request(
            "At least one file is required",
            json!({}),
        ));
    }

    let uploaded = state.upload_service.upload_batch(files).await?;

    let response = UploadResponse {
        uploaded: uploaded
            .into_iter()
            .map(|file| UploadedItem {
                short_link: state.short_url(&file.url_map.short_id),
                filename: file.filename,
            })
            .collect(),
    };

    Ok((StatusCode::CREATED, Json(response)))
}
