//! DTOs for the file upload endpoint.

use serde::Serialize;

/// Response listing the short link created for each uploaded file,
/// in upload order.
#[derive(Debug, Serialize)]
pub struct UploadResponse {
    pub uploaded: Vec<UploadedItem>,
}

#[derive(Debug, Serialize)]
pub struct UploadedItem {
    pub filename: String,
    pub short_link: String,
}
