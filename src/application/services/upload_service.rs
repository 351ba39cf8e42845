//! File upload orchestration: Disk batch upload plus per-file short links.

use std::sync::Arc;

use serde_json::json;

use crate::application::services::LinkService;
use crate::domain::entities::UrlMap;
use crate::error::AppError;
use crate::infrastructure::disk::{DiskClient, UploadFile};

/// Public download URL prefix for files stored on the Disk.
const DISK_PUBLIC_URL: &str = "https://disk.yandex.ru/d";

/// One uploaded file together with its stored short link.
#[derive(Debug)]
pub struct UploadedFile {
    pub filename: String,
    pub url_map: UrlMap,
}

/// Service running one upload batch end to end.
///
/// Uploads the files to the Disk first and only then creates a short link
/// per file, so a failed batch never leaves dangling links. The reverse does
/// not hold: files already transferred when a sibling fails stay on the
/// Disk, and the caller sees a single generic failure for the batch.
pub struct UploadService {
    disk: DiskClient,
    base_folder: String,
    links: Arc<LinkService>,
}

impl UploadService {
    pub fn new(disk: DiskClient, base_folder: String, links: Arc<LinkService>) -> Self {
        Self {
            disk,
            base_folder,
            links,
        }
    }

    /// Uploads `files` to the Disk and creates a short link for each.
    ///
    /// Results preserve the input order.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Upstream`] when the Disk protocol fails anywhere
    /// in the batch; the underlying error is logged, the client receives a
    /// generic message. Database errors while creating the links propagate
    /// as usual.
    pub async fn upload_batch(&self, files: Vec<UploadFile>) -> Result<Vec<UploadedFile>, AppError> {
        let disk_paths = self
            .disk
            .upload_batch(&files, &self.base_folder)
            .await
            .map_err(|e| {
                tracing::error!(error = %e, "disk upload batch failed");
                AppError::upstream("File upload failed", json!({}))
            })?;

        let mut uploaded = Vec::with_capacity(files.len());
        for (file, disk_path) in files.into_iter().zip(disk_paths) {
            let url_map = self
                .links
                .create_short_link(format!("{DISK_PUBLIC_URL}{disk_path}"), None)
                .await?;

            uploaded.push(UploadedFile {
                filename: file.name,
                url_map,
            });
        }

        Ok(uploaded)
    }
}
