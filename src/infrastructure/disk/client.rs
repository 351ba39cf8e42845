use bytes::Bytes;
use futures_util::future::try_join_all;
use reqwest::header::AUTHORIZATION;
use reqwest::{Client, StatusCode};
use serde::Deserialize;

use super::DiskError;

/// Base URL of the Yandex Disk REST API.
pub const DEFAULT_API_BASE: &str = "https://cloud-api.yandex.net/v1";

/// Statuses the upload endpoint returns for an accepted transfer.
const TRANSFER_ACCEPTED: [StatusCode; 3] =
    [StatusCode::OK, StatusCode::CREATED, StatusCode::ACCEPTED];

/// Connection settings for the Disk API.
///
/// The OAuth token is injected here rather than read from process
/// environment, so the client carries no global state.
#[derive(Debug, Clone)]
pub struct DiskConfig {
    pub api_base: String,
    pub token: String,
}

/// One file of an upload batch.
#[derive(Debug, Clone)]
pub struct UploadFile {
    pub name: String,
    pub bytes: Bytes,
}

/// Client for the Yandex Disk upload protocol.
pub struct DiskClient {
    config: DiskConfig,
}

#[derive(Deserialize)]
struct UploadTarget {
    href: Option<String>,
}

impl DiskClient {
    pub fn new(config: DiskConfig) -> Self {
        Self { config }
    }

    /// Uploads a batch of files into `base_folder` on the Disk.
    ///
    /// The folder is ensured first; only then do the per-file uploads run,
    /// all concurrently over one HTTP client scoped to this call. Returned
    /// remote paths preserve input order regardless of which upload finishes
    /// first, since they are computed before the concurrent phase begins.
    ///
    /// # Errors
    ///
    /// The batch fails on the first protocol deviation anywhere in it.
    /// Sibling uploads that already completed remotely are not rolled back,
    /// so callers must treat a failed batch as "some subset of files may have
    /// landed" and report a generic failure.
    pub async fn upload_batch(
        &self,
        files: &[UploadFile],
        base_folder: &str,
    ) -> Result<Vec<String>, DiskError> {
        let client = Client::new();

        self.ensure_folder(&client, base_folder).await?;

        let disk_paths: Vec<String> = files
            .iter()
            .map(|file| format!("/{}/{}", base_folder, file.name))
            .collect();

        try_join_all(
            files
                .iter()
                .zip(&disk_paths)
                .map(|(file, disk_path)| self.upload_single(&client, file, disk_path)),
        )
        .await?;

        Ok(disk_paths)
    }

    /// Creates `base_folder` on the Disk if it does not exist yet.
    ///
    /// 201 means created, 409 means already present; both are success.
    async fn ensure_folder(&self, client: &Client, base_folder: &str) -> Result<(), DiskError> {
        let folder_path = format!("/{base_folder}");
        let folder_path = folder_path.trim_end_matches('/');

        let response = client
            .put(format!("{}/disk/resources", self.config.api_base))
            .query(&[("path", folder_path)])
            .header(AUTHORIZATION, self.auth_header())
            .send()
            .await?;

        match response.status() {
            StatusCode::CREATED | StatusCode::CONFLICT => Ok(()),
            status => {
                let body = response.text().await.unwrap_or_default();
                Err(DiskError::Folder {
                    path: folder_path.to_string(),
                    status,
                    body,
                })
            }
        }
    }

    /// Asks the Disk API for the upload URL of `disk_path`.
    async fn fetch_upload_href(
        &self,
        client: &Client,
        disk_path: &str,
    ) -> Result<String, DiskError> {
        let response = client
            .get(format!("{}/disk/resources/upload", self.config.api_base))
            .query(&[("path", disk_path), ("overwrite", "true")])
            .header(AUTHORIZATION, self.auth_header())
            .send()
            .await?;

        let status = response.status();
        if status != StatusCode::OK {
            let body = response.text().await.unwrap_or_default();
            return Err(DiskError::UploadTarget {
                path: disk_path.to_string(),
                status,
                body,
            });
        }

        let target: UploadTarget = response.json().await?;
        target
            .href
            .filter(|href| !href.is_empty())
            .ok_or_else(|| DiskError::MissingHref {
                path: disk_path.to_string(),
            })
    }

    /// Runs the two-step upload for one file: negotiate the target URL,
    /// then transfer the bytes to it.
    async fn upload_single(
        &self,
        client: &Client,
        file: &UploadFile,
        disk_path: &str,
    ) -> Result<(), DiskError> {
        let href = self.fetch_upload_href(client, disk_path).await?;

        let response = client.put(href).body(file.bytes.clone()).send().await?;

        let status = response.status();
        if !TRANSFER_ACCEPTED.contains(&status) {
            let body = response.text().await.unwrap_or_default();
            return Err(DiskError::Transfer {
                path: disk_path.to_string(),
                status,
                body,
            });
        }

        Ok(())
    }

    fn auth_header(&self) -> String {
        format!("OAuth {}", self.config.token)
    }
}
