//! Yandex Disk upload client.
//!
//! Implements the three-step upload protocol: create the target folder,
//! negotiate a per-file upload URL, then transfer the raw bytes. See
//! [`DiskClient::upload_batch`] for the batch semantics.

mod client;

pub use client::{DEFAULT_API_BASE, DiskClient, DiskConfig, UploadFile};

use reqwest::StatusCode;
use thiserror::Error;

/// Failure while talking to the Disk API.
///
/// Every variant is fatal to the batch that produced it; the client never
/// retries a remote call.
#[derive(Debug, Error)]
pub enum DiskError {
    #[error("disk API request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("failed to create folder {path} ({status}): {body}")]
    Folder {
        path: String,
        status: StatusCode,
        body: String,
    },
    #[error("failed to get upload target for {path} ({status}): {body}")]
    UploadTarget {
        path: String,
        status: StatusCode,
        body: String,
    },
    #[error("upload target response for {path} has no \"href\" field")]
    MissingHref { path: String },
    #[error("upload of {path} rejected ({status}): {body}")]
    Transfer {
        path: String,
        status: StatusCode,
        body: String,
    },
}
