use std::sync::Arc;

use crate::application::services::{LinkService, UploadService};

/// Shared application state injected into all handlers.
#[derive(Clone)]
pub struct AppState {
    pub link_service: Arc<LinkService>,
    pub upload_service: Arc<UploadService>,
    /// Public base URL used to build full short links.
    pub base_url: String,
}

impl AppState {
    pub fn new(
        link_service: Arc<LinkService>,
        upload_service: Arc<UploadService>,
        base_url: String,
    ) -> Self {
        Self {
            link_service,
            upload_service,
            base_url,
        }
    }

    /// Builds the public short link for an identifier.
    pub fn short_url(&self, short_id: &str) -> String {
        format!("{}/{}", self.base_url.trim_end_matches('/'), short_id)
    }
}
