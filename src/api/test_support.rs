//! Shared fixtures for handler unit tests.

use std::sync::Arc;

use crate::application::services::{LinkService, UploadService};
use crate::domain::repositories::MockUrlMapRepository;
use crate::infrastructure::disk::{DiskClient, DiskConfig};
use crate::state::AppState;

/// Builds an [`AppState`] around a mocked repository.
///
/// The Disk client points at a closed loopback port, so any test that
/// reaches it observes an upstream failure.
pub fn test_state(mock_repo: MockUrlMapRepository) -> AppState {
    let link_service = Arc::new(LinkService::new(Arc::new(mock_repo)));

    let disk = DiskClient::new(DiskConfig {
        api_base: "http://127.0.0.1:1".to_string(),
        token: "test-token".to_string(),
    });
    let upload_service = Arc::new(UploadService::new(
        disk,
        "test_uploads".to_string(),
        Arc::clone(&link_service),
    ));

    AppState::new(
        link_service,
        upload_service,
        "http://localhost:3000".to_string(),
    )
}
