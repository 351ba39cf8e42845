//! Business logic services for the application layer.

pub mod link_service;
pub mod upload_service;

pub use link_service::LinkService;
pub use upload_service::{UploadService, UploadedFile};
