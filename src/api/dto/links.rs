//! DTOs for the short link endpoints.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Request to create a short link.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateLinkRequest {
    /// The original URL to shorten (must be a valid URL).
    #[validate(url(message = "Invalid URL format"))]
    #[validate(length(max = 2048))]
    pub url: String,

    /// Optional caller-chosen identifier. An empty string counts as absent.
    /// Validated against the identifier rules in the service layer.
    pub custom_id: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct CreateLinkResponse {
    pub url: String,
    pub short_link: String,
}

#[derive(Debug, Serialize)]
pub struct ResolveLinkResponse {
    pub url: String,
}
