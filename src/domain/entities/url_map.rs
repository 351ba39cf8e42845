//! Mapping between a short identifier and the original URL.

use chrono::{DateTime, Utc};

/// A stored short link.
///
/// Created once on submission and never mutated afterwards; `created_at` is
/// assigned by the database at insertion.
#[derive(Debug, Clone)]
pub struct UrlMap {
    pub id: i64,
    pub short_id: String,
    pub original_url: String,
    pub created_at: DateTime<Utc>,
}

impl UrlMap {
    pub fn new(id: i64, short_id: String, original_url: String, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            short_id,
            original_url,
            created_at,
        }
    }
}

/// Input data for inserting a new mapping.
#[derive(Debug, Clone)]
pub struct NewUrlMap {
    pub short_id: String,
    pub original_url: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_map_creation() {
        let now = Utc::now();
        let url_map = UrlMap::new(
            1,
            "abc123".to_string(),
            "https://example.com".to_string(),
            now,
        );

        assert_eq!(url_map.id, 1);
        assert_eq!(url_map.short_id, "abc123");
        assert_eq!(url_map.original_url, "https://example.com");
        assert_eq!(url_map.created_at, now);
    }
}
