//! Short link creation and resolution service.

use std::sync::Arc;

use serde_json::json;

use crate::domain::entities::{NewUrlMap, UrlMap};
use crate::domain::repositories::UrlMapRepository;
use crate::error::AppError;
use crate::utils::short_id::{
    DEFAULT_SHORT_ID_LENGTH, generate_unique_short_id, validate_custom_short_id,
};

/// Service for creating and resolving short links.
pub struct LinkService {
    repository: Arc<dyn UrlMapRepository>,
}

impl LinkService {
    /// Creates a new link service.
    pub fn new(repository: Arc<dyn UrlMapRepository>) -> Self {
        Self { repository }
    }

    /// Creates a short link for `original_url`.
    ///
    /// # Identifier selection
    ///
    /// - With `custom_id`, the identifier is validated (reserved segments,
    ///   alphabet, length) and checked for availability.
    /// - Without it, a random identifier is drawn until one is free.
    ///
    /// The availability check is read-only, so two concurrent requests can
    /// pass it with the same identifier; the unique constraint rejects the
    /// second insert and that surfaces as a conflict.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] for a reserved or malformed
    /// `custom_id`, [`AppError::Conflict`] for a taken one, and
    /// [`AppError::Internal`] on database errors.
    pub async fn create_short_link(
        &self,
        original_url: String,
        custom_id: Option<String>,
    ) -> Result<UrlMap, AppError> {
        let short_id = match custom_id {
            Some(custom) => {
                validate_custom_short_id(&custom)?;

                if self.repository.short_id_exists(&custom).await? {
                    return Err(AppError::conflict(
                        "Short link already exists",
                        json!({ "short_id": custom }),
                    ));
                }

                custom
            }
            None => self.generate_short_id().await?,
        };

        self.repository
            .insert(NewUrlMap {
                short_id,
                original_url,
            })
            .await
    }

    /// Returns the mapping behind a short identifier.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] when the identifier is unknown.
    pub async fn resolve(&self, short_id: &str) -> Result<UrlMap, AppError> {
        self.repository
            .find_by_short_id(short_id)
            .await?
            .ok_or_else(|| {
                AppError::not_found("Short link not found", json!({ "short_id": short_id }))
            })
    }

    /// Probes the mapping store. Used by the health endpoint.
    pub async fn ping(&self) -> Result<(), AppError> {
        self.repository.ping().await
    }

    async fn generate_short_id(&self) -> Result<String, AppError> {
        let repository = Arc::clone(&self.repository);
        generate_unique_short_id(DEFAULT_SHORT_ID_LENGTH, move |candidate| {
            let repository = Arc::clone(&repository);
            async move { repository.short_id_exists(&candidate).await }
        })
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repositories::MockUrlMapRepository;
    use chrono::Utc;

    fn stored(id: i64, short_id: &str, url: &str) -> UrlMap {
        UrlMap::new(id, short_id.to_string(), url.to_string(), Utc::now())
    }

    #[tokio::test]
    async fn test_create_short_link_generates_id() {
        let mut mock_repo = MockUrlMapRepository::new();

        mock_repo
            .expect_short_id_exists()
            .times(1)
            .returning(|_| Ok(false));

        mock_repo
            .expect_insert()
            .withf(|new_map| {
                new_map.short_id.len() == DEFAULT_SHORT_ID_LENGTH
                    && new_map.original_url == "https://example.com"
            })
            .times(1)
            .returning(|new_map| Ok(stored(1, &new_map.short_id, &new_map.original_url)));

        let service = LinkService::new(Arc::new(mock_repo));

        let result = service
            .create_short_link("https://example.com".to_string(), None)
            .await;

        let url_map = result.unwrap();
        assert_eq!(url_map.original_url, "https://example.com");
        assert_eq!(url_map.short_id.len(), DEFAULT_SHORT_ID_LENGTH);
    }

    #[tokio::test]
    async fn test_create_short_link_retries_taken_generated_id() {
        let mut mock_repo = MockUrlMapRepository::new();

        let mut checks = 0;
        mock_repo
            .expect_short_id_exists()
            .times(3)
            .returning(move |_| {
                checks += 1;
                Ok(checks <= 2)
            });

        mock_repo
            .expect_insert()
            .times(1)
            .returning(|new_map| Ok(stored(1, &new_map.short_id, &new_map.original_url)));

        let service = LinkService::new(Arc::new(mock_repo));

        let result = service
            .create_short_link("https://example.com".to_string(), None)
            .await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_create_short_link_with_custom_id() {
        let mut mock_repo = MockUrlMapRepository::new();

        mock_repo
            .expect_short_id_exists()
            .withf(|short_id| short_id == "mylink")
            .times(1)
            .returning(|_| Ok(false));

        mock_repo
            .expect_insert()
            .withf(|new_map| new_map.short_id == "mylink")
            .times(1)
            .returning(|new_map| Ok(stored(1, &new_map.short_id, &new_map.original_url)));

        let service = LinkService::new(Arc::new(mock_repo));

        let result = service
            .create_short_link(
                "https://example.com".to_string(),
                Some("mylink".to_string()),
            )
            .await;

        assert_eq!(result.unwrap().short_id, "mylink");
    }

    #[tokio::test]
    async fn test_create_short_link_custom_id_conflict() {
        let mut mock_repo = MockUrlMapRepository::new();

        mock_repo
            .expect_short_id_exists()
            .times(1)
            .returning(|_| Ok(true));

        mock_repo.expect_insert().times(0);

        let service = LinkService::new(Arc::new(mock_repo));

        let result = service
            .create_short_link("https://example.com".to_string(), Some("taken1".to_string()))
            .await;

        assert!(matches!(result.unwrap_err(), AppError::Conflict { .. }));
    }

    #[tokio::test]
    async fn test_create_short_link_reserved_custom_id() {
        let mock_repo = MockUrlMapRepository::new();
        let service = LinkService::new(Arc::new(mock_repo));

        let result = service
            .create_short_link("https://example.com".to_string(), Some("files".to_string()))
            .await;

        assert!(matches!(result.unwrap_err(), AppError::Validation { .. }));
    }

    #[tokio::test]
    async fn test_create_short_link_malformed_custom_id() {
        let mock_repo = MockUrlMapRepository::new();
        let service = LinkService::new(Arc::new(mock_repo));

        let result = service
            .create_short_link(
                "https://example.com".to_string(),
                Some("bad id!".to_string()),
            )
            .await;

        assert!(matches!(result.unwrap_err(), AppError::Validation { .. }));
    }

    #[tokio::test]
    async fn test_resolve_found() {
        let mut mock_repo = MockUrlMapRepository::new();

        mock_repo
            .expect_find_by_short_id()
            .withf(|short_id| short_id == "abc123")
            .times(1)
            .returning(|_| Ok(Some(stored(7, "abc123", "https://example.com"))));

        let service = LinkService::new(Arc::new(mock_repo));

        let url_map = service.resolve("abc123").await.unwrap();
        assert_eq!(url_map.id, 7);
        assert_eq!(url_map.original_url, "https://example.com");
    }

    #[tokio::test]
    async fn test_resolve_unknown() {
        let mut mock_repo = MockUrlMapRepository::new();

        mock_repo
            .expect_find_by_short_id()
            .times(1)
            .returning(|_| Ok(None));

        let service = LinkService::new(Arc::new(mock_repo));

        let result = service.resolve("missing").await;
        assert!(matches!(result.unwrap_err(), AppError::NotFound { .. }));
    }
}
