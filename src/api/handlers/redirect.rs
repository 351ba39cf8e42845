//! Handler for short URL redirect.

use axum::{
    extract::{Path, State},
    response::Redirect,
};

use crate::error::AppError;
use crate::state::AppState;

/// Redirects a short identifier to its original URL.
///
/// # Endpoint
///
/// `GET /{short_id}`
///
/// # Errors
///
/// Returns 404 when the identifier is unknown.
pub async fn redirect_handler(
    Path(short_id): Path<String>,
    State(state): State<AppState>,
) -> Result<Redirect, AppError> {
    let url_map = state.link_service.resolve(&short_id).await?;

    Ok(Redirect::temporary(&url_map.original_url))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::test_support::test_state;
    use crate::domain::entities::UrlMap;
    use crate::domain::repositories::MockUrlMapRepository;
    use axum::Router;
    use axum::http::StatusCode;
    use axum::routing::get;
    use axum_test::TestServer;
    use chrono::Utc;

    fn test_server(mock_repo: MockUrlMapRepository) -> TestServer {
        let app = Router::new()
            .route("/{short_id}", get(redirect_handler))
            .with_state(test_state(mock_repo));

        TestServer::new(app).unwrap()
    }

    #[tokio::test]
    async fn test_redirect_to_original_url() {
        let mut mock_repo = MockUrlMapRepository::new();
        mock_repo.expect_find_by_short_id().returning(|short_id| {
            Ok(Some(UrlMap::new(
                1,
                short_id.to_string(),
                "https://example.com/target".to_string(),
                Utc::now(),
            )))
        });

        let server = test_server(mock_repo);

        let response = server.get("/abc123").await;

        response.assert_status(StatusCode::TEMPORARY_REDIRECT);
        assert_eq!(
            response.header("location").to_str().unwrap(),
            "https://example.com/target"
        );
    }

    #[tokio::test]
    async fn test_redirect_unknown_short_id() {
        let mut mock_repo = MockUrlMapRepository::new();
        mock_repo.expect_find_by_short_id().returning(|_| Ok(None));

        let server = test_server(mock_repo);

        let response = server.get("/missing").await;

        response.assert_status(StatusCode::NOT_FOUND);
    }
}
