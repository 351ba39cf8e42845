//! Repository trait for short link data access.

use crate::domain::entities::{NewUrlMap, UrlMap};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for the short link mapping store.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgUrlMapRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UrlMapRepository: Send + Sync {
    /// Inserts a new mapping.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the short identifier is already
    /// taken; the unique constraint is the final arbiter for races between
    /// concurrent check-then-insert sequences.
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn insert(&self, new_map: NewUrlMap) -> Result<UrlMap, AppError>;

    /// Finds a mapping by its short identifier.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_by_short_id(&self, short_id: &str) -> Result<Option<UrlMap>, AppError>;

    /// Reports whether a short identifier is already taken.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn short_id_exists(&self, short_id: &str) -> Result<bool, AppError>;

    /// Probes database connectivity. Used by the health endpoint.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] when the database is unreachable.
    async fn ping(&self) -> Result<(), AppError>;
}
