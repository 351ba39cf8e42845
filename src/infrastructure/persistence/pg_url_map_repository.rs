//! PostgreSQL implementation of the url map repository.

use async_trait::async_trait;
use sqlx::postgres::PgRow;
use sqlx::{PgPool, Row};
use std::sync::Arc;

use crate::domain::entities::{NewUrlMap, UrlMap};
use crate::domain::repositories::UrlMapRepository;
use crate::error::AppError;

/// PostgreSQL repository for short link storage and retrieval.
pub struct PgUrlMapRepository {
    pool: Arc<PgPool>,
}

impl PgUrlMapRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

fn row_to_url_map(row: &PgRow) -> Result<UrlMap, sqlx::Error> {
    Ok(UrlMap::new(
        row.try_get("id")?,
        row.try_get("short_id")?,
        row.try_get("original_url")?,
        row.try_get("created_at")?,
    ))
}

#[async_trait]
impl UrlMapRepository for PgUrlMapRepository {
    async fn insert(&self, new_map: NewUrlMap) -> Result<UrlMap, AppError> {
        let row = sqlx::query(
            r#"
            INSERT INTO url_maps (short_id, original_url)
            VALUES ($1, $2)
            RETURNING id, short_id, original_url, created_at
            "#,
        )
        .bind(&new_map.short_id)
        .bind(&new_map.original_url)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(row_to_url_map(&row)?)
    }

    async fn find_by_short_id(&self, short_id: &str) -> Result<Option<UrlMap>, AppError> {
        let row = sqlx::query(
            r#"
            SELECT id, short_id, original_url, created_at
            FROM url_maps
            WHERE short_id = $1
            "#,
        )
        .bind(short_id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        row.as_ref().map(row_to_url_map).transpose().map_err(Into::into)
    }

    async fn short_id_exists(&self, short_id: &str) -> Result<bool, AppError> {
        let exists: bool =
            sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM url_maps WHERE short_id = $1)")
                .bind(short_id)
                .fetch_one(self.pool.as_ref())
                .await?;

        Ok(exists)
    }

    async fn ping(&self) -> Result<(), AppError> {
        sqlx::query_scalar::<_, i32>("SELECT 1")
            .fetch_one(self.pool.as_ref())
            .await?;

        Ok(())
    }
}
