//! PostgreSQL implementation of the URL repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};
use std::sync::Arc;

use crate::domain::entities::{NewUrlRecord, UrlRecord};
use crate::domain::repositories::UrlRepository;
use crate::error::AppError;

/// Name of the unique constraint on `urls.short_code`.
const SHORT_CODE_CONSTRAINT: &str = "urls_short_code_key";

/// Row shape of the `urls` table.
#[derive(Debug, FromRow)]
struct UrlRow {
    id: i64,
    original_url: String,
    short_code: String,
    created_at: DateTime<Utc>,
    clicks: i64,
    expires_at: Option<DateTime<Utc>>,
}

impl From<UrlRow> for UrlRecord {
    fn from(row: UrlRow) -> Self {
        UrlRecord {
            id: row.id,
            original_url: row.original_url,
            short_code: row.short_code,
            created_at: row.created_at,
            clicks: row.clicks,
            expires_at: row.expires_at,
        }
    }
}

/// PostgreSQL repository for URL records.
///
/// Click increments are a single `UPDATE ... SET clicks = clicks + 1`, so
/// concurrent redirects of the same code never lose an update.
pub struct PgUrlRepository {
    pool: Arc<PgPool>,
}

impl PgUrlRepository {
    /// Creates a new repository over a connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

fn is_unique_violation_on_code(e: &sqlx::Error) -> bool {
    let Some(db_err) = e.as_database_error() else {
        return false;
    };

    db_err.is_unique_violation() && db_err.constraint() == Some(SHORT_CODE_CONSTRAINT)
}

#[async_trait]
impl UrlRepository for PgUrlRepository {
    async fn insert(&self, new_record: NewUrlRecord) -> Result<UrlRecord, AppError> {
        let result = sqlx::query_as::<_, UrlRow>(
            r#"
            INSERT INTO urls (original_url, short_code, created_at, clicks, expires_at)
            VALUES ($1, $2, $3, 0, $4)
            RETURNING id, original_url, short_code, created_at, clicks, expires_at
            "#,
        )
        .bind(&new_record.original_url)
        .bind(&new_record.short_code)
        .bind(new_record.created_at)
        .bind(new_record.expires_at)
        .fetch_one(self.pool.as_ref())
        .await;

        match result {
            Ok(row) => Ok(row.into()),
            Err(e) if is_unique_violation_on_code(&e) => Err(AppError::conflict(
                "Shortcode already exists. Choose another.",
            )),
            Err(e) => Err(e.into()),
        }
    }

    async fn find_by_code(&self, short_code: &str) -> Result<Option<UrlRecord>, AppError> {
        let row = sqlx::query_as::<_, UrlRow>(
            r#"
            SELECT id, original_url, short_code, created_at, clicks, expires_at
            FROM urls
            WHERE short_code = $1
            "#,
        )
        .bind(short_code)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Into::into))
    }

    async fn exists(&self, short_code: &str) -> Result<bool, AppError> {
        let exists = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM urls WHERE short_code = $1)",
        )
        .bind(short_code)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(exists)
    }

    async fn list_all(&self) -> Result<Vec<UrlRecord>, AppError> {
        let rows = sqlx::query_as::<_, UrlRow>(
            "SELECT id, original_url, short_code, created_at, clicks, expires_at FROM urls",
        )
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn increment_clicks(&self, short_code: &str) -> Result<bool, AppError> {
        let result = sqlx::query("UPDATE urls SET clicks = clicks + 1 WHERE short_code = $1")
            .bind(short_code)
            .execute(self.pool.as_ref())
            .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn delete_by_code(&self, short_code: &str) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM urls WHERE short_code = $1")
            .bind(short_code)
            .execute(self.pool.as_ref())
            .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn ping(&self) -> Result<(), AppError> {
        sqlx::query("SELECT 1").execute(self.pool.as_ref()).await?;
        Ok(())
    }

    async fn close(&self) {
        self.pool.close().await;
    }
}
