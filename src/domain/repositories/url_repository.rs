//! Store trait for URL records.

use crate::domain::entities::{NewUrlRecord, UrlRecord};
use crate::error::AppError;
use async_trait::async_trait;

/// Store interface for URL records.
///
/// Every method is atomic at the level of a single record. Uniqueness of
/// `short_code` is enforced by the store itself, so two concurrent inserts of
/// the same code yield exactly one success.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgUrlRepository`] - PostgreSQL
/// - [`crate::infrastructure::persistence::MemoryUrlRepository`] - in-process map
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UrlRepository: Send + Sync {
    /// Inserts a new record with `clicks = 0`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the short code is already stored.
    /// Returns [`AppError::Database`] on store errors.
    async fn insert(&self, new_record: NewUrlRecord) -> Result<UrlRecord, AppError>;

    /// Finds a record by its short code.
    async fn find_by_code(&self, short_code: &str) -> Result<Option<UrlRecord>, AppError>;

    /// Returns true if a record with this short code exists.
    async fn exists(&self, short_code: &str) -> Result<bool, AppError>;

    /// Returns every stored record, expired ones included, in store order.
    async fn list_all(&self) -> Result<Vec<UrlRecord>, AppError>;

    /// Atomically adds one to the click counter.
    ///
    /// Returns `Ok(false)` if no record matched.
    async fn increment_clicks(&self, short_code: &str) -> Result<bool, AppError>;

    /// Permanently removes a record.
    ///
    /// Returns `Ok(true)` if a record was deleted.
    async fn delete_by_code(&self, short_code: &str) -> Result<bool, AppError>;

    /// Round-trips to the store to check connectivity.
    async fn ping(&self) -> Result<(), AppError>;

    /// Releases the underlying connections. Called once at shutdown.
    async fn close(&self);
}
