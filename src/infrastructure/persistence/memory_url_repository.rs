//! In-process implementation of the URL repository.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicI64, Ordering};
use tokio::sync::RwLock;
use tracing::debug;

use crate::domain::entities::{NewUrlRecord, UrlRecord};
use crate::domain::repositories::UrlRepository;
use crate::error::AppError;

/// URL records kept in a map guarded by a single lock.
///
/// Nothing survives a restart. Used with `STORAGE_BACKEND=memory` and by the
/// HTTP tests. The existence check and the insert happen under one write
/// lock, so duplicate codes are rejected even under concurrent requests.
pub struct MemoryUrlRepository {
    records: RwLock<HashMap<String, UrlRecord>>,
    next_id: AtomicI64,
}

impl MemoryUrlRepository {
    /// Creates an empty store.
    pub fn new() -> Self {
        debug!("Using in-memory URL store");
        Self {
            records: RwLock::new(HashMap::new()),
            next_id: AtomicI64::new(1),
        }
    }

    /// Stores an already materialized record, bypassing uniqueness checks on
    /// `id`. Handy for seeding fixtures such as links that expired long ago.
    pub async fn put(&self, record: UrlRecord) {
        self.next_id.fetch_max(record.id + 1, Ordering::Relaxed);
        self.records
            .write()
            .await
            .insert(record.short_code.clone(), record);
    }
}

impl Default for MemoryUrlRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl UrlRepository for MemoryUrlRepository {
    async fn insert(&self, new_record: NewUrlRecord) -> Result<UrlRecord, AppError> {
        let mut records = self.records.write().await;

        if records.contains_key(&new_record.short_code) {
            return Err(AppError::conflict(
                "Shortcode already exists. Choose another.",
            ));
        }

        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        let record = new_record.into_record(id);
        records.insert(record.short_code.clone(), record.clone());

        Ok(record)
    }

    async fn find_by_code(&self, short_code: &str) -> Result<Option<UrlRecord>, AppError> {
        Ok(self.records.read().await.get(short_code).cloned())
    }

    async fn exists(&self, short_code: &str) -> Result<bool, AppError> {
        Ok(self.records.read().await.contains_key(short_code))
    }

    async fn list_all(&self) -> Result<Vec<UrlRecord>, AppError> {
        let mut records: Vec<UrlRecord> = self.records.read().await.values().cloned().collect();
        records.sort_by_key(|r| r.id);
        Ok(records)
    }

    async fn increment_clicks(&self, short_code: &str) -> Result<bool, AppError> {
        match self.records.write().await.get_mut(short_code) {
            Some(record) => {
                record.clicks += 1;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn delete_by_code(&self, short_code: &str) -> Result<bool, AppError> {
        Ok(self.records.write().await.remove(short_code).is_some())
    }

    async fn ping(&self) -> Result<(), AppError> {
        Ok(())
    }

    async fn close(&self) {
        debug!("In-memory URL store closed");
    }
}
