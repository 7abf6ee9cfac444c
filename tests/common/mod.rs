#![allow(dead_code)]

use async_trait::async_trait;
use axum_test::TestServer;
use chrono::{DateTime, Utc};
use std::sync::Arc;
use url_registry::application::services::UrlService;
use url_registry::domain::entities::{NewUrlRecord, UrlRecord};
use url_registry::domain::repositories::UrlRepository;
use url_registry::error::AppError;
use url_registry::infrastructure::persistence::MemoryUrlRepository;
use url_registry::routes::app_router;
use url_registry::state::AppState;
use url_registry::utils::code_generator::CodeGenerator;

pub const TEST_SEED: u64 = 42;

pub fn create_test_state(repository: Arc<dyn UrlRepository>) -> AppState {
    let url_service = Arc::new(UrlService::new(
        repository,
        CodeGenerator::seeded(TEST_SEED),
        5,
    ));

    AppState::new(url_service, None)
}

pub fn server_with(repository: Arc<dyn UrlRepository>) -> TestServer {
    let state = create_test_state(repository);
    TestServer::new(app_router(state, &["*".to_string()])).unwrap()
}

/// Server backed by a fresh in-memory store, returned alongside the store.
pub fn create_test_server() -> (TestServer, Arc<MemoryUrlRepository>) {
    let repo = Arc::new(MemoryUrlRepository::new());
    (server_with(repo.clone()), repo)
}

pub async fn create_test_link(
    repo: &MemoryUrlRepository,
    code: &str,
    url: &str,
    expires_at: Option<DateTime<Utc>>,
) -> UrlRecord {
    repo.insert(NewUrlRecord {
        original_url: url.to_string(),
        short_code: code.to_string(),
        created_at: Utc::now(),
        expires_at,
    })
    .await
    .unwrap()
}

/// Store whose every call fails, as if the database were down.
pub struct UnreachableRepository;

#[async_trait]
impl UrlRepository for UnreachableRepository {
    async fn insert(&self, _: NewUrlRecord) -> Result<UrlRecord, AppError> {
        Err(AppError::Database(sqlx::Error::PoolTimedOut))
    }

    async fn find_by_code(&self, _: &str) -> Result<Option<UrlRecord>, AppError> {
        Err(AppError::Database(sqlx::Error::PoolTimedOut))
    }

    async fn exists(&self, _: &str) -> Result<bool, AppError> {
        Err(AppError::Database(sqlx::Error::PoolTimedOut))
    }

    async fn list_all(&self) -> Result<Vec<UrlRecord>, AppError> {
        Err(AppError::Database(sqlx::Error::PoolTimedOut))
    }

    async fn increment_clicks(&self, _: &str) -> Result<bool, AppError> {
        Err(AppError::Database(sqlx::Error::PoolTimedOut))
    }

    async fn delete_by_code(&self, _: &str) -> Result<bool, AppError> {
        Err(AppError::Database(sqlx::Error::PoolTimedOut))
    }

    async fn ping(&self) -> Result<(), AppError> {
        Err(AppError::Database(sqlx::Error::PoolTimedOut))
    }

    async fn close(&self) {}
}

/// In-memory store whose click increments always fail.
pub struct BrokenClicksRepository {
    pub inner: MemoryUrlRepository,
}

#[async_trait]
impl UrlRepository for BrokenClicksRepository {
    async fn insert(&self, new_record: NewUrlRecord) -> Result<UrlRecord, AppError> {
        self.inner.insert(new_record).await
    }

    async fn find_by_code(&self, short_code: &str) -> Result<Option<UrlRecord>, AppError> {
        self.inner.find_by_code(short_code).await
    }

    async fn exists(&self, short_code: &str) -> Result<bool, AppError> {
        self.inner.exists(short_code).await
    }

    async fn list_all(&self) -> Result<Vec<UrlRecord>, AppError> {
        self.inner.list_all().await
    }

    async fn increment_clicks(&self, _: &str) -> Result<bool, AppError> {
        Err(AppError::internal("click counter unavailable"))
    }

    async fn delete_by_code(&self, short_code: &str) -> Result<bool, AppError> {
        self.inner.delete_by_code(short_code).await
    }

    async fn ping(&self) -> Result<(), AppError> {
        self.inner.ping().await
    }

    async fn close(&self) {}
}
