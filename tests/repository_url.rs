//! PostgreSQL repository tests. `#[sqlx::test]` creates a scratch database
//! per test from `DATABASE_URL`.

use chrono::{Duration, TimeZone, Utc};
use sqlx::PgPool;
use std::sync::Arc;
use url_registry::domain::entities::NewUrlRecord;
use url_registry::domain::repositories::UrlRepository;
use url_registry::error::AppError;
use url_registry::infrastructure::persistence::PgUrlRepository;

fn new_record(code: &str, url: &str) -> NewUrlRecord {
    NewUrlRecord {
        original_url: url.to_string(),
        short_code: code.to_string(),
        created_at: Utc::now(),
        expires_at: None,
    }
}

#[sqlx::test]
async fn test_insert_and_find(pool: PgPool) {
    let repo = PgUrlRepository::new(Arc::new(pool));

    let expires_at = Utc.with_ymd_and_hms(2099, 1, 1, 0, 0, 0).unwrap();
    let created = repo
        .insert(NewUrlRecord {
            expires_at: Some(expires_at),
            ..new_record("abc123", "https://example.com")
        })
        .await
        .unwrap();

    assert!(created.id > 0);
    assert_eq!(created.clicks, 0);

    let found = repo.find_by_code("abc123").await.unwrap().unwrap();
    assert_eq!(found.id, created.id);
    assert_eq!(found.original_url, "https://example.com");
    assert_eq!(found.expires_at, Some(expires_at));
}

#[sqlx::test]
async fn test_find_by_code_not_found(pool: PgPool) {
    let repo = PgUrlRepository::new(Arc::new(pool));

    let result = repo.find_by_code("notfound").await;

    assert!(result.unwrap().is_none());
}

#[sqlx::test]
async fn test_duplicate_code_is_conflict(pool: PgPool) {
    let repo = PgUrlRepository::new(Arc::new(pool));

    repo.insert(new_record("dup123", "https://a.com"))
        .await
        .unwrap();
    let result = repo.insert(new_record("dup123", "https://b.com")).await;

    assert!(matches!(result, Err(AppError::Conflict(_))));
}

#[sqlx::test]
async fn test_exists(pool: PgPool) {
    let repo = PgUrlRepository::new(Arc::new(pool));
    repo.insert(new_record("abc123", "https://a.com"))
        .await
        .unwrap();

    assert!(repo.exists("abc123").await.unwrap());
    assert!(!repo.exists("zzz999").await.unwrap());
}

#[sqlx::test]
async fn test_increment_clicks(pool: PgPool) {
    let repo = PgUrlRepository::new(Arc::new(pool));
    repo.insert(new_record("abc123", "https://a.com"))
        .await
        .unwrap();

    assert!(repo.increment_clicks("abc123").await.unwrap());
    assert!(repo.increment_clicks("abc123").await.unwrap());
    assert!(!repo.increment_clicks("missing").await.unwrap());

    let found = repo.find_by_code("abc123").await.unwrap().unwrap();
    assert_eq!(found.clicks, 2);
}

#[sqlx::test]
async fn test_concurrent_increments(pool: PgPool) {
    let repo = Arc::new(PgUrlRepository::new(Arc::new(pool)));
    repo.insert(new_record("hot123", "https://a.com"))
        .await
        .unwrap();

    let mut handles = Vec::new();
    for _ in 0..20 {
        let repo = repo.clone();
        handles.push(tokio::spawn(async move {
            repo.increment_clicks("hot123").await.unwrap();
        }));
    }
    for handle in handles {
        handle.await.unwrap();
    }

    let found = repo.find_by_code("hot123").await.unwrap().unwrap();
    assert_eq!(found.clicks, 20);
}

#[sqlx::test]
async fn test_list_all_includes_expired(pool: PgPool) {
    let repo = PgUrlRepository::new(Arc::new(pool));
    repo.insert(new_record("live01", "https://a.com"))
        .await
        .unwrap();
    repo.insert(NewUrlRecord {
        expires_at: Some(Utc::now() - Duration::days(1)),
        ..new_record("dead01", "https://b.com")
    })
    .await
    .unwrap();

    let records = repo.list_all().await.unwrap();

    assert_eq!(records.len(), 2);
    assert!(records.iter().any(|r| r.short_code == "dead01" && r.is_expired()));
}

#[sqlx::test]
async fn test_delete_by_code(pool: PgPool) {
    let repo = PgUrlRepository::new(Arc::new(pool));
    repo.insert(new_record("abc123", "https://a.com"))
        .await
        .unwrap();

    assert!(repo.delete_by_code("abc123").await.unwrap());
    assert!(!repo.delete_by_code("abc123").await.unwrap());
    assert!(repo.find_by_code("abc123").await.unwrap().is_none());
}

#[sqlx::test]
async fn test_ping(pool: PgPool) {
    let repo = PgUrlRepository::new(Arc::new(pool));

    assert!(repo.ping().await.is_ok());
}
