//! URL record entity: one shortened link and its click counter.

use chrono::{DateTime, Utc};

/// A stored short link.
///
/// `clicks` only ever grows; `expires_at` is checked lazily when the link is
/// resolved and never causes the record to be removed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlRecord {
    pub id: i64,
    pub original_url: String,
    pub short_code: String,
    pub created_at: DateTime<Utc>,
    pub clicks: i64,
    pub expires_at: Option<DateTime<Utc>>,
}

impl UrlRecord {
    /// Returns true if the record has an expiry and `now` is past it.
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        self.expires_at.is_some_and(|expires_at| now > expires_at)
    }

    /// Returns true if the record has passed its expiry time.
    pub fn is_expired(&self) -> bool {
        self.is_expired_at(Utc::now())
    }
}

/// Input data for inserting a new record. The store assigns `id` and starts
/// `clicks` at zero.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUrlRecord {
    pub original_url: String,
    pub short_code: String,
    pub created_at: DateTime<Utc>,
    pub expires_at: Option<DateTime<Utc>>,
}

impl NewUrlRecord {
    /// Materializes the record as the store would persist it.
    pub fn into_record(self, id: i64) -> UrlRecord {
        UrlRecord {
            id,
            original_url: self.original_url,
            short_code: self.short_code,
            created_at: self.created_at,
            clicks: 0,
            expires_at: self.expires_at,
        }
    }
}
