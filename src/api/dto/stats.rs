//! DTO for per-link statistics.

use serde::Serialize;

use crate::domain::entities::UrlRecord;
use crate::utils::timestamp::to_iso8601;

/// Click statistics for a single short link.
///
/// Timestamps are rendered as ISO-8601 strings; `expires_at` is `null` for
/// links that never expire.
#[derive(Debug, Serialize)]
pub struct StatsResponse {
    pub original_url: String,
    pub short_code: String,
    pub clicks: i64,
    pub created_at: String,
    pub expires_at: Option<String>,
}

impl From<UrlRecord> for StatsResponse {
    fn from(record: UrlRecord) -> Self {
        Self {
            original_url: record.original_url,
            short_code: record.short_code,
            clicks: record.clicks,
            created_at: to_iso8601(record.created_at),
            expires_at: record.expires_at.map(to_iso8601),
        }
    }
}
