//! DTO for the dashboard listing.

use serde::Serialize;
use serde_with::{DisplayFromStr, serde_as};

use crate::domain::entities::UrlRecord;
use crate::utils::timestamp::to_iso8601;

/// A stored record as shown on the dashboard.
///
/// The identifier is serialized as a string under `_id`.
#[serde_as]
#[derive(Debug, Serialize)]
pub struct DashboardRecord {
    #[serde(rename = "_id")]
    #[serde_as(as = "DisplayFromStr")]
    pub id: i64,
    pub original_url: String,
    pub short_code: String,
    pub created_at: String,
    pub clicks: i64,
    pub expires_at: Option<String>,
}

impl From<UrlRecord> for DashboardRecord {
    fn from(record: UrlRecord) -> Self {
        Self {
            id: record.id,
            original_url: record.original_url,
            short_code: record.short_code,
            created_at: to_iso8601(record.created_at),
            clicks: record.clicks,
            expires_at: record.expires_at.map(to_iso8601),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn test_id_is_stringified() {
        let record = UrlRecord {
            id: 42,
            original_url: "https://example.com".to_string(),
            short_code: "abc123".to_string(),
            created_at: Utc::now(),
            clicks: 0,
            expires_at: None,
        };

        let json = serde_json::to_value(DashboardRecord::from(record)).unwrap();

        assert_eq!(json["_id"], "42");
        assert!(json.get("id").is_none());
    }
}
