//! DTOs for link shortening endpoint.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::application::services::CreateUrl;
use crate::domain::entities::UrlRecord;
use crate::utils::code_generator::MAX_CUSTOM_CODE_LENGTH;

/// Upper bound on the length of a URL accepted for shortening.
pub const MAX_URL_LENGTH: u64 = 2048;

/// Request to shorten a single URL.
///
/// Every field is optional at the JSON level; a missing `url` is reported by
/// the service with its own message rather than as a deserialization error.
#[derive(Debug, Default, Deserialize, Validate)]
pub struct ShortenRequest {
    /// The original URL, stored as-is.
    #[validate(length(max = MAX_URL_LENGTH))]
    pub url: Option<String>,

    /// Optional custom short code.
    #[validate(length(max = MAX_CUSTOM_CODE_LENGTH))]
    pub short_code: Option<String>,

    /// Optional expiration time, `YYYY-MM-DDTHH:MM` in UTC.
    pub expires_at: Option<String>,
}

impl From<ShortenRequest> for CreateUrl {
    fn from(request: ShortenRequest) -> Self {
        Self {
            original_url: request.url,
            short_code: request.short_code,
            expires_at: request.expires_at,
        }
    }
}

/// Created short link.
#[derive(Debug, Serialize)]
pub struct ShortenResponse {
    pub original_url: String,
    pub short_code: String,
    pub short_url: String,
}

impl ShortenResponse {
    pub fn new(record: UrlRecord, short_url: String) -> Self {
        Self {
            original_url: record.original_url,
            short_code: record.short_code,
            short_url,
        }
    }
}
