//! URL registry service: create, resolve, list, stats and delete.

use std::sync::Arc;

use axum::http::HeaderValue;
use chrono::Utc;
use tracing::{debug, info, warn};

use crate::domain::entities::{NewUrlRecord, UrlRecord};
use crate::domain::repositories::UrlRepository;
use crate::error::AppError;
use crate::utils::code_generator::{CodeGenerator, validate_custom_code};
use crate::utils::timestamp::parse_expires_at;

pub const MSG_URL_REQUIRED: &str = "URL is required";
pub const MSG_URL_UNREDIRECTABLE: &str = "URL contains characters that cannot be redirected to";
pub const MSG_CODE_TAKEN: &str = "Shortcode already exists. Choose another.";
pub const MSG_SHORT_URL_NOT_FOUND: &str = "Short URL not found";
pub const MSG_URL_NOT_FOUND: &str = "URL not found";
pub const MSG_EXPIRED: &str = "This link has expired.";

/// Parameters of a create request, as received from the client.
///
/// Empty strings are treated the same as absent values.
#[derive(Debug, Clone, Default)]
pub struct CreateUrl {
    pub original_url: Option<String>,
    pub short_code: Option<String>,
    pub expires_at: Option<String>,
}

/// Service owning the URL registry rules.
///
/// The store handle and the code generator are injected so that tests can
/// substitute an in-memory or mocked store and a seeded generator.
pub struct UrlService {
    repository: Arc<dyn UrlRepository>,
    code_generator: CodeGenerator,
    max_attempts: u32,
}

impl UrlService {
    /// Creates a new service.
    ///
    /// `max_attempts` bounds how many generated codes are tried before a
    /// collision is reported; it is clamped to at least one.
    pub fn new(
        repository: Arc<dyn UrlRepository>,
        code_generator: CodeGenerator,
        max_attempts: u32,
    ) -> Self {
        Self {
            repository,
            code_generator,
            max_attempts: max_attempts.max(1),
        }
    }

    /// Creates a short link.
    ///
    /// A supplied code is used as-is; otherwise a random 6-character code is
    /// drawn, redrawing on collision up to `max_attempts` times.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the URL is missing or cannot be
    /// sent as a `Location` header, or the expiry is unparsable, and
    /// [`AppError::Conflict`] if the code is already taken. A taken custom
    /// code is reported before the expiry is looked at.
    pub async fn create_short_url(&self, request: CreateUrl) -> Result<UrlRecord, AppError> {
        let original_url = non_empty(request.original_url)
            .ok_or_else(|| AppError::bad_request(MSG_URL_REQUIRED))?;

        if !is_redirectable(&original_url) {
            return Err(AppError::bad_request(MSG_URL_UNREDIRECTABLE));
        }

        let custom_code = match non_empty(request.short_code) {
            Some(custom) => {
                validate_custom_code(&custom)?;
                if self.repository.exists(&custom).await? {
                    return Err(AppError::conflict(MSG_CODE_TAKEN));
                }
                Some(custom)
            }
            None => None,
        };

        let expires_at = non_empty(request.expires_at)
            .map(|value| parse_expires_at(&value))
            .transpose()?;

        let short_code = match custom_code {
            Some(custom) => custom,
            None => self.generate_unique_code().await?,
        };

        let record = self
            .repository
            .insert(NewUrlRecord {
                original_url,
                short_code,
                created_at: Utc::now(),
                expires_at,
            })
            .await?;

        info!(
            short_code = %record.short_code,
            expires_at = ?record.expires_at,
            "Short URL created"
        );

        Ok(record)
    }

    /// Resolves a code to its target and counts the click.
    ///
    /// The click increment is best effort: if it fails the error is logged
    /// and the target is still returned.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] for unknown codes and
    /// [`AppError::Expired`] for links past their expiry. Expired links are
    /// not counted, and neither are stored URLs that cannot be sent as a
    /// `Location` header ([`AppError::Internal`]).
    pub async fn resolve(&self, short_code: &str) -> Result<String, AppError> {
        let record = self
            .repository
            .find_by_code(short_code)
            .await?
            .ok_or_else(|| AppError::not_found(MSG_SHORT_URL_NOT_FOUND))?;

        if record.is_expired_at(Utc::now()) {
            debug!(short_code, "Rejected redirect for expired link");
            return Err(AppError::expired(MSG_EXPIRED));
        }

        if !is_redirectable(&record.original_url) {
            return Err(AppError::internal(format!(
                "Stored URL for '{}' is not a valid Location header",
                short_code
            )));
        }

        match self.repository.increment_clicks(short_code).await {
            Ok(true) => {}
            Ok(false) => warn!(short_code, "Link vanished before its click was counted"),
            Err(e) => warn!(short_code, error = %e, "Failed to count click"),
        }

        Ok(record.original_url)
    }

    /// Returns every record, expired ones included.
    pub async fn list_all(&self) -> Result<Vec<UrlRecord>, AppError> {
        self.repository.list_all().await
    }

    /// Returns the record behind a code regardless of its expiry.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] for unknown codes.
    pub async fn get_stats(&self, short_code: &str) -> Result<UrlRecord, AppError> {
        self.repository
            .find_by_code(short_code)
            .await?
            .ok_or_else(|| AppError::not_found(MSG_SHORT_URL_NOT_FOUND))
    }

    /// Permanently removes a record.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if nothing was deleted.
    pub async fn delete(&self, short_code: &str) -> Result<(), AppError> {
        if !self.repository.delete_by_code(short_code).await? {
            return Err(AppError::not_found(MSG_URL_NOT_FOUND));
        }

        info!(short_code, "Short URL deleted");
        Ok(())
    }

    /// Checks that the store is reachable.
    pub async fn ping(&self) -> Result<(), AppError> {
        self.repository.ping().await
    }

    /// Releases the store. Called once after the server has stopped.
    pub async fn close(&self) {
        self.repository.close().await;
    }

    async fn generate_unique_code(&self) -> Result<String, AppError> {
        for attempt in 1..=self.max_attempts {
            let code = self.code_generator.generate();

            if !self.repository.exists(&code).await? {
                return Ok(code);
            }

            debug!(attempt, code = %code, "Generated short code collided");
        }

        Err(AppError::conflict(MSG_CODE_TAKEN))
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

fn is_redirectable(url: &str) -> bool {
    HeaderValue::from_str(url).is_ok()
}
