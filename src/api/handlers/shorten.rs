//! Handler for link shortening endpoint.

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::{HeaderMap, Uri},
};
use validator::Validate;

use crate::api::dto::shorten::{ShortenRequest, ShortenResponse};
use crate::error::AppError;
use crate::state::AppState;
use crate::utils::base_url::{request_base_url, short_url};

/// Creates a short link for a URL.
///
/// # Endpoint
///
/// `POST /shorten`
///
/// # Request Body
///
/// ```json
/// {
///   "url": "https://example.com",
///   "short_code": "my-link",          // optional
///   "expires_at": "2099-01-01T00:00"  // optional, UTC
/// }
/// ```
///
/// # Response
///
/// ```json
/// {
///   "original_url": "https://example.com",
///   "short_code": "my-link",
///   "short_url": "http://localhost:3000/my-link"
/// }
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request for a missing URL, a malformed body or an
/// unparsable expiry, and 409 Conflict if the short code is taken.
pub async fn shorten_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    uri: Uri,
    payload: Result<Json<ShortenRequest>, JsonRejection>,
) -> Result<Json<ShortenResponse>, AppError> {
    let Json(payload) = payload?;
    payload.validate()?;

    let record = state.url_service.create_short_url(payload.into()).await?;

    let base = request_base_url(state.public_base_url.as_deref(), &headers, &uri);
    let short_url = short_url(&base, &record.short_code);

    Ok(Json(ShortenResponse::new(record, short_url)))
}
