//! Handler for per-link statistics.

use axum::{
    Json,
    extract::{Path, State},
};

use crate::api::dto::stats::StatsResponse;
use crate::error::AppError;
use crate::state::AppState;

/// Returns click statistics for a short code.
///
/// # Endpoint
///
/// `GET /stats/{short_code}`
///
/// Expired links are still reported.
///
/// # Response
///
/// ```json
/// {
///   "original_url": "https://example.com",
///   "short_code": "abc123",
///   "clicks": 42,
///   "created_at": "2024-05-01T12:30:00",
///   "expires_at": null
/// }
/// ```
///
/// # Errors
///
/// Returns 404 Not Found if the short code doesn't exist.
pub async fn stats_handler(
    Path(short_code): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<StatsResponse>, AppError> {
    let record = state.url_service.get_stats(&short_code).await?;

    Ok(Json(record.into()))
}
