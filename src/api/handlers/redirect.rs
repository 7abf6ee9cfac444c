//! Handler for short URL redirect.

use axum::{
    extract::{Path, State},
    http::{HeaderValue, StatusCode, header},
    response::IntoResponse,
};

use crate::error::AppError;
use crate::state::AppState;

/// Redirects a short code to its original URL.
///
/// # Endpoint
///
/// `GET /{short_code}`
///
/// Responds with 302 Found and the stored URL in `Location`. Each successful
/// redirect increments the link's click counter.
///
/// # Errors
///
/// Returns 404 Not Found for unknown codes and 410 Gone for expired links.
pub async fn redirect_handler(
    Path(short_code): Path<String>,
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let target = state.url_service.resolve(&short_code).await?;

    let location = HeaderValue::try_from(target)
        .map_err(|e| AppError::internal(format!("Stored URL is not a valid header: {}", e)))?;

    Ok((StatusCode::FOUND, [(header::LOCATION, location)]))
}
