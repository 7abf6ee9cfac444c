//! Handler for link deletion.

use axum::{
    Json,
    extract::{Path, State},
};

use crate::api::dto::message::MessageResponse;
use crate::error::AppError;
use crate::state::AppState;

/// Permanently deletes a short link.
///
/// # Endpoint
///
/// `DELETE /delete/{short_code}`
///
/// # Errors
///
/// Returns 404 Not Found with `{"error": "URL not found"}` if nothing matched.
pub async fn delete_handler(
    Path(short_code): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<MessageResponse>, AppError> {
    state.url_service.delete(&short_code).await?;

    Ok(Json(MessageResponse::new("Deleted successfully")))
}
