//! Handler backing the dashboard table.

use axum::{Json, extract::State};

use crate::api::dto::dashboard::DashboardRecord;
use crate::error::AppError;
use crate::state::AppState;

/// Lists every stored record, expired ones included.
///
/// # Endpoint
///
/// `GET /dashboard-data`
pub async fn dashboard_data_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<DashboardRecord>>, AppError> {
    let records = state.url_service.list_all().await?;

    Ok(Json(records.into_iter().map(Into::into).collect()))
}
