//! API route configuration.

use crate::api::handlers::{
    dashboard_data_handler, delete_handler, health_handler, redirect_handler, shorten_handler,
    stats_handler,
};
use crate::state::AppState;
use axum::{
    Router,
    routing::{delete, get, post},
};

/// JSON API and redirect routes.
///
/// # Endpoints
///
/// - `POST   /shorten`              - Create a short link
/// - `GET    /dashboard-data`       - List every stored record
/// - `GET    /stats/{short_code}`   - Click statistics for one link
/// - `DELETE /delete/{short_code}`  - Permanently delete a link
/// - `GET    /health`               - Store connectivity check
/// - `GET    /{short_code}`         - Redirect to the original URL
///
/// Static segments take precedence over `/{short_code}`, so a link can never
/// shadow one of the fixed routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/shorten", post(shorten_handler))
        .route("/dashboard-data", get(dashboard_data_handler))
        .route("/stats/{short_code}", get(stats_handler))
        .route("/delete/{short_code}", delete(delete_handler))
        .route("/health", get(health_handler))
        .route("/{short_code}", get(redirect_handler))
}
