//! Top-level router configuration combining API and web routes.
//!
//! # Route Structure
//!
//! - `GET    /`                     - Landing page and dashboard
//! - `POST   /shorten`              - Create a short link
//! - `GET    /dashboard-data`       - All records as JSON
//! - `GET    /stats/{short_code}`   - Click statistics
//! - `DELETE /delete/{short_code}`  - Delete a link
//! - `GET    /health`               - Store connectivity
//! - `GET    /{short_code}`         - Redirect
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **CORS** - Configurable allowed origins
//! - **Path normalization** - Trailing slash handling, applied in
//!   [`crate::server`] around the finished router

use crate::api;
use crate::api::middleware::{cors, tracing};
use crate::state::AppState;
use crate::web;
use axum::Router;

/// Constructs the application router with all routes and middleware.
///
/// # Arguments
///
/// - `state` - shared application state injected into all handlers
/// - `allowed_origins` - CORS origins; `*` allows any
pub fn app_router(state: AppState, allowed_origins: &[String]) -> Router {
    Router::new()
        .merge(web::routes::routes())
        .merge(api::routes::routes())
        .with_state(state)
        .layer(cors::layer(allowed_origins))
        .layer(tracing::layer())
}
