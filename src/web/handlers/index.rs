//! Landing page handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::response::IntoResponse;

/// Template for the landing page.
///
/// Renders `templates/index.html`: a form to shorten a URL and a table of
/// every stored link with its clicks, expiry and a delete action. The table
/// is filled client-side from `/dashboard-data`.
#[derive(Template, WebTemplate)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    pub version: &'static str,
}

/// Renders the landing page.
///
/// # Endpoint
///
/// `GET /`
pub async fn index_handler() -> impl IntoResponse {
    IndexTemplate {
        version: env!("CARGO_PKG_VERSION"),
    }
}
