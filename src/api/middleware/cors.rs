//! Cross-origin resource sharing for the dashboard and API.

use axum::http::HeaderValue;
use tower_http::cors::{Any, CorsLayer};

/// Builds the CORS layer from the configured origins.
///
/// `*` anywhere in the list allows every origin. Otherwise only the listed
/// origins are allowed; entries that are not valid header values are skipped.
///
/// # Example
///
/// ```rust,ignore
/// let app = Router::new()
///     .route("/shorten", post(shorten_handler))
///     .layer(cors::layer(&["https://app.example.com".to_string()]));
/// ```
pub fn layer(allowed_origins: &[String]) -> CorsLayer {
    if allowed_origins.is_empty() || allowed_origins.iter().any(|o| o == "*") {
        return CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any);
    }

    let origins: Vec<HeaderValue> = allowed_origins
        .iter()
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(_) => {
                ::tracing::warn!(origin = %origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods(Any)
        .allow_headers(Any)
}
