//! Shared application state injected into every handler.

use std::sync::Arc;

use crate::application::services::UrlService;

#[derive(Clone)]
pub struct AppState {
    pub url_service: Arc<UrlService>,
    /// Fixed origin for short URLs; derived from the request when `None`.
    pub public_base_url: Option<String>,
}

impl AppState {
    pub fn new(url_service: Arc<UrlService>, public_base_url: Option<String>) -> Self {
        Self {
            url_service,
            public_base_url,
        }
    }
}
