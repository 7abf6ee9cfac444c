//! Application layer services implementing business logic.
//!
//! Services consume repository traits and expose the operations HTTP handlers
//! and the admin CLI call into.
//!
//! # Available Services
//!
//! - [`services::url_service::UrlService`] - Short URL creation, resolution, stats and deletion

pub mod services;
