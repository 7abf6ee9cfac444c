//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to a logical grouping of endpoints.

pub mod dashboard;
pub mod delete;
pub mod health;
pub mod redirect;
pub mod shorten;
pub mod stats;

pub use dashboard::dashboard_data_handler;
pub use delete::delete_handler;
pub use health::health_handler;
pub use redirect::redirect_handler;
pub use shorten::shorten_handler;
pub use stats::stats_handler;
