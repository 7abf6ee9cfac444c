//! HTML template rendering handlers for the web dashboard.

mod index;

pub use index::index_handler;
