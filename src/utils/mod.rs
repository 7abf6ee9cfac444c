//! Helpers shared across layers:
//!
//! - [`code_generator`] - Short code generation and validation
//! - [`timestamp`] - `expires_at` parsing and ISO-8601 rendering
//! - [`base_url`] - Request origin for building short URLs

pub mod base_url;
pub mod code_generator;
pub mod timestamp;
