//! HTTP middleware applied to every route.
//!
//! Provides cross-origin handling and request observability.

pub mod cors;
pub mod tracing;
