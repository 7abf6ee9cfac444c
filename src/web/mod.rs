//! Web dashboard layer for browser-based UI.
//!
//! Serves the landing page, which creates links through `POST /shorten` and
//! renders the table from `GET /dashboard-data`. Uses Askama templates for
//! server-side rendering.
//!
//! # Modules
//!
//! - [`handlers`] - Template rendering handlers
//! - [`routes`] - Page route configuration

pub mod handlers;
pub mod routes;
