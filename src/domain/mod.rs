//! Domain layer containing the URL record entity and the store contract.
//!
//! - [`entities`] - Core data structures
//! - [`repositories`] - Store trait implemented by the infrastructure layer

pub mod entities;
pub mod repositories;
