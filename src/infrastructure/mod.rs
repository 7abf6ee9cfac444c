//! Infrastructure layer: concrete implementations of the domain store trait.
//!
//! - [`persistence`] - PostgreSQL and in-memory repositories

pub mod persistence;
