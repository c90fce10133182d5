//! Infrastructure layer for external integrations.
//!
//! This layer implements interfaces defined by the domain layer.
//!
//! # Modules
//!
//! - [`database`] - Connection pool and migrations
//! - [`persistence`] - PostgreSQL repository implementations

pub mod database;
pub mod persistence;
