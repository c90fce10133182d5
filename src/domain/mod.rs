//! Domain layer containing the contact entity and its persistence contract.
//!
//! # Architecture
//!
//! - [`entities`] - Core data structures
//! - [`repositories`] - Data access trait definitions
//!
//! The domain layer has no dependencies on infrastructure or presentation layers.
//! Repository traits are implemented in `crate::infrastructure::persistence`, and
//! business rules live in [`crate::application::services`].

pub mod entities;
pub mod repositories;
