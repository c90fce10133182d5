//! Core domain entities.
//!
//! - [`Contact`] - A persisted contact with its postal address
//! - [`NewContact`] - Input for creating a contact
//! - [`ContactPatch`] - Input for partially updating a contact

pub mod contact;

pub use contact::{Address, Contact, ContactPatch, NewContact};
