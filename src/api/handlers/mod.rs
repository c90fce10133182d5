//! HTTP request handlers for API endpoints.

pub mod contacts;
pub mod health;

pub use contacts::{
    create_contact_handler, delete_contact_handler, get_contact_handler, list_contacts_handler,
    update_contact_handler,
};
pub use health::health_handler;
