//! API route configuration.

use crate::api::handlers::{
    create_contact_handler, delete_contact_handler, get_contact_handler, list_contacts_handler,
    update_contact_handler,
};
use crate::state::AppState;
use axum::{Router, routing::get};

/// Contact CRUD routes, mounted under `/api/v1`.
///
/// # Endpoints
///
/// - `POST   /contacts`       - Create a contact
/// - `GET    /contacts`       - List all contacts
/// - `GET    /contacts/{id}`  - Fetch a contact
/// - `PUT    /contacts/{id}`  - Partially update a contact
/// - `DELETE /contacts/{id}`  - Delete a contact
pub fn contact_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/contacts",
            get(list_contacts_handler).post(create_contact_handler),
        )
        .route(
            "/contacts/{id}",
            get(get_contact_handler)
                .put(update_contact_handler)
                .delete(delete_contact_handler),
        )
}
