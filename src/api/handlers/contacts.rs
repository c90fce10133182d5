//! Handlers for contact CRUD endpoints.

use axum::{Json, body::Bytes, extract::State, http::StatusCode};
use validator::Validate;

use crate::api::dto::contact::{
    ContactEnvelope, ContactResponse, CreateContactRequest, MessageResponse, UpdateContactRequest,
};
use crate::api::extract::{ContactId, JsonBody};
use crate::error::AppError;
use crate::state::AppState;

/// Creates a contact.
///
/// # Endpoint
///
/// `POST /api/v1/contacts`
///
/// # Request Body
///
/// ```json
/// {
///   "first_name": "Ada",
///   "last_name": "Lovelace",
///   "email": "ada@example.com",
///   "phone": "555-0100",
///   "address": { "street": "...", "city": "...", "state": "...", "zip_code": "..." }
/// }
/// ```
///
/// `address` and each of its parts are optional.
///
/// # Errors
///
/// Returns 400 if a required field is missing or malformed.
/// Returns 409 if the email is already in use.
pub async fn create_contact_handler(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<CreateContactRequest>,
) -> Result<(StatusCode, Json<ContactEnvelope>), AppError> {
    payload.validate()?;

    let contact = state.contact_service.create_contact(payload.into()).await?;

    Ok((
        StatusCode::CREATED,
        Json(ContactEnvelope {
            message: Some("Contact created successfully".to_string()),
            contact: contact.into(),
        }),
    ))
}

/// Lists all contacts.
///
/// # Endpoint
///
/// `GET /api/v1/contacts`
///
/// Responds with a bare JSON array, empty when no contacts exist.
pub async fn list_contacts_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<ContactResponse>>, AppError> {
    let contacts = state.contact_service.list_contacts().await?;

    Ok(Json(contacts.into_iter().map(ContactResponse::from).collect()))
}

/// Fetches a single contact.
///
/// # Endpoint
///
/// `GET /api/v1/contacts/{id}`
///
/// # Errors
///
/// Returns 404 if the contact does not exist.
pub async fn get_contact_handler(
    ContactId(id): ContactId,
    State(state): State<AppState>,
) -> Result<Json<ContactEnvelope>, AppError> {
    let contact = state.contact_service.get_contact(id).await?;

    Ok(Json(ContactEnvelope {
        message: None,
        contact: contact.into(),
    }))
}

/// Partially updates a contact.
///
/// # Endpoint
///
/// `PUT /api/v1/contacts/{id}`
///
/// # Request Body
///
/// Any subset of `first_name`, `last_name`, `email`, `phone`, `street`, `city`,
/// `state`, `zip_code`. Address fields are flat here, not nested. Omitted fields
/// keep their current value; `null` clears an address field.
///
/// # Errors
///
/// Returns 404 if the contact does not exist, whatever the body contains.
/// Returns 400 if a field is malformed or a required field is set to `null`.
/// Returns 409 if the new email is already in use.
pub async fn update_contact_handler(
    ContactId(id): ContactId,
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<ContactEnvelope>, AppError> {
    state.contact_service.get_contact(id).await?;

    let JsonBody(payload) = JsonBody::<UpdateContactRequest>::from_bytes(&body)?;
    payload.validate()?;

    let contact = state
        .contact_service
        .update_contact(id, payload.into())
        .await?;

    Ok(Json(ContactEnvelope {
        message: Some("Contact updated successfully".to_string()),
        contact: contact.into(),
    }))
}

/// Permanently deletes a contact.
///
/// # Endpoint
///
/// `DELETE /api/v1/contacts/{id}`
///
/// Deleting the same id twice yields 200 then 404.
///
/// # Errors
///
/// Returns 404 if the contact does not exist.
pub async fn delete_contact_handler(
    ContactId(id): ContactId,
    State(state): State<AppState>,
) -> Result<Json<MessageResponse>, AppError> {
    state.contact_service.delete_contact(id).await?;

    Ok(Json(MessageResponse {
        message: "Contact deleted successfully".to_string(),
    }))
}
