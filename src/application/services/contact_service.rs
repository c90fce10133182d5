//! Contact management service.

use crate::domain::entities::{Contact, ContactPatch, NewContact};
use crate::domain::repositories::ContactRepository;
use crate::error::AppError;
use serde_json::json;
use std::sync::Arc;

/// Service for creating, reading, updating and deleting contacts.
///
/// Rejects blank required fields before anything reaches the database and
/// turns missing rows into [`AppError::NotFound`].
pub struct ContactService<R: ContactRepository> {
    repository: Arc<R>,
}

impl<R: ContactRepository> ContactService<R> {
    /// Creates a new contact service.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Creates a new contact.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if a required field is blank.
    /// Returns [`AppError::Conflict`] if the email is already in use.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn create_contact(&self, new_contact: NewContact) -> Result<Contact, AppError> {
        validate_required("first_name", &new_contact.first_name)?;
        validate_required("last_name", &new_contact.last_name)?;
        validate_required("email", &new_contact.email)?;
        validate_required("phone", &new_contact.phone)?;

        let contact = self.repository.create(new_contact).await?;
        tracing::info!(contact_id = contact.id, "Contact created");

        Ok(contact)
    }

    /// Lists all contacts. An empty store yields an empty vector.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn list_contacts(&self) -> Result<Vec<Contact>, AppError> {
        self.repository.list().await
    }

    /// Retrieves a contact by id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the contact does not exist.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn get_contact(&self, id: i64) -> Result<Contact, AppError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::contact_not_found(id))
    }

    /// Applies a partial update. Fields absent from the patch keep their value.
    ///
    /// An empty patch issues no write and returns the stored contact.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if a provided required field is blank.
    /// Returns [`AppError::NotFound`] if the contact does not exist.
    /// Returns [`AppError::Conflict`] if the new email is already in use.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn update_contact(&self, id: i64, patch: ContactPatch) -> Result<Contact, AppError> {
        let required = [
            ("first_name", &patch.first_name),
            ("last_name", &patch.last_name),
            ("email", &patch.email),
            ("phone", &patch.phone),
        ];
        for (field, value) in required {
            if let Some(value) = value {
                validate_required(field, value)?;
            }
        }

        if patch.is_empty() {
            return self.get_contact(id).await;
        }

        let contact = self
            .repository
            .update(id, patch)
            .await?
            .ok_or_else(|| AppError::contact_not_found(id))?;
        tracing::info!(contact_id = id, "Contact updated");

        Ok(contact)
    }

    /// Permanently deletes a contact.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the contact does not exist.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn delete_contact(&self, id: i64) -> Result<(), AppError> {
        if !self.repository.delete(id).await? {
            return Err(AppError::contact_not_found(id));
        }
        tracing::info!(contact_id = id, "Contact deleted");

        Ok(())
    }

    /// Returns the number of stored contacts.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn count_contacts(&self) -> Result<i64, AppError> {
        self.repository.count().await
    }

    /// Checks that the backing store is reachable.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if the database is unreachable.
    pub async fn health_check(&self) -> Result<(), AppError> {
        self.repository.ping().await
    }
}

fn validate_required(field: &'static str, value: &str) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Err(AppError::bad_request(
            format!("Field '{field}' must not be blank"),
            json!({ field: ["required"] }),
        ));
    }
    Ok(())
}
