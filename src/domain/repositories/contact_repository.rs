//! Repository trait for contact persistence.

use crate::domain::entities::{Contact, ContactPatch, NewContact};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for contact rows.
///
/// Every method maps to a single SQL statement, so atomicity and the
/// unique-email rule are enforced by the database.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgContactRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ContactRepository: Send + Sync {
    /// Inserts a new contact and returns it with its generated id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the email is already taken.
    /// Returns [`AppError::Internal`] on database errors.
    async fn create(&self, new_contact: NewContact) -> Result<Contact, AppError>;

    /// Lists every contact, ordered by id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn list(&self) -> Result<Vec<Contact>, AppError>;

    /// Finds a contact by id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_by_id(&self, id: i64) -> Result<Option<Contact>, AppError>;

    /// Applies a partial update and returns the resulting row.
    ///
    /// Returns `Ok(None)` if no contact has this id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the new email is already taken.
    /// Returns [`AppError::Internal`] on database errors.
    async fn update(&self, id: i64, patch: ContactPatch) -> Result<Option<Contact>, AppError>;

    /// Hard-deletes a contact.
    ///
    /// Returns `Ok(false)` if no contact has this id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn delete(&self, id: i64) -> Result<bool, AppError>;

    /// Counts stored contacts.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn count(&self) -> Result<i64, AppError>;

    /// Round-trips a trivial query to verify connectivity.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if the database is unreachable.
    async fn ping(&self) -> Result<(), AppError>;
}
