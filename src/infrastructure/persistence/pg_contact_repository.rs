//! PostgreSQL implementation of the contact repository.

use async_trait::async_trait;
use sqlx::{FromRow, PgPool};
use std::sync::Arc;

use crate::domain::entities::{Address, Contact, ContactPatch, NewContact};
use crate::domain::repositories::ContactRepository;
use crate::error::AppError;

/// Raw `contacts` row as returned by `SELECT`/`RETURNING`.
#[derive(Debug, FromRow)]
struct ContactRow {
    id: i64,
    first_name: String,
    last_name: String,
    email: String,
    phone: String,
    street: Option<String>,
    city: Option<String>,
    state: Option<String>,
    zip_code: Option<String>,
}

impl From<ContactRow> for Contact {
    fn from(r: ContactRow) -> Self {
        Contact {
            id: r.id,
            first_name: r.first_name,
            last_name: r.last_name,
            email: r.email,
            phone: r.phone,
            address: Address {
                street: r.street,
                city: r.city,
                state: r.state,
                zip_code: r.zip_code,
            },
        }
    }
}

/// Splits a double option into a "column is being set" flag and its new value.
fn set_flag(field: Option<Option<String>>) -> (bool, Option<String>) {
    match field {
        Some(value) => (true, value),
        None => (false, None),
    }
}

/// PostgreSQL repository for contacts.
///
/// Uses hard delete. Email uniqueness is enforced by the `contacts_email_key`
/// constraint and surfaces as [`AppError::Conflict`].
pub struct PgContactRepository {
    pool: Arc<PgPool>,
}

impl PgContactRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ContactRepository for PgContactRepository {
    async fn create(&self, new_contact: NewContact) -> Result<Contact, AppError> {
        let row = sqlx::query_as::<_, ContactRow>(
            r#"
            INSERT INTO contacts (first_name, last_name, email, phone, street, city, state, zip_code)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING id, first_name, last_name, email, phone, street, city, state, zip_code
            "#,
        )
        .bind(new_contact.first_name)
        .bind(new_contact.last_name)
        .bind(new_contact.email)
        .bind(new_contact.phone)
        .bind(new_contact.address.street)
        .bind(new_contact.address.city)
        .bind(new_contact.address.state)
        .bind(new_contact.address.zip_code)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(row.into())
    }

    async fn list(&self) -> Result<Vec<Contact>, AppError> {
        let rows = sqlx::query_as::<_, ContactRow>(
            r#"
            SELECT id, first_name, last_name, email, phone, street, city, state, zip_code
            FROM contacts
            ORDER BY id
            "#,
        )
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(Contact::from).collect())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Contact>, AppError> {
        let row = sqlx::query_as::<_, ContactRow>(
            r#"
            SELECT id, first_name, last_name, email, phone, street, city, state, zip_code
            FROM contacts
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Contact::from))
    }

    async fn update(&self, id: i64, patch: ContactPatch) -> Result<Option<Contact>, AppError> {
        let (set_street, street) = set_flag(patch.street);
        let (set_city, city) = set_flag(patch.city);
        let (set_state, state) = set_flag(patch.state);
        let (set_zip_code, zip_code) = set_flag(patch.zip_code);

        let row = sqlx::query_as::<_, ContactRow>(
            r#"
            UPDATE contacts SET
                first_name = COALESCE($2::TEXT, first_name),
                last_name  = COALESCE($3::TEXT, last_name),
                email      = COALESCE($4::TEXT, email),
                phone      = COALESCE($5::TEXT, phone),
                street     = CASE WHEN $6::BOOLEAN THEN $7::TEXT ELSE street END,
                city       = CASE WHEN $8::BOOLEAN THEN $9::TEXT ELSE city END,
                state      = CASE WHEN $10::BOOLEAN THEN $11::TEXT ELSE state END,
                zip_code   = CASE WHEN $12::BOOLEAN THEN $13::TEXT ELSE zip_code END
            WHERE id = $1
            RETURNING id, first_name, last_name, email, phone, street, city, state, zip_code
            "#,
        )
        .bind(id)
        .bind(patch.first_name)
        .bind(patch.last_name)
        .bind(patch.email)
        .bind(patch.phone)
        .bind(set_street)
        .bind(street)
        .bind(set_city)
        .bind(city)
        .bind(set_state)
        .bind(state)
        .bind(set_zip_code)
        .bind(zip_code)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Contact::from))
    }

    async fn delete(&self, id: i64) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM contacts WHERE id = $1")
            .bind(id)
            .execute(self.pool.as_ref())
            .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn count(&self) -> Result<i64, AppError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM contacts")
            .fetch_one(self.pool.as_ref())
            .await?;

        Ok(count)
    }

    async fn ping(&self) -> Result<(), AppError> {
        sqlx::query("SELECT 1").execute(self.pool.as_ref()).await?;
        Ok(())
    }
}
