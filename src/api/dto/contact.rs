//! DTOs for the contact endpoints.

use serde::{Deserialize, Serialize};
use serde_with::serde_as;
use std::borrow::Cow;
use validator::{Validate, ValidateEmail, ValidationError, ValidationErrors};

use crate::domain::entities::{Address, Contact, ContactPatch, NewContact};

pub const NAME_MAX_LEN: u64 = 80;
pub const EMAIL_MAX_LEN: u64 = 120;
pub const PHONE_MAX_LEN: u64 = 20;
pub const STREET_MAX_LEN: u64 = 120;
pub const CITY_MAX_LEN: u64 = 80;
pub const STATE_MAX_LEN: u64 = 80;
pub const ZIP_CODE_MAX_LEN: u64 = 20;

/// Request body for `POST /api/v1/contacts`.
///
/// Required fields are declared as `Option` so that a missing field is
/// reported as a validation error rather than a deserialization failure.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateContactRequest {
    #[validate(required, length(min = 1, max = NAME_MAX_LEN))]
    pub first_name: Option<String>,

    #[validate(required, length(min = 1, max = NAME_MAX_LEN))]
    pub last_name: Option<String>,

    #[validate(required, email, length(max = EMAIL_MAX_LEN))]
    pub email: Option<String>,

    #[validate(required, length(min = 1, max = PHONE_MAX_LEN))]
    pub phone: Option<String>,

    #[validate(nested)]
    pub address: Option<AddressRequest>,
}

/// Nested address object accepted on create.
#[derive(Debug, Default, Deserialize, Validate)]
pub struct AddressRequest {
    #[validate(length(max = STREET_MAX_LEN))]
    pub street: Option<String>,

    #[validate(length(max = CITY_MAX_LEN))]
    pub city: Option<String>,

    #[validate(length(max = STATE_MAX_LEN))]
    pub state: Option<String>,

    #[validate(length(max = ZIP_CODE_MAX_LEN))]
    pub zip_code: Option<String>,
}

impl From<CreateContactRequest> for NewContact {
    /// Call only after [`Validate::validate`] succeeded; required fields are
    /// guaranteed to be present at that point.
    fn from(req: CreateContactRequest) -> Self {
        let address = req.address.unwrap_or_default();
        NewContact {
            first_name: req.first_name.unwrap_or_default(),
            last_name: req.last_name.unwrap_or_default(),
            email: req.email.unwrap_or_default(),
            phone: req.phone.unwrap_or_default(),
            address: Address {
                street: address.street,
                city: address.city,
                state: address.state,
                zip_code: address.zip_code,
            },
        }
    }
}

/// Request body for `PUT /api/v1/contacts/{id}`.
///
/// Every field is optional and address fields are flat.
///
/// - **Absent** → leave existing value unchanged
/// - **`null`** → clear the value (address fields only; rejected for required fields)
/// - **value** → set new value
#[serde_as]
#[derive(Debug, Default, Deserialize)]
pub struct UpdateContactRequest {
    #[serde(default, with = "::serde_with::rust::double_option")]
    pub first_name: Option<Option<String>>,
    #[serde(default, with = "::serde_with::rust::double_option")]
    pub last_name: Option<Option<String>>,
    #[serde(default, with = "::serde_with::rust::double_option")]
    pub email: Option<Option<String>>,
    #[serde(default, with = "::serde_with::rust::double_option")]
    pub phone: Option<Option<String>>,
    #[serde(default, with = "::serde_with::rust::double_option")]
    pub street: Option<Option<String>>,
    #[serde(default, with = "::serde_with::rust::double_option")]
    pub city: Option<Option<String>>,
    #[serde(default, with = "::serde_with::rust::double_option")]
    pub state: Option<Option<String>>,
    #[serde(default, with = "::serde_with::rust::double_option")]
    pub zip_code: Option<Option<String>>,
}

fn field_error(code: &'static str, message: String) -> ValidationError {
    let mut error = ValidationError::new(code);
    error.message = Some(Cow::from(message));
    error
}

fn check_required(
    errors: &mut ValidationErrors,
    field: &'static str,
    value: &Option<Option<String>>,
    max: u64,
) {
    match value {
        None => {}
        Some(None) => errors.add(
            field,
            field_error("required", format!("{field} cannot be null")),
        ),
        Some(Some(v)) => check_length(errors, field, v, 1, max),
    }
}

fn check_optional(
    errors: &mut ValidationErrors,
    field: &'static str,
    value: &Option<Option<String>>,
    max: u64,
) {
    if let Some(Some(v)) = value {
        check_length(errors, field, v, 0, max);
    }
}

fn check_length(
    errors: &mut ValidationErrors,
    field: &'static str,
    value: &str,
    min: u64,
    max: u64,
) {
    let len = value.chars().count() as u64;
    if len < min || len > max {
        errors.add(
            field,
            field_error(
                "length",
                format!("{field} must be between {min} and {max} characters"),
            ),
        );
    }
}

impl Validate for UpdateContactRequest {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();

        check_required(&mut errors, "first_name", &self.first_name, NAME_MAX_LEN);
        check_required(&mut errors, "last_name", &self.last_name, NAME_MAX_LEN);
        check_required(&mut errors, "email", &self.email, EMAIL_MAX_LEN);
        check_required(&mut errors, "phone", &self.phone, PHONE_MAX_LEN);
        check_optional(&mut errors, "street", &self.street, STREET_MAX_LEN);
        check_optional(&mut errors, "city", &self.city, CITY_MAX_LEN);
        check_optional(&mut errors, "state", &self.state, STATE_MAX_LEN);
        check_optional(&mut errors, "zip_code", &self.zip_code, ZIP_CODE_MAX_LEN);

        if let Some(Some(email)) = &self.email
            && !email.validate_email()
        {
            errors.add(
                "email",
                field_error("email", "email must be a valid email address".to_string()),
            );
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

impl From<UpdateContactRequest> for ContactPatch {
    /// Call only after [`Validate::validate`] succeeded; explicit nulls on
    /// required fields have been rejected by then.
    fn from(req: UpdateContactRequest) -> Self {
        ContactPatch {
            first_name: req.first_name.flatten(),
            last_name: req.last_name.flatten(),
            email: req.email.flatten(),
            phone: req.phone.flatten(),
            street: req.street,
            city: req.city,
            state: req.state,
            zip_code: req.zip_code,
        }
    }
}

/// Serialized address. Missing parts are emitted as `null`.
#[derive(Debug, Serialize)]
pub struct AddressResponse {
    pub street: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub zip_code: Option<String>,
}

/// Serialized contact.
#[derive(Debug, Serialize)]
pub struct ContactResponse {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub address: AddressResponse,
}

impl From<Contact> for ContactResponse {
    fn from(c: Contact) -> Self {
        ContactResponse {
            id: c.id,
            first_name: c.first_name,
            last_name: c.last_name,
            email: c.email,
            phone: c.phone,
            address: AddressResponse {
                street: c.address.street,
                city: c.address.city,
                state: c.address.state,
                zip_code: c.address.zip_code,
            },
        }
    }
}

/// `{ "message"?, "contact" }` wrapper used by create, fetch and update.
#[derive(Debug, Serialize)]
pub struct ContactEnvelope {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub contact: ContactResponse,
}

/// Plain `{ "message" }` body.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn create_request(value: serde_json::Value) -> CreateContactRequest {
        serde_json::from_value(value).unwrap()
    }

    fn update_request(value: serde_json::Value) -> UpdateContactRequest {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_create_request_valid_with_nested_address() {
        let req = create_request(json!({
            "first_name": "Ada",
            "last_name": "Lovelace",
            "email": "ada@example.com",
            "phone": "555-0100",
            "address": { "city": "London" }
        }));

        assert!(req.validate().is_ok());

        let new_contact = NewContact::from(req);
        assert_eq!(new_contact.address.city.as_deref(), Some("London"));
        assert!(new_contact.address.street.is_none());
    }

    #[test]
    fn test_create_request_missing_required_field() {
        let req = create_request(json!({
            "first_name": "Ada",
            "email": "ada@example.com",
            "phone": "555-0100"
        }));

        let errors = req.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("last_name"));
    }

    #[test]
    fn test_create_request_rejects_bad_email_and_long_zip() {
        let req = create_request(json!({
            "first_name": "Ada",
            "last_name": "Lovelace",
            "email": "not-an-email",
            "phone": "555-0100",
            "address": { "zip_code": "x".repeat(21) }
        }));

        let errors = req.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("email"));
        assert!(errors.errors().contains_key("address"));
    }

    #[test]
    fn test_create_and_update_share_name_limit() {
        let at_limit = "a".repeat(NAME_MAX_LEN as usize);
        let over_limit = "a".repeat(NAME_MAX_LEN as usize + 1);

        for (name, ok) in [(at_limit, true), (over_limit, false)] {
            let create = create_request(json!({
                "first_name": name,
                "last_name": "Lovelace",
                "email": "ada@example.com",
                "phone": "555-0100"
            }));
            let update = update_request(json!({ "first_name": name }));

            assert_eq!(create.validate().is_ok(), ok);
            assert_eq!(update.validate().is_ok(), ok);
        }
    }

    #[test]
    fn test_update_request_distinguishes_absent_and_null() {
        let req = update_request(json!({ "city": null, "state": "CA" }));

        assert!(req.validate().is_ok());

        let patch = ContactPatch::from(req);
        assert_eq!(patch.city, Some(None));
        assert_eq!(patch.state, Some(Some("CA".to_string())));
        assert!(patch.street.is_none());
        assert!(patch.first_name.is_none());
    }

    #[test]
    fn test_update_request_rejects_null_required_field() {
        let req = update_request(json!({ "phone": null }));

        let errors = req.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("phone"));
    }

    #[test]
    fn test_update_request_rejects_bad_email() {
        let req = update_request(json!({ "email": "nope" }));

        assert!(req.validate().is_err());
    }

    #[test]
    fn test_empty_update_request_is_valid() {
        let req = update_request(json!({}));

        assert!(req.validate().is_ok());
        assert!(ContactPatch::from(req).is_empty());
    }

    #[test]
    fn test_contact_response_shape() {
        let contact = Contact {
            id: 1,
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            email: "ada@example.com".to_string(),
            phone: "555-0100".to_string(),
            address: Address::default(),
        };

        let value = serde_json::to_value(ContactEnvelope {
            message: None,
            contact: contact.into(),
        })
        .unwrap();

        assert!(value.get("message").is_none());
        assert_eq!(value["contact"]["id"], 1);
        assert_eq!(
            value["contact"]["address"],
            json!({ "street": null, "city": null, "state": null, "zip_code": null })
        );
    }
}
