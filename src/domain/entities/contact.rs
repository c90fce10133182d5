//! Contact entity and its creation/update inputs.

/// Postal address attached to a contact. Every part is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Address {
    pub street: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub zip_code: Option<String>,
}

/// A persisted contact.
///
/// `id` is assigned by the database on insert and never changes afterwards.
/// `email` is unique across all contacts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Contact {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub address: Address,
}

impl Contact {
    /// Returns the contact's display name.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// Input data for creating a new contact.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewContact {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub address: Address,
}

/// Partial update for an existing contact.
///
/// `None` fields are left unchanged. Address parts are double options:
/// `Some(None)` clears the value, `Some(Some(v))` sets it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactPatch {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub street: Option<Option<String>>,
    pub city: Option<Option<String>>,
    pub state: Option<Option<String>>,
    pub zip_code: Option<Option<String>>,
}

impl ContactPatch {
    /// Returns true when the patch would not change anything.
    pub fn is_empty(&self) -> bool {
        self.first_name.is_none()
            && self.last_name.is_none()
            && self.email.is_none()
            && self.phone.is_none()
            && self.street.is_none()
            && self.city.is_none()
            && self.state.is_none()
            && self.zip_code.is_none()
    }

    /// Applies the patch to an in-memory contact.
    ///
    /// Mirrors the column-by-column merge performed by the repository.
    #[cfg(test)]
    pub fn apply_to(self, contact: &mut Contact) {
        if let Some(v) = self.first_name {
            contact.first_name = v;
        }
        if let Some(v) = self.last_name {
            contact.last_name = v;
        }
        if let Some(v) = self.email {
            contact.email = v;
        }
        if let Some(v) = self.phone {
            contact.phone = v;
        }
        if let Some(v) = self.street {
            contact.address.street = v;
        }
        if let Some(v) = self.city {
            contact.address.city = v;
        }
        if let Some(v) = self.state {
            contact.address.state = v;
        }
        if let Some(v) = self.zip_code {
            contact.address.zip_code = v;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Contact {
        Contact {
            id: 1,
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            email: "ada@example.com".to_string(),
            phone: "555-0100".to_string(),
            address: Address {
                street: Some("12 St James's Square".to_string()),
                city: Some("London".to_string()),
                state: None,
                zip_code: None,
            },
        }
    }

    #[test]
    fn test_full_name() {
        assert_eq!(sample().full_name(), "Ada Lovelace");
    }

    #[test]
    fn test_patch_default_is_empty() {
        assert!(ContactPatch::default().is_empty());

        let patch = ContactPatch {
            city: Some(None),
            ..Default::default()
        };
        assert!(!patch.is_empty());
    }

    #[test]
    fn test_apply_changes_only_present_fields() {
        let mut contact = sample();
        let patch = ContactPatch {
            phone: Some("555-0000".to_string()),
            ..Default::default()
        };

        patch.apply_to(&mut contact);

        let mut expected = sample();
        expected.phone = "555-0000".to_string();
        assert_eq!(contact, expected);
    }

    #[test]
    fn test_apply_clears_address_part() {
        let mut contact = sample();
        let patch = ContactPatch {
            city: Some(None),
            state: Some(Some("Middlesex".to_string())),
            ..Default::default()
        };

        patch.apply_to(&mut contact);

        assert!(contact.address.city.is_none());
        assert_eq!(contact.address.state.as_deref(), Some("Middlesex"));
        assert_eq!(
            contact.address.street.as_deref(),
            Some("12 St James's Square")
        );
    }
}
