//! Contact model: a person plus the phone and address stored in the agenda.

use super::person::Person;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A contact in the agenda.
///
/// The name and email live in the embedded [`Person`]; the directory may
/// overwrite `phone`, `address` and `email` in place, never the name.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Contact {
    /// Identity (name and optional email)
    #[serde(flatten)]
    pub person: Person,

    /// Phone number, stored as given
    pub phone: String,

    /// Postal address, stored as given
    pub address: String,
}

impl Contact {
    /// Create a contact without an email address.
    pub fn new(
        name: impl Into<String>,
        phone: impl Into<String>,
        address: impl Into<String>,
    ) -> Self {
        Self {
            person: Person::new(name),
            phone: phone.into(),
            address: address.into(),
        }
    }

    /// Set the email address.
    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.person.email = Some(email.into());
        self
    }

    /// The contact's name.
    pub fn name(&self) -> &str {
        &self.person.name
    }

    /// The email address, treating an empty string as absent.
    pub fn email(&self) -> Option<&str> {
        self.person.email()
    }

    /// Apply the fields present in `update`, leaving the others untouched.
    pub fn apply(&mut self, update: ContactUpdate) {
        if let Some(phone) = update.phone {
            self.phone = phone;
        }
        if let Some(address) = update.address {
            self.address = address;
        }
        if let Some(email) = update.email {
            self.person.email = Some(email);
        }
    }
}

/// Renders the person, then ` - Tel: {phone}, Dir: {address}`.
impl fmt::Display for Contact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - Tel: {}, Dir: {}", self.person, self.phone, self.address)
    }
}

/// Partial update of a contact's mutable fields.
///
/// `None` leaves a field as it is. `Some(String::new())` is a real value and
/// clears the field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactUpdate {
    pub phone: Option<String>,
    pub address: Option<String>,
    pub email: Option<String>,
}

impl ContactUpdate {
    /// An update that changes nothing.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = Some(phone.into());
        self
    }

    pub fn address(mut self, address: impl Into<String>) -> Self {
        self.address = Some(address.into());
        self
    }

    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    /// Whether no field would be changed.
    pub fn is_empty(&self) -> bool {
        self.phone.is_none() && self.address.is_none() && self.email.is_none()
    }
}
