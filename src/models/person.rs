//! Person model: the identity shared by every record in the agenda.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A person with a name and an optional email address.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Person {
    /// Display name, also the lookup key inside a directory
    pub name: String,

    /// Email address
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

impl Person {
    /// Create a person without an email address.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: None,
        }
    }

    /// Set the email address.
    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    /// The email address, treating an empty string as absent.
    pub fn email(&self) -> Option<&str> {
        self.email.as_deref().filter(|email| !email.is_empty())
    }
}

/// Renders `name (email)`, or just `name` when there is no email.
impl fmt::Display for Person {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.email() {
            Some(email) => write!(f, "{} ({})", self.name, email),
            None => write!(f, "{}", self.name),
        }
    }
}
