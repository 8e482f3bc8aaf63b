//! Structured result of a directory mutation.

use std::fmt;

/// What a mutating directory operation did, keyed by the name it was given.
///
/// `Display` gives the status line reported to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The contact was appended
    Added(String),

    /// A contact with the same name already exists; nothing changed
    Duplicate(String),

    /// The contact was removed
    Removed(String),

    /// The contact's fields were overwritten
    Updated(String),

    /// No contact has that name; nothing changed
    NotFound(String),
}

impl Outcome {
    /// Whether the directory was changed.
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Added(_) | Self::Removed(_) | Self::Updated(_))
    }

    /// The name the operation was called with.
    pub fn name(&self) -> &str {
        match self {
            Self::Added(name)
            | Self::Duplicate(name)
            | Self::Removed(name)
            | Self::Updated(name)
            | Self::NotFound(name) => name,
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Added(name) => write!(f, "Contacto '{}' añadido correctamente.", name),
            Self::Duplicate(name) => write!(f, "Ya existe un contacto con el nombre: {}", name),
            Self::Removed(name) => write!(f, "Contacto '{}' eliminado.", name),
            Self::Updated(name) => write!(f, "Contacto '{}' modificado.", name),
            Self::NotFound(name) => {
                write!(f, "No se encontró un contacto con el nombre: {}", name)
            }
        }
    }
}
