//! Agenda - an in-memory address book with an HTML listing.
//!
//! Contacts are added, removed, updated and searched through a [`Directory`].
//! The listing sorts the contacts by name and hands them to a renderer, which
//! produces the final document (HTML by default, JSON on request). The document
//! can then be written to a file in a single step.
//!
//! # Architecture
//!
//! - **models**: `Person`, `Contact` and the partial `ContactUpdate`
//! - **directory**: the contact collection and its operations
//! - **render**: renderers applied to the result of a query
//! - **export**: writing a rendered document to disk
//! - **config**: configuration from environment variables
//! - **error**: error types for export, rendering and configuration
//!
//! ```
//! use agenda::{Contact, ContactUpdate, Directory};
//!
//! let mut agenda = Directory::new();
//! agenda.add(Contact::new("Luis", "600222222", "Calle Dos 2"));
//! agenda.update("Luis", ContactUpdate::new().phone("699999999"));
//!
//! assert_eq!(agenda.search("lu")[0].phone, "699999999");
//! assert!(agenda.list().contains("<td>Luis</td>"));
//! ```

pub mod config;
pub mod directory;
pub mod error;
pub mod export;
pub mod models;
pub mod render;

pub use config::{Config, ExportFormat};
pub use directory::{Directory, Outcome};
pub use error::{AgendaError, AgendaResult, ConfigError};
pub use export::export_document;
pub use models::{Contact, ContactUpdate, Person};
pub use render::{render_with, ContactRenderer, HtmlRenderer, JsonRenderer};
