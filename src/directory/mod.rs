//! The directory: an ordered, in-memory collection of contacts.
//!
//! Names are unique within a directory. Lookups for add, remove and update match
//! names exactly (case-sensitive); search and the sorted listing compare names
//! case-insensitively.

mod outcome;

pub use outcome::Outcome;

use crate::error::AgendaResult;
use crate::export::export_document;
use crate::models::{Contact, ContactUpdate};
use crate::render::{render_with, ContactRenderer, HtmlRenderer};
use std::path::Path;
use tracing::{debug, info, warn};

/// An address book that owns its contacts in insertion order.
#[derive(Debug, Clone, Default)]
pub struct Directory {
    contacts: Vec<Contact>,
}

impl Directory {
    /// Create an empty directory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of contacts.
    pub fn len(&self) -> usize {
        self.contacts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contacts.is_empty()
    }

    /// Contacts in insertion order.
    pub fn contacts(&self) -> &[Contact] {
        &self.contacts
    }

    /// Look up a contact by exact name.
    pub fn get(&self, name: &str) -> Option<&Contact> {
        self.contacts.iter().find(|c| c.name() == name)
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.contacts.iter().position(|c| c.name() == name)
    }

    /// Append a contact unless one with the same name already exists.
    pub fn add(&mut self, contact: Contact) -> Outcome {
        let name = contact.name().to_string();

        let outcome = if self.get(&name).is_some() {
            Outcome::Duplicate(name)
        } else {
            self.contacts.push(contact);
            Outcome::Added(name)
        };

        report(&outcome);
        outcome
    }

    /// Remove the first contact whose name matches exactly.
    pub fn remove(&mut self, name: &str) -> Outcome {
        let outcome = match self.position(name) {
            Some(index) => {
                self.contacts.remove(index);
                Outcome::Removed(name.to_string())
            }
            None => Outcome::NotFound(name.to_string()),
        };

        report(&outcome);
        outcome
    }

    /// Overwrite the fields present in `update` on the contact named `name`.
    ///
    /// An update with no fields still reports `Updated` when the contact exists.
    pub fn update(&mut self, name: &str, update: ContactUpdate) -> Outcome {
        let outcome = match self.contacts.iter_mut().find(|c| c.name() == name) {
            Some(contact) => {
                contact.apply(update);
                Outcome::Updated(name.to_string())
            }
            None => Outcome::NotFound(name.to_string()),
        };

        report(&outcome);
        outcome
    }

    /// Contacts whose name contains `text`, ignoring case, in insertion order.
    ///
    /// An empty `text` matches every contact.
    pub fn search(&self, text: &str) -> Vec<Contact> {
        let needle = text.to_lowercase();
        let found: Vec<Contact> = self
            .contacts
            .iter()
            .filter(|c| c.name().to_lowercase().contains(&needle))
            .cloned()
            .collect();

        debug!("Search '{}' matched {} contact(s)", text, found.len());
        found
    }

    /// All contacts sorted by case-insensitive name.
    ///
    /// The sort is stable: names equal under case folding keep insertion order.
    pub fn sorted(&self) -> Vec<Contact> {
        let mut contacts = self.contacts.clone();
        contacts.sort_by_cached_key(|c| c.name().to_lowercase());
        contacts
    }

    /// The sorted listing rendered as an HTML document.
    pub fn list(&self) -> String {
        HtmlRenderer.document(&self.sorted())
    }

    /// The sorted listing rendered by `renderer`.
    pub fn list_with<R>(&self, renderer: &R) -> AgendaResult<String>
    where
        R: ContactRenderer + ?Sized,
    {
        render_with(renderer, || self.sorted())
    }

    /// Search results rendered by `renderer`.
    pub fn search_with<R>(&self, text: &str, renderer: &R) -> AgendaResult<String>
    where
        R: ContactRenderer + ?Sized,
    {
        render_with(renderer, || self.search(text))
    }

    /// Render the sorted listing with `renderer` and write it to `path`.
    pub fn export_listing<R>(&self, path: impl AsRef<Path>, renderer: &R) -> AgendaResult<()>
    where
        R: ContactRenderer + ?Sized,
    {
        let document = self.list_with(renderer)?;
        export_document(path, &document)
    }
}

/// Emit the status line of a mutation on the log.
fn report(outcome: &Outcome) {
    if outcome.is_success() {
        info!("{}", outcome);
    } else {
        warn!("{}", outcome);
    }
}
