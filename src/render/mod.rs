//! Renderers turning a sequence of contacts into a document.
//!
//! A renderer is applied after a query: the query produces the contacts, the
//! renderer produces the text handed back to the caller. [`render_with`] is the
//! composition point, so any operation returning contacts can be wrapped.

mod html;
mod json;

pub use html::HtmlRenderer;
pub use json::JsonRenderer;

use crate::error::AgendaResult;
use crate::models::Contact;

/// Something that turns a slice of contacts into a complete document.
pub trait ContactRenderer {
    /// Render the contacts, in the order given.
    fn render(&self, contacts: &[Contact]) -> AgendaResult<String>;
}

/// Run `query` and pass its result through `renderer`.
pub fn render_with<R, F>(renderer: &R, query: F) -> AgendaResult<String>
where
    R: ContactRenderer + ?Sized,
    F: FnOnce() -> Vec<Contact>,
{
    let contacts = query();
    renderer.render(&contacts)
}
