//! HTML listing document.

use super::ContactRenderer;
use crate::error::AgendaResult;
use crate::models::Contact;
use std::borrow::Cow;
use std::fmt::Write;

const HEADER: &str = "<html>\n<head><title>Agenda</title></head>\n<body>\n<h1>Agenda de contactos</h1>\n";
const FOOTER: &str = "</body>\n</html>";
const EMPTY_STATE: &str = "<p>No hay contactos en la agenda.</p>\n";
const TABLE_OPEN: &str = "<table border='1'>\n";
const TABLE_HEADER_ROW: &str =
    "<tr><th>Nombre</th><th>Teléfono</th><th>Dirección</th><th>Email</th></tr>\n";
const TABLE_CLOSE: &str = "</table>\n";

/// Renders contacts as a complete HTML page with one table row per contact.
///
/// An empty slice yields the page with a "no contacts" paragraph and no table.
/// A missing or empty email becomes an empty cell.
#[derive(Debug, Clone, Copy, Default)]
pub struct HtmlRenderer;

impl HtmlRenderer {
    /// Render without going through the fallible trait method.
    pub fn document(&self, contacts: &[Contact]) -> String {
        let mut html = String::from(HEADER);

        if contacts.is_empty() {
            html.push_str(EMPTY_STATE);
        } else {
            html.push_str(TABLE_OPEN);
            html.push_str(TABLE_HEADER_ROW);
            for contact in contacts {
                // Writing into a String cannot fail
                let _ = writeln!(
                    html,
                    "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>",
                    escape(contact.name()),
                    escape(&contact.phone),
                    escape(&contact.address),
                    escape(contact.email().unwrap_or_default()),
                );
            }
            html.push_str(TABLE_CLOSE);
        }

        html.push_str(FOOTER);
        html
    }
}

impl ContactRenderer for HtmlRenderer {
    fn render(&self, contacts: &[Contact]) -> AgendaResult<String> {
        Ok(self.document(contacts))
    }
}

/// Escape the characters that would break the markup of a table cell.
fn escape(text: &str) -> Cow<'_, str> {
    if !text.contains(['&', '<', '>']) {
        return Cow::Borrowed(text);
    }

    let mut escaped = String::with_capacity(text.len() + 8);
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            other => escaped.push(other),
        }
    }
    Cow::Owned(escaped)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_document() {
        let html = HtmlRenderer.document(&[]);
        assert_eq!(
            html,
            "<html>\n\
             <head><title>Agenda</title></head>\n\
             <body>\n\
             <h1>Agenda de contactos</h1>\n\
             <p>No hay contactos en la agenda.</p>\n\
             </body>\n\
             </html>"
        );
        assert!(!html.contains("<table"));
    }

    #[test]
    fn test_table_document() {
        let contacts = vec![
            Contact::new("Luis", "699999999", "Calle Dos 2"),
            Contact::new("María", "600333333", "Calle Tres 3").with_email("maria@example.com"),
        ];

        let html = HtmlRenderer.document(&contacts);
        assert_eq!(
            html,
            "<html>\n\
             <head><title>Agenda</title></head>\n\
             <body>\n\
             <h1>Agenda de contactos</h1>\n\
             <table border='1'>\n\
             <tr><th>Nombre</th><th>Teléfono</th><th>Dirección</th><th>Email</th></tr>\n\
             <tr><td>Luis</td><td>699999999</td><td>Calle Dos 2</td><td></td></tr>\n\
             <tr><td>María</td><td>600333333</td><td>Calle Tres 3</td><td>maria@example.com</td></tr>\n\
             </table>\n\
             </body>\n\
             </html>"
        );
    }

    #[test]
    fn test_empty_email_renders_empty_cell() {
        let contacts = vec![Contact::new("Ana", "1", "x").with_email("")];
        let html = HtmlRenderer.document(&contacts);
        assert!(html.contains("<tr><td>Ana</td><td>1</td><td>x</td><td></td></tr>"));
    }

    #[test]
    fn test_cells_are_escaped() {
        let contacts = vec![Contact::new("Tom & Jerry", "<1>", "a")];
        let html = HtmlRenderer.document(&contacts);
        assert!(html.contains("<td>Tom &amp; Jerry</td><td>&lt;1&gt;</td>"));
    }

    #[test]
    fn test_escape_borrows_plain_text() {
        assert!(matches!(escape("Calle Uno 1"), Cow::Borrowed(_)));
    }
}
