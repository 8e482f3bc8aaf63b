//! JSON listing document.

use super::ContactRenderer;
use crate::error::AgendaResult;
use crate::models::Contact;

/// Renders contacts as a pretty-printed JSON array.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonRenderer;

impl ContactRenderer for JsonRenderer {
    fn render(&self, contacts: &[Contact]) -> AgendaResult<String> {
        Ok(serde_json::to_string_pretty(contacts)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    #[test]
    fn test_json_array() {
        let contacts = vec![
            Contact::new("Luis", "699999999", "Calle Dos 2"),
            Contact::new("María", "600333333", "Calle Tres 3").with_email("maria@example.com"),
        ];

        let output = JsonRenderer.render(&contacts).unwrap();
        let value: Value = serde_json::from_str(&output).unwrap();
        let rows = value.as_array().unwrap();

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0]["name"], "Luis");
        assert!(rows[0].get("email").is_none());
        assert_eq!(rows[1]["email"], "maria@example.com");
    }

    #[test]
    fn test_json_empty() {
        assert_eq!(JsonRenderer.render(&[]).unwrap(), "[]");
    }
}
