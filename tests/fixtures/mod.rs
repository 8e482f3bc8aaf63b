//! Sample contacts shared by the integration tests.

use agenda::{Contact, Directory};

#[allow(dead_code)]
pub fn ana() -> Contact {
    Contact::new("Ana", "600111111", "Calle Uno 1").with_email("ana@example.com")
}

#[allow(dead_code)]
pub fn luis() -> Contact {
    Contact::new("Luis", "600222222", "Calle Dos 2")
}

#[allow(dead_code)]
pub fn maria() -> Contact {
    Contact::new("María", "600333333", "Calle Tres 3").with_email("maria@example.com")
}

/// A directory holding Ana, Luis and María, in that order.
pub fn sample_directory() -> Directory {
    let mut directory = Directory::new();
    for contact in [ana(), luis(), maria()] {
        assert!(directory.add(contact).is_success());
    }
    directory
}

/// Names of the contacts, in the order given.
#[allow(dead_code)]
pub fn names(contacts: &[Contact]) -> Vec<&str> {
    contacts.iter().map(|c| c.name()).collect()
}
