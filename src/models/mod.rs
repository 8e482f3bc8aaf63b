//! Data models for the agenda.
//!
//! A [`Person`] is the base identity record; a [`Contact`] composes a person
//! with a phone number and an address.

pub mod contact;
pub mod person;

pub use contact::{Contact, ContactUpdate};
pub use person::Person;
