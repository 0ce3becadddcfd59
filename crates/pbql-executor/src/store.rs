//! Contact storage.
//!
//! This module defines the [`ContactStore`] trait the interpreter runs
//! commands against, and [`PhoneBook`], the in-memory store shipped with the
//! crate.
//!
//! # Example: a custom store
//!
//! ```ignore
//! use pbql_executor::{Contact, ContactStore, Interpreter};
//!
//! impl ContactStore for MyStore {
//!     fn get(&self, name: &str) -> Option<&Contact> { self.by_name.get(name) }
//!     fn get_mut(&mut self, name: &str) -> Option<&mut Contact> { self.by_name.get_mut(name) }
//!     fn insert(&mut self, contact: Contact) -> bool { /* ... */ }
//!     fn remove(&mut self, name: &str) -> Option<Contact> { self.by_name.remove(name) }
//!     fn contacts(&self) -> Box<dyn Iterator<Item = &Contact> + '_> {
//!         Box::new(self.by_name.values())
//!     }
//! }
//!
//! let mut store = MyStore::default();
//! let lines = Interpreter::new(&mut store).run("Создай контакт Иван;")?;
//! ```

use hashbrown::HashMap;

use crate::contact::Contact;

/// Storage of contacts keyed by name.
///
/// Iteration order must be stable between calls so query output is
/// deterministic.
pub trait ContactStore: Send + Sync {
    /// Looks a contact up by name.
    fn get(&self, name: &str) -> Option<&Contact>;

    /// Looks a contact up by name for mutation.
    fn get_mut(&mut self, name: &str) -> Option<&mut Contact>;

    /// Inserts `contact` unless its name is taken.
    ///
    /// Returns `false` and leaves the store unchanged when the name exists.
    fn insert(&mut self, contact: Contact) -> bool;

    /// Removes a contact by name.
    fn remove(&mut self, name: &str) -> Option<Contact>;

    /// Iterates over all contacts in a stable order.
    fn contacts(&self) -> Box<dyn Iterator<Item = &Contact> + '_>;

    /// Whether a contact with this name exists.
    fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Number of stored contacts.
    fn len(&self) -> usize {
        self.contacts().count()
    }

    /// Whether the store holds no contacts.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Contacts whose name, phone or email contains `query`, in iteration
    /// order. The empty query matches nothing.
    fn find(&self, query: &str) -> Vec<&Contact> {
        self.contacts().filter(|c| c.matches(query)).collect()
    }
}

/// In-memory phone book that iterates in insertion order.
#[derive(Debug, Clone, Default)]
pub struct PhoneBook {
    contacts: HashMap<String, Contact>,
    order: Vec<String>,
}

impl PhoneBook {
    /// Creates an empty phone book.
    pub fn new() -> Self {
        Self::default()
    }

    /// Contact names in insertion order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.order.iter().map(String::as_str)
    }
}

impl ContactStore for PhoneBook {
    fn get(&self, name: &str) -> Option<&Contact> {
        self.contacts.get(name)
    }

    fn get_mut(&mut self, name: &str) -> Option<&mut Contact> {
        self.contacts.get_mut(name)
    }

    fn insert(&mut self, contact: Contact) -> bool {
        if self.contacts.contains_key(contact.name()) {
            return false;
        }
        self.order.push(contact.name().to_string());
        self.contacts.insert(contact.name().to_string(), contact);
        true
    }

    fn remove(&mut self, name: &str) -> Option<Contact> {
        let contact = self.contacts.remove(name)?;
        self.order.retain(|n| n != name);
        Some(contact)
    }

    fn contacts(&self) -> Box<dyn Iterator<Item = &Contact> + '_> {
        Box::new(self.order.iter().filter_map(|name| self.contacts.get(name)))
    }

    fn len(&self) -> usize {
        self.contacts.len()
    }
}
