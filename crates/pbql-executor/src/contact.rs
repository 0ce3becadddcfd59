//! Contact records.

use pbql::Field;

use crate::config::InterpreterConfig;
use crate::phone::format_phone;

/// A phone book entry.
///
/// Phones and emails behave like sets that remember insertion order: adding a
/// value twice keeps one copy, output follows the order values were first
/// added in.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Contact {
    name: String,
    phones: Vec<String>,
    emails: Vec<String>,
}

impl Contact {
    /// Creates a contact without phones or emails.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            phones: Vec::new(),
            emails: Vec::new(),
        }
    }

    /// Contact name; also its key in the store.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Stored phone numbers, ten bare digits each.
    pub fn phones(&self) -> &[String] {
        &self.phones
    }

    /// Stored emails.
    pub fn emails(&self) -> &[String] {
        &self.emails
    }

    /// Adds phones not stored yet.
    pub fn add_phones<'p>(&mut self, phones: impl IntoIterator<Item = &'p String>) {
        add_unique(&mut self.phones, phones);
    }

    /// Adds emails not stored yet.
    pub fn add_emails<'e>(&mut self, emails: impl IntoIterator<Item = &'e String>) {
        add_unique(&mut self.emails, emails);
    }

    /// Removes the given phones, ignoring absent ones.
    pub fn remove_phones<'p>(&mut self, phones: impl IntoIterator<Item = &'p String>) {
        remove_all(&mut self.phones, phones);
    }

    /// Removes the given emails, ignoring absent ones.
    pub fn remove_emails<'e>(&mut self, emails: impl IntoIterator<Item = &'e String>) {
        remove_all(&mut self.emails, emails);
    }

    /// Whether the name, a phone or an email contains `query`.
    ///
    /// The empty query matches nothing.
    pub fn matches(&self, query: &str) -> bool {
        if query.is_empty() {
            return false;
        }
        self.name.contains(query)
            || self.phones.iter().any(|phone| phone.contains(query))
            || self.emails.iter().any(|email| email.contains(query))
    }

    /// Renders the requested fields as one output line.
    pub fn project(&self, fields: &[Field], config: &InterpreterConfig) -> String {
        fields
            .iter()
            .map(|field| match field {
                Field::Name => self.name.clone(),
                Field::Phones => self
                    .phones
                    .iter()
                    .map(|phone| format_phone(phone, &config.country_code))
                    .collect::<Vec<_>>()
                    .join(config.value_separator.as_str()),
                Field::Emails => self.emails.join(config.value_separator.as_str()),
            })
            .collect::<Vec<_>>()
            .join(config.field_separator.as_str())
    }
}

fn add_unique<'v>(values: &mut Vec<String>, new: impl IntoIterator<Item = &'v String>) {
    for value in new {
        if !values.contains(value) {
            values.push(value.clone());
        }
    }
}

fn remove_all<'v>(values: &mut Vec<String>, gone: impl IntoIterator<Item = &'v String>) {
    for value in gone {
        values.retain(|v| v != value);
    }
}
