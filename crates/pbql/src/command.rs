//! Typed commands produced from matched statements.

use std::fmt;

use crate::grammar::{CommandKind, Role};

/// A displayable contact field of a show query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Field {
    /// `имя`
    Name,
    /// `телефоны`
    Phones,
    /// `почты`
    Emails,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Field::Name => write!(f, "имя"),
            Field::Phones => write!(f, "телефоны"),
            Field::Emails => write!(f, "почты"),
        }
    }
}

/// Phones and emails to attach to or detach from a contact.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ContactInformation {
    /// Subject contact name.
    pub name: String,
    /// Phone numbers, ten digits each, in statement order.
    pub phones: Vec<String>,
    /// Emails in statement order.
    pub emails: Vec<String>,
}

/// Fields to project for every contact matching a query.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ShowQuery {
    /// Requested fields, in statement order (repeats allowed).
    pub fields: Vec<Field>,
    /// Substring searched in names, phones and emails.
    pub query: String,
}

/// A validated pbQL statement with its extracted arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Command {
    /// Create an empty contact unless it already exists.
    CreateContact {
        /// Contact name.
        name: String,
    },
    /// Delete a contact by name.
    DeleteContact {
        /// Contact name.
        name: String,
    },
    /// Add phones and emails to a contact.
    AddInformation(ContactInformation),
    /// Remove phones and emails from a contact.
    RemoveInformation(ContactInformation),
    /// Print the requested fields of matching contacts.
    Show(ShowQuery),
    /// Delete every contact matching a query.
    DeleteByQuery {
        /// Substring searched in names, phones and emails.
        query: String,
    },
}

impl Command {
    /// Whether the command produces output lines.
    pub fn is_query(&self) -> bool {
        matches!(self, Command::Show(_))
    }

    /// Builds the argument bundle for `kind` from confirmed `(role, text)`
    /// pairs in statement order.
    pub(crate) fn extract<'a, I>(kind: CommandKind, confirmed: I) -> Self
    where
        I: IntoIterator<Item = (Role, &'a str)>,
    {
        let mut name = String::new();
        let mut query = String::new();
        let mut phones = Vec::new();
        let mut emails = Vec::new();
        let mut fields = Vec::new();

        for (role, text) in confirmed {
            match role {
                Role::Syntax => {}
                Role::Name => name = text.to_string(),
                Role::Query => query = text.to_string(),
                Role::Phone => phones.push(text.to_string()),
                Role::Email => emails.push(text.to_string()),
                Role::Field(field) => fields.push(field),
            }
        }

        match kind {
            CommandKind::CreateContact => Command::CreateContact { name },
            CommandKind::DeleteContact => Command::DeleteContact { name },
            CommandKind::AddInformation => Command::AddInformation(ContactInformation {
                name,
                phones,
                emails,
            }),
            CommandKind::RemoveInformation => Command::RemoveInformation(ContactInformation {
                name,
                phones,
                emails,
            }),
            CommandKind::ShowQuery => Command::Show(ShowQuery { fields, query }),
            CommandKind::DeleteByQuery => Command::DeleteByQuery { query },
        }
    }
}

fn write_clauses(f: &mut fmt::Formatter<'_>, info: &ContactInformation) -> fmt::Result {
    let clauses: Vec<String> = info
        .phones
        .iter()
        .map(|phone| format!("телефон {}", phone))
        .chain(info.emails.iter().map(|email| format!("почту {}", email)))
        .collect();
    write!(f, "{} для контакта {}", clauses.join(" и "), info.name)
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Command::CreateContact { name } => write!(f, "Создай контакт {}", name),
            Command::DeleteContact { name } => write!(f, "Удали контакт {}", name),
            Command::AddInformation(info) => {
                write!(f, "Добавь ")?;
                write_clauses(f, info)
            }
            Command::RemoveInformation(info) => {
                write!(f, "Удали ")?;
                write_clauses(f, info)
            }
            Command::Show(show) => {
                let fields: Vec<String> = show.fields.iter().map(Field::to_string).collect();
                write!(
                    f,
                    "Покажи {} для контактов, где есть {}",
                    fields.join(" и "),
                    show.query
                )
            }
            Command::DeleteByQuery { query } => {
                write!(f, "Удали контакты, где есть {}", query)
            }
        }
    }
}
