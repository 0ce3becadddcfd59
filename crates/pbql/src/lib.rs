//! # pbql
//!
//! Statement grammar engine for pbQL, a small query language over a phone
//! book of contacts.
//!
//! This crate turns query text into typed [`Command`]s:
//! - **Tokenizer**: splits a query on `;` into statements and every statement
//!   on single spaces into position-aware tokens
//! - **Grammar table**: six fixed command definitions, each a small automaton
//!   over token classes with per-position predecessor sets
//! - **Matcher**: runs the definitions over a statement and reports the
//!   deepest failure column when none accepts
//!
//! Executing commands against a contact store lives in `pbql-executor`.
//!
//! ## Usage
//!
//! ```rust
//! use pbql::{parse, Command, ContactInformation};
//!
//! let commands = parse("Добавь телефон 9161234567 для контакта Иван;").unwrap();
//! assert_eq!(
//!     commands,
//!     vec![Command::AddInformation(ContactInformation {
//!         name: "Иван".into(),
//!         phones: vec!["9161234567".into()],
//!         emails: vec![],
//!     })]
//! );
//! ```
//!
//! ## Syntax Quick Reference
//!
//! | Command | Example |
//! |---------|---------|
//! | Create contact | `Создай контакт Иван;` |
//! | Delete contact | `Удали контакт Иван;` |
//! | Add information | `Добавь телефон 9161234567 и почту ivan@example.com для контакта Иван;` |
//! | Remove information | `Удали почту ivan@example.com для контакта Иван;` |
//! | Show | `Покажи имя и телефоны и почты для контактов, где есть Ив;` |
//! | Delete by query | `Удали контакты, где есть Ив;` |
//!
//! Errors carry the 1-based statement number and character column at which
//! the query stopped being valid: `Unexpected token at 2:15`.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod command;
mod error;
pub mod grammar;
mod matcher;
mod parser;
mod tokenizer;

pub use command::{Command, ContactInformation, Field, ShowQuery};
pub use error::{PbqlError, PbqlResult};
pub use grammar::{grammars, CommandKind, Grammar, Pattern};
pub use matcher::{match_grammar, Confirmed, MatchOutcome};
pub use parser::{parse, parse_statement};
pub use tokenizer::{split_statements, Statement, Token};
