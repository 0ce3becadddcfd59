//! # pbql-executor
//!
//! Executes pbQL queries against an in-memory phone book.
//!
//! This crate bridges the [`pbql`] grammar engine and any store implementing
//! [`ContactStore`]: every statement is validated, turned into a typed
//! command, and dispatched against the store. Show statements produce output
//! lines.
//!
//! ## Quick Start
//!
//! ```rust
//! use pbql_executor::{run, PhoneBook};
//!
//! let mut book = PhoneBook::new();
//! let lines = run(
//!     &mut book,
//!     "Создай контакт Иван;\
//!      Добавь телефон 9161234567 и почту ivan@example.com для контакта Иван;\
//!      Покажи имя и телефоны и почты для контактов, где есть Ив;",
//! )
//! .unwrap();
//! assert_eq!(lines, vec!["Иван;+7 (916) 123-45-67;ivan@example.com"]);
//! ```
//!
//! ## Semantics
//!
//! | Command | Effect |
//! |---------|--------|
//! | Create contact | Inserts an empty contact unless the name exists |
//! | Delete contact | Removes the contact if present |
//! | Add information | Set union of phones and emails, no-op for unknown names |
//! | Remove information | Removes listed values, ignores absent ones |
//! | Show | One line per contact whose name, phone or email contains the query |
//! | Delete by query | Removes every contact the same search finds |
//!
//! The empty query matches nothing.
//!
//! ## Architecture
//!
//! ```text
//! query text ──► pbql::split_statements ──► pbql::parse_statement
//!                                                  │
//!                                                  ▼
//!                  Interpreter::execute ──► ContactStore (PhoneBook)
//!                          │
//!                          ▼
//!                   output lines (show statements)
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod config;
mod contact;
mod executor;
mod phone;
mod store;

// Public re-exports
pub use config::{InterpreterConfig, InterpreterConfigBuilder};
pub use contact::Contact;
pub use executor::{run, Interpreter};
pub use phone::format_phone;
pub use store::{ContactStore, PhoneBook};

// Re-export commonly used types from the grammar engine for convenience
pub use pbql::{Command, Field, PbqlError, PbqlResult};
