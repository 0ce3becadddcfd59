//! pbQL interpreter implementation.

use pbql::{
    parse_statement, split_statements, Command, ContactInformation, PbqlResult, ShowQuery,
};
use tracing::debug;

use crate::config::InterpreterConfig;
use crate::contact::Contact;
use crate::store::{ContactStore, PhoneBook};

/// Runs pbQL queries against a contact store.
///
/// Statements are validated and executed one at a time, in text order. The
/// first invalid statement aborts the run; statements before it have already
/// changed the store and are not rolled back.
///
/// # Example
///
/// ```rust
/// use pbql_executor::{ContactStore, Interpreter, PhoneBook};
///
/// let mut book = PhoneBook::new();
/// let mut interpreter = Interpreter::new(&mut book);
///
/// let lines = interpreter
///     .run("Создай контакт Иван;\
///           Добавь телефон 9161234567 для контакта Иван;\
///           Покажи имя и телефоны для контактов, где есть Иван;")
///     .unwrap();
/// assert_eq!(lines, vec!["Иван;+7 (916) 123-45-67"]);
///
/// let err = interpreter.run("Удали контакт Иван").unwrap_err();
/// assert_eq!(err.to_string(), "Unexpected token at 1:19");
/// assert!(book.contains("Иван"));
/// ```
pub struct Interpreter<'a> {
    /// Store every command runs against.
    store: &'a mut dyn ContactStore,
    /// Output formatting configuration.
    config: InterpreterConfig,
}

impl<'a> Interpreter<'a> {
    /// Creates an interpreter with default configuration.
    pub fn new(store: &'a mut dyn ContactStore) -> Self {
        Self {
            store,
            config: InterpreterConfig::default(),
        }
    }

    /// Creates an interpreter with custom configuration.
    pub fn with_config(store: &'a mut dyn ContactStore, config: InterpreterConfig) -> Self {
        Self { store, config }
    }

    /// Returns a reference to the interpreter configuration.
    pub fn config(&self) -> &InterpreterConfig {
        &self.config
    }

    /// Returns a reference to the underlying store.
    pub fn store(&self) -> &dyn ContactStore {
        &*self.store
    }

    /// Validates and executes every statement of `query`.
    ///
    /// Returns the output lines of all show statements in order.
    ///
    /// # Errors
    ///
    /// Returns `PbqlError::SyntaxError` for the first statement that is not
    /// valid, or when the query does not end with `;`.
    pub fn run(&mut self, query: &str) -> PbqlResult<Vec<String>> {
        let statements = split_statements(query)?;
        let mut output = Vec::new();

        for statement in &statements {
            let command = parse_statement(statement)?;
            debug!(
                target: "pbql",
                line = statement.line(),
                command = %command,
                "executing statement"
            );
            output.extend(self.execute(&command));
        }

        Ok(output)
    }

    /// Executes an already validated command, returning its output lines.
    pub fn execute(&mut self, command: &Command) -> Vec<String> {
        match command {
            Command::CreateContact { name } => {
                self.create_contact(name);
                Vec::new()
            }
            Command::DeleteContact { name } => {
                self.delete_contact(name);
                Vec::new()
            }
            Command::AddInformation(info) => {
                self.add_information(info);
                Vec::new()
            }
            Command::RemoveInformation(info) => {
                self.remove_information(info);
                Vec::new()
            }
            Command::Show(show) => self.show(show),
            Command::DeleteByQuery { query } => {
                self.delete_by_query(query);
                Vec::new()
            }
        }
    }

    fn create_contact(&mut self, name: &str) {
        if !self.store.insert(Contact::new(name)) {
            debug!(target: "pbql", name, "contact already exists");
        }
    }

    fn delete_contact(&mut self, name: &str) {
        if self.store.remove(name).is_none() {
            debug!(target: "pbql", name, "no contact to delete");
        }
    }

    fn add_information(&mut self, info: &ContactInformation) {
        match self.store.get_mut(&info.name) {
            Some(contact) => {
                contact.add_phones(&info.phones);
                contact.add_emails(&info.emails);
            }
            None => debug!(target: "pbql", name = %info.name, "no contact to add to"),
        }
    }

    fn remove_information(&mut self, info: &ContactInformation) {
        match self.store.get_mut(&info.name) {
            Some(contact) => {
                contact.remove_phones(&info.phones);
                contact.remove_emails(&info.emails);
            }
            None => debug!(target: "pbql", name = %info.name, "no contact to remove from"),
        }
    }

    fn show(&self, show: &ShowQuery) -> Vec<String> {
        self.store
            .find(&show.query)
            .into_iter()
            .map(|contact| contact.project(&show.fields, &self.config))
            .collect()
    }

    fn delete_by_query(&mut self, query: &str) {
        let names: Vec<String> = self
            .store
            .find(query)
            .into_iter()
            .map(|contact| contact.name().to_string())
            .collect();

        debug!(target: "pbql", query, count = names.len(), "deleting matched contacts");
        for name in &names {
            self.store.remove(name);
        }
    }
}

/// Runs `query` against `book` with default configuration.
///
/// ```rust
/// use pbql_executor::{run, PhoneBook};
///
/// let mut book = PhoneBook::new();
/// assert!(run(&mut book, "Создай контакт Иван;").unwrap().is_empty());
/// ```
pub fn run(book: &mut PhoneBook, query: &str) -> PbqlResult<Vec<String>> {
    Interpreter::new(book).run(query)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pbql::Field;

    fn book_with_ivan() -> PhoneBook {
        let mut book = PhoneBook::new();
        run(
            &mut book,
            "Создай контакт Иван;Добавь телефон 9161234567 и почту ivan@example.com для контакта Иван;",
        )
        .unwrap();
        book
    }

    #[test]
    fn test_create_twice_keeps_one_empty_contact() {
        let mut book = PhoneBook::new();
        run(&mut book, "Создай контакт Иван;Создай контакт Иван;").unwrap();
        assert_eq!(book.len(), 1);
        let ivan = book.get("Иван").unwrap();
        assert!(ivan.phones().is_empty());
        assert!(ivan.emails().is_empty());
    }

    #[test]
    fn test_create_existing_keeps_information() {
        let mut book = book_with_ivan();
        run(&mut book, "Создай контакт Иван;").unwrap();
        assert_eq!(book.get("Иван").unwrap().phones(), ["9161234567"]);
    }

    #[test]
    fn test_delete_absent_is_noop() {
        let mut book = book_with_ivan();
        run(&mut book, "Удали контакт Петр;").unwrap();
        assert_eq!(book.len(), 1);
    }

    #[test]
    fn test_add_to_absent_contact_is_noop() {
        let mut book = PhoneBook::new();
        run(&mut book, "Добавь телефон 9161234567 для контакта Петр;").unwrap();
        assert!(book.is_empty());
    }

    #[test]
    fn test_execute_show_directly() {
        let mut book = book_with_ivan();
        let mut interpreter = Interpreter::new(&mut book);
        let lines = interpreter.execute(&Command::Show(ShowQuery {
            fields: vec![Field::Emails],
            query: "ivan@".into(),
        }));
        assert_eq!(lines, vec!["ivan@example.com"]);
    }

    #[test]
    fn test_custom_config() {
        let mut book = book_with_ivan();
        let config = InterpreterConfig::builder()
            .with_country_code("375")
            .with_field_separator(" | ")
            .build();
        let mut interpreter = Interpreter::with_config(&mut book, config);
        let lines = interpreter
            .run("Покажи имя и телефоны для контактов, где есть 916;")
            .unwrap();
        assert_eq!(lines, vec!["Иван | +375 (916) 123-45-67"]);
        assert_eq!(interpreter.config().country_code, "375");
    }

    #[test]
    fn test_failure_keeps_earlier_statements() {
        let mut book = PhoneBook::new();
        let err = run(
            &mut book,
            "Создай контакт Иван;создай контакт Петр;Создай контакт Анна;",
        )
        .unwrap_err();
        assert_eq!(err.position(), (2, 1));
        assert!(book.contains("Иван"));
        assert!(!book.contains("Петр"));
        assert!(!book.contains("Анна"));
    }

    #[test]
    fn test_missing_terminator_runs_nothing() {
        let mut book = PhoneBook::new();
        let err = run(&mut book, "Создай контакт Иван;Создай контакт Петр").unwrap_err();
        assert_eq!(err.position(), (2, 20));
        assert!(book.is_empty());
    }
}
