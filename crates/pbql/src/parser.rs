//! Statement parser: picks the command definition a statement belongs to.
//!
//! Every definition of the grammar table is tried in order and the first one
//! that accepts wins. When none accepts, the error points at the deepest
//! failure column seen across all definitions, so a statement that almost
//! matches a long command is reported where that command broke down.

use tracing::{debug, trace};

use crate::command::Command;
use crate::error::{PbqlError, PbqlResult};
use crate::grammar::{grammars, Role, VERBS};
use crate::matcher::{match_grammar, Confirmed};
use crate::tokenizer::{split_statements, Statement};

/// Parses a whole query into commands without executing anything.
///
/// # Examples
///
/// ```rust
/// use pbql::{parse, Command};
///
/// let commands = parse("Создай контакт Иван;Удали контакт Иван;").unwrap();
/// assert_eq!(commands.len(), 2);
/// assert_eq!(commands[0], Command::CreateContact { name: "Иван".into() });
///
/// let err = parse("создай контакт Иван;").unwrap_err();
/// assert_eq!(err.to_string(), "Unexpected token at 1:1");
/// ```
pub fn parse(query: &str) -> PbqlResult<Vec<Command>> {
    split_statements(query)?
        .iter()
        .map(parse_statement)
        .collect()
}

/// Parses a single statement into a command.
pub fn parse_statement(statement: &Statement<'_>) -> PbqlResult<Command> {
    if !statement.text().starts_with(char::is_uppercase) {
        return Err(statement.error_at(1));
    }

    let mut deepest = 1;
    for grammar in grammars() {
        match match_grammar(grammar, statement) {
            Ok(confirmed) => {
                check_arguments(statement, &confirmed)?;
                trace!(
                    target: "pbql",
                    line = statement.line(),
                    kind = ?grammar.kind,
                    "statement matched"
                );
                return Ok(Command::extract(
                    grammar.kind,
                    confirmed.iter().map(|c| (c.role, c.text)),
                ));
            }
            Err(column) => {
                trace!(
                    target: "pbql",
                    line = statement.line(),
                    kind = ?grammar.kind,
                    column,
                    "definition rejected statement"
                );
                deepest = deepest.max(column);
            }
        }
    }

    debug!(
        target: "pbql",
        line = statement.line(),
        column = deepest,
        "no definition accepted statement"
    );
    Err(statement.error_at(deepest))
}

/// Rejects arguments that swallowed the start of another statement, i.e. a
/// command verb glued to a preceding letter, digit or `_`.
fn check_arguments(statement: &Statement<'_>, confirmed: &[Confirmed<'_>]) -> PbqlResult<()> {
    let mut glued: Option<usize> = None;
    for argument in confirmed.iter().filter(|c| c.role != Role::Syntax) {
        for verb in VERBS {
            for (offset, _) in argument.text.match_indices(verb) {
                if is_glued(argument.text, offset) {
                    let column = statement.column_within(&argument.token, offset);
                    glued = Some(glued.map_or(column, |seen| seen.min(column)));
                }
            }
        }
    }

    match glued {
        Some(column) => Err(PbqlError::syntax(statement.line(), column)),
        None => Ok(()),
    }
}

fn is_glued(text: &str, offset: usize) -> bool {
    text[..offset]
        .chars()
        .next_back()
        .is_some_and(|c| c.is_alphanumeric() || c == '_')
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command::{ContactInformation, Field, ShowQuery};

    fn statement(text: &str) -> Statement<'_> {
        Statement::new(1, text)
    }

    fn error_column(text: &str) -> usize {
        parse_statement(&statement(text)).unwrap_err().position().1
    }

    #[test]
    fn test_parse_create_contact() {
        let command = parse_statement(&statement("Создай контакт Иван")).unwrap();
        assert_eq!(command, Command::CreateContact { name: "Иван".into() });
    }

    #[test]
    fn test_parse_delete_by_query_after_shorter_definitions_fail() {
        let command = parse_statement(&statement("Удали контакты, где есть Ив")).unwrap();
        assert_eq!(command, Command::DeleteByQuery { query: "Ив".into() });
    }

    #[test]
    fn test_parse_remove_information() {
        let command =
            parse_statement(&statement("Удали телефон 9161234567 для контакта Иван")).unwrap();
        assert_eq!(
            command,
            Command::RemoveInformation(ContactInformation {
                name: "Иван".into(),
                phones: vec!["9161234567".into()],
                emails: vec![],
            })
        );
    }

    #[test]
    fn test_parse_show_query() {
        let command = parse_statement(&statement(
            "Покажи имя и телефоны и почты для контактов, где есть Иван Петров",
        ))
        .unwrap();
        assert_eq!(
            command,
            Command::Show(ShowQuery {
                fields: vec![Field::Name, Field::Phones, Field::Emails],
                query: "Иван Петров".into(),
            })
        );
    }

    #[test]
    fn test_lowercase_statement_fails_at_first_column() {
        assert_eq!(error_column("создай контакт Иван"), 1);
        assert_eq!(error_column(""), 1);
        assert_eq!(error_column(" Создай контакт Иван"), 1);
    }

    #[test]
    fn test_unknown_verb_fails_at_first_column() {
        assert_eq!(error_column("Найди контакт Иван"), 1);
    }

    #[test]
    fn test_deepest_failure_wins() {
        // DeleteContact and DeleteByQuery break at column 7, RemoveInformation
        // gets through `телефон 9161234567 и телефон` and breaks at `12`.
        let text = "Удали телефон 9161234567 и телефон 12 для контакта Иван";
        assert_eq!(error_column(text), 36);
    }

    #[test]
    fn test_incomplete_long_command_reports_end() {
        let text = "Удали телефон 9161234567 и почту";
        assert_eq!(error_column(text), 33);
    }

    #[test]
    fn test_wrong_conjunction_after_email() {
        let text = "Добавь почту a@b.c или телефон 9161234567 для контакта Иван";
        assert_eq!(error_column(text), 20);
    }

    #[test]
    fn test_double_space_reports_second_space() {
        assert_eq!(error_column("Создай  контакт Иван"), 8);
        assert_eq!(error_column("Создай контакт  Иван"), 16);
    }

    #[test]
    fn test_glued_verb_in_argument() {
        assert_eq!(error_column("Создай контакт ИванУдали контакт Иван"), 20);
    }

    #[test]
    fn test_separate_verb_in_argument_is_allowed() {
        let command = parse_statement(&statement("Создай контакт Иван Удали")).unwrap();
        assert_eq!(
            command,
            Command::CreateContact {
                name: "Иван Удали".into()
            }
        );
    }

    #[test]
    fn test_parse_reports_statement_line() {
        let err = parse("Создай контакт Иван;Удали контакт;").unwrap_err();
        assert_eq!(err, PbqlError::syntax(2, 14));
    }
}
