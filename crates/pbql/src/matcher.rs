//! Grammar matcher: runs one command automaton over a statement.

use crate::grammar::{Grammar, Role};
use crate::tokenizer::{Statement, Token};

/// A token confirmed at a grammar position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Confirmed<'a> {
    /// Index of the confirmed position within the definition.
    pub position: usize,
    /// Role of that position.
    pub role: Role,
    /// Matched text; a statement remainder for name and query positions.
    pub text: &'a str,
    /// The token the match started at.
    pub token: Token<'a>,
}

/// Outcome of running one definition over a statement.
pub type MatchOutcome<'a> = std::result::Result<Vec<Confirmed<'a>>, usize>;

/// Runs `grammar` over `statement`.
///
/// For each token the first position (in definition order) that may follow
/// the last confirmed one and accepts the token is confirmed. Returns the
/// confirmed positions, or the 1-based column at which matching failed. Running
/// out of tokens before reaching the accepting position fails one past the end
/// of the statement.
pub fn match_grammar<'a>(grammar: &Grammar, statement: &Statement<'a>) -> MatchOutcome<'a> {
    let tokens = statement.tokens();
    let mut confirmed = Vec::with_capacity(tokens.len());
    let mut last = None;
    let mut index = 0;

    while index < tokens.len() {
        let token = tokens[index];
        let rest = statement.remainder(&token);

        let hit = grammar
            .positions
            .iter()
            .enumerate()
            .filter(|(_, position)| position.follows(last))
            .find_map(|(at, position)| {
                let text = if position.pattern.is_remainder() {
                    rest
                } else {
                    token.text
                };
                position.pattern.accepts(text).then_some((at, position, text))
            });

        let (at, position, text) = match hit {
            Some(hit) => hit,
            None => return Err(token.column),
        };

        confirmed.push(Confirmed {
            position: at,
            role: position.role,
            text,
            token,
        });
        last = Some(at);
        index = if position.pattern.is_remainder() {
            tokens.len()
        } else {
            index + 1
        };
    }

    if grammar.accepts_after(last) {
        Ok(confirmed)
    } else {
        Err(statement.end_column())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grammar::{grammars, CommandKind};

    fn grammar(kind: CommandKind) -> &'static Grammar {
        grammars().iter().find(|g| g.kind == kind).unwrap()
    }

    #[test]
    fn test_create_contact_matches() {
        let statement = Statement::new(1, "Создай контакт Иван");
        let confirmed = match_grammar(grammar(CommandKind::CreateContact), &statement).unwrap();
        let positions: Vec<usize> = confirmed.iter().map(|c| c.position).collect();
        assert_eq!(positions, vec![0, 1, 2]);
        assert_eq!(confirmed[2].text, "Иван");
    }

    #[test]
    fn test_name_swallows_remainder() {
        let statement = Statement::new(1, "Удали контакт Иван Петров");
        let confirmed = match_grammar(grammar(CommandKind::DeleteContact), &statement).unwrap();
        assert_eq!(confirmed.len(), 3);
        assert_eq!(confirmed[2].text, "Иван Петров");
        assert_eq!(confirmed[2].token.column, 15);
    }

    #[test]
    fn test_fails_at_first_wrong_token() {
        let statement = Statement::new(1, "Удали контакты, где есть Иван");
        assert_eq!(
            match_grammar(grammar(CommandKind::DeleteContact), &statement),
            Err(7)
        );
    }

    #[test]
    fn test_fails_past_end_when_incomplete() {
        let statement = Statement::new(1, "Создай контакт");
        assert_eq!(
            match_grammar(grammar(CommandKind::CreateContact), &statement),
            Err(15)
        );
    }

    #[test]
    fn test_clauses_in_any_order_and_repeated() {
        let statement = Statement::new(
            1,
            "Добавь почту a@b.c и телефон 9161234567 и телефон 9160000000 для контакта Иван",
        );
        let confirmed = match_grammar(grammar(CommandKind::AddInformation), &statement).unwrap();
        let phones: Vec<&str> = confirmed
            .iter()
            .filter(|c| c.role == Role::Phone)
            .map(|c| c.text)
            .collect();
        assert_eq!(phones, vec!["9161234567", "9160000000"]);
    }

    #[test]
    fn test_bad_phone_fails_at_phone_token() {
        let statement = Statement::new(1, "Добавь телефон 916123 для контакта Иван");
        assert_eq!(
            match_grammar(grammar(CommandKind::AddInformation), &statement),
            Err(16)
        );
    }

    #[test]
    fn test_show_requires_a_field() {
        let statement = Statement::new(1, "Покажи для контактов, где есть Иван");
        assert_eq!(
            match_grammar(grammar(CommandKind::ShowQuery), &statement),
            Err(8)
        );
    }

    #[test]
    fn test_show_with_empty_query() {
        let statement = Statement::new(1, "Покажи имя для контактов, где есть ");
        let confirmed = match_grammar(grammar(CommandKind::ShowQuery), &statement).unwrap();
        assert_eq!(confirmed.last().map(|c| c.text), Some(""));
    }

    #[test]
    fn test_show_without_query_separator_is_incomplete() {
        let statement = Statement::new(1, "Покажи имя для контактов, где есть");
        assert_eq!(
            match_grammar(grammar(CommandKind::ShowQuery), &statement),
            Err(35)
        );
    }
}
