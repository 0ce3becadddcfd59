//! The fixed command grammar table.
//!
//! Every command is a small automaton over token classes. Each position of a
//! definition carries a [`Pattern`] and the set of positions allowed to have
//! been confirmed immediately before it. `START` stands for "nothing matched
//! yet". Optional and repeated clauses are expressed only through these
//! predecessor sets.

use nom::{
    bytes::complete::take_while_m_n, combinator::all_consuming, IResult,
};

use crate::command::Field;

/// Predecessor marker for the first token of a statement.
pub const START: Option<usize> = None;

/// Number of digits in a phone number.
pub const PHONE_DIGITS: usize = 10;

/// Verbs a statement may start with.
pub const VERBS: [&str; 4] = ["Создай", "Удали", "Покажи", "Добавь"];

/// Token class recognized at a grammar position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pattern {
    /// An exact keyword.
    Keyword(&'static str),
    /// Exactly ten ASCII digits.
    Phone,
    /// Any non-empty token.
    Word,
    /// The rest of the statement, non-empty and not starting with a space.
    Name,
    /// The rest of the statement, possibly empty.
    Query,
}

impl Pattern {
    /// Whether this pattern swallows the remainder of the statement.
    pub fn is_remainder(&self) -> bool {
        matches!(self, Pattern::Name | Pattern::Query)
    }

    /// Checks a token (or a statement remainder) against the pattern.
    pub fn accepts(&self, text: &str) -> bool {
        match self {
            Pattern::Keyword(keyword) => text == *keyword,
            Pattern::Phone => phone_number(text).is_ok(),
            Pattern::Word => !text.is_empty(),
            Pattern::Name => !text.is_empty() && !text.starts_with(char::is_whitespace),
            Pattern::Query => true,
        }
    }
}

fn phone_number(input: &str) -> IResult<&str, &str> {
    all_consuming(take_while_m_n(PHONE_DIGITS, PHONE_DIGITS, |c: char| {
        c.is_ascii_digit()
    }))(input)
}

/// What a confirmed position contributes to the argument bundle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    /// Pure syntax, contributes nothing.
    Syntax,
    /// The subject contact name.
    Name,
    /// A phone number.
    Phone,
    /// An email address.
    Email,
    /// A displayable field of a show query.
    Field(Field),
    /// The free-form search string.
    Query,
}

/// One position of a command definition.
#[derive(Debug, Clone, Copy)]
pub struct Position {
    /// Token class accepted here.
    pub pattern: Pattern,
    /// Positions allowed to have been confirmed immediately before.
    pub after: &'static [Option<usize>],
    /// Contribution to the argument bundle.
    pub role: Role,
}

impl Position {
    const fn keyword(keyword: &'static str, after: &'static [Option<usize>]) -> Self {
        Self {
            pattern: Pattern::Keyword(keyword),
            after,
            role: Role::Syntax,
        }
    }

    const fn field(
        keyword: &'static str,
        field: Field,
        after: &'static [Option<usize>],
    ) -> Self {
        Self {
            pattern: Pattern::Keyword(keyword),
            after,
            role: Role::Field(field),
        }
    }

    const fn argument(pattern: Pattern, role: Role, after: &'static [Option<usize>]) -> Self {
        Self {
            pattern,
            after,
            role,
        }
    }

    /// Whether this position may follow `last`.
    pub fn follows(&self, last: Option<usize>) -> bool {
        self.after.contains(&last)
    }
}

/// Identifies a command definition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CommandKind {
    /// `Создай контакт <name>`
    CreateContact,
    /// `Удали контакт <name>`
    DeleteContact,
    /// `Добавь телефон .. и почту .. для контакта <name>`
    AddInformation,
    /// `Удали телефон .. и почту .. для контакта <name>`
    RemoveInformation,
    /// `Покажи имя и телефоны и почты для контактов, где есть <query>`
    ShowQuery,
    /// `Удали контакты, где есть <query>`
    DeleteByQuery,
}

/// A command definition: ordered positions plus the accepting position.
#[derive(Debug, Clone, Copy)]
pub struct Grammar {
    /// Command this definition recognizes.
    pub kind: CommandKind,
    /// Positions in definition order.
    pub positions: &'static [Position],
    /// Index of the position that completes the statement.
    pub accepting: usize,
}

impl Grammar {
    /// Whether the automaton accepts after confirming `last`.
    pub fn accepts_after(&self, last: Option<usize>) -> bool {
        last == Some(self.accepting)
    }
}

const CREATE_CONTACT: [Position; 3] = [
    Position::keyword("Создай", &[START]),
    Position::keyword("контакт", &[Some(0)]),
    Position::argument(Pattern::Name, Role::Name, &[Some(1)]),
];

const DELETE_CONTACT: [Position; 3] = [
    Position::keyword("Удали", &[START]),
    Position::keyword("контакт", &[Some(0)]),
    Position::argument(Pattern::Name, Role::Name, &[Some(1)]),
];

// Clauses `телефон <phone>` and `почту <email>` joined by `и`, any order,
// any number, then `для контакта <name>`.
macro_rules! information {
    ($verb:literal) => {
        [
            Position::keyword($verb, &[START]),
            Position::keyword("телефон", &[Some(0), Some(5)]),
            Position::argument(Pattern::Phone, Role::Phone, &[Some(1)]),
            Position::keyword("почту", &[Some(0), Some(5)]),
            Position::argument(Pattern::Word, Role::Email, &[Some(3)]),
            Position::keyword("и", &[Some(2), Some(4)]),
            Position::keyword("для", &[Some(2), Some(4)]),
            Position::keyword("контакта", &[Some(6)]),
            Position::argument(Pattern::Name, Role::Name, &[Some(7)]),
        ]
    };
}

const ADD_INFORMATION: [Position; 9] = information!("Добавь");
const REMOVE_INFORMATION: [Position; 9] = information!("Удали");

const SHOW_QUERY: [Position; 10] = [
    Position::keyword("Покажи", &[START]),
    Position::field("имя", Field::Name, &[Some(0), Some(4)]),
    Position::field("телефоны", Field::Phones, &[Some(0), Some(4)]),
    Position::field("почты", Field::Emails, &[Some(0), Some(4)]),
    Position::keyword("и", &[Some(1), Some(2), Some(3)]),
    Position::keyword("для", &[Some(1), Some(2), Some(3)]),
    Position::keyword("контактов,", &[Some(5)]),
    Position::keyword("где", &[Some(6)]),
    Position::keyword("есть", &[Some(7)]),
    Position::argument(Pattern::Query, Role::Query, &[Some(8)]),
];

const DELETE_BY_QUERY: [Position; 5] = [
    Position::keyword("Удали", &[START]),
    Position::keyword("контакты,", &[Some(0)]),
    Position::keyword("где", &[Some(1)]),
    Position::keyword("есть", &[Some(2)]),
    Position::argument(Pattern::Query, Role::Query, &[Some(3)]),
];

static GRAMMARS: [Grammar; 6] = [
    Grammar {
        kind: CommandKind::CreateContact,
        positions: &CREATE_CONTACT,
        accepting: 2,
    },
    Grammar {
        kind: CommandKind::DeleteContact,
        positions: &DELETE_CONTACT,
        accepting: 2,
    },
    Grammar {
        kind: CommandKind::AddInformation,
        positions: &ADD_INFORMATION,
        accepting: 8,
    },
    Grammar {
        kind: CommandKind::RemoveInformation,
        positions: &REMOVE_INFORMATION,
        accepting: 8,
    },
    Grammar {
        kind: CommandKind::ShowQuery,
        positions: &SHOW_QUERY,
        accepting: 9,
    },
    Grammar {
        kind: CommandKind::DeleteByQuery,
        positions: &DELETE_BY_QUERY,
        accepting: 4,
    },
];

/// All command definitions, in matching order.
pub fn grammars() -> &'static [Grammar] {
    &GRAMMARS
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phone_pattern() {
        assert!(Pattern::Phone.accepts("9161234567"));
        assert!(!Pattern::Phone.accepts("916123456"));
        assert!(!Pattern::Phone.accepts("91612345678"));
        assert!(!Pattern::Phone.accepts("916123456a"));
        assert!(!Pattern::Phone.accepts(""));
    }

    #[test]
    fn test_name_pattern() {
        assert!(Pattern::Name.accepts("Иван Петров"));
        assert!(!Pattern::Name.accepts(""));
        assert!(!Pattern::Name.accepts(" Иван"));
    }

    #[test]
    fn test_query_pattern_accepts_empty() {
        assert!(Pattern::Query.accepts(""));
        assert!(Pattern::Query.is_remainder());
        assert!(!Pattern::Word.is_remainder());
    }

    #[test]
    fn test_table_is_well_formed() {
        for grammar in grammars() {
            let len = grammar.positions.len();
            assert!(grammar.accepting < len, "{:?}", grammar.kind);
            assert!(grammar.positions[0].follows(START), "{:?}", grammar.kind);
            for position in grammar.positions {
                for prev in position.after.iter().flatten() {
                    assert!(*prev < len, "{:?}", grammar.kind);
                }
            }
            // Remainder patterns end the statement, so they must accept.
            for (index, position) in grammar.positions.iter().enumerate() {
                if position.pattern.is_remainder() {
                    assert_eq!(index, grammar.accepting, "{:?}", grammar.kind);
                }
            }
        }
    }

    #[test]
    fn test_table_order() {
        let kinds: Vec<CommandKind> = grammars().iter().map(|g| g.kind).collect();
        assert_eq!(
            kinds,
            vec![
                CommandKind::CreateContact,
                CommandKind::DeleteContact,
                CommandKind::AddInformation,
                CommandKind::RemoveInformation,
                CommandKind::ShowQuery,
                CommandKind::DeleteByQuery,
            ]
        );
    }
}
