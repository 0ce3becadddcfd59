//! Statement splitting and tokenization.
//!
//! A query is split on `;` into statements, and every statement is split on
//! single spaces into tokens. Each token remembers where it starts, both as a
//! byte offset (for re-slicing the statement) and as a 1-based character
//! column (for error reporting).

use crate::error::{PbqlError, PbqlResult};

/// Statement terminator.
pub const TERMINATOR: char = ';';

/// Token separator inside a statement.
pub const SEPARATOR: char = ' ';

/// A space-delimited token of a statement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    /// Token text (empty when two separators are adjacent).
    pub text: &'a str,
    /// Byte offset of the token within the statement text.
    pub start: usize,
    /// 1-based character column of the token within the statement.
    pub column: usize,
}

/// One `;`-terminated statement of a query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Statement<'a> {
    line: usize,
    text: &'a str,
    tokens: Vec<Token<'a>>,
}

impl<'a> Statement<'a> {
    /// Tokenizes `text` as statement number `line` (1-based).
    pub fn new(line: usize, text: &'a str) -> Self {
        let mut tokens = Vec::new();
        let mut start = 0;
        let mut column = 1;
        for piece in text.split(SEPARATOR) {
            tokens.push(Token {
                text: piece,
                start,
                column,
            });
            start += piece.len() + SEPARATOR.len_utf8();
            column += piece.chars().count() + 1;
        }
        Self { line, text, tokens }
    }

    /// 1-based index of the statement within the query.
    pub fn line(&self) -> usize {
        self.line
    }

    /// Original statement text, without the terminator.
    pub fn text(&self) -> &'a str {
        self.text
    }

    /// Tokens in statement order.
    pub fn tokens(&self) -> &[Token<'a>] {
        &self.tokens
    }

    /// Everything from the start of `token` to the end of the statement.
    pub fn remainder(&self, token: &Token<'a>) -> &'a str {
        &self.text[token.start..]
    }

    /// Column one past the last character of the statement.
    pub fn end_column(&self) -> usize {
        self.text.chars().count() + 1
    }

    /// Column of the character at byte offset `offset` inside `token`'s text.
    pub fn column_within(&self, token: &Token<'a>, offset: usize) -> usize {
        let prefix = &self.text[token.start..token.start + offset];
        token.column + prefix.chars().count()
    }

    /// Builds a syntax error for this statement at `column`.
    pub fn error_at(&self, column: usize) -> PbqlError {
        PbqlError::syntax(self.line, column)
    }
}

/// Splits a query into statements.
///
/// The query must end with a terminator: the last `;`-separated fragment has
/// to be empty. Otherwise the error points one past the end of that fragment.
/// An empty query yields no statements.
pub fn split_statements(query: &str) -> PbqlResult<Vec<Statement<'_>>> {
    let fragments: Vec<&str> = query.split(TERMINATOR).collect();
    let (last, statements) = match fragments.split_last() {
        Some(split) => split,
        None => return Ok(Vec::new()),
    };

    if !last.is_empty() {
        return Err(PbqlError::syntax(
            fragments.len(),
            last.chars().count() + 1,
        ));
    }

    Ok(statements
        .iter()
        .enumerate()
        .map(|(index, &text)| Statement::new(index + 1, text))
        .collect())
}
