mod variants;

use std::fmt::{self, Display};

pub use variants::*;

use crate::cursor::CharCursor;

/// The closed set of token classes understood by the lexer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// `[a-zA-Z][a-zA-Z0-9]*`
    Identifier,
    /// A double-quoted span containing no interior double quotes, quotes included
    String,
    Whitespace,
    Comma,
    LeftParenthesis,
    RightParenthesis,
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TokenKind::Identifier => "identifier",
            TokenKind::String => "string",
            TokenKind::Whitespace => "whitespace",
            TokenKind::Comma => "','",
            TokenKind::LeftParenthesis => "'('",
            TokenKind::RightParenthesis => "')'",
        };
        f.write_str(name)
    }
}

/// A single classified slice of the input
///
/// Tokens are produced once per decode and never mutated afterwards
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    /// exact source text, including quotes for [`TokenKind::String`]
    pub text: String,
    /// byte offset of the first character of this token
    pub position: usize,
}

impl Token {
    pub fn new(kind: TokenKind, text: impl Into<String>, position: usize) -> Self {
        Self {
            kind,
            text: text.into(),
            position,
        }
    }
}

/// The result of a [`Munch::munch`] operation
pub enum Munched<Cursor> {
    /// Indicates that the munch succeeded and produced a [`Token`] as well as the cursor
    /// immediately after it, which may be at <eof>
    Some(Token, Cursor),
    /// Indicates that the muncher recognised the start of its token but the input is
    /// malformed, with a short one line description of what went wrong, e.g.:
    ///     - unterminated string literal
    ///
    /// **remarks:** may be shadowed by a later muncher, if something else succeeded
    Err(String),
    /// Indicates that no error occurred, but no valid token was created
    None,
}

/// represents an object which "munches" a single token off the front of a [`CharCursor`]
pub trait Munch {
    fn munch<'a>(&self, cursor: &CharCursor<'a>) -> Munched<CharCursor<'a>>;
}
