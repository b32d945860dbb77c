use crate::{
    char_cursor_ext::CharCursorExt,
    cursor::{CharCursor, Cursor},
    token::{Munch, Munched, Token, TokenKind},
};

/// Munches a contiguous run of whitespace, line breaks included
///
/// Whitespace is kept in the token stream so that decoders decide explicitly where it may
/// appear.
pub struct MunchWhitespace;

impl Munch for MunchWhitespace {
    fn munch<'a>(&self, cursor: &CharCursor<'a>) -> Munched<CharCursor<'a>> {
        if !cursor.data().is_some_and(is_whitespace) {
            return Munched::None;
        }

        let (text, next) = cursor.take_while(is_whitespace);
        Munched::Some(
            Token::new(TokenKind::Whitespace, text, cursor.position()),
            next,
        )
    }
}

/// unicode whitespace, except that NEL (U+0085) is not whitespace and the byte order mark
/// (U+FEFF) is
fn is_whitespace(c: char) -> bool {
    (c.is_whitespace() && c != '\u{85}') || c == '\u{FEFF}'
}
