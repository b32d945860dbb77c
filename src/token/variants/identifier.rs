use crate::{
    char_cursor_ext::CharCursorExt,
    cursor::{CharCursor, Cursor},
    token::{Munch, Munched, Token, TokenKind},
};

/// Munches identifiers: an ascii letter followed by any number of ascii letters or digits
pub struct MunchIdentifier;

impl Munch for MunchIdentifier {
    fn munch<'a>(&self, cursor: &CharCursor<'a>) -> Munched<CharCursor<'a>> {
        match cursor.data() {
            Some(c) if c.is_ascii_alphabetic() => {}
            _ => return Munched::None,
        }

        let (text, next) = cursor.take_while(|c| c.is_ascii_alphanumeric());
        Munched::Some(
            Token::new(TokenKind::Identifier, text, cursor.position()),
            next,
        )
    }
}
