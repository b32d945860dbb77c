use crate::{
    char_cursor_ext::CharCursorExt,
    cursor::{CharCursor, Cursor},
    token::{Munch, Munched, Token, TokenKind},
};

/// Munches a double-quoted string
///
/// There are no escapes, so the first double quote after the opening one always closes the
/// string. The token text keeps both quotes.
pub struct MunchString;

impl Munch for MunchString {
    fn munch<'a>(&self, cursor: &CharCursor<'a>) -> Munched<CharCursor<'a>> {
        if cursor.data() != Some('"') {
            return Munched::None;
        }

        // opening quote was just checked, so next() always exists
        let Some(body) = cursor.next() else {
            return Munched::None;
        };
        let (_, close) = body.take_while(|c| c != '"');

        let Some(end) = close.next() else {
            return Munched::Err(format!(
                "missing closing double quotes for string starting at {}",
                cursor.position()
            ));
        };

        Munched::Some(
            Token::new(TokenKind::String, cursor.slice_to(&end), cursor.position()),
            end,
        )
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn string_keeps_quotes_in_text() {
        let Munched::Some(tok, next) = MunchString.munch(&CharCursor::new("\"a b\", x")) else {
            panic!("expected a string token");
        };

        assert_eq!(tok.kind, TokenKind::String);
        assert_eq!(tok.text, "\"a b\"");
        assert_eq!(next.rest(), ", x");
    }

    #[test]
    fn string_may_be_empty_or_contain_parentheses() {
        let Munched::Some(tok, _) = MunchString.munch(&CharCursor::new("\"\"")) else {
            panic!("expected a string token");
        };
        assert_eq!(tok.text, "\"\"");

        let Munched::Some(tok, _) = MunchString.munch(&CharCursor::new("\"(a, b)\"")) else {
            panic!("expected a string token");
        };
        assert_eq!(tok.text, "\"(a, b)\"");
    }

    #[test]
    fn string_without_closing_quote_errors() {
        let res = MunchString.munch(&CharCursor::new("\"never closed"));

        assert!(matches!(res, Munched::Err(e) if e.contains("missing closing double quotes")));
    }

    #[test]
    fn string_ends_at_first_interior_quote() {
        let Munched::Some(tok, next) = MunchString.munch(&CharCursor::new("\"misplaced \" quote\""))
        else {
            panic!("expected a string token");
        };

        assert_eq!(tok.text, "\"misplaced \"");
        assert_eq!(next.rest(), " quote\"");
    }

    #[test]
    fn non_quote_is_not_a_string() {
        assert!(matches!(
            MunchString.munch(&CharCursor::new("abc")),
            Munched::None
        ));
    }
}
