use crate::{
    cursor::{CharCursor, Cursor},
    error::DecodeError,
    token::{
        COMMA, LEFT_PARENTHESIS, MunchIdentifier, MunchString, MunchWhitespace,
        RIGHT_PARENTHESIS, Munch, Munched, Token,
    },
};

/// order determines lexing priority, the first muncher producing a token wins
static MUNCHERS: [&(dyn Munch + Sync); 6] = [
    &MunchIdentifier,
    &MunchString,
    &MunchWhitespace,
    &COMMA,
    &LEFT_PARENTHESIS,
    &RIGHT_PARENTHESIS,
];

/// Every token of one input, in order
///
/// Owns the tokens for a single decode; [`TokenCursor`]s borrow from it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenStream {
    tokens: Vec<Token>,
}

impl TokenStream {
    pub fn start(&self) -> TokenCursor<'_> {
        TokenCursor {
            tokens: &self.tokens,
            pos: 0,
        }
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

/// A position in a [`TokenStream`]
///
/// Copying a cursor is free, so any number of candidate parses can share the unconsumed
/// remainder of the stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TokenCursor<'a> {
    tokens: &'a [Token],
    pos: usize,
}

impl<'a> TokenCursor<'a> {
    /// index of this cursor into the stream, `len()` being <eof>
    pub fn index(&self) -> usize {
        self.pos
    }

    /// the text of every token from this cursor to <eof>, concatenated
    pub fn rest_text(&self) -> String {
        self.tokens[self.pos..]
            .iter()
            .map(|tok| tok.text.as_str())
            .collect()
    }
}

impl<'a> Cursor for TokenCursor<'a> {
    type Item = &'a Token;

    fn data(&self) -> Option<&'a Token> {
        self.tokens.get(self.pos)
    }

    fn next(&self) -> Option<Self> {
        self.data()?;
        Some(Self {
            tokens: self.tokens,
            pos: self.pos + 1,
        })
    }

    /// byte offset of the token under this cursor, or the end of the input at <eof>
    fn position(&self) -> usize {
        match self.data() {
            Some(tok) => tok.position,
            None => self
                .tokens
                .last()
                .map_or(0, |tok| tok.position + tok.text.len()),
        }
    }
}

/// Split `input` into tokens
///
/// Fails on the first prefix of the remaining input which no muncher accepts.
pub fn lex(input: &str) -> Result<TokenStream, DecodeError> {
    let mut tokens = Vec::new();
    let mut head = CharCursor::new(input);

    while !head.is_eof() {
        let (tok, next) = munch_one(&head)?;
        tokens.push(tok);
        head = next;
    }

    tracing::trace!(tokens = tokens.len(), "lexed RON input");

    Ok(TokenStream { tokens })
}

fn munch_one<'a>(cursor: &CharCursor<'a>) -> Result<(Token, CharCursor<'a>), DecodeError> {
    let mut errors = String::new();

    for muncher in MUNCHERS {
        match muncher.munch(cursor) {
            Munched::Some(tok, next) => return Ok((tok, next)),
            Munched::Err(e) => {
                if !errors.is_empty() {
                    errors.push('\n');
                }
                errors.push_str(&e);
            }
            Munched::None => {}
        }
    }

    if errors.is_empty() {
        errors = format!("unexpected input \"{}\"", cursor.rest());
    }

    Err(DecodeError::Lex {
        message: errors,
        position: cursor.position(),
    })
}

#[cfg(test)]
mod test {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::token::TokenKind;

    fn kinds(input: &str) -> Vec<(TokenKind, String)> {
        lex(input)
            .unwrap()
            .tokens()
            .iter()
            .map(|tok| (tok.kind, tok.text.clone()))
            .collect()
    }

    #[test]
    fn lexes_tuple_struct() {
        assert_eq!(
            kinds("Second(\"42\" , \"a\",)"),
            vec![
                (TokenKind::Identifier, "Second".to_string()),
                (TokenKind::LeftParenthesis, "(".to_string()),
                (TokenKind::String, "\"42\"".to_string()),
                (TokenKind::Whitespace, " ".to_string()),
                (TokenKind::Comma, ",".to_string()),
                (TokenKind::Whitespace, " ".to_string()),
                (TokenKind::String, "\"a\"".to_string()),
                (TokenKind::Comma, ",".to_string()),
                (TokenKind::RightParenthesis, ")".to_string()),
            ]
        );
    }

    #[test]
    fn records_byte_positions() {
        let stream = lex("A(\"é\")").unwrap();
        let positions: Vec<usize> = stream.tokens().iter().map(|t| t.position).collect();

        assert_eq!(positions, vec![0, 1, 2, 6]);
        assert_eq!(stream.start().rest_text(), "A(\"é\")");
    }

    #[test]
    fn empty_input_has_no_tokens() {
        let stream = lex("").unwrap();

        assert!(stream.is_empty());
        assert!(stream.start().is_eof());
        assert_eq!(stream.start().position(), 0);
    }

    #[test]
    fn unterminated_string_is_a_lex_error() {
        let err = lex("Success(\"oops").unwrap_err();

        assert_eq!(err.position(), Some(8));
        assert!(err.to_string().contains("missing closing double quotes"));
    }

    #[test]
    fn unknown_character_is_a_lex_error() {
        let err = lex("Success[\"x\"]").unwrap_err();

        assert_eq!(err.position(), Some(7));
        assert!(err.to_string().contains("[\"x\"]"));
    }

    #[test]
    fn cursor_stops_at_eof() {
        let stream = lex("a b").unwrap();
        let end = stream.start().next().unwrap().next().unwrap().next().unwrap();

        assert!(end.is_eof());
        assert_eq!(end.index(), 3);
        assert_eq!(end.position(), 3);
        assert!(end.next().is_none());
        assert_eq!(end.rest_text(), "");
    }
}
