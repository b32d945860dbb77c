use crate::{
    decoder::{Decoder, ParserOutput, combinator::token},
    lexer::TokenCursor,
    token::{Token, TokenKind},
};

/// Decodes a quoted string into its contents, see [`string`]
#[derive(Debug, Clone, Copy, Default)]
pub struct StringDecoder;

/// A decoder for a single `"..."` string token, yielding the text between the quotes
pub fn string() -> StringDecoder {
    StringDecoder
}

impl Decoder for StringDecoder {
    type Output = String;

    fn decode<'a>(&self, cursor: TokenCursor<'a>) -> ParserOutput<'a, String> {
        Ok(token(cursor, TokenKind::String)?
            .into_iter()
            .map(|c| c.map(strip_double_quotes))
            .collect())
    }
}

fn strip_double_quotes(tok: &Token) -> String {
    let text = tok.text.as_str();
    text.strip_prefix('"')
        .and_then(|t| t.strip_suffix('"'))
        .unwrap_or(text)
        .to_string()
}

#[cfg(test)]
mod test {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{cursor::Cursor, error::ErrorKind, lexer::lex};

    #[test]
    fn strips_quotes() {
        let stream = lex("\"valid string\"").unwrap();

        let out = string().decode(stream.start()).unwrap();

        assert_eq!(out.len(), 1);
        assert_eq!(out[0].result, "valid string");
        assert!(out[0].remaining.is_eof());
    }

    #[test]
    fn empty_string() {
        let stream = lex("\"\"").unwrap();

        let out = string().decode(stream.start()).unwrap();

        assert_eq!(out[0].result, "");
    }

    #[test]
    fn stops_after_one_token() {
        let stream = lex("\"a\",\"b\"").unwrap();

        let out = string().decode(stream.start()).unwrap();

        assert_eq!(out[0].result, "a");
        assert_eq!(out[0].remaining.rest_text(), ",\"b\"");
    }

    #[test]
    fn rejects_other_tokens() {
        let stream = lex("has no quotes").unwrap();

        let err = string().decode(stream.start()).unwrap_err();

        assert_eq!(err.kind(), ErrorKind::Structural);
        assert_eq!(err.to_string(), "expected string but found \"has\"");
    }
}
