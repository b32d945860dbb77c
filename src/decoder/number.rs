use crate::{
    cursor::Cursor,
    decoder::{Candidate, Decoder, ParserOutput, StringDecoder},
    error::DecodeError,
    lexer::TokenCursor,
};

/// Decodes a number written as a quoted string, see [`number`]
#[derive(Debug, Clone, Copy, Default)]
pub struct NumberDecoder;

/// A decoder for numbers encoded as strings, e.g. `"12"`, `"12.34"`, `".5"` or `"12."`
///
/// Only plain digits with at most one decimal point are accepted: no sign, no exponent.
pub fn number() -> NumberDecoder {
    NumberDecoder
}

impl Decoder for NumberDecoder {
    type Output = f64;

    fn decode<'a>(&self, cursor: TokenCursor<'a>) -> ParserOutput<'a, f64> {
        let strings = StringDecoder.decode(cursor)?;
        let position = cursor.data().map(|tok| tok.position);

        // a single unparseable candidate fails the whole decode
        strings
            .into_iter()
            .map(|c| match parse_number(&c.result) {
                Some(n) => Ok(Candidate::new(n, c.remaining)),
                None => Err(DecodeError::NotANumber {
                    text: c.result,
                    position,
                }),
            })
            .collect()
    }
}

fn parse_number(text: &str) -> Option<f64> {
    if !looks_like_a_number(text) {
        return None;
    }
    text.parse().ok()
}

/// all digits, or digits around a single decimal point, either side possibly empty
fn looks_like_a_number(text: &str) -> bool {
    let is_integer = !text.is_empty() && text.bytes().all(|b| b.is_ascii_digit());
    let is_decimal = text
        .split_once('.')
        .is_some_and(|(int, frac)| int.bytes().chain(frac.bytes()).all(|b| b.is_ascii_digit()));

    is_integer || is_decimal
}
