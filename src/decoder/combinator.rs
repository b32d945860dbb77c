//! The small backtracking engine the decoder builders are written in.

use crate::{
    cursor::Cursor,
    decoder::{Candidate, ParserOutput},
    error::DecodeError,
    lexer::TokenCursor,
    token::{Token, TokenKind},
};

/// consume a single token of `kind`
pub fn token<'a>(cursor: TokenCursor<'a>, kind: TokenKind) -> ParserOutput<'a, &'a Token> {
    match (cursor.data(), cursor.next()) {
        (Some(tok), Some(next)) if tok.kind == kind => Ok(vec![Candidate::new(tok, next)]),
        (Some(tok), _) => Err(DecodeError::structural(
            format!("expected {kind} but found \"{}\"", tok.text),
            Some(tok.position),
        )),
        (None, _) => Err(DecodeError::structural(
            format!("expected {kind} but reached end of input"),
            Some(cursor.position()),
        )),
    }
}

/// consume a single identifier token whose text is exactly `name`
pub fn identifier<'a>(cursor: TokenCursor<'a>, name: &str) -> ParserOutput<'a, &'a Token> {
    match (cursor.data(), cursor.next()) {
        (Some(tok), Some(next)) if tok.kind == TokenKind::Identifier && tok.text == name => {
            Ok(vec![Candidate::new(tok, next)])
        }
        (Some(tok), _) => Err(DecodeError::structural(
            format!("expected \"{name}\" but found \"{}\"", tok.text),
            Some(tok.position),
        )),
        (None, _) => Err(DecodeError::structural(
            format!("expected \"{name}\" but reached end of input"),
            Some(cursor.position()),
        )),
    }
}

/// run `parser`, keeping both its candidates and the candidate which consumes nothing
///
/// Never fails.
pub fn optional<'a, V, F>(cursor: TokenCursor<'a>, parser: F) -> Vec<Candidate<'a, Option<V>>>
where
    F: Fn(TokenCursor<'a>) -> ParserOutput<'a, V>,
{
    let mut candidates: Vec<_> = parser(cursor)
        .unwrap_or_default()
        .into_iter()
        .map(|c| c.map(Some))
        .collect();
    candidates.push(Candidate::new(None, cursor));
    candidates
}

/// continue every candidate with `step`, pairing each previous result with each new one
///
/// Fails only if every continuation fails, in which case the error which got furthest into the
/// input is reported.
pub fn then<'a, P, V, F>(candidates: Vec<Candidate<'a, P>>, step: F) -> ParserOutput<'a, (P, V)>
where
    P: Clone,
    F: Fn(TokenCursor<'a>) -> ParserOutput<'a, V>,
{
    let mut out = Vec::new();
    let mut error: Option<DecodeError> = None;

    for prev in candidates {
        match step(prev.remaining) {
            Ok(next) => out.extend(
                next.into_iter()
                    .map(|c| c.map(|v| (prev.result.clone(), v))),
            ),
            Err(e) => {
                error = Some(match error {
                    Some(err) => err.furthest(e),
                    None => e,
                })
            }
        }
    }

    match error {
        Some(e) if out.is_empty() => Err(e),
        _ => Ok(out),
    }
}

pub fn whitespace<'a>(cursor: TokenCursor<'a>) -> ParserOutput<'a, &'a Token> {
    token(cursor, TokenKind::Whitespace)
}

/// a comma, optionally surrounded by whitespace on either side
pub fn separator<'a>(cursor: TokenCursor<'a>) -> ParserOutput<'a, ()> {
    let before = optional(cursor, whitespace);
    let comma = then(before, |c| token(c, TokenKind::Comma))?;
    let after = then(comma, |c| Ok(optional(c, whitespace)))?;

    Ok(after.into_iter().map(|c| c.map(|_| ())).collect())
}
