use crate::{cursor::Cursor, decoder::Decoder, error::DecodeError, lexer::lex};

/// Decode the whole of `input` with `decoder`
///
/// Lexes `input`, runs `decoder` from the first token and keeps only the candidates which
/// consumed every token. Exactly one such candidate must remain.
///
/// ```
/// use ron_decoder::{decode, string};
///
/// assert_eq!(decode("\"hello\"", &string()), Ok("hello".to_string()));
/// assert!(decode("\"hello\" world", &string()).is_err());
/// ```
pub fn decode<D: Decoder + ?Sized>(input: &str, decoder: &D) -> Result<D::Output, DecodeError> {
    let result = decode_tokens(input, decoder);

    if let Err(e) = &result {
        tracing::debug!(kind = ?e.kind(), position = ?e.position(), error = %e, "decoding RON value failed");
    }

    result
}

fn decode_tokens<D: Decoder + ?Sized>(input: &str, decoder: &D) -> Result<D::Output, DecodeError> {
    let stream = lex(input)?;
    let candidates = decoder.decode(stream.start())?;

    let (mut complete, partial): (Vec<_>, Vec<_>) = candidates
        .into_iter()
        .partition(|c| c.remaining.is_eof());

    if complete.is_empty() {
        // report whichever partial parse got furthest
        return match partial.iter().max_by_key(|c| c.remaining.index()) {
            Some(furthest) => Err(DecodeError::TrailingInput {
                rest: furthest.remaining.rest_text(),
                position: furthest.remaining.position(),
            }),
            None => Err(DecodeError::NoResult),
        };
    }

    if complete.len() > 1 {
        return Err(DecodeError::Ambiguous);
    }

    Ok(complete.remove(0).result)
}
