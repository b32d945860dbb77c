use crate::{
    cursor::Cursor,
    decoder::{BoxedDecoder, Decoder, ParserOutput},
    error::DecodeError,
    lexer::TokenCursor,
};

/// Decodes the first matching variant of an ordered list, see [`ron_enum`]
pub struct RonEnum<T> {
    variants: Vec<BoxedDecoder<T>>,
}

/// A decoder trying each of `variants` in order from the same position
///
/// The first variant that succeeds wins and later ones are not tried. Variants are usually
/// [`tuple_struct`](crate::tuple_struct) decoders mapped into one Rust enum:
///
/// ```
/// use ron_decoder::{DecoderExt, decode, number, ron_enum, string, tuple_struct};
///
/// #[derive(Debug, Clone, PartialEq)]
/// enum Reply {
///     Text(String),
///     Value(f64),
/// }
///
/// let decoder = ron_enum(vec![
///     tuple_struct("Text", (string(),)).map(|t| Reply::Text(t.value.0)).boxed(),
///     tuple_struct("Value", (number(),)).map(|t| Reply::Value(t.value.0)).boxed(),
/// ]);
///
/// assert_eq!(decode("Value(\"4.5\")", &decoder), Ok(Reply::Value(4.5)));
/// ```
pub fn ron_enum<T: Clone>(variants: Vec<BoxedDecoder<T>>) -> RonEnum<T> {
    RonEnum { variants }
}

impl<T: Clone> RonEnum<T> {
    pub fn len(&self) -> usize {
        self.variants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.variants.is_empty()
    }
}

impl<T: Clone> Decoder for RonEnum<T> {
    type Output = T;

    fn decode<'a>(&self, cursor: TokenCursor<'a>) -> ParserOutput<'a, T> {
        for (idx, variant) in self.variants.iter().enumerate() {
            match variant.decode(cursor) {
                Ok(candidates) => return Ok(candidates),
                Err(e) => tracing::trace!(variant = idx, error = %e, "enum variant did not match"),
            }
        }

        Err(DecodeError::NoMatchingVariant {
            rest: cursor.rest_text(),
            position: Some(cursor.position()),
        })
    }
}
