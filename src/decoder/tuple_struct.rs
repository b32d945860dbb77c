use crate::{
    decoder::{
        Candidate, Decoder, ParserOutput,
        combinator::{identifier, optional, separator, then, token},
    },
    lexer::TokenCursor,
    token::TokenKind,
};

/// A decoded `Name(field, ...)` literal
///
/// `value` is a tuple holding one decoded value per field decoder, in declaration order.
#[derive(Debug, Clone, PartialEq)]
pub struct TupleStruct<V> {
    pub name: &'static str,
    pub value: V,
}

/// An ordered, fixed-size group of field decoders
///
/// Implemented for tuples of one to four [`Decoder`]s; four fields is the largest tuple struct
/// which can be decoded.
pub trait Fields: Send + Sync {
    type Output: Clone;

    /// decode every field, separated by commas, starting at `cursor`
    fn decode_fields<'a>(&self, cursor: TokenCursor<'a>) -> ParserOutput<'a, Self::Output>;
}

/// Decodes a tuple struct with a fixed name, see [`tuple_struct`]
pub struct TupleStructDecoder<F> {
    name: &'static str,
    fields: F,
}

/// A decoder for `name(field_1, ..., field_n)`
///
/// The identifier must equal `name` exactly and must be directly followed by `(`. Fields are
/// separated by a comma with optional whitespace on either side, and one trailing separator
/// before the closing `)` is accepted and discarded.
///
/// ```
/// use ron_decoder::{decode, number, string, tuple_struct};
///
/// let decoder = tuple_struct("Point", (number(), number(), string()));
/// let point = decode("Point(\"1\", \"2.5\", \"label\")", &decoder).unwrap();
///
/// assert_eq!(point.name, "Point");
/// assert_eq!(point.value, (1.0, 2.5, "label".to_string()));
/// ```
pub fn tuple_struct<F: Fields>(name: &'static str, fields: F) -> TupleStructDecoder<F> {
    TupleStructDecoder { name, fields }
}

impl<F: Fields> Decoder for TupleStructDecoder<F> {
    type Output = TupleStruct<F::Output>;

    fn decode<'a>(&self, cursor: TokenCursor<'a>) -> ParserOutput<'a, Self::Output> {
        let name = identifier(cursor, self.name)?;
        let open = then(name, |c| token(c, TokenKind::LeftParenthesis))?;
        let fields = then(open, |c| self.fields.decode_fields(c))?;
        let trailing = then(fields, |c| Ok(optional(c, separator)))?;
        let close = then(trailing, |c| token(c, TokenKind::RightParenthesis))?;

        Ok(close
            .into_iter()
            .map(|c| {
                c.map(|(((_, value), _), _)| TupleStruct {
                    name: self.name,
                    value,
                })
            })
            .collect())
    }
}

/// decode a separator then `field` after every candidate, merging values with `join`
fn next_field<'a, P, D, Q, J>(
    fields: Vec<Candidate<'a, P>>,
    field: &D,
    join: J,
) -> ParserOutput<'a, Q>
where
    P: Clone,
    D: Decoder,
    J: Fn(P, D::Output) -> Q,
{
    let separated = then(fields, separator)?;
    let decoded = then(separated, |c| field.decode(c))?;

    Ok(decoded
        .into_iter()
        .map(|c| c.map(|((prev, ()), value)| join(prev, value)))
        .collect())
}

impl<A: Decoder> Fields for (A,) {
    type Output = (A::Output,);

    fn decode_fields<'a>(&self, cursor: TokenCursor<'a>) -> ParserOutput<'a, Self::Output> {
        let a = self.0.decode(cursor)?;
        Ok(a.into_iter().map(|c| c.map(|a| (a,))).collect())
    }
}

impl<A: Decoder, B: Decoder> Fields for (A, B) {
    type Output = (A::Output, B::Output);

    fn decode_fields<'a>(&self, cursor: TokenCursor<'a>) -> ParserOutput<'a, Self::Output> {
        let a = self.0.decode(cursor)?;
        next_field(a, &self.1, |a, b| (a, b))
    }
}

impl<A: Decoder, B: Decoder, C: Decoder> Fields for (A, B, C) {
    type Output = (A::Output, B::Output, C::Output);

    fn decode_fields<'a>(&self, cursor: TokenCursor<'a>) -> ParserOutput<'a, Self::Output> {
        let a = self.0.decode(cursor)?;
        let ab = next_field(a, &self.1, |a, b| (a, b))?;
        next_field(ab, &self.2, |(a, b), c| (a, b, c))
    }
}

impl<A: Decoder, B: Decoder, C: Decoder, D: Decoder> Fields for (A, B, C, D) {
    type Output = (A::Output, B::Output, C::Output, D::Output);

    fn decode_fields<'a>(&self, cursor: TokenCursor<'a>) -> ParserOutput<'a, Self::Output> {
        let a = self.0.decode(cursor)?;
        let ab = next_field(a, &self.1, |a, b| (a, b))?;
        let abc = next_field(ab, &self.2, |(a, b), c| (a, b, c))?;
        next_field(abc, &self.3, |(a, b, c), d| (a, b, c, d))
    }
}
