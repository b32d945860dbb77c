//! Decoders turn a position in a token stream into candidate values.
//!
//! A decoder never commits to a single parse: it returns every way it could consume tokens
//! from the given position, each paired with the unconsumed remainder. Sequencing two decoders
//! runs the second from every candidate of the first. Only [`crate::decode`] requires that
//! exactly one candidate survives.

pub mod combinator;
mod number;
mod ron_enum;
mod string;
mod tuple_struct;

pub use number::*;
pub use ron_enum::*;
pub use string::*;
pub use tuple_struct::*;

use crate::{error::DecodeError, lexer::TokenCursor};

/// One possible parse: a value and everything after it
#[derive(Debug, Clone, PartialEq)]
pub struct Candidate<'a, V> {
    pub result: V,
    pub remaining: TokenCursor<'a>,
}

impl<'a, V> Candidate<'a, V> {
    pub fn new(result: V, remaining: TokenCursor<'a>) -> Self {
        Self { result, remaining }
    }

    pub fn map<U, F: FnOnce(V) -> U>(self, f: F) -> Candidate<'a, U> {
        Candidate {
            result: f(self.result),
            remaining: self.remaining,
        }
    }
}

/// Either the set of candidate parses, or the reason there are none
pub type ParserOutput<'a, V> = Result<Vec<Candidate<'a, V>>, DecodeError>;

/// Decodes one value starting at a [`TokenCursor`]
///
/// Implementations hold no per-call state: one decoder is built once and then shared freely,
/// across threads included.
pub trait Decoder: Send + Sync {
    type Output: Clone;

    fn decode<'a>(&self, cursor: TokenCursor<'a>) -> ParserOutput<'a, Self::Output>;
}

/// A type-erased decoder, as taken by [`ron_enum`]
pub type BoxedDecoder<T> = Box<dyn Decoder<Output = T>>;

impl<D: Decoder + ?Sized> Decoder for Box<D> {
    type Output = D::Output;

    fn decode<'a>(&self, cursor: TokenCursor<'a>) -> ParserOutput<'a, Self::Output> {
        (**self).decode(cursor)
    }
}

pub trait DecoderExt: Decoder + Sized {
    /// transform every decoded value with `f`
    fn map<T, F>(self, f: F) -> Map<Self, F>
    where
        T: Clone,
        F: Fn(Self::Output) -> T + Send + Sync,
    {
        Map { inner: self, f }
    }

    fn boxed(self) -> BoxedDecoder<Self::Output>
    where
        Self: 'static,
    {
        Box::new(self)
    }
}

impl<D: Decoder> DecoderExt for D {}

/// See [`DecoderExt::map`]
pub struct Map<D, F> {
    inner: D,
    f: F,
}

impl<D, F, T> Decoder for Map<D, F>
where
    D: Decoder,
    T: Clone,
    F: Fn(D::Output) -> T + Send + Sync,
{
    type Output = T;

    fn decode<'a>(&self, cursor: TokenCursor<'a>) -> ParserOutput<'a, T> {
        Ok(self
            .inner
            .decode(cursor)?
            .into_iter()
            .map(|c| c.map(&self.f))
            .collect())
    }
}
