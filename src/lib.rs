//! Decoder for a small subset of RON: quoted strings, numbers written as quoted strings,
//! tuple structs (`Name(field, ...)`) and enums of tuple structs.
//!
//! Decoders are composed once from the builders [`string`], [`number`], [`tuple_struct`] and
//! [`ron_enum`], then handed to [`decode`] together with the raw text of a message.
//!
//! ```
//! use ron_decoder::{decode, string, tuple_struct};
//!
//! let decoder = tuple_struct("Success", (string(),));
//! let reply = decode("Success(\"42\")", &decoder).unwrap();
//!
//! assert_eq!(reply.name, "Success");
//! assert_eq!(reply.value.0, "42");
//! ```

pub mod char_cursor_ext;
pub mod cursor;
pub mod decode;
pub mod decoder;
pub mod error;
pub mod lexer;
pub mod message;
pub mod token;

pub use decode::decode;
pub use decoder::{
    BoxedDecoder, Candidate, Decoder, DecoderExt, Fields, NumberDecoder, ParserOutput, RonEnum,
    StringDecoder, TupleStruct, TupleStructDecoder, number, ron_enum, string, tuple_struct,
};
pub use error::{DecodeError, ErrorKind, ErrorView, ViewOptions};
pub use lexer::{TokenCursor, TokenStream, lex};
pub use message::{ServerMessage, decode_message, describe_message};
pub use token::{Token, TokenKind};
