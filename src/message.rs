//! Replies sent by the server over the message channel.
//!
//! Every reply is a single RON literal, either `Success("<payload>")` or `Error("<reason>")`.

use std::fmt::{self, Display};

use lazy_static::lazy_static;

use crate::{
    decode::decode,
    decoder::{DecoderExt, RonEnum, ron_enum, string, tuple_struct},
    error::DecodeError,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ServerMessage {
    Success(String),
    Error(String),
}

lazy_static! {
    static ref MESSAGE_DECODER: RonEnum<ServerMessage> = ron_enum(vec![
        tuple_struct("Success", (string(),))
            .map(|t| ServerMessage::Success(t.value.0))
            .boxed(),
        tuple_struct("Error", (string(),))
            .map(|t| ServerMessage::Error(t.value.0))
            .boxed(),
    ]);
}

/// The shared decoder for [`ServerMessage`]s, built on first use
pub fn message_decoder() -> &'static RonEnum<ServerMessage> {
    &MESSAGE_DECODER
}

pub fn decode_message(raw: &str) -> Result<ServerMessage, DecodeError> {
    decode(raw, message_decoder())
}

/// Decode `raw` and turn it into text fit for showing to a user
///
/// Never fails: a reply that cannot be decoded is described as such.
pub fn describe_message(raw: &str) -> String {
    match decode_message(raw) {
        Ok(message) => message.describe(),
        Err(e) => format!("Could not parse server response: {e}"),
    }
}

impl ServerMessage {
    pub fn describe(&self) -> String {
        match self {
            ServerMessage::Success(payload) => payload.clone(),
            ServerMessage::Error(reason) => {
                tracing::debug!(reason = %reason, "server returned an error");
                format!("The server returned an error: {reason}")
            }
        }
    }
}

impl Display for ServerMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ServerMessage::Success(payload) => write!(f, "Success: {payload}"),
            ServerMessage::Error(reason) => write!(f, "Error: {reason}"),
        }
    }
}

#[cfg(test)]
mod test {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn decodes_success_and_error() {
        assert_eq!(
            decode_message("Success(\"42\")"),
            Ok(ServerMessage::Success("42".into()))
        );
        assert_eq!(
            decode_message("Error(\"bad input\")"),
            Ok(ServerMessage::Error("bad input".into()))
        );
    }

    #[test]
    fn describes_success_messages() {
        assert_eq!(
            describe_message("Success(\"success message\")"),
            "success message"
        );
    }

    #[test]
    fn describes_error_messages() {
        assert_eq!(
            describe_message("Error(\"error message\")"),
            "The server returned an error: error message"
        );
    }

    #[test]
    fn describes_undecodable_messages() {
        assert_eq!(
            describe_message("Warning(\"x\")"),
            "Could not parse server response: Did not find matching enum variant for \"Warning(\"x\")\""
        );
    }

    #[test]
    fn decoder_is_shared() {
        assert!(std::ptr::eq(message_decoder(), message_decoder()));
        assert_eq!(message_decoder().len(), 2);
    }

    #[test]
    fn display_names_the_variant() {
        let ok = ServerMessage::Success("42".into());
        let err = ServerMessage::Error("nope".into());

        assert_eq!(ok.to_string(), "Success: 42");
        assert_eq!(err.to_string(), "Error: nope");
    }
}
