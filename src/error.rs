use std::fmt::{self, Display};

use thiserror::Error;

/// Broad classification of a [`DecodeError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// no token pattern matches the remaining input
    Lex,
    /// an expected token, identifier or separator is missing
    Structural,
    /// a well-formed value which does not mean what the decoder needs, e.g. a non-numeric number
    Semantic,
    /// a valid parse that leaves tokens unconsumed
    TrailingInput,
    /// no candidate parse, or no enum variant, matched
    NoMatch,
    /// more than one candidate parse survived
    Ambiguous,
}

/// Every way decoding a RON value can fail
///
/// Errors are plain data: a failed decode leaves nothing behind that could affect another call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    #[error("{message}")]
    Lex { message: String, position: usize },

    #[error("{message}")]
    Structural {
        message: String,
        position: Option<usize>,
    },

    #[error("could not parse {text} to a number")]
    NotANumber { text: String, position: Option<usize> },

    #[error("unexpected trailing input \"{rest}\"")]
    TrailingInput { rest: String, position: usize },

    #[error("Decoding RON value returned no result")]
    NoResult,

    #[error("Did not find matching enum variant for \"{rest}\"")]
    NoMatchingVariant { rest: String, position: Option<usize> },

    #[error("Decoding RON value returned ambiguous values")]
    Ambiguous,
}

impl DecodeError {
    pub fn structural(message: impl Into<String>, position: Option<usize>) -> Self {
        Self::Structural {
            message: message.into(),
            position,
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            DecodeError::Lex { .. } => ErrorKind::Lex,
            DecodeError::Structural { .. } => ErrorKind::Structural,
            DecodeError::NotANumber { .. } => ErrorKind::Semantic,
            DecodeError::TrailingInput { .. } => ErrorKind::TrailingInput,
            DecodeError::NoResult | DecodeError::NoMatchingVariant { .. } => ErrorKind::NoMatch,
            DecodeError::Ambiguous => ErrorKind::Ambiguous,
        }
    }

    /// byte offset into the input the error refers to, if it refers to one
    pub fn position(&self) -> Option<usize> {
        match self {
            DecodeError::Lex { position, .. } | DecodeError::TrailingInput { position, .. } => {
                Some(*position)
            }
            DecodeError::Structural { position, .. }
            | DecodeError::NotANumber { position, .. }
            | DecodeError::NoMatchingVariant { position, .. } => *position,
            DecodeError::NoResult | DecodeError::Ambiguous => None,
        }
    }

    /// pick whichever of two errors got further into the input, preferring `self` on a tie
    pub(crate) fn furthest(self, other: Self) -> Self {
        if other.position() > self.position() {
            other
        } else {
            self
        }
    }
}

/// default maximum line length to show, longer lines are truncated around the error position
pub const DEFAULT_VIEW_WINDOW: usize = 80;

/// Rendering options for [`ErrorView`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewOptions {
    /// maximum number of characters of the input line to show
    pub window: usize,
    /// use ansi color for the message and caret
    pub color: bool,
}

impl Default for ViewOptions {
    fn default() -> Self {
        Self {
            window: DEFAULT_VIEW_WINDOW,
            color: true,
        }
    }
}

const ANSI_ERROR: &str = "\x1b[38;5;1m";
const ANSI_DIM: &str = "\x1b[38;5;8m";
const ANSI_RESET: &str = "\x1b[0m";

/// Pretty printer pairing a [`DecodeError`] with the input it came from
///
/// Renders the message, then (if the error has a position) the input line it points into with
/// a caret underneath:
///
/// ```text
/// could not parse 12.a to a number
///   1:8 | Second("12.a", "x")
///       |        ^
/// ```
#[derive(Debug, Clone)]
pub struct ErrorView {
    message: String,
    location: Option<Location>,
    options: ViewOptions,
}

/// Text of the line an error sits on, already cut down to the view window
#[derive(Debug, Clone, PartialEq, Eq)]
struct Location {
    /// 1-based line number
    line_num: usize,
    /// 1-based character column in the full line
    line_pos: usize,
    /// visible portion of the line
    line: String,
    /// caret position, in characters, within `line`
    virt_pos: usize,
}

impl ErrorView {
    pub fn new(error: &DecodeError, input: &str, options: ViewOptions) -> Self {
        Self {
            message: error.to_string(),
            location: error
                .position()
                .map(|pos| Location::new(input, pos, options.window)),
            options,
        }
    }
}

impl Location {
    fn new(input: &str, pos: usize, window: usize) -> Self {
        let pos = clamp_to_char_boundary(input, pos);
        let line_start = input[..pos].rfind('\n').map_or(0, |i| i + 1);
        let line_end = input[pos..].find('\n').map_or(input.len(), |i| pos + i);

        let line_num = input[..line_start].matches('\n').count() + 1;
        let line: Vec<char> = input[line_start..line_end].chars().collect();
        let line_pos = input[line_start..pos].chars().count();

        let window = window.max(1);

        // line fits in the view, show it whole
        if line.len() <= window {
            return Self {
                line_num,
                line_pos: line_pos + 1,
                line: line.into_iter().collect(),
                virt_pos: line_pos,
            };
        }

        // otherwise center the window on the caret, without running past either end
        let start = line_pos
            .saturating_sub(window / 2)
            .min(line.len() - window);

        Self {
            line_num,
            line_pos: line_pos + 1,
            line: line[start..start + window].iter().collect(),
            virt_pos: line_pos - start,
        }
    }
}

fn clamp_to_char_boundary(input: &str, pos: usize) -> usize {
    let mut pos = pos.min(input.len());
    while !input.is_char_boundary(pos) {
        pos -= 1;
    }
    pos
}

impl Display for ErrorView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (error, dim, reset) = if self.options.color {
            (ANSI_ERROR, ANSI_DIM, ANSI_RESET)
        } else {
            ("", "", "")
        };

        write!(f, "{error}{}{reset}", self.message)?;

        let Some(loc) = &self.location else {
            return Ok(());
        };

        let gutter = format!("{}:{}", loc.line_num, loc.line_pos);
        let pad = " ".repeat(gutter.len());
        writeln!(f)?;
        writeln!(f, "{dim}  {gutter} |{reset} {}", loc.line)?;
        write!(
            f,
            "{dim}  {pad} |{reset} {}{error}^{reset}",
            " ".repeat(loc.virt_pos)
        )
    }
}

#[cfg(test)]
mod test {
    use pretty_assertions::assert_eq;

    use super::*;

    const PLAIN: ViewOptions = ViewOptions {
        window: DEFAULT_VIEW_WINDOW,
        color: false,
    };

    #[test]
    fn kinds_follow_variants() {
        assert_eq!(DecodeError::NoResult.kind(), ErrorKind::NoMatch);
        assert_eq!(DecodeError::Ambiguous.kind(), ErrorKind::Ambiguous);
        assert_eq!(
            DecodeError::NotANumber {
                text: "x".into(),
                position: None
            }
            .kind(),
            ErrorKind::Semantic
        );
    }

    #[test]
    fn furthest_prefers_later_position() {
        let early = DecodeError::structural("early", Some(1));
        let late = DecodeError::structural("late", Some(5));
        let none = DecodeError::structural("none", None);

        assert_eq!(early.clone().furthest(late.clone()), late);
        assert_eq!(late.clone().furthest(early.clone()), late);
        assert_eq!(none.furthest(early.clone()), early);
        assert_eq!(
            early.clone().furthest(DecodeError::structural("tie", Some(1))),
            early
        );
    }

    #[test]
    fn view_points_at_position() {
        let input = "Second(\"12.a\", \"x\")";
        let err = DecodeError::NotANumber {
            text: "12.a".into(),
            position: Some(7),
        };

        let rendered = ErrorView::new(&err, input, PLAIN).to_string();

        assert_eq!(
            rendered,
            "could not parse 12.a to a number\n  1:8 | Second(\"12.a\", \"x\")\n      |        ^"
        );
    }

    #[test]
    fn view_picks_the_right_line() {
        let input = "First(\n\"a\"\n)x";
        let err = DecodeError::TrailingInput {
            rest: "x".into(),
            position: 12,
        };

        let rendered = ErrorView::new(&err, input, PLAIN).to_string();

        assert_eq!(
            rendered,
            "unexpected trailing input \"x\"\n  3:2 | )x\n      |  ^"
        );
    }

    #[test]
    fn view_truncates_long_lines_around_caret() {
        let input = format!("{}X{}", "a".repeat(50), "b".repeat(50));
        let err = DecodeError::structural("here", Some(50));
        let options = ViewOptions {
            window: 10,
            color: false,
        };

        let rendered = ErrorView::new(&err, &input, options).to_string();

        assert_eq!(rendered, "here\n  1:51 | aaaaaXbbbb\n       |      ^");
    }

    #[test]
    fn view_colors_message_and_caret() {
        let err = DecodeError::structural("here", Some(1));
        let options = ViewOptions {
            window: DEFAULT_VIEW_WINDOW,
            color: true,
        };

        let rendered = ErrorView::new(&err, "ab", options).to_string();

        assert!(rendered.starts_with("\x1b[38;5;1mhere\x1b[0m\n"));
        assert!(rendered.ends_with("\x1b[38;5;1m^\x1b[0m"));
        assert_eq!(
            rendered,
            "\x1b[38;5;1mhere\x1b[0m\n\x1b[38;5;8m  1:2 |\x1b[0m ab\n\x1b[38;5;8m      |\x1b[0m  \x1b[38;5;1m^\x1b[0m"
        );
    }

    #[test]
    fn view_without_position_is_just_the_message() {
        let rendered = ErrorView::new(&DecodeError::Ambiguous, "whatever", PLAIN).to_string();

        assert_eq!(rendered, "Decoding RON value returned ambiguous values");
    }

    #[test]
    fn view_at_end_of_input() {
        let err = DecodeError::structural("expected ')' but reached end of input", Some(4));

        let rendered = ErrorView::new(&err, "A(\"\"", PLAIN).to_string();

        assert_eq!(
            rendered,
            "expected ')' but reached end of input\n  1:5 | A(\"\"\n      |     ^"
        );
    }
}
