use crate::cursor::{CharCursor, Cursor};

pub trait CharCursorExt<'a>: Cursor<Item = char> {
    /// consume characters for as long as `pred` holds, returning the consumed text and the
    /// cursor at the first character which did not match (or <eof>)
    fn take_while<P: Fn(char) -> bool>(&self, pred: P) -> (&'a str, Self);
}

impl<'a> CharCursorExt<'a> for CharCursor<'a> {
    fn take_while<P: Fn(char) -> bool>(&self, pred: P) -> (&'a str, Self) {
        let mut head = *self;

        // stop on the first rejected char, or fall off at <eof>
        while let Some(c) = head.data() {
            if !pred(c) {
                break;
            }
            match head.next() {
                Some(h) => head = h,
                None => break,
            }
        }

        (self.slice_to(&head), head)
    }
}
