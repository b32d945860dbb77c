/// Cheaply clonable representation of a single element in some stream of items.
///
/// A cursor may also sit one past the final element, representing <eof>. At that point
/// [`Cursor::data`] returns [`None`] and [`Cursor::next`] refuses to advance any further.
pub trait Cursor: Clone + Sized {
    type Item;

    /// Get the data associated with this cursor, or [`None`] if the cursor is at <eof>
    fn data(&self) -> Option<Self::Item>;

    /// Get the cursor immediately following this one, or [`None`], indicating that this cursor
    /// is already at <eof>
    fn next(&self) -> Option<Self>;

    /// Byte offset of this cursor into the input
    fn position(&self) -> usize;

    fn is_eof(&self) -> bool {
        self.data().is_none()
    }
}

/// Cursor over the characters of a borrowed input string
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CharCursor<'a> {
    input: &'a str,
    pos: usize,
}

impl<'a> CharCursor<'a> {
    pub fn new(input: &'a str) -> Self {
        Self { input, pos: 0 }
    }

    /// the unconsumed remainder of the input, starting at this cursor
    pub fn rest(&self) -> &'a str {
        &self.input[self.pos..]
    }

    /// the input between `self` (inclusive) and `other` (exclusive)
    ///
    /// `other` must not come before `self`
    pub fn slice_to(&self, other: &Self) -> &'a str {
        debug_assert!(self.pos <= other.pos);
        &self.input[self.pos..other.pos]
    }
}

impl<'a> Cursor for CharCursor<'a> {
    type Item = char;

    fn data(&self) -> Option<char> {
        self.rest().chars().next()
    }

    fn next(&self) -> Option<Self> {
        let c = self.data()?;
        Some(Self {
            input: self.input,
            pos: self.pos + c.len_utf8(),
        })
    }

    fn position(&self) -> usize {
        self.pos
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn char_cursor_walks_multibyte_chars() {
        let mut head = Some(CharCursor::new("a⅏b"));
        let mut seen = Vec::new();

        while let Some(h) = head {
            match h.data() {
                Some(c) => seen.push((h.position(), c)),
                None => assert!(h.is_eof()),
            }
            head = h.next();
        }

        assert_eq!(seen, vec![(0, 'a'), (1, '⅏'), (4, 'b')]);
    }

    #[test]
    fn char_cursor_slices_between_positions() {
        let start = CharCursor::new("Success(");
        let mut end = start;
        for _ in 0..7 {
            end = end.next().unwrap();
        }

        assert_eq!(start.slice_to(&end), "Success");
        assert_eq!(end.rest(), "(");
    }
}
