use crate::{
    cursor::{CharCursor, Cursor},
    token::{Munch, Munched, Token, TokenKind},
};

/// Munches a single punctuation character into a token of the given kind
pub struct MunchPunct {
    pub symbol: char,
    pub kind: TokenKind,
}

pub const COMMA: MunchPunct = MunchPunct {
    symbol: ',',
    kind: TokenKind::Comma,
};

pub const LEFT_PARENTHESIS: MunchPunct = MunchPunct {
    symbol: '(',
    kind: TokenKind::LeftParenthesis,
};

pub const RIGHT_PARENTHESIS: MunchPunct = MunchPunct {
    symbol: ')',
    kind: TokenKind::RightParenthesis,
};

impl Munch for MunchPunct {
    fn munch<'a>(&self, cursor: &CharCursor<'a>) -> Munched<CharCursor<'a>> {
        if cursor.data() != Some(self.symbol) {
            return Munched::None;
        }

        match cursor.next() {
            Some(next) => Munched::Some(
                Token::new(self.kind, cursor.slice_to(&next), cursor.position()),
                next,
            ),
            None => Munched::None,
        }
    }
}
