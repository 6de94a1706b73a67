//! Tokens produced by the lexer and consumed by the parser.

mod kind;

pub use kind::{Band, TokenKind};

use crate::Span;

/// A lexed token.
///
/// `offset`/`length` address the source buffer in bytes; `line`/`column`
/// are 1-based and tracked incrementally by the scanner. A token is a value
/// and never owns text; slice the source buffer to recover it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Token {
    pub kind: TokenKind,
    pub offset: u32,
    pub length: u32,
    pub line: u32,
    pub column: u32,
}

impl Token {
    #[inline]
    pub const fn new(kind: TokenKind, offset: u32, length: u32, line: u32, column: u32) -> Self {
        Token {
            kind,
            offset,
            length,
            line,
            column,
        }
    }

    /// Zero-length synthetic token standing in for something absent.
    ///
    /// Anchored at `at` so the placeholder sorts where the gap is.
    #[inline]
    pub const fn missing(at: &Token) -> Self {
        Token {
            kind: TokenKind::Missing,
            offset: at.offset,
            length: 0,
            line: at.line,
            column: at.column,
        }
    }

    /// Byte offset one past the end of the token.
    #[inline]
    pub const fn end(&self) -> u32 {
        self.offset + self.length
    }

    #[inline]
    pub const fn span(&self) -> Span {
        Span::new(self.offset, self.end())
    }

    #[inline]
    pub const fn is(&self, kind: TokenKind) -> bool {
        self.kind as u8 == kind as u8
    }
}

#[cfg(target_pointer_width = "64")]
mod size_asserts {
    use super::Token;
    crate::static_assert_size!(Token, 20);
}
