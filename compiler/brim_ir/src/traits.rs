//! Shared node traits.

use crate::{Span, Token};

/// Anything that covers a source range.
pub trait Spanned {
    fn span(&self) -> Span;
}

impl Spanned for Span {
    fn span(&self) -> Span {
        *self
    }
}

impl Spanned for Token {
    fn span(&self) -> Span {
        Token::span(self)
    }
}
