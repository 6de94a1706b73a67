//! Type expressions: dispatch, references and function types.

use brim_ir::{FunctionType, Ownership, Param, Path, Span, Spanned, TokenKind, TypeExpr, TypeRef};
use tracing::debug;

use crate::recovery::{synchronize, PAREN_BOUNDARY, TYPE_EXPECTED};
use crate::stack::ensure_sufficient_stack;
use crate::Parser;

impl Parser<'_> {
    /// Dispatch on the leading token. Never consumes on failure: the
    /// caller's recovery decides what to skip.
    pub(crate) fn parse_type_expr(&mut self) -> TypeExpr {
        ensure_sufficient_stack(|| {
            let current = self.cursor.current();
            debug!(pos = current.offset, kind = %current.kind, "parse_type_expr");
            match current.kind {
                TokenKind::CaretBrace => TypeExpr::Protocol(self.parse_protocol()),
                TokenKind::PipeBrace => TypeExpr::Union(self.parse_union()),
                TokenKind::PercentBrace => TypeExpr::Record(self.parse_record()),
                TokenKind::HashBrace => TypeExpr::Tuple(self.parse_tuple()),
                TokenKind::KwAsync | TokenKind::LeftParen => {
                    TypeExpr::Function(self.parse_function())
                }
                TokenKind::KwOwn | TokenKind::KwBorrow | TokenKind::Identifier => {
                    TypeExpr::Alias(self.parse_type_ref())
                }
                _ => {
                    self.cursor.unexpected(&TYPE_EXPECTED);
                    TypeExpr::missing(&current)
                }
            }
        })
    }

    /// `["own" | "borrow"] path [generic_args] ["?"]`
    fn parse_type_ref(&mut self) -> TypeRef {
        let start = self.cursor.current().offset;
        let ownership = if self.cursor.eat(TokenKind::KwOwn).is_some() {
            Ownership::Own
        } else if self.cursor.eat(TokenKind::KwBorrow).is_some() {
            Ownership::Borrow
        } else {
            Ownership::Unspecified
        };

        let path = if self.cursor.check(TokenKind::Identifier) {
            self.parse_path()
        } else {
            self.cursor.unexpected(&[TokenKind::Identifier]);
            Path::missing(&self.cursor.current())
        };
        let args = if self.cursor.check(TokenKind::LeftBracket) {
            Some(self.parse_generic_args())
        } else {
            None
        };
        let optional = self.cursor.eat(TokenKind::Question).is_some();

        TypeRef {
            ownership,
            span: Span::new(start, self.cursor.prev_end().max(path.span.end)),
            path,
            args,
            optional,
        }
    }

    /// `["async"] "(" [param {"," param} [","]] ")" "->" type_expr`
    pub(crate) fn parse_function(&mut self) -> FunctionType {
        let start = self.cursor.current().offset;
        let is_async = self.cursor.eat(TokenKind::KwAsync).is_some();

        let mut params = Vec::new();
        if self.cursor.expect(TokenKind::LeftParen).is_some() {
            while !self.cursor.check(TokenKind::RightParen) && !self.cursor.is_at_end() {
                params.push(self.parse_param());
                if self.cursor.eat(TokenKind::Comma).is_none() {
                    break;
                }
            }
            if self.cursor.eat(TokenKind::RightParen).is_none() {
                self.cursor
                    .unexpected(&[TokenKind::Comma, TokenKind::RightParen]);
                synchronize(&mut self.cursor, PAREN_BOUNDARY);
                self.cursor.eat(TokenKind::RightParen);
            }
        }

        let ret = if self.cursor.eat(TokenKind::Arrow).is_some() {
            self.parse_type_expr()
        } else {
            self.cursor.missing(TokenKind::Arrow);
            TypeExpr::missing(&self.cursor.current())
        };

        FunctionType {
            is_async,
            params,
            span: Span::new(start, self.cursor.prev_end().max(ret.span().end)),
            ret: Box::new(ret),
        }
    }

    /// `[IDENT ":"] type_expr`
    fn parse_param(&mut self) -> Param {
        let start = self.cursor.current().offset;
        let name = if self.cursor.check(TokenKind::Identifier)
            && self.cursor.peek_kind() == TokenKind::Colon
        {
            let name = self.cursor.advance();
            self.cursor.advance();
            Some(name)
        } else {
            None
        };
        let ty = self.parse_type_expr();
        Param {
            name,
            span: Span::new(start, self.cursor.prev_end().max(ty.span().end)),
            ty,
        }
    }
}
