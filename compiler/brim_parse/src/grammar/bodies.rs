//! Brace-delimited bodies: protocol, union, record and tuple.
//!
//! All four share one member loop: separators (`,` or terminator) may
//! repeat freely, a malformed member skips to the next separator or the
//! closing `}`, and `Eob` before `}` reports the brace missing.

use brim_ir::{
    Field, Method, ProtocolType, RecordType, Span, Spanned, TokenKind, TupleType, UnionType,
    Variant,
};
use tracing::debug;

use crate::recovery::{
    synchronize, LITERAL, MEMBER_BOUNDARY, PAYLOAD_BOUNDARY, SEPARATOR, TYPE_START,
};
use crate::Parser;

impl Parser<'_> {
    /// `"^{" { method sep } "}"`
    pub(crate) fn parse_protocol(&mut self) -> ProtocolType {
        let (methods, span) = self.parse_braced(Self::parse_method);
        ProtocolType { methods, span }
    }

    /// `"|{" { variant sep } "}"`
    pub(crate) fn parse_union(&mut self) -> UnionType {
        let (variants, span) = self.parse_braced(Self::parse_variant);
        UnionType { variants, span }
    }

    /// `"%{" { field sep } "}"`
    pub(crate) fn parse_record(&mut self) -> RecordType {
        let (fields, span) = self.parse_braced(Self::parse_field);
        RecordType { fields, span }
    }

    /// `"#{" { type_expr sep } "}"`
    pub(crate) fn parse_tuple(&mut self) -> TupleType {
        let (elements, span) = self.parse_braced(|p| Some(p.parse_type_expr()));
        TupleType { elements, span }
    }

    /// Shared member loop. The opening sigil is the current token.
    fn parse_braced<T>(
        &mut self,
        mut member: impl FnMut(&mut Self) -> Option<T>,
    ) -> (Vec<T>, Span) {
        let open = self.cursor.advance();
        let mut items = Vec::new();
        loop {
            self.cursor.skip_set(SEPARATOR);
            if self.cursor.eat(TokenKind::RightBrace).is_some() {
                break;
            }
            if self.cursor.is_at_end() {
                self.cursor.missing(TokenKind::RightBrace);
                break;
            }

            match member(self) {
                Some(item) => items.push(item),
                None => self.recover_member(),
            }
            if !self.cursor.check_set(MEMBER_BOUNDARY) && !self.cursor.is_at_end() {
                self.cursor.unexpected(&[
                    TokenKind::Comma,
                    TokenKind::Terminator,
                    TokenKind::RightBrace,
                ]);
                self.recover_member();
            }
        }
        (items, Span::new(open.offset, self.cursor.prev_end()))
    }

    fn recover_member(&mut self) {
        let skipped = synchronize(&mut self.cursor, MEMBER_BOUNDARY);
        debug!(skipped, "recovered brace member");
    }

    /// `IDENT ":" function`
    fn parse_method(&mut self) -> Option<Method> {
        let Some(name) = self.cursor.eat(TokenKind::Identifier) else {
            self.cursor
                .unexpected(&[TokenKind::Identifier, TokenKind::RightBrace]);
            return None;
        };
        if self.cursor.eat(TokenKind::Colon).is_none() {
            if !(self.cursor.check(TokenKind::LeftParen) || self.cursor.check(TokenKind::KwAsync)) {
                self.cursor.unexpected(&[TokenKind::Colon]);
                return None;
            }
            self.cursor.missing(TokenKind::Colon);
        }
        if !(self.cursor.check(TokenKind::LeftParen) || self.cursor.check(TokenKind::KwAsync)) {
            self.cursor
                .unexpected(&[TokenKind::LeftParen, TokenKind::KwAsync]);
            return None;
        }
        let signature = self.parse_function();
        Some(Method {
            span: name.span().merge(signature.span),
            name,
            signature,
        })
    }

    /// `IDENT ["(" type_expr ")"] ["=" INTEGER]`
    fn parse_variant(&mut self) -> Option<Variant> {
        let Some(tag) = self.cursor.eat(TokenKind::Identifier) else {
            self.cursor
                .unexpected(&[TokenKind::Identifier, TokenKind::RightBrace]);
            return None;
        };
        let payload = if self.cursor.eat(TokenKind::LeftParen).is_some() {
            let ty = self.parse_type_expr();
            if self.cursor.eat(TokenKind::RightParen).is_none() {
                self.cursor.unexpected(&[TokenKind::RightParen]);
                synchronize(&mut self.cursor, PAYLOAD_BOUNDARY);
                self.cursor.eat(TokenKind::RightParen);
            }
            Some(Box::new(ty))
        } else {
            None
        };
        let discriminant = if self.cursor.eat(TokenKind::Equal).is_some() {
            match self.cursor.eat(TokenKind::IntegerLiteral) {
                Some(value) => Some(value),
                None => {
                    self.cursor.unexpected(&[TokenKind::IntegerLiteral]);
                    return None;
                }
            }
        } else {
            None
        };
        Some(Variant {
            span: Span::new(tag.offset, self.cursor.prev_end()),
            tag,
            payload,
            discriminant,
        })
    }

    /// `IDENT ":" type_expr ["=" literal]`
    fn parse_field(&mut self) -> Option<Field> {
        let Some(name) = self.cursor.eat(TokenKind::Identifier) else {
            self.cursor
                .unexpected(&[TokenKind::Identifier, TokenKind::RightBrace]);
            return None;
        };
        if self.cursor.eat(TokenKind::Colon).is_none() {
            if !self.cursor.check_set(TYPE_START) {
                self.cursor.unexpected(&[TokenKind::Colon]);
                return None;
            }
            self.cursor.missing(TokenKind::Colon);
        }
        let ty = self.parse_type_expr();
        let default = if self.cursor.eat(TokenKind::Equal).is_some() {
            if self.cursor.check_set(LITERAL) {
                Some(self.cursor.advance())
            } else {
                self.cursor.unexpected(&[
                    TokenKind::IntegerLiteral,
                    TokenKind::DecimalLiteral,
                    TokenKind::StringLiteral,
                    TokenKind::RuneLiteral,
                ]);
                return None;
            }
        } else {
            None
        };
        Some(Field {
            span: Span::new(name.offset, self.cursor.prev_end().max(ty.span().end)),
            name,
            ty,
            default,
        })
    }
}
