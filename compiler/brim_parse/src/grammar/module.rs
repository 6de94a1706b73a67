//! Module header, paths and declarations.

use brim_diagnostic::{Diagnostic, DiagnosticCode, Phase};
use brim_ir::{Declaration, ModuleHeader, Path, Span, Spanned, TokenKind, TypeExpr};
use tracing::debug;

use crate::recovery::{skip_group, synchronize_declaration, BODY_SIGIL, TYPE_START};
use crate::Parser;

impl Parser<'_> {
    /// `terminators header terminators { declaration } EOB`
    pub(crate) fn parse_module_body(&mut self) -> (ModuleHeader, Vec<Declaration>) {
        self.cursor.skip_terminators();
        let header = self.parse_header();
        self.cursor.skip_terminators();

        let mut members = Vec::new();
        while !self.cursor.is_at_end() {
            if self.cursor.check(TokenKind::Identifier) {
                members.push(self.parse_declaration());
            } else if self.cursor.check_set(BODY_SIGIL) {
                // A body with no name: skip it whole.
                self.cursor.unexpected(&[TokenKind::Identifier]);
                skip_group(&mut self.cursor);
            } else {
                self.cursor.unexpected(&[TokenKind::Identifier]);
                self.recover_declaration();
            }
            self.cursor.skip_terminators();
        }
        (header, members)
    }

    /// `[[ path ]]`, or a placeholder when the module has none.
    fn parse_header(&mut self) -> ModuleHeader {
        let start = self.cursor.current();
        if !(start.is(TokenKind::LeftBracket) && self.cursor.peek_kind() == TokenKind::LeftBracket)
        {
            debug!(pos = start.offset, kind = %start.kind, "missing module header");
            self.cursor.report(Diagnostic::at_token(
                DiagnosticCode::MissingModuleHeader,
                Phase::Parsing,
                &start,
            ));
            return ModuleHeader {
                path: Path::missing(&start),
                span: Span::point(start.offset),
                is_missing: true,
            };
        }

        self.cursor.advance();
        self.cursor.advance();
        let path = if self.cursor.check(TokenKind::Identifier) {
            self.parse_path()
        } else {
            self.cursor.unexpected(&[TokenKind::Identifier]);
            Path::missing(&self.cursor.current())
        };
        for _ in 0..2 {
            if self.cursor.expect(TokenKind::RightBracket).is_none() {
                break;
            }
        }
        ModuleHeader {
            path,
            span: Span::new(start.offset, self.cursor.prev_end()),
            is_missing: false,
        }
    }

    /// `IDENT { ("." | "::") IDENT }`; the caller has checked for `IDENT`.
    pub(crate) fn parse_path(&mut self) -> Path {
        let mut segments = vec![self.cursor.advance()];
        while self.cursor.check(TokenKind::Dot) || self.cursor.check(TokenKind::ColonColon) {
            self.cursor.advance();
            match self.cursor.eat(TokenKind::Identifier) {
                Some(segment) => segments.push(segment),
                None => {
                    self.cursor.unexpected(&[TokenKind::Identifier]);
                    break;
                }
            }
        }
        Path::new(segments)
    }

    /// `IDENT [generic_params] ":=" type_expr (TERMINATOR | EOB)`
    fn parse_declaration(&mut self) -> Declaration {
        let name = self.cursor.advance();
        let generics = if self.cursor.check(TokenKind::LeftBracket) {
            Some(self.parse_generic_params())
        } else {
            None
        };

        let ty = if self.cursor.eat(TokenKind::ColonEqual).is_some() {
            self.parse_type_expr()
        } else if generics.is_some() && self.cursor.check_set(BODY_SIGIL) {
            self.cursor.report(Diagnostic::at_token(
                DiagnosticCode::UnexpectedGenericBody,
                Phase::Parsing,
                &self.cursor.current(),
            ));
            self.parse_type_expr()
        } else if self.cursor.check_set(TYPE_START) {
            self.cursor.missing(TokenKind::ColonEqual);
            self.parse_type_expr()
        } else {
            let at = self.cursor.current();
            self.cursor.unexpected(&[TokenKind::ColonEqual, TokenKind::LeftBracket]);
            self.recover_declaration();
            let decl = Declaration {
                name,
                generics,
                ty: TypeExpr::missing(&at),
                span: name.span().merge(Span::point(at.offset)),
            };
            debug!(pos = name.offset, "placeholder declaration");
            return decl;
        };

        let decl = Declaration {
            span: Span::new(name.offset, self.cursor.prev_end().max(ty.span().end)),
            name,
            generics,
            ty,
        };
        debug!(pos = name.offset, kind = decl.kind().name(), "declaration");
        self.finish_declaration();
        decl
    }

    /// Require a terminator (or `Eob`) after a declaration.
    fn finish_declaration(&mut self) {
        match self.cursor.current_kind() {
            TokenKind::Terminator => {
                self.cursor.advance();
            }
            TokenKind::Eob => {}
            TokenKind::Identifier
                if matches!(
                    self.cursor.peek_kind(),
                    TokenKind::ColonEqual | TokenKind::LeftBracket
                ) =>
            {
                self.cursor.missing(TokenKind::Terminator);
            }
            _ => {
                self.cursor.unexpected(&[TokenKind::Terminator]);
                self.recover_declaration();
            }
        }
    }

    /// Skip to the next terminator (consumed), declaration start, body
    /// sigil or `Eob`.
    fn recover_declaration(&mut self) {
        synchronize_declaration(&mut self.cursor);
        self.cursor.eat(TokenKind::Terminator);
    }
}
