//! Bracketed generic lists.

use brim_diagnostic::{Diagnostic, DiagnosticCode, Phase};
use brim_ir::{GenericArgs, GenericParams, Span, Token, TokenKind};

use crate::recovery::{synchronize, BRACKET_BOUNDARY};
use crate::Parser;

impl Parser<'_> {
    /// `"[" IDENT { "," IDENT } [","] "]"`
    pub(crate) fn parse_generic_params(&mut self) -> GenericParams {
        let open = self.cursor.advance();
        let mut params = Vec::new();
        if self.empty_brackets(open, DiagnosticCode::EmptyGenericParamList) {
            return GenericParams {
                params,
                span: Span::new(open.offset, self.cursor.prev_end()),
            };
        }

        loop {
            match self.cursor.eat(TokenKind::Identifier) {
                Some(param) => params.push(param),
                None => {
                    self.cursor
                        .unexpected(&[TokenKind::Identifier, TokenKind::RightBracket]);
                    break;
                }
            }
            if self.cursor.eat(TokenKind::Comma).is_none() || self.cursor.check(TokenKind::RightBracket)
            {
                break;
            }
        }
        self.close_bracket();
        GenericParams {
            params,
            span: Span::new(open.offset, self.cursor.prev_end()),
        }
    }

    /// `"[" type_expr { "," type_expr } [","] "]"`
    pub(crate) fn parse_generic_args(&mut self) -> GenericArgs {
        let open = self.cursor.advance();
        let mut args = Vec::new();
        if self.empty_brackets(open, DiagnosticCode::EmptyGenericArgList) {
            return GenericArgs {
                args,
                span: Span::new(open.offset, self.cursor.prev_end()),
            };
        }

        loop {
            args.push(self.parse_type_expr());
            if self.cursor.eat(TokenKind::Comma).is_none() || self.cursor.check(TokenKind::RightBracket)
            {
                break;
            }
        }
        self.close_bracket();
        GenericArgs {
            args,
            span: Span::new(open.offset, self.cursor.prev_end()),
        }
    }

    /// `[]` right after `open`: consume `]` and report `code` over both.
    fn empty_brackets(&mut self, open: Token, code: DiagnosticCode) -> bool {
        let Some(close) = self.cursor.eat(TokenKind::RightBracket) else {
            return false;
        };
        self.cursor.report(Diagnostic::at(
            code,
            Phase::Parsing,
            open.offset,
            close.end() - open.offset,
            open.line,
            open.column,
        ));
        true
    }

    /// Consume `]`, skipping whatever malformed input precedes it.
    fn close_bracket(&mut self) {
        if self.cursor.eat(TokenKind::RightBracket).is_some() {
            return;
        }
        self.cursor
            .unexpected(&[TokenKind::Comma, TokenKind::RightBracket]);
        synchronize(&mut self.cursor, BRACKET_BOUNDARY);
        self.cursor.eat(TokenKind::RightBracket);
    }
}
