//! Token cursor for navigating the significant token stream.
//!
//! Pulls tokens lazily from the lexer with one token of lookahead and owns
//! the sink that both the lexer and the parser report into.

use brim_diagnostic::{Diagnostic, DiagnosticCode, DiagnosticSink, ExpectedKinds, Phase};
use brim_ir::{Token, TokenKind};
use brim_lexer::{RawLexer, SignificantTokens, SourceText, TokenSource};
use tracing::trace;

use crate::recovery::TokenSet;
use crate::ParseOptions;

pub struct Cursor<'src> {
    tokens: SignificantTokens<RawLexer<'src>>,
    sink: DiagnosticSink,
    current: Token,
    peeked: Option<Token>,
    /// End offset of the most recently consumed token.
    prev_end: u32,
    /// Offset of the last token complaint, for one-per-site suppression.
    last_error: Option<u32>,
}

impl<'src> Cursor<'src> {
    pub fn new(source: &'src SourceText, options: &ParseOptions) -> Self {
        let mut tokens = SignificantTokens::with_policy(RawLexer::new(source), options.trivia);
        let mut sink = options.sink();
        let current = tokens.try_read(&mut sink).token();
        Cursor {
            tokens,
            sink,
            current,
            peeked: None,
            prev_end: 0,
            last_error: None,
        }
    }

    #[inline]
    pub fn current(&self) -> Token {
        self.current
    }

    #[inline]
    pub fn current_kind(&self) -> TokenKind {
        self.current.kind
    }

    /// The token after the current one.
    pub fn peek(&mut self) -> Token {
        if let Some(token) = self.peeked {
            return token;
        }
        let token = self.tokens.try_read(&mut self.sink).token();
        self.peeked = Some(token);
        token
    }

    #[inline]
    pub fn peek_kind(&mut self) -> TokenKind {
        self.peek().kind
    }

    #[inline]
    pub fn check(&self, kind: TokenKind) -> bool {
        self.current.kind == kind
    }

    #[inline]
    pub fn check_set(&self, set: TokenSet) -> bool {
        set.contains(self.current.kind)
    }

    #[inline]
    pub fn is_at_end(&self) -> bool {
        self.current.kind == TokenKind::Eob
    }

    #[inline]
    pub fn prev_end(&self) -> u32 {
        self.prev_end
    }

    /// Consume the current token and return it. At `Eob` this is a no-op
    /// that keeps returning the `Eob` token.
    pub fn advance(&mut self) -> Token {
        let token = self.current;
        if token.kind == TokenKind::Eob {
            return token;
        }
        trace!(pos = token.offset, kind = %token.kind, "advance");
        self.prev_end = token.end();
        self.current = match self.peeked.take() {
            Some(next) => next,
            None => self.tokens.try_read(&mut self.sink).token(),
        };
        token
    }

    /// Consume the current token if it has the given kind.
    pub fn eat(&mut self, kind: TokenKind) -> Option<Token> {
        if self.check(kind) {
            Some(self.advance())
        } else {
            None
        }
    }

    pub fn skip_terminators(&mut self) {
        while self.check(TokenKind::Terminator) {
            self.advance();
        }
    }

    pub fn skip_set(&mut self, set: TokenSet) {
        while self.check_set(set) {
            self.advance();
        }
    }

    /// Report a parse diagnostic.
    ///
    /// Token complaints (`UnexpectedToken`, `MissingToken`) are kept to one
    /// per offset. Structural diagnostics such as a missing header always
    /// go through and do not count toward that limit.
    pub fn report(&mut self, diagnostic: Diagnostic) {
        if !is_token_complaint(diagnostic.code) {
            self.sink.report(diagnostic);
            return;
        }
        if self.last_error == Some(diagnostic.offset) {
            trace!(pos = diagnostic.offset, code = %diagnostic.code, "suppressed");
            return;
        }
        self.last_error = Some(diagnostic.offset);
        self.sink.report(diagnostic);
    }

    /// `UnexpectedToken` at the current token. Silent on `Error` tokens,
    /// which the lexer has already diagnosed.
    pub fn unexpected(&mut self, expected: &[TokenKind]) {
        if self.check(TokenKind::Error) {
            return;
        }
        let diagnostic =
            Diagnostic::at_token(DiagnosticCode::UnexpectedToken, Phase::Parsing, &self.current)
                .with_expected(ExpectedKinds::from_kinds(expected.iter().copied()));
        self.report(diagnostic);
    }

    /// `MissingToken` for `kind`, anchored at the current token.
    pub fn missing(&mut self, kind: TokenKind) {
        let diagnostic =
            Diagnostic::at_token(DiagnosticCode::MissingToken, Phase::Parsing, &self.current)
                .with_expected(ExpectedKinds::one(kind));
        self.report(diagnostic);
    }

    /// Consume `kind` or report it missing without skipping anything.
    pub fn expect(&mut self, kind: TokenKind) -> Option<Token> {
        let token = self.eat(kind);
        if token.is_none() {
            self.missing(kind);
        }
        token
    }

    /// Hand back diagnostics (sorted by offset) and any collected trivia.
    pub fn finish(mut self) -> (Vec<Diagnostic>, Vec<Token>) {
        let trivia = self.tokens.take_trivia();
        (self.sink.into_sorted(), trivia)
    }
}

#[inline]
fn is_token_complaint(code: DiagnosticCode) -> bool {
    matches!(
        code,
        DiagnosticCode::UnexpectedToken | DiagnosticCode::MissingToken
    )
}

#[cfg(test)]
mod tests;
