//! Brim lexer: source text to token stream.
//!
//! - [`SourceText`]: immutable, sentinel-padded input
//! - [`CHAR_TABLE`]: maximal-munch glyph table
//! - [`RawLexer`]: every token, trivia included
//! - [`SignificantTokens`]: trivia filter over any [`TokenSource`]
//!
//! Both stages are pull-driven through [`TokenSource::try_read`] and write
//! diagnostics into a caller-owned [`DiagnosticSink`].

mod cursor;
mod raw;
mod significant;
mod source;
mod table;

use brim_diagnostic::{Diagnostic, DiagnosticSink};
use brim_ir::{Token, TokenKind};
use tracing::debug;

pub use cursor::Cursor;
pub use raw::RawLexer;
pub use significant::{SignificantTokens, TriviaPolicy};
pub use source::{SourceError, SourceText};
pub use table::{CharTable, GlyphMatch, Sequence, CHAR_TABLE};

/// Outcome of one [`TokenSource::try_read`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Next {
    /// A token, including the first end-of-buffer token.
    Token(Token),
    /// Every read after end-of-buffer; still carries an `Eob` token.
    Exhausted(Token),
}

impl Next {
    #[inline]
    pub fn has_token(&self) -> bool {
        matches!(self, Next::Token(_))
    }

    #[inline]
    pub fn token(&self) -> Token {
        match *self {
            Next::Token(token) | Next::Exhausted(token) => token,
        }
    }
}

/// Anything that yields tokens on demand.
///
/// Contract: yields `Next::Token` until it has produced one `Eob` token,
/// then `Next::Exhausted` with an `Eob` token on every later call.
pub trait TokenSource {
    fn try_read(&mut self, sink: &mut DiagnosticSink) -> Next;
}

/// Options for the standalone lexing entry points.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LexOptions {
    /// Sink cap; `0` means unlimited.
    pub diagnostic_limit: usize,
}

impl Default for LexOptions {
    fn default() -> Self {
        LexOptions {
            diagnostic_limit: DiagnosticSink::DEFAULT_LIMIT,
        }
    }
}

impl LexOptions {
    pub fn sink(&self) -> DiagnosticSink {
        if self.diagnostic_limit == 0 {
            DiagnosticSink::unlimited()
        } else {
            DiagnosticSink::with_limit(self.diagnostic_limit)
        }
    }
}

/// Token stream plus the diagnostics raised while producing it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LexOutput {
    /// Ends with exactly one `Eob` token.
    pub tokens: Vec<Token>,
    /// Sorted by offset.
    pub diagnostics: Vec<Diagnostic>,
}

impl LexOutput {
    pub fn kinds(&self) -> Vec<TokenKind> {
        self.tokens.iter().map(|t| t.kind).collect()
    }

    pub fn has_errors(&self) -> bool {
        self.diagnostics.iter().any(Diagnostic::is_error)
    }
}

/// Lex every token, trivia included.
pub fn lex_raw(source: &SourceText) -> LexOutput {
    lex_raw_with(source, &LexOptions::default())
}

pub fn lex_raw_with(source: &SourceText, options: &LexOptions) -> LexOutput {
    collect(RawLexer::new(source), options.sink())
}

/// Lex only significant (non-trivia) tokens.
pub fn lex_significant(source: &SourceText) -> LexOutput {
    lex_significant_with(source, &LexOptions::default())
}

pub fn lex_significant_with(source: &SourceText, options: &LexOptions) -> LexOutput {
    collect(SignificantTokens::new(RawLexer::new(source)), options.sink())
}

/// Drain a source up to and including its `Eob` token.
pub fn collect<S: TokenSource>(mut source: S, mut sink: DiagnosticSink) -> LexOutput {
    let mut tokens = Vec::new();
    while let Next::Token(token) = source.try_read(&mut sink) {
        tokens.push(token);
        if token.kind == TokenKind::Eob {
            break;
        }
    }
    debug!(
        tokens = tokens.len(),
        diagnostics = sink.len(),
        "lexed source"
    );
    LexOutput {
        tokens,
        diagnostics: sink.into_sorted(),
    }
}
