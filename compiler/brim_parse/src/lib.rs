//! Recursive descent parser for Brim.
//!
//! `parse_module` drives a [`SignificantTokens`](brim_lexer::SignificantTokens)
//! stage over a raw lexer and returns a [`Module`]. Parsing never fails:
//! malformed input becomes diagnostics and placeholder nodes.

mod cursor;
mod grammar;
mod recovery;
mod stack;

use brim_diagnostic::{Diagnostic, DiagnosticSink};
use brim_ir::{Declaration, ModuleHeader, Token};
use brim_lexer::{SourceText, TriviaPolicy};
use tracing::debug;

pub use cursor::Cursor;
pub use recovery::{synchronize, TokenSet};

/// Options for [`parse_module_with`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParseOptions {
    /// Sink cap shared by lexer and parser; `0` means unlimited.
    pub diagnostic_limit: usize,
    /// Whether skipped trivia is kept in [`Module::trivia`].
    pub trivia: TriviaPolicy,
}

impl Default for ParseOptions {
    fn default() -> Self {
        ParseOptions {
            diagnostic_limit: DiagnosticSink::DEFAULT_LIMIT,
            trivia: TriviaPolicy::Discard,
        }
    }
}

impl ParseOptions {
    pub fn sink(&self) -> DiagnosticSink {
        if self.diagnostic_limit == 0 {
            DiagnosticSink::unlimited()
        } else {
            DiagnosticSink::with_limit(self.diagnostic_limit)
        }
    }
}

/// A parsed source file.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Module {
    pub header: ModuleHeader,
    /// Declarations in source order, placeholders included.
    pub members: Vec<Declaration>,
    /// Lexer and parser diagnostics, sorted by offset.
    pub diagnostics: Vec<Diagnostic>,
    /// Skipped trivia when parsed with [`TriviaPolicy::Collect`].
    pub trivia: Vec<Token>,
}

impl Module {
    /// Any Error-severity diagnostic.
    pub fn has_errors(&self) -> bool {
        self.diagnostics.iter().any(Diagnostic::is_error)
    }

    /// No diagnostics at all.
    pub fn is_clean(&self) -> bool {
        self.diagnostics.is_empty()
    }

    /// First declaration whose name reads `name` in `source`.
    pub fn declaration<'m>(&'m self, source: &SourceText, name: &str) -> Option<&'m Declaration> {
        self.members
            .iter()
            .find(|decl| source.text(&decl.name) == name)
    }
}

/// Parser state.
pub struct Parser<'src> {
    cursor: Cursor<'src>,
}

impl<'src> Parser<'src> {
    pub fn new(source: &'src SourceText, options: &ParseOptions) -> Self {
        Parser {
            cursor: Cursor::new(source, options),
        }
    }

    /// Parse the whole buffer.
    pub fn parse(mut self) -> Module {
        let (header, members) = self.parse_module_body();
        let (diagnostics, trivia) = self.cursor.finish();
        debug!(
            members = members.len(),
            diagnostics = diagnostics.len(),
            "parsed module"
        );
        Module {
            header,
            members,
            diagnostics,
            trivia,
        }
    }
}

/// Parse a module with default options.
pub fn parse_module(source: &SourceText) -> Module {
    parse_module_with(source, &ParseOptions::default())
}

pub fn parse_module_with(source: &SourceText, options: &ParseOptions) -> Module {
    Parser::new(source, options).parse()
}

#[cfg(test)]
mod tests;
