//! Capped, append-only diagnostic collection.

use crate::{Diagnostic, DiagnosticCode};

/// Append-only collector shared by the lexer and the parser.
///
/// Stores at most `limit` diagnostics. The first report past the cap
/// stores a single `TooManyErrors` record (anchored where the rejected
/// diagnostic would have gone) and saturates the sink; every report
/// after that is dropped.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DiagnosticSink {
    diagnostics: Vec<Diagnostic>,
    limit: usize,
    error_count: usize,
    saturated: bool,
}

impl Default for DiagnosticSink {
    fn default() -> Self {
        Self::new()
    }
}

impl DiagnosticSink {
    /// Cap used when callers don't pick one.
    pub const DEFAULT_LIMIT: usize = 100;

    pub fn new() -> Self {
        Self::with_limit(Self::DEFAULT_LIMIT)
    }

    pub fn with_limit(limit: usize) -> Self {
        DiagnosticSink {
            diagnostics: Vec::new(),
            limit,
            error_count: 0,
            saturated: false,
        }
    }

    /// Sink that never saturates in practice.
    pub fn unlimited() -> Self {
        Self::with_limit(usize::MAX)
    }

    /// Record a diagnostic.
    ///
    /// Returns `true` if it was stored, `false` if the cap dropped it.
    pub fn report(&mut self, diagnostic: Diagnostic) -> bool {
        if self.saturated {
            return false;
        }
        if self.diagnostics.len() >= self.limit {
            self.saturated = true;
            self.push(too_many_errors(&diagnostic));
            return false;
        }
        self.push(diagnostic);
        true
    }

    fn push(&mut self, diagnostic: Diagnostic) {
        if diagnostic.is_error() {
            self.error_count += 1;
        }
        self.diagnostics.push(diagnostic);
    }

    /// Whether the cap has been hit and `TooManyErrors` recorded.
    pub fn is_saturated(&self) -> bool {
        self.saturated
    }

    /// Number of stored diagnostics, including the `TooManyErrors` marker.
    pub fn len(&self) -> usize {
        self.diagnostics.len()
    }

    pub fn is_empty(&self) -> bool {
        self.diagnostics.is_empty()
    }

    pub fn error_count(&self) -> usize {
        self.error_count
    }

    pub fn has_errors(&self) -> bool {
        self.error_count > 0
    }

    /// Diagnostics in emission order.
    pub fn iter(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics.iter()
    }

    /// Consume the sink, returning diagnostics sorted by offset.
    pub fn into_sorted(self) -> Vec<Diagnostic> {
        let mut out = self.diagnostics;
        sort_by_offset(&mut out);
        out
    }
}

/// Stable sort by offset; ties keep emission order. The `TooManyErrors`
/// marker always sorts last, even when the rejected diagnostic sat before
/// ones already stored.
///
/// Skips the sort when already ordered, which is the common case since
/// the parser pulls tokens lazily.
fn sort_by_offset(diagnostics: &mut [Diagnostic]) {
    let key = |d: &Diagnostic| (d.code == DiagnosticCode::TooManyErrors, d.offset);
    let already_sorted = diagnostics.windows(2).all(|w| key(&w[0]) <= key(&w[1]));
    if !already_sorted {
        diagnostics.sort_by_key(key);
    }
}

/// Create the saturation marker for a sink that just rejected `rejected`.
#[cold]
fn too_many_errors(rejected: &Diagnostic) -> Diagnostic {
    Diagnostic::at(
        DiagnosticCode::TooManyErrors,
        rejected.phase,
        rejected.offset,
        0,
        rejected.line,
        rejected.column,
    )
}
