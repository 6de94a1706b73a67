//! Trivia filter over any [`TokenSource`].

use brim_diagnostic::DiagnosticSink;
use brim_ir::Token;

use crate::{Next, TokenSource};

/// What the significant-token stage does with trivia it skips.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum TriviaPolicy {
    /// Drop trivia.
    #[default]
    Discard,
    /// Keep every trivia token, in source order, for later retrieval.
    Collect,
}

/// Forwards every non-trivia token of `S` unchanged.
///
/// Generic over the source so the filter monomorphizes with the raw lexer.
/// End-of-buffer behavior (one `Token(Eob)`, then `Exhausted(Eob)`
/// forever) passes through untouched.
pub struct SignificantTokens<S> {
    inner: S,
    trivia: Option<Vec<Token>>,
}

impl<S: TokenSource> SignificantTokens<S> {
    pub fn new(inner: S) -> Self {
        Self::with_policy(inner, TriviaPolicy::Discard)
    }

    pub fn with_policy(inner: S, policy: TriviaPolicy) -> Self {
        SignificantTokens {
            inner,
            trivia: match policy {
                TriviaPolicy::Discard => None,
                TriviaPolicy::Collect => Some(Vec::new()),
            },
        }
    }

    pub fn policy(&self) -> TriviaPolicy {
        if self.trivia.is_some() {
            TriviaPolicy::Collect
        } else {
            TriviaPolicy::Discard
        }
    }

    /// Trivia skipped so far (always empty under `Discard`).
    pub fn take_trivia(&mut self) -> Vec<Token> {
        self.trivia.as_mut().map(std::mem::take).unwrap_or_default()
    }

    pub fn into_inner(self) -> S {
        self.inner
    }
}

impl<S: TokenSource> TokenSource for SignificantTokens<S> {
    fn try_read(&mut self, sink: &mut DiagnosticSink) -> Next {
        loop {
            match self.inner.try_read(sink) {
                Next::Token(token) if token.kind.is_trivia() => {
                    if let Some(trivia) = &mut self.trivia {
                        trivia.push(token);
                    }
                }
                next => return next,
            }
        }
    }
}
