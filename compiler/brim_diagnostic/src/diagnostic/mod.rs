//! The diagnostic value record.

use std::fmt;

use brim_ir::{Span, Token, TokenKind};

use crate::DiagnosticCode;

/// Severity level for diagnostics.
///
/// Every built-in code defaults to `Error`. `Warning` exists for callers
/// that downgrade a code with [`Diagnostic::with_severity`]; the sink keeps
/// both and counts only errors, so filtering is the consumer's call.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Severity {
    Error,
    Warning,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
        }
    }
}

/// Pipeline stage that raised a diagnostic.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Phase {
    Lexing,
    Parsing,
}

impl Phase {
    pub const fn as_str(self) -> &'static str {
        match self {
            Phase::Lexing => "lex",
            Phase::Parsing => "parse",
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Inline set of up to four distinct token kinds.
///
/// Records what would have been accepted at an unexpected-token site.
/// Inserting a fifth distinct kind is a no-op; empty slots are `None`.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
pub struct ExpectedKinds {
    slots: [Option<TokenKind>; ExpectedKinds::CAPACITY],
    len: u8,
}

impl ExpectedKinds {
    pub const CAPACITY: usize = 4;

    pub const EMPTY: ExpectedKinds = ExpectedKinds {
        slots: [None; Self::CAPACITY],
        len: 0,
    };

    /// Set holding a single kind.
    pub const fn one(kind: TokenKind) -> Self {
        ExpectedKinds {
            slots: [Some(kind), None, None, None],
            len: 1,
        }
    }

    /// Build from a list, keeping the first four distinct kinds.
    pub fn from_kinds(kinds: impl IntoIterator<Item = TokenKind>) -> Self {
        let mut set = Self::EMPTY;
        for kind in kinds {
            if set.is_full() {
                break;
            }
            set.insert(kind);
        }
        set
    }

    /// Add `kind` unless it is already present or the set is full.
    ///
    /// Returns whether the kind was added.
    pub fn insert(&mut self, kind: TokenKind) -> bool {
        if self.contains(kind) || self.is_full() {
            return false;
        }
        self.slots[self.len as usize] = Some(kind);
        self.len += 1;
        true
    }

    pub fn contains(&self, kind: TokenKind) -> bool {
        self.iter().any(|k| k == kind)
    }

    #[inline]
    pub const fn len(&self) -> usize {
        self.len as usize
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[inline]
    pub const fn is_full(&self) -> bool {
        self.len as usize == Self::CAPACITY
    }

    pub fn first(&self) -> Option<TokenKind> {
        self.slots[0]
    }

    pub fn iter(&self) -> impl Iterator<Item = TokenKind> + '_ {
        self.slots.iter().map_while(|slot| *slot)
    }
}

/// A single lexical, syntactic or systemic finding.
///
/// Fixed-size and `Copy`: recording one never allocates. The message is
/// derived on demand from `(code, actual, expected)`.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct Diagnostic {
    pub code: DiagnosticCode,
    pub severity: Severity,
    pub phase: Phase,
    pub offset: u32,
    pub length: u32,
    pub line: u32,
    pub column: u32,
    /// Kind of the token found at the site, where one exists.
    pub actual: Option<TokenKind>,
    pub expected: ExpectedKinds,
}

impl Diagnostic {
    /// Diagnostic at an explicit position with the code's default severity.
    pub const fn at(
        code: DiagnosticCode,
        phase: Phase,
        offset: u32,
        length: u32,
        line: u32,
        column: u32,
    ) -> Self {
        Diagnostic {
            code,
            severity: code.default_severity(),
            phase,
            offset,
            length,
            line,
            column,
            actual: None,
            expected: ExpectedKinds::EMPTY,
        }
    }

    /// Diagnostic anchored at a token, recording its kind as `actual`.
    pub const fn at_token(code: DiagnosticCode, phase: Phase, token: &Token) -> Self {
        let mut diag = Self::at(
            code,
            phase,
            token.offset,
            token.length,
            token.line,
            token.column,
        );
        diag.actual = Some(token.kind);
        diag
    }

    #[must_use]
    pub const fn with_expected(mut self, expected: ExpectedKinds) -> Self {
        self.expected = expected;
        self
    }

    #[must_use]
    pub const fn with_severity(mut self, severity: Severity) -> Self {
        self.severity = severity;
        self
    }

    #[inline]
    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }

    #[inline]
    pub const fn span(&self) -> Span {
        Span::new(self.offset, self.offset + self.length)
    }

    /// Human-readable message built only from the record's fields.
    pub fn message(&self) -> String {
        match self.code {
            DiagnosticCode::UnexpectedToken => {
                let mut msg = match self.actual {
                    Some(found) => format!("unexpected {found}"),
                    None => String::from("unexpected token"),
                };
                if !self.expected.is_empty() {
                    msg.push_str(", expected ");
                    msg.push_str(&join_kinds(&self.expected));
                }
                msg
            }
            DiagnosticCode::MissingToken => {
                let mut msg = match self.expected.first() {
                    Some(kind) => format!("missing {kind}"),
                    None => String::from("missing token"),
                };
                if let Some(found) = self.actual {
                    msg.push_str(" before ");
                    msg.push_str(found.name());
                }
                msg
            }
            code => code.title().to_owned(),
        }
    }
}

/// `a`, `a or b`, `a, b or c`.
fn join_kinds(kinds: &ExpectedKinds) -> String {
    let names: Vec<&str> = kinds.iter().map(TokenKind::name).collect();
    match names.split_last() {
        None => String::new(),
        Some((last, [])) => (*last).to_owned(),
        Some((last, rest)) => format!("{} or {last}", rest.join(", ")),
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}[{}]: {}", self.severity, self.phase, self.message())
    }
}
