//! Diagnostic codes.

use std::fmt;

use crate::Severity;

/// Every diagnostic the front end can raise.
///
/// Stable identifiers use the form E#### where the first digit is the
/// phase:
/// - E0xxx: lexical
/// - E1xxx: syntactic
/// - E9xxx: systemic (sink-level)
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum DiagnosticCode {
    // Lexical (E0xxx)
    InvalidCharacter,
    UnsupportedWhitespace,
    UnterminatedString,
    UnterminatedRune,
    MultipleRunesInLiteral,

    // Syntactic (E1xxx)
    UnexpectedToken,
    MissingToken,
    MissingModuleHeader,
    EmptyGenericParamList,
    EmptyGenericArgList,
    UnexpectedGenericBody,

    // Systemic (E9xxx)
    TooManyErrors,
}

impl DiagnosticCode {
    pub const ALL: [DiagnosticCode; 12] = [
        Self::InvalidCharacter,
        Self::UnsupportedWhitespace,
        Self::UnterminatedString,
        Self::UnterminatedRune,
        Self::MultipleRunesInLiteral,
        Self::UnexpectedToken,
        Self::MissingToken,
        Self::MissingModuleHeader,
        Self::EmptyGenericParamList,
        Self::EmptyGenericArgList,
        Self::UnexpectedGenericBody,
        Self::TooManyErrors,
    ];

    /// Stable `E####` identifier.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::InvalidCharacter => "E0001",
            Self::UnsupportedWhitespace => "E0002",
            Self::UnterminatedString => "E0003",
            Self::UnterminatedRune => "E0004",
            Self::MultipleRunesInLiteral => "E0005",
            Self::UnexpectedToken => "E1001",
            Self::MissingToken => "E1002",
            Self::MissingModuleHeader => "E1003",
            Self::EmptyGenericParamList => "E1004",
            Self::EmptyGenericArgList => "E1005",
            Self::UnexpectedGenericBody => "E1006",
            Self::TooManyErrors => "E9001",
        }
    }

    /// Short description, independent of where the problem occurred.
    pub const fn title(self) -> &'static str {
        match self {
            Self::InvalidCharacter => "invalid character",
            Self::UnsupportedWhitespace => "unsupported whitespace character",
            Self::UnterminatedString => "unterminated string literal",
            Self::UnterminatedRune => "unterminated rune literal",
            Self::MultipleRunesInLiteral => "rune literal must contain exactly one character",
            Self::UnexpectedToken => "unexpected token",
            Self::MissingToken => "missing token",
            Self::MissingModuleHeader => "missing module header `[[ name ]]`",
            Self::EmptyGenericParamList => "generic parameter list cannot be empty",
            Self::EmptyGenericArgList => "generic argument list cannot be empty",
            Self::UnexpectedGenericBody => "generic declaration body must follow `:=`",
            Self::TooManyErrors => "too many errors, further diagnostics suppressed",
        }
    }

    pub const fn default_severity(self) -> Severity {
        Severity::Error
    }

    pub const fn is_lexical(self) -> bool {
        matches!(
            self,
            Self::InvalidCharacter
                | Self::UnsupportedWhitespace
                | Self::UnterminatedString
                | Self::UnterminatedRune
                | Self::MultipleRunesInLiteral
        )
    }

    pub const fn is_syntactic(self) -> bool {
        matches!(
            self,
            Self::UnexpectedToken
                | Self::MissingToken
                | Self::MissingModuleHeader
                | Self::EmptyGenericParamList
                | Self::EmptyGenericArgList
                | Self::UnexpectedGenericBody
        )
    }

    pub const fn is_systemic(self) -> bool {
        matches!(self, Self::TooManyErrors)
    }
}

impl fmt::Display for DiagnosticCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests;
