//! Error recovery for the parser.
//!
//! Token sets use a `u128` bitset indexed by the kind's discriminant, so
//! membership is one AND. Every discriminant is below 128.

use brim_ir::TokenKind;
use tracing::debug;

use crate::cursor::Cursor;

/// A set of token kinds with O(1) membership testing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct TokenSet(u128);

impl TokenSet {
    #[inline]
    pub const fn new() -> Self {
        Self(0)
    }

    /// Add a token kind to this set (builder pattern for const contexts).
    #[inline]
    #[must_use]
    pub const fn with(self, kind: TokenKind) -> Self {
        Self(self.0 | (1u128 << kind.index()))
    }

    #[inline]
    #[must_use]
    pub const fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }

    #[inline]
    pub const fn contains(&self, kind: TokenKind) -> bool {
        (self.0 & (1u128 << kind.index())) != 0
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.0 == 0
    }

    #[inline]
    pub const fn count(&self) -> u32 {
        self.0.count_ones()
    }
}

/// Tokens that can begin a type expression.
pub const TYPE_START: TokenSet = TokenSet::new()
    .with(TokenKind::Identifier)
    .with(TokenKind::KwOwn)
    .with(TokenKind::KwBorrow)
    .with(TokenKind::KwAsync)
    .with(TokenKind::LeftParen)
    .with(TokenKind::CaretBrace)
    .with(TokenKind::PipeBrace)
    .with(TokenKind::PercentBrace)
    .with(TokenKind::HashBrace);

/// Reported when a type is expected; capped to four in the diagnostic.
pub const TYPE_EXPECTED: [TokenKind; 4] = [
    TokenKind::Identifier,
    TokenKind::LeftParen,
    TokenKind::CaretBrace,
    TokenKind::PipeBrace,
];

/// Sigils that open a brace-delimited type body.
pub const BODY_SIGIL: TokenSet = TokenSet::new()
    .with(TokenKind::CaretBrace)
    .with(TokenKind::PipeBrace)
    .with(TokenKind::PercentBrace)
    .with(TokenKind::HashBrace);

/// Member separators inside brace bodies.
pub const SEPARATOR: TokenSet = TokenSet::new()
    .with(TokenKind::Comma)
    .with(TokenKind::Terminator);

/// Where a malformed brace-body member stops being skipped.
pub const MEMBER_BOUNDARY: TokenSet = SEPARATOR.with(TokenKind::RightBrace);

/// Where a malformed bracket list stops being skipped.
pub const BRACKET_BOUNDARY: TokenSet = TokenSet::new()
    .with(TokenKind::RightBracket)
    .with(TokenKind::Terminator)
    .with(TokenKind::ColonEqual);

/// Where a malformed parameter list stops being skipped.
pub const PAREN_BOUNDARY: TokenSet = TokenSet::new()
    .with(TokenKind::RightParen)
    .with(TokenKind::Terminator)
    .with(TokenKind::Arrow);

/// Where a malformed variant payload stops being skipped.
pub const PAYLOAD_BOUNDARY: TokenSet = TokenSet::new()
    .with(TokenKind::RightParen)
    .with(TokenKind::RightBrace)
    .with(TokenKind::Terminator);

/// Literal tokens accepted as record field defaults.
pub const LITERAL: TokenSet = TokenSet::new()
    .with(TokenKind::IntegerLiteral)
    .with(TokenKind::DecimalLiteral)
    .with(TokenKind::StringLiteral)
    .with(TokenKind::RuneLiteral);

const OPENERS: TokenSet = BODY_SIGIL
    .with(TokenKind::LeftParen)
    .with(TokenKind::LeftBracket)
    .with(TokenKind::LeftBrace);

const CLOSERS: TokenSet = TokenSet::new()
    .with(TokenKind::RightParen)
    .with(TokenKind::RightBracket)
    .with(TokenKind::RightBrace);

/// Skip tokens until one in `stop` at bracket depth zero, or `Eob`.
///
/// Nested brackets are skipped whole. Unmatched closers at depth zero that
/// are not in `stop` are skipped too. The stop token is not consumed.
/// Returns the number of tokens skipped.
pub fn synchronize(cursor: &mut Cursor<'_>, stop: TokenSet) -> usize {
    skip_until(cursor, |cursor| cursor.check_set(stop))
}

/// Skip the rest of a malformed declaration.
///
/// Stops at depth zero on a terminator, a body sigil, or an identifier
/// followed by `:=` or `[`, so a declaration later on the same line still
/// parses.
pub fn synchronize_declaration(cursor: &mut Cursor<'_>) -> usize {
    skip_until(cursor, |cursor| match cursor.current_kind() {
        TokenKind::Terminator => true,
        TokenKind::Identifier => matches!(
            cursor.peek_kind(),
            TokenKind::ColonEqual | TokenKind::LeftBracket
        ),
        kind => BODY_SIGIL.contains(kind),
    })
}

/// Skip an opener and everything up to its matching closer, inclusive.
pub fn skip_group(cursor: &mut Cursor<'_>) {
    cursor.advance();
    synchronize(cursor, CLOSERS);
    cursor.advance();
}

fn skip_until(
    cursor: &mut Cursor<'_>,
    mut at_boundary: impl FnMut(&mut Cursor<'_>) -> bool,
) -> usize {
    let start = cursor.current().offset;
    let mut depth = 0u32;
    let mut skipped = 0;
    loop {
        let kind = cursor.current_kind();
        if kind == TokenKind::Eob || (depth == 0 && at_boundary(cursor)) {
            break;
        }
        if OPENERS.contains(kind) {
            depth += 1;
        } else if CLOSERS.contains(kind) {
            depth = depth.saturating_sub(1);
        }
        cursor.advance();
        skipped += 1;
    }
    debug!(
        from = start,
        to = cursor.current().offset,
        skipped,
        stop = %cursor.current_kind(),
        "synchronize"
    );
    skipped
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ParseOptions;
    use brim_lexer::SourceText;

    #[test]
    fn test_token_set_with() {
        let set = TokenSet::new()
            .with(TokenKind::Comma)
            .with(TokenKind::Terminator)
            .with(TokenKind::Comma);
        assert_eq!(set.count(), 2);
        assert!(set.contains(TokenKind::Comma));
        assert!(!set.contains(TokenKind::Colon));
        assert!(TokenSet::new().is_empty());
    }

    #[test]
    fn test_token_set_covers_highest_kind() {
        let set = TokenSet::new().with(TokenKind::Missing).with(TokenKind::Eob);
        assert!(set.contains(TokenKind::Missing));
        assert!(set.contains(TokenKind::Eob));
        assert_eq!(set.union(TYPE_START).count(), TYPE_START.count() + 2);
    }

    #[test]
    fn test_type_expected_are_type_starts() {
        for kind in TYPE_EXPECTED {
            assert!(TYPE_START.contains(kind));
        }
        assert_eq!(BODY_SIGIL.union(TYPE_START), TYPE_START);
    }

    #[test]
    fn test_synchronize_skips_balanced_groups() {
        let source = SourceText::new("a (b; c) [d; e] f; g");
        let mut cursor = Cursor::new(&source, &ParseOptions::default());
        let skipped = synchronize(&mut cursor, SEPARATOR);
        assert_eq!(cursor.current_kind(), TokenKind::Terminator);
        assert_eq!(cursor.current().offset, 17);
        assert_eq!(skipped, 12);
    }

    #[test]
    fn test_synchronize_skips_stray_closers() {
        let source = SourceText::new(") ] x }");
        let mut cursor = Cursor::new(&source, &ParseOptions::default());
        synchronize(&mut cursor, MEMBER_BOUNDARY);
        assert_eq!(cursor.current_kind(), TokenKind::RightBrace);
    }

    #[test]
    fn test_synchronize_stops_at_eob() {
        let source = SourceText::new("(a; b");
        let mut cursor = Cursor::new(&source, &ParseOptions::default());
        synchronize(&mut cursor, SEPARATOR);
        assert!(cursor.is_at_end());
    }

    #[test]
    fn test_declaration_sync_stops_at_declaration_start() {
        let source = SourceText::new(") x y C := D");
        let mut cursor = Cursor::new(&source, &ParseOptions::default());
        let skipped = synchronize_declaration(&mut cursor);
        assert_eq!(skipped, 3);
        assert_eq!(cursor.current().offset, 6);
        assert_eq!(cursor.peek_kind(), TokenKind::ColonEqual);
    }

    #[test]
    fn test_declaration_sync_stops_at_sigil_outside_groups() {
        let source = SourceText::new("a (^{ b }) %{ c }");
        let mut cursor = Cursor::new(&source, &ParseOptions::default());
        synchronize_declaration(&mut cursor);
        assert_eq!(cursor.current_kind(), TokenKind::PercentBrace);
        assert_eq!(cursor.current().offset, 11);
    }

    #[test]
    fn test_declaration_sync_ignores_starts_inside_groups() {
        let source = SourceText::new("( A := B ) ; C");
        let mut cursor = Cursor::new(&source, &ParseOptions::default());
        synchronize_declaration(&mut cursor);
        assert_eq!(cursor.current_kind(), TokenKind::Terminator);
    }

    #[test]
    fn test_skip_group_consumes_matching_closer() {
        let source = SourceText::new("^{ f: (a) -> [b] } x");
        let mut cursor = Cursor::new(&source, &ParseOptions::default());
        skip_group(&mut cursor);
        assert_eq!(cursor.current_kind(), TokenKind::Identifier);
        assert_eq!(cursor.current().offset, 19);
    }

    #[test]
    fn test_skip_group_stops_at_eob() {
        let source = SourceText::new("|{ A, (B");
        let mut cursor = Cursor::new(&source, &ParseOptions::default());
        skip_group(&mut cursor);
        assert!(cursor.is_at_end());
    }
}
