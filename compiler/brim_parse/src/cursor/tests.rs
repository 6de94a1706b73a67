#![allow(clippy::unwrap_used, clippy::expect_used)]

use super::*;
use brim_diagnostic::{Diagnostic, DiagnosticCode, Phase};
use pretty_assertions::assert_eq;

fn cursor(source: &SourceText) -> Cursor<'_> {
    Cursor::new(source, &ParseOptions::default())
}

#[test]
fn test_starts_on_first_significant_token() {
    let source = SourceText::new("  // note\nname");
    let c = cursor(&source);
    assert_eq!(c.current_kind(), TokenKind::Terminator);
    assert_eq!(c.current().offset, 9);
}

#[test]
fn test_peek_does_not_advance() {
    let source = SourceText::new("a := b");
    let mut c = cursor(&source);
    assert_eq!(c.peek_kind(), TokenKind::ColonEqual);
    assert_eq!(c.peek_kind(), TokenKind::ColonEqual);
    assert_eq!(c.current_kind(), TokenKind::Identifier);
    c.advance();
    assert_eq!(c.current_kind(), TokenKind::ColonEqual);
    assert_eq!(c.peek_kind(), TokenKind::Identifier);
}

#[test]
fn test_advance_tracks_prev_end() {
    let source = SourceText::new("abc  :=");
    let mut c = cursor(&source);
    assert_eq!(c.prev_end(), 0);
    c.advance();
    assert_eq!(c.prev_end(), 3);
    c.advance();
    assert_eq!(c.prev_end(), 7);
    assert!(c.is_at_end());
}

#[test]
fn test_advance_at_end_is_idempotent() {
    let source = SourceText::new("x");
    let mut c = cursor(&source);
    c.advance();
    let eob = c.advance();
    assert_eq!(eob.kind, TokenKind::Eob);
    assert_eq!(c.advance(), eob);
    assert_eq!(c.peek_kind(), TokenKind::Eob);
    assert_eq!(c.prev_end(), 1);
}

#[test]
fn test_eat_and_expect() {
    let source = SourceText::new("a b");
    let mut c = cursor(&source);
    assert!(c.eat(TokenKind::Comma).is_none());
    assert!(c.eat(TokenKind::Identifier).is_some());
    assert!(c.expect(TokenKind::Colon).is_none());
    let (diagnostics, _) = c.finish();
    assert_eq!(diagnostics.len(), 1);
    assert_eq!(diagnostics[0].code, DiagnosticCode::MissingToken);
    assert_eq!(diagnostics[0].expected.first(), Some(TokenKind::Colon));
    assert_eq!(diagnostics[0].actual, Some(TokenKind::Identifier));
    assert_eq!(diagnostics[0].offset, 2);
}

#[test]
fn test_one_parse_diagnostic_per_offset() {
    let source = SourceText::new(", ,");
    let mut c = cursor(&source);
    c.unexpected(&[TokenKind::Identifier]);
    c.missing(TokenKind::Identifier);
    c.advance();
    c.unexpected(&[TokenKind::Identifier]);
    let (diagnostics, _) = c.finish();
    let offsets: Vec<u32> = diagnostics.iter().map(|d| d.offset).collect();
    assert_eq!(offsets, vec![0, 2]);
}

#[test]
fn test_structural_diagnostics_bypass_offset_suppression() {
    let source = SourceText::new("+ x");
    let mut c = cursor(&source);
    let at = c.current();
    c.report(Diagnostic::at_token(
        DiagnosticCode::MissingModuleHeader,
        Phase::Parsing,
        &at,
    ));
    c.unexpected(&[TokenKind::Identifier]);
    c.missing(TokenKind::Identifier);
    let (diagnostics, _) = c.finish();
    let codes: Vec<DiagnosticCode> = diagnostics.iter().map(|d| d.code).collect();
    assert_eq!(
        codes,
        vec![
            DiagnosticCode::MissingModuleHeader,
            DiagnosticCode::UnexpectedToken,
        ]
    );
    assert!(diagnostics.iter().all(|d| d.offset == 0));
}

#[test]
fn test_unexpected_is_silent_on_error_tokens() {
    let source = SourceText::new("$");
    let mut c = cursor(&source);
    assert_eq!(c.current_kind(), TokenKind::Error);
    c.unexpected(&[TokenKind::Identifier]);
    let (diagnostics, _) = c.finish();
    let codes: Vec<DiagnosticCode> = diagnostics.iter().map(|d| d.code).collect();
    assert_eq!(codes, vec![DiagnosticCode::InvalidCharacter]);
}

#[test]
fn test_skip_terminators() {
    let source = SourceText::new("\n;\n x");
    let mut c = cursor(&source);
    c.skip_terminators();
    assert_eq!(c.current_kind(), TokenKind::Identifier);
}

#[test]
fn test_finish_returns_collected_trivia() {
    let source = SourceText::new("a // c\n");
    let options = ParseOptions {
        trivia: brim_lexer::TriviaPolicy::Collect,
        ..ParseOptions::default()
    };
    let mut c = Cursor::new(&source, &options);
    while !c.is_at_end() {
        c.advance();
    }
    let (_, trivia) = c.finish();
    let kinds: Vec<TokenKind> = trivia.iter().map(|t| t.kind).collect();
    assert_eq!(
        kinds,
        vec![TokenKind::WhitespaceTrivia, TokenKind::CommentTrivia]
    );
}
