//! Malformed input: each case checks the diagnostics and that parsing
//! carries on to later declarations.

use brim_diagnostic::DiagnosticCode;
use brim_ir::{DeclarationKind, TokenKind, TypeExpr};
use pretty_assertions::assert_eq;

use super::{codes, names, parse};
use crate::{parse_module_with, ParseOptions};
use brim_lexer::{SourceText, TriviaPolicy};

#[test]
fn test_missing_header() {
    let (source, module) = parse("A := B\n");
    assert_eq!(codes(&module), vec![DiagnosticCode::MissingModuleHeader]);
    assert!(module.header.is_missing);
    assert!(module.header.path.is_missing());
    assert_eq!(module.diagnostics[0].offset, 0);
    assert_eq!(names(&source, &module), vec!["A"]);
}

#[test]
fn test_empty_source() {
    let (_, module) = parse("");
    assert_eq!(codes(&module), vec![DiagnosticCode::MissingModuleHeader]);
    assert_eq!(module.diagnostics[0].actual, Some(TokenKind::Eob));
    assert!(module.members.is_empty());
}

#[test]
fn test_unclosed_header() {
    let (source, module) = parse("[[m\nA := B\n");
    assert_eq!(codes(&module), vec![DiagnosticCode::MissingToken]);
    assert_eq!(
        module.diagnostics[0].expected.first(),
        Some(TokenKind::RightBracket)
    );
    assert!(!module.header.is_missing);
    assert_eq!(names(&source, &module), vec!["A"]);
}

#[test]
fn test_empty_generic_params() {
    let (source, module) = parse("[[m]]\nA[] := B\n");
    assert_eq!(codes(&module), vec![DiagnosticCode::EmptyGenericParamList]);
    let diag = module.diagnostics[0];
    assert_eq!(source.span_text(diag.span()), "[]");
    assert_eq!((diag.line, diag.column), (2, 2));
    assert_eq!(module.members[0].generics.as_ref().unwrap().params.len(), 0);
}

#[test]
fn test_empty_generic_args() {
    let (source, module) = parse("[[m]]\nA := List[ ]\n");
    assert_eq!(codes(&module), vec![DiagnosticCode::EmptyGenericArgList]);
    assert_eq!(source.span_text(module.diagnostics[0].span()), "[ ]");
    assert_eq!(module.members[0].kind(), DeclarationKind::Alias);
}

#[test]
fn test_generic_body_without_binding() {
    let (source, module) = parse("[[m]]\nBox[T] %{ value: T }\nNext := A\n");
    assert_eq!(codes(&module), vec![DiagnosticCode::UnexpectedGenericBody]);
    assert_eq!(module.diagnostics[0].actual, Some(TokenKind::PercentBrace));
    assert_eq!(module.members[0].kind(), DeclarationKind::Record);
    assert_eq!(names(&source, &module), vec!["Box", "Next"]);
}

#[test]
fn test_missing_binding_before_type() {
    let (_, module) = parse("[[m]]\nA B\n");
    assert_eq!(codes(&module), vec![DiagnosticCode::MissingToken]);
    let diag = module.diagnostics[0];
    assert_eq!(diag.expected.first(), Some(TokenKind::ColonEqual));
    assert_eq!(diag.message(), "missing `:=` before identifier");
    assert_eq!(module.members[0].kind(), DeclarationKind::Alias);
    assert!(!module.members[0].ty.is_missing());
}

#[test]
fn test_unexpected_token_in_type_position() {
    let (source, module) = parse("[[m]]\nA := ,\nB := C\n");
    assert_eq!(codes(&module), vec![DiagnosticCode::UnexpectedToken]);
    let diag = module.diagnostics[0];
    assert_eq!(diag.actual, Some(TokenKind::Comma));
    assert_eq!(
        diag.expected.iter().collect::<Vec<_>>(),
        vec![
            TokenKind::Identifier,
            TokenKind::LeftParen,
            TokenKind::CaretBrace,
            TokenKind::PipeBrace,
        ]
    );

    let placeholder = &module.members[0].ty;
    assert!(placeholder.is_missing());
    let TypeExpr::Alias(reference) = placeholder else {
        panic!("expected placeholder alias");
    };
    assert_eq!(reference.path.segments[0].kind, TokenKind::Missing);
    assert_eq!(reference.path.segments[0].offset, diag.offset);
    assert_eq!(reference.path.segments[0].length, 0);
    assert_eq!(names(&source, &module), vec!["A", "B"]);
}

#[test]
fn test_missing_terminator_before_declaration() {
    let (source, module) = parse("[[m]]\nA := B C := D E[T] := F\n");
    assert_eq!(
        codes(&module),
        vec![DiagnosticCode::MissingToken, DiagnosticCode::MissingToken]
    );
    assert!(module
        .diagnostics
        .iter()
        .all(|d| d.expected.first() == Some(TokenKind::Terminator)));
    assert_eq!(names(&source, &module), vec!["A", "C", "E"]);
}

#[test]
fn test_trailing_garbage_skips_to_terminator() {
    let (source, module) = parse("[[m]]\nA := B ) x y\nC := D\n");
    assert_eq!(codes(&module), vec![DiagnosticCode::UnexpectedToken]);
    assert_eq!(module.diagnostics[0].actual, Some(TokenKind::RightParen));
    assert_eq!(names(&source, &module), vec!["A", "C"]);
}

#[test]
fn test_stray_token_between_declarations() {
    let (source, module) = parse("[[m]]\n=> junk\nA := B\n");
    assert_eq!(codes(&module), vec![DiagnosticCode::UnexpectedToken]);
    assert_eq!(
        module.diagnostics[0].expected.first(),
        Some(TokenKind::Identifier)
    );
    assert_eq!(names(&source, &module), vec!["A"]);
}

#[test]
fn test_declaration_without_body() {
    let (source, module) = parse("[[m]]\nA ?\nB := C\n");
    assert_eq!(codes(&module), vec![DiagnosticCode::UnexpectedToken]);
    assert!(module.members[0].ty.is_missing());
    assert_eq!(names(&source, &module), vec!["A", "B"]);
}

#[test]
fn test_resync_at_declaration_on_same_line() {
    let (source, module) = parse("[[m]]\nA := B ) C := D\n");
    assert_eq!(codes(&module), vec![DiagnosticCode::UnexpectedToken]);
    assert_eq!(module.diagnostics[0].actual, Some(TokenKind::RightParen));
    assert_eq!(names(&source, &module), vec!["A", "C"]);
}

#[test]
fn test_headerless_module_with_stray_token() {
    let (source, module) = parse("+ Foo := Bar\n");
    assert_eq!(
        codes(&module),
        vec![
            DiagnosticCode::MissingModuleHeader,
            DiagnosticCode::UnexpectedToken,
        ]
    );
    assert!(module.diagnostics.iter().all(|d| d.offset == 0));
    assert_eq!(module.diagnostics[1].actual, Some(TokenKind::Plus));
    assert!(module.header.is_missing);
    assert_eq!(names(&source, &module), vec!["Foo"]);
}

#[test]
fn test_headerless_module_keeps_every_declaration() {
    let (source, module) = parse("A := B\nC[T] := D\nE := ^{ f: () -> T }\n");
    assert_eq!(codes(&module), vec![DiagnosticCode::MissingModuleHeader]);
    assert_eq!(names(&source, &module), vec!["A", "C", "E"]);
}

#[test]
fn test_stray_body_is_skipped_whole() {
    let (source, module) = parse("[[m]]\nA := ) ^{ f: () -> X }\nB := C\n");
    assert_eq!(
        codes(&module),
        vec![DiagnosticCode::UnexpectedToken, DiagnosticCode::UnexpectedToken]
    );
    assert_eq!(module.diagnostics[0].actual, Some(TokenKind::RightParen));
    assert_eq!(module.diagnostics[1].actual, Some(TokenKind::CaretBrace));
    assert_eq!(
        module.diagnostics[1].expected.first(),
        Some(TokenKind::Identifier)
    );
    assert!(module.members[0].ty.is_missing());
    assert_eq!(names(&source, &module), vec!["A", "B"]);
}

#[test]
fn test_body_after_declaration_resyncs_past_it() {
    let (source, module) = parse("[[m]]\nA := B %{ x: Int } C := D\n");
    assert_eq!(codes(&module), vec![DiagnosticCode::UnexpectedToken]);
    assert_eq!(module.diagnostics[0].actual, Some(TokenKind::PercentBrace));
    assert_eq!(
        module.diagnostics[0].expected.first(),
        Some(TokenKind::Terminator)
    );
    assert_eq!(names(&source, &module), vec!["A", "C"]);
}

#[test]
fn test_unclosed_body_at_end() {
    let (source, module) = parse("[[m]]\nR := %{ x: Int");
    assert_eq!(codes(&module), vec![DiagnosticCode::MissingToken]);
    let diag = module.diagnostics[0];
    assert_eq!(diag.expected.first(), Some(TokenKind::RightBrace));
    assert_eq!(diag.actual, Some(TokenKind::Eob));
    assert_eq!(diag.offset, source.len());
    let TypeExpr::Record(record) = &module.members[0].ty else {
        panic!("expected record");
    };
    assert_eq!(record.fields.len(), 1);
}

#[test]
fn test_malformed_member_resyncs_to_separator() {
    let (source, module) = parse("[[m]]\nR := %{ x: Int, 5, y: Text }\nS := T\n");
    assert_eq!(codes(&module), vec![DiagnosticCode::UnexpectedToken]);
    assert_eq!(module.diagnostics[0].actual, Some(TokenKind::IntegerLiteral));
    let TypeExpr::Record(record) = &module.members[0].ty else {
        panic!("expected record");
    };
    let fields: Vec<&str> = record.fields.iter().map(|f| source.text(&f.name)).collect();
    assert_eq!(fields, vec!["x", "y"]);
    assert_eq!(names(&source, &module), vec!["R", "S"]);
}

#[test]
fn test_malformed_payload_resyncs_to_paren() {
    let (_, module) = parse("[[m]]\nU := |{ A(B, C), D }\n");
    assert_eq!(codes(&module), vec![DiagnosticCode::UnexpectedToken]);
    assert_eq!(module.diagnostics[0].actual, Some(TokenKind::Comma));
    let TypeExpr::Union(union) = &module.members[0].ty else {
        panic!("expected union");
    };
    assert_eq!(union.variants.len(), 2);
    assert!(union.variants[0].payload.is_some());
}

#[test]
fn test_missing_member_separator() {
    let (_, module) = parse("[[m]]\nT := #{ A B }\n");
    assert_eq!(codes(&module), vec![DiagnosticCode::UnexpectedToken]);
    assert_eq!(module.diagnostics[0].actual, Some(TokenKind::Identifier));
    let TypeExpr::Tuple(tuple) = &module.members[0].ty else {
        panic!("expected tuple");
    };
    assert_eq!(tuple.elements.len(), 1);
}

#[test]
fn test_missing_field_colon() {
    let (_, module) = parse("[[m]]\nR := %{ x Int }\n");
    assert_eq!(codes(&module), vec![DiagnosticCode::MissingToken]);
    assert_eq!(
        module.diagnostics[0].expected.first(),
        Some(TokenKind::Colon)
    );
}

#[test]
fn test_missing_return_arrow() {
    let (source, module) = parse("[[m]]\nF := (Int) Int\nG := H\n");
    assert_eq!(codes(&module), vec![DiagnosticCode::MissingToken]);
    assert_eq!(
        module.diagnostics[0].expected.first(),
        Some(TokenKind::Arrow)
    );
    let TypeExpr::Function(function) = &module.members[0].ty else {
        panic!("expected function");
    };
    assert!(function.ret.is_missing());
    assert_eq!(names(&source, &module), vec!["F", "G"]);
}

#[test]
fn test_lexer_errors_share_the_sink() {
    let (source, module) = parse("[[m]]\nA := B $\nC := \"open\nD := E\n");
    assert_eq!(
        codes(&module),
        vec![
            DiagnosticCode::InvalidCharacter,
            DiagnosticCode::UnterminatedString,
            DiagnosticCode::UnexpectedToken,
        ]
    );
    assert_eq!(names(&source, &module), vec!["A", "C", "D"]);
    let offsets: Vec<u32> = module.diagnostics.iter().map(|d| d.offset).collect();
    assert!(offsets.windows(2).all(|w| w[0] <= w[1]));
}

#[test]
fn test_diagnostic_cap_is_shared() {
    let text = format!("[[m]]\n{}", "A := ,\n".repeat(20));
    let source = SourceText::new(&text);
    let options = ParseOptions {
        diagnostic_limit: 5,
        ..ParseOptions::default()
    };
    let module = parse_module_with(&source, &options);
    assert_eq!(module.diagnostics.len(), 6);
    assert_eq!(
        module.diagnostics.last().map(|d| d.code),
        Some(DiagnosticCode::TooManyErrors)
    );
    assert_eq!(module.members.len(), 20);
}

#[test]
fn test_collected_trivia_reconstructs_source() {
    let text = "[[m]]  // header\nA := %{ x: Int }\n";
    let source = SourceText::new(text);
    let options = ParseOptions {
        trivia: TriviaPolicy::Collect,
        ..ParseOptions::default()
    };
    let module = parse_module_with(&source, &options);
    assert!(module.is_clean());
    assert!(module
        .trivia
        .iter()
        .any(|t| t.kind == TokenKind::CommentTrivia));
    assert!(module.trivia.iter().all(|t| t.kind.is_trivia()));
    assert!(module.trivia.windows(2).all(|w| w[0].end() <= w[1].offset));
}
