use super::*;
use crate::TokenKind;
use pretty_assertions::assert_eq;

fn ident(offset: u32, length: u32) -> Token {
    Token::new(TokenKind::Identifier, offset, length, 1, offset + 1)
}

#[test]
fn path_span_covers_all_segments() {
    let path = Path::new(vec![ident(2, 4), ident(7, 3)]);
    assert_eq!(path.span, Span::new(2, 10));
    assert!(!path.is_missing());
}

#[test]
fn empty_path_has_dummy_span() {
    assert_eq!(Path::new(Vec::new()).span, Span::DUMMY);
}

#[test]
fn missing_type_is_zero_length_alias() {
    let at = Token::new(TokenKind::Comma, 9, 1, 1, 10);
    let ty = TypeExpr::missing(&at);
    assert!(ty.is_missing());
    assert_eq!(ty.kind(), DeclarationKind::Alias);
    assert_eq!(ty.span(), Span::point(9));
}

#[test]
fn declaration_kind_follows_body() {
    let tuple = TypeExpr::Tuple(TupleType {
        elements: vec![TypeExpr::Alias(TypeRef {
            ownership: Ownership::Own,
            path: Path::new(vec![ident(8, 1)]),
            args: None,
            optional: true,
            span: Span::new(4, 10),
        })],
        span: Span::new(2, 12),
    });
    let decl = Declaration {
        name: ident(0, 1),
        generics: None,
        ty: tuple,
        span: Span::new(0, 12),
    };
    assert_eq!(decl.kind(), DeclarationKind::Tuple);
    assert_eq!(decl.kind().name(), "tuple");
    assert!(!decl.is_generic());
    assert!(!decl.ty.is_missing());
}
