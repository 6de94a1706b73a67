//! Syntax tree produced by the parser.
//!
//! Every node is a single-owner value (`Vec`/`Box` children) carrying the
//! [`Span`] it covers. Nodes keep their significant tokens so callers can
//! slice the source buffer for names and literal text.
//!
//! - `Path`, `ModuleHeader`, `Declaration`: module-level structure
//! - `types`: the six type-expression shapes

mod types;

pub use types::{
    Field, FunctionType, GenericArgs, Method, Ownership, Param, ProtocolType, RecordType,
    TupleType, TypeExpr, TypeRef, UnionType, Variant,
};

use crate::{Span, Spanned, Token, TokenKind};

/// A dotted or namespaced name: `a.b`, `core::io`.
///
/// `segments` holds only identifier tokens (separators are dropped). A
/// path produced by recovery holds a single `Missing` token.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Path {
    pub segments: Vec<Token>,
    pub span: Span,
}

impl Path {
    pub fn new(segments: Vec<Token>) -> Self {
        let span = match (segments.first(), segments.last()) {
            (Some(first), Some(last)) => first.span().merge(last.span()),
            _ => Span::DUMMY,
        };
        Path { segments, span }
    }

    /// Placeholder path anchored at `at`.
    pub fn missing(at: &Token) -> Self {
        Path::new(vec![Token::missing(at)])
    }

    pub fn is_missing(&self) -> bool {
        self.segments
            .iter()
            .any(|segment| segment.kind == TokenKind::Missing)
    }
}

/// `[[ path ]]` at the top of every module.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ModuleHeader {
    pub path: Path,
    pub span: Span,
    /// Set when the source had no header; `path` is then a placeholder.
    pub is_missing: bool,
}

/// Bracketed generic parameter names: `[T, U]`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GenericParams {
    pub params: Vec<Token>,
    pub span: Span,
}

/// `Name [generics] := TypeExpr`
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Declaration {
    pub name: Token,
    pub generics: Option<GenericParams>,
    pub ty: TypeExpr,
    pub span: Span,
}

/// Which shape a declaration's body takes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DeclarationKind {
    Alias,
    Protocol,
    Union,
    Record,
    Tuple,
    Function,
}

impl DeclarationKind {
    pub const fn name(self) -> &'static str {
        match self {
            DeclarationKind::Alias => "alias",
            DeclarationKind::Protocol => "protocol",
            DeclarationKind::Union => "union",
            DeclarationKind::Record => "record",
            DeclarationKind::Tuple => "tuple",
            DeclarationKind::Function => "function",
        }
    }
}

impl Declaration {
    #[inline]
    pub fn kind(&self) -> DeclarationKind {
        self.ty.kind()
    }

    pub fn is_generic(&self) -> bool {
        self.generics.is_some()
    }
}

impl Spanned for Path {
    fn span(&self) -> Span {
        self.span
    }
}

impl Spanned for ModuleHeader {
    fn span(&self) -> Span {
        self.span
    }
}

impl Spanned for GenericParams {
    fn span(&self) -> Span {
        self.span
    }
}

impl Spanned for Declaration {
    fn span(&self) -> Span {
        self.span
    }
}

#[cfg(test)]
mod tests;
