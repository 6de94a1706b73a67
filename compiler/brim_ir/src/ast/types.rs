//! Type-expression nodes.

use super::{DeclarationKind, Path};
use crate::{Span, Spanned, Token};

/// Ownership modifier on a type reference.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Ownership {
    #[default]
    Unspecified,
    Own,
    Borrow,
}

/// One of the six type-expression shapes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TypeExpr {
    Alias(TypeRef),
    Protocol(ProtocolType),
    Union(UnionType),
    Record(RecordType),
    Tuple(TupleType),
    Function(FunctionType),
}

impl TypeExpr {
    pub fn kind(&self) -> DeclarationKind {
        match self {
            TypeExpr::Alias(_) => DeclarationKind::Alias,
            TypeExpr::Protocol(_) => DeclarationKind::Protocol,
            TypeExpr::Union(_) => DeclarationKind::Union,
            TypeExpr::Record(_) => DeclarationKind::Record,
            TypeExpr::Tuple(_) => DeclarationKind::Tuple,
            TypeExpr::Function(_) => DeclarationKind::Function,
        }
    }

    /// Placeholder alias built during recovery.
    pub fn missing(at: &Token) -> Self {
        TypeExpr::Alias(TypeRef::missing(at))
    }

    pub fn is_missing(&self) -> bool {
        matches!(self, TypeExpr::Alias(r) if r.path.is_missing())
    }
}

impl Spanned for TypeExpr {
    fn span(&self) -> Span {
        match self {
            TypeExpr::Alias(t) => t.span,
            TypeExpr::Protocol(t) => t.span,
            TypeExpr::Union(t) => t.span,
            TypeExpr::Record(t) => t.span,
            TypeExpr::Tuple(t) => t.span,
            TypeExpr::Function(t) => t.span,
        }
    }
}

/// `[own|borrow] path [args] [?]`
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TypeRef {
    pub ownership: Ownership,
    pub path: Path,
    pub args: Option<GenericArgs>,
    pub optional: bool,
    pub span: Span,
}

impl TypeRef {
    pub fn missing(at: &Token) -> Self {
        let path = Path::missing(at);
        TypeRef {
            ownership: Ownership::Unspecified,
            span: path.span,
            path,
            args: None,
            optional: false,
        }
    }
}

/// Bracketed type arguments: `[T, List[U]]`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GenericArgs {
    pub args: Vec<TypeExpr>,
    pub span: Span,
}

/// `^{ name: (params) -> ret ... }`
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProtocolType {
    pub methods: Vec<Method>,
    pub span: Span,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Method {
    pub name: Token,
    pub signature: FunctionType,
    pub span: Span,
}

/// `|{ Tag, Tag(T), Tag = 3 ... }`
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UnionType {
    pub variants: Vec<Variant>,
    pub span: Span,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Variant {
    pub tag: Token,
    pub payload: Option<Box<TypeExpr>>,
    /// Integer literal token after `=`.
    pub discriminant: Option<Token>,
    pub span: Span,
}

/// `%{ name: T, name: T = literal ... }`
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RecordType {
    pub fields: Vec<Field>,
    pub span: Span,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Field {
    pub name: Token,
    pub ty: TypeExpr,
    /// Literal token after `=`.
    pub default: Option<Token>,
    pub span: Span,
}

/// `#{ T, U ... }`
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TupleType {
    pub elements: Vec<TypeExpr>,
    pub span: Span,
}

/// `[async] (params) -> ret`
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FunctionType {
    pub is_async: bool,
    pub params: Vec<Param>,
    pub ret: Box<TypeExpr>,
    pub span: Span,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Param {
    pub name: Option<Token>,
    pub ty: TypeExpr,
    pub span: Span,
}
