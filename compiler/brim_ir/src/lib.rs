//! Brim IR - shared front-end data types.
//!
//! This crate contains the value types every later stage agrees on:
//! - Spans for source locations
//! - Token kinds (banded) and tokens
//! - Syntax tree nodes produced by the parser
//!
//! Nothing here owns source text. Tokens and nodes address the source
//! buffer by byte offset and are plain values.

/// Compile-time assertion that a type has a specific size.
///
/// Used to prevent accidental size regressions in frequently-copied types.
#[macro_export]
macro_rules! static_assert_size {
    ($ty:ty, $size:expr) => {
        const _: [(); $size] = [(); ::std::mem::size_of::<$ty>()];
    };
}

pub mod ast;
mod span;
mod token;
mod traits;

pub use ast::{
    Declaration, DeclarationKind, Field, FunctionType, GenericArgs, GenericParams, Method,
    ModuleHeader, Ownership, Param, Path, ProtocolType, RecordType, TupleType, TypeExpr, TypeRef,
    UnionType, Variant,
};
pub use span::Span;
pub use token::{Band, Token, TokenKind};
pub use traits::Spanned;
