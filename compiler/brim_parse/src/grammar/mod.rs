//! Grammar productions, split by construct.
//!
//! Each file adds an `impl Parser` block:
//! - `module`: header, paths, declarations
//! - `generics`: bracketed parameter and argument lists
//! - `types`: type references and function types
//! - `bodies`: the four brace-delimited shapes

mod bodies;
mod generics;
mod module;
mod types;
