//! sharplint-core: C# syntax layer for sharplint
//!
//! This crate provides:
//! - `SourceFile`: a parsed C# file (source text plus tree-sitter tree)
//! - `Span`: a byte range into the source
//! - `syntax`: node-kind names and field/shape helpers over the grammar
//! - `walk`/`Visitor`: top-down traversal that rules can implement

pub mod span;
pub mod syntax;
pub mod walk;

pub use span::Span;
pub use syntax::{SourceFile, SyntaxError};
pub use walk::{walk, Visitor};
