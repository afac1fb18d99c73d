//! Syntax frontend for the sealant declaration language: lexer, parser, AST, diagnostics.
//!
//! A `.seal` file describes a compilation unit for the checkers: class/interface/trait declarations
//! with their inheritance clauses and `permits` lists, followed by (or interleaved with) tuple
//! statements that exercise the tuple type validator.
//!
//! ## Notes
//! - This crate is intentionally “syntax-only”: it does not resolve names or check inheritance/tuple rules.
//! - Vocabulary identity (keywords/operators/punctuation) comes from `sealant_core::lang` registries.
//!
//! ## Examples
//! ```rust
//! use sealant_syntax::{lexer, parser};
//!
//! let tokens = lexer::lex("sealed interface Shape permits Circle\n").unwrap();
//! let program = parser::parse(&tokens).unwrap();
//! assert_eq!(program.items.len(), 1);
//! ```

pub mod ast;
pub mod diagnostics;
pub mod lexer;
pub mod parser;
pub mod token_helpers;
