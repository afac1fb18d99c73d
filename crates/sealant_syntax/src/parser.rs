//! Parser for the sealant declaration language
//!
//! Converts a token stream into an AST [`Program`]: type declarations with inheritance clauses and
//! `permits` lists, and the tuple statements (`let`, slot assignment, `read`, `assert`, `widen`).
//!
//! ## Examples
//!
//! ```rust
//! use sealant_syntax::{lexer, parser};
//!
//! let source = "sealed interface Os permits Linux\nclass Linux implements Os\n";
//! let tokens = lexer::lex(source).unwrap();
//! let ast = parser::parse(&tokens).unwrap();
//! assert_eq!(ast.declarations().count(), 2);
//! ```

use crate::ast::*;
use crate::diagnostics::CompileError;
use crate::lexer::{Token, TokenKind};
use sealant_core::lang::keywords::KeywordId;
use sealant_core::lang::operators::OperatorId;
use sealant_core::lang::punctuation::PunctuationId;

// NOTE: This module is split across multiple files using `include!` to keep all parser
// methods in the same Rust module (preserving privacy + call patterns) while avoiding
// a single large source file.

include!("parser/core.rs");
include!("parser/helpers.rs");
include!("parser/decl.rs");
include!("parser/types.rs");
include!("parser/stmts.rs");
include!("parser/expr.rs");
include!("parser/util.rs");
include!("parser/api.rs");
include!("parser/tests.rs");
