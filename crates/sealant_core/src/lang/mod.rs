//! sealant language vocabulary registries.
//!
//! This module is the “front door” for language-level vocabulary: reserved keywords, operators,
//! punctuation, primitive types, and rejection reason codes.
//!
//! The design goal is to avoid stringly-typed checks scattered across the checkers/tooling.
//! Instead, callers work with **stable IDs** (e.g. `KeywordId`, `PrimitiveTypeId`) and look up
//! spellings/metadata via registry tables.
//!
//! ## Notes
//! - Registries are intentionally **pure**: no AST types, no IO, no side effects.
//! - The lexer/parser enforce syntax; registries provide spellings and metadata for shared use (diagnostics, docs,
//!   highlighting).
//!
//! ## Examples
//! ```rust
//! use sealant_core::lang::keywords::{self, KeywordId};
//!
//! assert_eq!(keywords::from_str("sealed"), Some(KeywordId::Sealed));
//! assert_eq!(keywords::as_str(KeywordId::Permits), "permits");
//! ```

pub mod keywords;
pub mod operators;
pub mod punctuation;
pub mod reasons;
pub mod registry;
pub mod types;
