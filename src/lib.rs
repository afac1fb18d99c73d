#![forbid(unsafe_code)]
//! sealant: sealed-hierarchy and tuple type checking
//!
//! This crate provides two standalone checkers a host compiler can consume:
//!
//! - the **sealed-hierarchy validator** ([`frontend::hierarchy`]) decides whether an inheritance edge is allowed by
//!   the `permits` list of a sealed class, interface, or trait;
//! - the **tuple type validator** ([`frontend::tuples`]) checks fixed-arity tuple construction, slot reads and writes,
//!   and widens slot constraints when a tuple crosses a typed boundary.
//!
//! Around them sit a checker driver for `.seal` declaration files, a CLI, and a language server.
//!
//! ## Panic Policy
//!
//! This codebase follows explicit error handling:
//!
//! - **Production code**: Use `Result` or `Option` with `?` / `ok_or` / `map_err`. Validator failures are values
//!   ([`frontend::rejection::Rejection`]), never panics. The `cli` module enforces `#![deny(clippy::unwrap_used)]`.
//!
//! - **Test code**: `.unwrap()` and `.expect()` are acceptable in tests.
//!
//! - **True invariants**: If a panic represents a checker bug (logic error), use `.expect("INVARIANT: reason")` with
//!   a clear explanation.

pub mod cli;
pub mod config;
pub mod frontend;
pub mod lsp;
pub mod version;

pub use frontend::ast;
pub use frontend::checker;
pub use frontend::diagnostics;
pub use frontend::hierarchy;
pub use frontend::lexer;
pub use frontend::parser;
pub use frontend::rejection;
pub use frontend::tuples;

pub use config::CheckConfig;
