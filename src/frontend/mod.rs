//! sealant frontend
//!
//! This module contains all checking components:
//! - `lexer`, `parser`, `ast`, `diagnostics`: the `.seal` syntax frontend
//! - `hierarchy`: the sealed-hierarchy validator and its reflection view
//! - `tuples`: the tuple type validator and its type lattice
//! - `rejection`: structured reason codes returned by both validators
//! - `checker`: the driver that runs both validators over a parsed program

// Syntax components are provided by the shared sealant_syntax crate.
pub use sealant_syntax::{ast, diagnostics, lexer, parser};

pub mod checker;
pub mod hierarchy;
pub mod rejection;
pub mod tuples;
