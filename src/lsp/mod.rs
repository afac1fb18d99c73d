//! sealant Language Server Protocol (LSP) implementation
//!
//! Provides IDE features for `.seal` files:
//! - Real-time diagnostics (syntax, inheritance and tuple errors)
//! - Hover information (reflection of declarations, tuple bindings)
//! - Go-to-definition for declaration names
//! - Completions (keywords and declared names)

pub mod backend;
pub mod diagnostics;

pub use backend::SealantLanguageServer;
