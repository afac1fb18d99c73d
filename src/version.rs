//! sealant version information.
//!
//! ## Notes
//!
//! - The value is taken from Cargo metadata (`CARGO_PKG_VERSION`) at compile time.
//! - The CLI and the language server's `initialize` response both report this value.

/// The sealant version string (for example, `0.1.0-alpha.1`).
pub const SEALANT_VERSION: &str = env!("CARGO_PKG_VERSION");
