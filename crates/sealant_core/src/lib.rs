//! Provide the canonical vocabulary shared by the sealant checkers, syntax frontend, and tooling.
//!
//! This crate is intentionally small and dependency-free. It holds the registry tables that every other
//! layer consults instead of matching on raw strings:
//! - reserved keywords of the declaration language,
//! - punctuation and operators,
//! - primitive type names of the tuple type lattice,
//! - stable reason codes for every rejection the validators can produce.
//!
//! ## Notes
//!
//! - This is a “vocabulary core” crate: **no IO**, no global state, and no checker-specific types.

pub mod lang;
