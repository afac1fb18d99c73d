//! Primitive type vocabulary of the tuple type lattice.
//!
//! ## Notes
//! - Lookup via [`from_str`] is **case-insensitive ASCII**, mirroring hosts whose scalar type names are.
//! - This module is vocabulary only (spellings + metadata), not subtyping semantics.
//!
//! ## Examples
//! ```rust
//! use sealant_core::lang::types::{self, PrimitiveTypeId};
//!
//! assert_eq!(types::from_str("string"), Some(PrimitiveTypeId::String));
//! assert_eq!(types::from_str("str"), Some(PrimitiveTypeId::String));
//! assert_eq!(types::as_str(PrimitiveTypeId::Mixed), "mixed");
//! ```

use super::registry::{self, LangItemInfo, Proposal, Since, Stability};

/// Stable identifier for primitive element types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum PrimitiveTypeId {
    Int,
    Float,
    String,
    Bool,
    Null,
    /// Top of the lattice: every value satisfies `mixed`.
    Mixed,
}

/// Metadata for a primitive type.
pub type PrimitiveTypeInfo = LangItemInfo<PrimitiveTypeId>;

/// Registry of primitive types.
pub const PRIMITIVE_TYPES: &[PrimitiveTypeInfo] = &[
    info(PrimitiveTypeId::Int, "int", &["integer"], "Signed 64-bit integer."),
    info(PrimitiveTypeId::Float, "float", &["double"], "64-bit floating point number."),
    info(PrimitiveTypeId::String, "string", &["str"], "UTF-8 string."),
    info(PrimitiveTypeId::Bool, "bool", &["boolean"], "`true` or `false`."),
    info(PrimitiveTypeId::Null, "null", &[], "The unit value `null`."),
    info(PrimitiveTypeId::Mixed, "mixed", &[], "Any value; the top element of the type lattice."),
];

/// Return the canonical spelling for a primitive type.
pub fn as_str(id: PrimitiveTypeId) -> &'static str {
    info_for(id).canonical
}

/// Return the full metadata entry for a primitive type.
///
/// ## Panics
/// - If the registry is missing an entry for `id` (this indicates a programming error).
pub fn info_for(id: PrimitiveTypeId) -> &'static PrimitiveTypeInfo {
    PRIMITIVE_TYPES
        .iter()
        .find(|t| t.id == id)
        .expect("primitive type info missing")
}

/// Resolve a primitive type name (canonical or alias).
pub fn from_str(s: &str) -> Option<PrimitiveTypeId> {
    registry::lookup(PRIMITIVE_TYPES, s, true)
}

const fn info(
    id: PrimitiveTypeId,
    canonical: &'static str,
    aliases: &'static [&'static str],
    description: &'static str,
) -> PrimitiveTypeInfo {
    LangItemInfo {
        id,
        canonical,
        aliases,
        description,
        introduced_in: Proposal::TUPLES,
        since: Since(0, 1),
        stability: Stability::Stable,
        examples: &[],
    }
}
