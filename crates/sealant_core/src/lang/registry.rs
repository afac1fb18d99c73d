//! Shareable metadata for `sealant_core::lang` registries.
//!
//! The `sealant_core::lang` module is a set of **registry-first** vocabularies: keywords,
//! operators, primitive types, reason codes, etc. This submodule provides the small,
//! dependency-free metadata types that are reused across all registries.
//!
//! ## Notes
//! - These types are intentionally lightweight and `Copy`-friendly so registries can live in
//!   `const` tables.
//! - Metadata is meant for tooling/docs/diagnostics; enforcement of syntax rules still lives
//!   in the lexer/parser.
//!
//! ## See also
//! - [`crate::lang::keywords`]
//! - [`crate::lang::operators`]
//! - [`crate::lang::types`]
//! - [`crate::lang::reasons`]

/// Identify the language proposal that introduced a vocabulary item.
///
/// ## Examples
/// ```rust
/// use sealant_core::lang::registry::{ProposalId, PROPOSAL_SEALED};
///
/// let p: ProposalId = PROPOSAL_SEALED;
/// assert_eq!(p, "sealed-types");
/// ```
pub type ProposalId = &'static str;

/// Declaration language core (declarations, comments, bindings).
pub const PROPOSAL_CORE: ProposalId = "core";

/// Sealed classes, interfaces, and traits (`sealed` + `permits`).
pub const PROPOSAL_SEALED: ProposalId = "sealed-types";

/// Fixed-arity tuple types with per-slot constraints.
pub const PROPOSAL_TUPLES: ProposalId = "tuples";

/// Namespace-style access to proposal ids.
///
/// This exists purely for ergonomics at call sites so individual registries don’t need to import
/// every `PROPOSAL_*` constant into their `use` lists.
pub struct Proposal;

impl Proposal {
    pub const CORE: ProposalId = PROPOSAL_CORE;
    pub const SEALED: ProposalId = PROPOSAL_SEALED;
    pub const TUPLES: ProposalId = PROPOSAL_TUPLES;
}

/// Identify the sealant version (major, minor) a vocabulary item is available since.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Since(pub u16, pub u16);

/// Describe the lifecycle status of a language vocabulary item.
///
/// ## Notes
/// - This is intended for docs/tooling (e.g. to warn on deprecated spellings), not for
///   feature-gating by itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stability {
    Stable,
    Draft,
    Deprecated,
}

/// Represent a small example snippet for documentation.
///
/// ## Examples
/// ```rust
/// use sealant_core::lang::registry::Example;
///
/// let ex = Example {
///     code: "sealed trait Shape permits Circle, Square",
///     note: Some("A sealed trait."),
/// };
/// assert!(ex.code.starts_with("sealed"));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Example {
    pub code: &'static str,
    pub note: Option<&'static str>,
}

/// Shared metadata shape for “registry-first” vocabulary items.
///
/// Many vocabularies share the same core fields:
/// - stable identity (`id`)
/// - accepted spellings (`canonical` + `aliases`)
/// - documentation (`description` + `examples`)
/// - provenance (`introduced_in`, `since`, `stability`)
///
/// Registries that need extra per-item data (e.g. keyword category) define their own info type.
#[derive(Debug, Clone, Copy)]
pub struct LangItemInfo<Id> {
    pub id: Id,
    pub canonical: &'static str,
    pub aliases: &'static [&'static str],
    pub description: &'static str,
    pub introduced_in: ProposalId,
    pub since: Since,
    pub stability: Stability,
    pub examples: &'static [Example],
}

/// Resolve a spelling against a registry of [`LangItemInfo`] entries.
///
/// Canonical spellings win over aliases. `ascii_case_insensitive` enables case-insensitive lookup for
/// registries that document it.
pub fn lookup<Id: Copy>(items: &[LangItemInfo<Id>], s: &str, ascii_case_insensitive: bool) -> Option<Id> {
    let eq = |a: &str| {
        if ascii_case_insensitive {
            a.eq_ignore_ascii_case(s)
        } else {
            a == s
        }
    };
    if let Some(item) = items.iter().find(|i| eq(i.canonical)) {
        return Some(item.id);
    }
    items
        .iter()
        .find(|i| i.aliases.iter().any(|a| eq(a)))
        .map(|i| i.id)
}
