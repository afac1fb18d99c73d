//! Define the reserved keyword vocabulary for the sealant declaration language.
//!
//! This module is the single source of truth for reserved words: a stable identifier
//! ([`KeywordId`]) plus a const metadata table ([`KEYWORDS`]) that records canonical spellings,
//! aliases, categories, and provenance.
//!
//! ## Notes
//! - Lookup via [`from_str`] is **case-sensitive**.
//! - This registry is intentionally **pure** (no AST/IO/side effects).
//!
//! ## Examples
//! ```rust
//! use sealant_core::lang::keywords::{self, KeywordId};
//!
//! assert_eq!(keywords::from_str("implements"), Some(KeywordId::Implements));
//! assert_eq!(keywords::as_str(KeywordId::Uses), "uses");
//! ```

use super::registry::{Example, Proposal, ProposalId, Since, Stability};

/// Stable identifier for every reserved keyword.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeywordId {
    // Declarations
    Class,
    Interface,
    Trait,

    // Modifiers
    Sealed,

    // Inheritance clauses
    Extends,
    Implements,
    Uses,
    Permits,

    // Tuple statements
    Let,
    Widen,
    To,
    Read,
    Assert,

    // Literals / value constructors
    New,
    True,
    False,
    Null,
}

/// High-level grouping for documentation and tooling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeywordCategory {
    Declaration,
    Modifier,
    Inheritance,
    Statement,
    Literal,
}

/// Metadata for a keyword.
#[derive(Debug, Clone, Copy)]
pub struct KeywordInfo {
    pub id: KeywordId,
    pub canonical: &'static str,
    pub aliases: &'static [&'static str],
    pub category: KeywordCategory,
    pub introduced_in: ProposalId,
    pub since: Since,
    pub stability: Stability,
    pub examples: &'static [Example],
}

/// Registry of all keywords.
///
/// ## Notes
/// - The ordering is not semantically meaningful, but is grouped for readability.
pub const KEYWORDS: &[KeywordInfo] = &[
    // Declarations
    info(KeywordId::Class, "class", KeywordCategory::Declaration, Proposal::CORE),
    info(KeywordId::Interface, "interface", KeywordCategory::Declaration, Proposal::CORE),
    info(KeywordId::Trait, "trait", KeywordCategory::Declaration, Proposal::CORE),
    // Modifiers
    KeywordInfo {
        examples: &[Example {
            code: "sealed interface OperatingSystem permits Linux, MacOS, Windows",
            note: Some("Only the listed declarations may directly implement `OperatingSystem`."),
        }],
        ..info(KeywordId::Sealed, "sealed", KeywordCategory::Modifier, Proposal::SEALED)
    },
    // Inheritance clauses
    info(KeywordId::Extends, "extends", KeywordCategory::Inheritance, Proposal::CORE),
    info(KeywordId::Implements, "implements", KeywordCategory::Inheritance, Proposal::CORE),
    info(KeywordId::Uses, "uses", KeywordCategory::Inheritance, Proposal::CORE),
    info(KeywordId::Permits, "permits", KeywordCategory::Inheritance, Proposal::SEALED),
    // Tuple statements
    KeywordInfo {
        examples: &[Example {
            code: "let pair: (string, int) = (\"foo\", 1)",
            note: None,
        }],
        ..info(KeywordId::Let, "let", KeywordCategory::Statement, Proposal::TUPLES)
    },
    KeywordInfo {
        examples: &[Example {
            code: "widen pair to (string|int, int)",
            note: Some("Cross a typed boundary; slot constraints only ever grow."),
        }],
        ..info(KeywordId::Widen, "widen", KeywordCategory::Statement, Proposal::TUPLES)
    },
    info(KeywordId::To, "to", KeywordCategory::Statement, Proposal::TUPLES),
    info(KeywordId::Read, "read", KeywordCategory::Statement, Proposal::TUPLES),
    info(KeywordId::Assert, "assert", KeywordCategory::Statement, Proposal::TUPLES),
    // Literals
    info(KeywordId::New, "new", KeywordCategory::Literal, Proposal::TUPLES),
    info(KeywordId::True, "true", KeywordCategory::Literal, Proposal::CORE),
    info(KeywordId::False, "false", KeywordCategory::Literal, Proposal::CORE),
    info(KeywordId::Null, "null", KeywordCategory::Literal, Proposal::CORE),
];

/// Canonical spelling.
pub fn as_str(id: KeywordId) -> &'static str {
    info_for(id).canonical
}

/// Accepted alias spellings.
pub fn aliases(id: KeywordId) -> &'static [&'static str] {
    info_for(id).aliases
}

/// Category.
pub fn category(id: KeywordId) -> KeywordCategory {
    info_for(id).category
}

/// Full metadata.
///
/// ## Panics
/// - If the registry is missing an entry for `id` (this indicates a programming error).
pub fn info_for(id: KeywordId) -> &'static KeywordInfo {
    KEYWORDS.iter().find(|k| k.id == id).expect("keyword info missing")
}

/// Lookup by spelling (canonical or alias).
///
/// ## Returns
/// - `Some(KeywordId)` if the spelling is reserved.
/// - `None` otherwise.
pub fn from_str(s: &str) -> Option<KeywordId> {
    if let Some(k) = KEYWORDS.iter().find(|k| k.canonical == s) {
        return Some(k.id);
    }
    KEYWORDS
        .iter()
        .find(|k| {
            let aliases: &[&str] = k.aliases;
            aliases.contains(&s)
        })
        .map(|k| k.id)
}

// --- helpers -----------------------------------------------------------------

const fn info(
    id: KeywordId,
    canonical: &'static str,
    category: KeywordCategory,
    introduced_in: ProposalId,
) -> KeywordInfo {
    KeywordInfo {
        id,
        canonical,
        aliases: &[],
        category,
        introduced_in,
        since: Since(0, 1),
        stability: Stability::Stable,
        examples: &[],
    }
}
