//! Punctuation vocabulary.
//!
//! This module defines the canonical set of non-operator punctuation tokens used by the
//! lexer/parser: delimiters and separators.
//!
//! ## Notes
//! - Lookup via [`from_str`] is **case-sensitive**.
//! - This module is vocabulary only (spellings + metadata). It does not tokenize source text.
//!
//! ## Examples
//! ```rust
//! use sealant_core::lang::punctuation::{self, PunctuationId};
//!
//! assert_eq!(punctuation::from_str(","), Some(PunctuationId::Comma));
//! assert_eq!(punctuation::as_str(PunctuationId::LBracket), "[");
//! ```

use super::registry::{Proposal, ProposalId, Since, Stability};

/// Broad syntactic grouping for punctuation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PunctuationCategory {
    /// Brackets and parentheses.
    Delimiter,
    /// Separators like `,` and `:`.
    Separator,
}

/// Stable identifier for punctuation tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PunctuationId {
    Comma,
    Colon,
    LParen,
    RParen,
    LBracket,
    RBracket,
}

/// Metadata for a punctuation token.
#[derive(Debug, Clone, Copy)]
pub struct PunctuationInfo {
    pub id: PunctuationId,
    pub canonical: &'static str,
    pub category: PunctuationCategory,
    pub introduced_in: ProposalId,
    pub since: Since,
    pub stability: Stability,
}

/// Registry of all punctuation tokens.
pub const PUNCTUATION: &[PunctuationInfo] = &[
    info(PunctuationId::Comma, ",", PunctuationCategory::Separator, Proposal::CORE),
    info(PunctuationId::Colon, ":", PunctuationCategory::Separator, Proposal::TUPLES),
    info(PunctuationId::LParen, "(", PunctuationCategory::Delimiter, Proposal::TUPLES),
    info(PunctuationId::RParen, ")", PunctuationCategory::Delimiter, Proposal::TUPLES),
    info(PunctuationId::LBracket, "[", PunctuationCategory::Delimiter, Proposal::TUPLES),
    info(PunctuationId::RBracket, "]", PunctuationCategory::Delimiter, Proposal::TUPLES),
];

/// Return the canonical spelling for a punctuation token.
pub fn as_str(id: PunctuationId) -> &'static str {
    info_for(id).canonical
}

/// Return the category for a punctuation token.
pub fn category(id: PunctuationId) -> PunctuationCategory {
    info_for(id).category
}

/// Return the full metadata entry for a punctuation token.
///
/// ## Panics
/// - If the registry is missing an entry for `id` (this indicates a programming error).
pub fn info_for(id: PunctuationId) -> &'static PunctuationInfo {
    PUNCTUATION
        .iter()
        .find(|p| p.id == id)
        .expect("punctuation info missing")
}

/// Resolve a punctuation spelling to its identifier.
pub fn from_str(s: &str) -> Option<PunctuationId> {
    PUNCTUATION.iter().find(|p| p.canonical == s).map(|p| p.id)
}

/// Resolve a single character to a punctuation identifier.
///
/// All punctuation in this language is one character wide, so the lexer can dispatch on `char`.
pub fn from_char(c: char) -> Option<PunctuationId> {
    PUNCTUATION
        .iter()
        .find(|p| p.canonical.len() == 1 && p.canonical.starts_with(c))
        .map(|p| p.id)
}

const fn info(
    id: PunctuationId,
    canonical: &'static str,
    category: PunctuationCategory,
    introduced_in: ProposalId,
) -> PunctuationInfo {
    PunctuationInfo {
        id,
        canonical,
        category,
        introduced_in,
        since: Since(0, 1),
        stability: Stability::Stable,
    }
}
