//! Operator vocabulary.
//!
//! The declaration language only needs three operators: assignment into a tuple slot, equality in
//! `assert` statements, and union in type expressions.
//!
//! ## Examples
//! ```rust
//! use sealant_core::lang::operators::{self, OperatorId};
//!
//! assert_eq!(operators::from_str("|"), Some(OperatorId::Pipe));
//! assert_eq!(operators::as_str(OperatorId::EqEq), "==");
//! ```

use super::registry::{Proposal, ProposalId, Since, Stability};

/// Stable identifier for every operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperatorId {
    /// `=` (slot assignment, `let` initializer)
    Eq,
    /// `==` (assert comparison)
    EqEq,
    /// `|` (type union)
    Pipe,
}

/// Metadata for an operator.
#[derive(Debug, Clone, Copy)]
pub struct OperatorInfo {
    pub id: OperatorId,
    pub canonical: &'static str,
    pub description: &'static str,
    pub introduced_in: ProposalId,
    pub since: Since,
    pub stability: Stability,
}

/// Registry of all operators.
pub const OPERATORS: &[OperatorInfo] = &[
    info(OperatorId::Eq, "=", "Bind a tuple or replace one tuple slot."),
    info(OperatorId::EqEq, "==", "Compare a tuple slot against a literal in `assert`."),
    info(OperatorId::Pipe, "|", "Union of element constraints in a type expression."),
];

/// Return the canonical spelling of an operator.
pub fn as_str(id: OperatorId) -> &'static str {
    info_for(id).canonical
}

/// Return the full metadata entry for an operator.
///
/// ## Panics
/// - If the registry is missing an entry for `id` (this indicates a programming error).
pub fn info_for(id: OperatorId) -> &'static OperatorInfo {
    OPERATORS.iter().find(|o| o.id == id).expect("operator info missing")
}

/// Resolve an operator spelling to its identifier.
pub fn from_str(s: &str) -> Option<OperatorId> {
    OPERATORS.iter().find(|o| o.canonical == s).map(|o| o.id)
}

const fn info(id: OperatorId, canonical: &'static str, description: &'static str) -> OperatorInfo {
    OperatorInfo {
        id,
        canonical,
        description,
        introduced_in: Proposal::TUPLES,
        since: Since(0, 1),
        stability: Stability::Stable,
    }
}
