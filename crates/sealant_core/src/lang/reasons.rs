//! Rejection reason codes.
//!
//! Every REJECT decision produced by the hierarchy or tuple validators carries one of these stable
//! codes. Hosts key their own diagnostics off the code, so spellings must never change once shipped.
//!
//! ## Examples
//! ```rust
//! use sealant_core::lang::reasons::{self, ReasonId, ReasonGroup};
//!
//! assert_eq!(reasons::code(ReasonId::TypeMismatch), "sealant::type_mismatch");
//! assert_eq!(reasons::group(ReasonId::SelfPermission), ReasonGroup::Declaration);
//! ```

use super::registry::{Proposal, ProposalId, Since, Stability};

/// Stable identifier for every rejection reason.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReasonId {
    // Inheritance graph
    SealedExtensionNotPermitted,
    SealedInterfaceNotPermitted,
    SealedUseNotPermitted,
    InvalidInheritance,
    CyclicInheritance,
    UnknownDeclaration,

    // Declarations
    EmptyPermitsList,
    SelfPermission,
    UnresolvedPermit,
    DuplicateDeclaration,

    // Tuples
    ArityViolation,
    IndexOutOfRange,
    TypeMismatch,
    UnknownTuple,
    AssertionFailed,
}

/// Which phase of checking a reason belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReasonGroup {
    /// Raised while validating a single inheritance edge.
    Inheritance,
    /// Raised while registering a declaration (before any edge is checked).
    Declaration,
    /// Raised by a tuple operation.
    Tuple,
}

/// Metadata for a reason code.
#[derive(Debug, Clone, Copy)]
pub struct ReasonInfo {
    pub id: ReasonId,
    /// Stable machine-readable code (`sealant::snake_case_name`).
    pub code: &'static str,
    pub group: ReasonGroup,
    /// One-line help shown under the diagnostic.
    pub help: &'static str,
    pub introduced_in: ProposalId,
    pub since: Since,
    pub stability: Stability,
}

/// Registry of all reason codes.
pub const REASONS: &[ReasonInfo] = &[
    info(
        ReasonId::SealedExtensionNotPermitted,
        "sealant::sealed_extension_not_permitted",
        ReasonGroup::Inheritance,
        "add the subtype to the sealed declaration's permits list, or extend a non-sealed type",
        Proposal::SEALED,
    ),
    info(
        ReasonId::SealedInterfaceNotPermitted,
        "sealant::sealed_interface_not_permitted",
        ReasonGroup::Inheritance,
        "only permitted classes (or classes descending from one) may implement a sealed interface",
        Proposal::SEALED,
    ),
    info(
        ReasonId::SealedUseNotPermitted,
        "sealant::sealed_use_not_permitted",
        ReasonGroup::Inheritance,
        "add the user to the sealed trait's permits list",
        Proposal::SEALED,
    ),
    info(
        ReasonId::InvalidInheritance,
        "sealant::invalid_inheritance",
        ReasonGroup::Inheritance,
        "classes extend classes, interfaces extend interfaces, classes implement interfaces, and classes or traits use traits",
        Proposal::CORE,
    ),
    info(
        ReasonId::CyclicInheritance,
        "sealant::cyclic_inheritance",
        ReasonGroup::Inheritance,
        "a declaration cannot inherit from itself, directly or indirectly",
        Proposal::CORE,
    ),
    info(
        ReasonId::UnknownDeclaration,
        "sealant::unknown_declaration",
        ReasonGroup::Inheritance,
        "declare the type before inheriting from it",
        Proposal::CORE,
    ),
    info(
        ReasonId::EmptyPermitsList,
        "sealant::empty_permits_list",
        ReasonGroup::Declaration,
        "a sealed declaration must permit at least one subtype",
        Proposal::SEALED,
    ),
    info(
        ReasonId::SelfPermission,
        "sealant::self_permission",
        ReasonGroup::Declaration,
        "remove the declaration's own name from its permits list",
        Proposal::SEALED,
    ),
    info(
        ReasonId::UnresolvedPermit,
        "sealant::unresolved_permit",
        ReasonGroup::Declaration,
        "every permitted name must refer to a declaration in the same unit",
        Proposal::SEALED,
    ),
    info(
        ReasonId::DuplicateDeclaration,
        "sealant::duplicate_declaration",
        ReasonGroup::Declaration,
        "rename one of the declarations",
        Proposal::CORE,
    ),
    info(
        ReasonId::ArityViolation,
        "sealant::arity_violation",
        ReasonGroup::Tuple,
        "tuples have a fixed arity of at least two elements",
        Proposal::TUPLES,
    ),
    info(
        ReasonId::IndexOutOfRange,
        "sealant::index_out_of_range",
        ReasonGroup::Tuple,
        "tuple indices start at 0 and must be smaller than the arity",
        Proposal::TUPLES,
    ),
    info(
        ReasonId::TypeMismatch,
        "sealant::type_mismatch",
        ReasonGroup::Tuple,
        "the value must satisfy the slot's recorded constraint; widen the tuple first to admit more types",
        Proposal::TUPLES,
    ),
    info(
        ReasonId::UnknownTuple,
        "sealant::unknown_tuple",
        ReasonGroup::Tuple,
        "bind the tuple with `let` before using it",
        Proposal::TUPLES,
    ),
    info(
        ReasonId::AssertionFailed,
        "sealant::assertion_failed",
        ReasonGroup::Tuple,
        "the slot holds a different value than asserted",
        Proposal::TUPLES,
    ),
];

/// Return the stable code of a reason.
pub fn code(id: ReasonId) -> &'static str {
    info_for(id).code
}

/// Return the group of a reason.
pub fn group(id: ReasonId) -> ReasonGroup {
    info_for(id).group
}

/// Return the help text of a reason.
pub fn help(id: ReasonId) -> &'static str {
    info_for(id).help
}

/// Return the full metadata entry for a reason.
///
/// ## Panics
/// - If the registry is missing an entry for `id` (this indicates a programming error).
pub fn info_for(id: ReasonId) -> &'static ReasonInfo {
    REASONS.iter().find(|r| r.id == id).expect("reason info missing")
}

/// Resolve a stable code back to its identifier.
pub fn from_code(code: &str) -> Option<ReasonId> {
    REASONS.iter().find(|r| r.code == code).map(|r| r.id)
}

const fn info(
    id: ReasonId,
    code: &'static str,
    group: ReasonGroup,
    help: &'static str,
    introduced_in: ProposalId,
) -> ReasonInfo {
    ReasonInfo {
        id,
        code,
        group,
        help,
        introduced_in,
        since: Since(0, 1),
        stability: Stability::Stable,
    }
}
