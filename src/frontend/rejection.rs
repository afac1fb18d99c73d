//! Structured REJECT outcomes shared by the hierarchy and tuple validators.
//!
//! A [`Rejection`] is a value, never a panic: every validator operation returns `Result<_, Rejection>`.
//! Each variant maps to a stable [`ReasonId`] whose code and help text live in the
//! `sealant_core::lang::reasons` registry, and the [`miette::Diagnostic`] impl exposes exactly those.
//!
//! Rejections carry names and rendered types only, no spans. The checker driver attaches the source location
//! when it turns a rejection into a [`CompileError`].

use std::fmt;

use sealant_core::lang::reasons::{self, ReasonGroup, ReasonId};
use thiserror::Error;

use crate::frontend::ast::{DeclKind, Span};
use crate::frontend::diagnostics::CompileError;
use crate::frontend::hierarchy::EdgeKind;

/// Expected arity in an [`Rejection::ArityViolation`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArityBound {
    Exactly(usize),
    AtLeast(usize),
}

impl fmt::Display for ArityBound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArityBound::Exactly(n) => write!(f, "exactly {n}"),
            ArityBound::AtLeast(n) => write!(f, "at least {n}"),
        }
    }
}

/// Why a validator rejected an operation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Rejection {
    // ---- inheritance edges ----
    #[error("'{child}' is not permitted to extend sealed {target_kind} '{target}'")]
    SealedExtensionNotPermitted {
        child: String,
        target: String,
        target_kind: DeclKind,
    },

    #[error("'{child}' is not permitted to implement sealed interface '{interface}'")]
    SealedInterfaceNotPermitted {
        child: String,
        interface: String,
        /// The permits list of `interface`, for the diagnostic note.
        permitted: Vec<String>,
    },

    #[error("'{child}' is not permitted to use sealed trait '{target}'")]
    SealedUseNotPermitted { child: String, target: String },

    #[error("{child_kind} '{child}' cannot {} {target_kind} '{target}'", edge.verb())]
    InvalidInheritance {
        child: String,
        child_kind: DeclKind,
        target: String,
        target_kind: DeclKind,
        edge: EdgeKind,
    },

    #[error("'{child}' cannot inherit from '{target}': '{target}' already inherits from '{child}'")]
    CyclicInheritance { child: String, target: String },

    #[error("Unknown declaration '{name}'")]
    UnknownDeclaration { name: String },

    // ---- declarations ----
    #[error("sealed {kind} '{name}' has an empty permits list")]
    EmptyPermitsList { name: String, kind: DeclKind },

    #[error("sealed {kind} '{name}' lists itself in its permits list")]
    SelfPermission { name: String, kind: DeclKind },

    #[error("'{name}' in the permits list of '{sealed}' does not name a declaration")]
    UnresolvedPermit { sealed: String, name: String },

    #[error("'{name}' is declared more than once")]
    DuplicateDeclaration { name: String },

    // ---- tuples ----
    #[error("tuple arity mismatch: expected {expected} elements, found {found}")]
    ArityViolation { expected: ArityBound, found: usize },

    #[error("tuple index {index} is out of range for a tuple of arity {arity}")]
    IndexOutOfRange { index: usize, arity: usize },

    #[error("type mismatch at slot {index}: expected {expected}, found {found}")]
    TypeMismatch {
        index: usize,
        expected: String,
        found: String,
    },

    #[error("Unknown tuple '{name}'")]
    UnknownTuple { name: String },

    #[error("assertion failed at slot {index}: expected {expected}, found {found}")]
    AssertionFailed {
        index: usize,
        expected: String,
        found: String,
    },
}

impl Rejection {
    /// The registry identifier of this rejection.
    pub fn reason(&self) -> ReasonId {
        match self {
            Rejection::SealedExtensionNotPermitted { .. } => ReasonId::SealedExtensionNotPermitted,
            Rejection::SealedInterfaceNotPermitted { .. } => ReasonId::SealedInterfaceNotPermitted,
            Rejection::SealedUseNotPermitted { .. } => ReasonId::SealedUseNotPermitted,
            Rejection::InvalidInheritance { .. } => ReasonId::InvalidInheritance,
            Rejection::CyclicInheritance { .. } => ReasonId::CyclicInheritance,
            Rejection::UnknownDeclaration { .. } => ReasonId::UnknownDeclaration,
            Rejection::EmptyPermitsList { .. } => ReasonId::EmptyPermitsList,
            Rejection::SelfPermission { .. } => ReasonId::SelfPermission,
            Rejection::UnresolvedPermit { .. } => ReasonId::UnresolvedPermit,
            Rejection::DuplicateDeclaration { .. } => ReasonId::DuplicateDeclaration,
            Rejection::ArityViolation { .. } => ReasonId::ArityViolation,
            Rejection::IndexOutOfRange { .. } => ReasonId::IndexOutOfRange,
            Rejection::TypeMismatch { .. } => ReasonId::TypeMismatch,
            Rejection::UnknownTuple { .. } => ReasonId::UnknownTuple,
            Rejection::AssertionFailed { .. } => ReasonId::AssertionFailed,
        }
    }

    /// Stable machine-readable code, e.g. `sealant::type_mismatch`.
    pub fn code(&self) -> &'static str {
        reasons::code(self.reason())
    }

    /// Attach a source location and turn this rejection into a diagnostic.
    pub fn into_compile_error(self, span: Span) -> CompileError {
        let reason = self.reason();
        let message = self.to_string();
        let err = match reasons::group(reason) {
            ReasonGroup::Inheritance | ReasonGroup::Declaration => CompileError::inheritance(message, span),
            ReasonGroup::Tuple => CompileError::type_error(message, span),
        };
        let err = match &self {
            Rejection::SealedInterfaceNotPermitted {
                interface, permitted, ..
            } => err.with_note(format!("'{}' permits: {}", interface, permitted.join(", "))),
            _ => err,
        };
        err.with_code(reasons::code(reason)).with_hint(reasons::help(reason))
    }
}

impl miette::Diagnostic for Rejection {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        Some(Box::new(reasons::code(self.reason())))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        Some(Box::new(reasons::help(self.reason())))
    }
}
