//! Read-only reflection over a [`DeclarationGraph`].
//!
//! A [`TypeReflection`] answers the questions a host's reflection API needs: whether a declaration is sealed, what
//! it permits, what kind it is, what its direct parents are, and which declarations actually inherit from it. It
//! borrows the graph immutably, so nothing can be changed through it.

use std::fmt;

use serde_json::json;

use super::{DeclId, DeclarationGraph, EdgeKind};
use crate::frontend::ast::DeclKind;

/// Borrowed view of one declaration.
#[derive(Debug, Clone, Copy)]
pub struct TypeReflection<'g> {
    graph: &'g DeclarationGraph,
    id: DeclId,
}

impl DeclarationGraph {
    /// Reflect on the declaration named `name`.
    pub fn reflect(&self, name: &str) -> Option<TypeReflection<'_>> {
        self.lookup(name).map(|id| TypeReflection { graph: self, id })
    }

    /// Reflect on every declaration, in declaration order.
    pub fn reflect_all(&self) -> impl Iterator<Item = TypeReflection<'_>> {
        (0..self.len()).map(move |id| TypeReflection { graph: self, id })
    }
}

impl<'g> TypeReflection<'g> {
    pub fn id(&self) -> DeclId {
        self.id
    }

    pub fn name(&self) -> &'g str {
        &self.graph.nodes[self.id].decl.name
    }

    pub fn kind(&self) -> DeclKind {
        self.graph.nodes[self.id].decl.kind
    }

    pub fn is_sealed(&self) -> bool {
        self.graph.nodes[self.id].decl.is_sealed
    }

    /// The permits list (empty unless sealed).
    pub fn permitted_subtypes(&self) -> &'g [String] {
        &self.graph.nodes[self.id].decl.permits
    }

    /// Direct parents with the edge kind that connects them.
    pub fn parents(&self) -> Vec<(&'g str, EdgeKind)> {
        self.graph.nodes[self.id]
            .parents
            .iter()
            .map(|&(p, kind)| (self.graph.nodes[p].decl.name.as_str(), kind))
            .collect()
    }

    /// Declarations that actually inherit from this one through an accepted edge.
    pub fn actual_subtypes(&self) -> Vec<&'g str> {
        self.graph.nodes[self.id]
            .children
            .iter()
            .map(|&c| self.graph.nodes[c].decl.name.as_str())
            .collect()
    }

    pub fn to_json(&self) -> serde_json::Value {
        let parents: Vec<_> = self
            .parents()
            .into_iter()
            .map(|(name, kind)| json!({ "name": name, "edge": kind.to_string() }))
            .collect();
        json!({
            "name": self.name(),
            "kind": self.kind().to_string(),
            "sealed": self.is_sealed(),
            "permits": self.permitted_subtypes(),
            "parents": parents,
            "subtypes": self.actual_subtypes(),
        })
    }
}

impl fmt::Display for TypeReflection<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_sealed() {
            write!(f, "sealed ")?;
        }
        writeln!(f, "{} {}", self.kind(), self.name())?;
        if self.is_sealed() {
            writeln!(f, "  permits: {}", self.permitted_subtypes().join(", "))?;
        }

        let parents = self.parents();
        if parents.is_empty() {
            writeln!(f, "  parents: (none)")?;
        } else {
            let rendered: Vec<String> = parents.iter().map(|(name, kind)| format!("{kind} {name}")).collect();
            writeln!(f, "  parents: {}", rendered.join(", "))?;
        }

        let subtypes = self.actual_subtypes();
        if subtypes.is_empty() {
            write!(f, "  subtypes: (none)")
        } else {
            write!(f, "  subtypes: {}", subtypes.join(", "))
        }
    }
}
