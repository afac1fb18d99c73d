//! Sealed-hierarchy validator.
//!
//! Decides whether a proposed inheritance edge is allowed by the `permits` list of a sealed class, interface, or
//! trait. The [`DeclarationGraph`] is an arena of declarations indexed by [`DeclId`]; accepted edges are recorded on
//! it so later decisions can see the already-validated ancestry of a child.
//!
//! ## Rules
//!
//! - `extends` / `uses` targeting a sealed declaration: accepted iff the child is named in the target's `permits`.
//! - Interface extending interface: always accepted. The permission check is deferred to the concrete class that
//!   eventually implements the interface.
//! - Class implementing interface: for every sealed interface among the target and its ancestors, some declaration
//!   in the child's lineage (the child, its validated ancestors, the target and the target's ancestors) must be
//!   named in that interface's `permits`.
//!
//! Rejected edges are never added to the graph, so they cannot grant permission to anything downstream.
//!
//! ## Notes
//!
//! - Ancestor walks use an explicit stack and a `Vec<bool>` visited set over the arena. They never revisit a node,
//!   so they terminate even on a malformed graph.
//! - The graph holds no interior mutability; once the declaration pass is done it can be shared across threads.

mod reflect;
#[cfg(test)]
mod tests;

pub use reflect::TypeReflection;

use std::collections::HashMap;
use std::fmt;

use sealant_core::lang::keywords::{self, KeywordId};

use crate::frontend::ast::{DeclKind, InheritKeyword};
use crate::frontend::rejection::Rejection;
use crate::frontend::tuples::Subtyping;

/// Index of a declaration in a [`DeclarationGraph`].
pub type DeclId = usize;

/// Kind of an inheritance edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EdgeKind {
    Extends,
    Implements,
    Uses,
}

impl EdgeKind {
    pub fn keyword(self) -> KeywordId {
        match self {
            EdgeKind::Extends => KeywordId::Extends,
            EdgeKind::Implements => KeywordId::Implements,
            EdgeKind::Uses => KeywordId::Uses,
        }
    }

    /// Base verb form for messages ("cannot extend ...").
    pub fn verb(self) -> &'static str {
        match self {
            EdgeKind::Extends => "extend",
            EdgeKind::Implements => "implement",
            EdgeKind::Uses => "use",
        }
    }

    /// Return `true` if an edge of this kind may connect a `child` to a `target` of the given kinds.
    pub fn allows(self, child: DeclKind, target: DeclKind) -> bool {
        match self {
            EdgeKind::Extends => matches!(
                (child, target),
                (DeclKind::Class, DeclKind::Class) | (DeclKind::Interface, DeclKind::Interface)
            ),
            EdgeKind::Implements => child == DeclKind::Class && target == DeclKind::Interface,
            EdgeKind::Uses => matches!(child, DeclKind::Class | DeclKind::Trait) && target == DeclKind::Trait,
        }
    }
}

impl fmt::Display for EdgeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(keywords::as_str(self.keyword()))
    }
}

impl From<InheritKeyword> for EdgeKind {
    fn from(keyword: InheritKeyword) -> Self {
        match keyword {
            InheritKeyword::Extends => EdgeKind::Extends,
            InheritKeyword::Implements => EdgeKind::Implements,
            InheritKeyword::Uses => EdgeKind::Uses,
        }
    }
}

/// A named type known to the hierarchy validator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Declaration {
    pub name: String,
    pub kind: DeclKind,
    pub is_sealed: bool,
    /// Permitted direct subtypes, in declaration order. Empty for non-sealed declarations.
    pub permits: Vec<String>,
}

impl Declaration {
    /// A non-sealed declaration.
    pub fn open(name: impl Into<String>, kind: DeclKind) -> Self {
        Self {
            name: name.into(),
            kind,
            is_sealed: false,
            permits: Vec::new(),
        }
    }

    /// A sealed declaration with its permits list.
    pub fn sealed<S: Into<String>>(name: impl Into<String>, kind: DeclKind, permits: impl IntoIterator<Item = S>) -> Self {
        Self {
            name: name.into(),
            kind,
            is_sealed: true,
            permits: permits.into_iter().map(Into::into).collect(),
        }
    }

    /// Return `true` if this declaration is sealed and names `name` in its permits list.
    pub fn permits(&self, name: &str) -> bool {
        self.is_sealed && self.permits.iter().any(|p| p == name)
    }
}

/// A proposed `child (extends|implements|uses) target` relation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InheritanceEdge {
    pub child: String,
    pub target: String,
    pub kind: EdgeKind,
}

impl InheritanceEdge {
    pub fn new(child: impl Into<String>, target: impl Into<String>, kind: EdgeKind) -> Self {
        Self {
            child: child.into(),
            target: target.into(),
            kind,
        }
    }
}

#[derive(Debug, Clone)]
struct Node {
    decl: Declaration,
    /// Accepted edges out of this node, in acceptance order.
    parents: Vec<(DeclId, EdgeKind)>,
    /// Nodes with an accepted edge into this one, in acceptance order.
    children: Vec<DeclId>,
}

/// Arena of declarations plus the accepted inheritance edges between them.
#[derive(Debug, Clone, Default)]
pub struct DeclarationGraph {
    nodes: Vec<Node>,
    by_name: HashMap<String, DeclId>,
}

impl DeclarationGraph {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Resolve a declaration name.
    pub fn lookup(&self, name: &str) -> Option<DeclId> {
        self.by_name.get(name).copied()
    }

    pub fn get(&self, id: DeclId) -> Option<&Declaration> {
        self.nodes.get(id).map(|n| &n.decl)
    }

    /// All declarations in declaration order.
    pub fn declarations(&self) -> impl Iterator<Item = (DeclId, &Declaration)> {
        self.nodes.iter().enumerate().map(|(id, n)| (id, &n.decl))
    }

    /// Accepted parent edges of `id`.
    pub fn parents(&self, id: DeclId) -> &[(DeclId, EdgeKind)] {
        self.nodes.get(id).map(|n| n.parents.as_slice()).unwrap_or(&[])
    }

    /// Declarations with an accepted edge into `id`.
    pub fn children(&self, id: DeclId) -> &[DeclId] {
        self.nodes.get(id).map(|n| n.children.as_slice()).unwrap_or(&[])
    }

    /// Register a declaration.
    ///
    /// ## Errors
    /// - [`Rejection::DuplicateDeclaration`] if the name is already declared.
    /// - [`Rejection::EmptyPermitsList`] if the declaration is sealed and permits nothing.
    /// - [`Rejection::SelfPermission`] if a sealed declaration names itself.
    ///
    /// A rejected declaration is not registered.
    pub fn declare(&mut self, mut decl: Declaration) -> Result<DeclId, Rejection> {
        if self.by_name.contains_key(&decl.name) {
            return Err(Rejection::DuplicateDeclaration { name: decl.name });
        }

        if decl.is_sealed {
            if decl.permits.is_empty() {
                return Err(Rejection::EmptyPermitsList {
                    name: decl.name,
                    kind: decl.kind,
                });
            }
            if decl.permits.iter().any(|p| *p == decl.name) {
                return Err(Rejection::SelfPermission {
                    name: decl.name,
                    kind: decl.kind,
                });
            }
            let before = decl.permits.len();
            let mut seen = Vec::with_capacity(before);
            decl.permits.retain(|p| {
                if seen.contains(p) {
                    false
                } else {
                    seen.push(p.clone());
                    true
                }
            });
            if decl.permits.len() != before {
                tracing::warn!(name = %decl.name, "duplicate names in permits list ignored");
            }
        } else if !decl.permits.is_empty() {
            tracing::warn!(name = %decl.name, "permits list on a non-sealed declaration ignored");
            decl.permits.clear();
        }

        let id = self.nodes.len();
        tracing::debug!(name = %decl.name, kind = %decl.kind, sealed = decl.is_sealed, id, "declared");
        self.by_name.insert(decl.name.clone(), id);
        self.nodes.push(Node {
            decl,
            parents: Vec::new(),
            children: Vec::new(),
        });
        Ok(id)
    }

    /// Check that every permits entry names a declaration in this graph.
    ///
    /// Run after all declarations of a unit are registered (a permits list may name a later declaration).
    pub fn validate_declarations(&self) -> Vec<Rejection> {
        let mut rejections = Vec::new();
        for node in &self.nodes {
            for permit in &node.decl.permits {
                if !self.by_name.contains_key(permit) {
                    rejections.push(Rejection::UnresolvedPermit {
                        sealed: node.decl.name.clone(),
                        name: permit.clone(),
                    });
                }
            }
        }
        rejections
    }

    /// Decide whether `edge` may be added, without modifying the graph.
    pub fn check_edge(&self, edge: &InheritanceEdge) -> Result<(), Rejection> {
        let child_id = self.resolve(&edge.child)?;
        let target_id = self.resolve(&edge.target)?;
        let child = &self.nodes[child_id].decl;
        let target = &self.nodes[target_id].decl;

        if !edge.kind.allows(child.kind, target.kind) {
            return Err(Rejection::InvalidInheritance {
                child: child.name.clone(),
                child_kind: child.kind,
                target: target.name.clone(),
                target_kind: target.kind,
                edge: edge.kind,
            });
        }

        if child_id == target_id || self.ancestors(target_id).contains(&child_id) {
            return Err(Rejection::CyclicInheritance {
                child: child.name.clone(),
                target: target.name.clone(),
            });
        }

        match edge.kind {
            // Interface-to-interface: deferred to the implementing class.
            EdgeKind::Extends if child.kind == DeclKind::Interface => Ok(()),
            EdgeKind::Extends if target.is_sealed && !target.permits(&child.name) => {
                Err(Rejection::SealedExtensionNotPermitted {
                    child: child.name.clone(),
                    target: target.name.clone(),
                    target_kind: target.kind,
                })
            }
            EdgeKind::Uses if target.is_sealed && !target.permits(&child.name) => Err(Rejection::SealedUseNotPermitted {
                child: child.name.clone(),
                target: target.name.clone(),
            }),
            EdgeKind::Extends | EdgeKind::Uses => Ok(()),
            EdgeKind::Implements => self.check_sealed_interfaces(child_id, target_id),
        }
    }

    /// Check `edge` and record it on success.
    ///
    /// Adding an edge that is already present is a no-op.
    pub fn add_edge(&mut self, edge: &InheritanceEdge) -> Result<(), Rejection> {
        let decision = self.check_edge(edge);
        tracing::debug!(
            child = %edge.child,
            target = %edge.target,
            kind = %edge.kind,
            accepted = decision.is_ok(),
            "inheritance edge"
        );
        decision?;

        // Both names resolved in check_edge.
        let (Some(child_id), Some(target_id)) = (self.lookup(&edge.child), self.lookup(&edge.target)) else {
            return Ok(());
        };
        if self.nodes[child_id].parents.iter().any(|(p, _)| *p == target_id) {
            return Ok(());
        }
        self.nodes[child_id].parents.push((target_id, edge.kind));
        self.nodes[target_id].children.push(child_id);
        Ok(())
    }

    /// Transitive ancestors of `id` (excluding `id`), nearest first per branch.
    pub fn ancestors(&self, id: DeclId) -> Vec<DeclId> {
        let mut out = Vec::new();
        if id >= self.nodes.len() {
            return out;
        }
        let mut visited = vec![false; self.nodes.len()];
        visited[id] = true;
        let mut stack = vec![id];
        while let Some(current) = stack.pop() {
            for &(parent, _) in &self.nodes[current].parents {
                if !visited[parent] {
                    visited[parent] = true;
                    out.push(parent);
                    stack.push(parent);
                }
            }
        }
        out
    }

    /// Return `true` if `sub` is `sup` or inherits from it through accepted edges.
    pub fn is_subtype_of(&self, sub: DeclId, sup: DeclId) -> bool {
        sub == sup || self.ancestors(sub).contains(&sup)
    }

    fn resolve(&self, name: &str) -> Result<DeclId, Rejection> {
        self.lookup(name).ok_or_else(|| Rejection::UnknownDeclaration { name: name.to_string() })
    }

    /// Class-to-interface rule: every sealed interface at or above `target` must permit something in the lineage.
    fn check_sealed_interfaces(&self, child_id: DeclId, target_id: DeclId) -> Result<(), Rejection> {
        let mut upward = vec![target_id];
        upward.extend(self.ancestors(target_id));

        let sealed: Vec<DeclId> = upward
            .iter()
            .copied()
            .filter(|&id| {
                let decl = &self.nodes[id].decl;
                decl.is_sealed && decl.kind == DeclKind::Interface
            })
            .collect();
        if sealed.is_empty() {
            return Ok(());
        }

        let mut lineage = vec![child_id];
        lineage.extend(self.ancestors(child_id));
        lineage.extend(upward);

        for id in sealed {
            let interface = &self.nodes[id].decl;
            let permitted = lineage
                .iter()
                .any(|&member| interface.permits(&self.nodes[member].decl.name));
            if !permitted {
                return Err(Rejection::SealedInterfaceNotPermitted {
                    child: self.nodes[child_id].decl.name.clone(),
                    interface: interface.name.clone(),
                    permitted: interface.permits.clone(),
                });
            }
        }
        Ok(())
    }
}

impl Subtyping for DeclarationGraph {
    fn is_nominal_subtype(&self, sub: &str, sup: &str) -> bool {
        match (self.lookup(sub), self.lookup(sup)) {
            (Some(a), Some(b)) => self.is_subtype_of(a, b),
            _ => sub == sup,
        }
    }
}
