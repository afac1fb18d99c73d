//! Abstract Syntax Tree definitions for the sealant declaration language.

use std::fmt;

use sealant_core::lang::keywords::{self, KeywordId};
use sealant_core::lang::operators::{self, OperatorId};

/// Source location span (byte offsets)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    pub fn merge(self, other: Span) -> Span {
        Span {
            start: self.start.min(other.start),
            end: self.end.max(other.end),
        }
    }

    /// Return `true` if `offset` falls inside this span (end-exclusive).
    pub fn contains(&self, offset: usize) -> bool {
        self.start <= offset && offset < self.end
    }
}

/// A node with source location
#[derive(Debug, Clone, PartialEq)]
pub struct Spanned<T> {
    pub node: T,
    pub span: Span,
}

impl<T> Spanned<T> {
    pub fn new(node: T, span: Span) -> Self {
        Self { node, span }
    }
}

pub type Ident = String;

/// A program is a sequence of declarations and tuple statements, in source order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Program {
    pub items: Vec<Spanned<Item>>,
}

impl Program {
    /// Iterate over the type declarations of the program.
    pub fn declarations(&self) -> impl Iterator<Item = (&TypeDecl, Span)> {
        self.items.iter().filter_map(|item| match &item.node {
            Item::Declaration(decl) => Some((decl, item.span)),
            Item::Statement(_) => None,
        })
    }

    /// Iterate over the tuple statements of the program.
    pub fn statements(&self) -> impl Iterator<Item = (&Stmt, Span)> {
        self.items.iter().filter_map(|item| match &item.node {
            Item::Statement(stmt) => Some((stmt, item.span)),
            Item::Declaration(_) => None,
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Item {
    Declaration(TypeDecl),
    Statement(Stmt),
}

// ============================================================================
// Declarations
// ============================================================================

/// Kind of a nominal declaration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DeclKind {
    Class,
    Interface,
    Trait,
}

impl DeclKind {
    pub fn keyword(self) -> KeywordId {
        match self {
            DeclKind::Class => KeywordId::Class,
            DeclKind::Interface => KeywordId::Interface,
            DeclKind::Trait => KeywordId::Trait,
        }
    }

    pub fn from_keyword(id: KeywordId) -> Option<Self> {
        match id {
            KeywordId::Class => Some(DeclKind::Class),
            KeywordId::Interface => Some(DeclKind::Interface),
            KeywordId::Trait => Some(DeclKind::Trait),
            _ => None,
        }
    }
}

impl fmt::Display for DeclKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(keywords::as_str(self.keyword()))
    }
}

/// `sealed? (class|interface|trait) Name clause* (permits A, B)?`
#[derive(Debug, Clone, PartialEq)]
pub struct TypeDecl {
    pub is_sealed: bool,
    pub kind: DeclKind,
    pub name: Spanned<Ident>,
    pub clauses: Vec<Spanned<InheritClause>>,
    /// `None` when no `permits` clause was written; `Some(vec![])` for a bare `permits`.
    pub permits: Option<Vec<Spanned<Ident>>>,
}

/// The keyword introducing an inheritance clause.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InheritKeyword {
    Extends,
    Implements,
    Uses,
}

impl InheritKeyword {
    pub fn keyword(self) -> KeywordId {
        match self {
            InheritKeyword::Extends => KeywordId::Extends,
            InheritKeyword::Implements => KeywordId::Implements,
            InheritKeyword::Uses => KeywordId::Uses,
        }
    }

    pub fn from_keyword(id: KeywordId) -> Option<Self> {
        match id {
            KeywordId::Extends => Some(InheritKeyword::Extends),
            KeywordId::Implements => Some(InheritKeyword::Implements),
            KeywordId::Uses => Some(InheritKeyword::Uses),
            _ => None,
        }
    }
}

impl fmt::Display for InheritKeyword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(keywords::as_str(self.keyword()))
    }
}

/// `extends A, B` / `implements I` / `uses T`
#[derive(Debug, Clone, PartialEq)]
pub struct InheritClause {
    pub keyword: InheritKeyword,
    pub targets: Vec<Spanned<Ident>>,
}

// ============================================================================
// Types
// ============================================================================

/// Syntactic type expression.
///
/// Names are left unresolved: `int` and `Linux` are both `Type::Named` here; the checker decides
/// whether a name is a primitive or a declaration.
#[derive(Debug, Clone, PartialEq)]
pub enum Type {
    Named(Ident),
    /// The `null` keyword in type position.
    Null,
    Tuple(Vec<Spanned<Type>>),
    Union(Vec<Spanned<Type>>),
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Type::Named(name) => f.write_str(name),
            Type::Null => f.write_str(keywords::as_str(KeywordId::Null)),
            Type::Tuple(elems) => {
                f.write_str("(")?;
                for (i, e) in elems.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{}", e.node)?;
                }
                f.write_str(")")
            }
            Type::Union(members) => {
                for (i, m) in members.iter().enumerate() {
                    if i > 0 {
                        f.write_str(operators::as_str(OperatorId::Pipe))?;
                    }
                    write!(f, "{}", m.node)?;
                }
                Ok(())
            }
        }
    }
}

// ============================================================================
// Tuple statements
// ============================================================================

/// Literal value expressions.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Int(i64),
    Float(f64),
    String(String),
    Bool(bool),
    Null,
    /// `new Name`: an instance of a declared class.
    New(Ident),
    Tuple(Vec<Spanned<Expr>>),
}

/// `name[index]`
#[derive(Debug, Clone, PartialEq)]
pub struct SlotRef {
    pub tuple: Spanned<Ident>,
    pub index: Spanned<usize>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Stmt {
    /// `let name: (T, U) = (a, b)`
    Let {
        name: Spanned<Ident>,
        ty: Spanned<Type>,
        value: Spanned<Expr>,
    },
    /// `name[i] = value`
    Assign { target: SlotRef, value: Spanned<Expr> },
    /// `read name[i]`
    Read(SlotRef),
    /// `assert name[i] == value`
    Assert { target: SlotRef, expected: Spanned<Expr> },
    /// `widen name to (T, U)`
    Widen { name: Spanned<Ident>, ty: Spanned<Type> },
}
