//! Element constraint lattice and runtime values for tuples.

use std::fmt;

use sealant_core::lang::keywords::{self, KeywordId};
use sealant_core::lang::operators::{self, OperatorId};
use sealant_core::lang::types::{self as primitive, PrimitiveTypeId};

use super::Subtyping;
use crate::frontend::rejection::{ArityBound, Rejection};

/// Smallest tuple arity that can be constructed.
pub const MIN_ARITY: usize = 2;

/// A slot constraint.
///
/// Unions built through [`Ty::union`] are canonical: flattened, deduplicated, sorted, and collapsed to `mixed`
/// when `mixed` is a member. Joining is therefore idempotent and order-independent.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Ty {
    Primitive(PrimitiveTypeId),
    /// A declared class, interface, or trait.
    Named(String),
    Tuple(Vec<Ty>),
    Union(Vec<Ty>),
}

impl Ty {
    pub const INT: Ty = Ty::Primitive(PrimitiveTypeId::Int);
    pub const FLOAT: Ty = Ty::Primitive(PrimitiveTypeId::Float);
    pub const STRING: Ty = Ty::Primitive(PrimitiveTypeId::String);
    pub const BOOL: Ty = Ty::Primitive(PrimitiveTypeId::Bool);
    pub const NULL: Ty = Ty::Primitive(PrimitiveTypeId::Null);
    pub const MIXED: Ty = Ty::Primitive(PrimitiveTypeId::Mixed);
    /// The empty union: bottom of the lattice, a subtype of every type and inhabited by no value.
    pub const NEVER: Ty = Ty::Union(Vec::new());

    pub fn named(name: impl Into<String>) -> Self {
        Ty::Named(name.into())
    }

    pub fn is_mixed(&self) -> bool {
        *self == Ty::MIXED
    }

    pub fn is_never(&self) -> bool {
        matches!(self, Ty::Union(members) if members.is_empty())
    }

    /// Build a canonical union of `members`.
    ///
    /// A single distinct member is returned as-is rather than wrapped; no members at all gives [`Ty::NEVER`].
    pub fn union(members: impl IntoIterator<Item = Ty>) -> Ty {
        let mut flat = Vec::new();
        let mut stack: Vec<Ty> = members.into_iter().collect();
        while let Some(ty) = stack.pop() {
            match ty {
                Ty::Union(inner) => stack.extend(inner),
                Ty::Primitive(PrimitiveTypeId::Mixed) => return Ty::MIXED,
                other => flat.push(other),
            }
        }
        flat.sort();
        flat.dedup();
        match flat.len() {
            1 => flat.remove(0),
            _ => Ty::Union(flat),
        }
    }

    /// Least upper bound used when a tuple crosses a boundary.
    pub fn join(&self, other: &Ty) -> Ty {
        Ty::union([self.clone(), other.clone()])
    }
}

impl fmt::Display for Ty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Ty::Primitive(id) => f.write_str(primitive::as_str(*id)),
            Ty::Named(name) => f.write_str(name),
            Ty::Tuple(elems) => {
                f.write_str("(")?;
                for (i, e) in elems.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{e}")?;
                }
                f.write_str(")")
            }
            Ty::Union(members) if members.is_empty() => f.write_str("never"),
            Ty::Union(members) => {
                for (i, m) in members.iter().enumerate() {
                    if i > 0 {
                        f.write_str(operators::as_str(OperatorId::Pipe))?;
                    }
                    write!(f, "{m}")?;
                }
                Ok(())
            }
        }
    }
}

/// Subtype relation over [`Ty`], parameterized by the nominal oracle and the numeric widening switch.
#[derive(Clone, Copy)]
pub struct Lattice<'a> {
    nominal: &'a dyn Subtyping,
    numeric_widening: bool,
}

impl<'a> Lattice<'a> {
    pub fn new(nominal: &'a dyn Subtyping, numeric_widening: bool) -> Self {
        Self {
            nominal,
            numeric_widening,
        }
    }

    /// Return `true` if every value of `sub` is also a value of `sup`.
    pub fn is_subtype(&self, sub: &Ty, sup: &Ty) -> bool {
        if sup.is_mixed() || sub == sup {
            return true;
        }
        match (sub, sup) {
            (Ty::Union(members), _) => members.iter().all(|m| self.is_subtype(m, sup)),
            (_, Ty::Union(members)) => members.iter().any(|m| self.is_subtype(sub, m)),
            (Ty::Primitive(PrimitiveTypeId::Int), Ty::Primitive(PrimitiveTypeId::Float)) => self.numeric_widening,
            (Ty::Named(a), Ty::Named(b)) => self.nominal.is_nominal_subtype(a, b),
            (Ty::Tuple(xs), Ty::Tuple(ys)) => {
                xs.len() == ys.len() && xs.iter().zip(ys).all(|(x, y)| self.is_subtype(x, y))
            }
            _ => false,
        }
    }
}

/// A runtime value held in a tuple slot.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Int(i64),
    Float(f64),
    String(String),
    Bool(bool),
    Null,
    /// An instance of a declared class.
    Object(String),
    Tuple(Vec<Value>),
}

impl Value {
    /// The most specific type of this value.
    pub fn ty(&self) -> Ty {
        match self {
            Value::Int(_) => Ty::INT,
            Value::Float(_) => Ty::FLOAT,
            Value::String(_) => Ty::STRING,
            Value::Bool(_) => Ty::BOOL,
            Value::Null => Ty::NULL,
            Value::Object(class) => Ty::Named(class.clone()),
            Value::Tuple(elems) => Ty::Tuple(elems.iter().map(Value::ty).collect()),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Int(v) => write!(f, "{v}"),
            Value::Float(v) => write!(f, "{v:?}"),
            Value::String(s) => write!(f, "{s:?}"),
            Value::Bool(b) => {
                let id = if *b { KeywordId::True } else { KeywordId::False };
                f.write_str(keywords::as_str(id))
            }
            Value::Null => f.write_str(keywords::as_str(KeywordId::Null)),
            Value::Object(class) => write!(f, "{} {}", keywords::as_str(KeywordId::New), class),
            Value::Tuple(elems) => {
                f.write_str("(")?;
                for (i, e) in elems.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{e}")?;
                }
                f.write_str(")")
            }
        }
    }
}

/// A fixed-arity tuple type. Arity is at least [`MIN_ARITY`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TupleType {
    elements: Vec<Ty>,
}

impl TupleType {
    /// ## Errors
    /// [`Rejection::ArityViolation`] when fewer than [`MIN_ARITY`] element types are given.
    pub fn new(elements: Vec<Ty>) -> Result<Self, Rejection> {
        if elements.len() < MIN_ARITY {
            return Err(Rejection::ArityViolation {
                expected: ArityBound::AtLeast(MIN_ARITY),
                found: elements.len(),
            });
        }
        Ok(Self { elements })
    }

    pub fn arity(&self) -> usize {
        self.elements.len()
    }

    pub fn elements(&self) -> &[Ty] {
        &self.elements
    }

    /// The tuple type as a slot constraint (for nesting).
    pub fn as_ty(&self) -> Ty {
        Ty::Tuple(self.elements.clone())
    }
}

impl fmt::Display for TupleType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.as_ty().fmt(f)
    }
}
