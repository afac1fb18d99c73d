//! Tuple type validator.
//!
//! Checks fixed-arity tuple operations and tracks a per-slot constraint that starts at the most specific type of
//! the constructed literal and only ever widens when the tuple crosses a typed boundary.
//!
//! | Operation                              | Rejects with                                  |
//! |----------------------------------------|-----------------------------------------------|
//! | [`TupleValidator::construct`]          | `ArityViolation`, `TypeMismatch`              |
//! | [`TupleValidator::read`]               | `IndexOutOfRange`                             |
//! | [`TupleValidator::write`]              | `IndexOutOfRange`, `TypeMismatch`             |
//! | [`TupleValidator::pass_through`]       | `ArityViolation`, `TypeMismatch` (atomic)     |
//!
//! Writes are checked against the *recorded* slot constraint, not the declared element type: after
//! `let t: (string, int) = ("foo", 1)`, slot 0 is constrained to `string` and slot 1 to `int`.
//!
//! ## Examples
//!
//! ```rust
//! use sealant::config::CheckConfig;
//! use sealant::hierarchy::DeclarationGraph;
//! use sealant::tuples::{TupleType, TupleValidator, Ty, Value};
//!
//! let graph = DeclarationGraph::new();
//! let config = CheckConfig::default();
//! let validator = TupleValidator::new(&graph, &config);
//!
//! let ty = TupleType::new(vec![Ty::STRING, Ty::INT]).unwrap();
//! let mut t = validator.construct(&ty, vec![Value::String("foo".into()), Value::Int(1)]).unwrap();
//! assert!(validator.write(&mut t, 0, Value::Int(42)).is_err());
//! validator.write(&mut t, 0, Value::String("bar".into())).unwrap();
//! assert_eq!(validator.read(&t, 0).unwrap(), &Value::String("bar".into()));
//! ```

mod types;

pub use types::{Lattice, MIN_ARITY, TupleType, Ty, Value};

use crate::config::CheckConfig;
use crate::frontend::rejection::{ArityBound, Rejection};

/// Read-only nominal subtyping oracle.
///
/// The tuple validator asks it whether one declared type is a subtype of another; it never mutates anything.
pub trait Subtyping {
    /// Return `true` if the declaration named `sub` is `sup` or inherits from it.
    fn is_nominal_subtype(&self, sub: &str, sup: &str) -> bool;
}

/// One tuple slot: the current value and its recorded constraint.
#[derive(Debug, Clone, PartialEq)]
pub struct Slot {
    pub value: Value,
    pub constraint: Ty,
}

/// A tuple value bound to its declared type.
///
/// The number of slots always equals the declared arity.
#[derive(Debug, Clone, PartialEq)]
pub struct TupleValue {
    declared: TupleType,
    slots: Vec<Slot>,
}

impl TupleValue {
    pub fn declared_type(&self) -> &TupleType {
        &self.declared
    }

    pub fn arity(&self) -> usize {
        self.slots.len()
    }

    pub fn slots(&self) -> &[Slot] {
        &self.slots
    }

    /// Current recorded constraint of every slot, as a tuple type.
    pub fn constraints(&self) -> Ty {
        Ty::Tuple(self.slots.iter().map(|s| s.constraint.clone()).collect())
    }

    pub fn values(&self) -> Vec<&Value> {
        self.slots.iter().map(|s| &s.value).collect()
    }
}

/// Decision procedures for tuple operations.
#[derive(Clone, Copy)]
pub struct TupleValidator<'a> {
    lattice: Lattice<'a>,
}

impl<'a> TupleValidator<'a> {
    pub fn new(nominal: &'a dyn Subtyping, config: &CheckConfig) -> Self {
        Self {
            lattice: Lattice::new(nominal, config.numeric_widening),
        }
    }

    pub fn lattice(&self) -> &Lattice<'a> {
        &self.lattice
    }

    /// Build a tuple value, recording each slot's constraint as the literal's most specific type.
    pub fn construct(&self, ty: &TupleType, values: Vec<Value>) -> Result<TupleValue, Rejection> {
        if values.len() != ty.arity() {
            return Err(Rejection::ArityViolation {
                expected: ArityBound::Exactly(ty.arity()),
                found: values.len(),
            });
        }

        let mut slots = Vec::with_capacity(values.len());
        for (index, (value, declared)) in values.into_iter().zip(ty.elements()).enumerate() {
            let found = value.ty();
            if !self.lattice.is_subtype(&found, declared) {
                return Err(Rejection::TypeMismatch {
                    index,
                    expected: declared.to_string(),
                    found: found.to_string(),
                });
            }
            slots.push(Slot {
                value,
                constraint: found,
            });
        }

        tracing::debug!(ty = %ty, "tuple constructed");
        Ok(TupleValue {
            declared: ty.clone(),
            slots,
        })
    }

    pub fn read<'t>(&self, tuple: &'t TupleValue, index: usize) -> Result<&'t Value, Rejection> {
        tuple
            .slots
            .get(index)
            .map(|slot| &slot.value)
            .ok_or(Rejection::IndexOutOfRange {
                index,
                arity: tuple.arity(),
            })
    }

    /// Replace one slot's value. Other slots are untouched.
    pub fn write(&self, tuple: &mut TupleValue, index: usize, value: Value) -> Result<(), Rejection> {
        let arity = tuple.arity();
        let slot = tuple
            .slots
            .get_mut(index)
            .ok_or(Rejection::IndexOutOfRange { index, arity })?;

        let found = value.ty();
        if !self.lattice.is_subtype(&found, &slot.constraint) {
            return Err(Rejection::TypeMismatch {
                index,
                expected: slot.constraint.to_string(),
                found: found.to_string(),
            });
        }

        tracing::debug!(index, value = %value, "tuple slot written");
        slot.value = value;
        Ok(())
    }

    /// Pass the tuple through a typed boundary, widening every slot constraint to `join(prior, boundary[i])`.
    ///
    /// All slots are checked before any is widened; on rejection the tuple is unchanged.
    pub fn pass_through(&self, tuple: &mut TupleValue, boundary: &TupleType) -> Result<(), Rejection> {
        if boundary.arity() != tuple.arity() {
            return Err(Rejection::ArityViolation {
                expected: ArityBound::Exactly(tuple.arity()),
                found: boundary.arity(),
            });
        }

        for (index, (slot, constraint)) in tuple.slots.iter().zip(boundary.elements()).enumerate() {
            let found = slot.value.ty();
            if !self.lattice.is_subtype(&found, constraint) {
                return Err(Rejection::TypeMismatch {
                    index,
                    expected: constraint.to_string(),
                    found: found.to_string(),
                });
            }
        }

        for (slot, constraint) in tuple.slots.iter_mut().zip(boundary.elements()) {
            slot.constraint = slot.constraint.join(constraint);
        }
        tracing::debug!(boundary = %boundary, widened = %tuple.constraints(), "tuple widened");
        Ok(())
    }
}
