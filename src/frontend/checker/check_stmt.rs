//! Tuple statement pass.
//!
//! Resolves syntactic types and literal values, then drives the tuple validator. Statements run in source order
//! against a single set of bindings; a failed statement leaves the bindings as they were.

use std::collections::BTreeMap;

use sealant_core::lang::types as primitive;

use super::{Checker, SlotRead};
use crate::frontend::ast::*;
use crate::frontend::diagnostics::CompileError;
use crate::frontend::rejection::{ArityBound, Rejection};
use crate::frontend::tuples::{MIN_ARITY, TupleType, TupleValidator, TupleValue, Ty, Value};

impl Checker {
    pub(crate) fn check_statements(&mut self, program: &Program) {
        for (stmt, _) in program.statements() {
            if self.limit_reached() {
                tracing::debug!("error limit reached; skipping remaining statements");
                break;
            }
            if let Err(err) = self.check_stmt(stmt) {
                self.push_error(err);
            }
        }
    }

    fn check_stmt(&mut self, stmt: &Stmt) -> Result<(), CompileError> {
        match stmt {
            Stmt::Let { name, ty, value } => {
                let tuple_ty = self.resolve_tuple_type(ty)?;
                let values = self.tuple_literal(value)?;
                let validator = TupleValidator::new(&self.graph, &self.config);
                let tuple = validator
                    .construct(&tuple_ty, values)
                    .map_err(|r| r.into_compile_error(value.span))?;
                if self.tuples.insert(name.node.clone(), tuple).is_some() {
                    tracing::warn!(name = %name.node, "tuple binding shadowed");
                }
                Ok(())
            }
            Stmt::Assign { target, value } => {
                let value_span = value.span;
                let value = self.value(value)?;
                let validator = TupleValidator::new(&self.graph, &self.config);
                let tuple = lookup_mut(&mut self.tuples, &target.tuple)?;
                validator.write(tuple, target.index.node, value).map_err(|r| {
                    let span = match r {
                        Rejection::IndexOutOfRange { .. } => target.index.span,
                        _ => value_span,
                    };
                    r.into_compile_error(span)
                })
            }
            Stmt::Read(slot) => {
                let value = self.read_slot(slot)?;
                tracing::debug!(tuple = %slot.tuple.node, index = slot.index.node, value = %value, "read");
                self.reads.push(SlotRead {
                    tuple: slot.tuple.node.clone(),
                    index: slot.index.node,
                    value,
                    span: slot.tuple.span.merge(slot.index.span),
                });
                Ok(())
            }
            Stmt::Assert { target, expected } => {
                let actual = self.read_slot(target)?;
                let expected_value = self.value(expected)?;
                if actual == expected_value {
                    Ok(())
                } else {
                    Err(Rejection::AssertionFailed {
                        index: target.index.node,
                        expected: expected_value.to_string(),
                        found: actual.to_string(),
                    }
                    .into_compile_error(expected.span))
                }
            }
            Stmt::Widen { name, ty } => {
                let boundary = self.resolve_tuple_type(ty)?;
                let validator = TupleValidator::new(&self.graph, &self.config);
                let tuple = lookup_mut(&mut self.tuples, name)?;
                validator
                    .pass_through(tuple, &boundary)
                    .map_err(|r| r.into_compile_error(ty.span))
            }
        }
    }

    fn read_slot(&self, slot: &SlotRef) -> Result<Value, CompileError> {
        let tuple = self.tuples.get(&slot.tuple.node).ok_or_else(|| {
            Rejection::UnknownTuple {
                name: slot.tuple.node.clone(),
            }
            .into_compile_error(slot.tuple.span)
        })?;
        let validator = TupleValidator::new(&self.graph, &self.config);
        validator
            .read(tuple, slot.index.node)
            .cloned()
            .map_err(|r| r.into_compile_error(slot.index.span))
    }

    // ========================================================================
    // Resolution
    // ========================================================================

    /// Resolve a syntactic type to a slot constraint.
    ///
    /// Primitive names win over declarations of the same name.
    pub(crate) fn resolve_type(&self, ty: &Spanned<Type>) -> Result<Ty, CompileError> {
        match &ty.node {
            Type::Named(name) => {
                if let Some(id) = primitive::from_str(name) {
                    Ok(Ty::Primitive(id))
                } else if self.graph.lookup(name).is_some() {
                    Ok(Ty::Named(name.clone()))
                } else {
                    Err(Rejection::UnknownDeclaration { name: name.clone() }.into_compile_error(ty.span))
                }
            }
            Type::Null => Ok(Ty::NULL),
            Type::Tuple(_) => Ok(self.resolve_tuple_type(ty)?.as_ty()),
            Type::Union(members) => {
                let resolved = members
                    .iter()
                    .map(|m| self.resolve_type(m))
                    .collect::<Result<Vec<_>, _>>()?;
                Ok(Ty::union(resolved))
            }
        }
    }

    fn resolve_tuple_type(&self, ty: &Spanned<Type>) -> Result<TupleType, CompileError> {
        let Type::Tuple(elems) = &ty.node else {
            return Err(CompileError::type_error(format!("Expected a tuple type, found '{}'", ty.node), ty.span)
                .with_hint("tuple types are written `(T, U, ...)` with at least two elements"));
        };
        let resolved = elems
            .iter()
            .map(|e| self.resolve_type(e))
            .collect::<Result<Vec<_>, _>>()?;
        TupleType::new(resolved).map_err(|r| r.into_compile_error(ty.span))
    }

    /// Evaluate a literal expression.
    pub(crate) fn value(&self, expr: &Spanned<Expr>) -> Result<Value, CompileError> {
        Ok(match &expr.node {
            Expr::Int(v) => Value::Int(*v),
            Expr::Float(v) => Value::Float(*v),
            Expr::String(s) => Value::String(s.clone()),
            Expr::Bool(b) => Value::Bool(*b),
            Expr::Null => Value::Null,
            Expr::New(class) => {
                let id = self.graph.lookup(class).ok_or_else(|| {
                    Rejection::UnknownDeclaration { name: class.clone() }.into_compile_error(expr.span)
                })?;
                let kind = self.graph.get(id).map(|d| d.kind).unwrap_or(DeclKind::Class);
                if kind != DeclKind::Class {
                    return Err(
                        CompileError::type_error(format!("Cannot instantiate {} '{}'", kind, class), expr.span)
                            .with_hint("only classes have instances"),
                    );
                }
                Value::Object(class.clone())
            }
            Expr::Tuple(elems) if elems.len() < MIN_ARITY => {
                return Err(Rejection::ArityViolation {
                    expected: ArityBound::AtLeast(MIN_ARITY),
                    found: elems.len(),
                }
                .into_compile_error(expr.span));
            }
            Expr::Tuple(elems) => Value::Tuple(
                elems
                    .iter()
                    .map(|e| self.value(e))
                    .collect::<Result<Vec<_>, _>>()?,
            ),
        })
    }

    fn tuple_literal(&self, expr: &Spanned<Expr>) -> Result<Vec<Value>, CompileError> {
        match self.value(expr)? {
            Value::Tuple(values) => Ok(values),
            other => Err(CompileError::type_error(
                format!("Expected a tuple literal, found '{}'", other),
                expr.span,
            )),
        }
    }
}

fn lookup_mut<'t>(
    tuples: &'t mut BTreeMap<String, TupleValue>,
    name: &Spanned<Ident>,
) -> Result<&'t mut TupleValue, CompileError> {
    tuples.get_mut(&name.node).ok_or_else(|| {
        Rejection::UnknownTuple {
            name: name.node.clone(),
        }
        .into_compile_error(name.span)
    })
}
