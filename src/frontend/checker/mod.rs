//! Checker driver for `.seal` programs.
//!
//! Runs both validators over a parsed [`Program`] and turns every [`Rejection`] into a spanned [`CompileError`].
//!
//! ## Notes
//!
//! - **Three passes**: [`collect`](Checker::collect_declarations) registers every declaration (so permits lists and
//!   inheritance clauses may name later declarations), the edge pass validates inheritance clauses, and the
//!   statement pass runs tuple statements in source order.
//! - **Edge order**: a declaration's clauses are checked only after the clauses of everything it inherits from,
//!   so a class implementing an interface always sees the interface's complete ancestry. Within one declaration,
//!   `extends` and `uses` run before `implements` so permission can flow through a freshly validated superclass.
//! - **Error accumulation**: errors are collected (not fatal) so one run reports as many issues as possible, up to
//!   [`CheckConfig::max_errors`].
//!
//! ## Examples
//!
//! ```rust
//! use sealant::{checker, lexer, parser, CheckConfig};
//!
//! let source = "sealed interface Os permits Linux\nclass Linux implements Os\nclass Dummy implements Os\n";
//! let tokens = lexer::lex(source).unwrap();
//! let ast = parser::parse(&tokens).unwrap();
//! let errors = checker::check(&ast, &CheckConfig::default()).unwrap_err();
//! assert_eq!(errors.len(), 1);
//! assert_eq!(errors[0].code, Some("sealant::sealed_interface_not_permitted"));
//! ```

mod check_edges;
mod check_stmt;
mod collect;

#[cfg(test)]
mod tests;

use std::collections::{BTreeMap, HashMap};

use crate::config::CheckConfig;
use crate::frontend::ast::*;
use crate::frontend::diagnostics::CompileError;
use crate::frontend::hierarchy::DeclarationGraph;
use crate::frontend::rejection::Rejection;
use crate::frontend::tuples::{TupleValue, Value};

/// A successful `read` statement.
#[derive(Debug, Clone, PartialEq)]
pub struct SlotRead {
    pub tuple: String,
    pub index: usize,
    pub value: Value,
    pub span: Span,
}

/// Checker state.
///
/// Holds the declaration graph, the live tuple bindings, and the accumulated errors. Create with
/// [`Checker::new`], then call [`check_program`](Self::check_program).
#[derive(Debug)]
pub struct Checker {
    pub(crate) config: CheckConfig,
    pub(crate) graph: DeclarationGraph,
    /// Span of the name of every registered declaration.
    pub(crate) decl_spans: HashMap<String, Span>,
    pub(crate) tuples: BTreeMap<String, TupleValue>,
    pub(crate) reads: Vec<SlotRead>,
    pub(crate) errors: Vec<CompileError>,
}

impl Checker {
    pub fn new(config: CheckConfig) -> Self {
        Self {
            config,
            graph: DeclarationGraph::new(),
            decl_spans: HashMap::new(),
            tuples: BTreeMap::new(),
            reads: Vec::new(),
            errors: Vec::new(),
        }
    }

    /// Check a program and return errors if any.
    ///
    /// The checker keeps its state afterwards, so the graph and tuple bindings can be inspected even when errors
    /// were reported.
    #[tracing::instrument(skip_all, fields(items = program.items.len()))]
    pub fn check_program(&mut self, program: &Program) -> Result<(), Vec<CompileError>> {
        self.collect_declarations(program);
        self.check_edges(program);
        self.check_statements(program);

        if self.errors.is_empty() {
            Ok(())
        } else {
            self.errors.sort_by_key(|e| (e.span.start, e.span.end));
            tracing::debug!(errors = self.errors.len(), "check finished with errors");
            Err(self.errors.clone())
        }
    }

    pub fn graph(&self) -> &DeclarationGraph {
        &self.graph
    }

    pub fn tuple(&self, name: &str) -> Option<&TupleValue> {
        self.tuples.get(name)
    }

    /// Live tuple bindings, ordered by name.
    pub fn tuples(&self) -> &BTreeMap<String, TupleValue> {
        &self.tuples
    }

    pub fn reads(&self) -> &[SlotRead] {
        &self.reads
    }

    pub fn errors(&self) -> &[CompileError] {
        &self.errors
    }

    /// Span of a declaration's name, for go-to-definition.
    pub fn declaration_span(&self, name: &str) -> Option<Span> {
        self.decl_spans.get(name).copied()
    }

    /// Name of the registered declaration whose name span contains `offset`.
    pub fn declaration_at(&self, offset: usize) -> Option<&str> {
        self.decl_spans
            .iter()
            .find(|(_, span)| span.contains(offset))
            .map(|(name, _)| name.as_str())
    }

    pub(crate) fn limit_reached(&self) -> bool {
        self.config.error_limit_reached(self.errors.len())
    }

    pub(crate) fn push_error(&mut self, err: CompileError) {
        if !self.limit_reached() {
            self.errors.push(err);
        }
    }

    pub(crate) fn report(&mut self, rejection: Rejection, span: Span) {
        self.push_error(rejection.into_compile_error(span));
    }
}

/// Check `program` with a fresh [`Checker`].
pub fn check(program: &Program, config: &CheckConfig) -> Result<Checker, Vec<CompileError>> {
    let mut checker = Checker::new(config.clone());
    checker.check_program(program)?;
    Ok(checker)
}
