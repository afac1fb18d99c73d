//! Declaration collection pass.

use sealant_core::lang::types as primitive;

use super::Checker;
use crate::frontend::ast::*;
use crate::frontend::hierarchy::Declaration;
use crate::frontend::rejection::Rejection;

impl Checker {
    /// Register every declaration, then check that each permits entry resolves.
    pub(crate) fn collect_declarations(&mut self, program: &Program) {
        for (decl, _) in program.declarations() {
            self.collect_declaration(decl);
        }

        for rejection in self.graph.validate_declarations() {
            let span = match &rejection {
                Rejection::UnresolvedPermit { sealed, name } => permit_span(program, sealed, name),
                _ => None,
            };
            self.report(rejection, span.unwrap_or_default());
        }
    }

    fn collect_declaration(&mut self, decl: &TypeDecl) {
        let name = &decl.name.node;
        if primitive::from_str(name).is_some() {
            tracing::warn!(name = %name, "declaration shadows a primitive type name; type positions resolve to the primitive");
        }

        // A sealed declaration without a permits clause is sealed with an empty list, which `declare` rejects.
        let declaration = if decl.is_sealed {
            Declaration::sealed(
                name.clone(),
                decl.kind,
                decl.permits.iter().flatten().map(|p| p.node.clone()),
            )
        } else {
            Declaration::open(name.clone(), decl.kind)
        };

        match self.graph.declare(declaration) {
            Ok(_) => {
                self.decl_spans.insert(name.clone(), decl.name.span);
            }
            Err(rejection @ Rejection::DuplicateDeclaration { .. }) => self.report(rejection, decl.name.span),
            Err(rejection) => {
                let span = match &rejection {
                    Rejection::SelfPermission { .. } => decl
                        .permits
                        .iter()
                        .flatten()
                        .find(|p| p.node == *name)
                        .map(|p| p.span)
                        .unwrap_or(decl.name.span),
                    _ => decl.name.span,
                };
                self.report(rejection, span);

                // Keep the name resolvable so one bad permits list does not cascade into unknown-declaration errors.
                if self.graph.declare(Declaration::open(name.clone(), decl.kind)).is_ok() {
                    self.decl_spans.insert(name.clone(), decl.name.span);
                }
            }
        }
    }
}

fn permit_span(program: &Program, sealed: &str, permit: &str) -> Option<Span> {
    program
        .declarations()
        .filter(|(decl, _)| decl.name.node == sealed)
        .flat_map(|(decl, _)| decl.permits.iter().flatten())
        .find(|p| p.node == permit)
        .map(|p| p.span)
}
