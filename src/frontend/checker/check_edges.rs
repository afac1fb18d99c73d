//! Inheritance edge pass.

use std::collections::HashMap;

use super::Checker;
use crate::frontend::ast::*;
use crate::frontend::hierarchy::{EdgeKind, InheritanceEdge};

impl Checker {
    /// Validate every inheritance clause, parents before children.
    pub(crate) fn check_edges(&mut self, program: &Program) {
        let decls: Vec<&TypeDecl> = program.declarations().map(|(decl, _)| decl).collect();

        for index in dependency_order(&decls) {
            let decl = decls[index];
            // Skip duplicates: the registered declaration owns the name.
            if self.decl_spans.get(&decl.name.node) != Some(&decl.name.span) {
                continue;
            }

            let mut clauses: Vec<&Spanned<InheritClause>> = decl.clauses.iter().collect();
            clauses.sort_by_key(|clause| clause_rank(clause.node.keyword));

            for clause in clauses {
                let kind = EdgeKind::from(clause.node.keyword);
                for target in &clause.node.targets {
                    let edge = InheritanceEdge::new(decl.name.node.clone(), target.node.clone(), kind);
                    if let Err(rejection) = self.graph.add_edge(&edge) {
                        self.report(rejection, target.span);
                    }
                }
            }
        }
    }
}

fn clause_rank(keyword: InheritKeyword) -> u8 {
    match keyword {
        InheritKeyword::Extends => 0,
        InheritKeyword::Uses => 1,
        InheritKeyword::Implements => 2,
    }
}

/// Post-order over the "inherits from" relation, roots taken in source order.
///
/// Iterative DFS with an explicit stack. A target that is still on the stack (a cycle) is skipped here; the
/// hierarchy validator reports the cyclic edge itself.
fn dependency_order(decls: &[&TypeDecl]) -> Vec<usize> {
    let mut by_name: HashMap<&str, usize> = HashMap::new();
    for (index, decl) in decls.iter().enumerate() {
        by_name.entry(decl.name.node.as_str()).or_insert(index);
    }

    let targets: Vec<Vec<usize>> = decls
        .iter()
        .map(|decl| {
            decl.clauses
                .iter()
                .flat_map(|clause| clause.node.targets.iter())
                .filter_map(|target| by_name.get(target.node.as_str()).copied())
                .collect()
        })
        .collect();

    let mut visited = vec![false; decls.len()];
    let mut order = Vec::with_capacity(decls.len());

    for root in 0..decls.len() {
        if visited[root] {
            continue;
        }
        visited[root] = true;
        let mut stack = vec![(root, 0usize)];
        while let Some((node, next)) = stack.last_mut() {
            if let Some(&target) = targets[*node].get(*next) {
                *next += 1;
                if !visited[target] {
                    visited[target] = true;
                    stack.push((target, 0));
                }
            } else {
                order.push(*node);
                stack.pop();
            }
        }
    }
    order
}
