//! Property-based tests for the sealant validators
//!
//! These tests use proptest to verify invariants across many randomly
//! generated inputs, catching edge cases that hand-written tests might miss.

use proptest::prelude::*;

use sealant::CheckConfig;
use sealant::ast::DeclKind;
use sealant::hierarchy::{Declaration, DeclarationGraph, EdgeKind, InheritanceEdge};
use sealant::rejection::{ArityBound, Rejection};
use sealant::tuples::{TupleType, TupleValidator, Ty, Value};

const POOL: &[&str] = &["Alpha", "Beta", "Gamma", "Delta", "Epsilon", "Zeta"];

fn permits_strategy() -> impl Strategy<Value = Vec<&'static str>> {
    prop::sample::subsequence(POOL.to_vec(), 1..=POOL.len())
}

fn name_strategy() -> impl Strategy<Value = &'static str> {
    prop::sample::select(POOL.to_vec())
}

fn primitive_strategy() -> impl Strategy<Value = Ty> {
    prop::sample::select(vec![Ty::INT, Ty::FLOAT, Ty::STRING, Ty::BOOL, Ty::NULL])
}

fn value_of(ty: &Ty, seed: i64) -> Value {
    match ty {
        t if *t == Ty::INT => Value::Int(seed),
        t if *t == Ty::FLOAT => Value::Float(seed as f64 + 0.5),
        t if *t == Ty::STRING => Value::String(seed.to_string()),
        t if *t == Ty::BOOL => Value::Bool(seed % 2 == 0),
        _ => Value::Null,
    }
}

// =============================================================================
// Hierarchy Properties
// =============================================================================

proptest! {
    /// Property: extending a sealed class succeeds exactly when the child is permitted
    #[test]
    fn sealed_extension_accepted_iff_permitted(permits in permits_strategy(), child in name_strategy()) {
        let mut graph = DeclarationGraph::new();
        graph.declare(Declaration::sealed("Base", DeclKind::Class, permits.iter().copied())).unwrap();
        graph.declare(Declaration::open(child, DeclKind::Class)).unwrap();

        let result = graph.add_edge(&InheritanceEdge::new(child, "Base", EdgeKind::Extends));
        if permits.contains(&child) {
            prop_assert!(result.is_ok(), "{result:?}");
        } else {
            let is_not_permitted = matches!(result, Err(Rejection::SealedExtensionNotPermitted { .. }));
            prop_assert!(is_not_permitted, "{result:?}");
        }
    }

    /// Property: a sealed interface is enforced through any open intermediate interface
    #[test]
    fn sealed_interface_enforced_through_intermediate(permits in permits_strategy(), child in name_strategy()) {
        let mut graph = DeclarationGraph::new();
        graph.declare(Declaration::sealed("Root", DeclKind::Interface, permits.iter().copied())).unwrap();
        graph.declare(Declaration::open("Middle", DeclKind::Interface)).unwrap();
        graph.declare(Declaration::open(child, DeclKind::Class)).unwrap();

        // Interface-to-interface edges are never rejected for sealing.
        graph.add_edge(&InheritanceEdge::new("Middle", "Root", EdgeKind::Extends)).unwrap();

        let result = graph.add_edge(&InheritanceEdge::new(child, "Middle", EdgeKind::Implements));
        prop_assert_eq!(result.is_ok(), permits.contains(&child));
        if let Err(Rejection::SealedInterfaceNotPermitted { interface, permitted, .. }) = result {
            prop_assert_eq!(interface, "Root");
            prop_assert_eq!(permitted.len(), permits.len());
        }
    }

    /// Property: a class is permitted through a sealed interface iff it or its superclass is in the permits list
    #[test]
    fn sealed_interface_permission_flows_through_superclass(
        permits in permits_strategy(),
        child in name_strategy(),
        superclass in name_strategy(),
    ) {
        prop_assume!(child != superclass);

        let mut graph = DeclarationGraph::new();
        graph.declare(Declaration::sealed("Root", DeclKind::Interface, permits.iter().copied())).unwrap();
        graph.declare(Declaration::open("Middle", DeclKind::Interface)).unwrap();
        graph.declare(Declaration::open(superclass, DeclKind::Class)).unwrap();
        graph.declare(Declaration::open(child, DeclKind::Class)).unwrap();

        graph.add_edge(&InheritanceEdge::new("Middle", "Root", EdgeKind::Extends)).unwrap();
        graph.add_edge(&InheritanceEdge::new(child, superclass, EdgeKind::Extends)).unwrap();

        let result = graph.add_edge(&InheritanceEdge::new(child, "Middle", EdgeKind::Implements));
        let expected = permits.contains(&child) || permits.contains(&superclass);
        prop_assert_eq!(result.is_ok(), expected, "{:?}", result);
    }

    /// Property: a rejected edge leaves the graph unchanged
    #[test]
    fn rejected_edges_are_not_recorded(permits in permits_strategy(), child in name_strategy()) {
        let mut graph = DeclarationGraph::new();
        let base = graph.declare(Declaration::sealed("Base", DeclKind::Class, permits.iter().copied())).unwrap();
        let id = graph.declare(Declaration::open(child, DeclKind::Class)).unwrap();

        let accepted = graph.add_edge(&InheritanceEdge::new(child, "Base", EdgeKind::Extends)).is_ok();
        prop_assert_eq!(graph.is_subtype_of(id, base), accepted);
        prop_assert_eq!(graph.children(base).len(), usize::from(accepted));
    }
}

// =============================================================================
// Tuple Properties
// =============================================================================

proptest! {
    /// Property: tuple types below arity two are rejected, the rest construct
    #[test]
    fn tuple_arity_lower_bound(elements in prop::collection::vec(primitive_strategy(), 0..6), seed in any::<i64>()) {
        let arity = elements.len();
        match TupleType::new(elements.clone()) {
            Ok(ty) => {
                prop_assert!(arity >= 2);
                let graph = DeclarationGraph::new();
                let validator = TupleValidator::new(&graph, &CheckConfig::default());
                let values = elements.iter().map(|t| value_of(t, seed)).collect();
                let tuple = validator.construct(&ty, values).unwrap();
                prop_assert_eq!(tuple.arity(), arity);
            }
            Err(rejection) => {
                prop_assert!(arity < 2);
                prop_assert_eq!(rejection, Rejection::ArityViolation { expected: ArityBound::AtLeast(2), found: arity });
            }
        }
    }

    /// Property: constructing with any element count other than the arity is an arity violation
    #[test]
    fn construct_with_wrong_count(
        elements in prop::collection::vec(primitive_strategy(), 2..6),
        count in 0usize..8,
        seed in any::<i64>(),
    ) {
        let arity = elements.len();
        prop_assume!(count != arity);

        let graph = DeclarationGraph::new();
        let validator = TupleValidator::new(&graph, &CheckConfig::default());
        let ty = TupleType::new(elements.clone()).unwrap();
        let values = elements.iter().cycle().take(count).map(|t| value_of(t, seed)).collect();

        prop_assert_eq!(
            validator.construct(&ty, values),
            Err(Rejection::ArityViolation { expected: ArityBound::Exactly(arity), found: count })
        );
    }

    /// Property: a write of the slot's own literal type is read back; a write of another type is rejected
    #[test]
    fn write_then_read(first in "[a-z]{0,8}", second in "[a-z]{0,8}", number in any::<i64>()) {
        let graph = DeclarationGraph::new();
        let validator = TupleValidator::new(&graph, &CheckConfig::default());
        let ty = TupleType::new(vec![Ty::STRING, Ty::INT]).unwrap();
        let mut tuple = validator.construct(&ty, vec![Value::String(first), Value::Int(1)]).unwrap();

        validator.write(&mut tuple, 0, Value::String(second.clone())).unwrap();
        prop_assert_eq!(validator.read(&tuple, 0).unwrap(), &Value::String(second.clone()));

        let rejected = validator.write(&mut tuple, 0, Value::Int(number));
        let is_mismatch = matches!(rejected, Err(Rejection::TypeMismatch { index: 0, .. }));
        prop_assert!(is_mismatch);
        prop_assert_eq!(validator.read(&tuple, 0).unwrap(), &Value::String(second));
        prop_assert_eq!(validator.read(&tuple, 1).unwrap(), &Value::Int(1));
    }

    /// Property: indices at or past the arity are rejected for both reads and writes
    #[test]
    fn out_of_range_indices(extra in 0usize..100) {
        let graph = DeclarationGraph::new();
        let validator = TupleValidator::new(&graph, &CheckConfig::default());
        let ty = TupleType::new(vec![Ty::INT, Ty::INT]).unwrap();
        let mut tuple = validator.construct(&ty, vec![Value::Int(1), Value::Int(2)]).unwrap();
        let index = 2 + extra;

        prop_assert_eq!(validator.read(&tuple, index), Err(Rejection::IndexOutOfRange { index, arity: 2 }));
        prop_assert_eq!(
            validator.write(&mut tuple, index, Value::Int(3)),
            Err(Rejection::IndexOutOfRange { index, arity: 2 })
        );
    }

    /// Property: passing through the same boundary twice widens no further than once
    #[test]
    fn pass_through_is_idempotent(widen in primitive_strategy(), seed in any::<i64>()) {
        let graph = DeclarationGraph::new();
        let validator = TupleValidator::new(&graph, &CheckConfig::default());
        let ty = TupleType::new(vec![Ty::STRING, Ty::INT]).unwrap();
        let mut tuple = validator.construct(&ty, vec![Value::String(seed.to_string()), Value::Int(seed)]).unwrap();

        let boundary = TupleType::new(vec![Ty::union([Ty::STRING, widen.clone()]), Ty::INT]).unwrap();
        validator.pass_through(&mut tuple, &boundary).unwrap();
        let once = tuple.constraints();
        validator.pass_through(&mut tuple, &boundary).unwrap();
        prop_assert_eq!(tuple.constraints(), once);

        // The widened slot now takes values of the boundary's type.
        let write = validator.write(&mut tuple, 0, value_of(&widen, seed));
        prop_assert!(write.is_ok(), "{write:?}");
    }

    /// Property: join is commutative and idempotent
    #[test]
    fn join_is_commutative(a in primitive_strategy(), b in primitive_strategy()) {
        prop_assert_eq!(a.join(&b), b.join(&a));
        prop_assert_eq!(a.join(&b).join(&b), a.join(&b));
        prop_assert_eq!(a.join(&a), a);
    }
}
