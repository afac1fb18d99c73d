//! Sealed-hierarchy validator unit tests.

use super::*;

fn os_graph() -> DeclarationGraph {
    let mut graph = DeclarationGraph::new();
    graph
        .declare(Declaration::sealed(
            "OperatingSystem",
            DeclKind::Interface,
            ["Linux", "MacOS", "Windows"],
        ))
        .unwrap();
    for name in ["UnixLike"] {
        graph.declare(Declaration::open(name, DeclKind::Interface)).unwrap();
    }
    for name in ["Linux", "MacOS", "Windows", "DummyOS"] {
        graph.declare(Declaration::open(name, DeclKind::Class)).unwrap();
    }
    graph
}

fn edge(child: &str, target: &str, kind: EdgeKind) -> InheritanceEdge {
    InheritanceEdge::new(child, target, kind)
}

// ========================================
// Declaration-time rules
// ========================================

#[test]
fn test_empty_permits_list_rejected() {
    let mut graph = DeclarationGraph::new();
    let err = graph
        .declare(Declaration::sealed("Shape", DeclKind::Class, Vec::<String>::new()))
        .unwrap_err();
    assert_eq!(
        err,
        Rejection::EmptyPermitsList {
            name: "Shape".to_string(),
            kind: DeclKind::Class
        }
    );
    assert!(graph.lookup("Shape").is_none(), "rejected declarations are not registered");
}

#[test]
fn test_self_permission_rejected() {
    let mut graph = DeclarationGraph::new();
    let err = graph
        .declare(Declaration::sealed("Shape", DeclKind::Class, ["Circle", "Shape"]))
        .unwrap_err();
    assert!(matches!(err, Rejection::SelfPermission { ref name, .. } if name == "Shape"));
}

#[test]
fn test_duplicate_declaration_rejected() {
    let mut graph = DeclarationGraph::new();
    graph.declare(Declaration::open("A", DeclKind::Class)).unwrap();
    let err = graph.declare(Declaration::open("A", DeclKind::Trait)).unwrap_err();
    assert_eq!(err, Rejection::DuplicateDeclaration { name: "A".to_string() });
}

#[test]
fn test_unresolved_permits_reported_after_all_declared() {
    let mut graph = DeclarationGraph::new();
    graph
        .declare(Declaration::sealed("Shape", DeclKind::Class, ["Circle", "Ghost"]))
        .unwrap();
    graph.declare(Declaration::open("Circle", DeclKind::Class)).unwrap();
    assert_eq!(
        graph.validate_declarations(),
        vec![Rejection::UnresolvedPermit {
            sealed: "Shape".to_string(),
            name: "Ghost".to_string()
        }]
    );
}

#[test]
fn test_duplicate_permits_collapsed() {
    let mut graph = DeclarationGraph::new();
    let id = graph
        .declare(Declaration::sealed("Shape", DeclKind::Class, ["Circle", "Circle", "Square"]))
        .unwrap();
    assert_eq!(graph.get(id).unwrap().permits, vec!["Circle", "Square"]);
}

#[test]
fn test_permits_on_open_declaration_ignored() {
    let mut graph = DeclarationGraph::new();
    let mut decl = Declaration::open("Shape", DeclKind::Class);
    decl.permits.push("Circle".to_string());
    let id = graph.declare(decl).unwrap();
    assert!(graph.get(id).unwrap().permits.is_empty());
}

// ========================================
// extends / uses
// ========================================

#[test]
fn test_sealed_class_extension() {
    let mut graph = DeclarationGraph::new();
    graph
        .declare(Declaration::sealed("Shape", DeclKind::Class, ["Circle"]))
        .unwrap();
    graph.declare(Declaration::open("Circle", DeclKind::Class)).unwrap();
    graph.declare(Declaration::open("Square", DeclKind::Class)).unwrap();

    assert!(graph.add_edge(&edge("Circle", "Shape", EdgeKind::Extends)).is_ok());
    let err = graph.add_edge(&edge("Square", "Shape", EdgeKind::Extends)).unwrap_err();
    assert_eq!(
        err,
        Rejection::SealedExtensionNotPermitted {
            child: "Square".to_string(),
            target: "Shape".to_string(),
            target_kind: DeclKind::Class,
        }
    );

    let shape = graph.lookup("Shape").unwrap();
    assert_eq!(graph.children(shape).len(), 1, "rejected edge must not be recorded");
}

#[test]
fn test_sealed_trait_use() {
    let mut graph = DeclarationGraph::new();
    graph
        .declare(Declaration::sealed("Loggable", DeclKind::Trait, ["Service"]))
        .unwrap();
    graph.declare(Declaration::open("Service", DeclKind::Class)).unwrap();
    graph.declare(Declaration::open("Helper", DeclKind::Trait)).unwrap();

    assert!(graph.check_edge(&edge("Service", "Loggable", EdgeKind::Uses)).is_ok());
    assert_eq!(
        graph.check_edge(&edge("Helper", "Loggable", EdgeKind::Uses)),
        Err(Rejection::SealedUseNotPermitted {
            child: "Helper".to_string(),
            target: "Loggable".to_string()
        })
    );
}

#[test]
fn test_open_target_accepts_anything() {
    let mut graph = DeclarationGraph::new();
    graph.declare(Declaration::open("Base", DeclKind::Class)).unwrap();
    graph.declare(Declaration::open("Derived", DeclKind::Class)).unwrap();
    assert!(graph.add_edge(&edge("Derived", "Base", EdgeKind::Extends)).is_ok());
}

#[test]
fn test_invalid_edge_kinds() {
    let mut graph = DeclarationGraph::new();
    graph.declare(Declaration::open("C", DeclKind::Class)).unwrap();
    graph.declare(Declaration::open("I", DeclKind::Interface)).unwrap();
    graph.declare(Declaration::open("T", DeclKind::Trait)).unwrap();

    for (child, target, kind) in [
        ("C", "I", EdgeKind::Extends),
        ("I", "C", EdgeKind::Implements),
        ("C", "T", EdgeKind::Implements),
        ("I", "T", EdgeKind::Uses),
        ("C", "I", EdgeKind::Uses),
    ] {
        let err = graph.check_edge(&edge(child, target, kind)).unwrap_err();
        assert!(
            matches!(err, Rejection::InvalidInheritance { .. }),
            "{child} {kind} {target}: {err:?}"
        );
    }
}

#[test]
fn test_unknown_declaration() {
    let graph = os_graph();
    assert_eq!(
        graph.check_edge(&edge("Linux", "Posix", EdgeKind::Implements)),
        Err(Rejection::UnknownDeclaration { name: "Posix".to_string() })
    );
}

#[test]
fn test_cycles_rejected() {
    let mut graph = DeclarationGraph::new();
    for name in ["A", "B", "C"] {
        graph.declare(Declaration::open(name, DeclKind::Class)).unwrap();
    }
    graph.add_edge(&edge("B", "A", EdgeKind::Extends)).unwrap();
    graph.add_edge(&edge("C", "B", EdgeKind::Extends)).unwrap();

    assert!(matches!(
        graph.add_edge(&edge("A", "C", EdgeKind::Extends)),
        Err(Rejection::CyclicInheritance { .. })
    ));
    assert!(matches!(
        graph.add_edge(&edge("A", "A", EdgeKind::Extends)),
        Err(Rejection::CyclicInheritance { .. })
    ));
}

#[test]
fn test_repeated_edge_is_noop() {
    let mut graph = DeclarationGraph::new();
    graph.declare(Declaration::open("A", DeclKind::Class)).unwrap();
    graph.declare(Declaration::open("B", DeclKind::Class)).unwrap();
    graph.add_edge(&edge("B", "A", EdgeKind::Extends)).unwrap();
    graph.add_edge(&edge("B", "A", EdgeKind::Extends)).unwrap();
    assert_eq!(graph.parents(graph.lookup("B").unwrap()).len(), 1);
}

// ========================================
// Sealed interfaces
// ========================================

#[test]
fn test_operating_system_scenario() {
    let mut graph = os_graph();

    assert!(graph.add_edge(&edge("UnixLike", "OperatingSystem", EdgeKind::Extends)).is_ok());
    assert!(graph.add_edge(&edge("Linux", "UnixLike", EdgeKind::Implements)).is_ok());

    let err = graph.add_edge(&edge("DummyOS", "UnixLike", EdgeKind::Implements)).unwrap_err();
    assert_eq!(
        err,
        Rejection::SealedInterfaceNotPermitted {
            child: "DummyOS".to_string(),
            interface: "OperatingSystem".to_string(),
            permitted: vec!["Linux".to_string(), "MacOS".to_string(), "Windows".to_string()],
        }
    );
}

#[test]
fn test_direct_sealed_interface_implementation() {
    let graph = os_graph();
    assert!(graph.check_edge(&edge("MacOS", "OperatingSystem", EdgeKind::Implements)).is_ok());
    assert!(matches!(
        graph.check_edge(&edge("DummyOS", "OperatingSystem", EdgeKind::Implements)),
        Err(Rejection::SealedInterfaceNotPermitted { .. })
    ));
}

#[test]
fn test_permission_through_validated_ancestor() {
    let mut graph = os_graph();
    graph.declare(Declaration::open("Ubuntu", DeclKind::Class)).unwrap();
    graph.add_edge(&edge("UnixLike", "OperatingSystem", EdgeKind::Extends)).unwrap();
    graph.add_edge(&edge("Linux", "UnixLike", EdgeKind::Implements)).unwrap();
    graph.add_edge(&edge("Ubuntu", "Linux", EdgeKind::Extends)).unwrap();

    assert!(graph.check_edge(&edge("Ubuntu", "UnixLike", EdgeKind::Implements)).is_ok());
}

#[test]
fn test_permitted_sub_interface_covers_implementors() {
    let mut graph = DeclarationGraph::new();
    graph
        .declare(Declaration::sealed("Os", DeclKind::Interface, ["Posix"]))
        .unwrap();
    graph.declare(Declaration::open("Posix", DeclKind::Interface)).unwrap();
    graph.declare(Declaration::open("Bsd", DeclKind::Class)).unwrap();
    graph.add_edge(&edge("Posix", "Os", EdgeKind::Extends)).unwrap();

    assert!(graph.check_edge(&edge("Bsd", "Posix", EdgeKind::Implements)).is_ok());
}

#[test]
fn test_every_sealed_ancestor_must_permit() {
    let mut graph = DeclarationGraph::new();
    graph
        .declare(Declaration::sealed("Outer", DeclKind::Interface, ["Impl"]))
        .unwrap();
    graph
        .declare(Declaration::sealed("Inner", DeclKind::Interface, ["Other"]))
        .unwrap();
    graph.declare(Declaration::open("Impl", DeclKind::Class)).unwrap();
    graph.declare(Declaration::open("Other", DeclKind::Class)).unwrap();
    graph.add_edge(&edge("Inner", "Outer", EdgeKind::Extends)).unwrap();

    let err = graph.check_edge(&edge("Impl", "Inner", EdgeKind::Implements)).unwrap_err();
    assert!(matches!(err, Rejection::SealedInterfaceNotPermitted { ref interface, .. } if interface == "Inner"));
}

#[test]
fn test_rejected_edge_grants_no_permission() {
    let mut graph = os_graph();
    graph.declare(Declaration::open("Clone", DeclKind::Class)).unwrap();
    graph.add_edge(&edge("UnixLike", "OperatingSystem", EdgeKind::Extends)).unwrap();
    graph.add_edge(&edge("DummyOS", "UnixLike", EdgeKind::Implements)).unwrap_err();
    graph.add_edge(&edge("Clone", "DummyOS", EdgeKind::Extends)).unwrap();

    assert!(graph.check_edge(&edge("Clone", "UnixLike", EdgeKind::Implements)).is_err());
}

// ========================================
// Traversal, subtyping, reflection
// ========================================

#[test]
fn test_ancestors_terminates_on_diamond() {
    let mut graph = DeclarationGraph::new();
    for name in ["Top", "Left", "Right"] {
        graph.declare(Declaration::open(name, DeclKind::Interface)).unwrap();
    }
    graph.declare(Declaration::open("Bottom", DeclKind::Class)).unwrap();
    graph.add_edge(&edge("Left", "Top", EdgeKind::Extends)).unwrap();
    graph.add_edge(&edge("Right", "Top", EdgeKind::Extends)).unwrap();
    graph.add_edge(&edge("Bottom", "Left", EdgeKind::Implements)).unwrap();
    graph.add_edge(&edge("Bottom", "Right", EdgeKind::Implements)).unwrap();

    let bottom = graph.lookup("Bottom").unwrap();
    let ancestors = graph.ancestors(bottom);
    assert_eq!(ancestors.len(), 3);
    assert!(graph.is_nominal_subtype("Bottom", "Top"));
    assert!(!graph.is_nominal_subtype("Top", "Bottom"));
}

#[test]
fn test_graph_is_send_and_sync() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<DeclarationGraph>();
}

#[test]
fn test_reflection_view() {
    let mut graph = os_graph();
    graph.add_edge(&edge("UnixLike", "OperatingSystem", EdgeKind::Extends)).unwrap();
    graph.add_edge(&edge("Linux", "UnixLike", EdgeKind::Implements)).unwrap();

    let os = graph.reflect("OperatingSystem").unwrap();
    assert!(os.is_sealed());
    assert_eq!(os.kind(), DeclKind::Interface);
    assert_eq!(os.permitted_subtypes(), ["Linux", "MacOS", "Windows"]);
    assert_eq!(os.actual_subtypes(), vec!["UnixLike"]);

    let linux = graph.reflect("Linux").unwrap();
    assert_eq!(linux.parents(), vec![("UnixLike", EdgeKind::Implements)]);

    insta::assert_snapshot!(os.to_string(), @r"
    sealed interface OperatingSystem
      permits: Linux, MacOS, Windows
      parents: (none)
      subtypes: UnixLike
    ");
    assert_eq!(os.to_json()["permits"][2], "Windows");
    assert!(graph.reflect("Nope").is_none());
}
