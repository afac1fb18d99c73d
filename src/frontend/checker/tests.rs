//! Checker driver unit tests.

use super::*;
use crate::frontend::diagnostics::ErrorKind;
use crate::frontend::{lexer, parser};
use crate::frontend::tuples::Ty;

fn check_str(source: &str) -> Result<Checker, Vec<CompileError>> {
    check_with(source, &CheckConfig::default())
}

fn check_with(source: &str, config: &CheckConfig) -> Result<Checker, Vec<CompileError>> {
    let tokens = lexer::lex(source).map_err(|_| vec![])?;
    let ast = parser::parse(&tokens).map_err(|_| vec![])?;
    check(&ast, config)
}

fn codes(errors: &[CompileError]) -> Vec<&'static str> {
    errors.iter().filter_map(|e| e.code).collect()
}

// ========================================
// Hierarchy
// ========================================

#[test]
fn test_operating_system_unit() {
    let source = r#"
sealed interface OperatingSystem permits Linux, MacOS, Windows
interface UnixLike extends OperatingSystem
class Linux implements UnixLike
class MacOS implements UnixLike
class Windows implements OperatingSystem
class DummyOS implements UnixLike
"#;
    let errors = check_str(source).err().unwrap();
    assert_eq!(codes(&errors), vec!["sealant::sealed_interface_not_permitted"]);
    let at = &source[errors[0].span.start..errors[0].span.end];
    assert_eq!(at, "UnixLike");
    assert!(source[..errors[0].span.start].ends_with("class DummyOS implements "));
}

#[test]
fn test_order_independent_edges() {
    // Implementors appear before the interfaces they depend on.
    let source = r#"
class DummyOS implements UnixLike
class Linux implements UnixLike
interface UnixLike extends OperatingSystem
sealed interface OperatingSystem permits Linux
"#;
    let errors = check_str(source).err().unwrap();
    assert_eq!(errors.len(), 1);
    assert!(errors[0].message.contains("DummyOS"));
}

#[test]
fn test_extends_before_implements_within_declaration() {
    let source = r#"
sealed interface Os permits Linux
class Linux implements Os
class Ubuntu implements Os extends Linux
"#;
    assert!(check_str(source).is_ok());
}

#[test]
fn test_declaration_errors_do_not_cascade() {
    let source = r#"
sealed class Shape permits
sealed trait Loggable permits Loggable, Service
class Circle extends Shape
class Service uses Loggable
"#;
    let errors = check_str(source).err().unwrap();
    assert_eq!(
        codes(&errors),
        vec!["sealant::empty_permits_list", "sealant::self_permission"]
    );
}

#[test]
fn test_sealed_without_permits_clause_is_empty() {
    let source = "sealed class Shape\nclass Triangle extends Shape\n";
    let errors = check_str(source).err().unwrap();
    assert_eq!(codes(&errors), vec!["sealant::empty_permits_list"]);
    assert_eq!(&source[errors[0].span.start..errors[0].span.end], "Shape");
}

#[test]
fn test_unresolved_permit_points_at_entry() {
    let source = "sealed class Shape permits Circle, Ghost\nclass Circle extends Shape\n";
    let errors = check_str(source).err().unwrap();
    assert_eq!(codes(&errors), vec!["sealant::unresolved_permit"]);
    assert_eq!(&source[errors[0].span.start..errors[0].span.end], "Ghost");
}

#[test]
fn test_duplicate_and_unknown() {
    let source = "class A\nclass A extends Missing\nclass B extends Nope\n";
    let errors = check_str(source).err().unwrap();
    assert_eq!(
        codes(&errors),
        vec!["sealant::duplicate_declaration", "sealant::unknown_declaration"]
    );
}

#[test]
fn test_cycle_and_invalid_kind() {
    let source = "class A extends B\nclass B extends A\ntrait T\nclass C implements T\n";
    let errors = check_str(source).err().unwrap();
    let codes = codes(&errors);
    assert!(codes.contains(&"sealant::cyclic_inheritance"), "{codes:?}");
    assert!(codes.contains(&"sealant::invalid_inheritance"), "{codes:?}");
    assert!(errors.iter().all(|e| e.kind == ErrorKind::Inheritance));
}

#[test]
fn test_graph_available_after_success() {
    let checker = check_str("sealed class Shape permits Circle\nclass Circle extends Shape\n").unwrap();
    let shape = checker.graph().reflect("Shape").unwrap();
    assert_eq!(shape.actual_subtypes(), vec!["Circle"]);
    let span = checker.declaration_span("Circle").unwrap();
    assert_eq!(checker.declaration_at(span.start), Some("Circle"));
}

// ========================================
// Tuples
// ========================================

#[test]
fn test_tuple_scenario() {
    let source = r#"
let t: (string, int) = ("foo", 1)
t[0] = 42
t[0] = "bar"
read t[0]
assert t[0] == "bar"
"#;
    let errors = check_str(source).err().unwrap();
    assert_eq!(codes(&errors), vec!["sealant::type_mismatch"]);
    assert_eq!(errors[0].kind, ErrorKind::Type);
    assert_eq!(&source[errors[0].span.start..errors[0].span.end], "42");

    // Run again without the bad write to inspect state.
    let checker = check_str("let t: (string, int) = (\"foo\", 1)\nt[0] = \"bar\"\nread t[0]\n").unwrap();
    assert_eq!(checker.reads().len(), 1);
    assert_eq!(checker.reads()[0].value, Value::String("bar".to_string()));
}

#[test]
fn test_widen_then_write() {
    let source = r#"
let t: (string, int) = ("foo", 1)
widen t to (string|int, int)
widen t to (string|int, int)
t[0] = 42
assert t[0] == 42
"#;
    let checker = check_str(source).unwrap();
    let t = checker.tuple("t").unwrap();
    assert_eq!(t.constraints(), Ty::Tuple(vec![Ty::union([Ty::INT, Ty::STRING]), Ty::INT]));
}

#[test]
fn test_tuple_errors() {
    let source = r#"
let one: (int) = (1)
let t: (int, int) = (1, 2, 3)
let u: (int, int) = (1, 2)
read u[5]
read nope[0]
assert u[1] == 3
widen u to (int, string)
let v: (Missing, int) = (new Missing, 1)
"#;
    let errors = check_str(source).err().unwrap();
    assert_eq!(
        codes(&errors),
        vec![
            "sealant::arity_violation",
            "sealant::arity_violation",
            "sealant::index_out_of_range",
            "sealant::unknown_tuple",
            "sealant::assertion_failed",
            "sealant::type_mismatch",
            "sealant::unknown_declaration",
        ]
    );
}

#[test]
fn test_objects_in_tuples() {
    let source = r#"
sealed class Shape permits Circle
class Circle extends Shape
class Label
interface Drawable
let t: (Shape, int) = (new Circle, 1)
let bad: (Shape, int) = (new Label, 1)
let worse: (Drawable, int) = (new Drawable, 1)
"#;
    let errors = check_str(source).err().unwrap();
    assert_eq!(errors.len(), 2);
    assert_eq!(errors[0].code, Some("sealant::type_mismatch"));
    assert!(errors[1].message.contains("Cannot instantiate interface 'Drawable'"));
}

#[test]
fn test_numeric_widening_flag() {
    let source = "let t: (float, float) = (1, 2.5)\n";
    assert!(check_str(source).is_ok());
    let strict = CheckConfig::new().with_numeric_widening(false);
    assert!(check_with(source, &strict).is_err());
}

#[test]
fn test_max_errors_caps_output() {
    let source = "read a[0]\nread b[0]\nread c[0]\nread d[0]\n";
    let config = CheckConfig::new().with_max_errors(Some(2));
    let errors = check_with(source, &config).err().unwrap();
    assert_eq!(errors.len(), 2);
}

#[test]
fn test_failed_statement_keeps_previous_binding() {
    let source = "let t: (int, int) = (1, 2)\nlet t: (int, int) = (1, \"x\")\nassert t[1] == 2\n";
    let errors = check_str(source).err().unwrap();
    assert_eq!(codes(&errors), vec!["sealant::type_mismatch"]);
}

#[test]
fn test_tuple_values_below_minimum_arity() {
    let source = "let t: (mixed, int) = ((1), 2)\nlet u: (mixed, int) = ((), 2)\n";
    let errors = check_str(source).err().unwrap();
    assert_eq!(
        codes(&errors),
        vec!["sealant::arity_violation", "sealant::arity_violation"]
    );
    assert_eq!(&source[errors[0].span.start..errors[0].span.end], "(1)");
    assert!(errors[1].message.contains("at least 2"), "{}", errors[1].message);
    assert!(errors[1].message.contains("found 0"), "{}", errors[1].message);
}
