//! Layering guardrails for the workspace crates.
//!
//! `sealant_core` holds plain registries and must stay dependency-free. `sealant_syntax` may depend on
//! `sealant_core` and logging only; the checkers, CLI and LSP live in the root crate.

fn dependencies(manifest: &str) -> Vec<String> {
    let mut in_dependencies = false;
    let mut deps = Vec::new();

    for raw_line in manifest.lines() {
        let line = raw_line.trim();
        // Track when we enter/exit the `[dependencies]` table.
        if line.starts_with('[') {
            in_dependencies = line == "[dependencies]";
            continue;
        }
        if !in_dependencies || line.is_empty() || line.starts_with('#') {
            continue;
        }

        // Strip inline comments for robustness.
        let line_no_comment = line.split('#').next().unwrap_or("").trim();
        if let Some((name, _)) = line_no_comment.split_once('=') {
            deps.push(name.trim().to_string());
        }
    }
    deps
}

#[test]
fn core_registries_have_no_dependencies() {
    let deps = dependencies(include_str!("../crates/sealant_core/Cargo.toml"));
    assert!(deps.is_empty(), "sealant_core must not have dependencies, found {deps:?}");
}

#[test]
fn syntax_crate_depends_only_on_core_and_logging() {
    let deps = dependencies(include_str!("../crates/sealant_syntax/Cargo.toml"));
    for dep in &deps {
        assert!(
            dep == "sealant_core" || dep == "tracing",
            "sealant_syntax must not depend on `{dep}`; checker, CLI and LSP dependencies belong to the root crate"
        );
    }
}

#[test]
fn root_crate_uses_the_syntax_crate() {
    let deps = dependencies(include_str!("../Cargo.toml"));
    assert!(deps.iter().any(|d| d == "sealant_syntax"));
    assert!(deps.iter().any(|d| d == "sealant_core"));
}
