//! Layering guardrails for the workspace crates.
//!
//! `pvc_core` is the bottom layer and has no dependencies. `pvc_syntax` may depend on `pvc_core` but never on the
//! compiler crate (`pvc`). These tests scan the member manifests and fail if that layering is broken.

/// Dependency names listed in the `[dependencies]` table of a manifest.
fn dependency_names(manifest: &str) -> Vec<String> {
    let mut in_dependencies = false;
    let mut names = Vec::new();

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
            names.push(name.trim().to_string());
        }
    }

    names
}

#[test]
fn core_crate_has_no_dependencies() {
    let manifest = include_str!("../crates/pvc_core/Cargo.toml");
    assert_eq!(dependency_names(manifest), Vec::<String>::new());
}

#[test]
fn syntax_crate_does_not_depend_on_compiler() {
    let manifest = include_str!("../crates/pvc_syntax/Cargo.toml");
    let names = dependency_names(manifest);
    assert!(names.iter().any(|n| n == "pvc_core"));
    assert!(
        !names.iter().any(|n| n == "pvc"),
        "`pvc_syntax` must not depend on the compiler crate"
    );
}

#[test]
fn compiler_uses_shared_frontend_crates() {
    let names = dependency_names(include_str!("../Cargo.toml"));
    assert!(names.iter().any(|n| n == "pvc_core"));
    assert!(names.iter().any(|n| n == "pvc_syntax"));
}
