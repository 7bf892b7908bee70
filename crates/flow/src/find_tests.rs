// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use std::fs;
use tempfile::TempDir;

fn write(dir: &Path, name: &str, content: &str) {
    let path = dir.join(name);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, content).unwrap();
}

const DEFAULT_TOML: &str = r#"
[flow.default]
default = true

[[flow.default.step]]
id = "review"
label = "Review"
"#;

const EXPRESS_HCL: &str = r#"
flow "express" {
  step "payment" {
    label = "Payment"
  }
}
"#;

#[test]
fn missing_dir_is_empty_catalog() {
    let tmp = TempDir::new().unwrap();
    let catalog = load_catalog(&tmp.path().join("nope")).unwrap();
    assert!(catalog.is_empty());
}

#[test]
fn loads_mixed_formats_recursively() {
    let tmp = TempDir::new().unwrap();
    write(tmp.path(), "a.toml", DEFAULT_TOML);
    write(tmp.path(), "nested/b.hcl", EXPRESS_HCL);
    write(tmp.path(), "README.md", "not a flow");

    let catalog = load_catalog(tmp.path()).unwrap();
    assert_eq!(catalog.len(), 2);
    assert!(catalog.get("express").is_some());
    assert_eq!(catalog.default_flow().map(|f| f.id.as_str()), Some("default"));
}

#[test]
fn invalid_file_is_skipped() {
    let tmp = TempDir::new().unwrap();
    write(tmp.path(), "a.toml", DEFAULT_TOML);
    write(tmp.path(), "broken.toml", "[flow.broken\n");

    let catalog = load_catalog(tmp.path()).unwrap();
    let ids: Vec<&str> = catalog.iter().map(|f| f.id.as_str()).collect();
    assert_eq!(ids, vec!["default"]);
}

#[test]
fn duplicate_flow_across_files_fails() {
    let tmp = TempDir::new().unwrap();
    write(tmp.path(), "a.toml", DEFAULT_TOML);
    write(tmp.path(), "b.toml", DEFAULT_TOML.replace("default = true\n", "").as_str());

    let err = load_catalog(tmp.path()).unwrap_err();
    assert!(matches!(err, FindError::Catalog(CatalogError::DuplicateFlow { .. })));
    assert!(err.to_string().contains("b.toml"), "{}", err);
}
