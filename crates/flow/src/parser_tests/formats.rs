// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use crate::{parse_flows, parse_flows_with_format, CheckoutFlow, FlowCatalog, Format};
use std::path::Path;

const STANDARD_TOML: &str = r#"
[flow.default]
label = "Default checkout"

[flow.default.config]
display_progress_breadcrumb_links = true

[[flow.default.step]]
id = "login"
label = "Login"
hidden = true

[[flow.default.step]]
id = "order_information"
label = "Order information"

[[flow.default.step]]
id = "review"
label = "Review"

[[flow.default.step]]
id = "complete"
label = "Complete"
"#;

const STANDARD_HCL: &str = r#"
flow "default" {
  label = "Default checkout"

  config {
    display_progress_breadcrumb_links = true
  }

  step "login" {
    label  = "Login"
    hidden = true
  }

  step "order_information" {
    label = "Order information"
  }

  step "review" {
    label = "Review"
  }

  step "complete" {
    label = "Complete"
  }
}
"#;

const STANDARD_JSON: &str = r#"{
  "flow": {
    "default": {
      "label": "Default checkout",
      "config": { "display_progress_breadcrumb_links": true },
      "step": [
        { "id": "login", "label": "Login", "hidden": true },
        { "id": "order_information", "label": "Order information" },
        { "id": "review", "label": "Review" },
        { "id": "complete", "label": "Complete" }
      ]
    }
  }
}"#;

fn assert_standard(catalog: &FlowCatalog) {
    let flow = catalog.get("default").unwrap();
    assert_eq!(flow.label, "Default checkout");
    assert!(flow.configuration().display_progress_breadcrumb_links);

    let steps: Vec<(&str, &str, bool)> = flow
        .visible_steps()
        .values()
        .map(|s| (s.id.as_str(), s.label.as_str(), s.hidden))
        .collect();
    assert_eq!(
        steps,
        vec![
            ("login", "Login", true),
            ("order_information", "Order information", false),
            ("review", "Review", false),
            ("complete", "Complete", false),
        ]
    );
}

#[yare::parameterized(
    toml = { STANDARD_TOML, Format::Toml },
    hcl  = { STANDARD_HCL,  Format::Hcl },
    json = { STANDARD_JSON, Format::Json },
)]
fn parse_standard_flow(input: &str, format: Format) {
    let catalog = parse_flows_with_format(input, format).unwrap();
    assert_standard(&catalog);
}

#[test]
fn parse_flows_defaults_to_toml() {
    assert_standard(&parse_flows(STANDARD_TOML).unwrap());
}

#[test]
fn toml_step_map_keeps_document_order() {
    let toml = r#"
[flow.express.step.shipping]
label = "Shipping"

[flow.express.step.payment]
label = "Payment"

[flow.express.step.complete]
label = "Complete"
"#;
    let catalog = parse_flows(toml).unwrap();
    let flow = catalog.get("express").unwrap();
    let ids: Vec<&str> = flow.visible_steps().keys().map(|k| k.as_str()).collect();
    assert_eq!(ids, vec!["shipping", "payment", "complete"]);
}

#[test]
fn config_defaults_to_links_off() {
    let toml = r#"
[[flow.plain.step]]
id = "review"
label = "Review"
"#;
    let catalog = parse_flows(toml).unwrap();
    let flow = catalog.get("plain").unwrap();
    assert!(!flow.configuration().display_progress_breadcrumb_links);
    assert_eq!(flow.label, "plain");
    assert!(!flow.default);
}

#[test]
fn several_flows_keep_file_order() {
    let hcl = r#"
flow "b" {
  step "review" {
    label = "Review"
  }
}

flow "a" {
  default = true

  step "review" {
    label = "Review"
  }
}
"#;
    let catalog = parse_flows_with_format(hcl, Format::Hcl).unwrap();
    let ids: Vec<&str> = catalog.iter().map(|f| f.id.as_str()).collect();
    assert_eq!(ids, vec!["b", "a"]);
    assert_eq!(catalog.default_flow().map(|f| f.id.as_str()), Some("a"));
}

#[test]
fn empty_file_has_no_flows() {
    assert!(parse_flows("").unwrap().is_empty());
}

#[yare::parameterized(
    toml  = { "flows/a.toml", Some(Format::Toml) },
    hcl   = { "a.hcl",        Some(Format::Hcl) },
    json  = { "a.json",       Some(Format::Json) },
    other = { "a.yaml",       None },
    none  = { "Makefile",     None },
)]
fn format_from_extension(path: &str, expected: Option<Format>) {
    assert_eq!(crate::format_for_path(Path::new(path)), expected);
}
