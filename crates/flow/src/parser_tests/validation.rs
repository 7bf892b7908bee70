// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use crate::{parse_flows, parse_flows_with_format, Format, ParseError};

fn invalid_message(input: &str, format: Format) -> String {
    let err = parse_flows_with_format(input, format).unwrap_err();
    assert!(matches!(err, ParseError::InvalidFormat { .. }), "unexpected error: {}", err);
    err.to_string()
}

#[test]
fn error_flow_without_steps() {
    let msg = invalid_message("[flow.empty]\nlabel = \"Empty\"\n", Format::Toml);
    assert!(msg.contains("flow.empty"), "error should mention location: {}", msg);
    assert!(msg.contains("at least one step"), "{}", msg);
}

#[test]
fn error_duplicate_step_id() {
    let toml = r#"
[[flow.default.step]]
id = "review"
label = "Review"

[[flow.default.step]]
id = "review"
label = "Review again"
"#;
    let msg = invalid_message(toml, Format::Toml);
    assert!(msg.contains("flow.default.step.review"), "{}", msg);
    assert!(msg.contains("duplicate step 'review'"), "{}", msg);
}

#[test]
fn error_empty_label() {
    let hcl = r#"
flow "default" {
  step "review" {
    label = "  "
  }
}
"#;
    let msg = invalid_message(hcl, Format::Hcl);
    assert!(msg.contains("flow.default.step.review.label"), "{}", msg);
    assert!(msg.contains("label must not be empty"), "{}", msg);
}

#[yare::parameterized(
    uppercase = { "Review" },
    space     = { "order info" },
    slash     = { "a/b" },
    empty     = { "" },
)]
fn error_bad_step_id(id: &str) {
    let toml = format!("[[flow.default.step]]\nid = \"{}\"\nlabel = \"Step\"\n", id);
    let msg = invalid_message(&toml, Format::Toml);
    assert!(msg.contains("id"), "{}", msg);
}

#[test]
fn error_bad_flow_id() {
    let toml = "[[flow.Default.step]]\nid = \"review\"\nlabel = \"Review\"\n";
    let msg = invalid_message(toml, Format::Toml);
    assert!(msg.contains("flow.Default"), "{}", msg);
    assert!(msg.contains("invalid character 'D'"), "{}", msg);
}

#[test]
fn error_two_defaults_in_one_file() {
    let toml = r#"
[flow.a]
default = true
[[flow.a.step]]
id = "review"
label = "Review"

[flow.b]
default = true
[[flow.b.step]]
id = "review"
label = "Review"
"#;
    let msg = invalid_message(toml, Format::Toml);
    assert!(msg.contains("flow.b.default"), "{}", msg);
    assert!(msg.contains("'a' is already the default"), "{}", msg);
}

#[test]
fn misspelled_config_key_is_rejected() {
    let toml = r#"
[flow.default.config]
display_progress_breadcrumbs = true

[[flow.default.step]]
id = "review"
label = "Review"
"#;
    let err = parse_flows(toml).unwrap_err();
    assert!(matches!(err, ParseError::Toml(_)), "unexpected error: {}", err);
    assert!(err.to_string().contains("display_progress_breadcrumbs"), "{}", err);
}

#[test]
fn unknown_flow_key_is_rejected() {
    let hcl = r#"
flow "default" {
  colour = "blue"

  step "review" {
    label = "Review"
  }
}
"#;
    let err = parse_flows_with_format(hcl, Format::Hcl).unwrap_err();
    assert!(matches!(err, ParseError::Hcl(_)), "unexpected error: {}", err);
}

#[test]
fn malformed_json_is_a_json_error() {
    let err = parse_flows_with_format("{", Format::Json).unwrap_err();
    assert!(matches!(err, ParseError::Json(_)));
}

#[test]
fn duplicate_flow_key_in_json_is_rejected() {
    let json = r#"{
  "flow": {
    "default": { "step": [{ "id": "review", "label": "Review" }] },
    "default": { "step": [{ "id": "payment", "label": "Payment" }] }
  }
}"#;
    let err = parse_flows_with_format(json, Format::Json).unwrap_err();
    assert!(matches!(err, ParseError::Json(_)), "unexpected error: {}", err);
    assert!(err.to_string().contains("duplicate key 'default'"), "{}", err);
}

#[test]
fn duplicate_step_key_in_json_map_is_rejected() {
    let json = r#"{
  "flow": {
    "default": {
      "step": {
        "review": { "label": "Review" },
        "review": { "label": "Review again" }
      }
    }
  }
}"#;
    let err = parse_flows_with_format(json, Format::Json).unwrap_err();
    assert!(matches!(err, ParseError::Json(_)), "unexpected error: {}", err);
}
