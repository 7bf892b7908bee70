// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;

fn sample_flow() -> FlowDef {
    FlowDef::new("default").with_label("Default").with_breadcrumb_links(true).with_steps([
        StepDefinition::new("login", "Login").hidden(),
        StepDefinition::new("order_information", "Order information"),
        StepDefinition::new("review", "Review"),
    ])
}

#[test]
fn visible_steps_keep_declaration_order() {
    let flow = sample_flow();
    let ids: Vec<&str> = flow.visible_steps().keys().map(|id| id.as_str()).collect();
    assert_eq!(ids, vec!["login", "order_information", "review"]);
}

#[test]
fn step_lookup_by_id_and_index() {
    let flow = sample_flow();
    assert_eq!(flow.get_step("review").map(|s| s.label.as_str()), Some("Review"));
    assert_eq!(flow.step_index("login"), Some(0));
    assert_eq!(flow.step_index("review"), Some(2));
    assert_eq!(flow.step_index("payment"), None);
    assert_eq!(flow.first_step().map(|s| s.id.as_str()), Some("login"));
}

#[test]
fn repeated_step_replaces_in_place() {
    let flow = sample_flow().with_steps([StepDefinition::new("login", "Sign in")]);
    assert_eq!(flow.step_index("login"), Some(0));
    assert_eq!(flow.get_step("login").map(|s| s.label.as_str()), Some("Sign in"));
    assert_eq!(flow.visible_steps().len(), 3);
}

#[test]
fn configuration_exposes_links_flag() {
    assert!(sample_flow().configuration().display_progress_breadcrumb_links);
    assert!(!FlowDef::new("plain").configuration().display_progress_breadcrumb_links);
}

#[test]
fn label_defaults_to_id() {
    assert_eq!(FlowDef::new("express").label, "express");
}

#[test]
fn cache_tag_names_the_flow() {
    assert_eq!(sample_flow().cache_tags(), vec!["checkout_flow:default".to_string()]);
}

#[test]
fn config_rejects_unknown_keys() {
    let err = serde_json::from_str::<FlowConfig>(r#"{"display_progress_breadcrumbs": true}"#)
        .unwrap_err();
    assert!(err.to_string().contains("unknown field"), "{}", err);
}
