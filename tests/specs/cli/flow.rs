//! `ckb flow` specs

use crate::prelude::*;

#[test]
fn list_shows_flows_from_project_directory() {
    let temp = Project::with_default_flow();
    temp.ckb()
        .args(&["flow", "list"])
        .passes()
        .stdout_has("ID")
        .stdout_has("default")
        .stdout_has("Default checkout");
}

#[test]
fn list_without_flows_says_so() {
    let temp = Project::empty();
    temp.ckb().args(&["flow", "list"]).passes().stdout_has("No flows found.");
}

#[test]
fn list_json_reports_counts_and_default() {
    let temp = Project::with_default_flow();
    temp.file(
        ".ckb/flows/express.hcl",
        r#"
flow "express" {
  label = "Express"
  step "review" {
    label = "Review"
  }
  step "complete" {
    label = "Complete"
  }
}
"#,
    );

    let outcome = temp.ckb().args(&["flow", "list", "-o", "json"]).passes();
    let json = outcome.json();
    let flows = json.as_array().unwrap();
    assert_eq!(flows.len(), 2);
    assert_eq!(flows[0]["id"], "default");
    assert_eq!(flows[0]["steps"], 5);
    assert_eq!(flows[0]["default"], true);
    assert_eq!(flows[0]["breadcrumb_links"], true);
    assert_eq!(flows[1]["id"], "express");
    assert_eq!(flows[1]["steps"], 2);
    assert_eq!(flows[1]["default"], false);
    assert_eq!(flows[1]["breadcrumb_links"], false);
}

#[test]
fn flows_flag_overrides_project_directory() {
    let temp = Project::empty();
    temp.file("elsewhere/default.toml", DEFAULT_FLOW);
    let dir = temp.path().join("elsewhere");
    temp.ckb()
        .args(&["--flows", dir.to_str().unwrap(), "flow", "list"])
        .passes()
        .stdout_has("Default checkout");
}

#[test]
fn flows_env_var_overrides_project_directory() {
    let temp = Project::empty();
    temp.file("elsewhere/default.toml", DEFAULT_FLOW);
    temp.ckb()
        .env("CKB_FLOWS_DIR", temp.path().join("elsewhere"))
        .args(&["flow", "list"])
        .passes()
        .stdout_has("Default checkout");
}

#[test]
fn show_lists_steps_in_order() {
    let temp = Project::with_default_flow();
    let outcome = temp.ckb().args(&["flow", "show", "default"]).passes();
    let stdout = outcome.stdout_lines().join("\n");
    let positions: Vec<usize> = ["login", "order_information", "review", "payment", "complete"]
        .iter()
        .map(|id| stdout.find(id).unwrap())
        .collect();
    assert!(positions.windows(2).all(|w| w[0] < w[1]), "{}", stdout);
    assert!(stdout.contains("breadcrumb links: on"));
}

#[test]
fn show_json_keeps_step_order() {
    let temp = Project::with_default_flow();
    let outcome = temp.ckb().args(&["flow", "show", "default", "-o", "json"]).passes();
    let json = outcome.json();
    assert_eq!(json["steps"].as_object().unwrap().len(), 5);
    assert_eq!(json["config"]["display_progress_breadcrumb_links"], true);

    let stdout = outcome.stdout_lines().join("\n");
    let positions: Vec<usize> =
        ["\"login\"", "\"order_information\"", "\"review\"", "\"payment\"", "\"complete\""]
            .iter()
            .map(|key| stdout.find(key).unwrap())
            .collect();
    assert!(positions.windows(2).all(|w| w[0] < w[1]), "{}", stdout);
}

#[test]
fn show_unknown_flow_is_a_usage_error() {
    let temp = Project::with_default_flow();
    temp.ckb().args(&["flow", "show", "nope"]).fails().code(2).stderr_has("unknown flow 'nope'");
}

#[test]
fn invalid_flow_file_is_skipped_with_warning() {
    let temp = Project::with_default_flow();
    temp.file(".ckb/flows/broken.toml", "[flow.broken]\nlabel = \"Broken\"\n");
    temp.ckb()
        .args(&["flow", "list"])
        .passes()
        .stdout_has("default")
        .stdout_lacks("Broken")
        .stderr_has("skipping invalid flow file");
}

#[test]
fn duplicate_flow_across_files_is_a_usage_error() {
    let temp = Project::with_default_flow();
    temp.file(".ckb/flows/again.toml", DEFAULT_FLOW);
    temp.ckb().args(&["flow", "list"]).fails().code(2).stderr_has("default");
}
