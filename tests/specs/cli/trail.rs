//! `ckb trail` specs

use crate::prelude::*;
use similar_asserts::assert_eq;

#[test]
fn draft_order_at_review() {
    let temp = Project::with_default_flow();
    let outcome =
        temp.ckb().args(&["trail", "--order", "7", "--checkout-step", "review"]).passes();
    assert_eq!(
        outcome.stdout_lines(),
        vec![
            "  Home  /",
            "  Shopping cart  /cart",
            "  Order information  /checkout/7/order_information  [breadcrumb-checkout-item-previous]",
            "* Review  [breadcrumb-checkout-item-current]",
            "  Complete  [breadcrumb-checkout-item-next]",
        ]
    );
}

#[test]
fn fresh_order_starts_on_hidden_login() {
    let temp = Project::with_default_flow();
    let outcome = temp.ckb().args(&["trail", "--order", "7"]).passes();
    assert_eq!(
        outcome.stdout_lines(),
        vec![
            "  Home  /",
            "  Shopping cart  /cart",
            "* Login  [breadcrumb-checkout-item-current]",
            "  Order information  [breadcrumb-checkout-item-next]",
            "  Review  [breadcrumb-checkout-item-next]",
            "  Complete  [breadcrumb-checkout-item-next]",
        ]
    );
}

#[test]
fn completed_order_links_nothing() {
    let temp = Project::with_default_flow();
    let outcome = temp
        .ckb()
        .args(&["trail", "--order", "7", "--checkout-step", "review", "--state", "completed"])
        .passes();
    assert_eq!(
        outcome.stdout_lines(),
        vec![
            "  Home  /",
            "  Shopping cart  /cart",
            "  Order information  [breadcrumb-checkout-item-previous]",
            "  Review  [breadcrumb-checkout-item-previous]",
            "* Complete  [breadcrumb-checkout-item-current]",
        ]
    );
}

#[test]
fn requested_earlier_step_is_honored() {
    let temp = Project::with_default_flow();
    temp.ckb()
        .args(&["trail", "--order", "7", "--checkout-step", "review", "--step", "order_information"])
        .passes()
        .stdout_has("* Order information")
        .stdout_has("  Review  [breadcrumb-checkout-item-next]");
}

#[test]
fn requested_later_step_is_refused() {
    let temp = Project::with_default_flow();
    temp.ckb()
        .args(&["trail", "--order", "7", "--checkout-step", "order_information", "--step", "complete"])
        .passes()
        .stdout_has("* Order information")
        .stdout_has("  Complete  [breadcrumb-checkout-item-next]");
}

#[test]
fn other_routes_get_the_home_link_only() {
    let temp = Project::with_default_flow();
    let outcome =
        temp.ckb().args(&["trail", "--order", "7", "--route", "cart.page"]).passes();
    assert_eq!(outcome.stdout_lines(), vec!["  Home  /"]);
}

#[test]
fn flow_without_breadcrumb_links_falls_back() {
    let temp = Project::empty();
    temp.file(
        ".ckb/flows/plain.toml",
        r#"
[flow.plain]
[[flow.plain.step]]
id = "review"
label = "Review"
"#,
    );
    let outcome = temp.ckb().args(&["trail", "--order", "7"]).passes();
    assert_eq!(outcome.stdout_lines(), vec!["  Home  /"]);
}

#[test]
fn no_flows_warns_and_falls_back() {
    let temp = Project::empty();
    temp.ckb()
        .args(&["trail", "--order", "7"])
        .passes()
        .stdout_has("Home")
        .stderr_has("no checkout flows configured");
}

#[test]
fn pinned_flow_is_used() {
    let temp = Project::with_default_flow();
    temp.file(
        ".ckb/flows/express.json",
        r#"{
  "flow": {
    "express": {
      "config": { "display_progress_breadcrumb_links": true },
      "step": [
        { "id": "shipping", "label": "Shipping" },
        { "id": "complete", "label": "Done" }
      ]
    }
  }
}"#,
    );
    temp.ckb()
        .args(&["trail", "--order", "7", "--flow", "express"])
        .passes()
        .stdout_has("* Shipping")
        .stdout_has("  Done  [breadcrumb-checkout-item-next]")
        .stdout_lacks("Order information");
}

#[test]
fn unknown_pinned_flow_uses_default_with_warning() {
    let temp = Project::with_default_flow();
    temp.ckb()
        .args(&["trail", "--order", "7", "--flow", "gone"])
        .passes()
        .stdout_has("* Login")
        .stderr_has("unknown flow");
}

#[test]
fn json_output_carries_cache_metadata() {
    let temp = Project::with_default_flow();
    let outcome = temp
        .ckb()
        .args(&["trail", "--order", "7", "--checkout-step", "review", "-o", "json"])
        .passes();
    let json = outcome.json();

    let entries = json["entries"].as_array().unwrap();
    assert_eq!(entries.len(), 5);
    assert_eq!(entries[0]["target"], "<front>");
    assert!(entries[0].get("class").is_none());
    assert_eq!(entries[2]["target"], "checkout.form?order=7&step=order_information");
    assert_eq!(entries[2]["href"], "/checkout/7/order_information");
    assert_eq!(entries[3]["position"], "current");
    assert_eq!(entries[3]["class"], "breadcrumb-checkout-item-current");
    assert_eq!(entries[3]["href"], serde_json::Value::Null);

    assert_eq!(json["cache"]["tags"], serde_json::json!(["checkout_flow:default", "order:7"]));
    assert_eq!(
        json["cache"]["contexts"],
        serde_json::json!(["route", "url.path", "url.query_args", "user"])
    );
}

#[test]
fn order_ids_with_query_delimiters_are_escaped() {
    let temp = Project::with_default_flow();
    let outcome = temp
        .ckb()
        .args(&["trail", "--order", "7&step=evil", "--checkout-step", "review", "-o", "json"])
        .passes();
    let json = outcome.json();
    let entries = json["entries"].as_array().unwrap();
    assert_eq!(entries[2]["target"], "checkout.form?order=7%26step%3Devil&step=order_information");
    assert_eq!(entries[2]["href"], "/checkout/7%26step%3Devil/order_information");
}
