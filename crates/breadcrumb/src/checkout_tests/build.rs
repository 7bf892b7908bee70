// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use ckb_core::test_support::{standard_steps, steps};
use ckb_core::routes;
use similar_asserts::assert_eq;

fn home() -> (String, String, Option<String>) {
    row("Home", "<front>", None)
}

fn cart() -> (String, String, Option<String>) {
    row("Shopping cart", "cart.page", None)
}

#[test]
fn hidden_previous_step_is_skipped() {
    let b = builder(steps(&[("a", "A", false), ("b", "B", true), ("c", "C", false)]), "c");
    let breadcrumb = b.build(&context("7"));
    assert_eq!(
        summary(&breadcrumb),
        vec![
            home(),
            cart(),
            row("A", "checkout.form?order=7&step=a", Some("previous")),
            row("C", "<nolink>", Some("current")),
        ]
    );
}

#[test]
fn unknown_current_step_leaves_leading_entries_only() {
    let b = builder(steps(&[("a", "A", false), ("b", "B", false)]), "x");
    let breadcrumb = b.build(&context("7"));
    assert_eq!(summary(&breadcrumb), vec![home(), cart()]);
}

#[test]
fn completed_order_shows_previous_steps_as_text() {
    let b = builder(steps(&[("a", "A", false), ("complete", "B", false)]), "complete");
    let breadcrumb = b.build(&context("7"));
    assert_eq!(
        summary(&breadcrumb),
        vec![
            home(),
            cart(),
            row("A", "<nolink>", Some("previous")),
            row("B", "<nolink>", Some("current")),
        ]
    );
}

#[test]
fn standard_flow_mid_checkout() {
    let b = builder(standard_steps(), "review");
    let breadcrumb = b.build(&context("42"));
    assert_eq!(
        summary(&breadcrumb),
        vec![
            home(),
            cart(),
            row("Order information", "checkout.form?order=42&step=order_information", Some("previous")),
            row("Review", "<nolink>", Some("current")),
            row("Complete", "<nolink>", Some("next")),
        ]
    );
}

#[test]
fn hidden_current_step_is_shown() {
    let b = builder(standard_steps(), "payment");
    let breadcrumb = b.build(&context("42"));
    assert_eq!(
        summary(&breadcrumb),
        vec![
            home(),
            cart(),
            row("Order information", "checkout.form?order=42&step=order_information", Some("previous")),
            row("Review", "checkout.form?order=42&step=review", Some("previous")),
            row("Payment", "<nolink>", Some("current")),
            row("Complete", "<nolink>", Some("next")),
        ]
    );
}

#[test]
fn hidden_first_step_while_current() {
    let b = builder(standard_steps(), "login");
    let breadcrumb = b.build(&context("42"));
    assert_eq!(
        breadcrumb.labels(),
        vec!["Home", "Shopping cart", "Login", "Order information", "Review", "Complete"]
    );
    assert!(breadcrumb.entries[2..].iter().all(|e| !e.is_link()));
}

#[test]
fn completed_standard_flow() {
    let b = builder(standard_steps(), "complete");
    let breadcrumb = b.build(&context("42"));
    assert_eq!(
        summary(&breadcrumb),
        vec![
            home(),
            cart(),
            row("Order information", "<nolink>", Some("previous")),
            row("Review", "<nolink>", Some("previous")),
            row("Complete", "<nolink>", Some("current")),
        ]
    );
}

#[test]
fn leading_entries_link_to_front_and_cart() {
    let b = builder(standard_steps(), "review");
    let breadcrumb = b.build(&context("1"));
    assert_eq!(breadcrumb.entries[0].target.route_name(), routes::FRONT);
    assert_eq!(breadcrumb.entries[1].target.route_name(), routes::CART);
    assert!(breadcrumb.entries[..2].iter().all(|e| e.position.is_none()));
}

#[test]
fn declares_cache_dependencies_and_contexts() {
    let b = builder(standard_steps(), "review");
    let breadcrumb = b.build(&context("42"));
    let tags: Vec<&str> = breadcrumb.cache.tags.iter().map(String::as_str).collect();
    assert_eq!(tags, vec!["checkout_flow:default", "order:42"]);
    for ctx in CACHE_CONTEXTS {
        assert!(breadcrumb.cache.has_context(ctx), "missing cache context {}", ctx);
    }
}

#[test]
fn leading_labels_are_translated() {
    struct French;
    impl Translator for French {
        fn translate(&self, source: &str) -> String {
            match source {
                "Home" => "Accueil".to_string(),
                "Shopping cart" => "Panier".to_string(),
                other => other.to_string(),
            }
        }
    }

    let b = builder(standard_steps(), "review").with_translator(French);
    let breadcrumb = b.build(&context("1"));
    assert_eq!(breadcrumb.labels()[..3].to_vec(), vec!["Accueil", "Panier", "Order information"]);
}

#[test]
fn build_without_order_is_leading_only() {
    let b = builder(standard_steps(), "review");
    let breadcrumb = b.build(&CheckoutContext::new(routes::CHECKOUT_FORM));
    assert_eq!(summary(&breadcrumb), vec![home(), cart()]);
    assert!(breadcrumb.cache.tags.is_empty());
}

#[test]
fn build_without_flow_is_leading_only() {
    let b = CheckoutBreadcrumbBuilder::new(FixedResolver { flow: None, current: None });
    let breadcrumb = b.build(&context("3"));
    assert_eq!(summary(&breadcrumb), vec![home(), cart()]);
    assert!(breadcrumb.cache.has_tag("order:3"));
    assert!(!breadcrumb.cache.has_tag("checkout_flow:default"));
}

#[test]
fn build_without_current_step_is_leading_only() {
    let b = CheckoutBreadcrumbBuilder::new(FixedResolver {
        flow: Some(flow_with(standard_steps(), true)),
        current: None,
    });
    let breadcrumb = b.build(&context("3"));
    assert_eq!(breadcrumb.len(), 2);
    assert!(breadcrumb.cache.has_tag("checkout_flow:default"));
}

#[test]
fn builds_through_catalog_resolver() {
    let mut catalog = ckb_flow::FlowCatalog::new();
    catalog.insert(flow_with(standard_steps(), true));
    let b = CheckoutBreadcrumbBuilder::new(crate::CatalogResolver::new(catalog));

    let order = Order::new("9").with_checkout_step("review");
    let context = CheckoutContext::checkout(order, Some(StepId::new("order_information")));
    assert!(b.applies(&context));
    assert_eq!(
        summary(&b.build(&context)),
        vec![
            home(),
            cart(),
            row("Order information", "<nolink>", Some("current")),
            row("Review", "<nolink>", Some("next")),
            row("Complete", "<nolink>", Some("next")),
        ]
    );
}
