// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use ckb_core::test_support::standard_steps;
use ckb_core::{routes, OrderState};

fn builder_with_flow(flow: Option<FlowDef>) -> CheckoutBreadcrumbBuilder<FixedResolver> {
    CheckoutBreadcrumbBuilder::new(FixedResolver { flow, current: Some(StepId::new("review")) })
}

#[test]
fn applies_on_checkout_form_with_links_enabled() {
    let builder = builder_with_flow(Some(flow_with(standard_steps(), true)));
    assert!(builder.applies(&context("1")));
}

#[yare::parameterized(
    front_page = { routes::FRONT },
    cart_page  = { routes::CART },
    other      = { "user.login" },
)]
fn not_on_other_routes(route: &str) {
    let builder = builder_with_flow(Some(flow_with(standard_steps(), true)));
    let context = CheckoutContext::new(route).with_order(Order::new("1"));
    assert!(!builder.applies(&context));
}

#[test]
fn not_without_order() {
    let builder = builder_with_flow(Some(flow_with(standard_steps(), true)));
    assert!(!builder.applies(&CheckoutContext::new(routes::CHECKOUT_FORM)));
}

#[test]
fn not_without_flow() {
    let builder = builder_with_flow(None);
    assert!(!builder.applies(&context("1")));
}

#[yare::parameterized(
    draft     = { OrderState::Draft },
    completed = { OrderState::Completed },
    canceled  = { OrderState::Canceled },
)]
fn not_when_links_disabled(state: OrderState) {
    let builder = builder_with_flow(Some(flow_with(standard_steps(), false)));
    let order = Order::new("1").with_state(state).with_checkout_step("review");
    let context = CheckoutContext::checkout(order, Some(StepId::new("login")));
    assert!(!builder.applies(&context));
}
