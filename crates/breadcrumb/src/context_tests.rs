// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;

#[yare::parameterized(
    order_only     = { "7",           None,           "/checkout/7" },
    with_step      = { "7",           Some("review"), "/checkout/7/review" },
    escaped_order  = { "7/&x=1",      Some("review"), "/checkout/7%2F%26x%3D1/review" },
)]
fn checkout_context_path(order: &str, step: Option<&str>, expected: &str) {
    let context = CheckoutContext::checkout(Order::new(order), step.map(StepId::new));
    assert!(context.is_checkout_route());
    assert_eq!(context.path, expected);
    assert_eq!(context.requested_step.as_ref().map(|s| s.as_str()), step);
    assert_eq!(context.order.map(|o| o.id.to_string()), Some(order.to_string()));
}

#[test]
fn setters_fill_request_details() {
    let context = CheckoutContext::new(routes::CART)
        .with_order(Order::new("3"))
        .with_requested_step("login")
        .with_path("/cart")
        .with_query("coupon=SAVE10")
        .with_user("12");
    assert!(!context.is_checkout_route());
    assert_eq!(context.requested_step, Some(StepId::new("login")));
    assert_eq!(context.path, "/cart");
    assert_eq!(context.query.as_deref(), Some("coupon=SAVE10"));
    assert_eq!(context.user.as_deref(), Some("12"));
}
