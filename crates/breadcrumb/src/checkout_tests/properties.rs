// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Property tests for the checkout trail.

use super::*;
use ckb_core::test_support::strategies::{arb_steps, arb_steps_with_current};
use ckb_core::OrderState;
use proptest::prelude::*;

fn build_at(steps: &[StepDefinition], current: usize) -> Breadcrumb {
    let current_id = steps[current].id.to_string();
    builder(steps.to_vec(), &current_id).build(&context("5"))
}

proptest! {
    #[test]
    fn leading_entries_come_first((steps, current) in arb_steps_with_current(8)) {
        let breadcrumb = build_at(&steps, current);
        prop_assert!(breadcrumb.len() >= 2);
        prop_assert_eq!(breadcrumb.entries[0].label.as_str(), "Home");
        prop_assert_eq!(breadcrumb.entries[0].target.to_string(), "<front>");
        prop_assert_eq!(breadcrumb.entries[1].label.as_str(), "Shopping cart");
        prop_assert_eq!(breadcrumb.entries[1].target.to_string(), "cart.page");
        prop_assert!(breadcrumb.entries[..2].iter().all(|e| e.css_class().is_none()));
    }

    #[test]
    fn steps_keep_order_and_positions((steps, current) in arb_steps_with_current(8)) {
        let breadcrumb = build_at(&steps, current);
        let expected: Vec<(String, StepPosition)> = steps
            .iter()
            .enumerate()
            .map(|(i, s)| (s, StepPosition::classify(i, current)))
            .filter(|(s, p)| !s.hidden || p.is_current())
            .map(|(s, p)| (s.label.clone(), p))
            .collect();
        let actual: Vec<(String, StepPosition)> = breadcrumb.entries[2..]
            .iter()
            .map(|e| (e.label.clone(), e.position.unwrap()))
            .collect();
        prop_assert_eq!(actual, expected);
    }

    #[test]
    fn exactly_one_current((steps, current) in arb_steps_with_current(8)) {
        let breadcrumb = build_at(&steps, current);
        let currents: Vec<&BreadcrumbEntry> = breadcrumb
            .entries
            .iter()
            .filter(|e| e.position == Some(StepPosition::Current))
            .collect();
        prop_assert_eq!(currents.len(), 1);
        prop_assert_eq!(&currents[0].label, &steps[current].label);
    }

    #[test]
    fn only_previous_steps_link_to_their_step((steps, current) in arb_steps_with_current(8)) {
        let breadcrumb = build_at(&steps, current);
        for entry in &breadcrumb.entries[2..] {
            match entry.position {
                Some(StepPosition::Previous) => {
                    let step = steps.iter().find(|s| s.label == entry.label).unwrap();
                    prop_assert_eq!(entry.target.route_name(), ckb_core::routes::CHECKOUT_FORM);
                    prop_assert_eq!(entry.target.param("order"), Some("5"));
                    prop_assert_eq!(entry.target.param("step"), Some(step.id.as_str()));
                }
                _ => prop_assert!(!entry.is_link()),
            }
        }
    }

    #[test]
    fn completed_checkout_has_no_links((mut steps, current) in arb_steps_with_current(8)) {
        steps[current].id = StepId::new(COMPLETE_STEP);
        let breadcrumb = build_at(&steps, current);
        prop_assert!(breadcrumb.entries[2..].iter().all(|e| !e.is_link()));
    }

    #[test]
    fn unknown_current_yields_leading_only(steps in arb_steps(8)) {
        let breadcrumb = builder(steps, "not-a-step").build(&context("5"));
        prop_assert_eq!(breadcrumb.len(), 2);
    }

    #[test]
    fn disabled_flow_never_applies(
        steps in arb_steps(8),
        completed in any::<bool>(),
        requested in proptest::option::of("[a-z]{1,6}"),
    ) {
        let builder = CheckoutBreadcrumbBuilder::new(FixedResolver {
            flow: Some(flow_with(steps, false)),
            current: Some(StepId::new("s0")),
        });
        let state = if completed { OrderState::Completed } else { OrderState::Draft };
        let context = CheckoutContext::checkout(
            Order::new("5").with_state(state),
            requested.map(StepId::from),
        );
        prop_assert!(!builder.applies(&context));
    }
}
