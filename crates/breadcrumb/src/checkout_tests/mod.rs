// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use ckb_core::{Order, StepDefinition};
use ckb_flow::FlowDef;

mod applies;
mod build;
mod properties;

/// Resolver with a fixed flow and a fixed current step.
struct FixedResolver {
    flow: Option<FlowDef>,
    current: Option<StepId>,
}

impl CheckoutResolver for FixedResolver {
    type Flow = FlowDef;

    fn checkout_flow(&self, _order: &Order) -> Option<&FlowDef> {
        self.flow.as_ref()
    }

    fn checkout_step_id(&self, _order: &Order, _requested: Option<&StepId>) -> Option<StepId> {
        self.current.clone()
    }
}

fn flow_with(steps: Vec<StepDefinition>, links: bool) -> FlowDef {
    FlowDef::new("default").with_breadcrumb_links(links).with_steps(steps)
}

/// Builder over `steps` whose current step is `current`.
fn builder(steps: Vec<StepDefinition>, current: &str) -> CheckoutBreadcrumbBuilder<FixedResolver> {
    CheckoutBreadcrumbBuilder::new(FixedResolver {
        flow: Some(flow_with(steps, true)),
        current: Some(StepId::new(current)),
    })
}

fn context(order_id: &str) -> CheckoutContext {
    CheckoutContext::checkout(Order::new(order_id), None)
}

/// `(label, target, class)` per entry, for compact assertions.
fn summary(breadcrumb: &Breadcrumb) -> Vec<(String, String, Option<String>)> {
    breadcrumb
        .entries
        .iter()
        .map(|e| (e.label.clone(), e.target.to_string(), e.css_class()))
        .collect()
}

fn row(label: &str, target: &str, class: Option<&str>) -> (String, String, Option<String>) {
    (label.to_string(), target.to_string(), class.map(|c| format!("breadcrumb-checkout-item-{c}")))
}
