// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Checkout progress breadcrumb.
//!
//! On the checkout form, the trail is `Home › Shopping cart` followed by
//! the flow's steps styled by their position relative to the current
//! step:
//!
//! - previous steps link back to that step of the checkout form, except
//!   on the `complete` step, where going back would only redirect forward;
//! - the current step and the steps after it are plain text;
//! - hidden steps are left out unless they are the current step.

use crate::builder::BreadcrumbBuilder;
use crate::context::CheckoutContext;
use crate::resolve::CheckoutResolver;
use crate::translate::{Translator, Untranslated};
use ckb_core::{
    Breadcrumb, BreadcrumbEntry, LinkTarget, OrderId, StepDefinition, StepId, StepPosition,
    COMPLETE_STEP,
};
use ckb_flow::CheckoutFlow;
use indexmap::IndexMap;

/// Cache contexts the checkout trail varies by.
pub const CACHE_CONTEXTS: [&str; 4] = ["route", "url.path", "url.query_args", "user"];

/// Builds the checkout progress trail for flows that enable it.
#[derive(Debug, Clone)]
pub struct CheckoutBreadcrumbBuilder<R, T = Untranslated> {
    resolver: R,
    translator: T,
}

impl<R: CheckoutResolver> CheckoutBreadcrumbBuilder<R> {
    pub fn new(resolver: R) -> Self {
        Self { resolver, translator: Untranslated }
    }
}

impl<R: CheckoutResolver, T: Translator> CheckoutBreadcrumbBuilder<R, T> {
    pub fn with_translator<U: Translator>(self, translator: U) -> CheckoutBreadcrumbBuilder<R, U> {
        CheckoutBreadcrumbBuilder { resolver: self.resolver, translator }
    }

    fn leading_entries(&self) -> [BreadcrumbEntry; 2] {
        [
            BreadcrumbEntry::plain(self.translator.translate("Home"), LinkTarget::front()),
            BreadcrumbEntry::plain(self.translator.translate("Shopping cart"), LinkTarget::cart()),
        ]
    }
}

impl<R: CheckoutResolver, T: Translator> BreadcrumbBuilder for CheckoutBreadcrumbBuilder<R, T> {
    fn applies(&self, context: &CheckoutContext) -> bool {
        if !context.is_checkout_route() {
            return false;
        }
        let Some(order) = &context.order else {
            return false;
        };
        let Some(flow) = self.resolver.checkout_flow(order) else {
            return false;
        };
        // Checked here rather than in build() so the fallback builder
        // runs when the flow has the trail turned off.
        flow.configuration().display_progress_breadcrumb_links
    }

    fn build(&self, context: &CheckoutContext) -> Breadcrumb {
        let mut breadcrumb = Breadcrumb::new();
        breadcrumb.add_contexts(CACHE_CONTEXTS);
        breadcrumb.extend(self.leading_entries());

        let Some(order) = &context.order else {
            tracing::debug!(route = %context.route_name, "no order in context");
            return breadcrumb;
        };
        breadcrumb.add_dependency(order);

        let Some(flow) = self.resolver.checkout_flow(order) else {
            tracing::debug!(order_id = %order.id, "no checkout flow for order");
            return breadcrumb;
        };
        breadcrumb.add_dependency(flow);

        let Some(current) = self.resolver.checkout_step_id(order, context.requested_step.as_ref())
        else {
            tracing::debug!(order_id = %order.id, flow = %flow.id(), "no current checkout step");
            return breadcrumb;
        };

        match step_entries(&order.id, flow.visible_steps(), &current) {
            Some(entries) => breadcrumb.extend(entries),
            None => tracing::debug!(
                order_id = %order.id,
                flow = %flow.id(),
                step = %current,
                "current step is not a visible step"
            ),
        }
        breadcrumb
    }
}

/// Trail entries for `steps` with `current` as the current step.
///
/// Positions use the raw index in `steps`, hidden steps included.
/// Returns `None` when `current` is not one of `steps`.
pub fn step_entries(
    order_id: &OrderId,
    steps: &IndexMap<StepId, StepDefinition>,
    current: &StepId,
) -> Option<Vec<BreadcrumbEntry>> {
    let current_index = steps.get_index_of(current.as_str())?;
    let completed = *current == COMPLETE_STEP;

    let entries = steps
        .values()
        .enumerate()
        .filter_map(|(index, step)| {
            let position = StepPosition::classify(index, current_index);
            if step.hidden && !position.is_current() {
                return None;
            }
            let target = match position {
                StepPosition::Previous if !completed => {
                    LinkTarget::checkout_form(order_id, &step.id)
                }
                _ => LinkTarget::NoLink,
            };
            Some(BreadcrumbEntry::step(step.label.clone(), target, position))
        })
        .collect();
    Some(entries)
}

#[cfg(test)]
#[path = "checkout_tests/mod.rs"]
mod tests;
