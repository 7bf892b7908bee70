// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Order → checkout flow and current step resolution.

use ckb_core::{Order, StepId, COMPLETE_STEP};
use ckb_flow::{CheckoutFlow, FlowCatalog, FlowDef};

/// Resolves an order's checkout flow and the step it is on.
pub trait CheckoutResolver: Send + Sync {
    type Flow: CheckoutFlow;

    /// The flow the order checks out with, if one can be determined.
    fn checkout_flow(&self, order: &Order) -> Option<&Self::Flow>;

    /// The step to show for `order` when `requested` was asked for.
    ///
    /// `None` when no step can be determined at all.
    fn checkout_step_id(&self, order: &Order, requested: Option<&StepId>) -> Option<StepId>;
}

/// Resolver backed by a loaded [`FlowCatalog`].
///
/// - The flow is the order's pinned flow, else the catalog default.
/// - Orders past draft are on the `complete` step.
/// - A draft order is on its stored step, else the first step. A requested
///   step is honored only when it does not skip ahead of that step.
#[derive(Debug, Clone, Default)]
pub struct CatalogResolver {
    catalog: FlowCatalog,
}

impl CatalogResolver {
    pub fn new(catalog: FlowCatalog) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> &FlowCatalog {
        &self.catalog
    }
}

impl CheckoutResolver for CatalogResolver {
    type Flow = FlowDef;

    fn checkout_flow(&self, order: &Order) -> Option<&FlowDef> {
        if let Some(id) = &order.flow {
            if let Some(flow) = self.catalog.get(id) {
                return Some(flow);
            }
            tracing::debug!(order_id = %order.id, flow = %id, "pinned flow unknown, using default");
        }
        self.catalog.default_flow()
    }

    fn checkout_step_id(&self, order: &Order, requested: Option<&StepId>) -> Option<StepId> {
        // Placed orders can't be edited
        if !order.state.is_draft() {
            return Some(StepId::new(COMPLETE_STEP));
        }

        let flow = self.checkout_flow(order)?;
        let selected = match &order.checkout_step {
            Some(step) => step.clone(),
            None => flow.first_step()?.id.clone(),
        };

        let Some(requested) = requested.filter(|r| **r != selected) else {
            return Some(selected);
        };
        match (flow.step_index(requested), flow.step_index(&selected)) {
            (Some(req), Some(sel)) if req <= sel => Some(requested.clone()),
            _ => {
                tracing::debug!(
                    order_id = %order.id,
                    requested = %requested,
                    selected = %selected,
                    "requested step not reachable"
                );
                Some(selected)
            }
        }
    }
}

#[cfg(test)]
#[path = "resolve_tests.rs"]
mod tests;
