// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use ckb_core::{encode_component, routes, Order, StepId};

/// Everything a breadcrumb builder may look at for one request.
///
/// The host fills this in from its routing layer; builders read nothing
/// else.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CheckoutContext {
    /// Name of the matched route.
    pub route_name: String,
    /// Order named by the route, if any.
    pub order: Option<Order>,
    /// The `step` route parameter, if present.
    pub requested_step: Option<StepId>,
    pub path: String,
    pub query: Option<String>,
    /// Acting user, for hosts that vary output per user.
    pub user: Option<String>,
}

impl CheckoutContext {
    pub fn new(route_name: impl Into<String>) -> Self {
        Self { route_name: route_name.into(), ..Self::default() }
    }

    /// Context for the checkout form of `order`, optionally at a step.
    ///
    /// The path is `/checkout/<order>[/<step>]` with both segments
    /// percent-encoded.
    pub fn checkout(order: Order, requested_step: Option<StepId>) -> Self {
        let mut path = format!("/checkout/{}", encode_component(&order.id));
        let mut context = Self::new(routes::CHECKOUT_FORM);
        if let Some(step) = requested_step {
            path.push('/');
            path.push_str(&encode_component(&step));
            context = context.with_requested_step(step);
        }
        context.with_order(order).with_path(path)
    }

    pub fn with_order(mut self, order: Order) -> Self {
        self.order = Some(order);
        self
    }

    pub fn with_requested_step(mut self, step: impl Into<StepId>) -> Self {
        self.requested_step = Some(step.into());
        self
    }

    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = path.into();
        self
    }

    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.query = Some(query.into());
        self
    }

    pub fn with_user(mut self, user: impl Into<String>) -> Self {
        self.user = Some(user.into());
        self
    }

    pub fn is_checkout_route(&self) -> bool {
        self.route_name == routes::CHECKOUT_FORM
    }
}

#[cfg(test)]
#[path = "context_tests.rs"]
mod tests;
