// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The slice of an order that checkout navigation reads.

use crate::cache::Cacheable;
use crate::id::{FlowId, OrderId, StepId};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;

/// Workflow state of an order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderState {
    /// Still in checkout; the customer may edit it.
    #[default]
    Draft,
    /// Placed; checkout is over.
    Completed,
    Canceled,
}

impl OrderState {
    /// Only draft orders can move through checkout steps.
    pub fn is_draft(self) -> bool {
        matches!(self, OrderState::Draft)
    }
}

crate::simple_display! {
    OrderState {
        Draft => "draft",
        Completed => "completed",
        Canceled => "canceled",
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown order state '{0}' (expected draft, completed, or canceled)")]
pub struct UnknownOrderState(pub String);

impl FromStr for OrderState {
    type Err = UnknownOrderState;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "draft" => Ok(OrderState::Draft),
            "completed" => Ok(OrderState::Completed),
            "canceled" => Ok(OrderState::Canceled),
            other => Err(UnknownOrderState(other.to_string())),
        }
    }
}

/// An in-progress order as seen by checkout navigation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    pub id: OrderId,
    /// Checkout flow assigned to the order, if the host pinned one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub flow: Option<FlowId>,
    /// Furthest step the customer has reached.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub checkout_step: Option<StepId>,
    #[serde(default)]
    pub state: OrderState,
}

impl Order {
    pub fn new(id: impl Into<OrderId>) -> Self {
        Self { id: id.into(), flow: None, checkout_step: None, state: OrderState::Draft }
    }

    pub fn with_flow(mut self, flow: impl Into<FlowId>) -> Self {
        self.flow = Some(flow.into());
        self
    }

    pub fn with_checkout_step(mut self, step: impl Into<StepId>) -> Self {
        self.checkout_step = Some(step.into());
        self
    }

    pub fn with_state(mut self, state: OrderState) -> Self {
        self.state = state;
        self
    }
}

impl Cacheable for Order {
    fn cache_tags(&self) -> Vec<String> {
        vec![format!("order:{}", self.id)]
    }
}

#[cfg(test)]
#[path = "order_tests.rs"]
mod tests;
