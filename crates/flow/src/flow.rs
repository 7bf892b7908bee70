// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Checkout flow definition and the capability trait breadcrumbs consume.

use ckb_core::{Cacheable, FlowId, StepDefinition, StepId};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Per-flow settings.
///
/// Unknown keys are rejected when a flow file is loaded, so a misspelled
/// option fails loudly instead of reading as `false`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FlowConfig {
    /// Render checkout progress as breadcrumb links on checkout pages.
    #[serde(default)]
    pub display_progress_breadcrumb_links: bool,
}

/// What breadcrumb building needs from a checkout flow.
pub trait CheckoutFlow: Cacheable + Send + Sync {
    fn id(&self) -> &FlowId;

    /// Steps shown to the buyer, keyed by id, in checkout order.
    fn visible_steps(&self) -> &IndexMap<StepId, StepDefinition>;

    fn configuration(&self) -> &FlowConfig;
}

/// A checkout flow loaded from a flow file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FlowDef {
    pub id: FlowId,
    pub label: String,
    /// Chosen when an order does not name its flow.
    pub default: bool,
    pub config: FlowConfig,
    steps: IndexMap<StepId, StepDefinition>,
}

impl FlowDef {
    pub fn new(id: impl Into<FlowId>) -> Self {
        let id = id.into();
        Self {
            label: id.to_string(),
            id,
            default: false,
            config: FlowConfig::default(),
            steps: IndexMap::new(),
        }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    pub fn with_default(mut self, default: bool) -> Self {
        self.default = default;
        self
    }

    pub fn with_breadcrumb_links(mut self, enabled: bool) -> Self {
        self.config.display_progress_breadcrumb_links = enabled;
        self
    }

    /// Append steps in order. A repeated id replaces the earlier
    /// definition in place.
    pub fn with_steps(mut self, steps: impl IntoIterator<Item = StepDefinition>) -> Self {
        for step in steps {
            self.steps.insert(step.id.clone(), step);
        }
        self
    }

    pub fn get_step(&self, id: &str) -> Option<&StepDefinition> {
        self.steps.get(id)
    }

    /// Position of a step in the sequence, hidden steps included.
    pub fn step_index(&self, id: &str) -> Option<usize> {
        self.steps.get_index_of(id)
    }

    pub fn first_step(&self) -> Option<&StepDefinition> {
        self.steps.first().map(|(_, step)| step)
    }
}

impl Cacheable for FlowDef {
    fn cache_tags(&self) -> Vec<String> {
        vec![format!("checkout_flow:{}", self.id)]
    }
}

impl CheckoutFlow for FlowDef {
    fn id(&self) -> &FlowId {
        &self.id
    }

    fn visible_steps(&self) -> &IndexMap<StepId, StepDefinition> {
        &self.steps
    }

    fn configuration(&self) -> &FlowConfig {
        &self.config
    }
}

#[cfg(test)]
#[path = "flow_tests.rs"]
mod tests;
