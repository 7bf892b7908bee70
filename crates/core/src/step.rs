// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Checkout step definitions and position classification.

use crate::id::StepId;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Well-known id of the terminal checkout step.
///
/// Matched literally: a flow whose last step has another id never
/// triggers the completed-order rendering.
pub const COMPLETE_STEP: &str = "complete";

/// One configured step of a checkout flow.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StepDefinition {
    pub id: StepId,
    /// Display label, already localized.
    pub label: String,
    /// Suppressed from the trail unless it is the current step.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub hidden: bool,
}

impl StepDefinition {
    pub fn new(id: impl Into<StepId>, label: impl Into<String>) -> Self {
        Self { id: id.into(), label: label.into(), hidden: false }
    }

    pub fn hidden(mut self) -> Self {
        self.hidden = true;
        self
    }
}

/// Where a step sits relative to the current step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StepPosition {
    Previous,
    Current,
    Next,
}

impl StepPosition {
    /// Classify the step at `index` against the current step's index.
    ///
    /// Both are raw positions in the full visible-step sequence, hidden
    /// steps included.
    pub fn classify(index: usize, current: usize) -> Self {
        match index.cmp(&current) {
            Ordering::Less => StepPosition::Previous,
            Ordering::Equal => StepPosition::Current,
            Ordering::Greater => StepPosition::Next,
        }
    }

    pub fn is_current(self) -> bool {
        matches!(self, StepPosition::Current)
    }
}

crate::simple_display! {
    StepPosition {
        Previous => "previous",
        Current => "current",
        Next => "next",
    }
}

#[cfg(test)]
#[path = "step_tests.rs"]
mod tests;
