// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Shared test helpers for use across crates.
//!
//! Gated behind `#[cfg(any(test, feature = "test-support"))]`.

use crate::step::StepDefinition;

// ── Proptest strategies ─────────────────────────────────────────────────

/// Proptest strategies for step sequences.
pub mod strategies {
    use crate::step::StepDefinition;
    use proptest::prelude::*;

    /// A step sequence of 1..=`max` steps with unique ids `s0`, `s1`, ...
    /// and random hidden flags.
    pub fn arb_steps(max: usize) -> impl Strategy<Value = Vec<StepDefinition>> {
        proptest::collection::vec(any::<bool>(), 1..=max).prop_map(|hidden| {
            hidden
                .into_iter()
                .enumerate()
                .map(|(i, hidden)| StepDefinition {
                    id: format!("s{i}").into(),
                    label: format!("Step {i}"),
                    hidden,
                })
                .collect()
        })
    }

    /// A step sequence paired with an index inside it.
    pub fn arb_steps_with_current(
        max: usize,
    ) -> impl Strategy<Value = (Vec<StepDefinition>, usize)> {
        arb_steps(max).prop_flat_map(|steps| {
            let len = steps.len();
            (Just(steps), 0..len)
        })
    }
}

// ── Factory functions ───────────────────────────────────────────────────

/// The usual five-step sequence: login (hidden), order_information,
/// review, payment (hidden), complete.
pub fn standard_steps() -> Vec<StepDefinition> {
    vec![
        StepDefinition::new("login", "Login").hidden(),
        StepDefinition::new("order_information", "Order information"),
        StepDefinition::new("review", "Review"),
        StepDefinition::new("payment", "Payment").hidden(),
        StepDefinition::new("complete", "Complete"),
    ]
}

/// Build visible steps from `(id, label, hidden)` triples.
pub fn steps(defs: &[(&str, &str, bool)]) -> Vec<StepDefinition> {
    defs.iter()
        .map(|(id, label, hidden)| StepDefinition {
            id: (*id).into(),
            label: (*label).to_string(),
            hidden: *hidden,
        })
        .collect()
}
