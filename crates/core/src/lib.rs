// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! ckb-core: Core types for checkout progress breadcrumbs

pub mod macros;

pub mod breadcrumb;
pub mod cache;
pub mod id;
pub mod order;
pub mod step;
pub mod target;

#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

pub use breadcrumb::{Breadcrumb, BreadcrumbEntry, CLASS_PREFIX};
pub use cache::{CacheMetadata, Cacheable};
pub use id::{FlowId, OrderId, StepId};
pub use order::{Order, OrderState, UnknownOrderState};
pub use step::{StepDefinition, StepPosition, COMPLETE_STEP};
pub use target::{encode_component, routes, LinkTarget};
