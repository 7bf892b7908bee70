// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! ckb-breadcrumb: Checkout progress breadcrumb assembly
//!
//! [`CheckoutBreadcrumbBuilder`] turns an order's checkout flow into a
//! trail of `Home › Shopping cart › steps...`. It plugs into a
//! [`BreadcrumbChain`], which falls back to a default builder on pages
//! where the checkout trail does not apply.

mod builder;
mod checkout;
mod context;
mod resolve;
mod translate;

pub use builder::{BreadcrumbBuilder, BreadcrumbChain, FrontPageBuilder};
pub use checkout::{step_entries, CheckoutBreadcrumbBuilder, CACHE_CONTEXTS};
pub use context::CheckoutContext;
pub use resolve::{CatalogResolver, CheckoutResolver};
pub use translate::{Translator, Untranslated};
