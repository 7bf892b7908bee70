// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! ckb-flow: Checkout flow definitions and their file format

mod catalog;
mod find;
mod flow;
mod parser;

pub use catalog::{CatalogError, FlowCatalog};
pub use find::{load_catalog, FindError};
pub use flow::{CheckoutFlow, FlowConfig, FlowDef};
pub use parser::{format_for_path, parse_flows, parse_flows_with_format, Format, ParseError};
