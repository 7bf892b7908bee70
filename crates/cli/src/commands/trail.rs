// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `ckb trail` - build the breadcrumb for an order on a page

use std::path::Path;

use anyhow::Result;
use ckb_breadcrumb::{
    BreadcrumbChain, CatalogResolver, CheckoutBreadcrumbBuilder, CheckoutContext, FrontPageBuilder,
    Untranslated,
};
use ckb_core::{routes, Breadcrumb, Order, OrderState, StepId};
use clap::Args;

use crate::output::{format_entry, format_or_json, OutputFormat, TrailView};

#[derive(Args)]
pub struct TrailArgs {
    /// Order id
    #[arg(long)]
    pub order: String,

    /// Checkout flow the order is pinned to
    #[arg(long)]
    pub flow: Option<String>,

    /// Step requested in the URL
    #[arg(long)]
    pub step: Option<String>,

    /// Step stored on the order
    #[arg(long)]
    pub checkout_step: Option<String>,

    /// Order state
    #[arg(long, default_value_t)]
    pub state: OrderState,

    /// Route being rendered
    #[arg(long, default_value = routes::CHECKOUT_FORM)]
    pub route: String,

    /// Current user, for cache variation only
    #[arg(long)]
    pub user: Option<String>,
}

impl TrailArgs {
    fn order(&self) -> Order {
        let mut order = Order::new(self.order.as_str()).with_state(self.state);
        if let Some(flow) = &self.flow {
            order = order.with_flow(flow.as_str());
        }
        if let Some(step) = &self.checkout_step {
            order = order.with_checkout_step(step.as_str());
        }
        order
    }

    fn context(&self) -> CheckoutContext {
        let requested = self.step.as_deref().map(StepId::new);
        let mut context = CheckoutContext::checkout(self.order(), requested);
        context.route_name = self.route.clone();
        if let Some(user) = &self.user {
            context = context.with_user(user.as_str());
        }
        context
    }
}

pub fn handle(args: TrailArgs, flows_dir: &Path, format: OutputFormat) -> Result<()> {
    let catalog = super::load_catalog(flows_dir)?;
    if catalog.is_empty() {
        tracing::warn!(dir = %flows_dir.display(), "no checkout flows configured");
    }
    if let Some(flow) = args.flow.as_deref().filter(|id| catalog.get(id).is_none()) {
        tracing::warn!(flow, "order names an unknown flow, using the default");
    }

    let chain = BreadcrumbChain::new(FrontPageBuilder::new(Untranslated))
        .with_builder(CheckoutBreadcrumbBuilder::new(CatalogResolver::new(catalog)));
    let breadcrumb = chain.build(&args.context());
    print_trail(&breadcrumb, format)
}

fn print_trail(breadcrumb: &Breadcrumb, format: OutputFormat) -> Result<()> {
    format_or_json(format, &TrailView::from(breadcrumb), || {
        for entry in &breadcrumb.entries {
            println!("{}", format_entry(entry));
        }
    })
}

#[cfg(test)]
#[path = "trail_tests.rs"]
mod tests;
