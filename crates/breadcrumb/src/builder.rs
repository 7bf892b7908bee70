// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Breadcrumb builder seam and the chain that picks one per request.

use crate::context::CheckoutContext;
use crate::translate::{Translator, Untranslated};
use ckb_core::{Breadcrumb, BreadcrumbEntry, LinkTarget};

/// Produces the breadcrumb for the requests it applies to.
pub trait BreadcrumbBuilder: Send + Sync {
    /// Cheap check; must not do the work of [`BreadcrumbBuilder::build`].
    fn applies(&self, context: &CheckoutContext) -> bool;

    fn build(&self, context: &CheckoutContext) -> Breadcrumb;
}

/// Fallback builder: a lone `Home` link, on every page.
#[derive(Debug, Clone, Default)]
pub struct FrontPageBuilder<T = Untranslated> {
    translator: T,
}

impl<T: Translator> FrontPageBuilder<T> {
    pub fn new(translator: T) -> Self {
        Self { translator }
    }
}

impl<T: Translator> BreadcrumbBuilder for FrontPageBuilder<T> {
    fn applies(&self, _context: &CheckoutContext) -> bool {
        true
    }

    fn build(&self, _context: &CheckoutContext) -> Breadcrumb {
        let mut breadcrumb = Breadcrumb::new();
        breadcrumb.add_contexts(["url.path"]);
        breadcrumb.push(BreadcrumbEntry::plain(self.translator.translate("Home"), LinkTarget::front()));
        breadcrumb
    }
}

/// Builders tried in order; the first that applies wins.
pub struct BreadcrumbChain {
    builders: Vec<Box<dyn BreadcrumbBuilder>>,
    fallback: Box<dyn BreadcrumbBuilder>,
}

impl Default for BreadcrumbChain {
    fn default() -> Self {
        Self::new(FrontPageBuilder::new(Untranslated))
    }
}

impl BreadcrumbChain {
    /// A chain that uses `fallback` when no other builder applies.
    pub fn new(fallback: impl BreadcrumbBuilder + 'static) -> Self {
        Self { builders: Vec::new(), fallback: Box::new(fallback) }
    }

    pub fn with_builder(mut self, builder: impl BreadcrumbBuilder + 'static) -> Self {
        self.builders.push(Box::new(builder));
        self
    }

    pub fn len(&self) -> usize {
        self.builders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.builders.is_empty()
    }

    pub fn build(&self, context: &CheckoutContext) -> Breadcrumb {
        for (index, builder) in self.builders.iter().enumerate() {
            if builder.applies(context) {
                tracing::debug!(route = %context.route_name, builder = index, "breadcrumb builder applies");
                return builder.build(context);
            }
        }
        tracing::debug!(route = %context.route_name, "no breadcrumb builder applies, using fallback");
        self.fallback.build(context)
    }
}

#[cfg(test)]
#[path = "builder_tests.rs"]
mod tests;
