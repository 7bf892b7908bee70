// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Breadcrumb trail output types.
//!
//! A [`Breadcrumb`] is the ordered list of entries a rendering layer draws,
//! plus the cache hints it must honor when storing the rendered result.

use crate::cache::{CacheMetadata, Cacheable};
use crate::step::StepPosition;
use crate::target::LinkTarget;
use serde::{Deserialize, Serialize};

/// Prefix of the CSS class carried by checkout step entries.
pub const CLASS_PREFIX: &str = "breadcrumb-checkout-item-";

/// One rendered trail item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BreadcrumbEntry {
    pub label: String,
    pub target: LinkTarget,
    /// Position relative to the current step; `None` for the fixed leading entries.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<StepPosition>,
}

impl BreadcrumbEntry {
    /// An unstyled entry, used for the fixed leading links.
    pub fn plain(label: impl Into<String>, target: LinkTarget) -> Self {
        Self { label: label.into(), target, position: None }
    }

    /// A checkout step entry styled by its position.
    pub fn step(label: impl Into<String>, target: LinkTarget, position: StepPosition) -> Self {
        Self { label: label.into(), target, position: Some(position) }
    }

    pub fn is_link(&self) -> bool {
        self.target.is_link()
    }

    /// `breadcrumb-checkout-item-<position>` for step entries.
    pub fn css_class(&self) -> Option<String> {
        self.position.map(|p| format!("{}{}", CLASS_PREFIX, p))
    }
}

/// An ordered breadcrumb trail with its cache hints.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Breadcrumb {
    pub entries: Vec<BreadcrumbEntry>,
    #[serde(default)]
    pub cache: CacheMetadata,
}

impl Breadcrumb {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, entry: BreadcrumbEntry) {
        self.entries.push(entry);
    }

    pub fn extend(&mut self, entries: impl IntoIterator<Item = BreadcrumbEntry>) {
        self.entries.extend(entries);
    }

    pub fn add_dependency(&mut self, dependency: &dyn Cacheable) {
        self.cache.add_dependency(dependency);
    }

    pub fn add_contexts<I, S>(&mut self, contexts: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.cache.add_contexts(contexts);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn labels(&self) -> Vec<&str> {
        self.entries.iter().map(|e| e.label.as_str()).collect()
    }
}

#[cfg(test)]
#[path = "breadcrumb_tests.rs"]
mod tests;
