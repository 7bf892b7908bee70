// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Cache hints attached to a built breadcrumb.
//!
//! Nothing here caches. A rendering layer reads the tags to invalidate
//! stored output when an order or flow changes, and the contexts to
//! vary stored output per route, path, query, and user.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Something whose changes invalidate output derived from it.
pub trait Cacheable {
    fn cache_tags(&self) -> Vec<String>;
}

/// Cache tags and contexts, kept sorted and de-duplicated.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CacheMetadata {
    #[serde(default)]
    pub tags: BTreeSet<String>,
    #[serde(default)]
    pub contexts: BTreeSet<String>,
}

impl CacheMetadata {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record that the output depends on `dependency`.
    pub fn add_dependency(&mut self, dependency: &dyn Cacheable) {
        self.tags.extend(dependency.cache_tags());
    }

    pub fn add_contexts<I, S>(&mut self, contexts: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.contexts.extend(contexts.into_iter().map(Into::into));
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.contains(tag)
    }

    pub fn has_context(&self, context: &str) -> bool {
        self.contexts.contains(context)
    }
}

#[cfg(test)]
#[path = "cache_tests.rs"]
mod tests;
