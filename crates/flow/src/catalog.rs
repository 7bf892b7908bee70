// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The set of checkout flows known to the host.

use crate::flow::FlowDef;
use ckb_core::FlowId;
use indexmap::map::Entry;
use indexmap::IndexMap;
use thiserror::Error;

/// Conflicts found while merging flows from several sources.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogError {
    #[error("flow '{id}' from {origin} is already defined")]
    DuplicateFlow { id: FlowId, origin: String },
    #[error("flow '{second}' from {origin} is marked default, but '{first}' already is")]
    MultipleDefaults { first: FlowId, second: FlowId, origin: String },
}

/// Flows in load order, keyed by id.
#[derive(Debug, Clone, Default)]
pub struct FlowCatalog {
    flows: IndexMap<FlowId, FlowDef>,
}

impl FlowCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace a flow.
    pub fn insert(&mut self, flow: FlowDef) {
        self.flows.insert(flow.id.clone(), flow);
    }

    /// Move every flow from `other` into this catalog.
    ///
    /// `origin` names where `other` came from, for error messages.
    pub fn merge(&mut self, other: FlowCatalog, origin: &str) -> Result<(), CatalogError> {
        for (id, flow) in other.flows {
            if flow.default {
                if let Some(first) = self.flows.values().find(|f| f.default) {
                    return Err(CatalogError::MultipleDefaults {
                        first: first.id.clone(),
                        second: id,
                        origin: origin.to_string(),
                    });
                }
            }
            match self.flows.entry(id) {
                Entry::Occupied(e) => {
                    return Err(CatalogError::DuplicateFlow {
                        id: e.key().clone(),
                        origin: origin.to_string(),
                    });
                }
                Entry::Vacant(e) => {
                    e.insert(flow);
                }
            }
        }
        Ok(())
    }

    pub fn get(&self, id: &str) -> Option<&FlowDef> {
        self.flows.get(id)
    }

    /// The flow marked `default`, else the first one loaded.
    pub fn default_flow(&self) -> Option<&FlowDef> {
        self.flows.values().find(|f| f.default).or_else(|| self.flows.values().next())
    }

    pub fn iter(&self) -> impl Iterator<Item = &FlowDef> {
        self.flows.values()
    }

    pub fn len(&self) -> usize {
        self.flows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.flows.is_empty()
    }
}

#[cfg(test)]
#[path = "catalog_tests.rs"]
mod tests;
