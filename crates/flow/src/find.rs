// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Flow file discovery

use crate::catalog::{CatalogError, FlowCatalog};
use crate::parser::{format_for_path, parse_flows_with_format, Format};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors from flow directory scanning
#[derive(Debug, Error)]
pub enum FindError {
    #[error(transparent)]
    Catalog(#[from] CatalogError),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Load every flow file under `flow_dir` into one catalog.
///
/// Files are read in path order. Unreadable or invalid files are skipped
/// with a warning; a missing directory yields an empty catalog.
pub fn load_catalog(flow_dir: &Path) -> Result<FlowCatalog, FindError> {
    let mut catalog = FlowCatalog::new();
    if !flow_dir.exists() {
        tracing::debug!(dir = %flow_dir.display(), "flow directory missing");
        return Ok(catalog);
    }
    for (path, format) in collect_flow_files(flow_dir)? {
        let content = match std::fs::read_to_string(&path) {
            Ok(c) => c,
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "skipping unreadable flow file");
                continue;
            }
        };
        let flows = match parse_flows_with_format(&content, format) {
            Ok(flows) => flows,
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "skipping invalid flow file");
                continue;
            }
        };
        tracing::debug!(path = %path.display(), flows = flows.len(), "loaded flow file");
        catalog.merge(flows, &path.display().to_string())?;
    }
    Ok(catalog)
}

/// Recursively collect all flow files (`.hcl`, `.toml`, `.json`) under `dir`.
fn collect_flow_files(dir: &Path) -> Result<Vec<(PathBuf, Format)>, std::io::Error> {
    let mut files = Vec::new();
    let mut stack = vec![dir.to_path_buf()];
    while let Some(current) = stack.pop() {
        for entry in std::fs::read_dir(&current)?.flatten() {
            let path = entry.path();
            if path.is_dir() {
                stack.push(path);
            } else if let Some(format) = format_for_path(&path) {
                files.push((path, format));
            }
        }
    }
    files.sort_by(|a, b| a.0.cmp(&b.0));
    Ok(files)
}

#[cfg(test)]
#[path = "find_tests.rs"]
mod tests;
