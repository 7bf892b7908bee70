// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

pub mod flow;
pub mod trail;

use std::path::Path;

use anyhow::Result;
use ckb_flow::{FindError, FlowCatalog};

use crate::exit_error::ExitError;

/// Load the flow catalog. Conflicting flow files are a usage error.
pub(crate) fn load_catalog(flows_dir: &Path) -> Result<FlowCatalog> {
    ckb_flow::load_catalog(flows_dir).map_err(|e| match e {
        FindError::Catalog(e) => ExitError::usage(format!("{}: {}", flows_dir.display(), e)).into(),
        FindError::Io(e) => {
            anyhow::Error::new(e).context(format!("reading {}", flows_dir.display()))
        }
    })
}
