// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Environment-derived settings.

use std::path::{Path, PathBuf};

/// Overrides the flow directory when `--flows` is not given.
pub const FLOWS_DIR_VAR: &str = "CKB_FLOWS_DIR";
/// `EnvFilter` directives for log output.
pub const LOG_VAR: &str = "CKB_LOG";
/// Flow directory relative to the working directory.
pub const DEFAULT_FLOWS_DIR: &str = ".ckb/flows";

/// Resolve the flow directory: `--flows` > `CKB_FLOWS_DIR` > `<cwd>/.ckb/flows`.
pub fn flows_dir(explicit: Option<&Path>, cwd: &Path) -> PathBuf {
    if let Some(dir) = explicit {
        return dir.to_path_buf();
    }
    match std::env::var(FLOWS_DIR_VAR) {
        Ok(dir) if !dir.is_empty() => PathBuf::from(dir),
        _ => cwd.join(DEFAULT_FLOWS_DIR),
    }
}
