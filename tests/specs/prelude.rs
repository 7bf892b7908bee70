//! Shared helpers for CLI specs.

use std::path::Path;

use assert_cmd::Command;
use tempfile::TempDir;

/// The default flow used across specs: a hidden login, three visible
/// steps, and a hidden payment step before completion.
pub const DEFAULT_FLOW: &str = r#"
[flow.default]
label = "Default checkout"

[flow.default.config]
display_progress_breadcrumb_links = true

[[flow.default.step]]
id = "login"
label = "Login"
hidden = true

[[flow.default.step]]
id = "order_information"
label = "Order information"

[[flow.default.step]]
id = "review"
label = "Review"

[[flow.default.step]]
id = "payment"
label = "Payment"
hidden = true

[[flow.default.step]]
id = "complete"
label = "Complete"
"#;

fn base_command() -> Command {
    let mut cmd = Command::cargo_bin("ckb").unwrap();
    cmd.env_remove("CKB_FLOWS_DIR").env_remove("CKB_LOG").env_remove("COLOR").env("NO_COLOR", "1");
    cmd
}

/// `ckb` run outside any project.
pub fn cli() -> Spec {
    Spec { cmd: base_command() }
}

/// A temporary working directory with flow files.
pub struct Project {
    dir: TempDir,
}

impl Project {
    pub fn empty() -> Self {
        Self { dir: TempDir::new().unwrap() }
    }

    /// A project whose `.ckb/flows/default.toml` holds [`DEFAULT_FLOW`].
    pub fn with_default_flow() -> Self {
        let project = Self::empty();
        project.file(".ckb/flows/default.toml", DEFAULT_FLOW);
        project
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Write `content` to `rel`, creating parent directories.
    pub fn file(&self, rel: &str, content: &str) {
        let path = self.dir.path().join(rel);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).unwrap();
        }
        std::fs::write(path, content).unwrap();
    }

    /// `ckb` run from the project root.
    pub fn ckb(&self) -> Spec {
        let mut cmd = base_command();
        cmd.current_dir(self.dir.path());
        Spec { cmd }
    }
}

pub struct Spec {
    cmd: Command,
}

impl Spec {
    pub fn args(mut self, args: &[&str]) -> Self {
        self.cmd.args(args);
        self
    }

    pub fn env(mut self, key: &str, value: impl AsRef<std::ffi::OsStr>) -> Self {
        self.cmd.env(key, value);
        self
    }

    fn run(mut self) -> Outcome {
        let output = self.cmd.output().unwrap();
        Outcome {
            code: output.status.code(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        }
    }

    /// Run and assert a zero exit status.
    pub fn passes(self) -> Outcome {
        let outcome = self.run();
        assert_eq!(outcome.code, Some(0), "expected success\nstderr:\n{}", outcome.stderr);
        outcome
    }

    /// Run and assert a non-zero exit status.
    pub fn fails(self) -> Outcome {
        let outcome = self.run();
        assert_ne!(outcome.code, Some(0), "expected failure\nstdout:\n{}", outcome.stdout);
        outcome
    }
}

pub struct Outcome {
    code: Option<i32>,
    stdout: String,
    stderr: String,
}

impl Outcome {
    pub fn code(self, expected: i32) -> Self {
        assert_eq!(self.code, Some(expected), "stderr:\n{}", self.stderr);
        self
    }

    pub fn stdout_has(self, needle: &str) -> Self {
        assert!(self.stdout.contains(needle), "stdout lacks {:?}:\n{}", needle, self.stdout);
        self
    }

    pub fn stdout_lacks(self, needle: &str) -> Self {
        assert!(!self.stdout.contains(needle), "stdout has {:?}:\n{}", needle, self.stdout);
        self
    }

    pub fn stderr_has(self, needle: &str) -> Self {
        assert!(self.stderr.contains(needle), "stderr lacks {:?}:\n{}", needle, self.stderr);
        self
    }

    pub fn stdout_lines(&self) -> Vec<&str> {
        self.stdout.lines().collect()
    }

    pub fn json(&self) -> serde_json::Value {
        serde_json::from_str(&self.stdout).unwrap()
    }
}
