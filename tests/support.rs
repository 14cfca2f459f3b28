//! Common test support utilities and fixtures
//!
//! This module provides shared functionality to reduce code duplication
//! across integration and E2E tests.

#![allow(dead_code)]

use std::{fs, path::PathBuf, process::Command};
use tempfile::TempDir;

/// Result of running a CLI command
#[derive(Debug)]
pub struct CliOutput {
    pub status: i32,
    pub stdout: String,
    pub stderr: String,
}

/// A test workspace with temporary directory and config management
pub struct Workspace {
    pub root: TempDir,
    pub config_path: PathBuf,
}

impl Default for Workspace {
    fn default() -> Self {
        Self::new()
    }
}

impl Workspace {
    /// Create a new temporary workspace
    pub fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory");
        let config_path = root.path().join("prs.yaml");
        Self { root, config_path }
    }

    /// Write configuration YAML to the workspace
    pub fn write_config(&self, yaml: &str) {
        fs::write(&self.config_path, yaml).expect("Failed to write config");
    }

    /// Write a file relative to the workspace root
    pub fn write_file(&self, relative: &str, content: &str) -> PathBuf {
        let path = self.root.path().join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        fs::write(&path, content).expect("Failed to write file");
        path
    }

    /// Get the workspace root path
    pub fn path(&self) -> &std::path::Path {
        self.root.path()
    }

    /// Get the config file path as string
    pub fn config_str(&self) -> &str {
        self.config_path.to_str().expect("Config path not UTF-8")
    }
}

/// Run the pr-submit binary with given arguments
///
/// `token` sets `GITHUB_TOKEN`; `None` removes it from the environment.
pub fn run_cli(args: &[&str], token: Option<&str>) -> CliOutput {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_pr-submit"));
    cmd.args(args).env_remove("PR_SUBMIT_LOG");

    match token {
        Some(token) => cmd.env("GITHUB_TOKEN", token),
        None => cmd.env_remove("GITHUB_TOKEN"),
    };

    let output = cmd.output().expect("Failed to execute pr-submit");

    CliOutput {
        status: output.status.code().unwrap_or(-1),
        stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
        stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
    }
}

/// Configuration with one pull request pointing at `api_url`
pub fn single_pr_config(api_url: &str) -> String {
    format!(
        r#"
api_url: {api_url}
timeout_secs: 5
pull_requests:
  - name: form-input-styling
    repository: Ryjen1/stakingDapp
    title: "feat: Enhance Form Input Styling (#14)"
    head: feature/optimize-card-layout-spacing
    body: |
      ## Enhanced Form Input Styling
"#
    )
}
