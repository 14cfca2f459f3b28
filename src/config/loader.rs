//! Configuration file loading

use crate::constants;
use crate::utils::{filesystem, validators};
use anyhow::{Context, Result};
use pr_github::{PullRequestSpec, RepositoryCoordinates};
use serde::Deserialize;
use std::path::{Path, PathBuf};

fn default_base_branch() -> String {
    constants::git::DEFAULT_BASE_BRANCH.to_string()
}

/// One pull request to open, as written in the configuration file
#[derive(Debug, Clone, Deserialize)]
pub struct PullRequestEntry {
    /// Unique key used to select the entry on the command line
    pub name: String,
    /// `owner/repo` or a GitHub URL
    pub repository: String,
    pub title: String,
    pub head: String,
    #[serde(default = "default_base_branch")]
    pub base: String,
    #[serde(default)]
    pub body: Option<String>,
    /// Markdown file holding the body, relative to the configuration file
    #[serde(default)]
    pub body_file: Option<String>,
}

impl PullRequestEntry {
    /// Turn the entry into submittable coordinates and specification
    ///
    /// Reads `body_file` relative to `config_dir` when set.
    pub fn resolve(
        &self,
        config_dir: Option<&Path>,
    ) -> Result<(RepositoryCoordinates, PullRequestSpec)> {
        let coords = RepositoryCoordinates::parse(&self.repository)
            .with_context(|| format!("Invalid repository for pull request '{}'", self.name))?;

        let body = match (&self.body, &self.body_file) {
            (Some(_), Some(_)) => anyhow::bail!(
                "Pull request '{}' cannot set both body and body_file",
                self.name
            ),
            (Some(body), None) => body.clone(),
            (None, Some(path)) => filesystem::read_body_file(path, config_dir)?,
            (None, None) => String::new(),
        };

        let spec = PullRequestSpec::new(&self.title, &self.head, &self.base, body)
            .with_context(|| format!("Invalid pull request '{}'", self.name))?;

        Ok((coords, spec))
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// API root, `https://api.github.com` when absent
    #[serde(default)]
    pub api_url: Option<String>,
    /// Request timeout in seconds
    #[serde(default)]
    pub timeout_secs: Option<u64>,
    pub pull_requests: Vec<PullRequestEntry>,
    #[serde(skip)]
    pub(crate) config_dir: Option<PathBuf>,
}

impl Config {
    /// Load and validate configuration from a file
    pub fn load(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read configuration file '{}'", path))?;

        let mut config = Self::parse(&content)
            .with_context(|| format!("Failed to parse configuration file '{}'", path))?;
        config.config_dir = Path::new(path).parent().map(|p| p.to_path_buf());

        Ok(config)
    }

    /// Parse and validate configuration from YAML text
    pub fn parse(content: &str) -> Result<Self> {
        let config: Config = serde_yaml::from_str(content)?;

        validators::validate_config(&config).map_err(validators::validation_errors_to_anyhow)?;

        Ok(config)
    }

    /// Directory the configuration was loaded from
    pub fn config_dir(&self) -> Option<&Path> {
        self.config_dir.as_deref()
    }

    /// Get pull request entry by name
    pub fn get_pull_request(&self, name: &str) -> Option<&PullRequestEntry> {
        self.pull_requests.iter().find(|entry| entry.name == name)
    }

    /// Select entries by name, or all of them when `names` is empty
    ///
    /// Entries keep the order of `names`. Unknown names are an error.
    pub fn select(&self, names: &[String]) -> Result<Vec<&PullRequestEntry>> {
        if names.is_empty() {
            return Ok(self.pull_requests.iter().collect());
        }

        let unknown: Vec<&str> = names
            .iter()
            .filter(|name| self.get_pull_request(name).is_none())
            .map(String::as_str)
            .collect();
        if !unknown.is_empty() {
            anyhow::bail!(
                "Unknown pull request name(s): {}. Known names: {}",
                unknown.join(", "),
                self.pull_requests
                    .iter()
                    .map(|entry| entry.name.as_str())
                    .collect::<Vec<_>>()
                    .join(", ")
            );
        }

        Ok(names
            .iter()
            .filter_map(|name| self.get_pull_request(name))
            .collect())
    }
}
