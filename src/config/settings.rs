//! Client settings layered from the configuration file and command line

use super::Config;
use crate::constants;
use crate::utils::validators;
use anyhow::{Context, Result};
use pr_github::{DEFAULT_TIMEOUT, GitHubClient};
use std::time::Duration;

/// Transport settings for the GitHub client
///
/// Command line values override configuration file values, which override
/// the library defaults.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ClientSettings {
    pub api_url: Option<String>,
    pub timeout_secs: Option<u64>,
}

impl ClientSettings {
    pub fn from_config(config: &Config) -> Self {
        Self {
            api_url: config.api_url.clone(),
            timeout_secs: config.timeout_secs,
        }
    }

    /// Apply command line overrides
    pub fn with_overrides(self, api_url: Option<String>, timeout_secs: Option<u64>) -> Self {
        Self {
            api_url: api_url.or(self.api_url),
            timeout_secs: timeout_secs.or(self.timeout_secs),
        }
    }

    pub fn timeout(&self) -> Duration {
        self.timeout_secs
            .map(Duration::from_secs)
            .unwrap_or(DEFAULT_TIMEOUT)
    }

    pub fn build_client(&self) -> Result<GitHubClient> {
        let mut builder = GitHubClient::builder()
            .timeout(self.timeout())
            .user_agent(constants::github::DEFAULT_USER_AGENT);

        if let Some(url) = &self.api_url {
            if !validators::is_valid_api_url(url) {
                anyhow::bail!("API URL must start with http:// or https://: '{}'", url);
            }
            builder = builder.api_base(url);
        }

        builder.build().context("Failed to build HTTP client")
    }
}
