//! GitHub client implementation

use std::time::Duration;

/// Public GitHub REST API root
pub const DEFAULT_API_BASE: &str = "https://api.github.com";

/// Request timeout used when none is configured
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

const DEFAULT_USER_AGENT: &str = concat!("pr-github/", env!("CARGO_PKG_VERSION"));

/// GitHub API client used to submit pull requests
///
/// The client holds no credential. Every submission receives one explicitly,
/// so the same client can be shared between callers.
#[derive(Debug, Clone)]
pub struct GitHubClient {
    pub(crate) client: reqwest::Client,
    pub(crate) api_base: String,
    pub(crate) user_agent: String,
}

impl GitHubClient {
    /// Create a client against the public API with the default timeout
    pub fn new() -> Result<Self, reqwest::Error> {
        Self::builder().build()
    }

    pub fn builder() -> GitHubClientBuilder {
        GitHubClientBuilder::default()
    }

    /// API root this client sends requests to, without a trailing slash
    pub fn api_base(&self) -> &str {
        &self.api_base
    }
}

/// Builder for [`GitHubClient`]
#[derive(Debug, Clone)]
pub struct GitHubClientBuilder {
    api_base: String,
    timeout: Duration,
    user_agent: String,
}

impl Default for GitHubClientBuilder {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
            timeout: DEFAULT_TIMEOUT,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

impl GitHubClientBuilder {
    /// Override the API root, e.g. `https://github.example.com/api/v3`
    pub fn api_base(mut self, api_base: impl Into<String>) -> Self {
        self.api_base = api_base.into().trim_end_matches('/').to_string();
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    pub fn build(self) -> Result<GitHubClient, reqwest::Error> {
        let client = reqwest::Client::builder().timeout(self.timeout).build()?;
        Ok(GitHubClient {
            client,
            api_base: self.api_base,
            user_agent: self.user_agent,
        })
    }
}
