//! GitHub pull request submission library
//!
//! This library resolves a GitHub credential, validates a pull request
//! definition and submits it to the REST API, classifying the response into
//! a [`SubmissionResult`].
//!
//! ## Modules
//!
//! - [`client`]: HTTP client configuration (API base URL, timeout, user agent)
//! - [`credentials`]: Credential type and resolvers
//! - [`pull_requests`]: Pull request specification and the submit operation
//! - [`result`]: Typed submission outcomes
//! - [`util`]: Repository coordinate parsing

mod client;
mod credentials;
mod pull_requests;
mod result;
mod util;

// Re-export public API
pub use client::{DEFAULT_API_BASE, DEFAULT_TIMEOUT, GitHubClient, GitHubClientBuilder};
pub use credentials::{
    Credential, CredentialError, CredentialResolver, EnvCredentialResolver,
    GITHUB_TOKEN_VAR, StaticCredentialResolver,
};
pub use pull_requests::{PullRequestSpec, RepositoryCoordinates, SpecError};
pub use result::SubmissionResult;
pub use util::parse_github_url;
