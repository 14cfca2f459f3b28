//! GitHub integration module
//!
//! Workflow functions on top of the `pr-github` library. The library owns the
//! wire format and response classification; this module wires credential
//! resolution and console reporting around it.

pub mod api;

// Re-export commonly used items for convenience
pub use api::{PendingSubmission, Submission, print_submission, submit_all, submit_pull_request};
pub use pr_github::{
    Credential, CredentialError, CredentialResolver, EnvCredentialResolver, GitHubClient,
    PullRequestSpec, RepositoryCoordinates, StaticCredentialResolver, SubmissionResult,
};
