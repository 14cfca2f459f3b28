//! Base types and traits for the command pattern

use crate::github::Submission;
use anyhow::Result;
use pr_github::{CredentialResolver, GitHubClient};
use std::sync::Arc;

/// Context passed to all commands containing the shared collaborators
#[derive(Clone)]
pub struct CommandContext {
    /// Configured GitHub client
    pub client: GitHubClient,
    /// Source of the credential for this invocation
    pub resolver: Arc<dyn CredentialResolver>,
}

/// Trait that all commands must implement
#[async_trait::async_trait]
pub trait Command {
    /// Execute the command with the given context, returning one outcome per
    /// pull request submitted
    async fn execute(&self, context: &CommandContext) -> Result<Vec<Submission>>;
}
