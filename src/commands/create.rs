//! Create command implementation

use super::{Command, CommandContext};
use crate::github::{Submission, print_submission, submit_pull_request};
use anyhow::Result;
use async_trait::async_trait;
use pr_github::{PullRequestSpec, RepositoryCoordinates};

/// Submit a single pull request given on the command line
pub struct CreateCommand {
    pub coords: RepositoryCoordinates,
    pub spec: PullRequestSpec,
}

#[async_trait]
impl Command for CreateCommand {
    async fn execute(&self, context: &CommandContext) -> Result<Vec<Submission>> {
        let result = submit_pull_request(
            &context.client,
            context.resolver.as_ref(),
            &self.coords,
            &self.spec,
        )
        .await?;

        let submission = Submission {
            name: self.spec.head().to_string(),
            coords: self.coords.clone(),
            result,
        };
        print_submission(&submission);

        Ok(vec![submission])
    }
}
