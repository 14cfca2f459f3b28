//! Submit command implementation

use super::{Command, CommandContext};
use crate::config::Config;
use crate::github::{PendingSubmission, Submission, print_submission, submit_all};
use anyhow::Result;
use async_trait::async_trait;
use colored::*;

/// Submit pull requests defined in the configuration file
pub struct SubmitCommand {
    pub config: Config,
    /// Entries to submit; empty means all of them
    pub names: Vec<String>,
    pub parallel: bool,
}

impl SubmitCommand {
    /// Resolve the selected entries before anything is sent
    fn pending(&self) -> Result<Vec<PendingSubmission>> {
        self.config
            .select(&self.names)?
            .into_iter()
            .map(|entry| {
                let (coords, spec) = entry.resolve(self.config.config_dir())?;
                Ok::<_, anyhow::Error>(PendingSubmission {
                    name: entry.name.clone(),
                    coords,
                    spec,
                })
            })
            .collect()
    }
}

#[async_trait]
impl Command for SubmitCommand {
    async fn execute(&self, context: &CommandContext) -> Result<Vec<Submission>> {
        let pending = self.pending()?;

        println!(
            "{}",
            format!("Submitting {} pull request(s)...", pending.len()).green()
        );

        let submissions = submit_all(
            &context.client,
            context.resolver.as_ref(),
            pending,
            self.parallel,
        )
        .await?;

        for submission in &submissions {
            print_submission(submission);
        }

        let created = submissions.iter().filter(|s| s.result.is_created()).count();
        if created == submissions.len() {
            println!("{}", "Done submitting pull requests".green());
        } else {
            println!(
                "{}",
                format!(
                    "Completed with {} created, {} not created",
                    created,
                    submissions.len() - created
                )
                .yellow()
            );
        }

        Ok(submissions)
    }
}
