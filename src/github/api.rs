//! GitHub API operations
//!
//! High-level submission flow shared by the commands: resolve the credential
//! once, then issue one create request per pull request.

use colored::*;
use futures::future::join_all;
use pr_github::{
    CredentialError, CredentialResolver, GitHubClient, PullRequestSpec, RepositoryCoordinates,
    SubmissionResult,
};
use tracing::debug;

/// A pull request ready to be submitted
#[derive(Debug, Clone)]
pub struct PendingSubmission {
    /// Label used in output
    pub name: String,
    pub coords: RepositoryCoordinates,
    pub spec: PullRequestSpec,
}

/// Outcome of one pending submission
#[derive(Debug, Clone)]
pub struct Submission {
    pub name: String,
    pub coords: RepositoryCoordinates,
    pub result: SubmissionResult,
}

/// Resolve the credential and submit a single pull request
///
/// If the credential cannot be resolved, no request is sent.
pub async fn submit_pull_request(
    client: &GitHubClient,
    resolver: &dyn CredentialResolver,
    coords: &RepositoryCoordinates,
    spec: &PullRequestSpec,
) -> Result<SubmissionResult, CredentialError> {
    let credential = resolver.resolve()?;
    Ok(client.submit(coords, spec, &credential).await)
}

/// Resolve the credential once and submit every pending pull request
///
/// Each pull request gets exactly one request. With `parallel` the requests
/// are in flight together; results keep the input order either way.
pub async fn submit_all(
    client: &GitHubClient,
    resolver: &dyn CredentialResolver,
    pending: Vec<PendingSubmission>,
    parallel: bool,
) -> Result<Vec<Submission>, CredentialError> {
    let credential = resolver.resolve()?;
    debug!(count = pending.len(), parallel, "submitting pull requests");

    let results = if parallel {
        join_all(
            pending
                .iter()
                .map(|p| client.submit(&p.coords, &p.spec, &credential)),
        )
        .await
    } else {
        let mut results = Vec::with_capacity(pending.len());
        for p in &pending {
            results.push(client.submit(&p.coords, &p.spec, &credential).await);
        }
        results
    };

    Ok(pending
        .into_iter()
        .zip(results)
        .map(|(p, result)| Submission {
            name: p.name,
            coords: p.coords,
            result,
        })
        .collect())
}

/// Print one outcome line
///
/// A rejection usually means the pull request already exists, so it is
/// reported as a warning rather than an error.
pub fn print_submission(submission: &Submission) {
    let label = format!("{} ({})", submission.name, submission.coords);

    match &submission.result {
        SubmissionResult::Created { number, url } => {
            println!(
                "{} | {} #{} {}",
                label.cyan().bold(),
                "Pull request created:".green(),
                number,
                url
            );
        }
        SubmissionResult::Rejected { reason } => {
            let messages = submission.result.rejection_messages();
            let detail = if messages.is_empty() {
                reason.clone()
            } else {
                messages.join("; ")
            };
            println!(
                "{} | {} {}",
                label.cyan().bold(),
                "Pull request not created, it might already exist:".yellow(),
                detail
            );
        }
        SubmissionResult::Failed { status_code, body } => {
            eprintln!(
                "{} | {}",
                label.cyan().bold(),
                format!("Failed to create pull request ({}): {}", status_code, body).red()
            );
        }
        SubmissionResult::TransportError { message } => {
            eprintln!(
                "{} | {}",
                label.cyan().bold(),
                format!("Error creating pull request: {}", message).red()
            );
        }
    }
}
