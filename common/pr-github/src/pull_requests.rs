//! Pull request operations

use crate::client::GitHubClient;
use crate::credentials::Credential;
use crate::result::SubmissionResult;
use crate::util::parse_github_url;
use reqwest::StatusCode;
use reqwest::header::{ACCEPT, AUTHORIZATION, USER_AGENT};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;
use tracing::{debug, warn};

const GITHUB_V3_ACCEPT: &str = "application/vnd.github.v3+json";

/// Reasons a repository or pull request definition is not well-formed
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SpecError {
    #[error("repository owner cannot be empty")]
    EmptyOwner,
    #[error("repository name cannot be empty")]
    EmptyRepo,
    #[error("invalid repository '{0}': expected owner/repo or a GitHub URL")]
    InvalidRepository(String),
    #[error("pull request title cannot be empty")]
    EmptyTitle,
    #[error("{field} branch name cannot be empty")]
    EmptyBranch { field: &'static str },
    #[error("invalid {field} branch name '{name}'")]
    InvalidBranch { field: &'static str, name: String },
    #[error("head and base branches are both '{0}'")]
    SameBranches(String),
}

/// Owner and name of the target repository
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositoryCoordinates {
    owner: String,
    repo: String,
}

/// GitHub owner and repository names: ASCII letters, digits, `.`, `_` and `-`,
/// excluding the relative path segments `.` and `..`
fn is_path_safe_name(name: &str) -> bool {
    name != "."
        && name != ".."
        && name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-'))
}

impl RepositoryCoordinates {
    pub fn new(owner: impl Into<String>, repo: impl Into<String>) -> Result<Self, SpecError> {
        let owner = owner.into();
        let repo = repo.into();

        if owner.trim().is_empty() {
            return Err(SpecError::EmptyOwner);
        }
        if repo.trim().is_empty() {
            return Err(SpecError::EmptyRepo);
        }
        // Both are placed verbatim in the endpoint path
        if !is_path_safe_name(&owner) || !is_path_safe_name(&repo) {
            return Err(SpecError::InvalidRepository(format!("{}/{}", owner, repo)));
        }

        Ok(Self { owner, repo })
    }

    /// Parse `owner/repo` or any URL form accepted by [`parse_github_url`]
    pub fn parse(input: &str) -> Result<Self, SpecError> {
        let input = input.trim();
        if input.contains("://") || input.starts_with("git@") || input.starts_with("github.com/") {
            return parse_github_url(input);
        }

        match input.split_once('/') {
            Some((owner, repo)) if !repo.contains('/') => Self::new(owner, repo),
            _ => Err(SpecError::InvalidRepository(input.to_string())),
        }
    }

    pub fn owner(&self) -> &str {
        &self.owner
    }

    pub fn repo(&self) -> &str {
        &self.repo
    }

    /// Pull request collection resource under the given API root
    pub fn pulls_endpoint(&self, api_base: &str) -> String {
        format!("{}/repos/{}/{}/pulls", api_base, self.owner, self.repo)
    }
}

impl FromStr for RepositoryCoordinates {
    type Err = SpecError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for RepositoryCoordinates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.repo)
    }
}

/// Content of the pull request to open
///
/// Constructed once through [`PullRequestSpec::new`] and immutable afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PullRequestSpec {
    title: String,
    head: String,
    base: String,
    body: String,
}

impl PullRequestSpec {
    /// Validate and build a specification
    ///
    /// # Errors
    /// Returns an error if:
    /// - The title is blank
    /// - Either branch name is blank or not a plausible git ref name
    /// - Head and base name the same branch
    pub fn new(
        title: impl Into<String>,
        head: impl Into<String>,
        base: impl Into<String>,
        body: impl Into<String>,
    ) -> Result<Self, SpecError> {
        let title = title.into();
        let head = head.into();
        let base = base.into();

        if title.trim().is_empty() {
            return Err(SpecError::EmptyTitle);
        }
        validate_branch("head", &head)?;
        validate_branch("base", &base)?;
        if head == base {
            return Err(SpecError::SameBranches(head));
        }

        Ok(Self {
            title,
            head,
            base,
            body: body.into(),
        })
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    /// Source branch
    pub fn head(&self) -> &str {
        &self.head
    }

    /// Target branch
    pub fn base(&self) -> &str {
        &self.base
    }

    pub fn body(&self) -> &str {
        &self.body
    }
}

fn validate_branch(field: &'static str, name: &str) -> Result<(), SpecError> {
    if name.trim().is_empty() {
        return Err(SpecError::EmptyBranch { field });
    }

    // Basic Git branch name validation
    if name.starts_with('-')
        || name.ends_with('.')
        || name.ends_with('/')
        || name.contains("..")
        || name.chars().any(char::is_whitespace)
    {
        return Err(SpecError::InvalidBranch {
            field,
            name: name.to_string(),
        });
    }

    Ok(())
}

#[derive(Serialize)]
pub(crate) struct CreatePullRequestPayload<'a> {
    title: &'a str,
    head: &'a str,
    base: &'a str,
    body: &'a str,
}

impl<'a> From<&'a PullRequestSpec> for CreatePullRequestPayload<'a> {
    fn from(spec: &'a PullRequestSpec) -> Self {
        Self {
            title: &spec.title,
            head: &spec.head,
            base: &spec.base,
            body: &spec.body,
        }
    }
}

#[derive(Deserialize)]
struct CreatedPullRequest {
    number: u64,
    html_url: String,
}

impl GitHubClient {
    /// Open a pull request on GitHub
    ///
    /// Issues exactly one `POST /repos/{owner}/{repo}/pulls` and never retries:
    /// the request is not idempotent and a lost confirmation must not lead to a
    /// second pull request.
    ///
    /// # Returns
    /// - `Created` on `201`, with the number and web URL of the new pull request
    /// - `Rejected` on `422`, with the raw response body
    /// - `Failed` on any other status, with the status code and raw body
    /// - `TransportError` if the request fails, times out, or the `201` body
    ///   cannot be read
    pub async fn submit(
        &self,
        coords: &RepositoryCoordinates,
        spec: &PullRequestSpec,
        credential: &Credential,
    ) -> SubmissionResult {
        let url = coords.pulls_endpoint(&self.api_base);
        let payload = CreatePullRequestPayload::from(spec);

        debug!(
            repository = %coords,
            head = spec.head(),
            base = spec.base(),
            "submitting pull request"
        );

        let response = match self
            .client
            .post(&url)
            .header(AUTHORIZATION, credential.authorization_header())
            .header(ACCEPT, GITHUB_V3_ACCEPT)
            .header(USER_AGENT, &self.user_agent)
            .json(&payload)
            .send()
            .await
        {
            Ok(response) => response,
            Err(e) => return transport_error(&url, &e),
        };

        let status = response.status();
        let body = match response.text().await {
            Ok(body) => body,
            Err(e) => return transport_error(&url, &e),
        };

        let result = classify_response(status, body);
        debug!(
            repository = %coords,
            status = status.as_u16(),
            created = result.is_created(),
            "pull request response classified"
        );
        result
    }
}

fn transport_error(url: &str, error: &reqwest::Error) -> SubmissionResult {
    let message = if error.is_timeout() {
        format!("request to {} timed out: {}", url, error)
    } else {
        format!("request to {} failed: {}", url, error)
    };
    warn!(%message, "pull request submission did not complete");
    SubmissionResult::TransportError { message }
}

pub(crate) fn classify_response(status: StatusCode, body: String) -> SubmissionResult {
    match status {
        StatusCode::CREATED => match serde_json::from_str::<CreatedPullRequest>(&body) {
            Ok(pr) => SubmissionResult::Created {
                number: pr.number,
                url: pr.html_url,
            },
            Err(e) => SubmissionResult::TransportError {
                message: format!("failed to parse pull request creation response: {}", e),
            },
        },
        StatusCode::UNPROCESSABLE_ENTITY => SubmissionResult::Rejected { reason: body },
        other => SubmissionResult::Failed {
            status_code: other.as_u16(),
            body,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spec() -> PullRequestSpec {
        PullRequestSpec::new(
            "feat: Add Transaction History Feature (#5)",
            "feature/transaction-history",
            "main",
            "## Summary\n\nAdds a transaction history view.",
        )
        .unwrap()
    }

    #[test]
    fn test_spec_rejects_empty_title() {
        assert_eq!(
            PullRequestSpec::new("  ", "feature", "main", ""),
            Err(SpecError::EmptyTitle)
        );
    }

    #[test]
    fn test_spec_rejects_same_branches() {
        assert_eq!(
            PullRequestSpec::new("Title", "main", "main", ""),
            Err(SpecError::SameBranches("main".to_string()))
        );
    }

    #[test]
    fn test_spec_rejects_bad_branch_names() {
        assert_eq!(
            PullRequestSpec::new("Title", "", "main", ""),
            Err(SpecError::EmptyBranch { field: "head" })
        );
        assert!(matches!(
            PullRequestSpec::new("Title", "feature", "-main", ""),
            Err(SpecError::InvalidBranch { field: "base", .. })
        ));
        assert!(PullRequestSpec::new("Title", "feat..x", "main", "").is_err());
        assert!(PullRequestSpec::new("Title", "feature x", "main", "").is_err());
    }

    #[test]
    fn test_spec_allows_empty_body() {
        let spec = PullRequestSpec::new("Title", "feature", "main", "").unwrap();
        assert_eq!(spec.body(), "");
    }

    #[test]
    fn test_payload_shape() {
        let spec = spec();
        let value = serde_json::to_value(CreatePullRequestPayload::from(&spec)).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "title": "feat: Add Transaction History Feature (#5)",
                "head": "feature/transaction-history",
                "base": "main",
                "body": "## Summary\n\nAdds a transaction history view.",
            })
        );
    }

    #[test]
    fn test_coordinates_parse_short_form() {
        let coords = RepositoryCoordinates::parse("BuildersWCT/stakingDapp").unwrap();
        assert_eq!(coords.owner(), "BuildersWCT");
        assert_eq!(coords.repo(), "stakingDapp");
        assert_eq!(coords.to_string(), "BuildersWCT/stakingDapp");
    }

    #[test]
    fn test_coordinates_parse_url_forms() {
        let https: RepositoryCoordinates = "https://github.com/owner/repo.git".parse().unwrap();
        let ssh: RepositoryCoordinates = "git@github.com:owner/repo.git".parse().unwrap();
        assert_eq!(https, ssh);
    }

    #[test]
    fn test_coordinates_reject_malformed() {
        assert!(RepositoryCoordinates::parse("owner").is_err());
        assert!(RepositoryCoordinates::parse("owner/repo/extra").is_err());
        assert_eq!(
            RepositoryCoordinates::parse("/repo"),
            Err(SpecError::EmptyOwner)
        );
        assert_eq!(
            RepositoryCoordinates::new("owner", " "),
            Err(SpecError::EmptyRepo)
        );
        assert!(RepositoryCoordinates::new("my owner", "repo").is_err());
    }

    #[test]
    fn test_coordinates_reject_path_altering_names() {
        for (owner, repo) in [
            ("owner", ".."),
            ("..", "repo"),
            ("owner", "."),
            ("owner", "repo#fragment"),
            ("owner", "repo?query=1"),
            ("own%2Fer", "repo"),
            ("owner", "repo/pulls"),
        ] {
            assert_eq!(
                RepositoryCoordinates::new(owner, repo),
                Err(SpecError::InvalidRepository(format!("{}/{}", owner, repo))),
                "{owner}/{repo} should be rejected"
            );
        }
        assert!(RepositoryCoordinates::parse("owner/..").is_err());
    }

    #[test]
    fn test_coordinates_accept_github_name_characters() {
        let coords = RepositoryCoordinates::new("Builders-WCT", "staking_Dapp.v2").unwrap();
        assert_eq!(
            coords.pulls_endpoint("https://api.github.com"),
            "https://api.github.com/repos/Builders-WCT/staking_Dapp.v2/pulls"
        );
    }

    #[test]
    fn test_pulls_endpoint() {
        let coords = RepositoryCoordinates::new("Ryjen1", "stakingDapp").unwrap();
        assert_eq!(
            coords.pulls_endpoint("https://api.github.com"),
            "https://api.github.com/repos/Ryjen1/stakingDapp/pulls"
        );
    }

    #[test]
    fn test_classify_created() {
        let result = classify_response(
            StatusCode::CREATED,
            r#"{"number": 42, "html_url": "https://x/pulls/42", "state": "open"}"#.to_string(),
        );
        assert_eq!(
            result,
            SubmissionResult::Created {
                number: 42,
                url: "https://x/pulls/42".to_string()
            }
        );
    }

    #[test]
    fn test_classify_created_with_unexpected_body() {
        let result = classify_response(StatusCode::CREATED, r#"{"id": 1}"#.to_string());
        assert!(matches!(result, SubmissionResult::TransportError { .. }));
    }

    #[test]
    fn test_classify_unprocessable() {
        let body = r#"{"message":"Validation Failed"}"#.to_string();
        assert_eq!(
            classify_response(StatusCode::UNPROCESSABLE_ENTITY, body.clone()),
            SubmissionResult::Rejected { reason: body }
        );
    }

    #[test]
    fn test_classify_other_status() {
        assert_eq!(
            classify_response(StatusCode::UNAUTHORIZED, "Bad credentials".to_string()),
            SubmissionResult::Failed {
                status_code: 401,
                body: "Bad credentials".to_string()
            }
        );
        // Success codes other than 201 are not a creation
        assert!(matches!(
            classify_response(StatusCode::OK, "{}".to_string()),
            SubmissionResult::Failed {
                status_code: 200,
                ..
            }
        ));
    }
}
