//! Utility functions for GitHub operations

use crate::pull_requests::{RepositoryCoordinates, SpecError};

/// Parse a GitHub URL into repository coordinates
///
/// Supports various GitHub URL formats:
/// - SSH: `git@github.com:owner/repo.git`
/// - HTTPS: `https://github.com/owner/repo.git`
/// - Legacy: `github.com/owner/repo`
///
/// # Errors
/// Returns [`SpecError::InvalidRepository`] if the URL format is not recognized
pub fn parse_github_url(url: &str) -> Result<RepositoryCoordinates, SpecError> {
    let trimmed = url.trim().trim_end_matches('/').trim_end_matches(".git");

    // Handle SSH URLs: git@github.com:owner/repo or git@github-enterprise:owner/repo
    if trimmed.starts_with("git@")
        && let Some(colon_pos) = trimmed.find(':')
    {
        let parts: Vec<&str> = trimmed[colon_pos + 1..].split('/').collect();
        if let [owner, repo] = parts.as_slice() {
            return RepositoryCoordinates::new(*owner, *repo);
        }
    }

    // Handle HTTPS URLs: https://github.com/owner/repo or https://github-enterprise/owner/repo
    if trimmed.starts_with("https://") || trimmed.starts_with("http://") {
        let without_protocol = trimmed
            .trim_start_matches("https://")
            .trim_start_matches("http://");

        let parts: Vec<&str> = without_protocol.split('/').collect();
        if parts.len() == 3 {
            return RepositoryCoordinates::new(parts[1], parts[2]);
        }
    }

    // Legacy support: github.com/owner/repo
    if trimmed.starts_with("github.com/") {
        let parts: Vec<&str> = trimmed.split('/').collect();
        if parts.len() == 3 {
            return RepositoryCoordinates::new(parts[1], parts[2]);
        }
    }

    Err(SpecError::InvalidRepository(url.to_string()))
}
