//! Configuration validation utilities
//!
//! This module provides centralized validation logic for the pull request
//! configuration file. Every problem is collected so the user can fix them
//! in one pass.

use crate::config::{Config, PullRequestEntry};
use anyhow::anyhow;
use pr_github::{PullRequestSpec, RepositoryCoordinates, SpecError};
use std::collections::HashSet;

/// Enumeration of possible validation errors
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationError {
    /// Configuration has an empty pull request list
    EmptyPullRequestList,
    /// Pull request name is empty
    EmptyPullRequestName,
    /// Duplicate pull request names found
    DuplicatePullRequestName(String),
    /// Repository, title or branches are malformed
    InvalidPullRequest(String, SpecError),
    /// Both `body` and `body_file` were given
    ConflictingBody(String),
    /// Request timeout is zero
    InvalidTimeout,
    /// API URL is not an http(s) URL
    InvalidApiUrl(String),
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationError::EmptyPullRequestList => {
                write!(f, "Configuration must contain at least one pull request")
            }
            ValidationError::EmptyPullRequestName => {
                write!(f, "Pull request name cannot be empty")
            }
            ValidationError::DuplicatePullRequestName(name) => {
                write!(f, "Duplicate pull request name: '{}'", name)
            }
            ValidationError::InvalidPullRequest(name, reason) => {
                write!(f, "Pull request '{}': {}", name, reason)
            }
            ValidationError::ConflictingBody(name) => {
                write!(
                    f,
                    "Pull request '{}' cannot set both body and body_file",
                    name
                )
            }
            ValidationError::InvalidTimeout => {
                write!(f, "timeout_secs must be greater than zero")
            }
            ValidationError::InvalidApiUrl(url) => {
                write!(f, "api_url must start with http:// or https://: '{}'", url)
            }
        }
    }
}

/// Validates a complete configuration object
pub fn validate_config(config: &Config) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.timeout_secs == Some(0) {
        errors.push(ValidationError::InvalidTimeout);
    }

    if let Some(url) = &config.api_url
        && !is_valid_api_url(url)
    {
        errors.push(ValidationError::InvalidApiUrl(url.clone()));
    }

    if let Err(mut entry_errors) = validate_pull_requests(&config.pull_requests) {
        errors.append(&mut entry_errors);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Validates a list of pull request definitions
///
/// Checks for an empty list and duplicate names, then validates each entry.
pub fn validate_pull_requests(entries: &[PullRequestEntry]) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if entries.is_empty() {
        errors.push(ValidationError::EmptyPullRequestList);
    }

    // Check for duplicate names
    let mut names = HashSet::new();
    for entry in entries {
        if !names.insert(&entry.name) {
            errors.push(ValidationError::DuplicatePullRequestName(
                entry.name.clone(),
            ));
        }
    }

    for entry in entries {
        if let Err(mut entry_errors) = validate_pull_request(entry) {
            errors.append(&mut entry_errors);
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Validates a single pull request definition
///
/// The body file is not read here; it is loaded when the entry is submitted.
pub fn validate_pull_request(entry: &PullRequestEntry) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if entry.name.trim().is_empty() {
        errors.push(ValidationError::EmptyPullRequestName);
    }

    if let Err(reason) = RepositoryCoordinates::parse(&entry.repository) {
        errors.push(ValidationError::InvalidPullRequest(
            entry.name.clone(),
            reason,
        ));
    }

    if let Err(reason) = PullRequestSpec::new(&entry.title, &entry.head, &entry.base, "") {
        errors.push(ValidationError::InvalidPullRequest(
            entry.name.clone(),
            reason,
        ));
    }

    if entry.body.is_some() && entry.body_file.is_some() {
        errors.push(ValidationError::ConflictingBody(entry.name.clone()));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Helper function to check if an API root is usable
pub fn is_valid_api_url(url: &str) -> bool {
    url.starts_with("https://") || url.starts_with("http://")
}

/// Converts validation errors to a user-friendly anyhow error
pub fn validation_errors_to_anyhow(errors: Vec<ValidationError>) -> anyhow::Error {
    let error_messages: Vec<String> = errors.iter().map(|e| e.to_string()).collect();
    anyhow!("Validation errors: {}", error_messages.join("; "))
}
