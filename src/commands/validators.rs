//! Command argument validation utilities
//!
//! This module provides centralized validation logic for command arguments
//! after clap parsing. Pull request content itself is validated when the
//! specification is built.

use crate::utils::validators::is_valid_api_url;
use anyhow::{Result, anyhow};

/// Validation errors for command arguments
#[derive(Debug, PartialEq)]
pub enum CommandValidationError {
    /// Mutually exclusive arguments were both provided
    MutualExclusivity { first: String, second: String },
    /// Invalid argument value
    InvalidValue {
        argument: String,
        value: String,
        reason: String,
    },
}

impl std::fmt::Display for CommandValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CommandValidationError::MutualExclusivity { first, second } => {
                write!(f, "Cannot specify both {} and {}", first, second)
            }
            CommandValidationError::InvalidValue {
                argument,
                value,
                reason,
            } => {
                write!(f, "Invalid value '{}' for {}: {}", value, argument, reason)
            }
        }
    }
}

impl std::error::Error for CommandValidationError {}

/// Convert validation error to anyhow::Error
pub fn validation_error_to_anyhow(error: CommandValidationError) -> anyhow::Error {
    anyhow!(error.to_string())
}

/// Validate pull request names given on the command line
pub fn validate_pull_request_names(names: &[String]) -> Result<()> {
    for name in names {
        if name.trim().is_empty() {
            return Err(validation_error_to_anyhow(
                CommandValidationError::InvalidValue {
                    argument: "pull request name".to_string(),
                    value: name.clone(),
                    reason: "pull request name cannot be empty or whitespace only".to_string(),
                },
            ));
        }
    }
    Ok(())
}

/// Validate request timeout
pub fn validate_timeout(timeout: &Option<u64>) -> Result<()> {
    if let Some(0) = timeout {
        return Err(validation_error_to_anyhow(
            CommandValidationError::InvalidValue {
                argument: "--timeout".to_string(),
                value: "0".to_string(),
                reason: "timeout must be at least one second".to_string(),
            },
        ));
    }
    Ok(())
}

/// Validate API root override
pub fn validate_api_url(api_url: &Option<String>) -> Result<()> {
    if let Some(url) = api_url
        && !is_valid_api_url(url)
    {
        return Err(validation_error_to_anyhow(
            CommandValidationError::InvalidValue {
                argument: "--api-url".to_string(),
                value: url.clone(),
                reason: "must start with http:// or https://".to_string(),
            },
        ));
    }
    Ok(())
}

/// Validate body arguments
///
/// Ensures at most one of `--body` and `--body-file` is provided
pub fn validate_body_args(body: &Option<String>, body_file: &Option<String>) -> Result<()> {
    if body.is_some() && body_file.is_some() {
        return Err(validation_error_to_anyhow(
            CommandValidationError::MutualExclusivity {
                first: "--body".to_string(),
                second: "--body-file".to_string(),
            },
        ));
    }

    if let Some(path) = body_file
        && path.trim().is_empty()
    {
        return Err(validation_error_to_anyhow(
            CommandValidationError::InvalidValue {
                argument: "--body-file".to_string(),
                value: path.clone(),
                reason: "path cannot be empty".to_string(),
            },
        ));
    }
    Ok(())
}
