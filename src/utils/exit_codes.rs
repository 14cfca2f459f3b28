//! Exit code utilities and mappings
//!
//! `0` means every submission opened a pull request. Anything else is
//! non-zero, with one code per kind of outcome.

use pr_github::{CredentialError, SubmissionResult};

pub const SUCCESS: i32 = 0;
pub const GENERAL_ERROR: i32 = 1;
/// Command line parsing failed (reported by clap)
pub const USAGE_ERROR: i32 = 2;
pub const REJECTED: i32 = 3;
pub const FAILED: i32 = 4;
pub const TRANSPORT_ERROR: i32 = 5;
pub const MISSING_CREDENTIAL: i32 = 6;

/// Exit code for a single submission
pub fn exit_code_for(result: &SubmissionResult) -> i32 {
    match result {
        SubmissionResult::Created { .. } => SUCCESS,
        SubmissionResult::Rejected { .. } => REJECTED,
        SubmissionResult::Failed { .. } => FAILED,
        SubmissionResult::TransportError { .. } => TRANSPORT_ERROR,
    }
}

/// Exit code for a batch: the first submission that did not create a pull
/// request decides
pub fn exit_code_for_all<'a>(results: impl IntoIterator<Item = &'a SubmissionResult>) -> i32 {
    results
        .into_iter()
        .map(exit_code_for)
        .find(|code| *code != SUCCESS)
        .unwrap_or(SUCCESS)
}

/// Exit code for an error that stopped the run before or instead of submitting
pub fn exit_code_for_error(error: &anyhow::Error) -> i32 {
    match error.downcast_ref::<CredentialError>() {
        Some(CredentialError::MissingCredential { .. }) => MISSING_CREDENTIAL,
        None => GENERAL_ERROR,
    }
}

/// Get a human-readable description for an exit code
pub fn get_exit_code_description(exit_code: i32) -> &'static str {
    match exit_code {
        SUCCESS => "success",
        GENERAL_ERROR => "general error",
        USAGE_ERROR => "invalid command line usage",
        REJECTED => "pull request rejected",
        FAILED => "GitHub API error",
        TRANSPORT_ERROR => "request did not complete",
        MISSING_CREDENTIAL => "missing credential",
        _ => "error",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn created() -> SubmissionResult {
        SubmissionResult::Created {
            number: 5,
            url: "https://github.com/BuildersWCT/stakingDapp/pull/5".to_string(),
        }
    }

    fn rejected() -> SubmissionResult {
        SubmissionResult::Rejected {
            reason: "{}".to_string(),
        }
    }

    #[test]
    fn test_exit_code_for() {
        assert_eq!(exit_code_for(&created()), 0);
        assert_eq!(exit_code_for(&rejected()), REJECTED);
        assert_eq!(
            exit_code_for(&SubmissionResult::Failed {
                status_code: 404,
                body: "Not Found".to_string()
            }),
            FAILED
        );
        assert_eq!(
            exit_code_for(&SubmissionResult::TransportError {
                message: "timed out".to_string()
            }),
            TRANSPORT_ERROR
        );
    }

    #[test]
    fn test_exit_code_for_all() {
        assert_eq!(exit_code_for_all(&[created(), created()]), SUCCESS);
        assert_eq!(exit_code_for_all(&[created(), rejected()]), REJECTED);
        assert_eq!(exit_code_for_all(Vec::<SubmissionResult>::new().iter()), SUCCESS);
    }

    #[test]
    fn test_exit_code_for_error() {
        let missing = anyhow::Error::new(CredentialError::MissingCredential {
            variable: "GITHUB_TOKEN".to_string(),
        });
        assert_eq!(exit_code_for_error(&missing), MISSING_CREDENTIAL);

        let wrapped = missing.context("while submitting");
        assert_eq!(exit_code_for_error(&wrapped), MISSING_CREDENTIAL);

        assert_eq!(
            exit_code_for_error(&anyhow::anyhow!("bad config")),
            GENERAL_ERROR
        );
    }

    #[test]
    fn test_get_exit_code_description() {
        assert_eq!(get_exit_code_description(0), "success");
        assert_eq!(get_exit_code_description(1), "general error");
        assert_eq!(get_exit_code_description(USAGE_ERROR), "invalid command line usage");
        assert_eq!(get_exit_code_description(3), "pull request rejected");
        assert_eq!(get_exit_code_description(6), "missing credential");
        assert_eq!(get_exit_code_description(42), "error");
    }
}
