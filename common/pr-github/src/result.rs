//! Submission outcomes

use serde::Deserialize;

/// Outcome of one pull request submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionResult {
    /// The pull request was opened
    Created { number: u64, url: String },
    /// The API refused the request with 422, usually because a pull request
    /// for the branch pair already exists
    Rejected { reason: String },
    /// Any other non-success status, body kept verbatim
    Failed { status_code: u16, body: String },
    /// The request did not complete or the response was unusable
    TransportError { message: String },
}

#[derive(Deserialize)]
struct ValidationFailure {
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    errors: Vec<ValidationFailureDetail>,
}

#[derive(Deserialize)]
struct ValidationFailureDetail {
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    code: Option<String>,
}

impl SubmissionResult {
    pub fn is_created(&self) -> bool {
        matches!(self, SubmissionResult::Created { .. })
    }

    /// Human-readable messages from a 422 body
    ///
    /// GitHub reports validation failures as
    /// `{"message": "...", "errors": [{"message": "..."}]}`. Detail messages
    /// come first, then the top-level message. Non-JSON bodies yield nothing.
    pub fn rejection_messages(&self) -> Vec<String> {
        let SubmissionResult::Rejected { reason } = self else {
            return Vec::new();
        };

        let Ok(failure) = serde_json::from_str::<ValidationFailure>(reason) else {
            return Vec::new();
        };

        let mut messages: Vec<String> = failure
            .errors
            .into_iter()
            .filter_map(|detail| detail.message.or(detail.code))
            .collect();
        if let Some(message) = failure.message {
            messages.push(message);
        }
        messages
    }
}
