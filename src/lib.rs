//! pr-submit - Create GitHub pull requests from plain data

pub mod commands;
pub mod config;
pub mod constants;
pub mod github;
pub mod utils;

// Re-export commonly used types
pub use commands::{Command, CommandContext};
pub use config::{Config, PullRequestEntry};
pub use github::{Submission, SubmissionResult};

