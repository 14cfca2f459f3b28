//! Configuration management module

pub mod loader;
pub mod settings;

pub use loader::{Config, PullRequestEntry};
pub use settings::ClientSettings;
