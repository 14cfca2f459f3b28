//! Central constants for the pr-submit application

/// Default values for Git operations
pub mod git {
    /// Base branch used when a pull request definition does not name one
    pub const DEFAULT_BASE_BRANCH: &str = "main";
}

/// Default values for GitHub operations
pub mod github {
    /// Default User-Agent header for API requests
    pub const DEFAULT_USER_AGENT: &str = concat!("pr-submit/", env!("CARGO_PKG_VERSION"));
}

/// Default values for configuration
pub mod config {
    /// Default configuration file name
    pub const DEFAULT_CONFIG_FILE: &str = "prs.yaml";

    /// Environment variable holding the log filter directive
    pub const LOG_ENV_VAR: &str = "PR_SUBMIT_LOG";

    /// Log filter used when the environment does not provide one
    pub const DEFAULT_LOG_FILTER: &str = "warn";

    /// Log filter used with `--verbose`
    pub const VERBOSE_LOG_FILTER: &str = "pr_submit=debug,pr_github=debug";
}
