//! Credential resolution
//!
//! The only supported source is a single environment variable. Resolution is
//! an injected collaborator so callers can substitute a fixed credential.

use std::fmt;
use thiserror::Error;

/// Environment variable holding the GitHub token
pub const GITHUB_TOKEN_VAR: &str = "GITHUB_TOKEN";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CredentialError {
    /// The variable is unset, blank or not valid unicode
    #[error("no GitHub token found. Please set the {variable} environment variable")]
    MissingCredential { variable: String },
}

/// Bearer token sent to the API
///
/// Never printed: `Debug` is redacted and there is no `Display`.
#[derive(Clone, PartialEq, Eq)]
pub struct Credential(String);

impl Credential {
    /// Wrap a token, rejecting blank values
    pub fn new(token: impl Into<String>) -> Option<Self> {
        let token = token.into();
        if token.trim().is_empty() {
            None
        } else {
            Some(Self(token))
        }
    }

    /// Value for the `Authorization` header
    pub(crate) fn authorization_header(&self) -> String {
        format!("token {}", self.0)
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Credential(***)")
    }
}

/// Produces the credential for one invocation
pub trait CredentialResolver: Send + Sync {
    fn resolve(&self) -> Result<Credential, CredentialError>;
}

/// Reads the token from an environment variable, `GITHUB_TOKEN` by default
#[derive(Debug, Clone)]
pub struct EnvCredentialResolver {
    variable: String,
}

impl EnvCredentialResolver {
    pub fn new() -> Self {
        Self::with_variable(GITHUB_TOKEN_VAR)
    }

    pub fn with_variable(variable: impl Into<String>) -> Self {
        Self {
            variable: variable.into(),
        }
    }

    pub fn variable(&self) -> &str {
        &self.variable
    }
}

impl Default for EnvCredentialResolver {
    fn default() -> Self {
        Self::new()
    }
}

impl CredentialResolver for EnvCredentialResolver {
    fn resolve(&self) -> Result<Credential, CredentialError> {
        std::env::var(&self.variable)
            .ok()
            .and_then(Credential::new)
            .ok_or_else(|| CredentialError::MissingCredential {
                variable: self.variable.clone(),
            })
    }
}

/// Always yields the same credential
#[derive(Debug, Clone)]
pub struct StaticCredentialResolver {
    credential: Credential,
}

impl StaticCredentialResolver {
    pub fn new(credential: Credential) -> Self {
        Self { credential }
    }
}

impl CredentialResolver for StaticCredentialResolver {
    fn resolve(&self) -> Result<Credential, CredentialError> {
        Ok(self.credential.clone())
    }
}
