//! GitHub API error types

use serde_json::Value;
use thiserror::Error;

/// Error types for GitHub API operations
#[derive(Debug, Error)]
pub enum GitHubError {
    /// The API answered with a non-success status (404 unknown user, 403 rate limit, ...)
    #[error("GitHub API returned {status}: {}", provider_message(.body))]
    Provider {
        /// HTTP status code returned by the API
        status: u16,
        /// Error body as returned by the API
        body: Value,
    },

    /// Transport failure before a response was received
    #[error("Network error: {0}")]
    Network(String),

    /// A success response whose payload could not be deserialized
    #[error("Unexpected GitHub response: {0}")]
    Decode(String),

    /// Client setup/configuration error
    #[error("Client setup failed: {0}")]
    ClientSetup(String),

    /// The spawned request task was dropped before producing a result
    #[error("GitHub request task was cancelled")]
    TaskCancelled,
}

/// Convenience result alias for GitHub operations
pub type GitHubResult<T> = Result<T, GitHubError>;

impl GitHubError {
    /// HTTP status of the provider response, if there was one.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Provider { status, .. } => Some(*status),
            _ => None,
        }
    }
}

fn provider_message(body: &Value) -> &str {
    body.get("message")
        .and_then(Value::as_str)
        .unwrap_or("no message")
}

// Status handling happens on the raw response, so anything octocrab itself
// reports is a failure to complete the exchange.
impl From<octocrab::Error> for GitHubError {
    fn from(err: octocrab::Error) -> Self {
        GitHubError::Network(err.to_string())
    }
}
