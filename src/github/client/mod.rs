//! GitHub API client wrapper
//!
//! Provides a clean API for the profile lookups without exposing Octocrab.
//!
//! # Examples
//!
//! ```rust,no_run
//! use github_talent_score::GitHubClient;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let gh = GitHubClient::with_token("ghp_...")?;
//!
//!     let profile = gh.fetch_profile("octocat").await??;
//!     let repos = gh.fetch_repos("octocat").await??;
//!     println!("{} owns {} repositories", profile.login, repos.len());
//!
//!     Ok(())
//! }
//! ```

use crate::github::error::{GitHubError, GitHubResult};
use octocrab::Octocrab;
use octocrab::service::middleware::retry::RetryConfig;
use std::sync::Arc;

mod users;

/// Page size used for the repository listing when none is configured (GitHub API max).
pub const DEFAULT_REPOS_PER_PAGE: u8 = 100;

/// GitHub API client wrapper that encapsulates Octocrab.
///
/// The token is fixed at build time and never mutated afterwards.
/// Cloning is cheap (Arc clone).
#[derive(Clone, Debug)]
pub struct GitHubClient {
    inner: Arc<Octocrab>,
    repos_per_page: u8,
}

impl GitHubClient {
    /// Create a new client builder
    #[must_use]
    pub fn builder() -> GitHubClientBuilder {
        GitHubClientBuilder::new()
    }

    /// Convenience: create client with personal access token
    pub fn with_token(token: impl Into<String>) -> GitHubResult<Self> {
        Self::builder().personal_token(token).build()
    }

    /// Get inner Octocrab client
    #[must_use]
    pub fn inner(&self) -> &Arc<Octocrab> {
        &self.inner
    }

    /// Page size requested when listing repositories
    #[must_use]
    pub fn repos_per_page(&self) -> u8 {
        self.repos_per_page
    }
}

/// Builder for creating `GitHubClient`
pub struct GitHubClientBuilder {
    token: Option<String>,
    base_uri: Option<String>,
    repos_per_page: u8,
}

impl GitHubClientBuilder {
    /// Create a new builder
    #[must_use]
    pub fn new() -> Self {
        Self {
            token: None,
            base_uri: None,
            repos_per_page: DEFAULT_REPOS_PER_PAGE,
        }
    }

    /// Set personal access token, sent as a bearer credential
    pub fn personal_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Set base URI (GitHub Enterprise, or a mock server in tests)
    pub fn base_uri(mut self, uri: impl Into<String>) -> Self {
        self.base_uri = Some(uri.into());
        self
    }

    /// Set the repository listing page size (1..=100)
    #[must_use]
    pub fn repos_per_page(mut self, per_page: u8) -> Self {
        self.repos_per_page = per_page;
        self
    }

    /// Build the `GitHubClient`
    pub fn build(self) -> GitHubResult<GitHubClient> {
        if !(1..=100).contains(&self.repos_per_page) {
            return Err(GitHubError::ClientSetup(format!(
                "repos_per_page must be between 1 and 100, got {}",
                self.repos_per_page
            )));
        }

        // A single attempt per request; failures go straight back to the caller.
        let mut builder = Octocrab::builder().add_retry_config(RetryConfig::None);

        if let Some(token) = self.token {
            builder = builder.personal_token(token);
        }

        if let Some(uri) = self.base_uri {
            builder = builder
                .base_uri(&uri)
                .map_err(|e| GitHubError::ClientSetup(e.to_string()))?;
        }

        let octocrab = builder
            .build()
            .map_err(|e| GitHubError::ClientSetup(e.to_string()))?;

        Ok(GitHubClient {
            inner: Arc::new(octocrab),
            repos_per_page: self.repos_per_page,
        })
    }
}

impl Default for GitHubClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}
