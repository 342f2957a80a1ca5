//! End-to-end profile analysis: URL in, `AnalysisResult` out.

use crate::analysis::{self, AnalysisResult, InvalidMetricsError, ProfileUrlError};
use crate::github::{GitHubClient, GitHubError, settle};
use log::{info, warn};
use thiserror::Error;

/// Failure of a single analysis request.
#[derive(Debug, Error)]
pub enum AnalyzeError {
    /// The input did not yield a username; nothing was fetched.
    #[error(transparent)]
    Validation(#[from] ProfileUrlError),

    /// Either provider lookup failed.
    #[error("Failed to fetch GitHub data: {0}")]
    Provider(#[from] GitHubError),

    /// Scoring produced a non-finite value.
    #[error("Failed to score GitHub profile: {0}")]
    InvalidMetrics(#[from] InvalidMetricsError),
}

/// Runs the analysis pipeline against one shared `GitHubClient`.
///
/// Holds no per-request state, so a single instance serves concurrent requests.
#[derive(Clone, Debug)]
pub struct ProfileAnalyzer {
    client: GitHubClient,
}

impl ProfileAnalyzer {
    #[must_use]
    pub fn new(client: GitHubClient) -> Self {
        Self { client }
    }

    #[must_use]
    pub fn client(&self) -> &GitHubClient {
        &self.client
    }

    /// Analyzes the account named in `github_url`.
    ///
    /// # Errors
    ///
    /// `Validation` before any network call, `Provider` if either fetch fails,
    /// `InvalidMetrics` if scoring cannot produce finite numbers.
    pub async fn analyze(&self, github_url: &str) -> Result<AnalysisResult, AnalyzeError> {
        let username = analysis::extract_username(github_url)?;
        self.analyze_username(&username).await
    }

    /// Analyzes an account by username.
    ///
    /// Profile and repositories are requested concurrently; the first failure
    /// aborts the join and the other result is dropped.
    ///
    /// # Errors
    ///
    /// See [`ProfileAnalyzer::analyze`].
    pub async fn analyze_username(&self, username: &str) -> Result<AnalysisResult, AnalyzeError> {
        info!("Analyzing GitHub profile {username}");

        let profile_task = self.client.fetch_profile(username);
        let repos_task = self.client.fetch_repos(username);

        let (profile, repos) = futures::try_join!(settle(profile_task), settle(repos_task))
            .inspect_err(|e| warn!("GitHub lookup for {username} failed: {e}"))?;

        let result = analysis::analyze_records(&profile, &repos)?;
        info!(
            "Scored {username}: {:.2}/80 across {} repositories",
            result.scores.final_score, result.stats.total_repos
        );
        Ok(result)
    }
}
