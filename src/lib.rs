//! `github_talent_score` - GitHub profile scoring via Octocrab
//!
//! Fetches a user's profile and repositories, reduces them to aggregate
//! metrics and turns those into four bounded sub-scores (documentation,
//! activity, impact, technical depth), a composite score out of 80 and a list
//! of improvement suggestions. The scoring itself is pure and lives in
//! [`analysis`]; [`server`] exposes it over HTTP.

// Module declarations
pub mod analysis;
pub mod analyzer;
pub mod config;
pub mod github;
pub mod report;
pub mod runtime;
pub mod server;

// Re-export runtime types
pub use runtime::AsyncTask;

// Re-export GitHub client types
pub use github::{GitHubClient, GitHubClientBuilder, GitHubError, GitHubResult};
pub use github::{ProfileRecord, RepositoryRecord};

// Re-export analysis types
pub use analysis::{
    AggregateMetrics, AnalysisResult, InvalidMetricsError, ProfileStats, ProfileSummary,
    ProfileUrlError, ScoreCard, ScoreCategory, SubScores,
};

pub use analyzer::{AnalyzeError, ProfileAnalyzer};
pub use config::{Config, ConfigError};
