//! Profile analysis: metrics, scoring and feedback
//!
//! Everything in here is pure and synchronous. The network side lives in
//! [`crate::github`], orchestration in [`crate::analyzer`].

mod feedback;
pub mod insights;
mod metrics;
mod profile_url;
mod scoring;
mod types;

pub use feedback::{SUGGESTION_THRESHOLD, advice, suggest};
pub use metrics::extract;
pub use profile_url::{HOST_MARKER, ProfileUrlError, extract_username};
pub use scoring::{
    ACTIVITY_SATURATION_REPOS, IMPACT_SATURATION_STARS, POINTS_PER_LANGUAGE, activity_score,
    documentation_score, impact_score, score, technical_depth_score,
};
pub use types::{
    AggregateMetrics, AnalysisResult, InvalidMetricsError, MAX_FINAL_SCORE, MAX_SUB_SCORE,
    ProfileStats, ProfileSummary, ScoreCard, ScoreCategory, SubScores,
};

use crate::github::models::{ProfileRecord, RepositoryRecord};

/// Runs extract, score and suggest over already fetched provider data.
///
/// # Errors
///
/// Propagates `InvalidMetricsError` from scoring.
pub fn analyze_records(
    profile: &ProfileRecord,
    repos: &[RepositoryRecord],
) -> Result<AnalysisResult, InvalidMetricsError> {
    let metrics = extract(profile, repos);
    let sub_scores = score(profile, &metrics)?;
    let suggestions = suggest(&sub_scores);

    Ok(AnalysisResult {
        profile: ProfileSummary {
            name: profile.name.clone(),
            followers: profile.followers,
        },
        stats: ProfileStats::from(&metrics),
        scores: ScoreCard::from(sub_scores),
        suggestions,
    })
}
