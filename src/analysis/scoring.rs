//! Sub-score computation
//!
//! Each category maps one aggregate number onto `[0, 20]`. Documentation is
//! rounded to a whole number, impact keeps its fractional part; the asymmetry
//! is part of the scoring contract.

use crate::analysis::types::{
    AggregateMetrics, InvalidMetricsError, MAX_SUB_SCORE, ScoreCategory, SubScores,
};
use crate::github::models::ProfileRecord;

/// Public repository count above which activity is maxed out.
pub const ACTIVITY_SATURATION_REPOS: u64 = 10;

/// Star count above which impact is maxed out.
pub const IMPACT_SATURATION_STARS: u64 = 50;

/// Points awarded per distinct language.
pub const POINTS_PER_LANGUAGE: f64 = 4.0;

/// Computes the four sub-scores for a profile.
///
/// Activity reads the account's `public_repos`, which may differ from
/// `metrics.total_repos` (the length of the fetched list).
///
/// # Errors
///
/// Returns `InvalidMetricsError` if any category evaluates to a non-finite number.
pub fn score(
    profile: &ProfileRecord,
    metrics: &AggregateMetrics,
) -> Result<SubScores, InvalidMetricsError> {
    Ok(SubScores {
        documentation: bounded(ScoreCategory::Documentation, documentation_score(metrics))?,
        activity: bounded(ScoreCategory::Activity, activity_score(profile.public_repos))?,
        impact: bounded(ScoreCategory::Impact, impact_score(metrics.total_stars))?,
        technical_depth: bounded(
            ScoreCategory::TechnicalDepth,
            technical_depth_score(metrics.languages.len()),
        )?,
    })
}

/// `round(documented / total * 20)`, zero for an empty repository list.
#[must_use]
pub fn documentation_score(metrics: &AggregateMetrics) -> f64 {
    if metrics.total_repos == 0 {
        return 0.0;
    }
    (metrics.documentation_ratio() * MAX_SUB_SCORE)
        .round()
        .min(MAX_SUB_SCORE)
}

/// Two points per public repository, full marks above ten.
#[must_use]
pub fn activity_score(public_repos: u64) -> f64 {
    let raw = if public_repos > ACTIVITY_SATURATION_REPOS {
        MAX_SUB_SCORE
    } else {
        public_repos as f64 * 2.0
    };
    raw.min(MAX_SUB_SCORE)
}

/// One point per three stars, unrounded, full marks above fifty.
#[must_use]
pub fn impact_score(total_stars: u64) -> f64 {
    let raw = if total_stars > IMPACT_SATURATION_STARS {
        MAX_SUB_SCORE
    } else {
        total_stars as f64 / 3.0
    };
    raw.min(MAX_SUB_SCORE)
}

#[must_use]
pub fn technical_depth_score(language_count: usize) -> f64 {
    (language_count as f64 * POINTS_PER_LANGUAGE).min(MAX_SUB_SCORE)
}

fn bounded(category: ScoreCategory, value: f64) -> Result<f64, InvalidMetricsError> {
    if !value.is_finite() {
        return Err(InvalidMetricsError { category, value });
    }
    Ok(value.clamp(0.0, MAX_SUB_SCORE))
}
