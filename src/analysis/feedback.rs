//! Improvement suggestions for weak categories

use crate::analysis::types::{ScoreCategory, SubScores};

/// Sub-scores strictly below this value get a suggestion.
pub const SUGGESTION_THRESHOLD: f64 = 10.0;

/// Fixed advice for a category.
#[must_use]
pub const fn advice(category: ScoreCategory) -> &'static str {
    match category {
        ScoreCategory::Documentation => {
            "Improve README files with clear problem statement and tech stack."
        }
        ScoreCategory::Activity => {
            "Increase consistency by contributing regularly to repositories."
        }
        ScoreCategory::Impact => "Build impactful projects that attract stars and engagement.",
        ScoreCategory::TechnicalDepth => {
            "Work with multiple technologies to demonstrate technical depth."
        }
    }
}

/// One suggestion per category below the threshold, in documentation,
/// activity, impact, technical depth order.
#[must_use]
pub fn suggest(scores: &SubScores) -> Vec<String> {
    ScoreCategory::ALL
        .into_iter()
        .filter(|category| scores.get(*category) < SUGGESTION_THRESHOLD)
        .map(|category| advice(category).to_string())
        .collect()
}
