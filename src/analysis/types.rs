//! Type definitions for profile analysis

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use thiserror::Error;

/// Upper bound of every sub-score.
pub const MAX_SUB_SCORE: f64 = 20.0;

/// Upper bound of the composite score (four sub-scores).
pub const MAX_FINAL_SCORE: f64 = MAX_SUB_SCORE * 4.0;

/// Raised when a metric produces a non-finite sub-score.
#[derive(Error, Debug, Clone, PartialEq)]
#[error("invalid {category} metric: computed {value}")]
pub struct InvalidMetricsError {
    pub category: ScoreCategory,
    pub value: f64,
}

/// The four scored categories, in reporting order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScoreCategory {
    Documentation,
    Activity,
    Impact,
    TechnicalDepth,
}

impl ScoreCategory {
    /// All categories in the fixed order used for feedback and reports.
    pub const ALL: [ScoreCategory; 4] = [
        Self::Documentation,
        Self::Activity,
        Self::Impact,
        Self::TechnicalDepth,
    ];

    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Documentation => "documentation",
            Self::Activity => "activity",
            Self::Impact => "impact",
            Self::TechnicalDepth => "technical depth",
        }
    }
}

impl fmt::Display for ScoreCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Flat statistics derived from a repository list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AggregateMetrics {
    pub total_repos: u64,
    pub total_stars: u64,
    pub languages: BTreeSet<String>,
    pub documented_repos: u64,
}

impl AggregateMetrics {
    /// Share of documented repositories, `0.0` for an empty list.
    #[must_use]
    pub fn documentation_ratio(&self) -> f64 {
        if self.total_repos == 0 {
            return 0.0;
        }
        self.documented_repos as f64 / self.total_repos as f64
    }
}

/// The four bounded component scores.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SubScores {
    #[serde(rename = "documentationScore")]
    pub documentation: f64,
    #[serde(rename = "activityScore")]
    pub activity: f64,
    #[serde(rename = "impactScore")]
    pub impact: f64,
    #[serde(rename = "technicalDepthScore")]
    pub technical_depth: f64,
}

impl SubScores {
    #[must_use]
    pub fn get(&self, category: ScoreCategory) -> f64 {
        match category {
            ScoreCategory::Documentation => self.documentation,
            ScoreCategory::Activity => self.activity,
            ScoreCategory::Impact => self.impact,
            ScoreCategory::TechnicalDepth => self.technical_depth,
        }
    }

    /// Composite score: the plain sum of the four sub-scores.
    #[must_use]
    pub fn total(&self) -> f64 {
        self.documentation + self.activity + self.impact + self.technical_depth
    }
}

/// Sub-scores plus the composite, as sent to clients.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreCard {
    #[serde(flatten)]
    pub sub_scores: SubScores,
    #[serde(rename = "finalScore")]
    pub final_score: f64,
}

impl From<SubScores> for ScoreCard {
    fn from(sub_scores: SubScores) -> Self {
        Self {
            final_score: sub_scores.total(),
            sub_scores,
        }
    }
}

/// Public part of the account profile echoed back to clients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileSummary {
    pub name: Option<String>,
    pub followers: u64,
}

/// Repository statistics echoed back to clients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileStats {
    pub total_repos: u64,
    pub total_stars: u64,
    pub languages: Vec<String>,
}

impl From<&AggregateMetrics> for ProfileStats {
    fn from(metrics: &AggregateMetrics) -> Self {
        Self {
            total_repos: metrics.total_repos,
            total_stars: metrics.total_stars,
            languages: metrics.languages.iter().cloned().collect(),
        }
    }
}

/// Complete response envelope of one analysis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub profile: ProfileSummary,
    pub stats: ProfileStats,
    pub scores: ScoreCard,
    pub suggestions: Vec<String>,
}
