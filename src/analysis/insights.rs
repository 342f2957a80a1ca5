//! Interpretations layered on top of a finished analysis
//!
//! None of these feed back into the scores; they only phrase an
//! [`AnalysisResult`] for people reading a report.

use crate::analysis::types::{AnalysisResult, MAX_FINAL_SCORE, ProfileStats};
use std::fmt;

/// Experience tier derived from the final score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rank {
    Beginner,
    Pro,
    Elite,
}

impl Rank {
    #[must_use]
    pub fn from_score(final_score: f64) -> Self {
        if final_score < 30.0 {
            Self::Beginner
        } else if final_score < 55.0 {
            Self::Pro
        } else {
            Self::Elite
        }
    }

    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Beginner => "Beginner",
            Self::Pro => "Pro",
            Self::Elite => "Elite Developer",
        }
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Hiring signal derived from the final score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HireRecommendation {
    StrongHire,
    Moderate,
    NeedsImprovement,
}

impl HireRecommendation {
    #[must_use]
    pub fn from_score(final_score: f64) -> Self {
        if final_score > 60.0 {
            Self::StrongHire
        } else if final_score > 40.0 {
            Self::Moderate
        } else {
            Self::NeedsImprovement
        }
    }

    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::StrongHire => "Strong Hire Recommendation",
            Self::Moderate => "Moderate - Consider Further Review",
            Self::NeedsImprovement => "Needs Improvement Before Hiring",
        }
    }
}

impl fmt::Display for HireRecommendation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// How much data the score rests on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Confidence {
    High,
    Medium,
    Developing,
}

impl Confidence {
    /// One point each for more than 8 repos, more than 30 stars and more than
    /// 3 languages.
    #[must_use]
    pub fn from_stats(stats: &ProfileStats) -> Self {
        let signals = [
            stats.total_repos > 8,
            stats.total_stars > 30,
            stats.languages.len() > 3,
        ]
        .into_iter()
        .filter(|hit| *hit)
        .count();

        match signals {
            3 => Self::High,
            2 => Self::Medium,
            _ => Self::Developing,
        }
    }

    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::High => "High Confidence",
            Self::Medium => "Medium Confidence",
            Self::Developing => "Developing Profile",
        }
    }
}

impl fmt::Display for Confidence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Final score as a percentage of the maximum.
#[must_use]
pub fn score_percent(final_score: f64) -> f64 {
    final_score / MAX_FINAL_SCORE * 100.0
}

/// Short narrative assessment of the profile.
#[must_use]
pub fn summary(result: &AnalysisResult) -> String {
    let stats = &result.stats;
    let score = result.scores.final_score;

    let mut parts = vec![if score > 60.0 {
        "This profile demonstrates strong technical expertise and community impact."
    } else if score > 40.0 {
        "This profile shows good development potential with room for strategic improvement."
    } else {
        "This profile is in early growth stage and can significantly improve with focused development efforts."
    }];

    if stats.total_stars < 20 {
        parts.push("Increasing impactful projects can boost visibility and engagement.");
    }
    if stats.languages.len() < 3 {
        parts.push("Expanding the tech stack will demonstrate stronger technical depth.");
    }
    if stats.total_repos < 5 {
        parts.push("Consistency in contributions will improve overall professional presence.");
    }

    parts.join(" ")
}

/// Four-week improvement plan; the same for every profile.
#[must_use]
pub fn growth_plan() -> [&'static str; 4] {
    [
        "Week 1: Improve README documentation and project descriptions.",
        "Week 2: Build one impactful project solving a real-world problem.",
        "Week 3: Learn and integrate a new technology into a project.",
        "Week 4: Optimize GitHub profile branding and contribution consistency.",
    ]
}
