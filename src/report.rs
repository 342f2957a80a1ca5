//! Plain-text rendering of an analysis for the `analyze` subcommand

use crate::analysis::insights::{self, Confidence, HireRecommendation, Rank};
use crate::analysis::{AnalysisResult, MAX_FINAL_SCORE, MAX_SUB_SCORE, ScoreCategory};
use std::fmt::{self, Write};

/// Renders `result` as a human-readable report.
#[must_use]
pub fn render_text(username: &str, result: &AnalysisResult) -> String {
    let mut out = String::new();
    // Writing into a `String` cannot fail.
    let _ = write_text(&mut out, username, result);
    out
}

/// Writes the report into any `fmt::Write` sink, stopping at the first write error.
///
/// # Errors
///
/// Whatever error `out` returns.
pub fn write_text(out: &mut impl Write, username: &str, result: &AnalysisResult) -> fmt::Result {
    let scores = &result.scores;
    let stats = &result.stats;

    writeln!(out, "GitHub talent report: {username}")?;
    if let Some(name) = &result.profile.name {
        writeln!(out, "Name:        {name}")?;
    }
    writeln!(out, "Followers:   {}", result.profile.followers)?;
    writeln!(out, "Repos:       {}", stats.total_repos)?;
    writeln!(out, "Stars:       {}", stats.total_stars)?;
    let languages = if stats.languages.is_empty() {
        "-".to_string()
    } else {
        stats.languages.join(", ")
    };
    writeln!(out, "Languages:   {languages}")?;

    writeln!(out, "\nScores")?;
    for category in ScoreCategory::ALL {
        writeln!(
            out,
            "  {:<16}{:>6.2} / {MAX_SUB_SCORE}",
            category.as_str(),
            scores.sub_scores.get(category)
        )?;
    }
    writeln!(
        out,
        "  {:<16}{:>6.2} / {MAX_FINAL_SCORE} ({:.0}%)",
        "final",
        scores.final_score,
        insights::score_percent(scores.final_score)
    )?;

    writeln!(out, "\nRank:        {}", Rank::from_score(scores.final_score))?;
    writeln!(
        out,
        "Hiring:      {}",
        HireRecommendation::from_score(scores.final_score)
    )?;
    writeln!(out, "Confidence:  {}", Confidence::from_stats(stats))?;
    writeln!(out, "\n{}", insights::summary(result))?;

    if !result.suggestions.is_empty() {
        writeln!(out, "\nSuggestions")?;
        for suggestion in &result.suggestions {
            writeln!(out, "  - {suggestion}")?;
        }
    }

    writeln!(out, "\nGrowth plan")?;
    for step in insights::growth_plan() {
        writeln!(out, "  {step}")?;
    }
    Ok(())
}
