//! Tests for rank, hiring, confidence and summary insights.

use github_talent_score::analysis::insights::{
    Confidence, HireRecommendation, Rank, growth_plan, score_percent, summary,
};
use github_talent_score::{AnalysisResult, ProfileStats, ProfileSummary, ScoreCard, SubScores};

fn stats(total_repos: u64, total_stars: u64, languages: &[&str]) -> ProfileStats {
    ProfileStats {
        total_repos,
        total_stars,
        languages: languages.iter().map(|l| l.to_string()).collect(),
    }
}

fn result_with(final_parts: SubScores, stats: ProfileStats) -> AnalysisResult {
    AnalysisResult {
        profile: ProfileSummary {
            name: None,
            followers: 0,
        },
        stats,
        scores: ScoreCard::from(final_parts),
        suggestions: Vec::new(),
    }
}

#[test]
fn test_rank_bands() {
    assert_eq!(Rank::from_score(0.0), Rank::Beginner);
    assert_eq!(Rank::from_score(29.9), Rank::Beginner);
    assert_eq!(Rank::from_score(30.0), Rank::Pro);
    assert_eq!(Rank::from_score(54.9), Rank::Pro);
    assert_eq!(Rank::from_score(55.0), Rank::Elite);
    assert_eq!(Rank::Elite.to_string(), "Elite Developer");
}

#[test]
fn test_hire_bands() {
    assert_eq!(HireRecommendation::from_score(61.0), HireRecommendation::StrongHire);
    assert_eq!(HireRecommendation::from_score(60.0), HireRecommendation::Moderate);
    assert_eq!(HireRecommendation::from_score(40.5), HireRecommendation::Moderate);
    assert_eq!(
        HireRecommendation::from_score(40.0),
        HireRecommendation::NeedsImprovement
    );
}

#[test]
fn test_confidence_signals() {
    assert_eq!(
        Confidence::from_stats(&stats(9, 31, &["a", "b", "c", "d"])),
        Confidence::High
    );
    assert_eq!(Confidence::from_stats(&stats(9, 31, &["a"])), Confidence::Medium);
    assert_eq!(Confidence::from_stats(&stats(9, 0, &[])), Confidence::Developing);
    assert_eq!(Confidence::from_stats(&stats(8, 30, &["a", "b", "c"])), Confidence::Developing);
}

#[test]
fn test_score_percent() {
    assert_eq!(score_percent(80.0), 100.0);
    assert_eq!(score_percent(40.0), 50.0);
    assert_eq!(score_percent(0.0), 0.0);
}

#[test]
fn test_summary_for_small_profile() {
    let result = result_with(SubScores::default(), stats(2, 3, &["Go"]));
    let text = summary(&result);

    assert!(text.starts_with("This profile is in early growth stage"));
    assert!(text.contains("Increasing impactful projects"));
    assert!(text.contains("Expanding the tech stack"));
    assert!(text.contains("Consistency in contributions"));
}

#[test]
fn test_summary_for_strong_profile() {
    let full = SubScores {
        documentation: 20.0,
        activity: 20.0,
        impact: 20.0,
        technical_depth: 20.0,
    };
    let result = result_with(full, stats(30, 500, &["Go", "Rust", "C"]));

    assert_eq!(
        summary(&result),
        "This profile demonstrates strong technical expertise and community impact."
    );
}

#[test]
fn test_growth_plan_is_four_weeks() {
    let plan = growth_plan();
    assert_eq!(plan.len(), 4);
    assert!(plan[0].starts_with("Week 1"));
    assert!(plan[3].starts_with("Week 4"));
}
