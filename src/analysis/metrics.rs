//! Aggregate metrics extraction from a repository list

use crate::analysis::types::AggregateMetrics;
use crate::github::models::{ProfileRecord, RepositoryRecord};

/// Reduces the fetched repositories into the flat metrics the scorer reads.
///
/// The profile is accepted for symmetry with [`crate::analysis::score`]; the
/// repository count here is always the length of `repos`, never the profile's
/// `public_repos`.
#[must_use]
pub fn extract(_profile: &ProfileRecord, repos: &[RepositoryRecord]) -> AggregateMetrics {
    let mut metrics = AggregateMetrics {
        total_repos: repos.len() as u64,
        ..AggregateMetrics::default()
    };

    for repo in repos {
        metrics.total_stars += repo.stargazers_count;

        if let Some(language) = repo.language.as_deref()
            && !language.is_empty()
        {
            metrics.languages.insert(language.to_string());
        }

        if repo.is_documented() {
            metrics.documented_repos += 1;
        }
    }

    metrics
}
