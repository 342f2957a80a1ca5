//! Account and repository records as returned by the GitHub REST API.
//!
//! Only the fields the scorer reads are deserialized; everything else in the
//! payload is ignored.

use serde::{Deserialize, Serialize};

/// Account record from `GET /users/{username}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileRecord {
    #[serde(default)]
    pub login: String,
    pub name: Option<String>,
    #[serde(default)]
    pub followers: u64,
    #[serde(default)]
    pub public_repos: u64,
}

/// One entry of `GET /users/{username}/repos`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepositoryRecord {
    #[serde(default)]
    pub stargazers_count: u64,
    pub language: Option<String>,
    #[serde(default)]
    pub has_wiki: bool,
    pub description: Option<String>,
}

impl RepositoryRecord {
    /// A repository counts as documented when it has a wiki or a non-empty description.
    #[must_use]
    pub fn is_documented(&self) -> bool {
        self.has_wiki || self.description.as_deref().is_some_and(|d| !d.is_empty())
    }
}
