//! GitHub API operations module
//!
//! Provides the two read-only lookups the scorer needs, using the octocrab library.

pub mod client;
pub mod error;
pub mod models;
pub mod util;

// Re-export client types
pub use client::{DEFAULT_REPOS_PER_PAGE, GitHubClient, GitHubClientBuilder};

// Re-export error types
pub use error::{GitHubError, GitHubResult};
pub use models::{ProfileRecord, RepositoryRecord};
pub use util::{settle, spawn_task};

// GitHub API operations - Users (internal)
pub(crate) mod get_user;
pub(crate) mod list_user_repos;
