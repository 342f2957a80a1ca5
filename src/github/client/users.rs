//! Users API methods

use super::GitHubClient;
use crate::github::error::GitHubError;
use crate::github::models::{ProfileRecord, RepositoryRecord};

impl GitHubClient {
    /// Fetch the public profile of `username`
    pub fn fetch_profile(
        &self,
        username: impl Into<String>,
    ) -> crate::runtime::AsyncTask<Result<ProfileRecord, GitHubError>> {
        crate::github::get_user::get_user(self.inner.clone(), username)
    }

    /// Fetch the repositories owned by `username` (first page only)
    pub fn fetch_repos(
        &self,
        username: impl Into<String>,
    ) -> crate::runtime::AsyncTask<Result<Vec<RepositoryRecord>, GitHubError>> {
        crate::github::list_user_repos::list_user_repos(
            self.inner.clone(),
            username,
            self.repos_per_page,
        )
    }
}
