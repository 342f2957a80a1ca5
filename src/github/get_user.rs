//! GitHub user profile retrieval operation.

use crate::github::models::ProfileRecord;
use crate::github::util::{get_json, spawn_task};
use crate::github::error::GitHubError;
use crate::runtime::AsyncTask;
use log::debug;
use octocrab::Octocrab;
use std::sync::Arc;

/// Get the public profile of a GitHub account.
///
/// Calls the `/users/{username}` endpoint. Unknown accounts come back as
/// `GitHubError::Provider` with status 404.
///
/// # Example
/// ```rust,ignore
/// let client = GitHubClient::with_token("token")?;
/// let profile = client.fetch_profile("octocat").await??;
/// println!("{} has {} public repos", profile.login, profile.public_repos);
/// ```
pub(crate) fn get_user(
    inner: Arc<Octocrab>,
    username: impl Into<String>,
) -> AsyncTask<Result<ProfileRecord, GitHubError>> {
    let username = username.into();

    spawn_task(async move {
        let route = format!("/users/{}", urlencoding::encode(&username));
        debug!("GET {route}");

        get_json(&inner, route).await
    })
}
