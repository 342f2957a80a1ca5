//! Repository listing for a GitHub account.

use crate::github::models::RepositoryRecord;
use crate::github::util::{get_json, spawn_task};
use crate::github::error::GitHubError;
use crate::runtime::AsyncTask;
use log::debug;
use octocrab::Octocrab;
use std::sync::Arc;

/// List the repositories owned by a GitHub account.
///
/// Only the first page is requested; accounts with more than `per_page`
/// repositories are scored on that page alone.
pub(crate) fn list_user_repos(
    inner: Arc<Octocrab>,
    username: impl Into<String>,
    per_page: u8,
) -> AsyncTask<Result<Vec<RepositoryRecord>, GitHubError>> {
    let username = username.into();

    spawn_task(async move {
        let route = format!(
            "/users/{}/repos?per_page={per_page}",
            urlencoding::encode(&username)
        );
        debug!("GET {route}");

        get_json(&inner, route).await
    })
}
