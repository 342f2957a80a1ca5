//! GitHub API utilities

use crate::github::error::{GitHubError, GitHubResult};
use crate::runtime::AsyncTask;
use log::debug;
use octocrab::Octocrab;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::future::Future;

/// Spawn an async task for GitHub API operations.
///
/// Thin wrapper around `AsyncTask::spawn_async` so every operation starts
/// running as soon as it is called, before the caller awaits it.
#[inline]
pub fn spawn_task<T, F>(work: F) -> AsyncTask<T>
where
    T: Send + 'static,
    F: Future<Output = T> + Send + 'static,
{
    AsyncTask::spawn_async(work)
}

/// Await a spawned operation and fold the channel error into `GitHubError`.
pub async fn settle<T>(task: AsyncTask<GitHubResult<T>>) -> GitHubResult<T>
where
    T: Send + 'static,
{
    task.await.map_err(|_| GitHubError::TaskCancelled)?
}

/// GET `route` (path and query, relative to the client's base URI) and decode the JSON body.
///
/// Any non-success status becomes `GitHubError::Provider` carrying the body as
/// sent: parsed JSON when it is JSON, the raw text otherwise.
pub(crate) async fn get_json<T>(inner: &Octocrab, route: String) -> GitHubResult<T>
where
    T: DeserializeOwned,
{
    let response = inner._get(route.as_str()).await.map_err(GitHubError::from)?;
    let status = response.status();
    let raw = inner
        .body_to_string(response)
        .await
        .map_err(GitHubError::from)?;

    if !status.is_success() {
        debug!("GET {route} returned {}", status.as_u16());
        return Err(GitHubError::Provider {
            status: status.as_u16(),
            body: provider_body(raw),
        });
    }

    serde_json::from_str(&raw).map_err(|e| GitHubError::Decode(e.to_string()))
}

/// The provider body verbatim: JSON if it parses, otherwise a string.
pub(crate) fn provider_body(raw: String) -> Value {
    serde_json::from_str(&raw).unwrap_or(Value::String(raw))
}
