//! Username extraction from a GitHub profile URL

use thiserror::Error;

/// Host marker the username must follow.
pub const HOST_MARKER: &str = "github.com/";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProfileUrlError {
    #[error("GitHub URL is required")]
    Missing,

    #[error("expected a URL containing github.com/<username>, got {0:?}")]
    NotAProfileUrl(String),

    #[error("no username after github.com/ in {0:?}")]
    MissingUsername(String),
}

/// Returns the path segment right after `github.com/`.
///
/// The scheme is optional and the host is matched case-insensitively. The
/// segment ends at the next `/`, `?` or `#`, so repository links such as
/// `https://github.com/alice/proj` resolve to `alice`.
///
/// # Errors
///
/// `Missing` for blank input, `NotAProfileUrl` when the marker is absent,
/// `MissingUsername` when nothing follows it.
pub fn extract_username(input: &str) -> Result<String, ProfileUrlError> {
    let input = input.trim();
    if input.is_empty() {
        return Err(ProfileUrlError::Missing);
    }

    // ASCII lowercasing keeps byte offsets aligned with `input`.
    let start = input
        .to_ascii_lowercase()
        .find(HOST_MARKER)
        .map(|idx| idx + HOST_MARKER.len())
        .ok_or_else(|| ProfileUrlError::NotAProfileUrl(input.to_string()))?;

    let rest = &input[start..];
    let username = rest
        .split(['/', '?', '#'])
        .next()
        .unwrap_or_default();

    if username.is_empty() {
        return Err(ProfileUrlError::MissingUsername(input.to_string()));
    }

    Ok(username.to_string())
}
