//! Tests for username extraction from profile URLs.

use github_talent_score::analysis::{ProfileUrlError, extract_username};

#[test]
fn test_profile_and_repo_urls() {
    assert_eq!(extract_username("https://github.com/alice").unwrap(), "alice");
    assert_eq!(extract_username("https://github.com/alice/").unwrap(), "alice");
    assert_eq!(extract_username("https://github.com/alice/proj").unwrap(), "alice");
    assert_eq!(extract_username("http://www.github.com/bob").unwrap(), "bob");
}

#[test]
fn test_scheme_is_optional() {
    assert_eq!(extract_username("github.com/carol").unwrap(), "carol");
    assert_eq!(extract_username("  github.com/carol  ").unwrap(), "carol");
}

#[test]
fn test_query_and_fragment_are_stripped() {
    assert_eq!(
        extract_username("https://github.com/dave?tab=repositories").unwrap(),
        "dave"
    );
    assert_eq!(extract_username("https://github.com/dave#readme").unwrap(), "dave");
}

#[test]
fn test_host_is_case_insensitive() {
    assert_eq!(extract_username("https://GitHub.com/Erin").unwrap(), "Erin");
}

#[test]
fn test_missing_input() {
    assert_eq!(extract_username(""), Err(ProfileUrlError::Missing));
    assert_eq!(extract_username("   "), Err(ProfileUrlError::Missing));
}

#[test]
fn test_wrong_host() {
    assert!(matches!(
        extract_username("https://gitlab.com/alice"),
        Err(ProfileUrlError::NotAProfileUrl(_))
    ));
}

#[test]
fn test_missing_username() {
    assert!(matches!(
        extract_username("https://github.com/"),
        Err(ProfileUrlError::MissingUsername(_))
    ));
    assert!(matches!(
        extract_username("https://github.com//alice"),
        Err(ProfileUrlError::MissingUsername(_))
    ));
}

#[test]
fn test_missing_message_is_stable() {
    assert_eq!(ProfileUrlError::Missing.to_string(), "GitHub URL is required");
}
