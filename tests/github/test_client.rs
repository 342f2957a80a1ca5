//! Tests for the profile and repository lookups against a mock GitHub API.

use github_talent_score::{GitHubClient, GitHubError};
use mockito::Matcher;
use serde_json::{Value, json};

fn client(server: &mockito::ServerGuard) -> GitHubClient {
    GitHubClient::builder()
        .personal_token("test-token")
        .base_uri(server.url())
        .build()
        .unwrap()
}

#[tokio::test]
async fn test_fetch_profile_maps_fields() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/users/alice")
        .match_header("authorization", "Bearer test-token")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            r#"{"login":"alice","id":1,"name":"Alice","followers":40,"following":3,"public_repos":12}"#,
        )
        .create_async()
        .await;

    let profile = client(&server).fetch_profile("alice").await.unwrap().unwrap();

    assert_eq!(profile.login, "alice");
    assert_eq!(profile.name.as_deref(), Some("Alice"));
    assert_eq!(profile.followers, 40);
    assert_eq!(profile.public_repos, 12);
    mock.assert_async().await;
}

#[tokio::test]
async fn test_fetch_profile_null_name() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("GET", "/users/bob")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"login":"bob","name":null,"followers":0,"public_repos":0}"#)
        .create_async()
        .await;

    let profile = client(&server).fetch_profile("bob").await.unwrap().unwrap();

    assert_eq!(profile.name, None);
}

#[tokio::test]
async fn test_fetch_repos_requests_one_page() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/users/alice/repos")
        .match_query(Matcher::UrlEncoded("per_page".into(), "100".into()))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            r#"[
                {"name":"a","stargazers_count":10,"language":"Go","has_wiki":false,"description":"api"},
                {"name":"b","stargazers_count":2,"language":null,"has_wiki":true,"description":null},
                {"name":"c"}
            ]"#,
        )
        .create_async()
        .await;

    let repos = client(&server).fetch_repos("alice").await.unwrap().unwrap();

    assert_eq!(repos.len(), 3);
    assert_eq!(repos[0].stargazers_count, 10);
    assert_eq!(repos[0].language.as_deref(), Some("Go"));
    assert!(repos[1].has_wiki);
    assert_eq!(repos[2].stargazers_count, 0);
    assert!(!repos[2].is_documented());
    mock.assert_async().await;
}

#[tokio::test]
async fn test_not_found_is_provider_error() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("GET", "/users/ghost")
        .with_status(404)
        .with_header("content-type", "application/json")
        .with_body(r#"{"message":"Not Found","documentation_url":"https://docs.github.com/rest"}"#)
        .create_async()
        .await;

    let err = client(&server).fetch_profile("ghost").await.unwrap().unwrap_err();

    match err {
        GitHubError::Provider { status, ref body } => {
            assert_eq!(status, 404);
            assert_eq!(body["message"], "Not Found");
            assert_eq!(body["documentation_url"], "https://docs.github.com/rest");
        }
        other => panic!("expected provider error, got {other:?}"),
    }
    assert_eq!(err.status(), Some(404));
}

#[tokio::test]
async fn test_provider_body_is_kept_verbatim() {
    let mut server = mockito::Server::new_async().await;
    let body = json!({
        "message": "Not Found",
        "documentation_url": "https://docs.github.com/rest",
        "status": "404"
    });
    let _mock = server
        .mock("GET", "/users/ghost")
        .with_status(404)
        .with_header("content-type", "application/json")
        .with_body(body.to_string())
        .create_async()
        .await;

    let err = client(&server).fetch_profile("ghost").await.unwrap().unwrap_err();

    match err {
        GitHubError::Provider { status, body: got } => {
            assert_eq!(status, 404);
            assert_eq!(got, body);
        }
        other => panic!("expected provider error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_gateway_html_error_keeps_status() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("GET", "/users/alice/repos")
        .match_query(Matcher::Any)
        .with_status(502)
        .with_header("content-type", "text/html")
        .with_body("<html>Bad gateway</html>")
        .create_async()
        .await;

    let err = client(&server).fetch_repos("alice").await.unwrap().unwrap_err();

    match err {
        GitHubError::Provider { status, body } => {
            assert_eq!(status, 502);
            assert_eq!(body, Value::String("<html>Bad gateway</html>".into()));
        }
        other => panic!("expected provider error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_malformed_success_body_is_decode_error() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("GET", "/users/alice")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body("<html>not json</html>")
        .create_async()
        .await;

    let err = client(&server).fetch_profile("alice").await.unwrap().unwrap_err();

    assert!(matches!(err, GitHubError::Decode(_)), "{err:?}");
    assert_eq!(err.status(), None);
}

#[tokio::test]
async fn test_rate_limit_is_not_retried() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/users/alice/repos")
        .match_query(Matcher::Any)
        .with_status(403)
        .with_header("content-type", "application/json")
        .with_body(r#"{"message":"API rate limit exceeded"}"#)
        .expect(1)
        .create_async()
        .await;

    let err = client(&server).fetch_repos("alice").await.unwrap().unwrap_err();

    assert_eq!(err.status(), Some(403));
    assert!(err.to_string().contains("API rate limit exceeded"));
    mock.assert_async().await;
}

#[tokio::test]
async fn test_transport_failure_is_network_error() {
    // Nothing listens on port 9 locally.
    let client = GitHubClient::builder()
        .base_uri("http://127.0.0.1:9")
        .build()
        .unwrap();

    let err = client.fetch_profile("alice").await.unwrap().unwrap_err();

    assert!(matches!(err, GitHubError::Network(_)), "{err:?}");
    assert_eq!(err.status(), None);
}

#[tokio::test]
async fn test_token_not_in_error_messages() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("GET", "/users/ghost")
        .with_status(404)
        .with_header("content-type", "application/json")
        .with_body(r#"{"message":"Not Found"}"#)
        .create_async()
        .await;

    let err = client(&server).fetch_profile("ghost").await.unwrap().unwrap_err();

    assert!(!err.to_string().contains("test-token"));
    assert!(!format!("{err:?}").contains("test-token"));
}

#[test]
fn test_repos_per_page_is_validated() {
    let err = GitHubClient::builder().repos_per_page(0).build().unwrap_err();
    assert!(matches!(err, GitHubError::ClientSetup(_)));
}
