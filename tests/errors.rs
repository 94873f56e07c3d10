use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};
use wordpress_client::types::{ListPosts, Page};
use wordpress_client::{Client, WordPressConfig, WordPressError};

fn client_for(server: &MockServer) -> Client<WordPressConfig> {
    let cfg = WordPressConfig::new()
        .with_base_url(server.uri())
        .with_basic_auth("alice", "wrong-password");
    Client::with_config(cfg)
}

#[tokio::test]
async fn unauthorized_carries_status_401_on_any_endpoint() {
    let server = MockServer::start().await;

    let unauthorized = ResponseTemplate::new(401).set_body_json(json!({
        "code": "rest_cannot_access",
        "message": "Sorry, you are not allowed to do that.",
        "data": {"status": 401}
    }));

    Mock::given(method("GET"))
        .respond_with(unauthorized)
        .mount(&server)
        .await;

    let client = client_for(&server);

    let err = client.posts().list(&ListPosts::default()).await.unwrap_err();
    assert_eq!(err.status(), Some(401));

    let err = client.users().list(&Page::default()).await.unwrap_err();
    match err {
        WordPressError::Api { status: 401, body: Some(body) } => {
            assert_eq!(body.code.as_deref(), Some("rest_cannot_access"));
        }
        other => panic!("expected Api 401, got {other:?}"),
    }
}

#[tokio::test]
async fn malformed_success_body_is_a_parse_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/wp/v2/posts/1"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>maintenance</html>"))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let err = client.posts().get(1).await.unwrap_err();
    assert!(matches!(err, WordPressError::Parse(_)));
}

#[tokio::test]
async fn connection_failure_is_a_transport_error() {
    // nothing listens here
    let cfg = WordPressConfig::new()
        .with_base_url("http://127.0.0.1:1")
        .without_auth();
    let client = Client::with_config(cfg);

    let err = client.posts().get(1).await.unwrap_err();
    assert!(matches!(err, WordPressError::Transport(_)));
    assert!(err.status().is_none());
}

#[tokio::test]
async fn missing_base_url_fails_before_any_request() {
    let cfg = WordPressConfig::new().with_base_url("");
    let client = Client::with_config(cfg);

    let err = client.posts().get(1).await.unwrap_err();
    assert!(matches!(err, WordPressError::Config(_)));
}

#[tokio::test]
async fn server_error_payload_is_preserved() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/wp/v2/posts"))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({
            "code": "internal_server_error",
            "message": "There has been a critical error on this website.",
            "data": {"status": 500}
        })))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let err = client.posts().list(&ListPosts::default()).await.unwrap_err();
    match err {
        WordPressError::Api { status: 500, body: Some(body) } => {
            assert_eq!(body.code.as_deref(), Some("internal_server_error"));
        }
        other => panic!("expected Api 500, got {other:?}"),
    }
}
