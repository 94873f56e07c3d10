use serde_json::json;
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};
use wordpress_client::types::{CreatePost, ListPosts, UpdatePost};
use wordpress_client::{Client, WordPressConfig, WordPressError};

fn client_for(server: &MockServer) -> Client<WordPressConfig> {
    let cfg = WordPressConfig::new()
        .with_base_url(server.uri())
        .with_basic_auth("alice", "secret");
    Client::with_config(cfg)
}

#[tokio::test]
async fn list_returns_records_in_server_order() {
    let server = MockServer::start().await;

    let body = json!([
        {"id": 11, "title": {"rendered": "one"}},
        {"id": 12, "title": {"rendered": "two"}},
        {"id": 13, "title": {"rendered": "three"}},
        {"id": 14, "title": {"rendered": "four"}},
        {"id": 15, "title": {"rendered": "five"}},
    ]);

    Mock::given(method("GET"))
        .and(path("/wp/v2/posts"))
        .and(query_param("per_page", "5"))
        .and(query_param("page", "1"))
        .and(header("authorization", "Basic YWxpY2U6c2VjcmV0"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let posts = client
        .posts()
        .list(&ListPosts {
            limit: 5,
            ..Default::default()
        })
        .await
        .unwrap();

    assert_eq!(posts.len(), 5);
    let ids: Vec<u64> = posts.iter().map(|p| p["id"].as_u64().unwrap()).collect();
    assert_eq!(ids, vec![11, 12, 13, 14, 15]);
}

#[tokio::test]
async fn list_sends_repeated_taxonomy_filters() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/wp/v2/posts"))
        .and(query_param("search", "rust"))
        .and(query_param("status", "publish"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&server)
        .await;

    let client = client_for(&server);
    client
        .posts()
        .list(&ListPosts {
            search: Some("rust".into()),
            status: Some("publish".into()),
            categories: vec![3, 7],
            ..Default::default()
        })
        .await
        .unwrap();

    let requests = server.received_requests().await.unwrap();
    let query = requests[0].url.query().unwrap().to_owned();
    // repeated parameters, one per category ID
    assert!(query.contains("categories%5B%5D=3") || query.contains("categories[]=3"));
    assert!(query.contains("categories%5B%5D=7") || query.contains("categories[]=7"));
}

#[tokio::test]
async fn get_missing_post_is_not_found() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/wp/v2/posts/999"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({
            "code": "rest_post_invalid_id",
            "message": "Invalid post ID.",
            "data": {"status": 404}
        })))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let err = client.posts().get(999).await.unwrap_err();
    match err {
        WordPressError::NotFound { body: Some(body) } => {
            assert_eq!(body.code.as_deref(), Some("rest_post_invalid_id"));
        }
        other => panic!("expected NotFound, got {other:?}"),
    }
    assert_eq!(client.posts().get(999).await.unwrap_err().status(), Some(404));
}

#[tokio::test]
async fn create_then_get_round_trips_sent_fields() {
    let server = MockServer::start().await;

    let record = json!({
        "id": 42,
        "title": {"raw": "Hello", "rendered": "Hello"},
        "content": {"raw": "<p>Body</p>", "rendered": "<p>Body</p>"},
        "status": "draft"
    });

    Mock::given(method("POST"))
        .and(path("/wp/v2/posts"))
        .and(body_json(json!({
            "title": "Hello",
            "content": "<p>Body</p>",
            "status": "draft"
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(record.clone()))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/wp/v2/posts/42"))
        .respond_with(ResponseTemplate::new(200).set_body_json(record))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let created = client
        .posts()
        .create(&CreatePost::new("Hello", "<p>Body</p>"))
        .await
        .unwrap();
    let id = created["id"].as_u64().unwrap();
    assert_eq!(id, 42);

    let fetched = client.posts().get(id).await.unwrap();
    assert_eq!(fetched["title"]["raw"], "Hello");
    assert_eq!(fetched["content"]["raw"], "<p>Body</p>");
    assert_eq!(fetched["status"], "draft");
}

#[tokio::test]
async fn update_sends_only_supplied_fields() {
    let server = MockServer::start().await;

    Mock::given(method("PUT"))
        .and(path("/wp/v2/posts/42"))
        .and(body_json(json!({"title": "X"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": 42,
            "title": {"raw": "X"},
            "status": "draft"
        })))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let updated = client
        .posts()
        .update(
            42,
            &UpdatePost {
                title: Some("X".into()),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(updated["title"]["raw"], "X");
}

#[tokio::test]
async fn delete_passes_force_flag() {
    let server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/wp/v2/posts/42"))
        .and(query_param("force", "true"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "deleted": true,
            "previous": {"id": 42}
        })))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let confirmation = client.posts().delete(42, true).await.unwrap();
    assert_eq!(confirmation["deleted"], true);
}

#[tokio::test]
async fn delete_without_force_returns_trashed_record() {
    let server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/wp/v2/posts/42"))
        .and(query_param("force", "false"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": 42,
            "status": "trash"
        })))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let trashed = client.posts().delete(42, false).await.unwrap();
    assert_eq!(trashed["status"], "trash");
}
