//! Integration tests for the MoodLog HTTP client

use std::sync::Arc;
use std::time::Duration;

use moodlog_http::{ApiClient, ApiError, ErrorKind, MemoryTokens, TokenStore};
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_with(uri: &str, tokens: Arc<MemoryTokens>) -> ApiClient {
    ApiClient::builder()
        .base_url(uri)
        .token_store(tokens)
        .build()
        .expect("client should build")
}

fn entry_body() -> serde_json::Value {
    json!({
        "entries": [{
            "date": "2025-06-01T00:00:00.000Z",
            "content": "Slept well, long walk in the park.",
            "mood": 4,
            "moodEmoji": "🙂"
        }]
    })
}

#[tokio::test]
async fn test_client_builder() {
    let client = ApiClient::builder()
        .base_url("http://localhost:5000/api/")
        .build();

    assert!(client.is_ok());
    let client = client.unwrap();
    assert_eq!(client.base_url(), "http://localhost:5000/api");
}

#[tokio::test]
async fn test_client_builder_requires_base_url() {
    let result = ApiClient::builder().build();
    assert!(matches!(result, Err(ApiError::Configuration(_))));
}

#[tokio::test]
async fn test_request_without_token_has_no_auth_header() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/stories/categories/list"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "categories": ["Hope", "Recovery"]
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_with(&mock_server.uri(), Arc::new(MemoryTokens::default()));
    let categories = client.story_categories().await.unwrap();
    assert_eq!(categories, vec!["Hope", "Recovery"]);

    let requests = mock_server.received_requests().await.unwrap();
    assert!(!requests[0].headers.contains_key("authorization"));
}

#[tokio::test]
async fn test_first_attempt_success_never_touches_refresh() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/journal/recent"))
        .and(header("authorization", "Bearer live-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(entry_body()))
        .expect(1)
        .mount(&mock_server)
        .await;

    let tokens = Arc::new(MemoryTokens::new("live-token", "refresh-1"));
    let client = client_with(&mock_server.uri(), tokens.clone());

    let entries = client.recent_entries(5).await.unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].mood, 4);

    // Token untouched, refresh endpoint never called.
    assert_eq!(tokens.access_token().as_deref(), Some("live-token"));
    let refresh_calls = mock_server
        .received_requests()
        .await
        .unwrap()
        .iter()
        .filter(|r| r.url.path().ends_with("/auth/refresh"))
        .count();
    assert_eq!(refresh_calls, 0);
}

#[tokio::test]
async fn test_expired_token_refreshes_once_and_replays() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/journal/recent"))
        .and(query_param("limit", "5"))
        .and(header("authorization", "Bearer expired-token"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "message": "Token expired"
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("POST"))
        .and(path("/auth/refresh"))
        .and(body_json(json!({ "refreshToken": "refresh-1" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "token": "fresh-token" })))
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/journal/recent"))
        .and(header("authorization", "Bearer fresh-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(entry_body()))
        .expect(1)
        .mount(&mock_server)
        .await;

    let tokens = Arc::new(MemoryTokens::new("expired-token", "refresh-1"));
    let client = client_with(&mock_server.uri(), tokens.clone());

    // The caller sees entries and no error at all.
    let entries = client.recent_entries(5).await.unwrap();
    assert_eq!(entries.len(), 1);

    // The refreshed token was persisted, not just used once.
    assert_eq!(tokens.access_token().as_deref(), Some("fresh-token"));
    assert_eq!(tokens.refresh_token().as_deref(), Some("refresh-1"));
}

#[tokio::test]
async fn test_refreshed_token_is_used_for_subsequent_requests() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/journal/recent"))
        .and(header("authorization", "Bearer expired-token"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&mock_server)
        .await;

    Mock::given(method("POST"))
        .and(path("/auth/refresh"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "token": "fresh-token" })))
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/journal/recent"))
        .and(header("authorization", "Bearer fresh-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(entry_body()))
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/auth/profile"))
        .and(header("authorization", "Bearer fresh-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "user": { "username": "sam", "displayName": "Sam" }
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let tokens = Arc::new(MemoryTokens::new("expired-token", "refresh-1"));
    let client = client_with(&mock_server.uri(), tokens);

    client.recent_entries(5).await.unwrap();
    let user = client.profile().await.unwrap();
    assert_eq!(user.label(), "Sam");
}

#[tokio::test]
async fn test_replayed_401_does_not_loop() {
    let mock_server = MockServer::start().await;

    // Both the original and the replay are rejected.
    Mock::given(method("GET"))
        .and(path("/journal/recent"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "message": "Nope"
        })))
        .expect(2)
        .mount(&mock_server)
        .await;

    Mock::given(method("POST"))
        .and(path("/auth/refresh"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "token": "fresh-token" })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let tokens = Arc::new(MemoryTokens::new("expired-token", "refresh-1"));
    let client = client_with(&mock_server.uri(), tokens);

    let error = client.recent_entries(5).await.unwrap_err();
    assert!(error.is_unauthorized());
    // Mock expectations verify: two data calls, exactly one refresh.
}

#[tokio::test]
async fn test_refresh_failure_clears_session() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/journal/recent"))
        .respond_with(ResponseTemplate::new(401))
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("POST"))
        .and(path("/auth/refresh"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "message": "Refresh token revoked"
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/stories/categories/list"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "categories": [] })))
        .mount(&mock_server)
        .await;

    let tokens = Arc::new(MemoryTokens::new("expired-token", "refresh-1"));
    let client = client_with(&mock_server.uri(), tokens.clone());

    let error = client.recent_entries(5).await.unwrap_err();
    assert!(error.is_unauthorized());

    // Both tokens gone, and no stale Authorization header afterwards.
    assert_eq!(tokens.access_token(), None);
    assert_eq!(tokens.refresh_token(), None);

    client.story_categories().await.unwrap();
    let requests = mock_server.received_requests().await.unwrap();
    let follow_up = requests
        .iter()
        .find(|r| r.url.path().ends_with("/stories/categories/list"))
        .unwrap();
    assert!(!follow_up.headers.contains_key("authorization"));
}

#[tokio::test]
async fn test_missing_refresh_token_skips_refresh() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/journal/recent"))
        .respond_with(ResponseTemplate::new(401))
        .expect(1)
        .mount(&mock_server)
        .await;

    let tokens = Arc::new(MemoryTokens::default());
    tokens.set_access_token("stale-token");
    let client = client_with(&mock_server.uri(), tokens);

    let error = client.recent_entries(5).await.unwrap_err();
    assert!(error.is_unauthorized());

    let refresh_calls = mock_server
        .received_requests()
        .await
        .unwrap()
        .iter()
        .filter(|r| r.url.path().ends_with("/auth/refresh"))
        .count();
    assert_eq!(refresh_calls, 0);
}

#[tokio::test]
async fn test_concurrent_401s_share_one_refresh() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/journal/recent"))
        .and(header("authorization", "Bearer expired-token"))
        .respond_with(ResponseTemplate::new(401))
        .expect(2)
        .mount(&mock_server)
        .await;

    // The delay keeps the refresh in flight while the second 401 arrives.
    Mock::given(method("POST"))
        .and(path("/auth/refresh"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({ "token": "fresh-token" }))
                .set_delay(Duration::from_millis(200)),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/journal/recent"))
        .and(header("authorization", "Bearer fresh-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(entry_body()))
        .expect(2)
        .mount(&mock_server)
        .await;

    let tokens = Arc::new(MemoryTokens::new("expired-token", "refresh-1"));
    let client = client_with(&mock_server.uri(), tokens);

    let (a, b) = tokio::join!(client.recent_entries(5), client.recent_entries(5));
    assert!(a.is_ok());
    assert!(b.is_ok());
}

#[tokio::test]
async fn test_dropped_connection_normalizes_to_network_error() {
    let mock_server = MockServer::start().await;
    let uri = mock_server.uri();
    drop(mock_server);

    let client = client_with(&uri, Arc::new(MemoryTokens::default()));
    let error = client.story_categories().await.unwrap_err();
    assert_eq!(error.kind(), ErrorKind::Network);
    assert_eq!(error.status(), None);
    assert_eq!(error.to_string(), "Network error. Please check your connection.");
}

#[tokio::test]
async fn test_server_error_normalization() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/journal/mood-trends"))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({
            "message": "Database unavailable"
        })))
        .mount(&mock_server)
        .await;

    let client = client_with(&mock_server.uri(), Arc::new(MemoryTokens::default()));
    let error = client.mood_trends(30).await.unwrap_err();
    assert_eq!(error.kind(), ErrorKind::Server);
    assert_eq!(error.status(), Some(500));
    assert_eq!(error.to_string(), "Server error 500: Database unavailable");
}

#[tokio::test]
async fn test_not_found_normalization() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/stories/missing"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({
            "message": "Story not found"
        })))
        .mount(&mock_server)
        .await;

    let client = client_with(&mock_server.uri(), Arc::new(MemoryTokens::default()));
    let error = client.story("missing").await.unwrap_err();
    assert_eq!(error.kind(), ErrorKind::Client);
    assert_eq!(error.status(), Some(404));
    assert_eq!(error.to_string(), "Story not found");
}

#[tokio::test]
async fn test_validation_errors_surface_each_field() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/stories"))
        .respond_with(ResponseTemplate::new(422).set_body_json(json!({
            "message": "Validation failed",
            "errors": [
                { "field": "title", "message": "Title is required" },
                { "field": "category", "message": "Unknown category" }
            ]
        })))
        .mount(&mock_server)
        .await;

    let client = client_with(&mock_server.uri(), Arc::new(MemoryTokens::default()));
    let request = moodlog_http::types::CreateStoryRequest {
        title: String::new(),
        content: "...".into(),
        category: "Nope".into(),
        tags: vec![],
    };
    let error = client.create_story(&request).await.unwrap_err();
    assert_eq!(error.status(), Some(422));
    assert_eq!(error.field_errors().len(), 2);
    assert_eq!(error.field_errors()[0].field, "title");
    assert_eq!(error.field_errors()[1].message, "Unknown category");
}

#[tokio::test]
async fn test_login_persists_the_credential_pair() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/auth/login"))
        .and(body_json(json!({ "username": "sam", "password": "hunter2" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "token": "access-1",
            "refreshToken": "refresh-1",
            "user": { "username": "sam", "displayName": "Sam" }
        })))
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/auth/profile"))
        .and(header("authorization", "Bearer access-1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "user": { "username": "sam", "displayName": "Sam" }
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let tokens = Arc::new(MemoryTokens::default());
    let client = client_with(&mock_server.uri(), tokens.clone());

    let granted = client.login("sam", "hunter2").await.unwrap();
    assert_eq!(granted.user.label(), "Sam");
    assert_eq!(tokens.access_token().as_deref(), Some("access-1"));
    assert_eq!(tokens.refresh_token().as_deref(), Some("refresh-1"));

    client.profile().await.unwrap();
}

#[tokio::test]
async fn test_logout_clears_tokens_even_when_revocation_fails() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/auth/logout"))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&mock_server)
        .await;

    let tokens = Arc::new(MemoryTokens::new("access-1", "refresh-1"));
    let client = client_with(&mock_server.uri(), tokens.clone());

    client.logout().await.unwrap();
    assert_eq!(tokens.access_token(), None);
    assert_eq!(tokens.refresh_token(), None);
}
