use client::{ApiClient, ApiError};
use httpmock::prelude::*;
use serde_json::json;

#[tokio::test]
async fn login_returns_user_and_token() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/api/v1/auth/login")
                .json_body(json!({"email": "a@b.com", "password": "x"}));
            then.status(200).json_body(json!({
                "type": "success",
                "data": {
                    "token": "t1",
                    "user": {
                        "id": "1",
                        "email": "a@b.com",
                        "username": "a",
                        "full_name": "A",
                        "rol": "user"
                    }
                }
            }));
        })
        .await;

    let api = ApiClient::new(server.base_url());
    let auth = api.login("a@b.com", "x").await.unwrap();

    mock.assert_async().await;
    assert_eq!(auth.token, "t1");
    assert_eq!(auth.user.id, "1");
    assert_eq!(auth.user.email, "a@b.com");
}

#[tokio::test]
async fn login_with_wrong_credentials_carries_server_message() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path("/api/v1/auth/login");
            then.status(401)
                .json_body(json!({"type": "error", "message": "Invalid credentials"}));
        })
        .await;

    let api = ApiClient::new(server.base_url());
    let err = api.login("a@b.com", "wrong").await.unwrap_err();

    assert!(matches!(err, ApiError::Unauthorized { .. }));
    assert_eq!(err.to_string(), "Invalid credentials");
}

#[tokio::test]
async fn register_sends_optional_fields_only_when_set() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/api/v1/auth/register")
                .json_body(json!({
                    "email": "new@b.com",
                    "password": "secret",
                    "username": "newbie"
                }));
            then.status(201).json_body(json!({
                "type": "success",
                "data": {
                    "token": "t2",
                    "user": {
                        "id": "9",
                        "email": "new@b.com",
                        "username": "newbie",
                        "full_name": "",
                        "rol": "user"
                    }
                }
            }));
        })
        .await;

    let api = ApiClient::new(server.base_url());
    let request = contracts::auth::RegisterRequest {
        email: "new@b.com".into(),
        password: "secret".into(),
        username: Some("newbie".into()),
        ..Default::default()
    };
    let auth = api.register(&request).await.unwrap();

    mock.assert_async().await;
    assert_eq!(auth.user.username, "newbie");
}

#[tokio::test]
async fn register_validation_warning_is_rejected_with_message() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path("/api/v1/auth/register");
            then.status(400)
                .json_body(json!({"type": "warning", "message": "Email and password are required"}));
        })
        .await;

    let api = ApiClient::new(server.base_url());
    let request = contracts::auth::RegisterRequest::default();
    let err = api.register(&request).await.unwrap_err();

    assert!(matches!(err, ApiError::Rejected(_)));
    assert_eq!(err.to_string(), "Email and password are required");
}

#[tokio::test]
async fn current_user_sends_bearer_token() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/api/v1/auth/me")
                .header("Authorization", "Bearer t1");
            then.status(200).json_body(json!({
                "type": "success",
                "data": {
                    "id": "1",
                    "email": "a@b.com",
                    "username": "a",
                    "full_name": "A",
                    "rol": "admin"
                }
            }));
        })
        .await;

    let api = ApiClient::new(server.base_url());
    let user = api.current_user("t1").await.unwrap();

    mock.assert_async().await;
    assert_eq!(user.rol, contracts::auth::Role::Admin);
}

#[tokio::test]
async fn current_user_with_rejected_token_is_unauthorized() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/api/v1/auth/me");
            then.status(401).body("");
        })
        .await;

    let api = ApiClient::new(server.base_url());
    let err = api.current_user("stale").await.unwrap_err();

    assert!(matches!(err, ApiError::Unauthorized { .. }));
}

#[tokio::test]
async fn unreachable_backend_is_a_transport_error() {
    // Nothing listens on this port.
    let api = ApiClient::new("http://127.0.0.1:1");
    let err = api.login("a@b.com", "x").await.unwrap_err();

    assert!(matches!(err, ApiError::Unreachable(_)));
}
