use client::{ApiClient, ApiError};
use httpmock::prelude::*;
use serde_json::json;

#[tokio::test]
async fn stats_returns_aggregate_counts() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(GET).path("/api/v1/users/stats");
            then.status(200).json_body(json!({
                "type": "success",
                "data": {"total_events": 100, "total_users": 20}
            }));
        })
        .await;

    let api = ApiClient::new(server.base_url());
    let stats = api.stats().await.unwrap();

    mock.assert_async().await;
    assert_eq!(stats.total_events, 100);
    assert_eq!(stats.total_users, 20);
}

#[tokio::test]
async fn malformed_stats_body_is_a_parse_error() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/api/v1/users/stats");
            then.status(200).body("<html>not json</html>");
        })
        .await;

    let api = ApiClient::new(server.base_url());
    let err = api.stats().await.unwrap_err();

    assert!(matches!(err, ApiError::Parse(_)));
}
