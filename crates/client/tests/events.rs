use client::{ApiClient, ApiError};
use contracts::events::{CreateEventRequest, EventDraft, EventPatch, Visibility};
use httpmock::prelude::*;
use serde_json::json;

fn event_json(id: &str, title: &str) -> serde_json::Value {
    json!({
        "id": id,
        "title": title,
        "description": "desc",
        "date": "2026-09-01",
        "status": "active",
        "visibility": "public",
        "user_id": "1"
    })
}

#[tokio::test]
async fn events_lists_without_authentication() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(GET).path("/api/v1/events/");
            then.status(200).json_body(json!({
                "type": "success",
                "data": [event_json("1", "One"), event_json("2", "Two")]
            }));
        })
        .await;

    let api = ApiClient::new(server.base_url());
    let events = api.events().await.unwrap();

    mock.assert_async().await;
    assert_eq!(events.len(), 2);
    assert_eq!(events[1].title, "Two");
}

#[tokio::test]
async fn my_events_requires_bearer_token() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/api/v1/events/my-events")
                .header("Authorization", "Bearer t1");
            then.status(200)
                .json_body(json!({"type": "success", "data": [event_json("5", "Mine")]}));
        })
        .await;

    let api = ApiClient::new(server.base_url());
    let events = api.my_events("t1").await.unwrap();

    mock.assert_async().await;
    assert_eq!(events[0].user_id, "1");
}

#[tokio::test]
async fn create_event_posts_draft_with_owner_id() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/api/v1/events/")
                .header("Authorization", "Bearer t1")
                .json_body(json!({
                    "title": "Meetup",
                    "description": "Monthly",
                    "date": "2026-09-01",
                    "visibility": "private",
                    "user_id": "1"
                }));
            then.status(201)
                .json_body(json!({"type": "success", "data": event_json("9", "Meetup")}));
        })
        .await;

    let api = ApiClient::new(server.base_url());
    let request = CreateEventRequest {
        draft: EventDraft {
            title: "Meetup".into(),
            description: "Monthly".into(),
            date: "2026-09-01".into(),
            visibility: Visibility::Private,
            ..Default::default()
        },
        user_id: Some("1".into()),
    };
    let created = api.create_event(&request, "t1").await.unwrap();

    mock.assert_async().await;
    assert_eq!(created.id, "9");
}

#[tokio::test]
async fn update_event_puts_partial_body() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(PUT)
                .path("/api/v1/events/9")
                .json_body(json!({"title": "Renamed"}));
            then.status(200)
                .json_body(json!({"type": "success", "data": event_json("9", "Renamed")}));
        })
        .await;

    let api = ApiClient::new(server.base_url());
    let patch = EventPatch {
        title: Some("Renamed".into()),
        ..Default::default()
    };
    let updated = api.update_event("9", &patch, "t1").await.unwrap();

    mock.assert_async().await;
    assert_eq!(updated.title, "Renamed");
}

#[tokio::test]
async fn delete_event_accepts_bodyless_ack() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(DELETE).path("/api/v1/events/9");
            then.status(204);
        })
        .await;

    let api = ApiClient::new(server.base_url());
    api.delete_event("9", "t1").await.unwrap();

    mock.assert_async().await;
}

#[tokio::test]
async fn favorite_toggle_round_trips() {
    let server = MockServer::start_async().await;
    let add = server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/api/v1/events/favorites")
                .json_body(json!({"event_id": "9"}));
            then.status(200)
                .json_body(json!({"type": "success", "message": "Added"}));
        })
        .await;
    let remove = server
        .mock_async(|when, then| {
            when.method(DELETE).path("/api/v1/events/favorites/9");
            then.status(200)
                .json_body(json!({"type": "success", "message": "Removed"}));
        })
        .await;

    let api = ApiClient::new(server.base_url());
    api.add_favorite("9", "t1").await.unwrap();
    api.remove_favorite("9", "t1").await.unwrap();

    add.assert_async().await;
    remove.assert_async().await;
}

#[tokio::test]
async fn server_error_surfaces_envelope_message() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(DELETE).path("/api/v1/events/9");
            then.status(404)
                .json_body(json!({"type": "error", "message": "Event not found"}));
        })
        .await;

    let api = ApiClient::new(server.base_url());
    let err = api.delete_event("9", "t1").await.unwrap_err();

    assert!(matches!(err, ApiError::Rejected(_)));
    assert_eq!(err.to_string(), "Event not found");
}
