use client::ApiClient;
use httpmock::prelude::*;
use serde_json::json;

#[tokio::test]
async fn upload_returns_stored_urls() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/api/v1/upload/")
                .header("Authorization", "Bearer t1")
                .header_exists("Content-Type");
            then.status(201).json_body(json!({
                "type": "success",
                "data": {"urls": ["/static/media/uploads/poster_20260901.png"]}
            }));
        })
        .await;

    let api = ApiClient::new(server.base_url());
    let urls = api
        .upload("poster.png", "image/png", vec![0x89, 0x50, 0x4e, 0x47], "t1")
        .await
        .unwrap();

    mock.assert_async().await;
    assert_eq!(urls, vec!["/static/media/uploads/poster_20260901.png"]);
}
