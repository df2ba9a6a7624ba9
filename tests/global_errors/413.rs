//! tests/global_errors/413.rs
//! Ensures that request bodies above MAX_REQUEST_BODY_SIZE yield HTTP 413.

#[path = "../mod.rs"]
mod common;

use reqwest::StatusCode;

#[tokio::test]
async fn returns_413_for_oversized_body() {
    let base_url: String = common::spawn_app("http://127.0.0.1:1".to_string());

    // One byte beyond the configured 2 MiB limit.
    let oversized: String = "x".repeat(2_097_153);

    let resp: reqwest::Response = reqwest::Client::new()
        .post(format!("{}/install", base_url))
        .header("content-type", "application/json")
        .body(oversized)
        .send()
        .await
        .expect("Failed to execute request.");

    assert_eq!(resp.status(), StatusCode::PAYLOAD_TOO_LARGE);
}
