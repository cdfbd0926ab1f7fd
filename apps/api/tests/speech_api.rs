//! Integration tests for voice input replay.

mod common;

use axum::http::StatusCode;
use common::{body_json, offline_app, post_json};
use serde_json::json;

#[tokio::test]
async fn quiet_after_speech_submits_transcript() {
    let quiet = [0, 0, 1, 0];
    let response = post_json(
        offline_app(),
        "/api/v1/speech/replay",
        json!({
            "recognition_supported": true,
            "inputs": [
                {"type": "token", "text": "tell me about"},
                {"type": "frame", "bins": [120, 90, 200, 60], "at_ms": 0},
                {"type": "token", "text": "tea"},
                {"type": "frame", "bins": quiet, "at_ms": 100},
                {"type": "frame", "bins": quiet, "at_ms": 1599},
                {"type": "frame", "bins": quiet, "at_ms": 1600},
                {"type": "frame", "bins": quiet, "at_ms": 1700}
            ]
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["submitted"], "tell me about tea");
    assert_eq!(json["listening"], false);
    let events = json["events"].as_array().unwrap();
    assert_eq!(events.len(), 4);
    assert_eq!(events[2], json!({"type": "listening"}));
    assert_eq!(events[3]["type"], "submitted");
}

#[tokio::test]
async fn silence_without_words_keeps_listening() {
    let response = post_json(
        offline_app(),
        "/api/v1/speech/replay",
        json!({
            "recognition_supported": true,
            "inputs": [
                {"type": "frame", "bins": [0, 0], "at_ms": 0},
                {"type": "frame", "bins": [0, 0], "at_ms": 2000}
            ]
        }),
    )
    .await;
    let json = body_json(response).await;
    assert!(json["submitted"].is_null());
    assert_eq!(json["listening"], true);
}

#[tokio::test]
async fn stop_finalizes_partial_transcript() {
    let response = post_json(
        offline_app(),
        "/api/v1/speech/replay",
        json!({
            "recognition_supported": true,
            "inputs": [{"type": "token", "text": "partial"}, {"type": "stop"}]
        }),
    )
    .await;
    let json = body_json(response).await;
    assert_eq!(json["submitted"], "partial");
    assert_eq!(json["listening"], false);
}

#[tokio::test]
async fn unsupported_recognition_is_rejected() {
    let response = post_json(
        offline_app(),
        "/api/v1/speech/replay",
        json!({"recognition_supported": false, "inputs": []}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}
