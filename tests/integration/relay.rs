//! `POST /tts` through the axum router, driven with `oneshot`.

use crate::mock_provider::{success_json, MockProviderFixture, ScriptedTransport};
use axum::body::{to_bytes, Body};
use axum::http::{header, Request, StatusCode};
use axum::Router;
use bytes::Bytes;
use std::sync::Arc;
use std::time::Duration;
use tiktok_tts_relay::server::{router, ErrorBody};
use tiktok_tts_relay::tts::DEFAULT_VOICE;
use tiktok_tts_relay::{RelayConfig, RelayServer, RelayState, TransportError, TtsClient};
use tower::ServiceExt;

fn app(transport: Arc<ScriptedTransport>, config: RelayConfig) -> Router {
    let client = TtsClient::builder()
        .transport(transport)
        .base_delay(Duration::from_millis(1))
        .build()
        .expect("client");
    router(RelayState::new(client, &config))
}

fn tts_request(body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/tts")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn error_detail(resp: axum::response::Response) -> String {
    let bytes = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice::<ErrorBody>(&bytes).unwrap().detail
}

#[tokio::test]
async fn test_success_returns_mpeg_bytes() {
    let transport = ScriptedTransport::succeeding(b"mp3-bytes");
    let config = RelayConfig::default().with_default_session_id("env-session");

    let resp = app(transport.clone(), config)
        .oneshot(tts_request(serde_json::json!({ "text": "chào bạn" })))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(resp.headers()[header::CONTENT_TYPE], "audio/mpeg");
    let body = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    assert_eq!(body, Bytes::from_static(b"mp3-bytes"));

    let calls = transport.calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].text, "chào bạn");
    assert_eq!(calls[0].voice, DEFAULT_VOICE);
    assert_eq!(calls[0].session_id, "env-session");
}

#[tokio::test]
async fn test_missing_credential_never_calls_provider() {
    let transport = ScriptedTransport::succeeding(b"unused");

    let resp = app(transport.clone(), RelayConfig::default())
        .oneshot(tts_request(serde_json::json!({ "text": "hello" })))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        error_detail(resp).await,
        "TIKTOK_SESSIONID not configured and not provided in request."
    );
    assert!(transport.calls().is_empty());
}

#[tokio::test]
async fn test_request_session_overrides_default() {
    let transport = ScriptedTransport::succeeding(b"a");
    let config = RelayConfig::default().with_default_session_id("env-session");

    let resp = app(transport.clone(), config)
        .oneshot(tts_request(serde_json::json!({
            "text": "hello",
            "voice": "en_us_002",
            "session_id": "caller-session"
        })))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let calls = transport.calls();
    assert_eq!(calls[0].session_id, "caller-session");
    assert_eq!(calls[0].voice, "en_us_002");
}

#[tokio::test]
async fn test_empty_session_falls_back_to_default() {
    let transport = ScriptedTransport::succeeding(b"a");
    let config = RelayConfig::default().with_default_session_id("env-session");

    let resp = app(transport.clone(), config)
        .oneshot(tts_request(serde_json::json!({ "text": "hi", "session_id": "" })))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(transport.calls()[0].session_id, "env-session");
}

#[tokio::test]
async fn test_empty_text_is_500_without_calls() {
    let transport = ScriptedTransport::succeeding(b"unused");
    let config = RelayConfig::default().with_default_session_id("s");

    let resp = app(transport.clone(), config)
        .oneshot(tts_request(serde_json::json!({ "text": "" })))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert!(error_detail(resp).await.starts_with("Invalid input"));
    assert!(transport.calls().is_empty());
}

#[tokio::test]
async fn test_exhausted_retries_are_500_with_message() {
    let failure = || {
        Err(TransportError::Status {
            status: 502,
            body: "bad gateway".into(),
        })
    };
    let transport = ScriptedTransport::new(vec![failure(), failure()]);
    let mut config = RelayConfig::default().with_default_session_id("s");
    config.max_attempts = 2;

    let resp = app(transport.clone(), config)
        .oneshot(tts_request(serde_json::json!({ "text": "hello" })))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let detail = error_detail(resp).await;
    assert!(detail.starts_with("TikTok TTS failed after 2 attempts"), "{detail}");
    assert!(detail.contains("502"));
    assert_eq!(transport.calls().len(), 2);
}

#[tokio::test]
async fn test_relay_end_to_end_with_mock_provider() {
    let mut fixture = MockProviderFixture::new().await;
    let mock = fixture
        .mock_speech("live", DEFAULT_VOICE, "one two", 200, &success_json(b"frames"))
        .await;

    let mut config = RelayConfig::default().with_default_session_id("live");
    config.provider_url = fixture.url();
    let server = RelayServer::from_config(config).expect("server");

    let resp = server
        .router()
        .oneshot(tts_request(serde_json::json!({ "text": "one two" })))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let body = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    assert_eq!(body, Bytes::from_static(b"frames"));
    mock.assert_async().await;
}
