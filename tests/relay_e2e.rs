//! End-to-end relay tests: router → file asset → reqwest client → mock TTS service

use std::path::{Path, PathBuf};
use std::sync::Arc;

use apitts_relay::infrastructure::adapters::{
    FileReferenceAudio, HttpTtsClient, HttpTtsClientConfig,
};
use apitts_relay::infrastructure::http::{AppState, HttpServer, ServerConfig};
use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use axum::Router;
use mockito::{Matcher, Server};
use serde_json::{json, Value};
use tokio::net::TcpListener;
use tower::util::ServiceExt;

const ASSET_BYTES: &[u8] = b"RIFF-simba-reference-voice";

fn write_asset(dir: &Path) -> PathBuf {
    let path = dir.join("0712-000938-simba1.wav");
    std::fs::write(&path, ASSET_BYTES).unwrap();
    path
}

fn relay(downstream_url: &str, asset_path: &Path) -> Router {
    relay_with(HttpTtsClientConfig::new(downstream_url), asset_path)
}

fn relay_with(tts_config: HttpTtsClientConfig, asset_path: &Path) -> Router {
    let tts = HttpTtsClient::new(tts_config).unwrap();
    let state = AppState::new(
        Arc::new(FileReferenceAudio::new(asset_path, "audio/wav")),
        Arc::new(tts),
    );
    HttpServer::new(ServerConfig::default(), state).router()
}

fn post_json(body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/process_apitts")
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn json_body(response: axum::response::Response) -> Value {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn hello_in_english_returns_downstream_body() {
    let dir = tempfile::tempdir().unwrap();
    let asset = write_asset(dir.path());

    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/apitts")
        .match_body(Matcher::AllOf(vec![
            Matcher::Regex(r#"name="text"\r\n\r\nhello\r\n"#.into()),
            Matcher::Regex(r#"name="language"\r\n\r\nen\r\n"#.into()),
            Matcher::Regex(r#"name="audio"; filename="0712-000938-simba1.wav""#.into()),
            Matcher::Regex("RIFF-simba-reference-voice".into()),
        ]))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"audio_url": "http://127.0.0.1:9988/out.wav"}"#)
        .expect(1)
        .create_async()
        .await;

    let response = relay(&server.url(), &asset)
        .oneshot(post_json(r#"{"text": "hello", "language": "en"}"#))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        json_body(response).await,
        json!({"audio_url": "http://127.0.0.1:9988/out.wav"})
    );
    mock.assert_async().await;
}

#[tokio::test]
async fn empty_object_forwards_empty_fields_once() {
    let dir = tempfile::tempdir().unwrap();
    let asset = write_asset(dir.path());

    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/apitts")
        .match_body(Matcher::AllOf(vec![
            Matcher::Regex(r#"name="text"\r\n\r\n\r\n"#.into()),
            Matcher::Regex(r#"name="language"\r\n\r\n\r\n"#.into()),
            Matcher::Regex("RIFF-simba-reference-voice".into()),
        ]))
        .with_status(200)
        .with_body(r#"{"error": "empty text"}"#)
        .expect(1)
        .create_async()
        .await;

    let response = relay(&server.url(), &asset)
        .oneshot(post_json("{}"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(json_body(response).await, json!({"error": "empty text"}));
    mock.assert_async().await;
}

#[tokio::test]
async fn missing_asset_fails_every_request_without_dispatch() {
    let dir = tempfile::tempdir().unwrap();
    let asset = dir.path().join("never-created.wav");

    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/apitts")
        .with_status(200)
        .with_body("{}")
        .expect(0)
        .create_async()
        .await;

    let app = relay(&server.url(), &asset);
    for _ in 0..3 {
        let response = app
            .clone()
            .oneshot(post_json(r#"{"text": "hello", "language": "en"}"#))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(json_body(response).await["code"], "ASSET_UNAVAILABLE");
    }
    mock.assert_async().await;
}

#[tokio::test]
async fn unreachable_downstream_is_bad_gateway() {
    let dir = tempfile::tempdir().unwrap();
    let asset = write_asset(dir.path());

    let response = relay("http://127.0.0.1:1", &asset)
        .oneshot(post_json(r#"{"text": "hello", "language": "en"}"#))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    assert_eq!(json_body(response).await["code"], "DOWNSTREAM_UNREACHABLE");
}

#[tokio::test]
async fn non_json_downstream_is_malformed() {
    let dir = tempfile::tempdir().unwrap();
    let asset = write_asset(dir.path());

    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/apitts")
        .with_status(500)
        .with_body("Internal Server Error")
        .expect(1)
        .create_async()
        .await;

    let response = relay(&server.url(), &asset)
        .oneshot(post_json(r#"{"text": "hello", "language": "en"}"#))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    assert_eq!(json_body(response).await["code"], "DOWNSTREAM_MALFORMED");
    mock.assert_async().await;
}

#[tokio::test]
async fn silent_downstream_times_out_as_gateway_timeout() {
    let dir = tempfile::tempdir().unwrap();
    let asset = write_asset(dir.path());

    // accepts connections and never writes a response
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let holder = tokio::spawn(async move {
        let mut held = Vec::new();
        while let Ok((socket, _)) = listener.accept().await {
            held.push(socket);
        }
    });

    let tts_config = HttpTtsClientConfig::new(format!("http://{}", addr)).with_timeout(1);
    let response = relay_with(tts_config, &asset)
        .oneshot(post_json(r#"{"text": "hello", "language": "en"}"#))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::GATEWAY_TIMEOUT);
    let body = json_body(response).await;
    assert_eq!(body["errno"], 504);
    assert_eq!(body["code"], "DOWNSTREAM_TIMEOUT");

    holder.abort();
}
