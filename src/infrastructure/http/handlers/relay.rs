//! Relay Handler

use axum::{extract::rejection::JsonRejection, extract::State, http::StatusCode, Json};
use serde_json::Value;
use std::sync::Arc;

use crate::application::RelaySpeech;
use crate::infrastructure::http::dto::RelayTtsRequest;
use crate::infrastructure::http::error::ApiError;
use crate::infrastructure::http::state::AppState;

/// 转发语音合成请求
///
/// 响应体为下游 JSON（解析后重新序列化），状态码与下游一致
pub async fn process_apitts(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<RelayTtsRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<Value>), ApiError> {
    let Json(req) = payload?;

    let reply = state
        .relay_handler
        .handle(RelaySpeech {
            speech: req.into_speech(),
        })
        .await?;

    let status = StatusCode::from_u16(reply.status).map_err(|_| {
        ApiError::DownstreamMalformed(format!("Invalid downstream status: {}", reply.status))
    })?;

    Ok((status, Json(reply.body)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::DownstreamReply;
    use crate::infrastructure::adapters::{FakeTtsClient, FileReferenceAudio};
    use axum::{body::Body, body::to_bytes, http::Request, routing::post, Router};
    use serde_json::json;
    use tempfile::TempDir;
    use tower::util::ServiceExt;

    fn app(audio_path: std::path::PathBuf, tts: Arc<FakeTtsClient>) -> Router {
        let state = AppState::new(Arc::new(FileReferenceAudio::new(audio_path, "audio/wav")), tts);
        Router::new()
            .route("/process_apitts", post(process_apitts))
            .with_state(Arc::new(state))
    }

    fn json_post(body: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/process_apitts")
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn asset_dir() -> (TempDir, std::path::PathBuf) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("reference.wav");
        std::fs::write(&path, b"RIFF-test").unwrap();
        (dir, path)
    }

    async fn body_json(response: axum::response::Response) -> Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_relays_downstream_body() {
        let (_dir, path) = asset_dir();
        let tts = Arc::new(FakeTtsClient::new(json!({"audio_url": "http://x/out.wav"})));

        let response = app(path, tts.clone())
            .oneshot(json_post(r#"{"text":"hello","language":"en"}"#))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await, json!({"audio_url": "http://x/out.wav"}));

        let received = tts.received().await;
        assert_eq!(received.len(), 1);
        assert_eq!(received[0].speech.text.as_str(), "hello");
        assert_eq!(received[0].speech.language.as_str(), "en");
        assert_eq!(received[0].reference_audio.bytes, b"RIFF-test".to_vec());
    }

    #[tokio::test]
    async fn test_mirrors_downstream_status() {
        let (_dir, path) = asset_dir();
        let tts = Arc::new(FakeTtsClient::with_reply(DownstreamReply {
            status: 400,
            body: json!({"error": "text required"}),
        }));

        let response = app(path, tts).oneshot(json_post("{}")).await.unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_json(response).await, json!({"error": "text required"}));
    }

    #[tokio::test]
    async fn test_missing_asset_is_server_error_without_dispatch() {
        let dir = tempfile::tempdir().unwrap();
        let tts = Arc::new(FakeTtsClient::new(json!({})));

        let response = app(dir.path().join("gone.wav"), tts.clone())
            .oneshot(json_post(r#"{"text":"hello","language":"en"}"#))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body_json(response).await["code"], "ASSET_UNAVAILABLE");
        assert_eq!(tts.call_count().await, 0);
    }

    #[tokio::test]
    async fn test_malformed_json_is_bad_request() {
        let (_dir, path) = asset_dir();
        let tts = Arc::new(FakeTtsClient::new(json!({})));

        let response = app(path, tts.clone())
            .oneshot(json_post("{not json"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_json(response).await["code"], "BAD_REQUEST");
        assert_eq!(tts.call_count().await, 0);
    }

    #[tokio::test]
    async fn test_missing_content_type_is_unsupported_media_type() {
        let (_dir, path) = asset_dir();
        let tts = Arc::new(FakeTtsClient::new(json!({})));

        let request = Request::builder()
            .method("POST")
            .uri("/process_apitts")
            .body(Body::from(r#"{"text":"hello","language":"en"}"#))
            .unwrap();
        let response = app(path, tts.clone()).oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::UNSUPPORTED_MEDIA_TYPE);
        let body = body_json(response).await;
        assert_eq!(body["errno"], 415);
        assert_eq!(body["code"], "UNSUPPORTED_MEDIA_TYPE");
        assert_eq!(tts.call_count().await, 0);
    }
}
