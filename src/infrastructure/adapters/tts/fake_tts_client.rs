//! Fake TTS Client - 用于测试的 TTS 客户端
//!
//! 不实际调用下游服务，返回固定 JSON 并记录收到的请求

use async_trait::async_trait;
use serde_json::Value;
use tokio::sync::Mutex;

use crate::application::ports::{DownstreamReply, SynthesisRequest, TtsEnginePort, TtsError};

/// Fake TTS Client
pub struct FakeTtsClient {
    reply: DownstreamReply,
    received: Mutex<Vec<SynthesisRequest>>,
}

impl FakeTtsClient {
    /// 始终以 200 返回给定 JSON
    pub fn new(body: Value) -> Self {
        Self::with_reply(DownstreamReply::ok(body))
    }

    pub fn with_reply(reply: DownstreamReply) -> Self {
        Self {
            reply,
            received: Mutex::new(Vec::new()),
        }
    }

    /// 已收到的请求（按顺序）
    pub async fn received(&self) -> Vec<SynthesisRequest> {
        self.received.lock().await.clone()
    }

    pub async fn call_count(&self) -> usize {
        self.received.lock().await.len()
    }
}

#[async_trait]
impl TtsEnginePort for FakeTtsClient {
    async fn synthesize(&self, request: SynthesisRequest) -> Result<DownstreamReply, TtsError> {
        tracing::debug!(
            relay_id = %request.relay_id,
            audio_size = request.reference_audio.len(),
            "FakeTtsClient: returning fixed reply"
        );
        self.received.lock().await.push(request);
        Ok(self.reply.clone())
    }
}
