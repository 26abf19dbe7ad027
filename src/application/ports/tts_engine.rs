//! TTS Engine Port - 下游 TTS 服务抽象
//!
//! 定义转发到下游 TTS 服务的抽象接口，具体实现在 infrastructure/adapters 层

use async_trait::async_trait;
use serde_json::Value;
use thiserror::Error;

use crate::domain::{RelayId, SpeechRequest};

use super::reference_audio::ReferenceAudio;

/// TTS 错误
#[derive(Debug, Error)]
pub enum TtsError {
    /// 无法建立连接或连接中断
    #[error("Downstream unreachable: {0}")]
    Unreachable(String),

    #[error("Downstream request timeout")]
    Timeout,

    /// 响应体不是合法 JSON
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// 构造出站请求失败
    #[error("Request build error: {0}")]
    RequestBuild(String),
}

/// 合成请求：文本、语言与参考音频
#[derive(Debug, Clone)]
pub struct SynthesisRequest {
    pub relay_id: RelayId,
    pub speech: SpeechRequest,
    pub reference_audio: ReferenceAudio,
}

/// 下游原样响应
///
/// `body` 已解析为 JSON，但不解释任何字段
#[derive(Debug, Clone, PartialEq)]
pub struct DownstreamReply {
    pub status: u16,
    pub body: Value,
}

impl DownstreamReply {
    pub fn ok(body: Value) -> Self {
        Self { status: 200, body }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// TTS Engine Port
///
/// 每次调用恰好对应一次出站请求，不重试
#[async_trait]
pub trait TtsEnginePort: Send + Sync {
    /// 发送文本、语言和参考音频到下游 TTS 服务，返回其 JSON 响应
    async fn synthesize(&self, request: SynthesisRequest) -> Result<DownstreamReply, TtsError>;
}
