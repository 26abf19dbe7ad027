//! HTTP TTS Client - 调用下游 TTS HTTP 服务
//!
//! 实现 TtsEnginePort trait，通过 multipart 表单调用下游 TTS 服务
//!
//! 下游 TTS API:
//! POST http://127.0.0.1:9988/apitts
//! Request: multipart/form-data, 字段 `text`、`language`，文件字段 `audio`
//! Response: JSON（不解释任何字段，原样返回）

use async_trait::async_trait;
use reqwest::{multipart, Client};
use std::time::Duration;

use crate::application::ports::{DownstreamReply, SynthesisRequest, TtsEnginePort, TtsError};

/// HTTP TTS 客户端配置
#[derive(Debug, Clone)]
pub struct HttpTtsClientConfig {
    /// 下游服务基础 URL
    pub base_url: String,
    /// 合成接口路径
    pub path: String,
    /// 请求超时时间（秒），0 表示不限制
    pub timeout_secs: u64,
}

impl Default for HttpTtsClientConfig {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:9988".to_string(),
            path: "/apitts".to_string(),
            timeout_secs: 0,
        }
    }
}

impl HttpTtsClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Default::default()
        }
    }

    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = path.into();
        self
    }

    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

/// HTTP TTS 客户端
pub struct HttpTtsClient {
    client: Client,
    config: HttpTtsClientConfig,
}

impl HttpTtsClient {
    /// 创建新的 HTTP TTS 客户端
    pub fn new(config: HttpTtsClientConfig) -> Result<Self, TtsError> {
        let mut builder = Client::builder();
        if config.timeout_secs > 0 {
            builder = builder.timeout(Duration::from_secs(config.timeout_secs));
        }
        let client = builder
            .build()
            .map_err(|e| TtsError::RequestBuild(e.to_string()))?;

        Ok(Self { client, config })
    }

    /// 获取合成 URL
    pub fn endpoint_url(&self) -> String {
        format!(
            "{}{}",
            self.config.base_url.trim_end_matches('/'),
            self.config.path
        )
    }
}

fn classify_transport_error(e: reqwest::Error) -> TtsError {
    if e.is_timeout() {
        TtsError::Timeout
    } else if e.is_connect() {
        TtsError::Unreachable(format!("Cannot connect to TTS service: {}", e))
    } else {
        TtsError::Unreachable(e.to_string())
    }
}

#[async_trait]
impl TtsEnginePort for HttpTtsClient {
    async fn synthesize(&self, request: SynthesisRequest) -> Result<DownstreamReply, TtsError> {
        let SynthesisRequest {
            relay_id,
            speech,
            reference_audio,
        } = request;

        let audio_part = multipart::Part::bytes(reference_audio.bytes)
            .file_name(reference_audio.file_name)
            .mime_str(&reference_audio.content_type)
            .map_err(|e| TtsError::RequestBuild(e.to_string()))?;

        let form = multipart::Form::new()
            .text("text", speech.text.into_inner())
            .text("language", speech.language.into_inner())
            .part("audio", audio_part);

        let url = self.endpoint_url();
        tracing::debug!(relay_id = %relay_id, url = %url, "Sending TTS request");

        let response = self
            .client
            .post(&url)
            .multipart(form)
            .send()
            .await
            .map_err(classify_transport_error)?;

        let status = response.status();
        let body = response.bytes().await.map_err(classify_transport_error)?;

        let body = serde_json::from_slice(&body).map_err(|e| {
            TtsError::InvalidResponse(format!(
                "HTTP {} with non-JSON body ({} bytes): {}",
                status,
                body.len(),
                e
            ))
        })?;

        if !status.is_success() {
            tracing::warn!(
                relay_id = %relay_id,
                status = %status,
                "TTS service returned non-success status"
            );
        }

        Ok(DownstreamReply {
            status: status.as_u16(),
            body,
        })
    }
}
