//! Relay Command Handlers

use std::sync::Arc;

use crate::application::commands::RelaySpeech;
use crate::application::error::ApplicationError;
use crate::application::ports::{
    DownstreamReply, ReferenceAudioPort, SynthesisRequest, TtsEnginePort,
};
use crate::domain::RelayId;

// ============================================================================
// RelaySpeech
// ============================================================================

/// RelaySpeech Handler
///
/// 读取参考音频 → 单次调用下游 → 返回下游响应。无状态，无重试。
pub struct RelaySpeechHandler {
    reference_audio: Arc<dyn ReferenceAudioPort>,
    tts_engine: Arc<dyn TtsEnginePort>,
}

impl RelaySpeechHandler {
    pub fn new(
        reference_audio: Arc<dyn ReferenceAudioPort>,
        tts_engine: Arc<dyn TtsEnginePort>,
    ) -> Self {
        Self {
            reference_audio,
            tts_engine,
        }
    }

    pub async fn handle(&self, command: RelaySpeech) -> Result<DownstreamReply, ApplicationError> {
        let relay_id = RelayId::new();
        let speech = command.speech;

        if speech.has_missing_fields() {
            tracing::debug!(
                relay_id = %relay_id,
                text_empty = speech.text.is_empty(),
                language_empty = speech.language.is_empty(),
                "Forwarding request with empty fields"
            );
        }

        // 参考音频读取失败时不发起出站请求
        let reference_audio = self.reference_audio.load().await.map_err(|e| {
            tracing::error!(relay_id = %relay_id, error = %e, "Reference audio unavailable");
            ApplicationError::from(e)
        })?;

        tracing::info!(
            relay_id = %relay_id,
            text_len = speech.text.as_str().chars().count(),
            language = %speech.language,
            audio_size = reference_audio.len(),
            "Relaying speech request"
        );

        let reply = self
            .tts_engine
            .synthesize(SynthesisRequest {
                relay_id,
                speech,
                reference_audio,
            })
            .await
            .map_err(|e| {
                tracing::error!(relay_id = %relay_id, error = %e, "Downstream call failed");
                ApplicationError::from(e)
            })?;

        tracing::info!(
            relay_id = %relay_id,
            status = reply.status,
            "Downstream replied"
        );

        Ok(reply)
    }
}
