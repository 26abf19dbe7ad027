//! Application State

use std::sync::Arc;

use crate::application::{ReferenceAudioPort, RelaySpeechHandler, TtsEnginePort};

/// 应用状态
///
/// 只读，请求之间不共享可变状态
pub struct AppState {
    pub relay_handler: RelaySpeechHandler,
}

impl AppState {
    /// 创建应用状态
    pub fn new(
        reference_audio: Arc<dyn ReferenceAudioPort>,
        tts_engine: Arc<dyn TtsEnginePort>,
    ) -> Self {
        Self {
            relay_handler: RelaySpeechHandler::new(reference_audio, tts_engine),
        }
    }
}
