//! Relay Commands

use crate::domain::SpeechRequest;

/// 转发语音合成命令
#[derive(Debug, Clone)]
pub struct RelaySpeech {
    pub speech: SpeechRequest,
}
