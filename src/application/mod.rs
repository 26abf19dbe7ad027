//! 应用层 - 用例编排
//!
//! 包含：
//! - ports: 六边形架构端口定义（ReferenceAudio、TtsEngine）
//! - commands: 转发命令及处理器
//! - error: 应用层错误定义

pub mod commands;
pub mod error;
pub mod ports;

// Re-exports
pub use commands::{handlers::RelaySpeechHandler, RelaySpeech};

pub use error::ApplicationError;

pub use ports::{
    // Reference audio
    AssetError,
    ReferenceAudio,
    ReferenceAudioPort,
    // TTS engine
    DownstreamReply,
    SynthesisRequest,
    TtsEnginePort,
    TtsError,
};
