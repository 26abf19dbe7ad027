//! Application Ports - 出站端口定义
//!
//! 定义应用层与基础设施层的抽象接口

mod reference_audio;
mod tts_engine;

pub use reference_audio::{AssetError, ReferenceAudio, ReferenceAudioPort};
pub use tts_engine::{DownstreamReply, SynthesisRequest, TtsEnginePort, TtsError};
