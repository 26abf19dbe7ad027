//! apitts-relay - 语音合成转发服务
//!
//! 接收 `text` + `language`，附加固定参考音频，转发到下游 TTS 服务并原样返回其 JSON 响应。
//!
//! 领域层 (domain/):
//! - Speech Context: 转发请求值对象
//!
//! 应用层 (application/):
//! - Ports: ReferenceAudioPort, TtsEnginePort
//! - Commands: RelaySpeech 及其处理器
//!
//! 基础设施层 (infrastructure/):
//! - HTTP: axum 入站接口
//! - Adapters: 文件参考音频、下游 TTS 客户端

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::{load_config, AppConfig};
