//! 应用层 - 命令
//!
//! 唯一的命令：把语音合成请求转发给下游 TTS 服务

mod relay_commands;

pub mod handlers;

pub use relay_commands::*;
