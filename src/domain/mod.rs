//! Domain Layer - 领域层
//!
//! 只有一个限界上下文:
//! - Speech Context: 文本 + 语言 → 下游 TTS 服务的转发请求

pub mod speech;

pub use speech::{FormValue, RelayId, SpeechRequest};
