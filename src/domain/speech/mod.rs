//! Speech Context - 语音转发上下文
//!
//! 职责:
//! - 入站请求字段到出站表单字段的转换
//! - 每次转发的追踪标识

mod value_objects;

pub use value_objects::{FormValue, RelayId, SpeechRequest};
