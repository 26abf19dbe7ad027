//! Data Transfer Objects

use serde::Deserialize;
use serde_json::Value;

use crate::domain::SpeechRequest;

/// `POST /process_apitts` 请求体
///
/// 字段类型不做约束，缺失字段按空值转发
#[derive(Debug, Default, Deserialize)]
pub struct RelayTtsRequest {
    #[serde(default)]
    pub text: Option<Value>,
    #[serde(default)]
    pub language: Option<Value>,
}

impl RelayTtsRequest {
    pub fn into_speech(self) -> SpeechRequest {
        SpeechRequest::from_json_fields(self.text.as_ref(), self.language.as_ref())
    }
}
