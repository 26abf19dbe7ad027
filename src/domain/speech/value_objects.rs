//! Speech Context - Value Objects

use serde_json::Value;
use uuid::Uuid;

/// 单次转发的追踪标识（仅用于日志）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RelayId(Uuid);

impl RelayId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for RelayId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for RelayId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// 出站 multipart 表单中的文本字段值
///
/// 入站 JSON 不做 schema 校验，任意类型都会被转换为字符串：
/// - 缺失或 `null` → 空字符串
/// - 字符串 → 原样
/// - 数字 / 布尔 → JSON 文本形式
/// - 数组 / 对象 → 紧凑 JSON 文本
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FormValue(String);

impl FormValue {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn from_json(value: Option<&Value>) -> Self {
        match value {
            None | Some(Value::Null) => Self::default(),
            Some(Value::String(s)) => Self(s.clone()),
            Some(other) => Self(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl std::fmt::Display for FormValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// 待转发的语音合成请求
///
/// `text` 与 `language` 的语义由下游 TTS 服务定义，这里只负责搬运。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpeechRequest {
    pub text: FormValue,
    pub language: FormValue,
}

impl SpeechRequest {
    pub fn new(text: impl Into<String>, language: impl Into<String>) -> Self {
        Self {
            text: FormValue::new(text),
            language: FormValue::new(language),
        }
    }

    /// 从入站 JSON 字段构造，缺失字段转换为空值而不是报错
    pub fn from_json_fields(text: Option<&Value>, language: Option<&Value>) -> Self {
        Self {
            text: FormValue::from_json(text),
            language: FormValue::from_json(language),
        }
    }

    /// 是否有字段以空值转发
    pub fn has_missing_fields(&self) -> bool {
        self.text.is_empty() || self.language.is_empty()
    }
}
