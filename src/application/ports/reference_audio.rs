//! Reference Audio Port - 参考音频读取抽象
//!
//! 参考音频由外部维护，只读；每次请求重新读取

use async_trait::async_trait;
use std::path::PathBuf;
use thiserror::Error;

/// 参考音频读取错误
#[derive(Debug, Error)]
pub enum AssetError {
    #[error("Reference audio not found: {0}")]
    NotFound(PathBuf),

    #[error("Failed to read reference audio {path}: {message}")]
    Io { path: PathBuf, message: String },
}

/// 参考音频内容
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReferenceAudio {
    /// multipart 中使用的文件名
    pub file_name: String,
    /// MIME 类型
    pub content_type: String,
    /// 原始字节
    pub bytes: Vec<u8>,
}

impl ReferenceAudio {
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

/// Reference Audio Port
#[async_trait]
pub trait ReferenceAudioPort: Send + Sync {
    /// 读取参考音频的完整内容
    async fn load(&self) -> Result<ReferenceAudio, AssetError>;
}
