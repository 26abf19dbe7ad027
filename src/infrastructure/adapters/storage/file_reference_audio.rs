//! File Reference Audio - 文件系统参考音频实现
//!
//! 实现 ReferenceAudioPort trait，每次调用都重新读取文件

use async_trait::async_trait;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::fs;

use crate::application::ports::{AssetError, ReferenceAudio, ReferenceAudioPort};

/// 文件系统参考音频
pub struct FileReferenceAudio {
    /// 参考音频路径
    path: PathBuf,
    /// 上传时使用的 MIME 类型
    content_type: String,
}

impl FileReferenceAudio {
    pub fn new(path: impl AsRef<Path>, content_type: impl Into<String>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            content_type: content_type.into(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// 文件是否存在（仅用于启动时提示，不做缓存）
    pub async fn exists(&self) -> bool {
        fs::try_exists(&self.path).await.unwrap_or(false)
    }

    fn file_name(&self) -> String {
        self.path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "audio.wav".to_string())
    }
}

#[async_trait]
impl ReferenceAudioPort for FileReferenceAudio {
    async fn load(&self) -> Result<ReferenceAudio, AssetError> {
        let bytes = fs::read(&self.path).await.map_err(|e| match e.kind() {
            ErrorKind::NotFound => AssetError::NotFound(self.path.clone()),
            _ => AssetError::Io {
                path: self.path.clone(),
                message: e.to_string(),
            },
        })?;

        Ok(ReferenceAudio {
            file_name: self.file_name(),
            content_type: self.content_type.clone(),
            bytes,
        })
    }
}
