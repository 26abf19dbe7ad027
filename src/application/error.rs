//! 应用层错误定义
//!
//! 转发失败的分类：参考音频 / 下游不可达 / 下游超时 / 下游响应格式错误

use thiserror::Error;

use crate::application::ports::{AssetError, TtsError};

/// 应用层错误
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// 参考音频缺失或不可读
    #[error("Reference audio unavailable: {0}")]
    AssetUnavailable(String),

    /// 下游服务不可达
    #[error("Downstream unreachable: {0}")]
    DownstreamUnreachable(String),

    /// 下游服务超时
    #[error("Downstream timeout")]
    DownstreamTimeout,

    /// 下游响应无法解析
    #[error("Downstream malformed response: {0}")]
    DownstreamMalformed(String),

    /// 内部错误
    #[error("Internal error: {0}")]
    InternalError(String),
}

impl From<AssetError> for ApplicationError {
    fn from(err: AssetError) -> Self {
        Self::AssetUnavailable(err.to_string())
    }
}

impl From<TtsError> for ApplicationError {
    fn from(err: TtsError) -> Self {
        match err {
            TtsError::Unreachable(msg) => Self::DownstreamUnreachable(msg),
            TtsError::Timeout => Self::DownstreamTimeout,
            TtsError::InvalidResponse(msg) => Self::DownstreamMalformed(msg),
            TtsError::RequestBuild(msg) => Self::InternalError(msg),
        }
    }
}
