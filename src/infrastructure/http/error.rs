//! HTTP Error Handling
//!
//! 每类转发失败映射为明确的 HTTP 状态码与错误码

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::application::ApplicationError;

/// 统一错误响应格式
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub errno: u16,
    pub code: &'static str,
    pub error: String,
}

/// 错误码定义
pub mod code {
    pub const BAD_REQUEST: &str = "BAD_REQUEST";
    pub const UNSUPPORTED_MEDIA_TYPE: &str = "UNSUPPORTED_MEDIA_TYPE";
    pub const PAYLOAD_TOO_LARGE: &str = "PAYLOAD_TOO_LARGE";
    pub const ASSET_UNAVAILABLE: &str = "ASSET_UNAVAILABLE";
    pub const DOWNSTREAM_UNREACHABLE: &str = "DOWNSTREAM_UNREACHABLE";
    pub const DOWNSTREAM_TIMEOUT: &str = "DOWNSTREAM_TIMEOUT";
    pub const DOWNSTREAM_MALFORMED: &str = "DOWNSTREAM_MALFORMED";
    pub const INTERNAL_ERROR: &str = "INTERNAL_ERROR";
}

/// API 错误
#[derive(Debug)]
pub enum ApiError {
    BadRequest(String),
    UnsupportedMediaType(String),
    PayloadTooLarge(String),
    AssetUnavailable(String),
    DownstreamUnreachable(String),
    DownstreamTimeout,
    DownstreamMalformed(String),
    Internal(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::UnsupportedMediaType(_) => StatusCode::UNSUPPORTED_MEDIA_TYPE,
            ApiError::PayloadTooLarge(_) => StatusCode::PAYLOAD_TOO_LARGE,
            ApiError::AssetUnavailable(_) | ApiError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
            ApiError::DownstreamUnreachable(_) | ApiError::DownstreamMalformed(_) => {
                StatusCode::BAD_GATEWAY
            }
            ApiError::DownstreamTimeout => StatusCode::GATEWAY_TIMEOUT,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            ApiError::BadRequest(_) => code::BAD_REQUEST,
            ApiError::UnsupportedMediaType(_) => code::UNSUPPORTED_MEDIA_TYPE,
            ApiError::PayloadTooLarge(_) => code::PAYLOAD_TOO_LARGE,
            ApiError::AssetUnavailable(_) => code::ASSET_UNAVAILABLE,
            ApiError::DownstreamUnreachable(_) => code::DOWNSTREAM_UNREACHABLE,
            ApiError::DownstreamTimeout => code::DOWNSTREAM_TIMEOUT,
            ApiError::DownstreamMalformed(_) => code::DOWNSTREAM_MALFORMED,
            ApiError::Internal(_) => code::INTERNAL_ERROR,
        }
    }

    fn message(&self) -> String {
        match self {
            ApiError::BadRequest(msg)
            | ApiError::UnsupportedMediaType(msg)
            | ApiError::PayloadTooLarge(msg)
            | ApiError::AssetUnavailable(msg)
            | ApiError::DownstreamUnreachable(msg)
            | ApiError::DownstreamMalformed(msg)
            | ApiError::Internal(msg) => msg.clone(),
            ApiError::DownstreamTimeout => "Downstream TTS service timed out".to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let code = self.code();
        let message = self.message();

        if status.is_server_error() {
            tracing::error!(errno = status.as_u16(), code, error = %message, "Relay failed");
        } else {
            tracing::warn!(errno = status.as_u16(), code, error = %message, "Rejected request");
        }

        let body = ErrorResponse {
            errno: status.as_u16(),
            code,
            error: message,
        };

        (status, Json(body)).into_response()
    }
}

impl From<ApplicationError> for ApiError {
    fn from(e: ApplicationError) -> Self {
        match e {
            ApplicationError::AssetUnavailable(msg) => ApiError::AssetUnavailable(msg),
            ApplicationError::DownstreamUnreachable(msg) => ApiError::DownstreamUnreachable(msg),
            ApplicationError::DownstreamTimeout => ApiError::DownstreamTimeout,
            ApplicationError::DownstreamMalformed(msg) => ApiError::DownstreamMalformed(msg),
            ApplicationError::InternalError(msg) => ApiError::Internal(msg),
        }
    }
}

/// 保留 axum 给出的状态：缺少 Content-Type → 415，超出 body 上限 → 413，其余 → 400
impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        let message = rejection.body_text();
        match rejection.status() {
            StatusCode::UNSUPPORTED_MEDIA_TYPE => ApiError::UnsupportedMediaType(message),
            StatusCode::PAYLOAD_TOO_LARGE => ApiError::PayloadTooLarge(message),
            _ => ApiError::BadRequest(message),
        }
    }
}
