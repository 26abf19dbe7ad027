//! HTTP Middleware
//!
//! 转发结果访问日志：成功静默，失败按严重程度分级

use axum::{extract::Request, http::StatusCode, middleware::Next, response::Response};
use std::time::Instant;

/// 失败响应的日志级别
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// 调用方问题（4xx），包括下游原样返回的 4xx
    Rejected,
    /// 中继或下游故障（5xx）
    Failed,
}

/// 由响应状态决定是否记录以及记录级别；2xx/3xx 返回 None
pub fn severity(status: StatusCode) -> Option<Severity> {
    if status.is_server_error() {
        Some(Severity::Failed)
    } else if status.is_client_error() {
        Some(Severity::Rejected)
    } else {
        None
    }
}

/// 记录每个失败的中继请求
pub async fn relay_access_log(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let path = request.uri().path().to_owned();
    let started = Instant::now();

    let response = next.run(request).await;
    let status = response.status();

    match severity(status) {
        Some(Severity::Failed) => tracing::error!(
            %method,
            %path,
            status = status.as_u16(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "Relay request failed"
        ),
        Some(Severity::Rejected) => tracing::warn!(
            %method,
            %path,
            status = status.as_u16(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "Relay request rejected"
        ),
        None => {}
    }

    response
}
