//! HTTP Routes
//!
//! API Endpoints:
//! - /process_apitts   POST  转发语音合成请求到下游 TTS 服务
//! - /api/ping         GET   健康检查

use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;

use super::handlers;
use super::state::AppState;

/// 创建所有路由
pub fn create_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/process_apitts", post(handlers::process_apitts))
        .nest("/api", api_routes())
}

/// API 路由
fn api_routes() -> Router<Arc<AppState>> {
    Router::new().route("/ping", get(handlers::ping))
}
