//! HTTP Routes
//!
//! API Endpoints:
//! - /resolve/{campaign_model_id}  GET  随机选取活跃音色并返回分类录音
//! - /resolve/                     GET  缺少 id，返回 400
//! - /health                       GET  健康检查

use axum::{routing::get, Router};
use std::sync::Arc;

use super::handlers;
use super::state::AppState;

/// 创建所有路由
pub fn create_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/resolve/", get(handlers::resolve_voice_without_id))
        .route("/resolve/:campaign_model_id", get(handlers::resolve_voice))
        .route("/health", get(handlers::health))
}
