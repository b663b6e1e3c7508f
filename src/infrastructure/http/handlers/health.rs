//! Health Handler
//!
//! 存储可达性检查

use axum::{extract::State, Json};
use std::sync::Arc;

use crate::application::CheckHealth;
use crate::infrastructure::http::dto::HealthResponse;
use crate::infrastructure::http::error::ApiError;
use crate::infrastructure::http::state::AppState;

/// GET /health
pub async fn health(State(state): State<Arc<AppState>>) -> Result<Json<HealthResponse>, ApiError> {
    state.check_health_handler.handle(CheckHealth).await?;

    Ok(Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    }))
}
