//! Resolve HTTP Handler

use axum::{
    extract::{rejection::PathRejection, Path, State},
    Json,
};
use std::sync::Arc;

use crate::application::ResolveVoice;
use crate::infrastructure::http::dto::ResolveVoiceResponse;
use crate::infrastructure::http::error::{message, ApiError};
use crate::infrastructure::http::state::AppState;

/// GET /resolve/{campaign_model_id}
///
/// 路径参数按原始字符串交给解析器校验
pub async fn resolve_voice(
    State(state): State<Arc<AppState>>,
    campaign_model_id: Result<Path<String>, PathRejection>,
) -> Result<Json<ResolveVoiceResponse>, ApiError> {
    let Path(campaign_model_id) = campaign_model_id.map_err(|e| ApiError::BadRequest {
        message: message::INVALID_CAMPAIGN_MODEL_ID,
        detail: e.body_text(),
    })?;

    let resolved = state
        .resolve_voice_handler
        .handle(ResolveVoice::new(campaign_model_id))
        .await?;

    Ok(Json(ResolveVoiceResponse::from(resolved)))
}

/// GET /resolve/
///
/// 空路径参数同样按非法 id 处理
pub async fn resolve_voice_without_id(
    State(state): State<Arc<AppState>>,
) -> Result<Json<ResolveVoiceResponse>, ApiError> {
    let resolved = state
        .resolve_voice_handler
        .handle(ResolveVoice::new(String::new()))
        .await?;

    Ok(Json(ResolveVoiceResponse::from(resolved)))
}
