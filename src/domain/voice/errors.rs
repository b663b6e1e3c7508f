//! Voice Context - Errors

use thiserror::Error;

#[derive(Debug, Error)]
pub enum VoiceError {
    #[error("无效的 campaign_model_id: {0}")]
    InvalidCampaignModelId(String),
}
