//! Data Transfer Objects

use serde::Serialize;

use crate::domain::voice::{CategorizedRecording, ResolvedVoice};

// ============================================================================
// Resolve DTOs
// ============================================================================

/// 单条分类录音
///
/// 字段顺序固定为 voice_category, recording
#[derive(Debug, Serialize)]
pub struct VoiceCategoryDto {
    pub voice_category: String,
    pub recording: String,
}

impl From<CategorizedRecording> for VoiceCategoryDto {
    fn from(recording: CategorizedRecording) -> Self {
        Self {
            voice_category: recording.category,
            recording: recording.recording,
        }
    }
}

/// GET /resolve/{campaign_model_id} 响应
#[derive(Debug, Serialize)]
pub struct ResolveVoiceResponse {
    pub voice_name: String,
    pub voice_categories: Vec<VoiceCategoryDto>,
}

impl From<ResolvedVoice> for ResolveVoiceResponse {
    fn from(resolved: ResolvedVoice) -> Self {
        let (voice, recordings) = resolved.into_parts();
        Self {
            voice_name: voice.voice_name,
            voice_categories: recordings.into_iter().map(VoiceCategoryDto::from).collect(),
        }
    }
}

// ============================================================================
// Health DTOs
// ============================================================================

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
}
