//! Voice Context - Value Objects

use serde::{Deserialize, Serialize};

use super::VoiceError;

/// 活动模型（campaign model）标识
///
/// 只接受非负整数；解析失败时不会触达存储层
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CampaignModelId(i64);

impl CampaignModelId {
    pub fn new(id: i64) -> Result<Self, VoiceError> {
        if id < 0 {
            return Err(VoiceError::InvalidCampaignModelId(id.to_string()));
        }
        Ok(Self(id))
    }

    /// 从路径参数解析
    pub fn parse(raw: &str) -> Result<Self, VoiceError> {
        let id = raw
            .parse::<i64>()
            .map_err(|_| VoiceError::InvalidCampaignModelId(raw.to_string()))?;
        Self::new(id)
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}

impl std::fmt::Display for CampaignModelId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// campaign_model_voice 关联记录的主键
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CampaignModelVoiceId(i64);

impl CampaignModelVoiceId {
    pub fn new(id: i64) -> Self {
        Self(id)
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}

impl std::fmt::Display for CampaignModelVoiceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// 一条带分类的录音
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategorizedRecording {
    pub category: String,
    pub recording: String,
}

impl CategorizedRecording {
    pub fn new(category: impl Into<String>, recording: impl Into<String>) -> Self {
        Self {
            category: category.into(),
            recording: recording.into(),
        }
    }
}

/// 按分类名升序排列录音（同分类按录音名）
pub fn sort_by_category(recordings: &mut [CategorizedRecording]) {
    recordings.sort_by(|a, b| {
        a.category
            .cmp(&b.category)
            .then_with(|| a.recording.cmp(&b.recording))
    });
}
