//! Voice Context - Aggregate Root

use serde::{Deserialize, Serialize};

use super::{sort_by_category, CampaignModelVoiceId, CategorizedRecording};

/// 被选中的活跃音色关联
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActiveVoice {
    pub association_id: CampaignModelVoiceId,
    pub voice_name: String,
}

impl ActiveVoice {
    pub fn new(association_id: CampaignModelVoiceId, voice_name: impl Into<String>) -> Self {
        Self {
            association_id,
            voice_name: voice_name.into(),
        }
    }
}

/// 解析结果聚合
///
/// 不变量:
/// - 所有录音都属于同一个被选中的关联
/// - recordings 始终按分类名升序
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedVoice {
    voice: ActiveVoice,
    recordings: Vec<CategorizedRecording>,
}

impl ResolvedVoice {
    pub fn new(voice: ActiveVoice, mut recordings: Vec<CategorizedRecording>) -> Self {
        sort_by_category(&mut recordings);
        Self { voice, recordings }
    }

    pub fn association_id(&self) -> CampaignModelVoiceId {
        self.voice.association_id
    }

    pub fn voice_name(&self) -> &str {
        &self.voice.voice_name
    }

    pub fn recordings(&self) -> &[CategorizedRecording] {
        &self.recordings
    }

    pub fn into_parts(self) -> (ActiveVoice, Vec<CategorizedRecording>) {
        (self.voice, self.recordings)
    }
}
