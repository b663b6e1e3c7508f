//! Voice Context - 音色解析限界上下文
//!
//! 职责:
//! - campaign model 标识校验
//! - 活跃音色关联与分类录音的领域表示

mod aggregate;
mod errors;
mod value_objects;

pub use aggregate::{ActiveVoice, ResolvedVoice};
pub use errors::VoiceError;
pub use value_objects::{
    sort_by_category, CampaignModelId, CampaignModelVoiceId, CategorizedRecording,
};
