//! Repository Ports - 出站端口
//!
//! 定义音色目录的只读抽象接口
//! 具体实现在 infrastructure 层（PostgreSQL、内存）

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::voice::{
    ActiveVoice, CampaignModelId, CampaignModelVoiceId, CategorizedRecording,
};

/// Repository 错误
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// 连接池耗尽、连接断开等
    #[error("Store unavailable: {0}")]
    Unavailable(String),

    /// 查询执行失败
    #[error("Query failed: {0}")]
    QueryFailed(String),

    /// 行数据无法解码（如意外的 NULL）
    #[error("Row decode failed: {0}")]
    Corrupted(String),

    /// 已读取部分行后结果流出错
    #[error("Row iteration failed: {0}")]
    IterationFailed(String),
}

// ============================================================================
// Voice Catalog
// ============================================================================

/// 活跃关联记录（campaign_model_voice JOIN voices）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActiveVoiceRecord {
    pub id: i64,
    pub voice_name: String,
}

impl From<ActiveVoiceRecord> for ActiveVoice {
    fn from(record: ActiveVoiceRecord) -> Self {
        ActiveVoice::new(CampaignModelVoiceId::new(record.id), record.voice_name)
    }
}

/// 录音记录（voice_recordings JOIN voice_categories）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordingRecord {
    pub category_name: String,
    pub recording_name: String,
}

impl From<RecordingRecord> for CategorizedRecording {
    fn from(record: RecordingRecord) -> Self {
        CategorizedRecording::new(record.category_name, record.recording_name)
    }
}

/// Voice Catalog Port
///
/// 实现方负责连接的获取与释放；每次调用结束（含出错、取消）后不持有连接
#[async_trait]
pub trait VoiceCatalogPort: Send + Sync {
    /// 查询某个 campaign model 下全部 active = true 的关联
    async fn find_active_voices(
        &self,
        campaign_model_id: CampaignModelId,
    ) -> Result<Vec<ActiveVoiceRecord>, RepositoryError>;

    /// 查询某个关联下全部录音及其分类
    async fn find_recordings(
        &self,
        association_id: CampaignModelVoiceId,
    ) -> Result<Vec<RecordingRecord>, RepositoryError>;

    /// 存储可达性探测
    async fn ping(&self) -> Result<(), RepositoryError>;
}
