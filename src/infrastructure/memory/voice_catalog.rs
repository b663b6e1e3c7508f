//! In-Memory Voice Catalog Implementation
//!
//! 可替换 PostgreSQL 的内存实现，支持按操作注入故障

use async_trait::async_trait;
use dashmap::DashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use crate::application::ports::{
    ActiveVoiceRecord, RecordingRecord, RepositoryError, VoiceCatalogPort,
};
use crate::domain::voice::{CampaignModelId, CampaignModelVoiceId};

/// 可注入故障的操作
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CatalogOperation {
    FindActiveVoices,
    FindRecordings,
    Ping,
}

/// 注入的故障类型
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InjectedFailure {
    Unavailable,
    QueryFailed,
    Corrupted,
    IterationFailed,
}

impl InjectedFailure {
    fn into_error(self, operation: CatalogOperation) -> RepositoryError {
        let detail = format!("injected failure in {:?}", operation);
        match self {
            InjectedFailure::Unavailable => RepositoryError::Unavailable(detail),
            InjectedFailure::QueryFailed => RepositoryError::QueryFailed(detail),
            InjectedFailure::Corrupted => RepositoryError::Corrupted(detail),
            InjectedFailure::IterationFailed => RepositoryError::IterationFailed(detail),
        }
    }
}

#[derive(Debug, Clone)]
struct Association {
    campaign_model_id: i64,
    voice_name: String,
    active: bool,
}

/// 内存音色目录
pub struct InMemoryVoiceCatalog {
    associations: DashMap<i64, Association>,
    recordings: DashMap<i64, Vec<RecordingRecord>>,
    failures: DashMap<CatalogOperation, InjectedFailure>,
    calls: AtomicUsize,
}

impl InMemoryVoiceCatalog {
    pub fn new() -> Self {
        Self {
            associations: DashMap::new(),
            recordings: DashMap::new(),
            failures: DashMap::new(),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn arc(self) -> Arc<Self> {
        Arc::new(self)
    }

    /// 添加一条 campaign_model_voice 关联
    pub fn with_voice(
        self,
        campaign_model_id: i64,
        association_id: i64,
        voice_name: impl Into<String>,
        active: bool,
    ) -> Self {
        self.associations.insert(
            association_id,
            Association {
                campaign_model_id,
                voice_name: voice_name.into(),
                active,
            },
        );
        self
    }

    /// 为关联添加一条录音
    pub fn with_recording(
        self,
        association_id: i64,
        category: impl Into<String>,
        recording: impl Into<String>,
    ) -> Self {
        self.recordings
            .entry(association_id)
            .or_default()
            .push(RecordingRecord {
                category_name: category.into(),
                recording_name: recording.into(),
            });
        self
    }

    /// 删除关联及其录音
    pub fn remove_association(&self, association_id: i64) {
        self.associations.remove(&association_id);
        self.recordings.remove(&association_id);
    }

    /// 让指定操作之后的调用都失败
    pub fn fail_on(&self, operation: CatalogOperation, failure: InjectedFailure) {
        self.failures.insert(operation, failure);
    }

    /// 恢复指定操作
    pub fn recover(&self, operation: CatalogOperation) {
        self.failures.remove(&operation);
    }

    /// 已发生的存储访问次数（不含 ping）
    pub fn store_calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn check(&self, operation: CatalogOperation) -> Result<(), RepositoryError> {
        match self.failures.get(&operation) {
            Some(failure) => Err(failure.into_error(operation)),
            None => Ok(()),
        }
    }
}

impl Default for InMemoryVoiceCatalog {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl VoiceCatalogPort for InMemoryVoiceCatalog {
    async fn find_active_voices(
        &self,
        campaign_model_id: CampaignModelId,
    ) -> Result<Vec<ActiveVoiceRecord>, RepositoryError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.check(CatalogOperation::FindActiveVoices)?;

        let mut voices: Vec<ActiveVoiceRecord> = self
            .associations
            .iter()
            .filter(|entry| {
                entry.active && entry.campaign_model_id == campaign_model_id.value()
            })
            .map(|entry| ActiveVoiceRecord {
                id: *entry.key(),
                voice_name: entry.voice_name.clone(),
            })
            .collect();
        voices.sort_by_key(|v| v.id);

        Ok(voices)
    }

    async fn find_recordings(
        &self,
        association_id: CampaignModelVoiceId,
    ) -> Result<Vec<RecordingRecord>, RepositoryError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.check(CatalogOperation::FindRecordings)?;

        Ok(self
            .recordings
            .get(&association_id.value())
            .map(|r| r.clone())
            .unwrap_or_default())
    }

    async fn ping(&self) -> Result<(), RepositoryError> {
        self.check(CatalogOperation::Ping)
    }
}
