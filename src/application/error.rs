//! 应用层错误定义
//!
//! 解析流程的错误分类；面向调用方的文案只在 HTTP 边界生成

use thiserror::Error;

use crate::application::ports::RepositoryError;
use crate::domain::voice::{CampaignModelId, VoiceError};

/// 错误种类
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    InvalidArgument,
    NotFound,
    StoreUnavailable,
    StoreQueryFailed,
    StoreReadCorruption,
}

/// 解析流程的阶段
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolvePhase {
    /// 阶段一：随机选取活跃关联
    SelectVoice,
    /// 阶段二：拉取关联下的录音
    FetchRecordings,
}

impl ResolvePhase {
    pub fn as_str(&self) -> &'static str {
        match self {
            ResolvePhase::SelectVoice => "select_voice",
            ResolvePhase::FetchRecordings => "fetch_recordings",
        }
    }
}

impl std::fmt::Display for ResolvePhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 应用层错误
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// 参数非法
    #[error("Invalid argument: {0}")]
    InvalidArgument(#[from] VoiceError),

    /// 没有活跃音色
    #[error("No active voices for campaign model {0}")]
    NotFound(CampaignModelId),

    /// 存储错误
    #[error("Store error during {phase}: {source}")]
    Store {
        phase: ResolvePhase,
        #[source]
        source: RepositoryError,
    },

    /// 健康检查失败
    #[error("Store unreachable: {0}")]
    Unhealthy(#[source] RepositoryError),
}

impl ApplicationError {
    pub fn store(phase: ResolvePhase, source: RepositoryError) -> Self {
        Self::Store { phase, source }
    }

    /// 错误种类
    pub fn kind(&self) -> ErrorKind {
        match self {
            ApplicationError::InvalidArgument(_) => ErrorKind::InvalidArgument,
            ApplicationError::NotFound(_) => ErrorKind::NotFound,
            ApplicationError::Store { source, .. } | ApplicationError::Unhealthy(source) => {
                match source {
                    RepositoryError::Unavailable(_) => ErrorKind::StoreUnavailable,
                    RepositoryError::QueryFailed(_) | RepositoryError::IterationFailed(_) => {
                        ErrorKind::StoreQueryFailed
                    }
                    RepositoryError::Corrupted(_) => ErrorKind::StoreReadCorruption,
                }
            }
        }
    }

    /// 出错阶段（仅存储错误有）
    pub fn phase(&self) -> Option<ResolvePhase> {
        match self {
            ApplicationError::Store { phase, .. } => Some(*phase),
            _ => None,
        }
    }
}
