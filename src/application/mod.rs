//! 应用层 - 用例编排
//!
//! 包含：
//! - ports: 六边形架构端口定义（VoiceCatalog、IndexPicker）
//! - queries: 查询及处理器
//! - error: 应用层错误定义

pub mod error;
pub mod ports;
pub mod queries;

pub use error::{ApplicationError, ErrorKind, ResolvePhase};

pub use ports::{
    ActiveVoiceRecord, IndexPickerPort, RecordingRecord, RepositoryError, VoiceCatalogPort,
};

pub use queries::{
    handlers::{CheckHealthHandler, ResolveVoiceHandler},
    CheckHealth, ResolveVoice,
};
