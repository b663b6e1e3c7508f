//! Application Ports - 出站端口定义
//!
//! 定义应用层与基础设施层的抽象接口

mod index_picker;
mod repositories;

pub use index_picker::IndexPickerPort;
pub use repositories::{ActiveVoiceRecord, RecordingRecord, RepositoryError, VoiceCatalogPort};
