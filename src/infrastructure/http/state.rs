//! Application State
//!
//! 进程内唯一共享的是存储句柄；每个请求都无状态

use std::sync::Arc;

use crate::application::{
    CheckHealthHandler, IndexPickerPort, ResolveVoiceHandler, VoiceCatalogPort,
};

/// 应用状态
pub struct AppState {
    // ========== Query Handlers ==========
    pub resolve_voice_handler: ResolveVoiceHandler,
    pub check_health_handler: CheckHealthHandler,
}

impl AppState {
    /// 创建应用状态
    pub fn new(catalog: Arc<dyn VoiceCatalogPort>, picker: Arc<dyn IndexPickerPort>) -> Self {
        Self {
            resolve_voice_handler: ResolveVoiceHandler::new(catalog.clone(), picker),
            check_health_handler: CheckHealthHandler::new(catalog),
        }
    }
}
