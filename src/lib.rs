//! Voice Resolver - campaign model 随机音色解析服务
//!
//! 架构设计: Hexagonal Architecture
//!
//! 领域层 (domain/):
//! - Voice Context: campaign model 标识、活跃音色、分类录音
//!
//! 应用层 (application/):
//! - Ports: VoiceCatalog（两次只读查询）、IndexPicker（均匀随机）
//! - Queries: ResolveVoice、CheckHealth
//!
//! 基础设施层 (infrastructure/):
//! - HTTP: GET /resolve/{campaign_model_id}, GET /health
//! - Persistence: PostgreSQL
//! - Memory: 内存音色目录
//! - Adapters: 随机选择器

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use crate::config::{load_config, AppConfig};
