//! Configuration Module
//!
//! 提供应用配置管理功能，支持多层级配置来源：
//! - 扁平环境变量（DB_HOST、DB_PORT、DB_USER、DB_PASSWORD、DB_NAME、PORT）
//! - 前缀环境变量（VOICE_RESOLVER_*）
//! - 配置文件（TOML 格式）
//! - 默认值（最低优先级）

mod loader;
mod types;

pub use loader::{load_config, load_config_from_path, load_config_with, print_config, ConfigError};
pub use types::{AppConfig, DatabaseConfig, LogConfig, ServerConfig};
