//! Configuration Loader
//!
//! 实现多源配置加载与合并逻辑
//!
//! 优先级（从高到低）：
//! 1. 部署脚本沿用的扁平环境变量（DB_HOST、PORT 等）
//! 2. 带前缀的环境变量（VOICE_RESOLVER_*）
//! 3. 配置文件（config.toml）
//! 4. 默认值

use config::{builder::DefaultState, Config, ConfigBuilder, ConfigError as ConfigCrateError, Environment, File};
use std::path::Path;
use thiserror::Error;

use super::types::AppConfig;

/// 配置加载错误
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to load configuration: {0}")]
    LoadError(String),

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Configuration validation failed: {0}")]
    ValidationError(String),
}

impl From<ConfigCrateError> for ConfigError {
    fn from(err: ConfigCrateError) -> Self {
        ConfigError::LoadError(err.to_string())
    }
}

/// 配置文件搜索路径
const CONFIG_FILE_NAMES: &[&str] = &["config", "config.local"];

/// 扁平环境变量到配置键的映射
const LEGACY_ENV_KEYS: &[(&str, &str)] = &[
    ("DB_HOST", "database.host"),
    ("DB_PORT", "database.port"),
    ("DB_USER", "database.user"),
    ("DB_PASSWORD", "database.password"),
    ("DB_NAME", "database.name"),
    ("PORT", "server.port"),
];

const SSL_MODES: &[&str] = &["disable", "allow", "prefer", "require", "verify-ca", "verify-full"];

/// 加载应用配置
///
/// # 环境变量示例
/// - `DB_HOST=10.0.0.4`
/// - `PORT=5000`
/// - `VOICE_RESOLVER_LOG__LEVEL=debug`
/// - `VOICE_RESOLVER_DATABASE__MAX_CONNECTIONS=20`
pub fn load_config() -> Result<AppConfig, ConfigError> {
    load_config_from_path(None)
}

/// 从指定路径加载配置
///
/// # 参数
/// - `config_path` - 可选的配置文件路径，如果为 None 则使用默认搜索路径
pub fn load_config_from_path(config_path: Option<&Path>) -> Result<AppConfig, ConfigError> {
    // 空值视为未设置
    load_config_with(config_path, |key| {
        std::env::var(key).ok().filter(|v| !v.is_empty())
    })
}

/// 加载配置，扁平环境变量通过 `lookup` 读取
pub fn load_config_with<F>(config_path: Option<&Path>, lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let mut builder = Config::builder();

    // 1. 默认值（最低优先级）
    builder = builder
        .set_default("server.host", "0.0.0.0")?
        .set_default("server.port", 8081)?
        .set_default("database.host", "localhost")?
        .set_default("database.port", 5432)?
        .set_default("database.user", "xdialcore")?
        .set_default("database.password", "xdialcore")?
        .set_default("database.name", "xdialcore")?
        .set_default("database.max_connections", 10)?
        .set_default("database.acquire_timeout_secs", 5)?
        .set_default("database.ssl_mode", "disable")?
        .set_default("log.level", "info")?
        .set_default("log.json", false)?;

    // 2. 配置文件（如果存在）
    if let Some(path) = config_path {
        builder = builder.add_source(File::from(path).required(true));
    } else {
        for name in CONFIG_FILE_NAMES {
            builder = builder.add_source(File::with_name(name).required(false));
        }
    }

    // 3. 前缀环境变量
    // 例如: VOICE_RESOLVER_DATABASE__HOST=db.internal
    builder = builder.add_source(
        Environment::with_prefix("VOICE_RESOLVER")
            .prefix_separator("_")
            .separator("__")
            .try_parsing(true),
    );

    // 4. 扁平环境变量（最高优先级）
    builder = apply_legacy_env(builder, lookup)?;

    let config = builder.build()?;

    let app_config: AppConfig = config.try_deserialize().map_err(|e| {
        ConfigError::ParseError(format!("Failed to deserialize config: {}", e))
    })?;

    validate_config(&app_config)?;

    Ok(app_config)
}

fn apply_legacy_env<F>(
    mut builder: ConfigBuilder<DefaultState>,
    lookup: F,
) -> Result<ConfigBuilder<DefaultState>, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    for (var, key) in LEGACY_ENV_KEYS {
        builder = builder.set_override_option(*key, lookup(var))?;
    }
    Ok(builder)
}

/// 验证配置有效性
fn validate_config(config: &AppConfig) -> Result<(), ConfigError> {
    if config.server.port == 0 {
        return Err(ConfigError::ValidationError(
            "Server port cannot be 0".to_string(),
        ));
    }

    if config.database.host.is_empty() {
        return Err(ConfigError::ValidationError(
            "Database host cannot be empty".to_string(),
        ));
    }

    if config.database.port == 0 {
        return Err(ConfigError::ValidationError(
            "Database port cannot be 0".to_string(),
        ));
    }

    if config.database.user.is_empty() || config.database.name.is_empty() {
        return Err(ConfigError::ValidationError(
            "Database user and name cannot be empty".to_string(),
        ));
    }

    if config.database.max_connections == 0 {
        return Err(ConfigError::ValidationError(
            "Database max_connections cannot be 0".to_string(),
        ));
    }

    if !SSL_MODES.contains(&config.database.ssl_mode.as_str()) {
        return Err(ConfigError::ValidationError(format!(
            "Unknown database ssl_mode: {}",
            config.database.ssl_mode
        )));
    }

    Ok(())
}

/// 打印配置信息（用于启动时日志）
pub fn print_config(config: &AppConfig) {
    tracing::info!("=== Application Configuration ===");
    tracing::info!("Server: {}", config.server.addr());
    tracing::info!(
        "Database: {}@{}:{}/{} (sslmode={})",
        config.database.user,
        config.database.host,
        config.database.port,
        config.database.name,
        config.database.ssl_mode
    );
    tracing::info!("Database Max Connections: {}", config.database.max_connections);
    tracing::info!("Log Level: {}", config.log.level);
    tracing::info!("=================================");
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;

    fn no_env(_: &str) -> Option<String> {
        None
    }

    fn write_config(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new()
            .suffix(".toml")
            .tempfile()
            .unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_validation_passes_for_valid_config() {
        let config = AppConfig::default();
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn test_validation_error_for_zero_port() {
        let mut config = AppConfig::default();
        config.server.port = 0;
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_validation_error_for_empty_db_host() {
        let mut config = AppConfig::default();
        config.database.host = String::new();
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_validation_error_for_unknown_ssl_mode() {
        let mut config = AppConfig::default();
        config.database.ssl_mode = "sometimes".to_string();
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_load_from_file() {
        let file = write_config(
            r#"
            [server]
            port = 9000

            [database]
            host = "db.internal"
            max_connections = 3

            [log]
            level = "debug"
            "#,
        );

        let config = load_config_with(Some(file.path()), no_env).unwrap();
        assert_eq!(config.server.port, 9000);
        assert_eq!(config.database.host, "db.internal");
        assert_eq!(config.database.max_connections, 3);
        assert_eq!(config.database.name, "xdialcore");
        assert_eq!(config.log.level, "debug");
    }

    #[test]
    fn test_legacy_env_overrides_file() {
        let file = write_config(
            r#"
            [server]
            port = 9000

            [database]
            host = "db.internal"
            "#,
        );
        let env: HashMap<&str, &str> = [
            ("DB_HOST", "10.0.0.4"),
            ("DB_PORT", "6543"),
            ("DB_PASSWORD", "secret"),
            ("PORT", "5000"),
        ]
        .into_iter()
        .collect();

        let config = load_config_with(Some(file.path()), |key| {
            env.get(key).map(|v| v.to_string())
        })
        .unwrap();

        assert_eq!(config.server.port, 5000);
        assert_eq!(config.database.host, "10.0.0.4");
        assert_eq!(config.database.port, 6543);
        assert_eq!(config.database.password, "secret");
        assert_eq!(config.database.user, "xdialcore");
    }

    #[test]
    fn test_invalid_legacy_port_is_rejected() {
        let file = write_config("");
        let result = load_config_with(Some(file.path()), |key| {
            (key == "DB_PORT").then(|| "not-a-port".to_string())
        });
        assert!(matches!(result, Err(ConfigError::ParseError(_))));
    }
}
