//! PostgreSQL Database - 连接池

use sqlx::postgres::{PgConnectOptions, PgPoolOptions, PgSslMode};
use sqlx::{Pool, Postgres};
use std::str::FromStr;
use std::time::Duration;

/// 数据库配置
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub host: String,
    pub port: u16,
    pub user: String,
    pub password: String,
    pub name: String,
    /// sslmode，取值同 libpq（disable / prefer / require ...）
    pub ssl_mode: String,
    /// 最大连接数
    pub max_connections: u32,
    /// 获取连接的超时时间
    pub acquire_timeout: Duration,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            host: "localhost".to_string(),
            port: 5432,
            user: "xdialcore".to_string(),
            password: "xdialcore".to_string(),
            name: "xdialcore".to_string(),
            ssl_mode: "disable".to_string(),
            max_connections: 10,
            acquire_timeout: Duration::from_secs(5),
        }
    }
}

impl DatabaseConfig {
    /// 构建连接参数
    pub fn connect_options(&self) -> Result<PgConnectOptions, sqlx::Error> {
        let ssl_mode = PgSslMode::from_str(&self.ssl_mode)?;
        Ok(PgConnectOptions::new()
            .host(&self.host)
            .port(self.port)
            .username(&self.user)
            .password(&self.password)
            .database(&self.name)
            .ssl_mode(ssl_mode))
    }

    /// 日志用的连接描述（不含密码）
    pub fn display_target(&self) -> String {
        format!("{}@{}:{}/{}", self.user, self.host, self.port, self.name)
    }
}

/// 数据库连接池
pub type DbPool = Pool<Postgres>;

/// 创建数据库连接池
///
/// `connect_with` 会立即建立并校验一条连接，数据库不可达时启动失败
pub async fn create_pool(config: &DatabaseConfig) -> Result<DbPool, sqlx::Error> {
    let pool = PgPoolOptions::new()
        .max_connections(config.max_connections)
        .acquire_timeout(config.acquire_timeout)
        .connect_with(config.connect_options()?)
        .await?;

    tracing::info!(
        max_connections = config.max_connections,
        "database connected: {}",
        config.display_target()
    );

    Ok(pool)
}
