//! Voice Resolver - campaign model 随机音色解析服务
//!
//! 启动顺序：配置 → 日志 → 数据库连接池 → HTTP 服务

use std::sync::Arc;
use std::time::Duration;

use voice_resolver::config::{load_config, print_config, LogConfig};
use voice_resolver::infrastructure::adapters::ThreadRngPicker;
use voice_resolver::infrastructure::http::server::shutdown_signal;
use voice_resolver::infrastructure::http::{AppState, HttpServer, ServerConfig};
use voice_resolver::infrastructure::persistence::postgres::{create_pool, DatabaseConfig};
use voice_resolver::infrastructure::PgVoiceCatalog;

fn init_tracing(log: &LogConfig) {
    let log_filter = format!(
        "{},voice_resolver={},tower_http=debug",
        log.level, log.level
    );
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&log_filter));

    if log.json {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(env_filter)
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(env_filter).init();
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 加载配置（优先级：扁平环境变量 > 前缀环境变量 > 配置文件 > 默认值）
    let config = load_config().map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))?;

    init_tracing(&config.log);

    tracing::info!("Voice Resolver v{}", env!("CARGO_PKG_VERSION"));
    print_config(&config);

    // 初始化数据库（不可达时直接退出）
    let db_config = DatabaseConfig {
        host: config.database.host.clone(),
        port: config.database.port,
        user: config.database.user.clone(),
        password: config.database.password.clone(),
        name: config.database.name.clone(),
        ssl_mode: config.database.ssl_mode.clone(),
        max_connections: config.database.max_connections,
        acquire_timeout: Duration::from_secs(config.database.acquire_timeout_secs),
    };
    let pool = create_pool(&db_config)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to connect to database: {}", e))?;

    let catalog = Arc::new(PgVoiceCatalog::new(pool.clone()));
    let picker = Arc::new(ThreadRngPicker::new());

    let server_config = ServerConfig::new(&config.server.host, config.server.port);
    let state = AppState::new(catalog, picker);
    let server = HttpServer::new(server_config, state);

    server.run_with_shutdown(shutdown_signal()).await?;

    pool.close().await;
    tracing::info!("Server shutdown complete");

    Ok(())
}
