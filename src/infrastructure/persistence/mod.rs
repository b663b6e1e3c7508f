//! Persistence Layer - 数据持久化
//!
//! PostgreSQL 只读访问实现

pub mod postgres;

pub use self::postgres::PgVoiceCatalog;
