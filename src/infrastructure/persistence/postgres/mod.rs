//! PostgreSQL Persistence - 音色目录的 PostgreSQL 实现

mod database;
mod voice_catalog_repo;

pub use database::*;
pub use voice_catalog_repo::*;
