//! 应用层 - 查询（读操作）
//!
//! 本服务只有读操作：音色解析与健康检查

mod health_queries;
mod resolve_queries;

pub mod handlers;

pub use health_queries::*;
pub use resolve_queries::*;
