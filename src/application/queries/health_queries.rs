//! Health Queries

/// 存储可达性检查
#[derive(Debug, Clone)]
pub struct CheckHealth;
