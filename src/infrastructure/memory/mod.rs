//! Memory Layer - In-Memory Store
//!
//! 内存版音色目录，用于测试与本地调试

mod voice_catalog;

pub use voice_catalog::{CatalogOperation, InMemoryVoiceCatalog, InjectedFailure};
