//! Query Handlers 实现

mod health_handlers;
mod resolve_handlers;

pub use health_handlers::*;
pub use resolve_handlers::*;
