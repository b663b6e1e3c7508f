//! HTTP Handlers

mod health;
mod resolve;

pub use health::*;
pub use resolve::*;
