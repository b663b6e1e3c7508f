//! Domain Layer - 领域层
//!
//! Voice Context: campaign model 与音色、录音的只读视图

pub mod voice;
