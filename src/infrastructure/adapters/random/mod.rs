//! Random Adapter - 随机下标选择器实现

mod deterministic_picker;
mod thread_rng_picker;

pub use deterministic_picker::{FixedPicker, SeededPicker};
pub use thread_rng_picker::ThreadRngPicker;
