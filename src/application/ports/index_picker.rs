//! Index Picker Port - 随机下标来源
//!
//! 将"从 N 个候选中均匀选一个"从存储层剥离出来，便于注入确定性实现

/// 随机下标选择器
pub trait IndexPickerPort: Send + Sync {
    /// 返回 `[0, len)` 内的下标，各下标概率相等
    ///
    /// 调用方保证 `len > 0`
    fn pick(&self, len: usize) -> usize;
}
