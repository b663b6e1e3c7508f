//! Thread RNG Picker - 生产环境使用的随机选择器

use rand::Rng;

use crate::application::ports::IndexPickerPort;

/// 基于线程本地 RNG 的均匀选择器
///
/// 无共享状态，可被任意多个并发请求使用
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadRngPicker;

impl ThreadRngPicker {
    pub fn new() -> Self {
        Self
    }
}

impl IndexPickerPort for ThreadRngPicker {
    fn pick(&self, len: usize) -> usize {
        if len <= 1 {
            return 0;
        }
        rand::rng().random_range(0..len)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pick_in_range() {
        let picker = ThreadRngPicker::new();
        for len in 1..20 {
            for _ in 0..50 {
                assert!(picker.pick(len) < len);
            }
        }
    }

    #[test]
    fn test_pick_reaches_every_index() {
        let picker = ThreadRngPicker::new();
        let mut seen = [false; 4];
        for _ in 0..2000 {
            seen[picker.pick(4)] = true;
        }
        assert!(seen.iter().all(|s| *s));
    }
}
