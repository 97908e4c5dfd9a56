use serde::{Deserialize, Serialize};

/// 完整的像素尺寸对，宽高均为正整数
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Dimensions {
    pub width: u32,
    pub height: u32,
}

impl Dimensions {
    /// 任一边为 0 时返回 None
    pub fn new(width: u32, height: u32) -> Option<Self> {
        if width == 0 || height == 0 {
            return None;
        }
        Some(Self { width, height })
    }

    /// 两个可选槽位都已设置时才构成完整尺寸
    pub fn from_slots(width: Option<u32>, height: Option<u32>) -> Option<Self> {
        Self::new(width?, height?)
    }

    /// 小数像素先四舍五入再构造；非有限值或舍入后为 0 的一律拒绝
    pub fn from_f64(width: f64, height: f64) -> Option<Self> {
        let round = |v: f64| -> Option<u32> {
            if !v.is_finite() {
                return None;
            }
            let r = v.round();
            if r < 1.0 || r > u32::MAX as f64 {
                return None;
            }
            Some(r as u32)
        };
        Self::new(round(width)?, round(height)?)
    }

    /// 实数宽高比 width / height
    pub fn aspect_ratio(&self) -> f64 {
        self.width as f64 / self.height as f64
    }

    pub fn is_landscape(&self) -> bool {
        self.width > self.height
    }
}

impl std::fmt::Display for Dimensions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}×{}", self.width, self.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_side_is_incomplete() {
        assert_eq!(Dimensions::new(0, 1080), None);
        assert_eq!(Dimensions::new(1920, 0), None);
        assert_eq!(Dimensions::from_slots(Some(1920), None), None);
        assert_eq!(
            Dimensions::from_slots(Some(1920), Some(1080)),
            Some(Dimensions { width: 1920, height: 1080 })
        );
    }

    #[test]
    fn fractional_sizes_are_rounded() {
        assert_eq!(
            Dimensions::from_f64(1920.4, 1079.6),
            Dimensions::new(1920, 1080)
        );
        assert_eq!(Dimensions::from_f64(0.4, 10.0), None);
        assert_eq!(Dimensions::from_f64(f64::NAN, 10.0), None);
        assert_eq!(Dimensions::from_f64(-3.0, 10.0), None);
    }

    #[test]
    fn display_uses_times_sign() {
        let dims = Dimensions::new(1440, 810).unwrap();
        assert_eq!(dims.to_string(), "1440×810");
        assert!(dims.is_landscape());
    }
}
