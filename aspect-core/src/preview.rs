use crate::model::dimensions::Dimensions;

/// 预览框最大边长（像素）
pub const DEFAULT_PREVIEW_MAX: u32 = 226;

/// 预览框尺寸，浮点保存，仅在最终落到像素时取整
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PreviewSize {
    pub width: f64,
    pub height: f64,
}

impl PreviewSize {
    /// 四舍五入到整像素，任一边至少 1
    pub fn to_pixels(&self) -> (u32, u32) {
        let px = |v: f64| (v.round() as u32).max(1);
        (px(self.width), px(self.height))
    }

    pub fn aspect_ratio(&self) -> f64 {
        self.width / self.height
    }
}

/// 等比缩放到边长上限 `max` 的框内：长边恰好为 `max`。
///
/// 全程浮点运算。小尺寸（如 1×3）也不会因整数截断而变形。
pub fn preview_size(dims: Dimensions, max: f64) -> PreviewSize {
    let ratio = dims.aspect_ratio();
    if dims.is_landscape() {
        PreviewSize {
            width: max,
            height: max / ratio,
        }
    } else {
        PreviewSize {
            width: max * ratio,
            height: max,
        }
    }
}

/// 尺寸不完整时不渲染预览
pub fn preview_for(source: Option<Dimensions>, max: f64) -> Option<PreviewSize> {
    source.map(|dims| preview_size(dims, max))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const M: f64 = DEFAULT_PREVIEW_MAX as f64;

    fn assert_ratio(size: PreviewSize, dims: Dimensions) {
        let expected = dims.aspect_ratio();
        let rel = (size.aspect_ratio() - expected).abs() / expected;
        assert!(rel < 1e-9, "{size:?} vs {dims}");
    }

    #[test]
    fn landscape_pins_width() {
        let dims = Dimensions::new(1920, 1080).unwrap();
        let size = preview_size(dims, M);
        assert_eq!(size.width, M);
        assert!((size.height - 127.125).abs() < 1e-9);
        assert_eq!(size.to_pixels(), (226, 127));
    }

    #[test]
    fn portrait_pins_height() {
        let dims = Dimensions::new(1080, 1920).unwrap();
        let size = preview_size(dims, M);
        assert_eq!(size.height, M);
        assert_ratio(size, dims);
    }

    #[test]
    fn square_fills_box() {
        let size = preview_size(Dimensions::new(5, 5).unwrap(), M);
        assert_eq!(size, PreviewSize { width: M, height: M });
    }

    #[test]
    fn small_inputs_keep_ratio() {
        for (w, h) in [(1, 3), (3, 1), (2, 3), (3, 2), (1, 2), (1, 1)] {
            let dims = Dimensions::new(w, h).unwrap();
            let size = preview_size(dims, M);
            assert_ratio(size, dims);
            assert_eq!(size.width.max(size.height), M);
        }
        assert_eq!(preview_size(Dimensions::new(1, 3).unwrap(), M).to_pixels(), (75, 226));
    }

    #[test]
    fn tiny_side_never_rounds_to_zero() {
        let size = preview_size(Dimensions::new(100_000, 1).unwrap(), M);
        assert_eq!(size.to_pixels(), (226, 1));
    }

    #[test]
    fn incomplete_source_renders_nothing() {
        assert_eq!(preview_for(None, M), None);
        assert!(preview_for(Dimensions::new(4, 3), M).is_some());
    }

    proptest! {
        #[test]
        fn longest_side_is_bound(w in 1u32..20_000, h in 1u32..20_000) {
            let dims = Dimensions::new(w, h).unwrap();
            let size = preview_size(dims, M);
            prop_assert!((size.width.max(size.height) - M).abs() < 1e-9);
            let rel = (size.aspect_ratio() - dims.aspect_ratio()).abs() / dims.aspect_ratio();
            prop_assert!(rel < 1e-9);
        }
    }
}
