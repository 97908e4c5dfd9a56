use crate::model::nonzero;
use crate::model::state::{DimensionState, Field};

/// 仅保留数字字符后转换；结果为空或全 0 时视为未设置，超出 u32 时饱和
pub fn parse_digits(raw: &str) -> Option<u32> {
    let mut digits = raw.chars().filter_map(|c| c.to_digit(10)).peekable();
    digits.peek()?;
    let value = digits
        .try_fold(0u32, |acc, d| acc.checked_mul(10)?.checked_add(d))
        .unwrap_or(u32::MAX);
    nonzero(value)
}

/// 四舍五入到整像素，0 视为未设置
fn round_px(value: f64) -> Option<u32> {
    nonzero(value.round() as u32)
}

impl DimensionState {
    /// 设置一个槽位，并按当前比例联动重算其配对槽位。
    ///
    /// 返回被重算的槽位；前置槽位未设置时不重算。
    pub fn apply(&mut self, field: Field, value: Option<u32>) -> Option<Field> {
        let value = value.and_then(nonzero);
        *self.slot_mut(field) = value;
        value?;

        let source = self.source()?;
        let ratio = source.aspect_ratio();

        let (partner, recomputed) = match field {
            // 源尺寸变化：目标两边都有值时，以同轴目标边为锚点跟随新比例
            Field::SourceWidth => {
                self.target_height?;
                (Field::TargetHeight, self.target_width? as f64 / ratio)
            }
            Field::SourceHeight => {
                self.target_width?;
                (Field::TargetWidth, self.target_height? as f64 * ratio)
            }
            // 目标尺寸变化：另一边直接按源比例推导
            Field::TargetWidth => (Field::TargetHeight, self.target_width? as f64 / ratio),
            Field::TargetHeight => (Field::TargetWidth, self.target_height? as f64 * ratio),
        };

        *self.slot_mut(partner) = round_px(recomputed);
        Some(partner)
    }

    /// 自由文本输入：剥离非数字后再联动
    pub fn edit_text(&mut self, field: Field, raw: &str) -> Option<Field> {
        self.apply(field, parse_digits(raw))
    }
}
