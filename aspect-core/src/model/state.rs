use super::dimensions::Dimensions;

pub const DEFAULT_SOURCE: (u32, u32) = (1920, 1080);
pub const DEFAULT_TARGET: (u32, u32) = (1440, 810);

/// 四个可编辑输入框
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    SourceWidth,
    SourceHeight,
    TargetWidth,
    TargetHeight,
}

impl Field {
    pub const ALL: [Field; 4] = [
        Field::SourceWidth,
        Field::SourceHeight,
        Field::TargetWidth,
        Field::TargetHeight,
    ];

    pub fn next(self) -> Self {
        match self {
            Field::SourceWidth => Field::SourceHeight,
            Field::SourceHeight => Field::TargetWidth,
            Field::TargetWidth => Field::TargetHeight,
            Field::TargetHeight => Field::SourceWidth,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            Field::SourceWidth => Field::TargetHeight,
            Field::SourceHeight => Field::SourceWidth,
            Field::TargetWidth => Field::SourceHeight,
            Field::TargetHeight => Field::TargetWidth,
        }
    }
}

/// 页面的全部可变状态：四个槽位，None 表示未设置
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DimensionState {
    pub source_width: Option<u32>,
    pub source_height: Option<u32>,
    pub target_width: Option<u32>,
    pub target_height: Option<u32>,
}

impl Default for DimensionState {
    fn default() -> Self {
        Self {
            source_width: Some(DEFAULT_SOURCE.0),
            source_height: Some(DEFAULT_SOURCE.1),
            target_width: Some(DEFAULT_TARGET.0),
            target_height: Some(DEFAULT_TARGET.1),
        }
    }
}

impl DimensionState {
    /// 全部未设置
    pub fn empty() -> Self {
        Self {
            source_width: None,
            source_height: None,
            target_width: None,
            target_height: None,
        }
    }

    pub fn source(&self) -> Option<Dimensions> {
        Dimensions::from_slots(self.source_width, self.source_height)
    }

    pub fn target(&self) -> Option<Dimensions> {
        Dimensions::from_slots(self.target_width, self.target_height)
    }

    pub fn get(&self, field: Field) -> Option<u32> {
        match field {
            Field::SourceWidth => self.source_width,
            Field::SourceHeight => self.source_height,
            Field::TargetWidth => self.target_width,
            Field::TargetHeight => self.target_height,
        }
    }

    pub(crate) fn slot_mut(&mut self, field: Field) -> &mut Option<u32> {
        match field {
            Field::SourceWidth => &mut self.source_width,
            Field::SourceHeight => &mut self.source_height,
            Field::TargetWidth => &mut self.target_width,
            Field::TargetHeight => &mut self.target_height,
        }
    }

    /// 输入框显示文本，未设置时为空串
    pub fn text(&self, field: Field) -> String {
        self.get(field).map(|v| v.to_string()).unwrap_or_default()
    }
}
