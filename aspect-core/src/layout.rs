use serde::{Deserialize, Serialize};

use crate::model::dimensions::Dimensions;

/// 布局表配置：容器宽度列表 + 预设行数（1..=layout_count 栏）
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LayoutConfig {
    #[serde(default = "default_layout_widths")]
    pub layout_widths: Vec<u32>,
    #[serde(default = "default_layout_count")]
    pub layout_count: usize,
}

fn default_layout_widths() -> Vec<u32> {
    vec![640, 1024, 1440, 1920]
}
fn default_layout_count() -> usize {
    4
}

/// 预设行数上限
pub const MAX_LAYOUT_COUNT: usize = 24;

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            layout_widths: default_layout_widths(),
            layout_count: default_layout_count(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LayoutConfigError {
    NoWidths,
    ZeroWidth { index: usize },
    ZeroCount,
    TooManyPresets { count: usize },
}

impl std::fmt::Display for LayoutConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NoWidths => write!(f, "layout_widths must not be empty"),
            Self::ZeroWidth { index } => write!(f, "layout_widths[{index}] must be positive"),
            Self::ZeroCount => write!(f, "layout_count must be at least 1"),
            Self::TooManyPresets { count } => {
                write!(f, "layout_count {count} exceeds the limit of {MAX_LAYOUT_COUNT}")
            }
        }
    }
}

impl std::error::Error for LayoutConfigError {}

impl LayoutConfig {
    pub fn validate(&self) -> Result<(), LayoutConfigError> {
        if self.layout_widths.is_empty() {
            return Err(LayoutConfigError::NoWidths);
        }
        if let Some(index) = self.layout_widths.iter().position(|&w| w == 0) {
            return Err(LayoutConfigError::ZeroWidth { index });
        }
        if self.layout_count == 0 {
            return Err(LayoutConfigError::ZeroCount);
        }
        if self.layout_count > MAX_LAYOUT_COUNT {
            return Err(LayoutConfigError::TooManyPresets {
                count: self.layout_count,
            });
        }
        Ok(())
    }

    /// 第 `columns` 栏预设的名称
    pub fn preset_name(columns: usize) -> String {
        if columns == 1 {
            "1 column".to_string()
        } else {
            format!("{columns} columns")
        }
    }
}

/// 单栏在某一容器宽度下的像素尺寸
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayoutCell {
    pub width: u32,
    pub height: u32,
}

impl std::fmt::Display for LayoutCell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}×{}", self.width, self.height)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayoutRow {
    pub layout: String,
    pub columns: Vec<LayoutCell>,
}

/// 为每个栏数预设生成一行，每个容器宽度一列。
///
/// 所有单元格共用同一个源宽高比；源尺寸不完整时返回空表。
/// 宽高都至少为 1px。
pub fn build_layout_table(source: Option<Dimensions>, config: &LayoutConfig) -> Vec<LayoutRow> {
    let Some(dims) = source else {
        return Vec::new();
    };
    let ratio = dims.aspect_ratio();

    (1..=config.layout_count)
        .map(|columns| {
            let cells = config
                .layout_widths
                .iter()
                .map(|&container| {
                    let width = container as f64 / columns as f64;
                    LayoutCell {
                        width: (width.round() as u32).max(1),
                        height: ((width / ratio).round() as u32).max(1),
                    }
                })
                .collect();
            LayoutRow {
                layout: LayoutConfig::preset_name(columns),
                columns: cells,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hd() -> Option<Dimensions> {
        Dimensions::new(1920, 1080)
    }

    #[test]
    fn one_row_per_preset_one_column_per_width() {
        let config = LayoutConfig::default();
        let rows = build_layout_table(hd(), &config);
        assert_eq!(rows.len(), config.layout_count);
        for row in &rows {
            assert_eq!(row.columns.len(), config.layout_widths.len());
        }
        assert_eq!(rows[0].layout, "1 column");
        assert_eq!(rows[3].layout, "4 columns");
    }

    #[test]
    fn single_column_row_is_full_width_height() {
        let rows = build_layout_table(hd(), &LayoutConfig::default());
        let first: Vec<String> = rows[0].columns.iter().map(|c| c.to_string()).collect();
        assert_eq!(first, ["640×360", "1024×576", "1440×810", "1920×1080"]);
        assert_eq!(rows[1].columns[0], LayoutCell { width: 320, height: 180 });
        // 1024 / 3 = 341.33 → 341×192
        assert_eq!(rows[2].columns[1], LayoutCell { width: 341, height: 192 });
    }

    #[test]
    fn every_cell_uses_source_ratio() {
        let dims = Dimensions::new(1000, 700).unwrap();
        for row in build_layout_table(Some(dims), &LayoutConfig::default()) {
            for cell in row.columns {
                let expected = cell.width as f64 / dims.aspect_ratio();
                // 宽高各自舍入，误差不超过 1px
                assert!((cell.height as f64 - expected).abs() <= 1.0);
            }
        }
    }

    #[test]
    fn incomplete_source_gives_empty_table() {
        assert!(build_layout_table(None, &LayoutConfig::default()).is_empty());
    }

    #[test]
    fn custom_config_shapes_table() {
        let config = LayoutConfig {
            layout_widths: vec![300, 600],
            layout_count: 2,
        };
        let rows = build_layout_table(Dimensions::new(3, 2), &config);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[1].columns, [
            LayoutCell { width: 150, height: 100 },
            LayoutCell { width: 300, height: 200 },
        ]);
    }

    #[test]
    fn validate_rejects_bad_config() {
        assert_eq!(LayoutConfig::default().validate(), Ok(()));
        let empty = LayoutConfig { layout_widths: vec![], layout_count: 4 };
        assert_eq!(empty.validate(), Err(LayoutConfigError::NoWidths));
        let zero = LayoutConfig { layout_widths: vec![640, 0], layout_count: 4 };
        assert_eq!(zero.validate(), Err(LayoutConfigError::ZeroWidth { index: 1 }));
        let no_rows = LayoutConfig { layout_count: 0, ..LayoutConfig::default() };
        assert_eq!(no_rows.validate(), Err(LayoutConfigError::ZeroCount));
        assert_eq!(
            LayoutConfigError::ZeroWidth { index: 1 }.to_string(),
            "layout_widths[1] must be positive"
        );
    }

    #[test]
    fn extreme_ratio_cells_stay_positive() {
        let rows = build_layout_table(Dimensions::new(4000, 1), &LayoutConfig::default());
        assert_eq!(rows[3].columns[0], LayoutCell { width: 160, height: 1 });
        let rows = build_layout_table(Dimensions::new(1, 4000), &LayoutConfig::default());
        assert!(rows.iter().flat_map(|r| &r.columns).all(|c| c.width >= 1 && c.height >= 1));
    }

    #[test]
    fn validate_caps_preset_count() {
        let max = LayoutConfig {
            layout_widths: vec![640],
            layout_count: MAX_LAYOUT_COUNT,
        };
        assert_eq!(max.validate(), Ok(()));
        let huge = LayoutConfig {
            layout_widths: vec![640],
            layout_count: 1000,
        };
        assert_eq!(huge.validate(), Err(LayoutConfigError::TooManyPresets { count: 1000 }));
    }

    #[test]
    fn partial_toml_fills_defaults() {
        let config: LayoutConfig = toml::from_str("layout_count = 2").unwrap();
        assert_eq!(config.layout_count, 2);
        assert_eq!(config.layout_widths, default_layout_widths());
    }
}
