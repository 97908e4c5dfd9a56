use std::path::Path;

use anyhow::{Context, Result};
use aspect_core::{DEFAULT_PREVIEW_MAX, LayoutConfig};
use serde::{Deserialize, Serialize};

use crate::ui::i18n::Lang;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub layout: LayoutConfig,
    #[serde(default)]
    pub preview: PreviewSettings,
    #[serde(default)]
    pub display: DisplaySettings,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PreviewSettings {
    /// 预览框长边（像素）
    #[serde(default = "default_max_size")]
    pub max_size: u32,
    /// 终端单元格像素尺寸，用于把像素预览映射为字符格
    #[serde(default = "default_cell_width")]
    pub cell_width: u16,
    #[serde(default = "default_cell_height")]
    pub cell_height: u16,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DisplaySettings {
    #[serde(default)]
    pub language: Lang,
}

fn default_max_size() -> u32 {
    DEFAULT_PREVIEW_MAX
}
fn default_cell_width() -> u16 {
    8
}
fn default_cell_height() -> u16 {
    16
}

impl Default for PreviewSettings {
    fn default() -> Self {
        Self {
            max_size: default_max_size(),
            cell_width: default_cell_width(),
            cell_height: default_cell_height(),
        }
    }
}

impl Settings {
    /// 文件不存在时写入默认配置
    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)
                .with_context(|| format!("无法读取 {}", path.display()))?;
            toml::from_str(&content).with_context(|| format!("配置格式错误 {}", path.display()))
        } else {
            let settings = Self::default();
            settings.save_to(path)?;
            Ok(settings)
        }
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content).with_context(|| format!("无法写入 {}", path.display()))?;
        Ok(())
    }

    /// 把非法字段替换为默认值，返回每一处替换的说明
    pub fn sanitize(&mut self) -> Vec<String> {
        let mut notes = Vec::new();

        if let Err(e) = self.layout.validate() {
            notes.push(format!("invalid layout config ({e}), using defaults"));
            self.layout = LayoutConfig::default();
        }
        if self.preview.max_size == 0 {
            notes.push("preview.max_size must be positive, using default".to_string());
            self.preview.max_size = default_max_size();
        }
        if self.preview.cell_width == 0 || self.preview.cell_height == 0 {
            notes.push("preview cell size must be positive, using default".to_string());
            self.preview.cell_width = default_cell_width();
            self.preview.cell_height = default_cell_height();
        }

        notes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_is_all_defaults() {
        let settings: Settings = toml::from_str("").unwrap();
        assert_eq!(settings.layout, LayoutConfig::default());
        assert_eq!(settings.preview, PreviewSettings::default());
    }

    #[test]
    fn partial_sections_fill_defaults() {
        let settings: Settings = toml::from_str(
            r#"
            [layout]
            layout_widths = [320, 768]

            [preview]
            max_size = 100

            [display]
            language = "zh"
            "#,
        )
        .unwrap();
        assert_eq!(settings.layout.layout_widths, [320, 768]);
        assert_eq!(settings.layout.layout_count, 4);
        assert_eq!(settings.preview.max_size, 100);
        assert_eq!(settings.preview.cell_height, 16);
        assert_eq!(settings.display.language, Lang::Zh);
    }

    #[test]
    fn toml_round_trip() {
        let mut settings = Settings::default();
        settings.display.language = Lang::En;
        settings.layout.layout_count = 3;
        let text = toml::to_string_pretty(&settings).unwrap();
        let back: Settings = toml::from_str(&text).unwrap();
        assert_eq!(back, settings);
    }

    #[test]
    fn sanitize_replaces_invalid_values() {
        let mut settings = Settings::default();
        settings.layout.layout_widths.clear();
        settings.preview.max_size = 0;
        let notes = settings.sanitize();
        assert_eq!(notes.len(), 2);
        assert!(notes[0].contains("layout_widths must not be empty"));
        assert_eq!(settings.layout, LayoutConfig::default());
        assert_eq!(settings.preview.max_size, DEFAULT_PREVIEW_MAX);
        assert!(settings.sanitize().is_empty());
    }

    #[test]
    fn sanitize_caps_layout_count() {
        let mut settings = Settings::default();
        settings.layout.layout_count = 1000;
        let notes = settings.sanitize();
        assert_eq!(notes.len(), 1);
        assert!(notes[0].contains("exceeds the limit"));
        assert_eq!(settings.layout.layout_count, 4);
    }

    #[test]
    fn load_from_missing_file_writes_defaults() {
        let dir = std::env::temp_dir().join(format!("aspect-tui-test-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("config.toml");
        let _ = std::fs::remove_file(&path);

        let settings = Settings::load_from(&path).unwrap();
        assert!(path.exists());
        assert_eq!(Settings::load_from(&path).unwrap(), settings);

        std::fs::write(&path, "[layout]\nlayout_count = \"four\"").unwrap();
        assert!(Settings::load_from(&path).is_err());
        let _ = std::fs::remove_dir_all(&dir);
    }
}
