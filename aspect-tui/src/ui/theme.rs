use ratatui::style::{Color, Modifier, Style};

pub struct Theme;

impl Theme {
    pub fn highlight() -> Style {
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
    }

    pub fn secondary() -> Style {
        Style::default().fg(Color::DarkGray)
    }

    pub fn active() -> Style {
        Style::default().fg(Color::Cyan)
    }

    pub fn error() -> Style {
        Style::default().fg(Color::Red)
    }

    pub fn warn() -> Style {
        Style::default().fg(Color::Yellow)
    }

    pub fn title() -> Style {
        Style::default().add_modifier(Modifier::BOLD)
    }

    pub fn border() -> Style {
        Style::default().fg(Color::DarkGray)
    }

    /// 预览框（深色卡片）
    pub fn paper() -> Style {
        Style::default().fg(Color::White).bg(Color::Rgb(48, 48, 48))
    }

    /// 头部比例色块
    pub fn ratio_badge() -> Style {
        Style::default().fg(Color::Black).bg(Color::Cyan)
    }

    pub fn clock_badge() -> Style {
        Style::default().fg(Color::Black).bg(Color::DarkGray)
    }

    pub fn unread_badge() -> Style {
        Style::default().fg(Color::White).bg(Color::Red)
    }

    pub fn table_header() -> Style {
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
    }
}
