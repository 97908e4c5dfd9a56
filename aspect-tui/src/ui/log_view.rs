use std::collections::VecDeque;

use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
};

use super::constants::{LOG_PANEL_HEIGHT, LOG_PANEL_WIDTH};
use super::theme::Theme;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
}

pub struct LogEntry {
    pub time: chrono::DateTime<chrono::Local>,
    pub level: LogLevel,
    pub message: String,
}

const MAX_MEMORY_ENTRIES: usize = 200;

/// 面向用户的日志：内存环形缓冲，同时转发给 tracing 写入日志文件
pub struct LogStore {
    pub entries: VecDeque<LogEntry>,
    pub unread_count: usize,
    pub scroll: usize,
}

impl LogStore {
    pub fn new() -> Self {
        Self {
            entries: VecDeque::new(),
            unread_count: 0,
            scroll: 0,
        }
    }

    pub fn push(&mut self, level: LogLevel, message: String) {
        match level {
            LogLevel::Error => tracing::error!("{message}"),
            LogLevel::Warn => tracing::warn!("{message}"),
            LogLevel::Info => tracing::info!("{message}"),
        }

        self.entries.push_back(LogEntry {
            time: chrono::Local::now(),
            level,
            message,
        });
        if self.entries.len() > MAX_MEMORY_ENTRIES {
            self.entries.pop_front();
        }
        self.unread_count += 1;
    }

    pub fn mark_read(&mut self) {
        self.unread_count = 0;
    }

    pub fn scroll_up(&mut self) {
        self.scroll = self.scroll.saturating_sub(1);
    }

    pub fn scroll_down(&mut self) {
        let max = self.entries.len().saturating_sub(1);
        if self.scroll < max {
            self.scroll += 1;
        }
    }
}

pub fn render(frame: &mut Frame, area: Rect, store: &LogStore) {
    let (content_area, hint_area) = super::util::overlay_panel(
        frame,
        area,
        t!("logs.title"),
        LOG_PANEL_WIDTH,
        LOG_PANEL_HEIGHT,
    );

    let visible_lines = content_area.height as usize;
    let mut lines: Vec<Line> = Vec::new();

    if store.entries.is_empty() {
        lines.push(Line::from(Span::styled(
            format!("  {}", t!("logs.empty")),
            Theme::secondary(),
        )));
    } else {
        let total = store.entries.len();
        let start = store.scroll.min(total.saturating_sub(visible_lines));
        let end = (start + visible_lines).min(total);

        for entry in store.entries.range(start..end) {
            let time_str = entry.time.format("%H:%M:%S").to_string();
            let (level_str, level_style) = match entry.level {
                LogLevel::Error => ("ERROR", Theme::error()),
                LogLevel::Warn => (" WARN", Theme::warn()),
                LogLevel::Info => (" INFO", Style::default()),
            };

            lines.push(Line::from(vec![
                Span::styled(format!(" {time_str} "), Theme::secondary()),
                Span::styled(format!("{level_str} "), level_style),
                Span::raw(entry.message.as_str()),
            ]));
        }
    }

    frame.render_widget(Paragraph::new(lines), content_area);
    frame.render_widget(
        Paragraph::new(Span::styled(format!("    {}", t!("logs.close")), Theme::secondary())),
        hint_area,
    );
}
