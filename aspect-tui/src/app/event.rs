use aspect_core::{DimensionState, Field};
use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::ui::log_view::LogLevel;

use super::{App, AppMessage};

impl App {
    pub(crate) fn handle_message(&mut self, msg: AppMessage) {
        match msg {
            AppMessage::TermEvent(ev) => self.handle_event(ev),
            // 仅触发重绘
            AppMessage::Tick => {}
        }
    }

    pub(crate) fn handle_event(&mut self, event: Event) {
        match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => self.handle_key(key),
            Event::Paste(text) => self.append_text(&text),
            _ => {}
        }
    }

    fn handle_key(&mut self, key: KeyEvent) {
        if let (KeyModifiers::CONTROL, KeyCode::Char('c')) = (key.modifiers, key.code) {
            self.running = false;
            return;
        }

        // 帮助浮层打开时，只响应滚动和关闭
        if self.show_help {
            match key.code {
                KeyCode::F(1) | KeyCode::Esc => self.show_help = false,
                KeyCode::Down => self.help_scroll = self.help_scroll.saturating_add(1),
                KeyCode::Up => self.help_scroll = self.help_scroll.saturating_sub(1),
                _ => {}
            }
            return;
        }

        // 日志浮层打开时，只响应滚动和关闭
        if self.show_logs {
            match key.code {
                KeyCode::F(2) | KeyCode::Esc => self.show_logs = false,
                KeyCode::Down => self.logs.scroll_down(),
                KeyCode::Up => self.logs.scroll_up(),
                _ => {}
            }
            return;
        }

        match (key.modifiers, key.code) {
            (_, KeyCode::Esc) => self.running = false,
            (_, KeyCode::F(1)) => {
                self.show_help = true;
                self.help_scroll = 0;
            }
            (_, KeyCode::F(2)) => {
                self.show_logs = true;
                self.logs.mark_read();
            }
            (_, KeyCode::F(3)) => self.cycle_language(),
            (KeyModifiers::CONTROL, KeyCode::Char('r')) => self.reset_dimensions(),

            // 焦点切换
            (_, KeyCode::Tab | KeyCode::Down | KeyCode::Enter) => {
                self.focused = self.focused.next();
            }
            (_, KeyCode::BackTab | KeyCode::Up) => {
                self.focused = self.focused.prev();
            }

            // 编辑当前输入框
            (_, KeyCode::Backspace) => {
                let mut text = self.dims.text(self.focused);
                text.pop();
                self.edit_focused(&text);
            }
            (_, KeyCode::Delete) => self.edit_focused(""),
            (modifiers, KeyCode::Char(c)) if !modifiers.contains(KeyModifiers::CONTROL) => {
                self.append_text(c.encode_utf8(&mut [0; 4]));
            }
            _ => {}
        }
    }

    /// 追加到当前输入框文本末尾；非数字字符在解析时被剥离
    fn append_text(&mut self, input: &str) {
        let raw = format!("{}{input}", self.dims.text(self.focused));
        self.edit_focused(&raw);
    }

    fn edit_focused(&mut self, raw: &str) {
        let field = self.focused;
        let partner = self.dims.edit_text(field, raw);
        tracing::debug!(
            ?field,
            value = ?self.dims.get(field),
            ?partner,
            partner_value = ?partner.map(|p| self.dims.get(p)),
            "dimension edited"
        );
    }

    fn reset_dimensions(&mut self) {
        self.dims = DimensionState::default();
        self.focused = Field::SourceWidth;
        self.logs.push(LogLevel::Info, "dimensions reset to defaults".to_string());
    }

    fn cycle_language(&mut self) {
        let lang = self.settings.display.language.next();
        self.settings.display.language = lang;
        crate::ui::i18n::set_lang(lang);
        if let Err(e) = self.settings.save_to(&self.settings_path) {
            self.logs.push(LogLevel::Error, format!("failed to save settings: {e:#}"));
        }
    }
}
