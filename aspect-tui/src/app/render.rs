use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::Paragraph,
};
use unicode_width::UnicodeWidthStr;

use crate::ui::constants::{FORM_WIDTH, HEADER_HEIGHT, HINT_HEIGHT, TOP_HEIGHT};
use crate::ui::theme::Theme;

use super::App;

impl App {
    pub(crate) fn render(&mut self, frame: &mut Frame) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(HEADER_HEIGHT),
                Constraint::Length(TOP_HEIGHT),
                Constraint::Min(3),
                Constraint::Length(HINT_HEIGHT),
            ])
            .split(frame.area());

        // 每帧只读取一次派生数据；源尺寸未变时直接命中缓存
        let derived = self.deriver.derive(&self.dims).clone();

        self.render_header(frame, chunks[0], &derived.ratio_label);

        let top = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(FORM_WIDTH), Constraint::Min(10)])
            .split(chunks[1]);
        let form_area = Rect {
            x: top[0].x + 2,
            y: top[0].y + 1,
            width: top[0].width.saturating_sub(2),
            height: top[0].height.saturating_sub(1),
        };
        crate::ui::form::render(frame, form_area, &self.dims, self.focused);

        let preview = &self.settings.preview;
        crate::ui::preview::render(
            frame,
            top[1],
            derived.preview,
            self.deriver.preview_max(),
            (preview.cell_width, preview.cell_height),
            &derived.ratio_label,
        );

        crate::ui::layout_table::render(
            frame,
            chunks[2],
            &self.deriver.config().layout_widths,
            &derived.layout,
        );

        frame.render_widget(
            Paragraph::new(Span::styled(format!("  {}", t!("app.hint")), Theme::secondary())),
            chunks[3],
        );

        if self.show_logs {
            crate::ui::log_view::render(frame, frame.area(), &self.logs);
        }

        if self.show_help {
            crate::ui::help::render(frame, frame.area(), self.help_scroll);
        }
    }

    fn render_header(&self, frame: &mut Frame, area: Rect, ratio_label: &str) {
        let left = Line::from(vec![
            Span::styled(format!("  {}", t!("app.title")), Theme::title()),
            Span::styled(
                match self.dims.target() {
                    Some(target) => format!("  → {target}"),
                    None => String::new(),
                },
                Theme::secondary(),
            ),
        ]);

        let time_str = chrono::Local::now().format(" %H:%M ").to_string();

        let mut right_spans: Vec<Span> = Vec::new();
        if self.logs.unread_count > 0 {
            right_spans.push(Span::styled(
                format!(" ! {} ", self.logs.unread_count),
                Theme::unread_badge(),
            ));
        }
        right_spans.push(Span::styled(format!(" {ratio_label} "), Theme::ratio_badge()));
        right_spans.push(Span::styled(time_str, Theme::clock_badge()));

        let right_width: u16 = right_spans.iter().map(|s| s.content.width() as u16).sum();

        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Min(1), Constraint::Length(right_width)])
            .split(area);

        frame.render_widget(Paragraph::new(left), cols[0]);
        frame.render_widget(
            Paragraph::new(Line::from(right_spans)).alignment(Alignment::Right),
            cols[1],
        );
    }
}
