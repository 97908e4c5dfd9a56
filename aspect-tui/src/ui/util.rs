use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::Span;
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;

use super::theme::Theme;

/// 在 `area` 内居中放置 `width` × `height` 的矩形（超出则裁到 area）
pub fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

/// 渲染空内容提示
pub fn render_placeholder(frame: &mut Frame, area: Rect, text: &str) {
    frame.render_widget(
        Paragraph::new(Span::styled(format!("  {text}"), Theme::secondary())),
        area,
    );
}

/// 渲染居中浮层面板骨架（清除背景 + 边框 + 标题），
/// 返回 `(content_area, hint_area)`：content 可滚动，hint 钉在底部不受滚动影响。
pub fn overlay_panel(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    max_w: u16,
    max_h: u16,
) -> (Rect, Rect) {
    let panel_w = max_w.min(area.width.saturating_sub(4));
    let panel_h = max_h.min(area.height.saturating_sub(4));
    let panel_area = centered_rect(area, panel_w, panel_h);

    frame.render_widget(Clear, panel_area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Theme::border())
        .title(Span::styled(
            format!(" {title} "),
            Style::default().add_modifier(Modifier::BOLD),
        ));
    let inner = block.inner(panel_area);
    frame.render_widget(block, panel_area);

    // 底部 1 行留给固定提示，其余给可滚动内容
    let chunks = Layout::vertical([Constraint::Min(1), Constraint::Length(1)]).split(inner);

    (chunks[0], chunks[1])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn centered_rect_is_centered() {
        let area = Rect::new(10, 5, 40, 20);
        assert_eq!(centered_rect(area, 10, 4), Rect::new(25, 13, 10, 4));
    }

    #[test]
    fn centered_rect_clamps_to_area() {
        let area = Rect::new(0, 0, 8, 3);
        assert_eq!(centered_rect(area, 20, 10), area);
    }
}
