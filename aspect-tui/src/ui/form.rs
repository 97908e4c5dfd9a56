use aspect_core::{DimensionState, Field};
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use super::constants::INPUT_WIDTH;
use super::theme::Theme;

fn field_label(field: Field) -> &'static str {
    match field {
        Field::SourceWidth => t!("form.source_width"),
        Field::SourceHeight => t!("form.source_height"),
        Field::TargetWidth => t!("form.target_width"),
        Field::TargetHeight => t!("form.target_height"),
    }
}

/// 渲染源/目标两组输入框（左右并排）
pub fn render(frame: &mut Frame, area: Rect, state: &DimensionState, focused: Field) {
    let groups = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    render_group(
        frame,
        groups[0],
        t!("form.source"),
        [Field::SourceWidth, Field::SourceHeight],
        state,
        focused,
    );
    render_group(
        frame,
        groups[1],
        t!("form.target"),
        [Field::TargetWidth, Field::TargetHeight],
        state,
        focused,
    );
}

fn render_group(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    fields: [Field; 2],
    state: &DimensionState,
    focused: Field,
) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // 标题
            Constraint::Length(1), // 宽 标签
            Constraint::Length(1), // 宽 输入
            Constraint::Length(1), // 空行
            Constraint::Length(1), // 高 标签
            Constraint::Length(1), // 高 输入
            Constraint::Min(0),
        ])
        .split(area);

    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(title.to_string(), Theme::title()))),
        rows[0],
    );

    for (field, (label_row, input_row)) in fields.into_iter().zip([(1, 2), (4, 5)]) {
        let is_focused = field == focused;
        let label_style = if is_focused {
            Theme::highlight()
        } else {
            Theme::secondary()
        };
        frame.render_widget(
            Paragraph::new(Span::styled(field_label(field), label_style)),
            rows[label_row],
        );
        frame.render_widget(
            Paragraph::new(build_input_line(&state.text(field), is_focused)),
            rows[input_row],
        );
    }
}

/// 构建输入行：> content█  光标固定在末尾
pub(crate) fn build_input_line(text: &str, is_focused: bool) -> Line<'static> {
    let pad = (INPUT_WIDTH as usize).saturating_sub(text.chars().count() + 1);

    if is_focused {
        Line::from(vec![
            Span::styled("> ", Theme::active()),
            Span::raw(text.to_string()),
            Span::styled(" ", Style::default().add_modifier(Modifier::REVERSED)),
            Span::styled("_".repeat(pad), Theme::secondary()),
        ])
    } else {
        Line::from(vec![
            Span::styled("  ", Theme::secondary()),
            Span::raw(text.to_string()),
            Span::styled("_".repeat(pad + 1), Theme::secondary()),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn focused_input_shows_cursor_marker() {
        let line = build_input_line("1920", true);
        assert!(plain(&line).starts_with("> 1920 "));
        assert_eq!(line.spans[2].style.add_modifier, Modifier::REVERSED);
    }

    #[test]
    fn inputs_have_constant_width() {
        let a = plain(&build_input_line("", false));
        let b = plain(&build_input_line("1080", true));
        assert_eq!(a.chars().count(), b.chars().count());
    }
}
