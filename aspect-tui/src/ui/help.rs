use ratatui::{
    Frame,
    layout::Rect,
    text::{Line, Span},
    widgets::Paragraph,
};

use super::theme::Theme;

fn help_sections() -> Vec<(&'static str, Vec<(&'static str, &'static str)>)> {
    vec![
        (
            t!("help.section.edit"),
            vec![
                ("0-9 / paste", t!("help.digits")),
                ("Backspace", t!("help.backspace")),
                ("Delete", t!("help.delete")),
                ("Tab / Down / Enter", t!("help.next")),
                ("Shift+Tab / Up", t!("help.prev")),
            ],
        ),
        (
            t!("help.section.global"),
            vec![
                ("Ctrl+R", t!("help.reset")),
                ("F1", t!("help.help")),
                ("F2", t!("help.logs")),
                ("F3", t!("help.language")),
                ("Esc / Ctrl+C", t!("help.quit")),
            ],
        ),
    ]
}

/// 渲染悬浮帮助面板（居中覆盖）
pub fn render(frame: &mut Frame, area: Rect, scroll: u16) {
    let sections = help_sections();

    // 面板外高度 = 2 (borders) + content_lines + 1 (hint)
    let panel_h = count_lines(&sections) as u16 + 3;

    let (content_area, hint_area) = super::util::overlay_panel(
        frame,
        area,
        t!("help.title"),
        super::constants::HELP_PANEL_WIDTH,
        panel_h,
    );

    let mut lines: Vec<Line> = vec![Line::from("")];
    for (section_name, bindings) in &sections {
        lines.push(Line::from(Span::styled(format!("  {section_name}"), Theme::title())));
        for (key, desc) in bindings {
            lines.push(Line::from(vec![
                Span::styled(format!("  {key:<20}"), Theme::active()),
                Span::raw(*desc),
            ]));
        }
        lines.push(Line::from(""));
    }

    frame.render_widget(Paragraph::new(lines).scroll((scroll, 0)), content_area);
    frame.render_widget(
        Paragraph::new(Span::styled(format!("     {}", t!("help.close")), Theme::secondary())),
        hint_area,
    );
}

fn count_lines(sections: &[(&str, Vec<(&str, &str)>)]) -> usize {
    // 顶部留白 + 每节标题、条目、空行
    1 + sections.iter().map(|(_, b)| b.len() + 2).sum::<usize>()
}
