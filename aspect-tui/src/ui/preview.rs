use aspect_core::PreviewSize;
use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use super::theme::Theme;
use super::util::centered_rect;

/// 把像素预览映射成字符格矩形，并在 `area` 内居中。
///
/// 字符格不是正方形：按 `cell = (w, h)` 像素换算，使屏幕上的宽高比与预览一致。
/// 边长为 `max` 的正方形恰好填满 area 能容纳的最大正方形。
pub fn fit_cells(size: PreviewSize, max: f64, area: Rect, cell: (u16, u16)) -> Rect {
    let (cw, ch) = (cell.0.max(1) as f64, cell.1.max(1) as f64);
    let area_px_w = area.width as f64 * cw;
    let area_px_h = area.height as f64 * ch;
    let scale = (area_px_w / max).min(area_px_h / max);

    let cols = (size.width * scale / cw).round().max(1.0) as u16;
    let rows = (size.height * scale / ch).round().max(1.0) as u16;
    centered_rect(area, cols, rows)
}

/// 渲染比例预览：外框 + 等比卡片 + 居中比例标签；源尺寸不完整时外框留空
pub fn render(
    frame: &mut Frame,
    area: Rect,
    preview: Option<PreviewSize>,
    max: f64,
    cell: (u16, u16),
    ratio_label: &str,
) {
    let frame_block = Block::default()
        .borders(Borders::ALL)
        .border_style(Theme::border())
        .title(Span::styled(format!(" {} ", t!("preview.title")), Theme::title()));
    let inner = frame_block.inner(area);
    frame.render_widget(frame_block, area);

    let Some(size) = preview else {
        return;
    };

    let card = fit_cells(size, max, inner, cell);
    frame.render_widget(Block::default().style(Theme::paper()), card);

    // 标签放在卡片垂直中线
    let label_row = Rect {
        y: card.y + card.height.saturating_sub(1) / 2,
        height: 1,
        ..card
    };
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(format!("⤢ {ratio_label}"), Theme::paper())))
            .alignment(Alignment::Center),
        label_row,
    );
}
