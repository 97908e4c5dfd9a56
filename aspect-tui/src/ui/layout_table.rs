use aspect_core::LayoutRow;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Row, Table},
};

use super::constants::LAYOUT_NAME_WIDTH;
use super::i18n::columns_label;
use super::theme::Theme;

fn right(text: String) -> Cell<'static> {
    Cell::from(Line::from(text).alignment(Alignment::Right))
}

/// 表头：Layout | 640w | 1024w | ...
fn header_cells(widths: &[u32]) -> Vec<Cell<'static>> {
    std::iter::once(Cell::from(t!("layouts.layout")))
        .chain(widths.iter().map(|w| right(format!("{w}w"))))
        .collect()
}

/// 渲染布局表；源尺寸不完整时只显示表头和提示
pub fn render(frame: &mut Frame, area: Rect, widths: &[u32], rows: &[LayoutRow]) {
    let block = Block::default()
        .borders(Borders::TOP)
        .border_style(Theme::border())
        .title(Span::styled(format!(" {} ", t!("layouts.title")), Theme::title()));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let header = Row::new(header_cells(widths)).style(Theme::table_header());

    let body: Vec<Row> = rows
        .iter()
        .enumerate()
        .map(|(i, row)| {
            let cells = std::iter::once(Cell::from(columns_label(i + 1)))
                .chain(row.columns.iter().map(|cell| right(cell.to_string())));
            Row::new(cells)
        })
        .collect();
    let is_empty = body.is_empty();

    let constraints: Vec<Constraint> = std::iter::once(Constraint::Length(LAYOUT_NAME_WIDTH))
        .chain(widths.iter().map(|_| Constraint::Fill(1)))
        .collect();

    let table = Table::new(body, constraints).header(header).column_spacing(2);
    frame.render_widget(table, inner);

    if is_empty && inner.height > 1 {
        let hint_area = Rect {
            y: inner.y + 1,
            height: 1,
            ..inner
        };
        super::util::render_placeholder(frame, hint_area, t!("layouts.empty"));
    }
}
