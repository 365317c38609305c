use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    widgets::{List, ListItem, Paragraph},
};

use crate::catalog::CATALOG;
use crate::state::AppState;

/// Heading above the catalog rows.
pub const LIST_HEADING: &str = "List of composable animations";

/// What: Render the catalog list and record the rows' rectangle for mouse hit-testing.
///
/// Inputs:
/// - `f`: Frame to draw into.
/// - `app`: State providing the highlighted row; `list_rect` is updated.
/// - `area`: Body region.
///
/// Output:
/// - None.
pub fn render_list(f: &mut Frame, app: &mut AppState, area: Rect) {
    let th = app.settings.theme;
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(2), Constraint::Min(0)])
        .split(area);
    let heading = Rect::new(
        chunks[0].x + 2,
        chunks[0].y + 1,
        chunks[0].width.saturating_sub(2),
        1,
    )
    .intersection(chunks[0]);
    f.render_widget(
        Paragraph::new(LIST_HEADING)
            .style(Style::default().fg(th.text).add_modifier(Modifier::BOLD)),
        heading,
    );

    let rows = Rect::new(
        chunks[1].x + 2,
        chunks[1].y,
        chunks[1].width.saturating_sub(4),
        chunks[1].height,
    )
    .intersection(chunks[1]);
    let items: Vec<ListItem> = CATALOG
        .iter()
        .map(|k| ListItem::new(k.name()).style(Style::default().fg(th.text)))
        .collect();
    let list = List::new(items)
        .style(Style::default().bg(th.base))
        .highlight_style(
            Style::default()
                .fg(th.base)
                .bg(th.accent)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("▶ ");
    f.render_stateful_widget(list, rows, &mut app.list_state);
    app.list_rect = Some(rows);
}
