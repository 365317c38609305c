use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use unicode_width::UnicodeWidthStr;

use crate::state::AppState;
use crate::theme::KeyChord;

/// Label of the back affordance.
pub const BACK_LABEL: &str = "← Back";

/// What: Render the title bar and record the back affordance's rectangle.
///
/// Inputs:
/// - `f`: Frame to draw into.
/// - `app`: State providing the title; `back_button_rect` is updated.
/// - `area`: Title bar region.
///
/// Output:
/// - None.
///
/// Details:
/// - The back affordance is drawn only on the detail screen.
pub fn render_title_bar(f: &mut Frame, app: &mut AppState, area: Rect) {
    let th = app.settings.theme;
    let block = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(Style::default().fg(th.subtext))
        .style(Style::default().bg(th.surface));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let mut spans = vec![Span::raw(" ")];
    app.back_button_rect = None;
    if app.nav.can_go_back() {
        let w = u16::try_from(BACK_LABEL.width()).unwrap_or(u16::MAX);
        app.back_button_rect = Some(Rect::new(inner.x + 1, inner.y, w, 1).intersection(inner));
        spans.push(Span::styled(
            BACK_LABEL,
            Style::default().fg(th.accent).add_modifier(Modifier::BOLD),
        ));
        spans.push(Span::raw("  "));
    }
    spans.push(Span::styled(
        app.nav.title(),
        Style::default().fg(th.text).add_modifier(Modifier::BOLD),
    ));
    f.render_widget(Paragraph::new(Line::from(spans)), inner);
}

/// Labels of the first chord bound to an action, e.g. `Enter`.
fn first_label(list: &[KeyChord]) -> String {
    list.first().map_or_else(|| "-".to_string(), KeyChord::label)
}

/// Render a one-line key hint footer for the current screen.
pub fn render_footer(f: &mut Frame, app: &AppState, area: Rect) {
    let th = app.settings.theme;
    let km = &app.settings.keymap;
    let hints: Vec<(String, &str)> = if app.nav.can_go_back() {
        vec![
            (first_label(&km.toggle), "toggle"),
            (first_label(&km.back), "back"),
            (first_label(&km.exit), "quit"),
        ]
    } else {
        vec![
            (
                format!("{}/{}", first_label(&km.up), first_label(&km.down)),
                "move",
            ),
            (first_label(&km.select), "open"),
            (first_label(&km.exit), "quit"),
        ]
    };
    let mut spans = vec![Span::raw(" ")];
    for (i, (key, action)) in hints.into_iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled("  ·  ", Style::default().fg(th.subtext)));
        }
        spans.push(Span::styled(key, Style::default().fg(th.accent)));
        spans.push(Span::styled(format!(" {action}"), Style::default().fg(th.subtext)));
    }
    f.render_widget(
        Paragraph::new(Line::from(spans)).style(Style::default().bg(th.base)),
        area,
    );
}
