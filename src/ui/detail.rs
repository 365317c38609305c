use std::rc::Rc;
use std::time::Instant;

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    widgets::{Paragraph, Wrap},
};

use crate::catalog::AnimationKind;
use crate::showcase::ExampleView;
use crate::state::AppState;
use crate::theme::Theme;

/// Heading above the example.
pub const DETAIL_HEADING: &str = "Animation Example:";

/// Split the body into heading, stage and caption rows, drawing the heading.
fn layout_with_heading(f: &mut Frame, th: &Theme, area: Rect) -> Rc<[Rect]> {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Min(1),
            Constraint::Length(2),
        ])
        .split(area);
    f.render_widget(
        Paragraph::new(DETAIL_HEADING)
            .style(Style::default().fg(th.subtext).add_modifier(Modifier::BOLD))
            .alignment(Alignment::Center),
        chunks[0],
    );
    chunks
}

/// What: Render the detail screen of a catalog entry.
///
/// Inputs:
/// - `f`: Frame to draw into.
/// - `app`: State holding the running example; `example_rect` is updated.
/// - `kind`: Dispatched catalog entry.
/// - `area`: Body region.
/// - `now`: Sampling time for the example's tween.
///
/// Output:
/// - None.
///
/// Details:
/// - If the held example belongs to another entry (or none is held), a fresh one is built.
pub fn render_example(
    f: &mut Frame,
    app: &mut AppState,
    kind: AnimationKind,
    area: Rect,
    now: Instant,
) {
    let th = app.settings.theme;
    let chunks = layout_with_heading(f, &th, area);
    let stage = Rect::new(
        chunks[1].x + 1,
        chunks[1].y,
        chunks[1].width.saturating_sub(2),
        chunks[1].height,
    )
    .intersection(chunks[1]);
    let example = match app.example {
        Some(ex) if ex.kind() == kind => ex,
        _ => {
            let ex = ExampleView::for_kind(kind, &th, app.settings.animation_spec(), now);
            app.example = Some(ex);
            ex
        }
    };
    example.render(f, stage, &th, now);
    app.example_rect = Some(stage);

    let footer = format!("{}  ({})", kind.hint(), example.status());
    f.render_widget(
        Paragraph::new(footer)
            .style(Style::default().fg(th.subtext))
            .alignment(Alignment::Center),
        chunks[2],
    );
}

/// Render the detail screen of an identifier outside the catalog.
pub fn render_fallback(f: &mut Frame, app: &mut AppState, message: &str, area: Rect) {
    let th = app.settings.theme;
    app.example_rect = None;
    let chunks = layout_with_heading(f, &th, area);
    f.render_widget(
        Paragraph::new(message.to_string())
            .style(Style::default().fg(th.text))
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true }),
        chunks[1],
    );
}
