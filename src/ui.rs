//! Rendering of the navigation shell: title bar, body and key hint footer.

use std::time::Instant;

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
    style::Style,
    widgets::Block,
};

use crate::catalog::AnimationKind;
use crate::state::{AppState, DetailView, View};

/// Detail screen body.
mod detail;
/// Catalog list body.
mod list;
/// Title bar and footer.
mod title;

/// Owned form of [`View`] so the state can be mutated while drawing the body.
enum Body {
    /// Catalog list.
    List,
    /// Example for a catalog entry.
    Example(AnimationKind),
    /// Fallback message for an unknown selection.
    Fallback(String),
}

/// Draw one frame using the current wall-clock time.
pub fn ui(f: &mut Frame, app: &mut AppState) {
    draw(f, app, Instant::now());
}

/// What: Draw one frame of the application.
///
/// Inputs:
/// - `f`: Frame to draw into.
/// - `app`: State to render; hit-test rectangles are recorded into it.
/// - `now`: Time at which animated values are sampled.
///
/// Output:
/// - None (side effect: frame contents and `app.*_rect` fields updated).
///
/// Details:
/// - The body is chosen by [`crate::state::Navigator::render`]: the catalog list with no
///   selection, otherwise the detail screen for the dispatched example or fallback.
pub fn draw(f: &mut Frame, app: &mut AppState, now: Instant) {
    let th = app.settings.theme;
    let area = f.area();
    f.render_widget(Block::default().style(Style::default().bg(th.base)), area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(1),
            Constraint::Length(1),
        ])
        .split(area);

    title::render_title_bar(f, app, chunks[0]);
    let body = match app.nav.render() {
        View::List => Body::List,
        View::Detail(DetailView::Example(kind)) => Body::Example(kind),
        View::Detail(d @ DetailView::Fallback(_)) => {
            Body::Fallback(d.fallback_message().unwrap_or_default())
        }
    };
    match body {
        Body::List => {
            app.example_rect = None;
            list::render_list(f, app, chunks[1]);
        }
        Body::Example(kind) => {
            app.list_rect = None;
            detail::render_example(f, app, kind, chunks[1], now);
        }
        Body::Fallback(message) => {
            app.list_rect = None;
            detail::render_fallback(f, app, &message, chunks[1]);
        }
    }
    title::render_footer(f, app, chunks[2]);
}
