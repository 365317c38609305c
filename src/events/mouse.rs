use std::time::Instant;

use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::{Position, Rect};

use crate::catalog::CATALOG;
use crate::state::AppState;

/// Whether the cell `(x, y)` lies inside `rect`.
fn hit(rect: Option<Rect>, x: u16, y: u16) -> bool {
    rect.is_some_and(|r| r.contains(Position { x, y }))
}

/// What: Handle a single mouse event using the rectangles recorded at the last render.
///
/// Inputs:
/// - `m`: Mouse event including position and button.
/// - `app`: Application state (rects, cursor, navigation).
/// - `now`: Current time.
///
/// Output:
/// - Always `false`; the mouse never requests exit.
///
/// Details:
/// - Detail screen: left click on the back affordance goes back; inside the example toggles it.
/// - List screen: left click on a row opens it; the wheel moves the highlight.
pub fn handle_mouse_event(m: MouseEvent, app: &mut AppState, now: Instant) -> bool {
    let (x, y) = (m.column, m.row);
    let left_down = matches!(m.kind, MouseEventKind::Down(MouseButton::Left));
    if app.nav.can_go_back() {
        if left_down && hit(app.back_button_rect, x, y) {
            app.back();
        } else if left_down && hit(app.example_rect, x, y) {
            app.toggle_example(now);
        }
        return false;
    }
    match m.kind {
        MouseEventKind::ScrollUp => app.move_cursor(-1),
        MouseEventKind::ScrollDown => app.move_cursor(1),
        MouseEventKind::Down(MouseButton::Left) => {
            if let Some(rect) = app.list_rect
                && hit(Some(rect), x, y)
            {
                let row = app.list_state.offset() + usize::from(y - rect.y);
                if row < CATALOG.len() {
                    app.set_cursor(row);
                    app.open_highlighted(now);
                }
            }
        }
        _ => {}
    }
    false
}
