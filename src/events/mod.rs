//! Event handling: maps keyboard and mouse input onto navigation operations.

use std::time::Instant;

use crossterm::event::{Event as CEvent, KeyEvent, KeyEventKind};

use crate::state::AppState;
use crate::theme::{KeyChord, KeyMap};

mod mouse;

pub use mouse::handle_mouse_event;

/// What: Dispatch a single terminal event and mutate the [`AppState`].
///
/// Inputs:
/// - `ev`: Terminal event from crossterm.
/// - `app`: Application state.
/// - `now`: Time used to start or retarget example tweens.
///
/// Output:
/// - `true` to signal the application should exit; otherwise `false`.
///
/// Details:
/// - Key releases and repeats are ignored.
/// - Resize and focus events need no state change; the next frame adapts.
pub fn handle_event(ev: CEvent, app: &mut AppState, now: Instant) -> bool {
    match ev {
        CEvent::Key(ke) if ke.kind == KeyEventKind::Press => handle_key_event(ke, app, now),
        CEvent::Mouse(m) => handle_mouse_event(m, app, now),
        _ => false,
    }
}

/// What: Apply a key press.
///
/// Inputs:
/// - `ke`: Key press.
/// - `app`: Application state.
/// - `now`: Current time.
///
/// Output:
/// - `true` when an exit chord was pressed.
///
/// Details:
/// - On the list: cursor movement and select. On a detail screen: toggle and back.
/// - Exit chords work on both screens.
pub fn handle_key_event(ke: KeyEvent, app: &mut AppState, now: Instant) -> bool {
    let km = app.settings.keymap.clone();
    let hit = |list: &[KeyChord]| KeyMap::matches(list, ke.code, ke.modifiers);
    if hit(&km.exit) {
        tracing::info!("exit requested");
        return true;
    }
    if app.nav.can_go_back() {
        if hit(&km.back) {
            app.back();
        } else if hit(&km.toggle) {
            app.toggle_example(now);
        }
        return false;
    }
    if hit(&km.up) {
        app.move_cursor(-1);
    } else if hit(&km.down) {
        app.move_cursor(1);
    } else if hit(&km.top) {
        app.set_cursor(0);
    } else if hit(&km.bottom) {
        app.set_cursor(usize::MAX);
    } else if hit(&km.select) {
        app.open_highlighted(now);
    }
    false
}
