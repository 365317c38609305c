use std::io::Stdout;
use std::time::Instant;

use ratatui::{Terminal, backend::CrosstermBackend};
use tokio::select;

use motion_demo::state::AppState;
use motion_demo::ui::ui;

use super::channels::Channels;

/// What: Run the main event loop until an exit chord is pressed or input ends.
///
/// Inputs:
/// - `terminal`: Terminal to draw into.
/// - `app`: Application state.
/// - `channels`: Input and tick channels.
///
/// Output:
/// - None (returns on exit).
///
/// Details:
/// - Every input event triggers a redraw.
/// - Ticks redraw only while an example is animating, plus one final frame so the
///   settled value is shown.
pub async fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    app: &mut AppState,
    channels: &mut Channels,
) {
    let mut needs_draw = true;
    let mut was_animating = false;
    loop {
        if needs_draw {
            if let Err(e) = terminal.draw(|f| ui(f, app)) {
                tracing::warn!(error = %e, "draw failed");
            }
            needs_draw = false;
        }
        select! {
            ev = channels.event_rx.recv() => {
                let Some(ev) = ev else {
                    tracing::warn!("input thread ended");
                    break;
                };
                if motion_demo::events::handle_event(ev, app, Instant::now()) {
                    break;
                }
                needs_draw = true;
            }
            Some(()) = channels.tick_rx.recv() => {
                needs_draw = tick_needs_draw(app.is_animating(Instant::now()), &mut was_animating);
            }
        }
    }
}

/// What: Decide whether a tick should redraw.
///
/// Inputs:
/// - `animating`: Whether the live example is moving at this tick.
/// - `was_animating`: State carried from the previous tick; updated in place.
///
/// Output:
/// - `true` while animating and on the first idle tick after it.
fn tick_needs_draw(animating: bool, was_animating: &mut bool) -> bool {
    let draw = animating || *was_animating;
    *was_animating = animating;
    draw
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;

    #[test]
    /// What: Ticks redraw only while an example moves, plus one settling frame.
    ///
    /// Inputs:
    /// - The `Size` example idle, toggled at `t0`, sampled mid-flight and after it settles.
    ///
    /// Output:
    /// - No draw while idle; draws while moving; exactly one draw once it stops.
    fn tick_redraws_only_around_animation() {
        let t0 = Instant::now();
        let mut app = AppState::default();
        app.select("Size", t0);
        let mut was_animating = false;

        assert!(!tick_needs_draw(app.is_animating(t0), &mut was_animating));
        assert!(!tick_needs_draw(app.is_animating(t0), &mut was_animating));

        app.toggle_example(t0);
        let mid = t0 + Duration::from_millis(100);
        assert!(tick_needs_draw(app.is_animating(mid), &mut was_animating));
        assert!(tick_needs_draw(
            app.is_animating(mid + Duration::from_millis(33)),
            &mut was_animating
        ));

        let settled = t0 + Duration::from_secs(2);
        assert!(!app.is_animating(settled));
        assert!(tick_needs_draw(app.is_animating(settled), &mut was_animating));
        assert!(!tick_needs_draw(
            app.is_animating(settled + Duration::from_millis(33)),
            &mut was_animating
        ));
    }
}
