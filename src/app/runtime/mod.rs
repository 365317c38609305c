use std::time::Instant;

use ratatui::{
    Terminal,
    backend::{CrosstermBackend, TestBackend},
};

use motion_demo::state::AppState;
use motion_demo::theme::Settings;
use motion_demo::ui::ui;

use super::terminal::{restore_terminal, setup_terminal};

mod background;
mod channels;
mod cleanup;
mod event_loop;

use background::{spawn_event_thread, spawn_tick_worker};
use channels::Channels;
use cleanup::cleanup_on_exit;
use event_loop::run_event_loop;

type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// Startup options resolved from the command line and settings file.
#[derive(Debug, Default)]
pub struct RunOptions {
    /// Loaded settings.
    pub settings: Settings,
    /// Example to open on startup.
    pub open: Option<String>,
}

/// Build the initial state, applying `--open` through the regular selection path.
fn initial_state(opts: RunOptions) -> AppState {
    let mut app = AppState::new(opts.settings);
    if let Some(name) = opts.open.as_deref() {
        app.select(name, Instant::now());
    }
    app
}

/// What: Run the application end-to-end: terminal setup, event loop and teardown.
///
/// Inputs:
/// - `opts`: Settings and startup selection.
///
/// Output:
/// - `Ok(())` on a clean exit; `Err` when the terminal cannot be set up or restored.
///
/// Details:
/// - With `MOTION_DEMO_TEST_HEADLESS=1`, one frame is drawn into an off-screen buffer and
///   the function returns without touching the terminal.
/// - The terminal is restored even when the event loop ends abnormally.
pub async fn run(opts: RunOptions) -> Result<()> {
    let headless = std::env::var("MOTION_DEMO_TEST_HEADLESS").ok().as_deref() == Some("1");
    let mut app = initial_state(opts);
    if headless {
        let mut terminal = Terminal::new(TestBackend::new(80, 24))?;
        terminal.draw(|f| ui(f, &mut app))?;
        tracing::info!(title = %app.nav.title(), "headless frame drawn");
        println!("{}", app.nav.title());
        return Ok(());
    }

    let mouse = app.settings.mouse;
    setup_terminal(mouse)?;
    let (mut channels, senders) = Channels::new();
    let outcome = match Terminal::new(CrosstermBackend::new(std::io::stdout())) {
        Ok(mut terminal) => {
            spawn_event_thread(senders.event_tx, channels.event_thread_cancelled.clone());
            spawn_tick_worker(senders.tick_tx, app.settings.tick);
            run_event_loop(&mut terminal, &mut app, &mut channels).await;
            Ok(())
        }
        Err(e) => Err(e.into()),
    };
    cleanup_on_exit(&channels);
    restore_terminal(mouse)?;
    outcome
}
