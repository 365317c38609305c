//! motion-demo binary entrypoint kept minimal. The runtime lives in `app`.

mod app;
mod args;

use std::fmt;
use std::sync::OnceLock;

use clap::Parser;

use motion_demo::catalog::CATALOG;
use motion_demo::theme::{load_settings, logs_dir};

/// Log timestamp formatter using local time.
struct LocalTimer;

impl tracing_subscriber::fmt::time::FormatTime for LocalTimer {
    fn format_time(&self, w: &mut tracing_subscriber::fmt::format::Writer<'_>) -> fmt::Result {
        let ts = chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.3f").to_string();
        w.write_str(&ts)
    }
}

static LOG_GUARD: OnceLock<tracing_appender::non_blocking::WorkerGuard> = OnceLock::new();

/// What: Install the global tracing subscriber.
///
/// Inputs:
/// - `level`: Default filter when `RUST_LOG` is unset.
///
/// Output:
/// - None.
///
/// Details:
/// - Writes to `<config>/logs/motion-demo.log` without ANSI codes; falls back to stderr
///   when the file cannot be opened.
fn init_logging(level: &str) {
    let env_filter = || {
        tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level))
    };
    let log_path = logs_dir().join("motion-demo.log");
    match std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)
    {
        Ok(file) => {
            let (non_blocking, guard) = tracing_appender::non_blocking(file);
            tracing_subscriber::fmt()
                .with_env_filter(env_filter())
                .with_target(false)
                .with_ansi(false)
                .with_writer(non_blocking)
                .with_timer(LocalTimer)
                .init();
            let _ = LOG_GUARD.set(guard);
            tracing::info!(path = %log_path.display(), "logging initialized");
        }
        Err(e) => {
            tracing_subscriber::fmt()
                .with_env_filter(env_filter())
                .with_target(false)
                .with_ansi(true)
                .with_writer(std::io::stderr)
                .with_timer(LocalTimer)
                .init();
            tracing::warn!(error = %e, "failed to open log file; using stderr");
        }
    }
}

#[tokio::main]
async fn main() {
    let args = args::Args::parse();
    if args.list {
        for kind in CATALOG {
            println!("{kind}");
        }
        return;
    }
    init_logging(&args::determine_log_level(&args));

    let (settings, _) = load_settings(args.config.as_deref());
    tracing::info!(open = ?args.open, "motion-demo starting");
    let opts = app::RunOptions {
        settings,
        open: args.open,
    };
    if let Err(err) = app::run(opts).await {
        tracing::error!(error = ?err, "application error");
        eprintln!("motion-demo: {err}");
        std::process::exit(1);
    }
    tracing::info!("motion-demo exited");
}
