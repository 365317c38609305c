use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use crossterm::event::Event as CEvent;
use tokio::sync::mpsc;

/// What: Spawn the blocking thread that forwards terminal events.
///
/// Inputs:
/// - `event_tx`: Channel receiving terminal events.
/// - `cancelled`: Flag checked between polls; set it to stop the thread.
///
/// Output:
/// - None (the thread runs until cancelled or the channel closes).
///
/// Details:
/// - Polls with a 50ms timeout so cancellation is noticed promptly.
/// - Transient read and poll errors are ignored.
pub fn spawn_event_thread(event_tx: mpsc::UnboundedSender<CEvent>, cancelled: Arc<AtomicBool>) {
    std::thread::spawn(move || {
        while !cancelled.load(Ordering::Relaxed) {
            match crossterm::event::poll(Duration::from_millis(50)) {
                Ok(true) => {
                    let Ok(ev) = crossterm::event::read() else {
                        continue;
                    };
                    if cancelled.load(Ordering::Relaxed) || event_tx.send(ev).is_err() {
                        break;
                    }
                }
                Ok(false) | Err(_) => {}
            }
        }
        tracing::debug!("input thread stopped");
    });
}

/// What: Spawn the worker that requests redraws at a fixed interval.
///
/// Inputs:
/// - `tick_tx`: Channel receiving one `()` per tick.
/// - `period`: Interval between ticks.
///
/// Output:
/// - None (the task ends when the receiver is dropped).
pub fn spawn_tick_worker(tick_tx: mpsc::UnboundedSender<()>, period: Duration) {
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(period);
        interval.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);
        loop {
            interval.tick().await;
            if tick_tx.send(()).is_err() {
                break;
            }
        }
    });
}
