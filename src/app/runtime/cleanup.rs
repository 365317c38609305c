use std::sync::atomic::Ordering;

use super::channels::Channels;

/// Signal background producers to stop before the terminal is restored.
pub fn cleanup_on_exit(channels: &Channels) {
    tracing::debug!("main loop exited, stopping input thread");
    channels.event_thread_cancelled.store(true, Ordering::Relaxed);
}
