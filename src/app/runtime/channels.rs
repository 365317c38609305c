use std::sync::Arc;
use std::sync::atomic::AtomicBool;

use crossterm::event::Event as CEvent;
use tokio::sync::mpsc;

/// Receiving side of the event loop's inputs.
pub struct Channels {
    /// Terminal events from the input thread.
    pub event_rx: mpsc::UnboundedReceiver<CEvent>,
    /// Redraw requests from the tick worker.
    pub tick_rx: mpsc::UnboundedReceiver<()>,
    /// Set on exit so the input thread stops polling.
    pub event_thread_cancelled: Arc<AtomicBool>,
}

/// Sending side, handed off to the producers.
///
/// Once the producers own the only senders, a closed receiver means the producer is gone.
pub struct Senders {
    /// Sender for the input thread.
    pub event_tx: mpsc::UnboundedSender<CEvent>,
    /// Sender for the tick worker.
    pub tick_tx: mpsc::UnboundedSender<()>,
}

impl Channels {
    /// Create the channels and return their senders separately.
    pub fn new() -> (Self, Senders) {
        let (event_tx, event_rx) = mpsc::unbounded_channel::<CEvent>();
        let (tick_tx, tick_rx) = mpsc::unbounded_channel::<()>();
        (
            Self {
                event_rx,
                tick_rx,
                event_thread_cancelled: Arc::new(AtomicBool::new(false)),
            },
            Senders { event_tx, tick_tx },
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    /// What: The event receiver closes once the sender handed to the producer is dropped.
    ///
    /// Inputs:
    /// - Fresh channels; the event sender is dropped.
    ///
    /// Output:
    /// - `recv()` returns `None` instead of waiting forever.
    async fn event_receiver_closes_with_producer() {
        let (mut channels, senders) = Channels::new();
        let Senders { event_tx, tick_tx } = senders;
        drop(event_tx);
        assert!(channels.event_rx.recv().await.is_none());
        tick_tx.send(()).expect("tick receiver alive");
        assert_eq!(channels.tick_rx.recv().await, Some(()));
    }
}
