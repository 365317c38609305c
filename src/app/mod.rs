//! Terminal runtime: setup, event loop and teardown.

/// Event loop, input thread and tick worker.
mod runtime;
/// Terminal setup and restoration utilities.
mod terminal;

pub use runtime::{RunOptions, run};
