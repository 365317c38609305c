//! Library entry for motion-demo exposing the navigation core and UI for integration tests.

pub mod catalog;
pub mod events;
pub mod motion;
pub mod showcase;
pub mod state;
pub mod theme;
pub mod ui;
