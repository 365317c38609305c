//! Navigation and application state.

pub mod app_state;
pub mod nav;
pub mod types;

pub use app_state::AppState;
pub use nav::{LIST_TITLE, Navigator};
pub use types::{DetailView, Screen, Selection, View};
