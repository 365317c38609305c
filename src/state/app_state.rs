//! Central `AppState` container.

use std::time::Instant;

use ratatui::{layout::Rect, widgets::ListState};

use crate::catalog::CATALOG;
use crate::showcase::ExampleView;
use crate::state::nav::Navigator;
use crate::state::types::Selection;
use crate::theme::Settings;

/// Application state shared by the event and UI layers.
///
/// Mutated only on the event-loop task in response to input and ticks.
#[derive(Debug)]
pub struct AppState {
    /// Navigation between the list and a detail screen.
    pub nav: Navigator,
    /// Highlighted row of the catalog list.
    pub list_state: ListState,
    /// Example shown on the detail screen; `None` on the list or for unknown selections.
    pub example: Option<ExampleView>,
    /// Loaded settings (timing, key bindings, palette).
    pub settings: Settings,
    /// Screen rectangle of the back affordance, recorded at render time.
    pub back_button_rect: Option<Rect>,
    /// Screen rectangle of the catalog rows, recorded at render time.
    pub list_rect: Option<Rect>,
    /// Screen rectangle of the example stage, recorded at render time.
    pub example_rect: Option<Rect>,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(Settings::default())
    }
}

impl AppState {
    /// Fresh state on the catalog list with the first row highlighted.
    #[must_use]
    pub fn new(settings: Settings) -> Self {
        Self {
            nav: Navigator::new(),
            list_state: ListState::default().with_selected(Some(0)),
            example: None,
            settings,
            back_button_rect: None,
            list_rect: None,
            example_rect: None,
        }
    }

    /// What: Open the detail screen for `name` and start its example.
    ///
    /// Inputs:
    /// - `name`: Selection identifier.
    /// - `now`: Start time for the example's tween.
    ///
    /// Output:
    /// - None (side effect: navigator, list highlight and example state updated).
    ///
    /// Details:
    /// - Every selection builds a fresh example; unknown names leave no example.
    pub fn select(&mut self, name: &str, now: Instant) {
        self.nav.select(name);
        self.example = match self.nav.selection() {
            Some(Selection::Known(kind)) => {
                self.list_state.select(Some(kind.index()));
                Some(ExampleView::for_kind(
                    *kind,
                    &self.settings.theme,
                    self.settings.animation_spec(),
                    now,
                ))
            }
            _ => None,
        };
    }

    /// Return to the list, dropping the running example.
    pub fn back(&mut self) {
        self.nav.back();
        self.example = None;
        self.example_rect = None;
        self.back_button_rect = None;
    }

    /// Index of the highlighted catalog row.
    #[must_use]
    pub fn cursor(&self) -> usize {
        self.list_state.selected().unwrap_or(0).min(CATALOG.len() - 1)
    }

    /// Move the highlight by `delta` rows, clamped to the catalog.
    pub fn move_cursor(&mut self, delta: isize) {
        let next = self
            .cursor()
            .saturating_add_signed(delta)
            .min(CATALOG.len() - 1);
        self.list_state.select(Some(next));
    }

    /// Highlight the row at `index`, clamped to the catalog.
    pub fn set_cursor(&mut self, index: usize) {
        self.list_state.select(Some(index.min(CATALOG.len() - 1)));
    }

    /// Open the highlighted catalog entry.
    pub fn open_highlighted(&mut self, now: Instant) {
        let name = CATALOG[self.cursor()].name();
        self.select(name, now);
    }

    /// Toggle the running example, if any.
    pub fn toggle_example(&mut self, now: Instant) {
        if let Some(ex) = self.example.as_mut() {
            ex.toggle(now);
        }
    }

    /// Whether the UI must keep redrawing to show motion.
    #[must_use]
    pub fn is_animating(&self, now: Instant) -> bool {
        self.example.as_ref().is_some_and(|ex| ex.is_animating(now))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::AnimationKind;
    use crate::state::types::Screen;

    #[test]
    /// What: Cursor movement clamps at both ends of the catalog.
    ///
    /// Inputs:
    /// - Moves of -3, +100 and a direct jump past the end.
    ///
    /// Output:
    /// - Cursor at 0, then 7, then 7.
    fn cursor_clamps() {
        let mut app = AppState::default();
        app.move_cursor(-3);
        assert_eq!(app.cursor(), 0);
        app.move_cursor(100);
        assert_eq!(app.cursor(), CATALOG.len() - 1);
        app.set_cursor(42);
        assert_eq!(app.cursor(), CATALOG.len() - 1);
    }

    #[test]
    /// What: Opening the highlighted row builds that row's example; back drops it.
    ///
    /// Inputs:
    /// - Cursor on row 2 (`Size`), open, then back.
    ///
    /// Output:
    /// - Size example present while on detail; none after back, cursor kept.
    fn open_and_back() {
        let now = Instant::now();
        let mut app = AppState::default();
        app.set_cursor(2);
        app.open_highlighted(now);
        assert_eq!(app.example.map(|e| e.kind()), Some(AnimationKind::Size));
        assert_eq!(app.nav.title(), "Example: Size");
        app.back();
        assert!(app.example.is_none());
        assert_eq!(app.nav.screen(), &Screen::List);
        assert_eq!(app.cursor(), 2);
    }

    #[test]
    /// What: Selecting by name moves the highlight; unknown names build no example.
    ///
    /// Inputs:
    /// - `select("Elevation")`, then `select("Nope")`.
    ///
    /// Output:
    /// - Cursor on the elevation row; no example and no animation for the unknown name.
    fn select_by_name() {
        let now = Instant::now();
        let mut app = AppState::default();
        app.select("Elevation", now);
        assert_eq!(app.cursor(), AnimationKind::Elevation.index());
        app.select("Nope", now);
        assert!(app.example.is_none());
        assert!(!app.is_animating(now));
        app.toggle_example(now);
        assert_eq!(app.nav.title(), "Example: Nope");
    }
}
