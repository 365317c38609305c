//! Navigation between the catalog list and a detail screen.

use super::types::{DetailView, Screen, Selection, View};

/// Title shown while the catalog list is displayed.
pub const LIST_TITLE: &str = "Motion Demo";

/// Holds the optional selection and derives what should be rendered from it.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Navigator {
    /// Current screen.
    screen: Screen,
}

impl Navigator {
    /// Start on the catalog list with nothing selected.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// What: Open the detail screen for `name`.
    ///
    /// Inputs:
    /// - `name`: Selection identifier, normally a catalog display name.
    ///
    /// Output:
    /// - None (side effect: the detail screen is shown on the next frame).
    ///
    /// Details:
    /// - No validation: identifiers outside the catalog are kept and later
    ///   dispatched to the fallback view.
    pub fn select(&mut self, name: &str) {
        let selection = Selection::from_name(name);
        match &selection {
            Selection::Known(kind) => tracing::debug!(example = %kind, "select"),
            Selection::Unknown(name) => tracing::warn!(name = %name, "select unknown example"),
        }
        self.screen = Screen::Detail(selection);
    }

    /// Return to the catalog list, clearing any selection.
    pub fn back(&mut self) {
        if matches!(self.screen, Screen::Detail(_)) {
            tracing::debug!("back to list");
        }
        self.screen = Screen::List;
    }

    /// Current screen.
    #[must_use]
    pub const fn screen(&self) -> &Screen {
        &self.screen
    }

    /// Current selection, if a detail screen is open.
    #[must_use]
    pub const fn selection(&self) -> Option<&Selection> {
        match &self.screen {
            Screen::List => None,
            Screen::Detail(s) => Some(s),
        }
    }

    /// What: Derive the body view from the current state.
    ///
    /// Inputs:
    /// - None (reads the held selection).
    ///
    /// Output:
    /// - [`View::List`] with no selection; otherwise [`View::Detail`] carrying the example
    ///   for a catalog entry or the fallback for anything else.
    #[must_use]
    pub fn render(&self) -> View<'_> {
        match &self.screen {
            Screen::List => View::List,
            Screen::Detail(Selection::Known(kind)) => View::Detail(DetailView::Example(*kind)),
            Screen::Detail(Selection::Unknown(name)) => View::Detail(DetailView::Fallback(name)),
        }
    }

    /// Title bar text: [`LIST_TITLE`] or `Example: <name>`.
    #[must_use]
    pub fn title(&self) -> String {
        self.selection().map_or_else(
            || LIST_TITLE.to_string(),
            |s| format!("Example: {}", s.name()),
        )
    }

    /// Whether the back affordance is shown.
    #[must_use]
    pub const fn can_go_back(&self) -> bool {
        matches!(self.screen, Screen::Detail(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{AnimationKind, CATALOG};

    #[test]
    /// What: Initial state renders the list with the bare title.
    ///
    /// Inputs:
    /// - A fresh navigator.
    ///
    /// Output:
    /// - `View::List`, title `Motion Demo`, no back affordance.
    fn starts_on_list() {
        let nav = Navigator::new();
        assert_eq!(nav.render(), View::List);
        assert_eq!(nav.title(), "Motion Demo");
        assert!(!nav.can_go_back());
        assert!(nav.selection().is_none());
    }

    #[test]
    /// What: Every catalog entry dispatches to its own example and back restores the list.
    ///
    /// Inputs:
    /// - `select(e)` then `back()` for each entry.
    ///
    /// Output:
    /// - `DetailView::Example(e)` with title `Example: <e>`, then the list and bare title.
    fn select_each_entry_then_back() {
        let mut nav = Navigator::new();
        for kind in CATALOG {
            nav.select(kind.name());
            assert_eq!(nav.render(), View::Detail(DetailView::Example(kind)));
            assert_eq!(nav.title(), format!("Example: {}", kind.name()));
            assert!(nav.can_go_back());
            nav.back();
            assert_eq!(nav.render(), View::List);
            assert_eq!(nav.title(), LIST_TITLE);
        }
    }

    #[test]
    /// What: Unknown identifiers fall back to a message naming them.
    ///
    /// Inputs:
    /// - `select("Bounce")` and a lowercase catalog name.
    ///
    /// Output:
    /// - Fallback views whose message contains the identifier; titles echo it verbatim.
    fn unknown_identifier_falls_back() {
        let mut nav = Navigator::new();
        nav.select("Bounce");
        let View::Detail(detail) = nav.render() else {
            panic!("expected detail view");
        };
        assert_eq!(detail, DetailView::Fallback("Bounce"));
        assert_eq!(
            detail.fallback_message().as_deref(),
            Some("Unknown animation type: Bounce")
        );
        assert_eq!(nav.title(), "Example: Bounce");

        nav.select("size");
        assert_eq!(nav.render(), View::Detail(DetailView::Fallback("size")));
    }

    #[test]
    /// What: Selecting `Size` shows its title and example.
    ///
    /// Inputs:
    /// - `select("Size")`.
    ///
    /// Output:
    /// - Title `Example: Size` and the size example.
    fn size_selection() {
        let mut nav = Navigator::new();
        nav.select("Size");
        assert_eq!(nav.selection(), Some(&Selection::Known(AnimationKind::Size)));
        assert_eq!(nav.title(), "Example: Size");
        assert_eq!(nav.render(), View::Detail(DetailView::Example(AnimationKind::Size)));
    }

    #[test]
    /// What: Selecting again while on a detail screen replaces the selection; back is idempotent.
    ///
    /// Inputs:
    /// - Two consecutive selections, then `back()` twice.
    ///
    /// Output:
    /// - The second selection wins; the list is shown after both backs.
    fn reselect_and_repeated_back() {
        let mut nav = Navigator::new();
        nav.select("Size");
        nav.select("Padding");
        assert_eq!(nav.title(), "Example: Padding");
        nav.back();
        nav.back();
        assert_eq!(nav.screen(), &Screen::List);
    }
}
