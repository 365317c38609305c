//! Screen and view types for the navigation shell.

use crate::catalog::AnimationKind;

/// Which catalog entry a detail screen was opened for.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Selection {
    /// Identifier matched a catalog entry exactly.
    Known(AnimationKind),
    /// Identifier did not match; rendered as a fallback message.
    Unknown(String),
}

impl Selection {
    /// Classify an identifier against the catalog.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        AnimationKind::from_name(name).map_or_else(|| Self::Unknown(name.to_string()), Self::Known)
    }

    /// Identifier as it was selected.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Known(kind) => kind.name(),
            Self::Unknown(name) => name,
        }
    }
}

/// Current screen of the navigation shell.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Screen {
    /// Catalog list.
    #[default]
    List,
    /// Detail view of one selection.
    Detail(Selection),
}

/// What the body region shows for a given [`Screen`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum View<'a> {
    /// The catalog list.
    List,
    /// A detail screen.
    Detail(DetailView<'a>),
}

/// Body of a detail screen after dispatch.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DetailView<'a> {
    /// The example associated with a catalog entry.
    Example(AnimationKind),
    /// Message shown for an identifier outside the catalog.
    Fallback(&'a str),
}

impl DetailView<'_> {
    /// Fallback message text, `None` for real examples.
    #[must_use]
    pub fn fallback_message(&self) -> Option<String> {
        match self {
            Self::Example(_) => None,
            Self::Fallback(name) => Some(format!("Unknown animation type: {name}")),
        }
    }
}
