//! Fixed catalog of motion examples shown on the list screen.

use std::fmt;

/// One entry of the motion catalog.
///
/// The declaration order is the display order of the list screen.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AnimationKind {
    /// Panel that fades in and expands when shown, and reverses when hidden.
    AppearDisappear,
    /// Panel whose background interpolates between two colors.
    ChangeColour,
    /// Box growing from a compact to an expanded size.
    Size,
    /// Box sliding horizontally by an offset.
    Position,
    /// Framed box whose inner padding grows and shrinks.
    Padding,
    /// Card whose drop shadow deepens.
    Elevation,
    /// Text whose color oscillates continuously.
    AnimateTextColour,
    /// Text whose scale oscillates continuously.
    SmoothAnimateText,
}

/// All catalog entries in display order.
pub const CATALOG: [AnimationKind; 8] = [
    AnimationKind::AppearDisappear,
    AnimationKind::ChangeColour,
    AnimationKind::Size,
    AnimationKind::Position,
    AnimationKind::Padding,
    AnimationKind::Elevation,
    AnimationKind::AnimateTextColour,
    AnimationKind::SmoothAnimateText,
];

impl AnimationKind {
    /// Display name, also used as the selection identifier.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::AppearDisappear => "Appear and Disappear",
            Self::ChangeColour => "Change Colour",
            Self::Size => "Size",
            Self::Position => "Position",
            Self::Padding => "Padding",
            Self::Elevation => "Elevation",
            Self::AnimateTextColour => "Animate Text Colour",
            Self::SmoothAnimateText => "Smooth Animate Text",
        }
    }

    /// What: Resolve a selection identifier to a catalog entry.
    ///
    /// Inputs:
    /// - `name`: Identifier as received from a selection.
    ///
    /// Output:
    /// - `Some(kind)` when `name` equals an entry's display name; `None` otherwise.
    ///
    /// Details:
    /// - Exact byte comparison: no trimming, no case folding, no prefix matching.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        CATALOG.into_iter().find(|k| k.name() == name)
    }

    /// Position of this entry in [`CATALOG`].
    #[must_use]
    pub fn index(self) -> usize {
        CATALOG.iter().position(|k| *k == self).unwrap_or(0)
    }

    /// Whether the example loops on its own instead of flipping between two states.
    #[must_use]
    pub const fn is_infinite(self) -> bool {
        matches!(self, Self::AnimateTextColour | Self::SmoothAnimateText)
    }

    /// Short hint printed under the example describing what the toggle input does.
    #[must_use]
    pub const fn hint(self) -> &'static str {
        match self {
            Self::AppearDisappear => "Space: show / hide the panel",
            Self::ChangeColour => "Space: swap the background colour",
            Self::Size => "Space: expand / collapse the box",
            Self::Position => "Space: move the box",
            Self::Padding => "Space: grow / shrink the padding",
            Self::Elevation => "Space: raise / lower the card",
            Self::AnimateTextColour | Self::SmoothAnimateText => "Space: pause / resume",
        }
    }
}

impl fmt::Display for AnimationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    /// What: Ensure the catalog lists the eight examples in their display order.
    ///
    /// Inputs:
    /// - The static [`CATALOG`].
    ///
    /// Output:
    /// - Names match the expected ordered list.
    fn catalog_order_is_stable() {
        let names: Vec<&str> = CATALOG.iter().map(|k| k.name()).collect();
        assert_eq!(
            names,
            vec![
                "Appear and Disappear",
                "Change Colour",
                "Size",
                "Position",
                "Padding",
                "Elevation",
                "Animate Text Colour",
                "Smooth Animate Text",
            ]
        );
    }

    #[test]
    /// What: Confirm name lookup round-trips every entry and its index.
    ///
    /// Inputs:
    /// - Each catalog entry's display name.
    ///
    /// Output:
    /// - `from_name` returns the same entry and `index` its catalog position.
    fn from_name_resolves_every_entry() {
        for (i, kind) in CATALOG.iter().enumerate() {
            assert_eq!(AnimationKind::from_name(kind.name()), Some(*kind));
            assert_eq!(kind.index(), i);
        }
    }

    #[test]
    /// What: Verify lookup is exact.
    ///
    /// Inputs:
    /// - Case variants, padded names, prefixes and an unrelated string.
    ///
    /// Output:
    /// - All resolve to `None`.
    ///
    /// Details:
    /// - The alpha variant of the appear example is not part of the catalog.
    fn from_name_is_exact() {
        for probe in [
            "size",
            "SIZE",
            " Size",
            "Size ",
            "Siz",
            "Appear",
            "Appear and Disappear (Alpha)",
            "",
            "Bounce",
        ] {
            assert_eq!(AnimationKind::from_name(probe), None, "probe {probe:?}");
        }
    }
}
