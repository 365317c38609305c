use std::time::Duration;

use crossterm::event::{KeyCode, KeyModifiers};
use ratatui::style::Color;

use crate::motion::{AnimationSpec, Easing};

/// Color palette used by rendering code.
///
/// All colors are [`ratatui::style::Color`] values; the defaults are RGB so
/// the color examples can blend them smoothly.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Theme {
    /// Canvas background.
    pub base: Color,
    /// Panel and title bar background.
    pub surface: Color,
    /// Primary foreground text.
    pub text: Color,
    /// Low-emphasis text such as hints and headings.
    pub subtext: Color,
    /// Selection highlight and the back affordance.
    pub accent: Color,
    /// First color of the two-color examples.
    pub primary: Color,
    /// Second color of the two-color examples.
    pub secondary: Color,
    /// Drop shadow of the elevation example.
    pub shadow: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            base: Color::Rgb(0x1e, 0x1e, 0x2e),
            surface: Color::Rgb(0x31, 0x32, 0x44),
            text: Color::Rgb(0xcd, 0xd6, 0xf4),
            subtext: Color::Rgb(0xa6, 0xad, 0xc8),
            accent: Color::Rgb(0x89, 0xb4, 0xfa),
            primary: Color::Rgb(0xcb, 0xa6, 0xf7),
            secondary: Color::Rgb(0xa6, 0xe3, 0xa1),
            shadow: Color::Rgb(0x11, 0x11, 0x1b),
        }
    }
}

/// User-configurable settings parsed from `settings.conf`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Settings {
    /// Redraw interval while an animation is in flight.
    pub tick: Duration,
    /// Duration of a single example transition.
    pub animation: Duration,
    /// Curve shared by all example transitions.
    pub easing: Easing,
    /// Whether mouse capture is enabled.
    pub mouse: bool,
    /// Key bindings.
    pub keymap: KeyMap,
    /// Color palette.
    pub theme: Theme,
}

impl Settings {
    /// Timing applied to every example tween.
    #[must_use]
    pub const fn animation_spec(&self) -> AnimationSpec {
        AnimationSpec::new(self.animation, self.easing)
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            tick: Duration::from_millis(33),
            animation: Duration::from_millis(600),
            easing: Easing::EaseInOut,
            mouse: true,
            keymap: KeyMap::default(),
            theme: Theme::default(),
        }
    }
}

/// A single keyboard chord (modifiers + key).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct KeyChord {
    /// Key code.
    pub code: KeyCode,
    /// Required modifiers.
    pub mods: KeyModifiers,
}

impl KeyChord {
    /// Chord without modifiers.
    #[must_use]
    pub const fn plain(code: KeyCode) -> Self {
        Self {
            code,
            mods: KeyModifiers::NONE,
        }
    }

    /// Short display label such as `Ctrl+C`, `Enter` or `Space`.
    #[must_use]
    pub fn label(&self) -> String {
        let mut parts: Vec<&'static str> = Vec::new();
        if self.mods.contains(KeyModifiers::CONTROL) {
            parts.push("Ctrl");
        }
        if self.mods.contains(KeyModifiers::ALT) {
            parts.push("Alt");
        }
        if self.mods.contains(KeyModifiers::SHIFT) {
            parts.push("Shift");
        }
        let key = match self.code {
            KeyCode::Char(' ') => "Space".to_string(),
            KeyCode::Char(ch) => ch.to_string(),
            KeyCode::Enter => "Enter".to_string(),
            KeyCode::Esc => "Esc".to_string(),
            KeyCode::Backspace => "Backspace".to_string(),
            KeyCode::Tab => "Tab".to_string(),
            KeyCode::BackTab => "BackTab".to_string(),
            KeyCode::Home => "Home".to_string(),
            KeyCode::End => "End".to_string(),
            KeyCode::Up => "↑".to_string(),
            KeyCode::Down => "↓".to_string(),
            KeyCode::Left => "←".to_string(),
            KeyCode::Right => "→".to_string(),
            KeyCode::F(n) => format!("F{n}"),
            _ => "?".to_string(),
        };
        if parts.is_empty() {
            key
        } else {
            format!("{}+{}", parts.join("+"), key)
        }
    }
}

/// Application key bindings. Each action can have several chords.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct KeyMap {
    /// Open the highlighted example.
    pub select: Vec<KeyChord>,
    /// Leave the detail screen.
    pub back: Vec<KeyChord>,
    /// Flip the running example.
    pub toggle: Vec<KeyChord>,
    /// Move the list cursor up.
    pub up: Vec<KeyChord>,
    /// Move the list cursor down.
    pub down: Vec<KeyChord>,
    /// Jump to the first entry.
    pub top: Vec<KeyChord>,
    /// Jump to the last entry.
    pub bottom: Vec<KeyChord>,
    /// Quit the application.
    pub exit: Vec<KeyChord>,
}

impl KeyMap {
    /// Whether `code`+`mods` matches any chord in `list`.
    ///
    /// `BackTab` arrives with or without SHIFT depending on the terminal; SHIFT is ignored for it.
    #[must_use]
    pub fn matches(list: &[KeyChord], code: KeyCode, mut mods: KeyModifiers) -> bool {
        let code = match code {
            KeyCode::Char(c) => KeyCode::Char(c.to_ascii_lowercase()),
            KeyCode::BackTab => {
                mods.remove(KeyModifiers::SHIFT);
                KeyCode::BackTab
            }
            other => other,
        };
        list.iter().any(|c| c.code == code && c.mods == mods)
    }
}

impl Default for KeyMap {
    fn default() -> Self {
        use KeyCode::{Backspace, Char, Down, End, Enter, Esc, Home, Left, Right, Up};
        Self {
            select: vec![KeyChord::plain(Enter), KeyChord::plain(Right)],
            back: vec![
                KeyChord::plain(Esc),
                KeyChord::plain(Backspace),
                KeyChord::plain(Left),
            ],
            toggle: vec![KeyChord::plain(Char(' '))],
            up: vec![KeyChord::plain(Up), KeyChord::plain(Char('k'))],
            down: vec![KeyChord::plain(Down), KeyChord::plain(Char('j'))],
            top: vec![KeyChord::plain(Home), KeyChord::plain(Char('g'))],
            bottom: vec![KeyChord::plain(End)],
            exit: vec![
                KeyChord::plain(Char('q')),
                KeyChord {
                    code: Char('c'),
                    mods: KeyModifiers::CONTROL,
                },
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    /// What: Chord labels render modifiers and special keys.
    ///
    /// Inputs:
    /// - `Ctrl+c`, plain `Space`, plain `Esc`.
    ///
    /// Output:
    /// - `Ctrl+c`, `Space`, `Esc`.
    fn chord_labels() {
        let ctrl_c = KeyChord {
            code: KeyCode::Char('c'),
            mods: KeyModifiers::CONTROL,
        };
        assert_eq!(ctrl_c.label(), "Ctrl+c");
        assert_eq!(KeyChord::plain(KeyCode::Char(' ')).label(), "Space");
        assert_eq!(KeyChord::plain(KeyCode::Esc).label(), "Esc");
    }

    #[test]
    /// What: Matching ignores character case but not modifiers.
    ///
    /// Inputs:
    /// - Default exit chords probed with `Q`, `q`, `Ctrl+c` and `Alt+q`.
    ///
    /// Output:
    /// - First three match; `Alt+q` does not.
    fn keymap_matching() {
        let km = KeyMap::default();
        assert!(KeyMap::matches(&km.exit, KeyCode::Char('Q'), KeyModifiers::NONE));
        assert!(KeyMap::matches(&km.exit, KeyCode::Char('q'), KeyModifiers::NONE));
        assert!(KeyMap::matches(&km.exit, KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(!KeyMap::matches(&km.exit, KeyCode::Char('q'), KeyModifiers::ALT));
    }
}
