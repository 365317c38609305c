use crossterm::event::{KeyCode, KeyModifiers};
use ratatui::style::Color;

use super::types::KeyChord;

/// What: Parse a single key token (e.g. `F5`, `Esc`, `Space`, `j`) into a [`KeyCode`].
///
/// Inputs:
/// - `s`: Raw key token from the settings file.
///
/// Output:
/// - `Some(KeyCode)` on success; `None` when the token is unsupported.
///
/// Details:
/// - Character keys are normalized to lowercase.
pub(crate) fn parse_key_identifier(s: &str) -> Option<KeyCode> {
    let t = s.trim();
    if let Some(num) = t
        .strip_prefix(['F', 'f'])
        .and_then(|x| x.parse::<u8>().ok())
    {
        return Some(KeyCode::F(num));
    }
    match t.to_ascii_uppercase().as_str() {
        "ESC" | "ESCAPE" => Some(KeyCode::Esc),
        "ENTER" | "RETURN" => Some(KeyCode::Enter),
        "TAB" => Some(KeyCode::Tab),
        "BACKTAB" => Some(KeyCode::BackTab),
        "BACKSPACE" => Some(KeyCode::Backspace),
        "HOME" => Some(KeyCode::Home),
        "END" => Some(KeyCode::End),
        "UP" | "ARROWUP" => Some(KeyCode::Up),
        "DOWN" | "ARROWDOWN" => Some(KeyCode::Down),
        "LEFT" | "ARROWLEFT" => Some(KeyCode::Left),
        "RIGHT" | "ARROWRIGHT" => Some(KeyCode::Right),
        "SPACE" => Some(KeyCode::Char(' ')),
        _ => {
            let mut chars = t.chars();
            if let (Some(ch), None) = (chars.next(), chars.next()) {
                Some(KeyCode::Char(ch.to_ascii_lowercase()))
            } else {
                None
            }
        }
    }
}

/// What: Parse a chord such as `Ctrl+C` or `Alt+Enter` into a [`KeyChord`].
///
/// Inputs:
/// - `spec`: Modifiers and a key token joined by `+`.
///
/// Output:
/// - `Some(KeyChord)` when parsing succeeds; `None` for an empty or unknown key.
///
/// Details:
/// - `Shift+Tab` becomes `BackTab` with no modifiers, which is how terminals report it.
pub(crate) fn parse_key_chord(spec: &str) -> Option<KeyChord> {
    let mut mods = KeyModifiers::empty();
    let mut key_part: Option<&str> = None;
    for part in spec.split('+') {
        let p = part.trim();
        if p.is_empty() {
            continue;
        }
        match p.to_ascii_uppercase().as_str() {
            "CTRL" | "CONTROL" => mods |= KeyModifiers::CONTROL,
            "ALT" => mods |= KeyModifiers::ALT,
            "SHIFT" => mods |= KeyModifiers::SHIFT,
            _ => key_part = Some(p),
        }
    }
    let mut code = parse_key_identifier(key_part?)?;
    if code == KeyCode::BackTab || (code == KeyCode::Tab && mods.contains(KeyModifiers::SHIFT)) {
        mods.remove(KeyModifiers::SHIFT);
        code = KeyCode::BackTab;
    }
    Some(KeyChord { code, mods })
}

/// What: Parse a comma-separated chord list such as `Esc, Backspace`.
///
/// Inputs:
/// - `s`: List from a `keybind_*` setting.
///
/// Output:
/// - `Some(chords)` when every entry parses and the list is non-empty; `None` otherwise.
pub(crate) fn parse_key_list(s: &str) -> Option<Vec<KeyChord>> {
    let chords = s
        .split(',')
        .filter(|p| !p.trim().is_empty())
        .map(parse_key_chord)
        .collect::<Option<Vec<_>>>()?;
    if chords.is_empty() { None } else { Some(chords) }
}

/// What: Parse a color literal into a [`Color`].
///
/// Inputs:
/// - `s`: `#RRGGBB`, `RRGGBB` or `R,G,B` (0-255 per channel).
///
/// Output:
/// - `Some(Color::Rgb)` for recognized formats; `None` otherwise.
pub(crate) fn parse_color_value(s: &str) -> Option<Color> {
    let t = s.trim();
    if t.is_empty() {
        return None;
    }
    let h = t.strip_prefix('#').unwrap_or(t);
    if h.len() == 6 && h.chars().all(|c| c.is_ascii_hexdigit()) {
        let r = u8::from_str_radix(&h[0..2], 16).ok()?;
        let g = u8::from_str_radix(&h[2..4], 16).ok()?;
        let b = u8::from_str_radix(&h[4..6], 16).ok()?;
        return Some(Color::Rgb(r, g, b));
    }
    let parts: Vec<&str> = t.split(',').map(str::trim).collect();
    if let [r, g, b] = parts.as_slice() {
        return Some(Color::Rgb(r.parse().ok()?, g.parse().ok()?, b.parse().ok()?));
    }
    None
}

/// Parse a boolean setting (`true/false`, `yes/no`, `on/off`, `1/0`).
pub(crate) fn parse_bool(s: &str) -> Option<bool> {
    match s.trim().to_ascii_lowercase().as_str() {
        "true" | "yes" | "on" | "1" => Some(true),
        "false" | "no" | "off" | "0" => Some(false),
        _ => None,
    }
}

/// What: Strip a trailing `// ...` or `# ...` comment from a settings value.
///
/// Inputs:
/// - `s`: Raw value text after `=`.
///
/// Output:
/// - Trimmed value without the comment.
///
/// Details:
/// - A leading `#` is kept so hex colors such as `#ff0000` survive.
pub(crate) fn strip_inline_comment(mut s: &str) -> &str {
    if let Some(i) = s.find("//") {
        s = &s[..i];
    }
    let s = s.trim();
    let cut = s
        .strip_prefix('#')
        .map_or_else(|| s.find('#'), |rest| rest.find('#').map(|j| j + 1));
    cut.map_or(s, |i| &s[..i]).trim()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::KeyMap;

    #[test]
    /// What: Key identifiers and chords map onto crossterm codes and modifiers.
    ///
    /// Inputs:
    /// - `F5`, `Space`, `J`, `Ctrl+C`, `alt + enter`, plus invalid tokens.
    ///
    /// Output:
    /// - Matching codes and modifiers; `None` for invalid input.
    fn keys_and_chords() {
        assert_eq!(parse_key_identifier("F5"), Some(KeyCode::F(5)));
        assert_eq!(parse_key_identifier("Space"), Some(KeyCode::Char(' ')));
        assert_eq!(parse_key_identifier("J"), Some(KeyCode::Char('j')));
        assert_eq!(parse_key_identifier("Enterr"), None);
        let c = parse_key_chord("Ctrl+C").expect("chord");
        assert_eq!(c.code, KeyCode::Char('c'));
        assert_eq!(c.mods, KeyModifiers::CONTROL);
        let c = parse_key_chord("alt + enter").expect("chord");
        assert_eq!(c.code, KeyCode::Enter);
        assert_eq!(c.mods, KeyModifiers::ALT);
        assert!(parse_key_chord("Ctrl+").is_none());
    }

    #[test]
    /// What: `Shift+Tab` and `BackTab` both bind the key terminals send as `BackTab`.
    ///
    /// Inputs:
    /// - `Shift+Tab`, `shift + tab`, `BackTab`, `Ctrl+Shift+Tab`, and a `keybind_toggle` line.
    ///
    /// Output:
    /// - `BackTab` with SHIFT dropped; the loaded binding matches `BackTab` with or without SHIFT.
    fn shift_tab_is_backtab() {
        for raw in ["Shift+Tab", "shift + tab", "BackTab", "Shift+BackTab"] {
            let c = parse_key_chord(raw).expect("chord");
            assert_eq!(c.code, KeyCode::BackTab, "{raw}");
            assert_eq!(c.mods, KeyModifiers::empty(), "{raw}");
        }
        let c = parse_key_chord("Ctrl+Shift+Tab").expect("chord");
        assert_eq!(c.code, KeyCode::BackTab);
        assert_eq!(c.mods, KeyModifiers::CONTROL);
        assert_eq!(parse_key_chord("Tab").map(|c| c.code), Some(KeyCode::Tab));

        let (settings, diags) = crate::theme::parse_settings("keybind_toggle = Shift+Tab\n");
        assert!(diags.is_empty(), "{diags:?}");
        let toggle = &settings.keymap.toggle;
        assert!(KeyMap::matches(toggle, KeyCode::BackTab, KeyModifiers::SHIFT));
        assert!(KeyMap::matches(toggle, KeyCode::BackTab, KeyModifiers::NONE));
        assert!(!KeyMap::matches(toggle, KeyCode::Tab, KeyModifiers::NONE));
        assert_eq!(toggle[0].label(), "BackTab");
    }

    #[test]
    /// What: Chord lists parse as a whole or not at all.
    ///
    /// Inputs:
    /// - A valid two-entry list, a list with a bad entry, and an empty list.
    ///
    /// Output:
    /// - Two chords; `None`; `None`.
    fn key_lists() {
        let list = parse_key_list("Esc, Backspace").expect("list");
        assert_eq!(list.len(), 2);
        assert_eq!(list[1].code, KeyCode::Backspace);
        assert!(parse_key_list("Esc, Nope").is_none());
        assert!(parse_key_list(" , ").is_none());
    }

    #[test]
    /// What: Color literals in hex and decimal form.
    ///
    /// Inputs:
    /// - `#ff8000`, `00ff00`, `1, 2, 3`, `256,0,0`, `#12`.
    ///
    /// Output:
    /// - RGB colors for the first three; `None` for out-of-range and short hex.
    fn colors() {
        assert_eq!(parse_color_value("#ff8000"), Some(Color::Rgb(255, 128, 0)));
        assert_eq!(parse_color_value("00ff00"), Some(Color::Rgb(0, 255, 0)));
        assert_eq!(parse_color_value("1, 2, 3"), Some(Color::Rgb(1, 2, 3)));
        assert_eq!(parse_color_value("256,0,0"), None);
        assert_eq!(parse_color_value("#12"), None);
    }

    #[test]
    /// What: Inline comments are removed while hex colors survive.
    ///
    /// Inputs:
    /// - Values with `//` and `#` comments and a bare hex color.
    ///
    /// Output:
    /// - Value text only.
    fn inline_comments() {
        assert_eq!(strip_inline_comment("600 // ms"), "600");
        assert_eq!(strip_inline_comment("true # enable"), "true");
        assert_eq!(strip_inline_comment("#ff0000 # red"), "#ff0000");
        assert_eq!(strip_inline_comment("#ff0000"), "#ff0000");
        assert_eq!(parse_bool("On"), Some(true));
        assert_eq!(parse_bool("maybe"), None);
    }
}
