use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::motion::Easing;

use super::parsing::{parse_bool, parse_color_value, parse_key_list, strip_inline_comment};
use super::paths::{default_settings_path, resolve_settings_config_path};
use super::types::Settings;

/// Commented settings file written on first run.
pub const SKELETON_SETTINGS_CONTENT: &str = "\
# motion-demo settings
# Format: key = value. Lines starting with # or // are comments.

# Redraw interval in milliseconds while an animation runs (10-1000)
tick_ms = 33
# Duration of one example transition in milliseconds (50-10000)
animation_ms = 600
# linear | ease_in | ease_out | ease_in_out | ease_out_back
easing = ease_in_out
# Capture mouse clicks on list rows and the back affordance
mouse = true

# Key bindings: comma-separated chords such as Enter, Ctrl+C, F5
keybind_select = Enter, Right
keybind_back = Esc, Backspace, Left
keybind_toggle = Space
keybind_up = Up, k
keybind_down = Down, j
keybind_top = Home, g
keybind_bottom = End
keybind_exit = q, Ctrl+C

# Palette as #RRGGBB or R,G,B
color_base = #1e1e2e
color_surface = #313244
color_text = #cdd6f4
color_subtext = #a6adc8
color_accent = #89b4fa
color_primary = #cba6f7
color_secondary = #a6e3a1
color_shadow = #11111b
";

/// Parse a millisecond value and clamp it into `min..=max`.
fn parse_millis(val: &str, min: u64, max: u64) -> Option<Duration> {
    val.parse::<u64>()
        .ok()
        .map(|ms| Duration::from_millis(ms.clamp(min, max)))
}

/// Store `value` into `slot` when present; report whether it was.
fn assign<T>(slot: &mut T, value: Option<T>) -> bool {
    let Some(v) = value else {
        return false;
    };
    *slot = v;
    true
}

/// What: Parse settings text into [`Settings`].
///
/// Inputs:
/// - `content`: Full text of a `settings.conf`.
///
/// Output:
/// - Parsed settings (defaults for anything missing) and one diagnostic per rejected line.
///
/// Details:
/// - Keys are case-insensitive; `.`, `-` and spaces in keys are treated as `_`.
/// - Invalid values keep the default and produce a diagnostic; unknown keys are ignored.
#[must_use]
pub fn parse_settings(content: &str) -> (Settings, Vec<String>) {
    let mut out = Settings::default();
    let mut diagnostics = Vec::new();
    for (idx, line) in content.lines().enumerate() {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') || trimmed.starts_with("//") {
            continue;
        }
        let Some((raw_key, raw_val)) = trimmed.split_once('=') else {
            continue;
        };
        let key = raw_key.trim().to_lowercase().replace(['.', '-', ' '], "_");
        let val = strip_inline_comment(raw_val);
        let ok = match key.as_str() {
            "tick_ms" => assign(&mut out.tick, parse_millis(val, 10, 1000)),
            "animation_ms" => assign(&mut out.animation, parse_millis(val, 50, 10_000)),
            "easing" => assign(&mut out.easing, Easing::from_config_key(val)),
            "mouse" => assign(&mut out.mouse, parse_bool(val)),
            k if k.starts_with("keybind_") => {
                let slot = match &k["keybind_".len()..] {
                    "select" => Some(&mut out.keymap.select),
                    "back" => Some(&mut out.keymap.back),
                    "toggle" => Some(&mut out.keymap.toggle),
                    "up" => Some(&mut out.keymap.up),
                    "down" => Some(&mut out.keymap.down),
                    "top" => Some(&mut out.keymap.top),
                    "bottom" => Some(&mut out.keymap.bottom),
                    "exit" | "quit" => Some(&mut out.keymap.exit),
                    _ => None,
                };
                match slot {
                    Some(slot) => assign(slot, parse_key_list(val)),
                    None => true,
                }
            }
            k if k.starts_with("color_") => {
                let th = &mut out.theme;
                let slot = match &k["color_".len()..] {
                    "base" => Some(&mut th.base),
                    "surface" => Some(&mut th.surface),
                    "text" => Some(&mut th.text),
                    "subtext" => Some(&mut th.subtext),
                    "accent" => Some(&mut th.accent),
                    "primary" => Some(&mut th.primary),
                    "secondary" => Some(&mut th.secondary),
                    "shadow" => Some(&mut th.shadow),
                    _ => None,
                };
                match slot {
                    Some(slot) => assign(slot, parse_color_value(val)),
                    None => true,
                }
            }
            _ => true,
        };
        if !ok {
            diagnostics.push(format!("line {}: invalid value for '{key}': {val}", idx + 1));
        }
    }
    (out, diagnostics)
}

/// What: Load settings from disk.
///
/// Inputs:
/// - `explicit`: Path passed on the command line, taking precedence over the search.
///
/// Output:
/// - Loaded settings and the path they came from; defaults when nothing could be read.
///
/// Details:
/// - Without an explicit path, `$HOME/.config/motion-demo/settings.conf` then
///   `$XDG_CONFIG_HOME/motion-demo/settings.conf` are tried; if neither exists a
///   skeleton is written to the XDG location.
/// - Read failures and invalid lines are logged, never fatal.
pub fn load_settings(explicit: Option<&Path>) -> (Settings, Option<PathBuf>) {
    let path = match explicit {
        Some(p) => p.to_path_buf(),
        None => resolve_settings_config_path().unwrap_or_else(|| {
            let target = default_settings_path();
            if let Some(dir) = target.parent() {
                let _ = fs::create_dir_all(dir);
            }
            match fs::write(&target, SKELETON_SETTINGS_CONTENT) {
                Ok(()) => tracing::info!(path = %target.display(), "wrote default settings"),
                Err(e) => {
                    tracing::warn!(path = %target.display(), error = %e, "could not write default settings");
                }
            }
            target
        }),
    };
    let content = match fs::read_to_string(&path) {
        Ok(c) => c,
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "settings unreadable; using defaults");
            return (Settings::default(), None);
        }
    };
    let (settings, diagnostics) = parse_settings(&content);
    for d in &diagnostics {
        tracing::warn!(path = %path.display(), "{d}");
    }
    tracing::info!(path = %path.display(), "loaded settings");
    (settings, Some(path))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyModifiers};
    use ratatui::style::Color;

    #[test]
    /// What: The shipped skeleton parses cleanly into the defaults.
    ///
    /// Inputs:
    /// - [`SKELETON_SETTINGS_CONTENT`].
    ///
    /// Output:
    /// - No diagnostics and settings equal to `Settings::default()`.
    fn skeleton_matches_defaults() {
        let (s, diags) = parse_settings(SKELETON_SETTINGS_CONTENT);
        assert!(diags.is_empty(), "{diags:?}");
        assert_eq!(s, Settings::default());
    }

    #[test]
    /// What: Values are normalized, clamped and applied.
    ///
    /// Inputs:
    /// - Mixed-case keys, an out-of-range tick, comments, a key list and a color.
    ///
    /// Output:
    /// - Settings reflect every valid line.
    fn parses_and_clamps() {
        let text = "\
Tick.MS = 1 // too fast
animation-ms = 250
easing = linear # comment
mouse = off
keybind_back = Ctrl+B
color_accent = 10,20,30
unknown_key = whatever
";
        let (s, diags) = parse_settings(text);
        assert!(diags.is_empty(), "{diags:?}");
        assert_eq!(s.tick, Duration::from_millis(10));
        assert_eq!(s.animation, Duration::from_millis(250));
        assert_eq!(s.easing, Easing::Linear);
        assert!(!s.mouse);
        assert_eq!(s.keymap.back.len(), 1);
        assert_eq!(s.keymap.back[0].code, KeyCode::Char('b'));
        assert_eq!(s.keymap.back[0].mods, KeyModifiers::CONTROL);
        assert_eq!(s.theme.accent, Color::Rgb(10, 20, 30));
    }

    #[test]
    /// What: Invalid values keep defaults and are reported.
    ///
    /// Inputs:
    /// - Bad numbers, easing, boolean, key list and color.
    ///
    /// Output:
    /// - Defaults retained; five diagnostics with line numbers.
    fn invalid_values_are_reported() {
        let text = "tick_ms = fast\neasing = wobble\nmouse = maybe\nkeybind_exit = Nope\ncolor_text = red\n";
        let (s, diags) = parse_settings(text);
        assert_eq!(s, Settings::default());
        assert_eq!(diags.len(), 5);
        assert!(diags[0].starts_with("line 1:"));
        assert!(diags[4].contains("color_text"));
    }

    #[test]
    /// What: Loading from an explicit path reads that file.
    ///
    /// Inputs:
    /// - A temporary settings file with a custom duration.
    ///
    /// Output:
    /// - The duration is applied and the path is reported back.
    fn load_from_explicit_path() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("custom.conf");
        fs::write(&path, "animation_ms = 900\n").expect("write");
        let (s, used) = load_settings(Some(&path));
        assert_eq!(s.animation, Duration::from_millis(900));
        assert_eq!(used.as_deref(), Some(path.as_path()));
    }

    #[test]
    /// What: A missing explicit path falls back to defaults.
    ///
    /// Inputs:
    /// - A path inside an empty temp directory.
    ///
    /// Output:
    /// - Default settings and no path.
    fn load_missing_explicit_path() {
        let dir = tempfile::tempdir().expect("tempdir");
        let (s, used) = load_settings(Some(&dir.path().join("absent.conf")));
        assert_eq!(s, Settings::default());
        assert!(used.is_none());
    }
}
