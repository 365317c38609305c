use std::env;
use std::path::{Path, PathBuf};

/// Directory name used under the config base.
const APP_DIR: &str = "motion-demo";

/// Resolve an XDG base directory from environment or default to `$HOME` + segments.
///
/// Inputs:
/// - `var`: Environment variable to check (e.g., `XDG_CONFIG_HOME`).
/// - `home_default`: Fallback path segments relative to `$HOME` if `var` is unset/empty.
///
/// Output: Resolved base directory path.
fn xdg_base_dir(var: &str, home_default: &[&str]) -> PathBuf {
    if let Ok(p) = env::var(var)
        && !p.trim().is_empty()
    {
        return PathBuf::from(p);
    }
    let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
    let mut base = PathBuf::from(home);
    for seg in home_default {
        base = base.join(seg);
    }
    base
}

/// Candidate locations for `settings.conf`, highest priority first.
fn settings_candidates() -> Vec<PathBuf> {
    let mut candidates = Vec::new();
    if let Ok(h) = env::var("HOME") {
        candidates.push(
            Path::new(&h)
                .join(".config")
                .join(APP_DIR)
                .join("settings.conf"),
        );
    }
    if let Ok(x) = env::var("XDG_CONFIG_HOME")
        && !x.trim().is_empty()
    {
        candidates.push(Path::new(&x).join(APP_DIR).join("settings.conf"));
    }
    candidates
}

/// Return the first existing `settings.conf`, if any.
pub(crate) fn resolve_settings_config_path() -> Option<PathBuf> {
    settings_candidates().into_iter().find(|p| p.is_file())
}

/// Where a fresh settings skeleton is written when none exists.
pub(crate) fn default_settings_path() -> PathBuf {
    xdg_base_dir("XDG_CONFIG_HOME", &[".config"])
        .join(APP_DIR)
        .join("settings.conf")
}

/// Config directory (`$XDG_CONFIG_HOME/motion-demo` or `$HOME/.config/motion-demo`), ensured to exist.
#[must_use]
pub fn config_dir() -> PathBuf {
    let dir = xdg_base_dir("XDG_CONFIG_HOME", &[".config"]).join(APP_DIR);
    let _ = std::fs::create_dir_all(&dir);
    dir
}

/// Logs directory under the config directory, ensured to exist.
#[must_use]
pub fn logs_dir() -> PathBuf {
    let dir = config_dir().join("logs");
    let _ = std::fs::create_dir_all(&dir);
    dir
}
