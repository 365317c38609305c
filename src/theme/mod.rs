//! Palette, key bindings and the `settings.conf` loader.

/// Configuration parsing utilities.
mod parsing;
/// Path resolution for config and log directories.
mod paths;
/// Settings file loading.
mod settings;
/// Palette, settings and key binding types.
mod types;

pub use paths::{config_dir, logs_dir};
pub use settings::{SKELETON_SETTINGS_CONTENT, load_settings, parse_settings};
pub use types::{KeyChord, KeyMap, Settings, Theme};

#[cfg(test)]
static TEST_MUTEX: std::sync::OnceLock<std::sync::Mutex<()>> = std::sync::OnceLock::new();

#[cfg(test)]
/// What: Provide a process-wide mutex to serialize environment-mutating tests in this module.
///
/// Inputs:
/// - None
///
/// Output:
/// - Shared reference to a lazily-initialized `Mutex<()>`.
pub(crate) fn test_mutex() -> &'static std::sync::Mutex<()> {
    TEST_MUTEX.get_or_init(|| std::sync::Mutex::new(()))
}
