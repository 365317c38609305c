//! Smoke tests for the `motion-demo` binary.
//!
//! The binary runs with an isolated config directory and, for the interactive path,
//! in headless mode so no terminal is required.

use std::process::Command;

/// What: Build a command for the binary with config and logs redirected to `dir`.
///
/// Inputs:
/// - `dir`: Temporary directory used as `XDG_CONFIG_HOME` and `HOME`.
///
/// Output:
/// - A ready-to-configure [`Command`].
fn cmd(dir: &std::path::Path) -> Command {
    let mut c = Command::new(env!("CARGO_BIN_EXE_motion-demo"));
    c.env("XDG_CONFIG_HOME", dir)
        .env("HOME", dir)
        .env("MOTION_DEMO_TEST_HEADLESS", "1")
        .env_remove("RUST_LOG");
    c
}

#[test]
/// What: `--list` prints the catalog in display order.
///
/// Inputs:
/// - `motion-demo --list`.
///
/// Output:
/// - Eight lines, first `Appear and Disappear`, last `Smooth Animate Text`.
fn list_prints_catalog() {
    let dir = tempfile::tempdir().expect("tempdir");
    let out = cmd(dir.path()).arg("--list").output().expect("run binary");
    assert!(out.status.success());
    let stdout = String::from_utf8_lossy(&out.stdout);
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 8);
    assert_eq!(lines[0], "Appear and Disappear");
    assert_eq!(lines[7], "Smooth Animate Text");
}

#[test]
/// What: A headless run reports the title of the startup screen.
///
/// Inputs:
/// - No flags, `--open Size` and `--open Bounce`.
///
/// Output:
/// - `Motion Demo`, `Example: Size` and `Example: Bounce`; a settings skeleton is written.
fn headless_titles() {
    let dir = tempfile::tempdir().expect("tempdir");
    for (extra, want) in [
        (vec![], "Motion Demo"),
        (vec!["--open", "Size"], "Example: Size"),
        (vec!["--open", "Bounce"], "Example: Bounce"),
    ] {
        let out = cmd(dir.path()).args(&extra).output().expect("run binary");
        assert!(out.status.success(), "{extra:?}");
        assert_eq!(String::from_utf8_lossy(&out.stdout).trim(), want);
    }
    assert!(dir.path().join("motion-demo").join("settings.conf").is_file());
}
