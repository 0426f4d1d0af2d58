//! Launch the CSV report in the platform default viewer.

use std::process::{Command, Stdio};

/// Best-effort open; the caller downgrades failures to a warning because a
/// missing desktop opener must not fail an otherwise successful run.
pub fn open_default_viewer(path: &str) -> Result<(), String> {
    let mut command = platform_command(path);

    command
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .map(|_| ())
        .map_err(|error| error.to_string())
}

#[cfg(target_os = "macos")]
fn platform_command(path: &str) -> Command {
    let mut command = Command::new("open");
    command.arg(path);
    command
}

#[cfg(target_os = "windows")]
fn platform_command(path: &str) -> Command {
    let mut command = Command::new("cmd");
    command.args(["/C", "start", "", path]);
    command
}

#[cfg(not(any(target_os = "macos", target_os = "windows")))]
fn platform_command(path: &str) -> Command {
    let mut command = Command::new("xdg-open");
    command.arg(path);
    command
}
