//! End-to-end tests for `gplayout preview` command.
#![allow(unused_variables)] // Temp dirs must be kept alive even if not directly accessed

mod fixtures;

use fixtures::*;
use gplayout::models::Layout;

#[test]
fn test_preview_ascii_dimensions() {
    let (path, temp) = create_temp_header(&board_header(&sample_layout()));

    let output = run(&["preview", "-l", path.to_str().unwrap(), "--ascii"]);

    assert_eq!(
        output.status.code(),
        Some(0),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    let stdout = String::from_utf8_lossy(&output.stdout);
    let lines: Vec<_> = stdout.lines().collect();
    assert_eq!(lines.len(), 64);
    assert!(lines.iter().all(|line| line.chars().count() == 128));
    assert!(stdout.contains('#'));
}

#[test]
fn test_preview_blocks_default() {
    let (path, temp) = create_temp_header(&board_header(&sample_layout()));

    let output = run(&["preview", "-l", path.to_str().unwrap()]);

    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&output.stdout);
    // Two pixel rows per line
    assert_eq!(stdout.lines().count(), 32);
    assert!(stdout.contains('▀') || stdout.contains('▄') || stdout.contains('█'));
}

#[test]
fn test_preview_empty_layout() {
    let (path, temp) = create_temp_header(&board_header(&Layout::default()));

    let output = run(&["preview", "-l", path.to_str().unwrap(), "--ascii"]);

    assert_eq!(output.status.code(), Some(0));
    assert!(!String::from_utf8_lossy(&output.stdout).contains('#'));
}

#[test]
fn test_preview_uses_configured_canvas() {
    let (path, temp) = create_temp_header(&board_header(&sample_layout()));
    let config_dir = tempfile::TempDir::new().unwrap();

    let output = isolated_command(
        &["config", "set", "--canvas-width", "32", "--canvas-height", "16"],
        config_dir.path(),
    )
    .output()
    .unwrap();
    assert_eq!(output.status.code(), Some(0));

    let output = isolated_command(
        &["preview", "-l", path.to_str().unwrap(), "--ascii"],
        config_dir.path(),
    )
    .output()
    .unwrap();

    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(stdout.lines().count(), 16);
    assert!(stdout.lines().all(|line| line.len() == 32));
}

#[test]
fn test_preview_warns_about_skipped_entries() {
    let (path, temp) = create_temp_header(&malformed_header());

    let output = run(&["preview", "-l", path.to_str().unwrap(), "--ascii"]);

    assert_eq!(output.status.code(), Some(0));
    assert!(String::from_utf8_lossy(&output.stderr).contains("1 entries could not be parsed"));
}
