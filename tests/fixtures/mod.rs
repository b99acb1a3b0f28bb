//! Shared test fixtures for E2E CLI tests.
#![allow(dead_code)] // Not every test file uses every fixture

use gplayout::models::{Element, ElementShape, ElementType, Layout};
use gplayout::serialize;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;
use tempfile::TempDir;

/// Path to the gplayout binary
pub fn gplayout_bin() -> &'static str {
    env!("CARGO_BIN_EXE_gplayout")
}

/// Creates a Command with an isolated config directory.
///
/// Pass the same directory to several commands to share configuration
/// between them.
pub fn isolated_command(args: &[&str], config_dir: &Path) -> Command {
    let mut cmd = Command::new(gplayout_bin());
    cmd.env("GPLAYOUT_CONFIG_DIR", config_dir);
    cmd.env_remove("RUST_LOG");
    cmd.args(args);
    cmd
}

/// Runs a command with a throwaway config directory.
pub fn run(args: &[&str]) -> std::process::Output {
    let config_dir = TempDir::new().expect("Failed to create temp dir");
    isolated_command(args, config_dir.path())
        .output()
        .expect("Failed to execute command")
}

/// Lever on side A, a rotated button on side B.
pub fn sample_layout() -> Layout {
    Layout::new(
        vec![Element::new(ElementType::Lever, ElementShape::Ellipse, 20, 30, 12, 12).with_style(1, 0)],
        vec![
            Element::new(ElementType::BtnButton, ElementShape::Square, 60, 20, 70, 30)
                .with_style(1, 1)
                .with_value(3)
                .with_rotation(45),
            Element::new(ElementType::PinButton, ElementShape::Ellipse, 100, 30, 6, 6).with_style(1, 1),
        ],
    )
}

/// A board header with value macros before the layout blocks.
pub fn board_header(layout: &Layout) -> String {
    format!(
        "// Pico board definition\n\
         #define BOARD_CONFIG_H_\n\
         #define PIN_DPAD_UP 2\n\
         #define PIN_DPAD_DOWN 3\n\
         \n\
         {}\n",
        serialize(layout)
    )
}

/// A board header whose layout blocks sit inside an include guard.
pub fn guarded_header(layout: &Layout) -> String {
    format!(
        "#ifndef PICO_BOARD_CONFIG_H_\n\
         #define PICO_BOARD_CONFIG_H_\n\
         \n\
         {}\n\
         \n\
         #endif\n",
        serialize(layout)
    )
}

/// Header whose side A holds one valid and one invalid entry.
pub fn malformed_header() -> String {
    "#define DEFAULT_BOARD_LAYOUT_A {\\\n\
     \x20   {GP_ELEMENT_PIN_BUTTON, {10, 10, 4, 4, 1, 1, 0, GP_SHAPE_ELLIPSE}},\\\n\
     \x20   {GP_ELEMENT_JOYSTICK, {20, 10, 4, 4, 1, 1, 0, GP_SHAPE_ELLIPSE}},\\\n\
     }\n\
     \n\
     #define DEFAULT_BOARD_LAYOUT_B {\\\n\
     \n\
     }\n"
        .to_string()
}

/// Writes header text to a temp file.
///
/// The TempDir must be kept alive for as long as the file is used.
pub fn create_temp_header(text: &str) -> (PathBuf, TempDir) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("BoardConfig.h");
    fs::write(&path, text).expect("Failed to write header");
    (path, temp_dir)
}

/// Reads a header back.
pub fn read_header(path: &Path) -> String {
    fs::read_to_string(path).expect("Failed to read header")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixture_header_parses() {
        assert_eq!(gplayout::parse(&board_header(&sample_layout())), sample_layout());
    }

    #[test]
    fn test_fixture_malformed_header() {
        let layout = gplayout::parse(&malformed_header());
        assert_eq!(layout.a.len(), 1);
        assert!(layout.b.is_empty());
    }
}
