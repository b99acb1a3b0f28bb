//! Application-wide constants.
//!
//! This module defines constants used throughout the application,
//! including the application name and the firmware's display and macro names.

/// The display name of the application (human-readable, with proper capitalization).
pub const APP_NAME: &str = "GP2040 Layout Tool";

/// The binary name of the application (used in command examples, lowercase with hyphens).
pub const APP_BINARY_NAME: &str = "gplayout";

/// Macro holding the first element sequence.
pub const DEFAULT_MACRO_A: &str = "DEFAULT_BOARD_LAYOUT_A";

/// Macro holding the second element sequence.
pub const DEFAULT_MACRO_B: &str = "DEFAULT_BOARD_LAYOUT_B";

/// Width of the board display in logical pixels.
pub const CANVAS_WIDTH: u32 = 128;

/// Height of the board display in logical pixels.
pub const CANVAS_HEIGHT: u32 = 64;

/// Scale applied to `x2`/`y2` for a lever's inner travel indicator.
pub const LEVER_INNER_SCALE: f64 = 0.75;
