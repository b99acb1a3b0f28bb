//! Parsing and serialization of board layout headers.
//!
//! This module reads `#define DEFAULT_BOARD_LAYOUT_* { ... }` blocks from C
//! header text into typed layouts, and generates the same text back.

pub mod define_gen;
pub mod entry;
pub mod layout;
pub mod macro_block;

// Re-export commonly used functions
pub use define_gen::{serialize, serialize_with, splice};
pub use layout::{parse, parse_with_report, MacroNames, ParseReport, SkipReason, SkippedEntry};
