//! GP2040 Layout Library
//!
//! This library reads and writes the board layout blocks of GP2040 board
//! headers (`#define DEFAULT_BOARD_LAYOUT_A { ... }`), models them as typed
//! layouts, and maps them to drawing primitives for previews.

// Module declarations
pub mod cli;
pub mod config;
pub mod constants;
pub mod models;
pub mod parser;
pub mod render;
pub mod services;

// Re-export the codec and renderer entry points
pub use parser::{parse, parse_with_report, serialize};
pub use render::render;
