//! CLI command handlers for gplayout.
//!
//! Every subcommand reads a board header, works on immutable layout values
//! and, for edits, writes the header back atomically.

pub mod common;
pub mod config;
pub mod element;
pub mod format;
pub mod inspect;
pub mod preview;
pub mod symbols;
pub mod validate;

// Re-export types used by main.rs and tests
pub use common::{CliError, CliResult, ExitCode};
pub use config::ConfigArgs;
pub use element::ElementArgs;
pub use format::FormatArgs;
pub use inspect::InspectArgs;
pub use preview::PreviewArgs;
pub use symbols::SymbolsArgs;
pub use validate::ValidateArgs;
