//! Shared types and helpers for CLI commands.

use crate::config::Config;
use crate::models::Side;
use crate::parser::{MacroNames, ParseReport};
use crate::services::LayoutService;
use serde::Serialize;
use std::path::Path;
use thiserror::Error;

/// Process exit codes used by every command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Command completed
    Success = 0,
    /// Input was understood but rejected
    ValidationError = 1,
    /// A file could not be read or written
    IoError = 2,
}

impl ExitCode {
    /// Numeric process status.
    pub const fn code(self) -> i32 {
        self as i32
    }
}

/// Error returned by CLI commands.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct CliError {
    /// Exit code the process should terminate with
    pub exit_code: ExitCode,
    /// Message printed to stderr
    pub message: String,
}

impl CliError {
    /// Error for rejected input.
    pub fn validation(message: impl Into<String>) -> Self {
        Self {
            exit_code: ExitCode::ValidationError,
            message: message.into(),
        }
    }

    /// Error for file system failures.
    pub fn io(message: impl Into<String>) -> Self {
        Self {
            exit_code: ExitCode::IoError,
            message: message.into(),
        }
    }
}

/// Result type for CLI commands.
pub type CliResult<T> = Result<T, CliError>;

/// Loads the user configuration.
pub fn load_config() -> CliResult<Config> {
    Config::load()
        .map_err(|e| CliError::validation(format!("Failed to load configuration: {e:#}")))
}

/// Loads a header with the configured macro names.
pub fn load_layout(path: &Path, names: &MacroNames) -> CliResult<ParseReport> {
    LayoutService::load(path, names)
        .map_err(|e| CliError::io(format!("Failed to load layout: {e:#}")))
}

/// Refuses to rewrite a header when content that was not read would be lost.
///
/// That covers skipped entries and layout blocks followed by other code,
/// which the rewrite would replace with an empty side.
pub fn ensure_rewritable(report: &ParseReport, force: bool) -> CliResult<()> {
    if report.is_rewritable() || force {
        return Ok(());
    }

    for skipped in &report.skipped {
        eprintln!("  ✗ {skipped}");
    }
    for name in &report.unterminated_macros {
        eprintln!("  ✗ {name} is followed by code other than #define and was not read");
    }

    let mut problems = Vec::new();
    if !report.skipped.is_empty() {
        problems.push(format!(
            "{} entr{} would be dropped",
            report.skipped.len(),
            if report.skipped.len() == 1 { "y" } else { "ies" }
        ));
    }
    if !report.unterminated_macros.is_empty() {
        problems.push(format!(
            "{} would be replaced unread",
            report.unterminated_macros.join(", ")
        ));
    }
    Err(CliError::validation(format!(
        "Refusing to rewrite: {} (use --force to rewrite anyway)",
        problems.join("; ")
    )))
}

/// Serializes a value as pretty JSON and prints it.
pub fn print_json<T: Serialize>(value: &T) -> CliResult<()> {
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| CliError::io(format!("Failed to serialize JSON: {e}")))?;
    println!("{json}");
    Ok(())
}

/// One finding reported by `validate`.
#[derive(Debug, Clone, Serialize)]
pub struct ValidationMessage {
    /// `error` or `warning`
    pub severity: String,
    /// Human-readable description
    pub message: String,
    /// Where the finding applies, when it concerns one entry
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<ValidationLocation>,
}

/// Entry position within a header.
#[derive(Debug, Clone, Serialize)]
pub struct ValidationLocation {
    /// Side holding the entry
    pub side: Side,
    /// Entry index within the side's block
    pub index: usize,
}

/// Per-check status, each `passed`, `warning` or `failed`.
#[derive(Debug, Clone, Serialize)]
pub struct ValidationChecks {
    /// Every entry parsed
    pub entries: String,
    /// Both macro blocks were found
    pub macros: String,
    /// Every element fits on the display
    pub bounds: String,
}

impl ValidationChecks {
    /// All checks passed.
    pub fn all_passed() -> Self {
        Self {
            entries: "passed".to_string(),
            macros: "passed".to_string(),
            bounds: "passed".to_string(),
        }
    }
}

/// Full `validate` output.
#[derive(Debug, Clone, Serialize)]
pub struct ValidationResponse {
    /// No errors were found
    pub valid: bool,
    /// Errors and warnings in report order
    pub errors: Vec<ValidationMessage>,
    /// Per-check summary
    pub checks: ValidationChecks,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse_with_report;

    #[test]
    fn test_exit_codes() {
        assert_eq!(ExitCode::Success.code(), 0);
        assert_eq!(CliError::validation("x").exit_code.code(), 1);
        assert_eq!(CliError::io("x").exit_code.code(), 2);
        assert_eq!(CliError::io("disk full").to_string(), "disk full");
    }

    #[test]
    fn test_ensure_rewritable() {
        let clean = parse_with_report("", &MacroNames::default());
        assert!(ensure_rewritable(&clean, false).is_ok());

        let dirty = parse_with_report(
            "#define DEFAULT_BOARD_LAYOUT_A {\\\n    {GP_ELEMENT_NOPE, {1, 2, 3, 4, 1, 1, 0, GP_SHAPE_SQUARE}},\\\n}",
            &MacroNames::default(),
        );
        let err = ensure_rewritable(&dirty, false).unwrap_err();
        assert_eq!(err.exit_code, ExitCode::ValidationError);
        assert!(err.message.contains("1 entry would be dropped"));
        assert!(ensure_rewritable(&dirty, true).is_ok());
    }

    #[test]
    fn test_ensure_rewritable_rejects_block_before_endif() {
        let report = parse_with_report(
            "#define DEFAULT_BOARD_LAYOUT_A {\\\n}\n\n#define DEFAULT_BOARD_LAYOUT_B {\\\n    {GP_ELEMENT_PIN_BUTTON, {4, 4, 4, 4, 1, 1, 0, GP_SHAPE_ELLIPSE}},\\\n}\n\n#endif\n",
            &MacroNames::default(),
        );
        let err = ensure_rewritable(&report, false).unwrap_err();
        assert_eq!(err.exit_code, ExitCode::ValidationError);
        assert!(err.message.contains("DEFAULT_BOARD_LAYOUT_B would be replaced unread"));
        assert!(!err.message.contains("dropped"));
        assert!(ensure_rewritable(&report, true).is_ok());
    }
}
