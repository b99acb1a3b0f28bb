//! Validation command for board headers.

use crate::cli::common::{
    load_config, load_layout, print_json, CliError, CliResult, ValidationChecks,
    ValidationLocation, ValidationMessage, ValidationResponse,
};
use crate::parser::ParseReport;
use crate::services::{check_bounds, BoundsWarning};
use clap::Args;
use std::path::PathBuf;

/// Validate a board header for errors and warnings
#[derive(Debug, Clone, Args)]
pub struct ValidateArgs {
    /// Path to the board header
    #[arg(short, long, value_name = "FILE")]
    pub layout: PathBuf,

    /// Output results as JSON
    #[arg(long)]
    pub json: bool,

    /// Treat warnings as errors (exit non-zero)
    #[arg(long)]
    pub strict: bool,
}

impl ValidateArgs {
    /// Execute the validate command
    pub fn execute(&self) -> CliResult<()> {
        let config = load_config()?;
        let report = load_layout(&self.layout, &config.layout.macro_names())?;
        let bounds = check_bounds(
            &report.layout,
            config.preview.canvas_width,
            config.preview.canvas_height,
        );

        let response = build_response(&report, &bounds);

        if self.json {
            print_json(&response)?;
        } else {
            print_human_readable(&response);
        }

        if !response.valid {
            return Err(CliError::validation("Validation failed"));
        }

        if self.strict && response.errors.iter().any(|m| m.severity == "warning") {
            return Err(CliError::validation("Warnings found in strict mode"));
        }

        Ok(())
    }
}

fn build_response(report: &ParseReport, bounds: &[BoundsWarning]) -> ValidationResponse {
    let mut checks = ValidationChecks::all_passed();
    let mut messages = Vec::new();

    // Skipped entries are errors
    for skipped in &report.skipped {
        checks.entries = "failed".to_string();
        messages.push(ValidationMessage {
            severity: "error".to_string(),
            message: format!("{}: {} ({})", skipped.macro_name, skipped.reason, skipped.text),
            location: Some(ValidationLocation {
                side: skipped.side,
                index: skipped.index,
            }),
        });
    }

    for name in &report.missing_macros {
        checks.macros = "warning".to_string();
        let message = if report.unterminated_macros.contains(name) {
            format!("Macro {name} is followed by code other than #define and was not read, its side is empty")
        } else {
            format!("Macro {name} not found, its side is empty")
        };
        messages.push(ValidationMessage {
            severity: "warning".to_string(),
            message,
            location: None,
        });
    }

    for warning in bounds {
        checks.bounds = "warning".to_string();
        messages.push(ValidationMessage {
            severity: "warning".to_string(),
            message: warning.message.clone(),
            location: Some(ValidationLocation {
                side: warning.side,
                index: warning.index,
            }),
        });
    }

    ValidationResponse {
        valid: report.is_clean(),
        errors: messages,
        checks,
    }
}

fn print_human_readable(response: &ValidationResponse) {
    if response.valid {
        println!("✓ Validation passed");
    } else {
        println!("✗ Validation failed");
    }

    println!("\nChecks:");
    println!("  Entries: {}", response.checks.entries);
    println!("  Macros:  {}", response.checks.macros);
    println!("  Bounds:  {}", response.checks.bounds);

    if !response.errors.is_empty() {
        println!("\nIssues:");
        for msg in &response.errors {
            let prefix = if msg.severity == "error" {
                "  ✗"
            } else {
                "  ⚠"
            };
            if let Some(loc) = &msg.location {
                println!("{prefix} [Side {} #{}] {}", loc.side, loc.index, msg.message);
            } else {
                println!("{prefix} {}", msg.message);
            }
        }
    }
}
