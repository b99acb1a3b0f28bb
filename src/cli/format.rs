//! Format command: rewrite layout blocks in canonical form.

use crate::cli::common::{ensure_rewritable, load_config, CliError, CliResult};
use crate::parser;
use crate::services::LayoutService;
use clap::Args;
use std::fs;
use std::path::PathBuf;

/// Re-serialize the layout blocks of a board header
#[derive(Debug, Clone, Args)]
pub struct FormatArgs {
    /// Path to the board header
    #[arg(short, long, value_name = "FILE")]
    pub layout: PathBuf,

    /// Write the result here instead of rewriting the input
    #[arg(short, long, value_name = "FILE", conflicts_with = "check")]
    pub output: Option<PathBuf>,

    /// Only check whether the file is already canonical (exit 1 if not)
    #[arg(long)]
    pub check: bool,

    /// Rewrite even if some entries or blocks could not be read (they are dropped)
    #[arg(long)]
    pub force: bool,
}

impl FormatArgs {
    /// Execute the format command
    pub fn execute(&self) -> CliResult<()> {
        let config = load_config()?;
        let names = config.layout.macro_names();

        let text = fs::read_to_string(&self.layout).map_err(|e| {
            CliError::io(format!(
                "Failed to read layout {}: {e}",
                self.layout.display()
            ))
        })?;
        let report = parser::parse_with_report(&text, &names);
        let formatted = parser::splice(&text, &report.layout, &names);
        let canonical = formatted == text;

        if self.check {
            if canonical && report.is_rewritable() {
                println!("✓ {} is canonically formatted", self.layout.display());
                return Ok(());
            }
            println!("✗ {} is not canonically formatted", self.layout.display());
            return Err(CliError::validation("Formatting check failed"));
        }

        ensure_rewritable(&report, self.force)?;

        let target = self.output.as_ref().unwrap_or(&self.layout);
        if canonical && self.output.is_none() {
            println!("✓ {} already formatted", self.layout.display());
            return Ok(());
        }

        LayoutService::write_text(target, &formatted)
            .map_err(|e| CliError::io(format!("Failed to write layout: {e:#}")))?;
        println!("✓ Formatted layout written to {}", target.display());

        Ok(())
    }
}
