//! Preview command: draw a layout as terminal text.

use crate::cli::common::{load_config, load_layout, CliResult};
use crate::constants::APP_BINARY_NAME;
use crate::render::{self, BitmapSurface, PreviewStyle};
use clap::Args;
use std::path::PathBuf;

/// Render a board header's layout to the terminal
#[derive(Debug, Clone, Args)]
pub struct PreviewArgs {
    /// Path to the board header
    #[arg(short, long, value_name = "FILE")]
    pub layout: PathBuf,

    /// Use `#`/`.` instead of block characters
    #[arg(long)]
    pub ascii: bool,
}

impl PreviewArgs {
    /// Execute the preview command
    pub fn execute(&self) -> CliResult<()> {
        let config = load_config()?;
        let report = load_layout(&self.layout, &config.layout.macro_names())?;

        let style = if self.ascii {
            PreviewStyle::Ascii
        } else {
            config.preview.style
        };

        let mut surface = BitmapSurface::new(config.preview.canvas_width, config.preview.canvas_height);
        render::render(&report.layout, &mut surface);
        println!("{}", surface.to_text(style));

        if !report.is_clean() {
            eprintln!(
                "⚠ {} entries could not be parsed and are not shown (run `{APP_BINARY_NAME} validate` for details)",
                report.skipped.len()
            );
        }

        Ok(())
    }
}
