//! Configuration management CLI commands.

use crate::cli::common::{load_config, print_json, CliError, CliResult};
use crate::config::Config;
use crate::constants::APP_NAME;
use crate::render::PreviewStyle;
use clap::{Args, Subcommand};

/// Configuration management commands
#[derive(Args, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    command: ConfigCommand,
}

#[derive(Subcommand, Debug)]
enum ConfigCommand {
    /// Display current configuration
    Show(ConfigShowArgs),
    /// Set configuration values
    Set(ConfigSetArgs),
    /// Print the configuration file path
    Path,
}

/// Display current configuration
#[derive(Args, Debug)]
pub struct ConfigShowArgs {
    /// Output as JSON
    #[arg(long)]
    json: bool,
}

/// Set configuration values
#[derive(Args, Debug)]
pub struct ConfigSetArgs {
    /// Macro name holding side A
    #[arg(long, value_name = "NAME")]
    macro_a: Option<String>,

    /// Macro name holding side B
    #[arg(long, value_name = "NAME")]
    macro_b: Option<String>,

    /// Preview style (blocks or ascii)
    #[arg(long, value_name = "STYLE")]
    preview_style: Option<String>,

    /// Preview canvas width in pixels
    #[arg(long, value_name = "PIXELS")]
    canvas_width: Option<u32>,

    /// Preview canvas height in pixels
    #[arg(long, value_name = "PIXELS")]
    canvas_height: Option<u32>,
}

impl ConfigArgs {
    /// Execute config subcommand
    pub fn execute(&self) -> CliResult<()> {
        match &self.command {
            ConfigCommand::Show(args) => args.execute(),
            ConfigCommand::Set(args) => args.execute(),
            ConfigCommand::Path => {
                let path = Config::config_file_path().map_err(|e| {
                    CliError::io(format!("Failed to determine config path: {e}"))
                })?;
                println!("{}", path.display());
                Ok(())
            }
        }
    }
}

impl ConfigShowArgs {
    /// Execute show command
    pub fn execute(&self) -> CliResult<()> {
        let config = load_config()?;

        if self.json {
            print_json(&config)?;
        } else {
            output_human_readable(&config);
        }

        Ok(())
    }
}

impl ConfigSetArgs {
    /// Execute set command
    pub fn execute(&self) -> CliResult<()> {
        if self.macro_a.is_none()
            && self.macro_b.is_none()
            && self.preview_style.is_none()
            && self.canvas_width.is_none()
            && self.canvas_height.is_none()
        {
            return Err(CliError::validation(
                "At least one configuration option must be specified: --macro-a, --macro-b, --preview-style, --canvas-width, or --canvas-height",
            ));
        }

        let mut config = load_config()?;

        if let Some(name) = &self.macro_a {
            config.layout.macro_a.clone_from(name);
        }
        if let Some(name) = &self.macro_b {
            config.layout.macro_b.clone_from(name);
        }
        if let Some(style) = &self.preview_style {
            config.preview.style = parse_preview_style(style)?;
        }
        if let Some(width) = self.canvas_width {
            config.preview.canvas_width = width;
        }
        if let Some(height) = self.canvas_height {
            config.preview.canvas_height = height;
        }

        config
            .validate()
            .map_err(|e| CliError::validation(e.to_string()))?;
        config
            .save()
            .map_err(|e| CliError::io(format!("Failed to save configuration: {e}")))?;

        println!("Configuration updated successfully.");

        Ok(())
    }
}

fn parse_preview_style(style: &str) -> CliResult<PreviewStyle> {
    match style.to_lowercase().as_str() {
        "blocks" => Ok(PreviewStyle::Blocks),
        "ascii" => Ok(PreviewStyle::Ascii),
        _ => Err(CliError::validation(
            "Invalid preview style. Must be 'blocks' or 'ascii'",
        )),
    }
}

/// Output configuration in human-readable format
fn output_human_readable(config: &Config) {
    let title = format!("{APP_NAME} Configuration");
    println!("{title}");
    println!("{}", "=".repeat(title.len()));
    println!();

    println!("Layout:");
    println!("  Macro A: {}", config.layout.macro_a);
    println!("  Macro B: {}", config.layout.macro_b);
    println!();

    println!("Preview:");
    println!("  Style: {}", config.preview.style.as_str());
    println!(
        "  Canvas: {}x{}",
        config.preview.canvas_width, config.preview.canvas_height
    );
    println!();
}
