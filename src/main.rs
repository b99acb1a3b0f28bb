//! gplayout - GP2040 board layout tool
//!
//! Reads, previews, validates and edits the `DEFAULT_BOARD_LAYOUT_*` blocks
//! of GP2040 board headers from the command line.

use clap::{Parser, Subcommand};
use gplayout::cli::{
    CliResult, ConfigArgs, ElementArgs, FormatArgs, InspectArgs, PreviewArgs, SymbolsArgs,
    ValidateArgs,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// GP2040 board layout tool
#[derive(Parser, Debug)]
#[command(name = "gplayout", author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Parse a board header and list its elements
    Inspect(InspectArgs),
    /// Re-serialize the layout blocks of a board header
    Format(FormatArgs),
    /// Render a board header's layout to the terminal
    Preview(PreviewArgs),
    /// Validate a board header for errors and warnings
    Validate(ValidateArgs),
    /// Add, change or remove layout elements
    Element(ElementArgs),
    /// List element type and shape symbols with their codes
    Symbols(SymbolsArgs),
    /// Configuration management commands
    Config(ConfigArgs),
}

impl Command {
    fn execute(&self) -> CliResult<()> {
        match self {
            Self::Inspect(args) => args.execute(),
            Self::Format(args) => args.execute(),
            Self::Preview(args) => args.execute(),
            Self::Validate(args) => args.execute(),
            Self::Element(args) => args.execute(),
            Self::Symbols(args) => args.execute(),
            Self::Config(args) => args.execute(),
        }
    }
}

fn main() {
    let cli = Cli::parse();

    // Logs go to stderr so stdout stays machine-readable
    let filter = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    if let Err(e) = cli.command.execute() {
        eprintln!("Error: {e}");
        std::process::exit(e.exit_code.code());
    }
}
