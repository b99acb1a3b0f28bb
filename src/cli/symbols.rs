//! Symbols command: list the firmware enum names the parser understands.

use crate::cli::common::{print_json, CliResult};
use crate::models::{ElementShape, ElementType};
use clap::Args;
use serde::Serialize;

/// List element type and shape symbols with their codes
#[derive(Debug, Clone, Args)]
pub struct SymbolsArgs {
    /// Output results as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Serialize, Debug)]
struct SymbolOutput {
    name: &'static str,
    code: u8,
    drawn: bool,
}

#[derive(Serialize, Debug)]
struct SymbolsOutput {
    element_types: Vec<SymbolOutput>,
    shapes: Vec<SymbolOutput>,
}

impl SymbolsArgs {
    /// Execute the symbols command
    pub fn execute(&self) -> CliResult<()> {
        let output = SymbolsOutput {
            element_types: ElementType::table()
                .entries()
                .iter()
                .map(|entry| SymbolOutput {
                    name: entry.name,
                    code: entry.code,
                    drawn: entry.member.is_drawable(),
                })
                .collect(),
            shapes: ElementShape::table()
                .entries()
                .iter()
                .map(|entry| SymbolOutput {
                    name: entry.name,
                    code: entry.code,
                    drawn: entry.member.is_drawable(),
                })
                .collect(),
        };

        if self.json {
            return print_json(&output);
        }

        println!("Element types:");
        print_symbols(&output.element_types);
        println!("\nShapes:");
        print_symbols(&output.shapes);
        Ok(())
    }
}

fn print_symbols(symbols: &[SymbolOutput]) {
    for symbol in symbols {
        let note = if symbol.drawn { "" } else { "  (not drawn)" };
        println!("  {:>2}  {}{note}", symbol.code, symbol.name);
    }
}
