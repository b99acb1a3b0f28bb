//! Inspect command: list the elements of a board header.

use crate::cli::common::{load_config, load_layout, print_json, CliResult};
use crate::models::{Element, Side};
use crate::parser::{MacroNames, ParseReport};
use clap::Args;
use serde::Serialize;
use std::path::PathBuf;

/// Parse a board header and list its elements
#[derive(Debug, Clone, Args)]
pub struct InspectArgs {
    /// Path to the board header
    #[arg(short, long, value_name = "FILE")]
    pub layout: PathBuf,

    /// Output results as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Serialize, Debug)]
struct InspectOutput<'a> {
    a: &'a [Element],
    b: &'a [Element],
    skipped: Vec<SkippedOutput<'a>>,
    missing_macros: &'a [String],
    unterminated_macros: &'a [String],
}

#[derive(Serialize, Debug)]
struct SkippedOutput<'a> {
    side: Side,
    #[serde(rename = "macro")]
    macro_name: &'a str,
    index: usize,
    text: &'a str,
    reason: String,
}

impl InspectArgs {
    /// Execute the inspect command
    pub fn execute(&self) -> CliResult<()> {
        let config = load_config()?;
        let names = config.layout.macro_names();
        let report = load_layout(&self.layout, &names)?;

        if self.json {
            print_json(&build_output(&report))
        } else {
            print_human_readable(&report, &names);
            Ok(())
        }
    }
}

fn build_output(report: &ParseReport) -> InspectOutput<'_> {
    InspectOutput {
        a: &report.layout.a,
        b: &report.layout.b,
        skipped: report
            .skipped
            .iter()
            .map(|skipped| SkippedOutput {
                side: skipped.side,
                macro_name: &skipped.macro_name,
                index: skipped.index,
                text: &skipped.text,
                reason: skipped.reason.to_string(),
            })
            .collect(),
        missing_macros: &report.missing_macros,
        unterminated_macros: &report.unterminated_macros,
    }
}

fn print_human_readable(report: &ParseReport, names: &MacroNames) {
    for side in Side::BOTH {
        let elements = report.layout.side(side);
        println!(
            "Side {side} ({}): {} element{}",
            names.for_side(side),
            elements.len(),
            if elements.len() == 1 { "" } else { "s" }
        );
        for (index, element) in elements.iter().enumerate() {
            println!("  [{index}] {}", describe(element));
        }
    }

    if !report.missing_macros.is_empty() {
        println!("\nMissing macros:");
        for name in &report.missing_macros {
            if report.unterminated_macros.contains(name) {
                println!("  ⚠ {name} (followed by code other than #define, not read)");
            } else {
                println!("  ⚠ {name}");
            }
        }
    }

    if !report.skipped.is_empty() {
        println!("\nSkipped entries:");
        for skipped in &report.skipped {
            println!("  ✗ {skipped}");
        }
    }
}

/// One-line summary of an element.
fn describe(element: &Element) -> String {
    let mut line = format!(
        "{} {} ({}, {}) ({}, {}) stroke={} fill={} value={}",
        element.element_type,
        element.shape,
        element.x1,
        element.y1,
        element.x2,
        element.y2,
        element.stroke,
        element.fill,
        element.value
    );
    if let Some(degrees) = element.emitted_rotation() {
        line.push_str(&format!(" rotation={degrees}"));
    }
    line
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ElementShape, ElementType};

    #[test]
    fn test_describe() {
        let element = Element::new(ElementType::BtnButton, ElementShape::Square, 1, 2, 3, 4)
            .with_style(1, 0)
            .with_value(5)
            .with_rotation(90);
        assert_eq!(
            describe(&element),
            "GP_ELEMENT_BTN_BUTTON GP_SHAPE_SQUARE (1, 2) (3, 4) stroke=1 fill=0 value=5 rotation=90"
        );
        assert!(!describe(&Element::default()).contains("rotation"));
    }
}
