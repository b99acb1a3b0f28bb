//! Element editing commands.
//!
//! Every edit loads the header, derives a new layout value and writes it back
//! atomically. Only the layout blocks are rewritten.

use crate::cli::common::{ensure_rewritable, load_config, load_layout, CliError, CliResult};
use crate::models::{Element, ElementPatch, ElementShape, ElementType, Layout, Side};
use crate::services::LayoutService;
use clap::{Args, Subcommand};
use std::path::PathBuf;

/// Add, change or remove layout elements
#[derive(Args, Debug)]
pub struct ElementArgs {
    #[command(subcommand)]
    command: ElementCommand,
}

#[derive(Subcommand, Debug)]
enum ElementCommand {
    /// Append an element to a side
    Add(ElementAddArgs),
    /// Change fields of an existing element
    Set(ElementSetArgs),
    /// Remove an element
    Remove(ElementRemoveArgs),
}

/// Header and side an edit applies to
#[derive(Args, Debug)]
pub struct TargetArgs {
    /// Path to the board header
    #[arg(short, long, value_name = "FILE")]
    layout: PathBuf,

    /// Side to edit (a or b)
    #[arg(long, value_name = "SIDE")]
    side: Side,

    /// Rewrite even if some entries or blocks could not be read (they are dropped)
    #[arg(long)]
    force: bool,
}

/// Element fields that can be given on the command line
#[derive(Args, Debug, Default)]
pub struct FieldArgs {
    /// Element type (GP_ELEMENT_LEVER or just lever)
    #[arg(long = "type", value_name = "TYPE", value_parser = parse_element_type)]
    element_type: Option<ElementType>,

    /// Shape (GP_SHAPE_SQUARE or just square)
    #[arg(long, value_name = "SHAPE", value_parser = parse_element_shape)]
    shape: Option<ElementShape>,

    /// First x coordinate (center x for ellipses)
    #[arg(long, allow_negative_numbers = true)]
    x1: Option<i32>,

    /// First y coordinate (center y for ellipses)
    #[arg(long, allow_negative_numbers = true)]
    y1: Option<i32>,

    /// Second x coordinate (x radius for ellipses)
    #[arg(long, allow_negative_numbers = true)]
    x2: Option<i32>,

    /// Second y coordinate (y radius for ellipses)
    #[arg(long, allow_negative_numbers = true)]
    y2: Option<i32>,

    /// Stroke flag
    #[arg(long, allow_negative_numbers = true)]
    stroke: Option<i32>,

    /// Fill flag
    #[arg(long, allow_negative_numbers = true)]
    fill: Option<i32>,

    /// Opaque value passed through to firmware
    #[arg(long, allow_negative_numbers = true)]
    value: Option<i32>,

    /// Rotation in degrees (0 removes it)
    #[arg(long, allow_negative_numbers = true)]
    rotation: Option<i32>,
}

impl FieldArgs {
    fn to_patch(&self) -> ElementPatch {
        ElementPatch {
            element_type: self.element_type,
            shape: self.shape,
            x1: self.x1,
            y1: self.y1,
            x2: self.x2,
            y2: self.y2,
            stroke: self.stroke,
            fill: self.fill,
            value: self.value,
            rotation: self.rotation,
        }
    }
}

/// Append an element to a side
#[derive(Args, Debug)]
pub struct ElementAddArgs {
    #[command(flatten)]
    target: TargetArgs,

    #[command(flatten)]
    fields: FieldArgs,
}

/// Change fields of an existing element
#[derive(Args, Debug)]
pub struct ElementSetArgs {
    #[command(flatten)]
    target: TargetArgs,

    /// Zero-based element index within the side
    #[arg(long)]
    index: usize,

    #[command(flatten)]
    fields: FieldArgs,
}

/// Remove an element
#[derive(Args, Debug)]
pub struct ElementRemoveArgs {
    #[command(flatten)]
    target: TargetArgs,

    /// Zero-based element index within the side
    #[arg(long)]
    index: usize,
}

impl ElementArgs {
    /// Execute element subcommand
    pub fn execute(&self) -> CliResult<()> {
        match &self.command {
            ElementCommand::Add(args) => args.execute(),
            ElementCommand::Set(args) => args.execute(),
            ElementCommand::Remove(args) => args.execute(),
        }
    }
}

impl TargetArgs {
    /// Loads the target layout, applies `edit` and saves the result.
    fn edit(&self, edit: impl FnOnce(&Layout) -> anyhow::Result<Layout>) -> CliResult<Layout> {
        let config = load_config()?;
        let names = config.layout.macro_names();
        let report = load_layout(&self.layout, &names)?;
        ensure_rewritable(&report, self.force)?;

        let edited = edit(&report.layout).map_err(|e| CliError::validation(e.to_string()))?;

        LayoutService::save(&edited, &self.layout, &names)
            .map_err(|e| CliError::io(format!("Failed to save layout: {e:#}")))?;
        Ok(edited)
    }
}

impl ElementAddArgs {
    /// Execute add command
    pub fn execute(&self) -> CliResult<()> {
        let element = self.fields.to_patch().apply(&Element::default());
        let side = self.target.side;
        let edited = self
            .target
            .edit(|layout| Ok(layout.with_element_added(side, element)))?;

        println!(
            "✓ Added element {} to side {side}",
            edited.side(side).len() - 1
        );
        Ok(())
    }
}

impl ElementSetArgs {
    /// Execute set command
    pub fn execute(&self) -> CliResult<()> {
        let patch = self.fields.to_patch();
        if patch.is_empty() {
            return Err(CliError::validation(
                "At least one field must be specified: --type, --shape, --x1, --y1, --x2, --y2, --stroke, --fill, --value or --rotation",
            ));
        }

        let side = self.target.side;
        self.target
            .edit(|layout| layout.with_element_patched(side, self.index, &patch))?;

        println!("✓ Updated element {} on side {side}", self.index);
        Ok(())
    }
}

impl ElementRemoveArgs {
    /// Execute remove command
    pub fn execute(&self) -> CliResult<()> {
        let side = self.target.side;
        self.target
            .edit(|layout| layout.with_element_removed(side, self.index))?;

        println!("✓ Removed element {} from side {side}", self.index);
        Ok(())
    }
}

/// Accepts a full `GP_ELEMENT_*` symbol or its suffix in any case.
fn parse_element_type(s: &str) -> Result<ElementType, String> {
    ElementType::from_symbol(s)
        .or_else(|_| ElementType::from_symbol(&format!("GP_ELEMENT_{}", s.to_uppercase())))
        .map_err(|e| e.to_string())
}

/// Accepts a full `GP_SHAPE_*` symbol or its suffix in any case.
fn parse_element_shape(s: &str) -> Result<ElementShape, String> {
    ElementShape::from_symbol(s)
        .or_else(|_| ElementShape::from_symbol(&format!("GP_SHAPE_{}", s.to_uppercase())))
        .map_err(|e| e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_element_type() {
        assert_eq!(parse_element_type("GP_ELEMENT_LEVER"), Ok(ElementType::Lever));
        assert_eq!(parse_element_type("btn_button"), Ok(ElementType::BtnButton));
        assert!(parse_element_type("joystick")
            .unwrap_err()
            .contains("unknown element type symbol"));
    }

    #[test]
    fn test_parse_element_shape() {
        assert_eq!(parse_element_shape("GP_SHAPE_LINE"), Ok(ElementShape::Line));
        assert_eq!(parse_element_shape("Square"), Ok(ElementShape::Square));
        assert!(parse_element_shape("circle").is_err());
    }

    #[test]
    fn test_fields_to_patch() {
        let fields = FieldArgs {
            element_type: Some(ElementType::Lever),
            x1: Some(-3),
            ..FieldArgs::default()
        };
        let element = fields.to_patch().apply(&Element::default());
        assert_eq!(element.element_type, ElementType::Lever);
        assert_eq!(element.x1, -3);
        assert_eq!(element.y1, 4);
        assert!(FieldArgs::default().to_patch().is_empty());
    }
}
