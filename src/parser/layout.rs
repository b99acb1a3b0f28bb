//! Building typed layouts from board header text.
//!
//! Parsing never fails as a whole. Entries that do not match the grammar, that
//! have the wrong number of values, or that name an unknown type or shape are
//! left out of the layout and reported in [`ParseReport::skipped`].

use crate::constants::{DEFAULT_MACRO_A, DEFAULT_MACRO_B};
use crate::models::{Element, ElementShape, ElementType, Layout, Side, SymbolError};
use crate::parser::entry::{self, EntryError, RawEntry, RawValue};
use crate::parser::macro_block;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;
use tracing::debug;

/// Value position of the shape symbol.
const SHAPE_INDEX: usize = 7;
/// Number of values without rotation.
const BASE_VALUE_COUNT: usize = 8;
/// Number of values with rotation.
const MAX_VALUE_COUNT: usize = 9;

/// Names of the two macro blocks that hold a layout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MacroNames {
    /// Macro holding side A
    pub a: String,
    /// Macro holding side B
    pub b: String,
}

impl Default for MacroNames {
    fn default() -> Self {
        Self {
            a: DEFAULT_MACRO_A.to_string(),
            b: DEFAULT_MACRO_B.to_string(),
        }
    }
}

impl MacroNames {
    /// Creates a pair of macro names.
    pub fn new(a: impl Into<String>, b: impl Into<String>) -> Self {
        Self {
            a: a.into(),
            b: b.into(),
        }
    }

    /// Macro name for one side.
    pub fn for_side(&self, side: Side) -> &str {
        match side {
            Side::A => &self.a,
            Side::B => &self.b,
        }
    }
}

/// Why an entry was left out of the layout.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SkipReason {
    /// Entry text does not match the grammar.
    #[error(transparent)]
    Structure(#[from] EntryError),
    /// Value list has the wrong length.
    #[error("expected 8 or 9 values, found {0}")]
    ValueCount(usize),
    /// Type or shape symbol is unknown.
    #[error(transparent)]
    Symbol(#[from] SymbolError),
    /// A numeric field holds an identifier.
    #[error("field '{field}' expects a number, found '{found}'")]
    NotNumeric {
        /// Field name
        field: &'static str,
        /// Identifier found instead
        found: String,
    },
    /// The shape field holds a number.
    #[error("field 'shape' expects a GP_SHAPE_* symbol, found {0}")]
    ShapeNotSymbol(i32),
}

/// An entry that was excluded from the built layout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedEntry {
    /// Side the entry was declared on
    pub side: Side,
    /// Macro the entry was declared in
    pub macro_name: String,
    /// Zero-based position among the block's entries
    pub index: usize,
    /// Entry text as found
    pub text: String,
    /// Why it was skipped
    pub reason: SkipReason,
}

impl fmt::Display for SkippedEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} entry {}: {} ({})",
            self.macro_name, self.index, self.reason, self.text
        )
    }
}

/// Result of parsing with diagnostics.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParseReport {
    /// Layout built from every valid entry
    pub layout: Layout,
    /// Entries that were excluded
    pub skipped: Vec<SkippedEntry>,
    /// Macro names that were not found in the text
    pub missing_macros: Vec<String>,
    /// Missing macros whose block exists but is followed by other code
    pub unterminated_macros: Vec<String>,
}

impl ParseReport {
    /// True when every entry made it into the layout.
    pub fn is_clean(&self) -> bool {
        self.skipped.is_empty()
    }

    /// True when rewriting the layout blocks keeps everything the header holds.
    pub fn is_rewritable(&self) -> bool {
        self.is_clean() && self.unterminated_macros.is_empty()
    }
}

/// Parses header text into a layout using the default macro names.
///
/// Invalid entries are dropped; use [`parse_with_report`] to see them.
pub fn parse(text: &str) -> Layout {
    parse_with_report(text, &MacroNames::default()).layout
}

/// Parses header text into a layout and reports skipped entries.
pub fn parse_with_report(text: &str, names: &MacroNames) -> ParseReport {
    let blocks = macro_block::locate_macro_blocks(text);
    let macros = macro_block::terminated_bodies(&blocks);
    let mut report = ParseReport::default();

    for side in Side::BOTH {
        let name = names.for_side(side);
        let Some(body) = macros.get(name) else {
            if blocks.iter().any(|block| block.name == name) {
                debug!("Macro {name} is followed by other code and is not read, side {side} is empty");
                report.unterminated_macros.push(name.to_string());
            } else {
                debug!("Macro {name} not found, side {side} is empty");
            }
            report.missing_macros.push(name.to_string());
            continue;
        };

        let mut elements = Vec::new();
        for (index, (entry_text, parsed)) in entry::parse_entries(body).into_iter().enumerate() {
            match parsed.map_err(SkipReason::from).and_then(|raw| build_element(&raw)) {
                Ok(element) => elements.push(element),
                Err(reason) => {
                    let skipped = SkippedEntry {
                        side,
                        macro_name: name.to_string(),
                        index,
                        text: entry_text.trim().to_string(),
                        reason,
                    };
                    debug!("Skipping {skipped}");
                    report.skipped.push(skipped);
                }
            }
        }

        match side {
            Side::A => report.layout.a = elements,
            Side::B => report.layout.b = elements,
        }
    }

    report
}

/// Turns one grammatical entry into a typed element.
pub fn build_element(raw: &RawEntry) -> Result<Element, SkipReason> {
    let count = raw.values.len();
    if !(BASE_VALUE_COUNT..=MAX_VALUE_COUNT).contains(&count) {
        return Err(SkipReason::ValueCount(count));
    }

    let element_type = ElementType::from_symbol(&raw.symbol)?;
    let shape = match &raw.values[SHAPE_INDEX] {
        RawValue::Symbol(name) => ElementShape::from_symbol(name)?,
        RawValue::Number(n) => return Err(SkipReason::ShapeNotSymbol(*n)),
    };

    let number = |index: usize, field: &'static str| -> Result<i32, SkipReason> {
        match &raw.values[index] {
            RawValue::Number(n) => Ok(*n),
            RawValue::Symbol(found) => Err(SkipReason::NotNumeric {
                field,
                found: found.clone(),
            }),
        }
    };

    let rotation = if count == MAX_VALUE_COUNT {
        Some(number(8, "rotation")?)
    } else {
        None
    };

    Ok(Element {
        element_type,
        shape,
        x1: number(0, "x1")?,
        y1: number(1, "y1")?,
        x2: number(2, "x2")?,
        y2: number(3, "y2")?,
        stroke: number(4, "stroke")?,
        fill: number(5, "fill")?,
        value: number(6, "value")?,
        rotation,
    })
}
