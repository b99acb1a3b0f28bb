//! Board layout: the two element sequences of a board header.
//!
//! Edits never mutate a layout in place. Each operation takes `&self` and
//! returns the next layout value, which the caller serializes or renders.

use crate::models::element::{Element, ElementPatch};
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One of the two element sequences.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    /// First macro block (`DEFAULT_BOARD_LAYOUT_A`)
    A,
    /// Second macro block (`DEFAULT_BOARD_LAYOUT_B`)
    B,
}

impl Side {
    /// Both sides in serialization order.
    pub const BOTH: [Self; 2] = [Self::A, Self::B];
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::A => write!(f, "a"),
            Self::B => write!(f, "b"),
        }
    }
}

impl FromStr for Side {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "a" => Ok(Self::A),
            "b" => Ok(Self::B),
            other => anyhow::bail!("Invalid side '{other}'. Must be 'a' or 'b'"),
        }
    }
}

/// A complete board layout.
///
/// Order within each sequence is the declaration order in the header and is
/// preserved by serialization.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Layout {
    /// Elements of the first block
    pub a: Vec<Element>,
    /// Elements of the second block
    pub b: Vec<Element>,
}

impl Layout {
    /// Creates a layout from two sequences.
    #[must_use]
    pub fn new(a: Vec<Element>, b: Vec<Element>) -> Self {
        Self { a, b }
    }

    /// Elements of one side.
    #[must_use]
    pub fn side(&self, side: Side) -> &[Element] {
        match side {
            Side::A => &self.a,
            Side::B => &self.b,
        }
    }

    /// Total number of elements on both sides.
    #[must_use]
    pub fn len(&self) -> usize {
        self.a.len() + self.b.len()
    }

    /// True when both sides are empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.a.is_empty() && self.b.is_empty()
    }

    /// All elements, side A first.
    pub fn iter(&self) -> impl Iterator<Item = &Element> {
        self.a.iter().chain(self.b.iter())
    }

    /// All elements with their side and position, side A first.
    pub fn entries(&self) -> impl Iterator<Item = (Side, usize, &Element)> {
        Side::BOTH.into_iter().flat_map(move |side| {
            self.side(side)
                .iter()
                .enumerate()
                .map(move |(index, element)| (side, index, element))
        })
    }

    /// Element at `index` on `side`.
    #[must_use]
    pub fn get(&self, side: Side, index: usize) -> Option<&Element> {
        self.side(side).get(index)
    }

    /// Returns a layout with `side` replaced.
    fn with_side(&self, side: Side, elements: Vec<Element>) -> Self {
        match side {
            Side::A => Self::new(elements, self.b.clone()),
            Side::B => Self::new(self.a.clone(), elements),
        }
    }

    fn check_index(&self, side: Side, index: usize) -> Result<()> {
        let len = self.side(side).len();
        if index >= len {
            anyhow::bail!(
                "Element index {index} is out of range for side {side} ({len} element{})",
                if len == 1 { "" } else { "s" }
            );
        }
        Ok(())
    }

    /// Returns a layout with `element` appended to `side`.
    #[must_use]
    pub fn with_element_added(&self, side: Side, element: Element) -> Self {
        let mut elements = self.side(side).to_vec();
        elements.push(element);
        self.with_side(side, elements)
    }

    /// Returns a layout with the element at `index` replaced.
    pub fn with_element_replaced(&self, side: Side, index: usize, element: Element) -> Result<Self> {
        self.check_index(side, index)?;
        let elements = self
            .side(side)
            .iter()
            .enumerate()
            .map(|(i, existing)| if i == index { element } else { *existing })
            .collect();
        Ok(self.with_side(side, elements))
    }

    /// Returns a layout with the element at `index` patched.
    pub fn with_element_patched(&self, side: Side, index: usize, patch: &ElementPatch) -> Result<Self> {
        self.check_index(side, index)?;
        let patched = patch.apply(&self.side(side)[index]);
        self.with_element_replaced(side, index, patched)
    }

    /// Returns a layout without the element at `index`.
    pub fn with_element_removed(&self, side: Side, index: usize) -> Result<Self> {
        self.check_index(side, index)?;
        let elements = self
            .side(side)
            .iter()
            .enumerate()
            .filter(|(i, _)| *i != index)
            .map(|(_, element)| *element)
            .collect();
        Ok(self.with_side(side, elements))
    }
}
