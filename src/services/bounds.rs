//! Display bounds checks for layouts.
//!
//! Checks only report. They never drop or change elements.

use crate::models::{Layout, Side};
use crate::render::geometry::{element_primitives, Rotation};
use crate::render::{PlacedPrimitive, Primitive, Transform};
use serde::Serialize;
use std::fmt;

/// One element that does not fit on the display.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BoundsWarning {
    /// Side holding the element
    pub side: Side,
    /// Position of the element within its side
    pub index: usize,
    /// What is wrong
    pub message: String,
}

impl fmt::Display for BoundsWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "side {} element {}: {}", self.side, self.index, self.message)
    }
}

/// Axis-aligned extent in display pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Extent {
    min_x: f64,
    min_y: f64,
    max_x: f64,
    max_y: f64,
}

impl Extent {
    fn of_points(points: &[(f64, f64)]) -> Self {
        points.iter().fold(
            Self {
                min_x: f64::INFINITY,
                min_y: f64::INFINITY,
                max_x: f64::NEG_INFINITY,
                max_y: f64::NEG_INFINITY,
            },
            |extent, (x, y)| Self {
                min_x: extent.min_x.min(*x),
                min_y: extent.min_y.min(*y),
                max_x: extent.max_x.max(*x),
                max_y: extent.max_y.max(*y),
            },
        )
    }

    fn fits(&self, width: u32, height: u32) -> bool {
        let max_x = f64::from(width) - 1.0;
        let max_y = f64::from(height) - 1.0;
        self.min_x >= 0.0 && self.min_y >= 0.0 && self.max_x <= max_x && self.max_y <= max_y
    }
}

/// Checks every drawable element of a layout against a `width`×`height` display.
///
/// Elements that draw nothing are never reported.
pub fn check_bounds(layout: &Layout, width: u32, height: u32) -> Vec<BoundsWarning> {
    let mut warnings = Vec::new();

    for (side, index, element) in layout.entries() {
        for placed in element_primitives(element) {
            if let Some(message) = check_primitive(&placed, width, height) {
                warnings.push(BoundsWarning {
                    side,
                    index,
                    message,
                });
                // One warning per element is enough
                break;
            }
        }
    }

    warnings
}

fn check_primitive(placed: &PlacedPrimitive, width: u32, height: u32) -> Option<String> {
    if let Primitive::Ellipse { rx, ry, .. } = placed.primitive {
        if rx < 0.0 || ry < 0.0 {
            return Some(format!("negative ellipse radius ({rx}, {ry})"));
        }
    }

    let extent = Extent::of_points(&outline_points(placed));
    if extent.fits(width, height) {
        return None;
    }

    Some(format!(
        "extends to ({:.0}, {:.0})-({:.0}, {:.0}), outside the {width}x{height} display",
        extent.min_x, extent.min_y, extent.max_x, extent.max_y
    ))
}

/// Extreme points of a primitive in display space.
fn outline_points(placed: &PlacedPrimitive) -> Vec<(f64, f64)> {
    let transform = placed
        .rotation
        .map_or(Transform::IDENTITY, |Rotation { cx, cy, degrees }| {
            Transform::IDENTITY
                .translated(cx, cy)
                .rotated(f64::from(degrees).to_radians())
        });

    let points = match placed.primitive {
        Primitive::Ellipse { cx, cy, rx, ry } => vec![(cx - rx, cy - ry), (cx + rx, cy + ry)],
        Primitive::Rect {
            x,
            y,
            width,
            height,
        } => vec![
            (x, y),
            (x + width, y),
            (x + width, y + height),
            (x, y + height),
        ],
        Primitive::Line { x1, y1, x2, y2 } => vec![(x1, y1), (x2, y2)],
    };

    points
        .into_iter()
        .map(|(x, y)| transform.apply(x, y))
        .collect()
}
