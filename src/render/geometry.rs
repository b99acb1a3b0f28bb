//! Mapping layout elements to drawing primitives.
//!
//! Interpretation rules:
//! - ellipse: center `(x1,y1)`, radii `(x2,y2)`
//! - square: corners `(x1,y1)`/`(x2,y2)`, optionally rotated about its center
//! - line: `(x1,y1)` to `(x2,y2)`
//! - polygon, arc: nothing yet
//!
//! Buttons draw their outline once. A lever draws it twice, the second time
//! with `x2`/`y2` scaled down to show the stick's inner travel.

use crate::constants::LEVER_INNER_SCALE;
use crate::models::{Element, ElementShape, ElementType, Layout};
use crate::render::surface::{Primitive, Surface};
use serde::Serialize;

/// Element geometry in floating point, after any per-type scaling.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Outline {
    shape: ElementShape,
    x1: f64,
    y1: f64,
    x2: f64,
    y2: f64,
    rotation: i32,
}

impl Outline {
    fn of(element: &Element) -> Self {
        Self {
            shape: element.shape,
            x1: f64::from(element.x1),
            y1: f64::from(element.y1),
            x2: f64::from(element.x2),
            y2: f64::from(element.y2),
            rotation: element.effective_rotation(),
        }
    }

    /// Copy with the second point scaled, first point unchanged.
    fn scaled_second_point(self, factor: f64) -> Self {
        Self {
            x2: self.x2 * factor,
            y2: self.y2 * factor,
            ..self
        }
    }
}

/// A primitive together with the rotation it is drawn under.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PlacedPrimitive {
    /// Primitive in its own coordinate space
    pub primitive: Primitive,
    /// Rotation center and angle in degrees, when rotated
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rotation: Option<Rotation>,
}

/// Rotation of a primitive about a point.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Rotation {
    /// Center x
    pub cx: f64,
    /// Center y
    pub cy: f64,
    /// Angle in degrees, clockwise on screen
    pub degrees: i32,
}

/// Primitives an element draws, in drawing order.
///
/// Reserved element types and reserved shapes yield nothing.
pub fn element_primitives(element: &Element) -> Vec<PlacedPrimitive> {
    let outline = Outline::of(element);
    let outlines = match element.element_type {
        ElementType::BtnButton | ElementType::DirButton | ElementType::PinButton => vec![outline],
        ElementType::Lever => vec![outline, outline.scaled_second_point(LEVER_INNER_SCALE)],
        ElementType::Widget
        | ElementType::Screen
        | ElementType::Label
        | ElementType::Sprite
        | ElementType::Shape => Vec::new(),
    };

    outlines.into_iter().filter_map(place).collect()
}

fn place(outline: Outline) -> Option<PlacedPrimitive> {
    let Outline {
        shape,
        x1,
        y1,
        x2,
        y2,
        rotation,
    } = outline;

    match shape {
        ElementShape::Ellipse => Some(PlacedPrimitive {
            primitive: Primitive::Ellipse {
                cx: x1,
                cy: y1,
                rx: x2,
                ry: y2,
            },
            rotation: None,
        }),
        ElementShape::Square if rotation != 0 => {
            let width = x2 - x1;
            let height = y2 - y1;
            Some(PlacedPrimitive {
                primitive: Primitive::Rect {
                    x: -width / 2.0,
                    y: -height / 2.0,
                    width,
                    height,
                },
                rotation: Some(Rotation {
                    cx: (x1 + x2) / 2.0,
                    cy: (y1 + y2) / 2.0,
                    degrees: rotation,
                }),
            })
        }
        ElementShape::Square => Some(PlacedPrimitive {
            primitive: Primitive::Rect {
                x: x1,
                y: y1,
                width: x2 - x1,
                height: y2 - y1,
            },
            rotation: None,
        }),
        ElementShape::Line => Some(PlacedPrimitive {
            primitive: Primitive::Line { x1, y1, x2, y2 },
            rotation: None,
        }),
        ElementShape::Polygon | ElementShape::Arc => None,
    }
}

/// Draws one element onto the surface.
pub fn render_element<S: Surface + ?Sized>(element: &Element, surface: &mut S) {
    for placed in element_primitives(element) {
        match placed.rotation {
            Some(rotation) => {
                surface.save();
                surface.translate(rotation.cx, rotation.cy);
                surface.rotate(f64::from(rotation.degrees).to_radians());
                surface.draw(placed.primitive);
                surface.restore();
            }
            None => surface.draw(placed.primitive),
        }
    }
}

/// Clears the surface and draws every element, side A first.
pub fn render<S: Surface + ?Sized>(layout: &Layout, surface: &mut S) {
    surface.clear();
    for element in layout.iter() {
        render_element(element, surface);
    }
}
