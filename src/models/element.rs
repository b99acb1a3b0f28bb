//! Typed layout records: element kinds, shapes and the element itself.

use crate::models::symbols::{SymbolEntry, SymbolError, SymbolKind, SymbolTable};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of control an element represents on the board display.
///
/// Codes match the firmware's `GP_ELEMENT_*` enum. Only the button kinds and
/// the lever are drawn by the preview; the rest are reserved by the firmware
/// and pass through the codec untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ElementType {
    /// Reserved
    #[serde(rename = "GP_ELEMENT_WIDGET")]
    Widget,
    /// Reserved
    #[serde(rename = "GP_ELEMENT_SCREEN")]
    Screen,
    /// Face/function button
    #[serde(rename = "GP_ELEMENT_BTN_BUTTON")]
    BtnButton,
    /// Directional button
    #[serde(rename = "GP_ELEMENT_DIR_BUTTON")]
    DirButton,
    /// Button bound to a raw GPIO pin
    #[serde(rename = "GP_ELEMENT_PIN_BUTTON")]
    PinButton,
    /// Analog lever/stick
    #[serde(rename = "GP_ELEMENT_LEVER")]
    Lever,
    /// Reserved
    #[serde(rename = "GP_ELEMENT_LABEL")]
    Label,
    /// Reserved
    #[serde(rename = "GP_ELEMENT_SPRITE")]
    Sprite,
    /// Reserved
    #[serde(rename = "GP_ELEMENT_SHAPE")]
    Shape,
}

static ELEMENT_TYPES: SymbolTable<ElementType> = SymbolTable::new(
    SymbolKind::ElementType,
    &[
        SymbolEntry { name: "GP_ELEMENT_WIDGET", code: 0, member: ElementType::Widget },
        SymbolEntry { name: "GP_ELEMENT_SCREEN", code: 1, member: ElementType::Screen },
        SymbolEntry { name: "GP_ELEMENT_BTN_BUTTON", code: 2, member: ElementType::BtnButton },
        SymbolEntry { name: "GP_ELEMENT_DIR_BUTTON", code: 3, member: ElementType::DirButton },
        SymbolEntry { name: "GP_ELEMENT_PIN_BUTTON", code: 4, member: ElementType::PinButton },
        SymbolEntry { name: "GP_ELEMENT_LEVER", code: 5, member: ElementType::Lever },
        SymbolEntry { name: "GP_ELEMENT_LABEL", code: 6, member: ElementType::Label },
        SymbolEntry { name: "GP_ELEMENT_SPRITE", code: 7, member: ElementType::Sprite },
        SymbolEntry { name: "GP_ELEMENT_SHAPE", code: 8, member: ElementType::Shape },
    ],
);

impl ElementType {
    /// Symbol table for `GP_ELEMENT_*`.
    pub fn table() -> &'static SymbolTable<Self> {
        &ELEMENT_TYPES
    }

    /// Resolves a `GP_ELEMENT_*` name.
    pub fn from_symbol(name: &str) -> Result<Self, SymbolError> {
        ELEMENT_TYPES.by_name(name)
    }

    /// Resolves a firmware code.
    pub fn from_code(code: i64) -> Result<Self, SymbolError> {
        ELEMENT_TYPES.by_code(code)
    }

    /// The `GP_ELEMENT_*` name.
    pub fn symbol(self) -> &'static str {
        ELEMENT_TYPES.name_of(self)
    }

    /// The firmware code.
    pub fn code(self) -> u8 {
        ELEMENT_TYPES.code_of(self)
    }

    /// Whether the preview draws anything for this kind.
    pub const fn is_drawable(self) -> bool {
        matches!(
            self,
            Self::BtnButton | Self::DirButton | Self::PinButton | Self::Lever
        )
    }
}

impl fmt::Display for ElementType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Drawable outline of an element.
///
/// How `x1,y1,x2,y2` are read depends on the shape, see [`Element`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ElementShape {
    /// Center `(x1,y1)`, radii `(x2,y2)`
    #[serde(rename = "GP_SHAPE_ELLIPSE")]
    Ellipse,
    /// Opposite corners `(x1,y1)` and `(x2,y2)`
    #[serde(rename = "GP_SHAPE_SQUARE")]
    Square,
    /// Endpoints `(x1,y1)` and `(x2,y2)`
    #[serde(rename = "GP_SHAPE_LINE")]
    Line,
    /// Reserved, not drawn
    #[serde(rename = "GP_SHAPE_POLYGON")]
    Polygon,
    /// Reserved, not drawn
    #[serde(rename = "GP_SHAPE_ARC")]
    Arc,
}

static ELEMENT_SHAPES: SymbolTable<ElementShape> = SymbolTable::new(
    SymbolKind::ElementShape,
    &[
        SymbolEntry { name: "GP_SHAPE_ELLIPSE", code: 0, member: ElementShape::Ellipse },
        SymbolEntry { name: "GP_SHAPE_SQUARE", code: 1, member: ElementShape::Square },
        SymbolEntry { name: "GP_SHAPE_LINE", code: 2, member: ElementShape::Line },
        SymbolEntry { name: "GP_SHAPE_POLYGON", code: 3, member: ElementShape::Polygon },
        SymbolEntry { name: "GP_SHAPE_ARC", code: 4, member: ElementShape::Arc },
    ],
);

impl ElementShape {
    /// Symbol table for `GP_SHAPE_*`.
    pub fn table() -> &'static SymbolTable<Self> {
        &ELEMENT_SHAPES
    }

    /// Resolves a `GP_SHAPE_*` name.
    pub fn from_symbol(name: &str) -> Result<Self, SymbolError> {
        ELEMENT_SHAPES.by_name(name)
    }

    /// Resolves a firmware code.
    pub fn from_code(code: i64) -> Result<Self, SymbolError> {
        ELEMENT_SHAPES.by_code(code)
    }

    /// The `GP_SHAPE_*` name.
    pub fn symbol(self) -> &'static str {
        ELEMENT_SHAPES.name_of(self)
    }

    /// The firmware code.
    pub fn code(self) -> u8 {
        ELEMENT_SHAPES.code_of(self)
    }

    /// Whether the preview has an outline for this shape.
    pub const fn is_drawable(self) -> bool {
        !matches!(self, Self::Polygon | Self::Arc)
    }
}

impl fmt::Display for ElementShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// One record of a board layout.
///
/// Geometry fields by shape:
/// - ellipse: center `(x1,y1)`, radii `(x2,y2)`
/// - square: opposite corners `(x1,y1)` and `(x2,y2)`
/// - line: endpoints `(x1,y1)` and `(x2,y2)`
///
/// `stroke`, `fill` and `value` are passed to the firmware as-is.
/// `rotation` only affects squares. `None` and `Some(0)` compare equal and
/// serialize identically.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Element {
    /// Control kind
    #[serde(rename = "type")]
    pub element_type: ElementType,
    /// Outline
    pub shape: ElementShape,
    /// First x coordinate
    pub x1: i32,
    /// First y coordinate
    pub y1: i32,
    /// Second x coordinate (or x radius)
    pub x2: i32,
    /// Second y coordinate (or y radius)
    pub y2: i32,
    /// Stroke attribute
    pub stroke: i32,
    /// Fill attribute
    pub fill: i32,
    /// Payload, usually a logical button index
    pub value: i32,
    /// Rotation in degrees, clockwise on screen
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rotation: Option<i32>,
}

impl Default for Element {
    /// Template used when adding a new element.
    fn default() -> Self {
        Self {
            element_type: ElementType::PinButton,
            shape: ElementShape::Ellipse,
            x1: 4,
            y1: 4,
            x2: 4,
            y2: 4,
            stroke: 1,
            fill: 1,
            value: 0,
            rotation: None,
        }
    }
}

impl PartialEq for Element {
    fn eq(&self, other: &Self) -> bool {
        self.element_type == other.element_type
            && self.shape == other.shape
            && self.x1 == other.x1
            && self.y1 == other.y1
            && self.x2 == other.x2
            && self.y2 == other.y2
            && self.stroke == other.stroke
            && self.fill == other.fill
            && self.value == other.value
            && self.effective_rotation() == other.effective_rotation()
    }
}

impl Eq for Element {}

impl Element {
    /// Creates an element with zeroed attributes and no rotation.
    #[must_use]
    pub const fn new(
        element_type: ElementType,
        shape: ElementShape,
        x1: i32,
        y1: i32,
        x2: i32,
        y2: i32,
    ) -> Self {
        Self {
            element_type,
            shape,
            x1,
            y1,
            x2,
            y2,
            stroke: 0,
            fill: 0,
            value: 0,
            rotation: None,
        }
    }

    /// Sets stroke and fill.
    #[must_use]
    pub const fn with_style(mut self, stroke: i32, fill: i32) -> Self {
        self.stroke = stroke;
        self.fill = fill;
        self
    }

    /// Sets the payload value.
    #[must_use]
    pub const fn with_value(mut self, value: i32) -> Self {
        self.value = value;
        self
    }

    /// Sets the rotation in degrees.
    #[must_use]
    pub const fn with_rotation(mut self, degrees: i32) -> Self {
        self.rotation = Some(degrees);
        self
    }

    /// Rotation with "absent" folded into zero.
    pub fn effective_rotation(&self) -> i32 {
        self.rotation.unwrap_or(0)
    }

    /// Rotation that needs to be written out, if any.
    pub fn emitted_rotation(&self) -> Option<i32> {
        self.rotation.filter(|degrees| *degrees != 0)
    }
}

/// Optional per-field overrides for producing an edited copy of an element.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ElementPatch {
    /// New kind
    pub element_type: Option<ElementType>,
    /// New shape
    pub shape: Option<ElementShape>,
    /// New x1
    pub x1: Option<i32>,
    /// New y1
    pub y1: Option<i32>,
    /// New x2
    pub x2: Option<i32>,
    /// New y2
    pub y2: Option<i32>,
    /// New stroke
    pub stroke: Option<i32>,
    /// New fill
    pub fill: Option<i32>,
    /// New value
    pub value: Option<i32>,
    /// New rotation; zero clears it
    pub rotation: Option<i32>,
}

impl ElementPatch {
    /// True when the patch would not change anything.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Returns a copy of `element` with the patched fields replaced.
    #[must_use]
    pub fn apply(&self, element: &Element) -> Element {
        Element {
            element_type: self.element_type.unwrap_or(element.element_type),
            shape: self.shape.unwrap_or(element.shape),
            x1: self.x1.unwrap_or(element.x1),
            y1: self.y1.unwrap_or(element.y1),
            x2: self.x2.unwrap_or(element.x2),
            y2: self.y2.unwrap_or(element.y2),
            stroke: self.stroke.unwrap_or(element.stroke),
            fill: self.fill.unwrap_or(element.fill),
            value: self.value.unwrap_or(element.value),
            rotation: match self.rotation {
                Some(0) => None,
                Some(degrees) => Some(degrees),
                None => element.rotation,
            },
        }
    }
}
