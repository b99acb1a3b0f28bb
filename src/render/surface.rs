//! Drawing surface abstraction.
//!
//! [`Surface`] is a small subset of a 2-D canvas context: a transform stack
//! plus three outline primitives. The geometry renderer only talks to this
//! trait, so the same drawing code feeds tests, terminal previews and any
//! other backend.

use serde::Serialize;

/// Outline primitive in the surface's current coordinate space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Primitive {
    /// Full ellipse
    Ellipse {
        /// Center x
        cx: f64,
        /// Center y
        cy: f64,
        /// Horizontal radius
        rx: f64,
        /// Vertical radius
        ry: f64,
    },
    /// Rectangle from a corner and a (possibly negative) size
    Rect {
        /// Corner x
        x: f64,
        /// Corner y
        y: f64,
        /// Width
        width: f64,
        /// Height
        height: f64,
    },
    /// Straight segment
    Line {
        /// Start x
        x1: f64,
        /// Start y
        y1: f64,
        /// End x
        x2: f64,
        /// End y
        y2: f64,
    },
}

/// 2-D affine transform in canvas order `[a c e; b d f]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Transform {
    /// Scale/rotate x
    pub a: f64,
    /// Skew/rotate y from x
    pub b: f64,
    /// Skew/rotate x from y
    pub c: f64,
    /// Scale/rotate y
    pub d: f64,
    /// Translate x
    pub e: f64,
    /// Translate y
    pub f: f64,
}

impl Default for Transform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Transform {
    /// The identity transform.
    pub const IDENTITY: Self = Self {
        a: 1.0,
        b: 0.0,
        c: 0.0,
        d: 1.0,
        e: 0.0,
        f: 0.0,
    };

    /// True when this is exactly the identity.
    pub fn is_identity(&self) -> bool {
        *self == Self::IDENTITY
    }

    /// Appends a translation, like `ctx.translate`.
    #[must_use]
    pub fn translated(self, dx: f64, dy: f64) -> Self {
        Self {
            e: self.a.mul_add(dx, self.c * dy) + self.e,
            f: self.b.mul_add(dx, self.d * dy) + self.f,
            ..self
        }
    }

    /// Appends a rotation, like `ctx.rotate`. Positive is clockwise on a y-down screen.
    #[must_use]
    pub fn rotated(self, radians: f64) -> Self {
        let (sin, cos) = radians.sin_cos();
        Self {
            a: self.a.mul_add(cos, self.c * sin),
            b: self.b.mul_add(cos, self.d * sin),
            c: self.c.mul_add(cos, -self.a * sin),
            d: self.d.mul_add(cos, -self.b * sin),
            ..self
        }
    }

    /// Maps a point from user space to surface space.
    pub fn apply(&self, x: f64, y: f64) -> (f64, f64) {
        (
            self.a.mul_add(x, self.c * y) + self.e,
            self.b.mul_add(x, self.d * y) + self.f,
        )
    }
}

/// Current transform plus the stack of saved ones.
#[derive(Debug, Clone, Default)]
pub struct TransformStack {
    current: Transform,
    saved: Vec<Transform>,
}

impl TransformStack {
    /// Active transform.
    pub fn current(&self) -> Transform {
        self.current
    }

    /// Pushes the active transform.
    pub fn save(&mut self) {
        self.saved.push(self.current);
    }

    /// Pops the last saved transform. A restore without a save is ignored.
    pub fn restore(&mut self) {
        if let Some(previous) = self.saved.pop() {
            self.current = previous;
        }
    }

    /// Applies a translation to the active transform.
    pub fn translate(&mut self, dx: f64, dy: f64) {
        self.current = self.current.translated(dx, dy);
    }

    /// Applies a rotation to the active transform.
    pub fn rotate(&mut self, radians: f64) {
        self.current = self.current.rotated(radians);
    }

    /// Resets to identity with nothing saved.
    pub fn reset(&mut self) {
        self.current = Transform::IDENTITY;
        self.saved.clear();
    }
}

/// Stateful 2-D drawing target.
pub trait Surface {
    /// Erases everything and resets the transform state.
    fn clear(&mut self);

    /// Saves the current transform.
    fn save(&mut self);

    /// Restores the last saved transform.
    fn restore(&mut self);

    /// Moves the origin.
    fn translate(&mut self, dx: f64, dy: f64);

    /// Rotates the coordinate space, clockwise on screen for positive angles.
    fn rotate(&mut self, radians: f64);

    /// Strokes a primitive under the current transform.
    fn draw(&mut self, primitive: Primitive);
}
