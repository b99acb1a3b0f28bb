//! Surface that records what was drawn.

use crate::render::surface::{Primitive, Surface, Transform, TransformStack};
use serde::Serialize;

/// A primitive and the transform that was active when it was drawn.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DrawnPrimitive {
    /// Primitive in user space
    pub primitive: Primitive,
    /// Transform from user space to surface space
    pub transform: Transform,
}

/// Keeps every draw call since the last clear.
#[derive(Debug, Clone, Default)]
pub struct RecordingSurface {
    stack: TransformStack,
    drawn: Vec<DrawnPrimitive>,
    clears: usize,
}

impl RecordingSurface {
    /// Creates an empty surface.
    pub fn new() -> Self {
        Self::default()
    }

    /// Primitives drawn since the last clear.
    pub fn drawn(&self) -> &[DrawnPrimitive] {
        &self.drawn
    }

    /// How many times the surface was cleared.
    pub fn clear_count(&self) -> usize {
        self.clears
    }

    /// Active transform.
    pub fn current_transform(&self) -> Transform {
        self.stack.current()
    }
}

impl Surface for RecordingSurface {
    fn clear(&mut self) {
        self.stack.reset();
        self.drawn.clear();
        self.clears += 1;
    }

    fn save(&mut self) {
        self.stack.save();
    }

    fn restore(&mut self) {
        self.stack.restore();
    }

    fn translate(&mut self, dx: f64, dy: f64) {
        self.stack.translate(dx, dy);
    }

    fn rotate(&mut self, radians: f64) {
        self.stack.rotate(radians);
    }

    fn draw(&mut self, primitive: Primitive) {
        self.drawn.push(DrawnPrimitive {
            primitive,
            transform: self.stack.current(),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_records_transform_per_call() {
        let mut surface = RecordingSurface::new();
        let line = Primitive::Line {
            x1: 0.0,
            y1: 0.0,
            x2: 1.0,
            y2: 0.0,
        };

        surface.draw(line);
        surface.save();
        surface.translate(3.0, 4.0);
        surface.draw(line);
        surface.restore();

        assert_eq!(surface.drawn().len(), 2);
        assert!(surface.drawn()[0].transform.is_identity());
        assert_eq!(surface.drawn()[1].transform.apply(0.0, 0.0), (3.0, 4.0));
    }

    #[test]
    fn test_clear_resets_everything() {
        let mut surface = RecordingSurface::new();
        surface.translate(3.0, 4.0);
        surface.draw(Primitive::Rect {
            x: 0.0,
            y: 0.0,
            width: 1.0,
            height: 1.0,
        });
        surface.clear();

        assert!(surface.drawn().is_empty());
        assert!(surface.current_transform().is_identity());
        assert_eq!(surface.clear_count(), 1);
    }
}
