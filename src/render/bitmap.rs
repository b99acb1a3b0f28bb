//! Monochrome raster surface for terminal previews.
//!
//! Primitives are rasterized as 1-pixel outlines the way the board's OLED
//! draws them: ellipses as closed polylines, rectangles as four edges, lines
//! with Bresenham. Segments are clipped to the canvas before they are
//! walked, so off-screen geometry costs nothing however far it reaches.

// Allow intentional casts between pixel coordinates and floats
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_precision_loss)]

use crate::render::surface::{Primitive, Surface, Transform, TransformStack};
use serde::{Deserialize, Serialize};
use std::f64::consts::TAU;

/// Number of segments used to approximate an ellipse.
const ELLIPSE_SEGMENTS: usize = 64;

/// Inset keeping clipped endpoints from rounding onto a pixel past the edge.
const CLIP_INSET: f64 = 1e-6;

/// Text style for printing a bitmap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PreviewStyle {
    /// Unicode half blocks, two pixel rows per text line
    #[default]
    Blocks,
    /// `#` for set pixels, `.` for clear ones
    Ascii,
}

impl PreviewStyle {
    /// Name as written in the config file.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Blocks => "blocks",
            Self::Ascii => "ascii",
        }
    }
}

/// Fixed-size 1-bit canvas.
#[derive(Debug, Clone)]
pub struct BitmapSurface {
    width: u32,
    height: u32,
    pixels: Vec<bool>,
    stack: TransformStack,
}

impl BitmapSurface {
    /// Creates a cleared canvas.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![false; (width as usize) * (height as usize)],
            stack: TransformStack::default(),
        }
    }

    /// Canvas width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Canvas height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Whether the pixel is lit. Out-of-range pixels are never lit.
    pub fn is_set(&self, x: i64, y: i64) -> bool {
        self.index(x, y).is_some_and(|i| self.pixels[i])
    }

    /// Number of lit pixels.
    pub fn lit_count(&self) -> usize {
        self.pixels.iter().filter(|p| **p).count()
    }

    fn index(&self, x: i64, y: i64) -> Option<usize> {
        if x < 0 || y < 0 || x >= i64::from(self.width) || y >= i64::from(self.height) {
            return None;
        }
        Some(y as usize * self.width as usize + x as usize)
    }

    fn plot(&mut self, x: i64, y: i64) {
        if let Some(i) = self.index(x, y) {
            self.pixels[i] = true;
        }
    }

    /// Bresenham between two surface-space points, clipped to the canvas.
    fn plot_line(&mut self, from: (f64, f64), to: (f64, f64)) {
        let Some((from, to)) = self.clip_segment(from, to) else {
            return;
        };
        let (mut x0, mut y0) = (from.0.round() as i64, from.1.round() as i64);
        let (x1, y1) = (to.0.round() as i64, to.1.round() as i64);

        let dx = (x1 - x0).abs();
        let dy = -(y1 - y0).abs();
        let sx = if x0 < x1 { 1 } else { -1 };
        let sy = if y0 < y1 { 1 } else { -1 };
        let mut err = dx + dy;

        loop {
            self.plot(x0, y0);
            if x0 == x1 && y0 == y1 {
                break;
            }
            let e2 = 2 * err;
            if e2 >= dy {
                err += dy;
                x0 += sx;
            }
            if e2 <= dx {
                err += dx;
                y0 += sy;
            }
        }
    }

    /// Liang-Barsky clip against the area whose points round onto a pixel.
    fn clip_segment(
        &self,
        from: (f64, f64),
        to: (f64, f64),
    ) -> Option<((f64, f64), (f64, f64))> {
        if self.width == 0 || self.height == 0 {
            return None;
        }
        let (x_min, y_min) = (CLIP_INSET - 0.5, CLIP_INSET - 0.5);
        let x_max = f64::from(self.width) - 0.5 - CLIP_INSET;
        let y_max = f64::from(self.height) - 0.5 - CLIP_INSET;

        let (dx, dy) = (to.0 - from.0, to.1 - from.1);
        let (mut enter, mut exit) = (0.0_f64, 1.0_f64);

        for (p, q) in [
            (-dx, from.0 - x_min),
            (dx, x_max - from.0),
            (-dy, from.1 - y_min),
            (dy, y_max - from.1),
        ] {
            if p.abs() < f64::EPSILON {
                // Parallel to this edge
                if q < 0.0 {
                    return None;
                }
                continue;
            }
            let t = q / p;
            if p < 0.0 {
                enter = enter.max(t);
            } else {
                exit = exit.min(t);
            }
            if enter > exit {
                return None;
            }
        }

        Some((
            (dx.mul_add(enter, from.0), dy.mul_add(enter, from.1)),
            (dx.mul_add(exit, from.0), dy.mul_add(exit, from.1)),
        ))
    }

    /// Strokes a closed polygon given in user space.
    fn plot_closed(&mut self, transform: Transform, points: &[(f64, f64)]) {
        let mapped: Vec<_> = points.iter().map(|(x, y)| transform.apply(*x, *y)).collect();
        for (i, from) in mapped.iter().enumerate() {
            let to = mapped[(i + 1) % mapped.len()];
            self.plot_line(*from, to);
        }
    }

    /// Renders the canvas as text.
    pub fn to_text(&self, style: PreviewStyle) -> String {
        let mut lines = Vec::new();
        let (width, height) = (i64::from(self.width), i64::from(self.height));

        match style {
            PreviewStyle::Ascii => {
                for y in 0..height {
                    lines.push(
                        (0..width)
                            .map(|x| if self.is_set(x, y) { '#' } else { '.' })
                            .collect::<String>(),
                    );
                }
            }
            PreviewStyle::Blocks => {
                for y in (0..height).step_by(2) {
                    lines.push(
                        (0..width)
                            .map(|x| match (self.is_set(x, y), self.is_set(x, y + 1)) {
                                (true, true) => '█',
                                (true, false) => '▀',
                                (false, true) => '▄',
                                (false, false) => ' ',
                            })
                            .collect::<String>(),
                    );
                }
            }
        }

        lines.join("\n")
    }
}

impl Surface for BitmapSurface {
    fn clear(&mut self) {
        self.pixels.fill(false);
        self.stack.reset();
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
        let transform = self.stack.current();
        match primitive {
            Primitive::Ellipse { cx, cy, rx, ry } => {
                // Negative radii are invalid for a canvas ellipse
                if rx < 0.0 || ry < 0.0 {
                    return;
                }
                let points: Vec<_> = (0..ELLIPSE_SEGMENTS)
                    .map(|i| {
                        let angle = TAU * i as f64 / ELLIPSE_SEGMENTS as f64;
                        (rx.mul_add(angle.cos(), cx), ry.mul_add(angle.sin(), cy))
                    })
                    .collect();
                self.plot_closed(transform, &points);
            }
            Primitive::Rect {
                x,
                y,
                width,
                height,
            } => {
                let points = [
                    (x, y),
                    (x + width, y),
                    (x + width, y + height),
                    (x, y + height),
                ];
                self.plot_closed(transform, &points);
            }
            Primitive::Line { x1, y1, x2, y2 } => {
                self.plot_line(transform.apply(x1, y1), transform.apply(x2, y2));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_horizontal_line() {
        let mut surface = BitmapSurface::new(16, 8);
        surface.draw(Primitive::Line {
            x1: 2.0,
            y1: 3.0,
            x2: 6.0,
            y2: 3.0,
        });

        assert_eq!(surface.lit_count(), 5);
        assert!(surface.is_set(2, 3));
        assert!(surface.is_set(6, 3));
        assert!(!surface.is_set(7, 3));
    }

    #[test]
    fn test_rect_outline() {
        let mut surface = BitmapSurface::new(16, 16);
        surface.draw(Primitive::Rect {
            x: 1.0,
            y: 1.0,
            width: 4.0,
            height: 4.0,
        });

        // 5x5 outline has 16 pixels
        assert_eq!(surface.lit_count(), 16);
        assert!(surface.is_set(1, 1));
        assert!(surface.is_set(5, 5));
        assert!(!surface.is_set(3, 3));
    }

    #[test]
    fn test_ellipse_touches_extremes() {
        let mut surface = BitmapSurface::new(32, 32);
        surface.draw(Primitive::Ellipse {
            cx: 10.0,
            cy: 10.0,
            rx: 6.0,
            ry: 4.0,
        });

        assert!(surface.is_set(16, 10));
        assert!(surface.is_set(4, 10));
        assert!(surface.is_set(10, 6));
        assert!(surface.is_set(10, 14));
        assert!(!surface.is_set(10, 10));
    }

    #[test]
    fn test_negative_radius_draws_nothing() {
        let mut surface = BitmapSurface::new(8, 8);
        surface.draw(Primitive::Ellipse {
            cx: 4.0,
            cy: 4.0,
            rx: -1.0,
            ry: 2.0,
        });
        assert_eq!(surface.lit_count(), 0);
    }

    #[test]
    fn test_clipping() {
        let mut surface = BitmapSurface::new(4, 4);
        surface.draw(Primitive::Line {
            x1: -10.0,
            y1: 1.0,
            x2: 10.0,
            y2: 1.0,
        });
        assert_eq!(surface.lit_count(), 4);
        assert!(!surface.is_set(-1, 1));
    }

    #[test]
    fn test_segment_outside_canvas_draws_nothing() {
        let mut surface = BitmapSurface::new(8, 8);
        surface.draw(Primitive::Line {
            x1: -20.0,
            y1: -5.0,
            x2: 20.0,
            y2: -1.0,
        });
        assert_eq!(surface.lit_count(), 0);
    }

    #[test]
    fn test_huge_line_is_clipped() {
        let mut surface = BitmapSurface::new(128, 64);
        surface.draw(Primitive::Line {
            x1: -2_000_000_000.0,
            y1: 10.0,
            x2: 2_000_000_000.0,
            y2: 10.0,
        });

        assert_eq!(surface.lit_count(), 128);
        assert!(surface.is_set(0, 10));
        assert!(surface.is_set(127, 10));
    }

    #[test]
    fn test_huge_diagonal_keeps_slope() {
        let mut surface = BitmapSurface::new(64, 64);
        surface.draw(Primitive::Line {
            x1: -1_000_000_000.0,
            y1: -1_000_000_000.0,
            x2: 1_000_000_000.0,
            y2: 1_000_000_000.0,
        });

        assert_eq!(surface.lit_count(), 64);
        assert!(surface.is_set(0, 0));
        assert!(surface.is_set(31, 31));
        assert!(surface.is_set(63, 63));
    }

    #[test]
    fn test_huge_ellipse_is_clipped() {
        let mut surface = BitmapSurface::new(128, 64);
        surface.draw(Primitive::Ellipse {
            cx: 64.0,
            cy: 32.0,
            rx: 2_000_000_000.0,
            ry: 2_000_000_000.0,
        });
        assert_eq!(surface.lit_count(), 0);

        // The leftmost vertex lands on the canvas
        surface.draw(Primitive::Ellipse {
            cx: 2_000_000_010.0,
            cy: 32.0,
            rx: 2_000_000_000.0,
            ry: 2_000_000_000.0,
        });
        assert!(surface.is_set(10, 32));
    }

    #[test]
    fn test_transform_applies() {
        let mut surface = BitmapSurface::new(16, 16);
        surface.translate(8.0, 8.0);
        surface.rotate(90f64.to_radians());
        surface.draw(Primitive::Line {
            x1: 0.0,
            y1: 0.0,
            x2: 4.0,
            y2: 0.0,
        });

        // A quarter turn points the line down the screen
        assert!(surface.is_set(8, 8));
        assert!(surface.is_set(8, 12));
        assert!(!surface.is_set(12, 8));
    }

    #[test]
    fn test_clear() {
        let mut surface = BitmapSurface::new(4, 4);
        surface.translate(1.0, 1.0);
        surface.draw(Primitive::Line {
            x1: 0.0,
            y1: 0.0,
            x2: 1.0,
            y2: 0.0,
        });
        surface.clear();
        assert_eq!(surface.lit_count(), 0);

        surface.draw(Primitive::Line {
            x1: 0.0,
            y1: 0.0,
            x2: 0.0,
            y2: 0.0,
        });
        assert!(surface.is_set(0, 0));
    }

    #[test]
    fn test_text_styles() {
        let mut surface = BitmapSurface::new(3, 2);
        surface.draw(Primitive::Line {
            x1: 0.0,
            y1: 0.0,
            x2: 0.0,
            y2: 1.0,
        });
        surface.draw(Primitive::Line {
            x1: 2.0,
            y1: 1.0,
            x2: 2.0,
            y2: 1.0,
        });

        assert_eq!(surface.to_text(PreviewStyle::Ascii), "#..\n#.#");
        assert_eq!(surface.to_text(PreviewStyle::Blocks), "█ ▄");
    }
}
