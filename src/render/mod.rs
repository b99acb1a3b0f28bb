//! Layout preview rendering.
//!
//! [`geometry`] maps elements to primitives and drives any [`Surface`].
//! [`RecordingSurface`] keeps the draw calls for inspection and tests, and
//! [`BitmapSurface`] rasterizes them onto the 128×64 board display for
//! terminal previews.

pub mod bitmap;
pub mod geometry;
pub mod recording;
pub mod surface;

pub use bitmap::{BitmapSurface, PreviewStyle};
pub use geometry::{element_primitives, render, render_element, PlacedPrimitive};
pub use recording::{DrawnPrimitive, RecordingSurface};
pub use surface::{Primitive, Surface, Transform};
