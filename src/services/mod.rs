//! Service layer for business logic.
//!
//! This module contains services that sit between the parser and the
//! command line: header file I/O and display bounds checks.

pub mod bounds;
pub mod layouts;

// Re-export commonly used types and functions
pub use bounds::{check_bounds, BoundsWarning};
pub use layouts::LayoutService;
