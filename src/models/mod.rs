//! Data models for board layouts.
//!
//! This module contains the typed records produced by the parser and consumed
//! by the serializer and the preview renderer. Models are plain values with no
//! I/O.

pub mod element;
pub mod layout;
pub mod symbols;

// Re-export all model types
pub use element::{Element, ElementPatch, ElementShape, ElementType};
pub use layout::{Layout, Side};
pub use symbols::{SymbolError, SymbolKind};
