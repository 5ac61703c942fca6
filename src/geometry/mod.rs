//! Area geometry for maplight.
//!
//! This module defines the typed representation of declared image-map
//! geometry: integer screen-space coordinates, the closed set of shape
//! kinds, and the parser that turns a raw `coords` attribute string into
//! an ordered coordinate sequence.
//!
//! # Design Principles
//!
//! 1. **Permissive Construction**: the lenient parser mirrors the host
//!    document contract, where a malformed declaration degrades to a
//!    shape that draws nothing rather than a raised error.
//!
//! 2. **Closed Dispatch**: shape kinds are a closed enum with an explicit
//!    [`ShapeKind::Unknown`] variant, so unrecognized declarations take a
//!    deliberate no-op arm instead of falling through silently.

mod coord;
pub mod parse;
mod shape;

// Re-export core types for convenient access
pub use coord::Coord;
pub use shape::ShapeKind;
