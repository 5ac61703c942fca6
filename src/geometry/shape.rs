//! The closed set of shape kinds an area declaration can carry.

use serde::{Deserialize, Serialize};
use std::fmt;

/// How an area's coordinate sequence is interpreted and drawn.
///
/// Parsed from the declaration's `shape` attribute. Anything other than
/// `poly` or `rect` maps to [`ShapeKind::Unknown`], which draws nothing —
/// the degradation is deliberate, not an error.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShapeKind {
    /// Closed polygon through the coordinates in declaration order.
    Poly,
    /// Rectangle at the first coordinate, sized by the second.
    Rect,
    /// Unrecognized shape attribute; emits no path.
    Unknown,
}

impl ShapeKind {
    /// Parses a declaration's `shape` attribute value.
    pub fn from_attr(attr: &str) -> Self {
        match attr.trim() {
            "poly" => ShapeKind::Poly,
            "rect" => ShapeKind::Rect,
            _ => ShapeKind::Unknown,
        }
    }
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShapeKind::Poly => write!(f, "poly"),
            ShapeKind::Rect => write!(f, "rect"),
            ShapeKind::Unknown => write!(f, "unknown"),
        }
    }
}
