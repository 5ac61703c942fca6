//! Integer screen-space coordinates.

use serde::{Deserialize, Serialize};

/// A 2D coordinate in screen-space pixels, immutable once parsed.
///
/// For polygons a `Coord` is a vertex; for rectangles the first `Coord`
/// is the origin and the second is reinterpreted as a width/height pair.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Coord {
    pub x: i32,
    pub y: i32,
}

impl Coord {
    /// Creates a new coordinate with the given x and y offsets.
    #[inline]
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl std::fmt::Display for Coord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
