//! Per-state visual styling for areas.

use serde::{Deserialize, Serialize};

/// A straight-alpha RGBA color.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    /// Fully transparent black.
    pub const TRANSPARENT: Rgba = Rgba::new(0, 0, 0, 0);

    /// Creates a color from its channel values.
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }
}

/// Fill and stroke colors for one interaction state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StyleProfile {
    pub fill: Rgba,
    pub stroke: Rgba,
}

impl StyleProfile {
    /// Creates a profile from fill and stroke colors.
    #[inline]
    pub const fn new(fill: Rgba, stroke: Rgba) -> Self {
        Self { fill, stroke }
    }
}

/// The three named style profiles an area carries.
///
/// `normal` styles the persistent surface, `mouseover` styles the transient
/// hover rendering, and `click` is reserved and currently unstyled.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AreaStyles {
    pub normal: StyleProfile,
    pub mouseover: StyleProfile,
    pub click: StyleProfile,
}

impl Default for AreaStyles {
    fn default() -> Self {
        Self {
            normal: StyleProfile::new(Rgba::new(255, 0, 0, 51), Rgba::new(148, 0, 0, 76)),
            mouseover: StyleProfile::new(Rgba::new(255, 0, 0, 128), Rgba::new(148, 0, 0, 0)),
            click: StyleProfile::new(Rgba::TRANSPARENT, Rgba::TRANSPARENT),
        }
    }
}
