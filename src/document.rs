//! Host-document collaborator model.
//!
//! The overlay never touches a real DOM. The host glue hands it plain data
//! describing what the document declares: a source image with resolved
//! display dimensions and a map reference, and the image maps with their
//! area declarations in document order.

use serde::{Deserialize, Serialize};

/// One declared map area: a shape attribute, a raw coords attribute, and an
/// optional link target.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AreaDecl {
    /// Raw `shape` attribute value (`poly`, `rect`, or anything else).
    pub shape: String,

    /// Raw `coords` attribute value, comma-separated integers.
    pub coords: String,

    /// Optional `href` the declaration would navigate to on click.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
}

impl AreaDecl {
    /// Creates a declaration from shape and coords attribute values.
    pub fn new(shape: impl Into<String>, coords: impl Into<String>) -> Self {
        Self {
            shape: shape.into(),
            coords: coords.into(),
            href: None,
        }
    }

    /// Sets the declaration's link target.
    pub fn with_href(mut self, href: impl Into<String>) -> Self {
        self.href = Some(href.into());
        self
    }
}

/// A named image map holding area declarations in document order.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct ImageMap {
    /// The map's `name` attribute, matched against `usemap` references.
    pub name: String,

    /// Area declarations in document order.
    #[serde(default)]
    pub areas: Vec<AreaDecl>,
}

impl ImageMap {
    /// Creates an empty map with the given name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            areas: Vec::new(),
        }
    }

    /// Appends an area declaration.
    pub fn with_area(mut self, area: AreaDecl) -> Self {
        self.areas.push(area);
        self
    }
}

/// The source image the overlay is bound to.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct SourceImage {
    /// The image's `usemap` reference, e.g. `#floorplan`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub usemap: Option<String>,

    /// Resolved display width in pixels.
    pub width: u32,

    /// Resolved display height in pixels.
    pub height: u32,
}

impl SourceImage {
    /// Creates an image with the given rendered size.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            usemap: None,
            width,
            height,
        }
    }

    /// Sets the image's map reference (with or without the leading `#`).
    pub fn with_usemap(mut self, usemap: impl Into<String>) -> Self {
        self.usemap = Some(usemap.into());
        self
    }
}

/// The subset of the host document the overlay can see: its image maps.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct HostDocument {
    #[serde(default)]
    pub maps: Vec<ImageMap>,
}

impl HostDocument {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an image map to the document.
    pub fn with_map(mut self, map: ImageMap) -> Self {
        self.maps.push(map);
        self
    }

    /// Looks up a map by name.
    pub fn find_map(&self, name: &str) -> Option<&ImageMap> {
        self.maps.iter().find(|map| map.name == name)
    }
}
