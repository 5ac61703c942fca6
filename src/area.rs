//! The leaf component of the overlay: one interactive highlight region.
//!
//! An [`Area`] owns one shape's geometry and styling, borrows the two
//! surfaces its [`Mapper`](crate::mapper::Mapper) owns, and turns raw
//! pointer events into semantic [`AreaEvent`]s while mutating only the
//! transient surface.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::document::AreaDecl;
use crate::error::MaplightError;
use crate::geometry::{parse, Coord, ShapeKind};
use crate::render;
use crate::style::{AreaStyles, Rgba};
use crate::surface::SharedSurface;

/// A 1-based area identifier assigned in discovery order.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AreaId(pub u32);

impl AreaId {
    /// Creates a new AreaId.
    #[inline]
    pub fn new(id: u32) -> Self {
        Self(id)
    }

    /// Returns the underlying u32 value.
    #[inline]
    pub fn as_u32(&self) -> u32 {
        self.0
    }
}

impl fmt::Debug for AreaId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "AreaId({})", self.0)
    }
}

impl fmt::Display for AreaId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A raw pointer interaction delivered by the host event loop.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerEvent {
    HoverIn,
    HoverOut,
    Click,
}

/// The semantic event an area re-emits for a pointer interaction.
///
/// Listeners always observe the area, never the raw document element.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AreaEvent {
    HoverIn,
    HoverOut,
    Click,
}

/// One interactive highlight region corresponding to one declared map area.
pub struct Area {
    id: AreaId,
    kind: ShapeKind,
    coords: Vec<Coord>,
    styles: AreaStyles,
    href: Option<String>,
    persistent: Option<SharedSurface>,
    transient: Option<SharedSurface>,
}

impl Area {
    /// Constructs an area from a declaration, leniently.
    ///
    /// Malformed shape or coords attributes degrade to a region that draws
    /// nothing; construction itself never fails.
    pub fn from_decl(id: AreaId, decl: &AreaDecl) -> Self {
        Self::build(id, decl, parse::coords(&decl.coords))
    }

    /// Constructs an area from a declaration, rejecting malformed coords.
    pub fn from_decl_strict(id: AreaId, decl: &AreaDecl) -> Result<Self, MaplightError> {
        Ok(Self::build(id, decl, parse::coords_strict(&decl.coords)?))
    }

    fn build(id: AreaId, decl: &AreaDecl, coords: Vec<Coord>) -> Self {
        Self {
            id,
            kind: ShapeKind::from_attr(&decl.shape),
            coords,
            styles: AreaStyles::default(),
            href: decl.href.clone(),
            persistent: None,
            transient: None,
        }
    }

    pub fn id(&self) -> AreaId {
        self.id
    }

    pub fn kind(&self) -> ShapeKind {
        self.kind
    }

    pub fn coords(&self) -> &[Coord] {
        &self.coords
    }

    pub fn styles(&self) -> &AreaStyles {
        &self.styles
    }

    /// Mutable access to the style profiles, for per-area customization
    /// before drawing.
    pub fn styles_mut(&mut self) -> &mut AreaStyles {
        &mut self.styles
    }

    pub fn href(&self) -> Option<&str> {
        self.href.as_deref()
    }

    /// Binds both surface references, set once by the owning mapper.
    ///
    /// Hides the transient surface (it must be blank except during an
    /// active hover) and, when `auto_draw` is set, immediately draws the
    /// `normal` rendering onto the persistent surface.
    pub fn attach_surfaces(
        &mut self,
        persistent: SharedSurface,
        transient: SharedSurface,
        auto_draw: bool,
    ) {
        transient.borrow_mut().hide();
        self.persistent = Some(persistent);
        self.transient = Some(transient);

        if auto_draw {
            self.draw(None);
        }
    }

    /// Renders the shape onto the persistent surface.
    ///
    /// Fill is `override_fill` or the `normal` fill; stroke is the `normal`
    /// stroke at fixed width 1. A no-op when the surfaces are unattached or
    /// the geometry traces no path.
    pub fn draw(&self, override_fill: Option<Rgba>) {
        let Some(surface) = &self.persistent else {
            return;
        };
        let Some(path) = render::trace_path(self.kind, &self.coords) else {
            return;
        };

        let fill = override_fill.unwrap_or(self.styles.normal.fill);
        let mut surface = surface.borrow_mut();
        render::paint(
            surface.pixmap_mut(),
            &path,
            fill,
            self.styles.normal.stroke,
            1.0,
        );
    }

    /// Renders the `mouseover` styling onto the transient surface and makes
    /// it visible. Triggered on hover-in.
    pub fn show_overlay(&self) {
        let Some(surface) = &self.transient else {
            return;
        };
        let mut surface = surface.borrow_mut();
        if let Some(path) = render::trace_path(self.kind, &self.coords) {
            render::paint(
                surface.pixmap_mut(),
                &path,
                self.styles.mouseover.fill,
                self.styles.mouseover.stroke,
                1.0,
            );
        }
        surface.show();
    }

    /// Clears the transient surface's full pixel region (not just this
    /// shape's bounds) and hides it. Triggered on hover-out.
    pub fn clear_overlay(&self) {
        let Some(surface) = &self.transient else {
            return;
        };
        let mut surface = surface.borrow_mut();
        surface.clear();
        surface.hide();
    }

    /// Applies a raw pointer event and re-emits the semantic equivalent.
    ///
    /// Hover transitions mutate only the transient surface; a click leaves
    /// both surfaces untouched.
    pub fn pointer_event(&self, event: PointerEvent) -> AreaEvent {
        match event {
            PointerEvent::HoverIn => {
                self.show_overlay();
                AreaEvent::HoverIn
            }
            PointerEvent::HoverOut => {
                self.clear_overlay();
                AreaEvent::HoverOut
            }
            PointerEvent::Click => AreaEvent::Click,
        }
    }
}

impl fmt::Debug for Area {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Area")
            .field("id", &self.id)
            .field("kind", &self.kind)
            .field("coords", &self.coords)
            .field("href", &self.href)
            .finish()
    }
}
