//! Drawing surfaces owned by a [`Mapper`](crate::mapper::Mapper) and
//! borrowed by every [`Area`](crate::area::Area) it discovers.

use std::cell::RefCell;
use std::rc::Rc;

use tiny_skia::{Color, Pixmap};

use crate::error::MaplightError;

/// A shared handle to a surface.
///
/// The overlay is single-threaded and event-driven, so surfaces are shared
/// through `Rc<RefCell<_>>` rather than a thread-safe wrapper.
pub type SharedSurface = Rc<RefCell<Surface>>;

/// A fixed-size pixel raster plus a visibility flag.
///
/// The persistent surface holds the always-visible `normal` rendering of
/// all areas; the transient surface is blank and hidden except during an
/// active hover.
pub struct Surface {
    pixmap: Pixmap,
    visible: bool,
}

impl Surface {
    /// Creates a transparent, visible surface of the given pixel size.
    pub fn new(width: u32, height: u32) -> Result<Self, MaplightError> {
        let pixmap =
            Pixmap::new(width, height).ok_or(MaplightError::SurfaceSize { width, height })?;
        Ok(Self {
            pixmap,
            visible: true,
        })
    }

    /// Wraps the surface in a shared handle.
    pub fn shared(self) -> SharedSurface {
        Rc::new(RefCell::new(self))
    }

    pub fn width(&self) -> u32 {
        self.pixmap.width()
    }

    pub fn height(&self) -> u32 {
        self.pixmap.height()
    }

    pub fn pixmap(&self) -> &Pixmap {
        &self.pixmap
    }

    pub fn pixmap_mut(&mut self) -> &mut Pixmap {
        &mut self.pixmap
    }

    /// Clears the full pixel region to transparent.
    pub fn clear(&mut self) {
        self.pixmap.fill(Color::TRANSPARENT);
    }

    pub fn show(&mut self) {
        self.visible = true;
    }

    pub fn hide(&mut self) {
        self.visible = false;
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Returns true if every pixel is fully transparent.
    pub fn is_blank(&self) -> bool {
        self.pixmap.data().iter().all(|&byte| byte == 0)
    }
}

impl std::fmt::Debug for Surface {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Surface")
            .field("width", &self.width())
            .field("height", &self.height())
            .field("visible", &self.visible)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_surface_is_blank_and_visible() {
        let surface = Surface::new(16, 8).expect("create surface");
        assert_eq!(surface.width(), 16);
        assert_eq!(surface.height(), 8);
        assert!(surface.is_visible());
        assert!(surface.is_blank());
    }

    #[test]
    fn zero_dimensions_are_rejected() {
        let err = Surface::new(0, 10).unwrap_err();
        assert!(matches!(err, MaplightError::SurfaceSize { .. }));
        assert!(Surface::new(10, 0).is_err());
    }

    #[test]
    fn clear_resets_all_pixels() {
        let mut surface = Surface::new(4, 4).expect("create surface");
        surface.pixmap_mut().fill(Color::from_rgba8(255, 0, 0, 255));
        assert!(!surface.is_blank());

        surface.clear();
        assert!(surface.is_blank());
    }
}
