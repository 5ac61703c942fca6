//! Maplight: interactive highlight overlays for client-side image maps.
//!
//! Maplight parses declared image-map geometry (polygons and rectangles),
//! renders it onto a pair of stacked drawing surfaces — a persistent
//! "normal" layer and a transient "hover" layer — and dispatches pointer
//! interaction per area to caller-supplied callbacks. The host document is
//! a plain-data collaborator; no real DOM is touched.
//!
//! # Modules
//!
//! - [`geometry`]: coordinate and shape-kind types plus coords parsing
//! - [`style`]: per-state fill/stroke profiles
//! - [`surface`]: the shared drawing surfaces
//! - [`render`]: the shared path-tracing and painting algorithm
//! - [`area`]: the per-region leaf component
//! - [`mapper`]: the root overlay controller and registry
//! - [`document`]: the host-document collaborator model
//! - [`error`]: error types for maplight operations
//!
//! # Example
//!
//! ```
//! use maplight::{
//!     AreaDecl, AreaId, HostDocument, ImageMap, Mapper, MapperOptions, PointerEvent,
//!     SourceImage,
//! };
//!
//! let document = HostDocument::new().with_map(
//!     ImageMap::new("floorplan")
//!         .with_area(AreaDecl::new("rect", "10,10,50,30"))
//!         .with_area(AreaDecl::new("poly", "0,0,0,40,40,40")),
//! );
//! let image = SourceImage::new(200, 150).with_usemap("#floorplan");
//!
//! let mut mapper = Mapper::new(&image, &document, MapperOptions::default())?;
//! assert_eq!(mapper.areas().len(), 2);
//!
//! mapper.pointer_event(AreaId::new(1), PointerEvent::HoverIn);
//! assert!(mapper.transient_surface().borrow().is_visible());
//! # Ok::<(), maplight::MaplightError>(())
//! ```

pub mod area;
pub mod document;
pub mod error;
pub mod geometry;
pub mod mapper;
pub mod render;
pub mod style;
pub mod surface;

pub use area::{Area, AreaEvent, AreaId, PointerEvent};
pub use document::{AreaDecl, HostDocument, ImageMap, SourceImage};
pub use error::MaplightError;
pub use geometry::{Coord, ShapeKind};
pub use mapper::{DispatchOutcome, Mapper, MapperHooks, MapperOptions, OverlayRegistry};
pub use style::{AreaStyles, Rgba, StyleProfile};
pub use surface::{SharedSurface, Surface};
