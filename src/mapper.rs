//! The root component of the overlay.
//!
//! A [`Mapper`] is bound to one source image: it resolves its
//! configuration, creates the persistent/transient surface pair, discovers
//! every area declaration under the resolved image map, and forwards each
//! area's semantic events to the configured hooks. [`OverlayRegistry`]
//! keeps registration idempotent per host element.

use log::debug;
use serde::Deserialize;
use std::collections::hash_map::Entry;
use std::collections::HashMap;

use tiny_skia::{Pixmap, PixmapPaint, Transform};

use crate::area::{Area, AreaEvent, AreaId, PointerEvent};
use crate::document::{AreaDecl, HostDocument, SourceImage};
use crate::error::MaplightError;
use crate::surface::{SharedSurface, Surface};

type InitHook = Box<dyn FnMut()>;
type AreaHook = Box<dyn FnMut(&Area)>;

/// Caller-supplied callbacks, all optional.
#[derive(Default)]
pub struct MapperHooks {
    pub on_init: Option<InitHook>,
    pub on_area_init: Option<AreaHook>,
    pub on_area_mouse_over: Option<AreaHook>,
    pub on_area_mouse_out: Option<AreaHook>,
    pub on_area_click: Option<AreaHook>,
}

impl std::fmt::Debug for MapperHooks {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MapperHooks")
            .field("on_init", &self.on_init.is_some())
            .field("on_area_init", &self.on_area_init.is_some())
            .field("on_area_mouse_over", &self.on_area_mouse_over.is_some())
            .field("on_area_mouse_out", &self.on_area_mouse_out.is_some())
            .field("on_area_click", &self.on_area_click.is_some())
            .finish()
    }
}

/// Construction configuration, merged over defaults.
///
/// The data fields deserialize with serde defaults so host glue can pass
/// them straight from a JSON options object; hooks are supplied
/// programmatically through the builder methods.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct MapperOptions {
    /// Explicit map name; `None` derives it from the image's `usemap`.
    pub map: Option<String>,

    /// Explicit surface width; `0` derives it from the image's size.
    pub width: u32,

    /// Explicit surface height; `0` derives it from the image's size.
    pub height: u32,

    /// Draw each area onto the persistent surface at discovery.
    pub auto_draw: bool,

    /// Reject malformed coords attributes instead of degrading silently.
    pub strict: bool,

    #[serde(skip)]
    pub hooks: MapperHooks,
}

impl Default for MapperOptions {
    fn default() -> Self {
        Self {
            map: None,
            width: 0,
            height: 0,
            auto_draw: true,
            strict: false,
            hooks: MapperHooks::default(),
        }
    }
}

impl MapperOptions {
    pub fn with_map(mut self, name: impl Into<String>) -> Self {
        self.map = Some(name.into());
        self
    }

    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    pub fn auto_draw(mut self, auto_draw: bool) -> Self {
        self.auto_draw = auto_draw;
        self
    }

    pub fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    /// Invoked once, after all areas are discovered.
    pub fn on_init(mut self, hook: impl FnMut() + 'static) -> Self {
        self.hooks.on_init = Some(Box::new(hook));
        self
    }

    /// Invoked once per area immediately after its wiring.
    pub fn on_area_init(mut self, hook: impl FnMut(&Area) + 'static) -> Self {
        self.hooks.on_area_init = Some(Box::new(hook));
        self
    }

    /// Invoked on hover-in with the area as payload.
    pub fn on_area_mouse_over(mut self, hook: impl FnMut(&Area) + 'static) -> Self {
        self.hooks.on_area_mouse_over = Some(Box::new(hook));
        self
    }

    /// Invoked on hover-out with the area as payload.
    pub fn on_area_mouse_out(mut self, hook: impl FnMut(&Area) + 'static) -> Self {
        self.hooks.on_area_mouse_out = Some(Box::new(hook));
        self
    }

    /// Invoked on click with the area as payload.
    pub fn on_area_click(mut self, hook: impl FnMut(&Area) + 'static) -> Self {
        self.hooks.on_area_click = Some(Box::new(hook));
        self
    }
}

/// What the host glue should do with the pointer event it just delivered.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DispatchOutcome {
    /// The event reached a known area.
    pub handled: bool,

    /// The host should suppress the declaration's default navigation.
    pub prevent_default: bool,
}

/// The overlay controller bound to one source image.
#[derive(Debug)]
pub struct Mapper {
    options: MapperOptions,
    width: u32,
    height: u32,
    persistent: SharedSurface,
    transient: SharedSurface,
    areas: Vec<Area>,
}

impl Mapper {
    /// Builds the overlay: resolves configuration, creates both surfaces,
    /// and discovers all areas under the resolved map.
    ///
    /// A missing map or zero declarations degrade to an empty, inert
    /// overlay. Errors are limited to degenerate zero surface dimensions
    /// and, in strict mode, malformed coords attributes.
    pub fn new(
        image: &SourceImage,
        document: &HostDocument,
        options: MapperOptions,
    ) -> Result<Self, MaplightError> {
        let map_name = options.map.clone().or_else(|| {
            image
                .usemap
                .as_deref()
                .map(|usemap| usemap.trim_start_matches('#').to_string())
        });

        let width = if options.width == 0 { image.width } else { options.width };
        let height = if options.height == 0 { image.height } else { options.height };

        let persistent = Surface::new(width, height)?.shared();
        let transient = Surface::new(width, height)?.shared();

        let mut mapper = Self {
            options,
            width,
            height,
            persistent,
            transient,
            areas: Vec::new(),
        };

        let decls = map_name
            .as_deref()
            .and_then(|name| document.find_map(name))
            .map(|map| map.areas.as_slice())
            .unwrap_or(&[]);
        mapper.discover(decls)?;

        if let Some(hook) = mapper.options.hooks.on_init.as_mut() {
            hook();
        }
        Ok(mapper)
    }

    fn discover(&mut self, decls: &[AreaDecl]) -> Result<(), MaplightError> {
        for decl in decls {
            let id = AreaId::new(self.areas.len() as u32 + 1);
            let mut area = if self.options.strict {
                Area::from_decl_strict(id, decl)?
            } else {
                Area::from_decl(id, decl)
            };
            area.attach_surfaces(
                self.persistent.clone(),
                self.transient.clone(),
                self.options.auto_draw,
            );
            if let Some(hook) = self.options.hooks.on_area_init.as_mut() {
                hook(&area);
            }
            self.areas.push(area);
        }
        debug!("discovered {} area(s)", self.areas.len());
        Ok(())
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Areas in discovery order; index k holds id k+1.
    pub fn areas(&self) -> &[Area] {
        &self.areas
    }

    pub fn area(&self, id: AreaId) -> Option<&Area> {
        let index = (id.as_u32() as usize).checked_sub(1)?;
        self.areas.get(index)
    }

    /// Mutable lookup, for restyling an area before an explicit draw pass.
    pub fn area_mut(&mut self, id: AreaId) -> Option<&mut Area> {
        let index = (id.as_u32() as usize).checked_sub(1)?;
        self.areas.get_mut(index)
    }

    pub fn persistent_surface(&self) -> &SharedSurface {
        &self.persistent
    }

    pub fn transient_surface(&self) -> &SharedSurface {
        &self.transient
    }

    /// Routes one pointer event to the addressed area and forwards the
    /// re-emitted semantic event to the configured hook.
    ///
    /// Unknown ids are a silent no-op. Click outcomes ask the host to
    /// suppress default navigation when the declaration carries a link
    /// target.
    pub fn pointer_event(&mut self, id: AreaId, event: PointerEvent) -> DispatchOutcome {
        let Some(index) = (id.as_u32() as usize).checked_sub(1) else {
            return DispatchOutcome::default();
        };
        let Some(area) = self.areas.get(index) else {
            return DispatchOutcome::default();
        };

        let emitted = area.pointer_event(event);
        let hooks = &mut self.options.hooks;
        let mut outcome = DispatchOutcome {
            handled: true,
            prevent_default: false,
        };
        match emitted {
            AreaEvent::HoverIn => {
                if let Some(hook) = hooks.on_area_mouse_over.as_mut() {
                    hook(area);
                }
            }
            AreaEvent::HoverOut => {
                if let Some(hook) = hooks.on_area_mouse_out.as_mut() {
                    hook(area);
                }
            }
            AreaEvent::Click => {
                outcome.prevent_default = area.href().is_some();
                if let Some(hook) = hooks.on_area_click.as_mut() {
                    hook(area);
                }
            }
        }
        outcome
    }

    /// Flattens the overlay pair in paint order: persistent below, transient
    /// above when visible.
    pub fn composite(&self) -> Pixmap {
        let mut out = self.persistent.borrow().pixmap().clone();
        let transient = self.transient.borrow();
        if transient.is_visible() {
            out.draw_pixmap(
                0,
                0,
                transient.pixmap().as_ref(),
                &PixmapPaint::default(),
                Transform::identity(),
                None,
            );
        }
        out
    }
}

/// Keeps at most one [`Mapper`] per host element.
#[derive(Default)]
pub struct OverlayRegistry {
    mappers: HashMap<String, Mapper>,
}

impl OverlayRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Initializes an overlay for the element, or returns the existing one.
    ///
    /// A second initialization of the same element id is a no-op: the
    /// options are dropped and the first overlay is returned unchanged.
    pub fn init(
        &mut self,
        element_id: &str,
        image: &SourceImage,
        document: &HostDocument,
        options: MapperOptions,
    ) -> Result<&mut Mapper, MaplightError> {
        match self.mappers.entry(element_id.to_string()) {
            Entry::Occupied(existing) => Ok(existing.into_mut()),
            Entry::Vacant(slot) => Ok(slot.insert(Mapper::new(image, document, options)?)),
        }
    }

    pub fn get(&self, element_id: &str) -> Option<&Mapper> {
        self.mappers.get(element_id)
    }

    pub fn get_mut(&mut self, element_id: &str) -> Option<&mut Mapper> {
        self.mappers.get_mut(element_id)
    }

    pub fn len(&self) -> usize {
        self.mappers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.mappers.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::ImageMap;
    use crate::geometry::ShapeKind;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn two_area_document() -> HostDocument {
        HostDocument::new().with_map(
            ImageMap::new("floorplan")
                .with_area(AreaDecl::new("rect", "10,10,50,30").with_href("#room-a"))
                .with_area(AreaDecl::new("poly", "0,0,0,40,40,40")),
        )
    }

    fn image() -> SourceImage {
        SourceImage::new(200, 150).with_usemap("#floorplan")
    }

    #[test]
    fn map_name_derives_from_usemap_reference() {
        let mapper =
            Mapper::new(&image(), &two_area_document(), MapperOptions::default()).expect("init");
        assert_eq!(mapper.areas().len(), 2);
    }

    #[test]
    fn explicit_map_option_wins_over_usemap() {
        let document = HostDocument::new()
            .with_map(ImageMap::new("other").with_area(AreaDecl::new("rect", "0,0,5,5")));
        let image = SourceImage::new(50, 50).with_usemap("#floorplan");

        let mapper = Mapper::new(
            &image,
            &document,
            MapperOptions::default().with_map("other"),
        )
        .expect("init");
        assert_eq!(mapper.areas().len(), 1);
    }

    #[test]
    fn surfaces_default_to_image_size() {
        let mapper =
            Mapper::new(&image(), &two_area_document(), MapperOptions::default()).expect("init");
        assert_eq!(mapper.width(), 200);
        assert_eq!(mapper.height(), 150);
        assert_eq!(mapper.persistent_surface().borrow().width(), 200);
    }

    #[test]
    fn explicit_size_overrides_image_size() {
        let mapper = Mapper::new(
            &image(),
            &two_area_document(),
            MapperOptions::default().with_size(640, 480),
        )
        .expect("init");
        assert_eq!(mapper.width(), 640);
        assert_eq!(mapper.height(), 480);
    }

    #[test]
    fn missing_map_degrades_to_inert_overlay() {
        let mapper = Mapper::new(
            &SourceImage::new(50, 50).with_usemap("#nowhere"),
            &HostDocument::new(),
            MapperOptions::default(),
        )
        .expect("init");
        assert!(mapper.areas().is_empty());
        assert!(mapper.persistent_surface().borrow().is_blank());
    }

    #[test]
    fn image_without_usemap_degrades_to_inert_overlay() {
        let mapper = Mapper::new(
            &SourceImage::new(50, 50),
            &two_area_document(),
            MapperOptions::default(),
        )
        .expect("init");
        assert!(mapper.areas().is_empty());
    }

    #[test]
    fn discovery_assigns_sequential_one_based_ids() {
        let mapper =
            Mapper::new(&image(), &two_area_document(), MapperOptions::default()).expect("init");
        let ids: Vec<u32> = mapper.areas().iter().map(|a| a.id().as_u32()).collect();
        assert_eq!(ids, vec![1, 2]);
        assert_eq!(mapper.areas()[0].kind(), ShapeKind::Rect);
        assert_eq!(mapper.areas()[1].kind(), ShapeKind::Poly);
    }

    #[test]
    fn area_lookup_is_one_based() {
        let mapper =
            Mapper::new(&image(), &two_area_document(), MapperOptions::default()).expect("init");
        assert!(mapper.area(AreaId::new(0)).is_none());
        assert_eq!(mapper.area(AreaId::new(1)).unwrap().kind(), ShapeKind::Rect);
        assert!(mapper.area(AreaId::new(3)).is_none());
    }

    #[test]
    fn init_hooks_fire_in_order() {
        let events: Rc<RefCell<Vec<String>>> = Rc::default();
        let per_area = events.clone();
        let after_all = events.clone();

        Mapper::new(
            &image(),
            &two_area_document(),
            MapperOptions::default()
                .on_area_init(move |area| per_area.borrow_mut().push(format!("area {}", area.id())))
                .on_init(move || after_all.borrow_mut().push("init".to_string())),
        )
        .expect("init");

        assert_eq!(
            *events.borrow(),
            vec!["area 1".to_string(), "area 2".to_string(), "init".to_string()]
        );
    }

    #[test]
    fn pointer_events_forward_to_hooks_with_the_area() {
        let seen: Rc<RefCell<Vec<(u32, &'static str)>>> = Rc::default();
        let over = seen.clone();
        let out = seen.clone();

        let mut mapper = Mapper::new(
            &image(),
            &two_area_document(),
            MapperOptions::default()
                .on_area_mouse_over(move |area| over.borrow_mut().push((area.id().as_u32(), "over")))
                .on_area_mouse_out(move |area| out.borrow_mut().push((area.id().as_u32(), "out"))),
        )
        .expect("init");

        mapper.pointer_event(AreaId::new(2), PointerEvent::HoverIn);
        mapper.pointer_event(AreaId::new(2), PointerEvent::HoverOut);
        assert_eq!(*seen.borrow(), vec![(2, "over"), (2, "out")]);
    }

    #[test]
    fn click_requests_default_suppression_for_linked_areas() {
        let mut mapper =
            Mapper::new(&image(), &two_area_document(), MapperOptions::default()).expect("init");

        // Area 1 has an href, area 2 does not.
        let linked = mapper.pointer_event(AreaId::new(1), PointerEvent::Click);
        assert!(linked.handled);
        assert!(linked.prevent_default);

        let unlinked = mapper.pointer_event(AreaId::new(2), PointerEvent::Click);
        assert!(unlinked.handled);
        assert!(!unlinked.prevent_default);
    }

    #[test]
    fn unknown_area_id_is_a_silent_no_op() {
        let mut mapper =
            Mapper::new(&image(), &two_area_document(), MapperOptions::default()).expect("init");
        let outcome = mapper.pointer_event(AreaId::new(99), PointerEvent::Click);
        assert_eq!(outcome, DispatchOutcome::default());
        let outcome = mapper.pointer_event(AreaId::new(0), PointerEvent::HoverIn);
        assert!(!outcome.handled);
    }

    #[test]
    fn strict_mode_surfaces_malformed_declarations() {
        let document = HostDocument::new()
            .with_map(ImageMap::new("floorplan").with_area(AreaDecl::new("rect", "1,2,x,4")));
        let err = Mapper::new(
            &image(),
            &document,
            MapperOptions::default().strict(true),
        )
        .unwrap_err();
        assert!(matches!(err, MaplightError::CoordsParse { .. }));
    }

    #[test]
    fn composite_layers_transient_above_persistent() {
        let mut mapper =
            Mapper::new(&image(), &two_area_document(), MapperOptions::default()).expect("init");

        let idle = mapper.composite();
        let idle_alpha = idle.pixel(30, 20).expect("pixel in bounds").alpha();
        assert!(idle_alpha > 0);

        mapper.pointer_event(AreaId::new(1), PointerEvent::HoverIn);
        let hovered = mapper.composite();
        let hovered_alpha = hovered.pixel(30, 20).expect("pixel in bounds").alpha();
        assert!(hovered_alpha > idle_alpha);
    }

    #[test]
    fn options_deserialize_with_defaults() {
        let options: MapperOptions =
            serde_json::from_str(r#"{"map": "floorplan", "auto_draw": false}"#)
                .expect("deserialize options");
        assert_eq!(options.map.as_deref(), Some("floorplan"));
        assert!(!options.auto_draw);
        assert!(!options.strict);
        assert_eq!(options.width, 0);
    }

    #[test]
    fn registry_is_idempotent_per_element() {
        let mut registry = OverlayRegistry::new();
        let document = two_area_document();
        let image = image();

        registry
            .init("map-image", &image, &document, MapperOptions::default())
            .expect("first init");

        // Second init with different options must not rebuild the overlay.
        let again = registry
            .init(
                "map-image",
                &image,
                &document,
                MapperOptions::default().with_size(9, 9),
            )
            .expect("second init");
        assert_eq!(again.width(), 200);
        assert_eq!(again.areas().len(), 2);
        assert_eq!(registry.len(), 1);

        registry
            .init("other-image", &image, &document, MapperOptions::default())
            .expect("different element");
        assert_eq!(registry.len(), 2);
    }
}
