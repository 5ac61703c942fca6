//! Shared path-drawing algorithm.
//!
//! Every area renders through the same two steps: [`trace_path`] turns a
//! shape kind plus coordinate sequence into a closed path, and [`paint`]
//! fills then strokes that path onto a pixmap. Which surface receives the
//! paint (persistent or transient) is the caller's concern.

use tiny_skia::{FillRule, Paint, Path, PathBuilder, Pixmap, Rect, Stroke, Transform};

use crate::geometry::{Coord, ShapeKind};
use crate::style::Rgba;

/// Traces the closed path for a shape, or `None` when the geometry cannot
/// produce one.
///
/// - `poly`: straight edges through every coordinate in declaration order,
///   closed back to the first vertex. Needs at least 3 vertices.
/// - `rect`: origin at the first coordinate, width/height from the second
///   coordinate's x/y. The second pair is a size, never a far corner.
///   Non-positive sizes trace nothing.
/// - unknown kinds trace nothing.
pub fn trace_path(kind: ShapeKind, coords: &[Coord]) -> Option<Path> {
    match kind {
        ShapeKind::Poly => {
            if coords.len() < 3 {
                return None;
            }
            let mut pb = PathBuilder::new();
            pb.move_to(coords[0].x as f32, coords[0].y as f32);
            for coord in &coords[1..] {
                pb.line_to(coord.x as f32, coord.y as f32);
            }
            pb.close();
            pb.finish()
        }
        ShapeKind::Rect => {
            let [origin, size, ..] = coords else {
                return None;
            };
            if size.x <= 0 || size.y <= 0 {
                return None;
            }
            let rect = Rect::from_xywh(
                origin.x as f32,
                origin.y as f32,
                size.x as f32,
                size.y as f32,
            )?;
            let mut pb = PathBuilder::new();
            pb.push_rect(rect);
            pb.finish()
        }
        // Unrecognized shape kinds deliberately emit no path.
        ShapeKind::Unknown => None,
    }
}

/// Fills then strokes a traced path onto the pixmap.
pub fn paint(pixmap: &mut Pixmap, path: &Path, fill: Rgba, stroke: Rgba, stroke_width: f32) {
    let mut fill_paint = Paint::default();
    fill_paint.set_color_rgba8(fill.r, fill.g, fill.b, fill.a);
    fill_paint.anti_alias = true;
    pixmap.fill_path(path, &fill_paint, FillRule::Winding, Transform::identity(), None);

    let mut stroke_paint = Paint::default();
    stroke_paint.set_color_rgba8(stroke.r, stroke.g, stroke.b, stroke.a);
    stroke_paint.anti_alias = true;
    let stroke_style = Stroke {
        width: stroke_width,
        ..Default::default()
    };
    pixmap.stroke_path(path, &stroke_paint, &stroke_style, Transform::identity(), None);
}

#[cfg(test)]
mod tests {
    use super::*;
    use tiny_skia::PathSegment;

    fn triangle() -> Vec<Coord> {
        vec![Coord::new(0, 0), Coord::new(0, 40), Coord::new(40, 40)]
    }

    #[test]
    fn polygon_path_connects_all_vertices_and_closes() {
        let path = trace_path(ShapeKind::Poly, &triangle()).expect("trace triangle");

        let mut moves = 0;
        let mut lines = 0;
        let mut closes = 0;
        for segment in path.segments() {
            match segment {
                PathSegment::MoveTo(_) => moves += 1,
                PathSegment::LineTo(_) => lines += 1,
                PathSegment::Close => closes += 1,
                other => panic!("unexpected segment {other:?}"),
            }
        }
        assert_eq!(moves, 1);
        assert_eq!(lines, 2);
        assert_eq!(closes, 1);
    }

    #[test]
    fn polygon_needs_at_least_three_vertices() {
        assert!(trace_path(ShapeKind::Poly, &[]).is_none());
        assert!(trace_path(ShapeKind::Poly, &triangle()[..2]).is_none());
    }

    #[test]
    fn rect_second_pair_is_a_size_not_a_corner() {
        let coords = vec![Coord::new(10, 10), Coord::new(50, 30)];
        let path = trace_path(ShapeKind::Rect, &coords).expect("trace rect");

        let bounds = path.bounds();
        assert_eq!(bounds.x(), 10.0);
        assert_eq!(bounds.y(), 10.0);
        assert_eq!(bounds.width(), 50.0);
        assert_eq!(bounds.height(), 30.0);
    }

    #[test]
    fn rect_ignores_extra_pairs() {
        let coords = vec![Coord::new(1, 2), Coord::new(3, 4), Coord::new(99, 99)];
        let path = trace_path(ShapeKind::Rect, &coords).expect("trace rect");
        assert_eq!(path.bounds().width(), 3.0);
    }

    #[test]
    fn degenerate_rect_traces_nothing() {
        assert!(trace_path(ShapeKind::Rect, &[Coord::new(10, 10)]).is_none());
        let zero = vec![Coord::new(10, 10), Coord::new(0, 0)];
        assert!(trace_path(ShapeKind::Rect, &zero).is_none());
        let negative = vec![Coord::new(10, 10), Coord::new(-5, 5)];
        assert!(trace_path(ShapeKind::Rect, &negative).is_none());
    }

    #[test]
    fn unknown_kind_traces_nothing() {
        assert!(trace_path(ShapeKind::Unknown, &triangle()).is_none());
    }

    #[test]
    fn paint_touches_pixels_inside_the_shape() {
        let mut pixmap = Pixmap::new(60, 60).expect("create pixmap");
        let coords = vec![Coord::new(10, 10), Coord::new(20, 20)];
        let path = trace_path(ShapeKind::Rect, &coords).expect("trace rect");

        paint(&mut pixmap, &path, Rgba::new(255, 0, 0, 255), Rgba::TRANSPARENT, 1.0);

        let inside = pixmap.pixel(15, 15).expect("pixel in bounds");
        assert!(inside.alpha() > 0);
        let outside = pixmap.pixel(45, 45).expect("pixel in bounds");
        assert_eq!(outside.alpha(), 0);
    }
}
