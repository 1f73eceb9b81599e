//! Pure geometry shared by the primitive factory and the selection engine.
//!
//! Every function here works on plain point lists so the algebra (rotation,
//! translation, proportional resize) can be tested without a surface.

mod bbox;
pub mod hit_testing;

pub use bbox::{BBoxCorners, Corner};

use egui::{Pos2, Rect, Vec2, pos2, vec2};

use crate::error::{PaintError, PaintResult};

/// Segments used when an ellipse has to be treated as a polygon.
pub const ELLIPSE_SEGMENTS: usize = 64;

/// Axis-aligned extrema of a point list, without padding.
pub fn bounds_of(points: &[Pos2]) -> Option<Rect> {
    if points.is_empty() {
        return None;
    }

    let mut min_x = f32::INFINITY;
    let mut min_y = f32::INFINITY;
    let mut max_x = f32::NEG_INFINITY;
    let mut max_y = f32::NEG_INFINITY;

    for point in points {
        min_x = min_x.min(point.x);
        min_y = min_y.min(point.y);
        max_x = max_x.max(point.x);
        max_y = max_y.max(point.y);
    }

    Some(Rect::from_min_max(pos2(min_x, min_y), pos2(max_x, max_y)))
}

/// Mean of the points; the pivot used by the rotate buttons.
pub fn centroid(points: &[Pos2]) -> Option<Pos2> {
    if points.is_empty() {
        return None;
    }
    let sum = points
        .iter()
        .fold(Vec2::ZERO, |acc, point| acc + point.to_vec2());
    Some((sum / points.len() as f32).to_pos2())
}

pub fn translate_points(points: &mut [Pos2], delta: Vec2) {
    for point in points {
        *point += delta;
    }
}

/// Rotate `point` about `center` by `radians` (y axis pointing down, so a
/// positive angle turns clockwise on screen).
pub fn rotate_point(point: Pos2, center: Pos2, radians: f32) -> Pos2 {
    let (sin, cos) = radians.sin_cos();
    let d = point - center;
    pos2(
        center.x + d.x * cos - d.y * sin,
        center.y + d.x * sin + d.y * cos,
    )
}

pub fn rotate_points(points: &[Pos2], center: Pos2, radians: f32) -> Vec<Pos2> {
    points
        .iter()
        .map(|point| rotate_point(*point, center, radians))
        .collect()
}

/// Angle of the ray from `center` to `pos`, in radians.
pub fn pointer_angle(center: Pos2, pos: Pos2) -> f32 {
    let d = pos - center;
    d.y.atan2(d.x)
}

/// Extent of `original` after dragging its far corner by `delta`.
///
/// Fails when either side would become zero or negative; callers keep the
/// last valid geometry in that case.
pub fn resized_extent(original: Rect, delta: Vec2) -> PaintResult<Vec2> {
    let width = original.width() + delta.x;
    let height = original.height() + delta.y;
    if width <= 0.0 || height <= 0.0 {
        return Err(PaintError::DegenerateResize { width, height });
    }
    Ok(vec2(width, height))
}

/// Map every point from its fractional position inside `from` to the same
/// fraction of a box of `size` anchored at `from`'s top-left corner.
pub fn remap_points(points: &[Pos2], from: Rect, size: Vec2) -> Vec<Pos2> {
    let fraction = |offset: f32, extent: f32| if extent > 0.0 { offset / extent } else { 0.0 };
    points
        .iter()
        .map(|point| {
            let rel_x = fraction(point.x - from.min.x, from.width());
            let rel_y = fraction(point.y - from.min.y, from.height());
            pos2(from.min.x + rel_x * size.x, from.min.y + rel_y * size.y)
        })
        .collect()
}

/// Outline of the ellipse inscribed in `rect`, turned by `rotation` about its center.
/// Exact extent of the ellipse inscribed in `rect` once turned by `rotation`
/// about its center.
pub fn turned_ellipse_bounds(rect: Rect, rotation: f32) -> Rect {
    let (a, b) = (rect.width() / 2.0, rect.height() / 2.0);
    let (sin, cos) = rotation.sin_cos();
    let half = vec2((a * cos).hypot(b * sin), (a * sin).hypot(b * cos));
    Rect::from_center_size(rect.center(), half * 2.0)
}

pub fn ellipse_points(rect: Rect, rotation: f32, segments: usize) -> Vec<Pos2> {
    let center = rect.center();
    let radius = rect.size() / 2.0;
    (0..segments)
        .map(|i| {
            let theta = i as f32 * std::f32::consts::TAU / segments as f32;
            let point = pos2(
                center.x + radius.x * theta.cos(),
                center.y + radius.y * theta.sin(),
            );
            if rotation == 0.0 {
                point
            } else {
                rotate_point(point, center, rotation)
            }
        })
        .collect()
}
