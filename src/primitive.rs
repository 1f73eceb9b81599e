use egui::{Pos2, Rect, Vec2};
use serde::{Deserialize, Serialize};

use crate::color::Rgb;
use crate::geometry::{self, ELLIPSE_SEGMENTS, hit_testing};

/// Identifier of a drawn primitive, unique for the lifetime of a surface.
pub type ItemId = usize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PrimitiveKind {
    /// Ellipse inscribed in the box spanned by two corner points
    Oval,
    Polygon,
    /// Axis-aligned box spanned by two corner points
    Rectangle,
    /// Open polyline
    Line,
}

impl PrimitiveKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            PrimitiveKind::Oval => "oval",
            PrimitiveKind::Polygon => "polygon",
            PrimitiveKind::Rectangle => "rectangle",
            PrimitiveKind::Line => "line",
        }
    }

    /// Kinds whose geometry is a box given by exactly two corners.
    pub fn is_box(&self) -> bool {
        matches!(self, PrimitiveKind::Oval | PrimitiveKind::Rectangle)
    }
}

/// Dash pattern: `on` pixels drawn, `off` pixels skipped.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Dash {
    pub on: f32,
    pub off: f32,
}

impl Dash {
    pub const fn new(on: f32, off: f32) -> Self {
        Self { on, off }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Style {
    pub fill: Option<Rgb>,
    pub outline: Option<Rgb>,
    pub width: f32,
    pub dash: Option<Dash>,
    pub hidden: bool,
}

impl Default for Style {
    fn default() -> Self {
        Self {
            fill: None,
            outline: Some(Rgb::BLACK),
            width: 1.0,
            dash: None,
            hidden: false,
        }
    }
}

/// A single drawn item on a surface.
#[derive(Debug, Clone, PartialEq)]
pub struct Primitive {
    id: ItemId,
    kind: PrimitiveKind,
    coords: Vec<Pos2>,
    /// Turn of box kinds about their own center, in radians
    rotation: f32,
    style: Style,
}

impl Primitive {
    pub(crate) fn new(id: ItemId, kind: PrimitiveKind, coords: Vec<Pos2>, style: Style) -> Self {
        let mut primitive = Self {
            id,
            kind,
            coords: Vec::new(),
            rotation: 0.0,
            style,
        };
        primitive.replace_coords(coords);
        primitive
    }

    pub fn id(&self) -> ItemId {
        self.id
    }

    pub fn kind(&self) -> PrimitiveKind {
        self.kind
    }

    pub fn coords(&self) -> &[Pos2] {
        &self.coords
    }

    pub fn rotation(&self) -> f32 {
        self.rotation
    }

    pub fn style(&self) -> &Style {
        &self.style
    }

    pub fn style_mut(&mut self) -> &mut Style {
        &mut self.style
    }

    pub fn is_hidden(&self) -> bool {
        self.style.hidden
    }

    /// Replace the coordinate list. Box kinds are normalized to their
    /// (min, max) corners.
    pub(crate) fn replace_coords(&mut self, coords: Vec<Pos2>) {
        self.coords = if self.kind.is_box() {
            match geometry::bounds_of(&coords) {
                Some(rect) => vec![rect.min, rect.max],
                None => coords,
            }
        } else {
            coords
        };
    }

    pub(crate) fn set_rotation(&mut self, rotation: f32) {
        self.rotation = rotation;
    }

    pub(crate) fn translate(&mut self, delta: Vec2) {
        geometry::translate_points(&mut self.coords, delta);
    }

    /// Rotate about an arbitrary pivot. Point kinds rotate every vertex; box
    /// kinds move their center around the pivot and turn their axes.
    pub(crate) fn rotate_about(&mut self, center: Pos2, radians: f32) {
        if self.kind.is_box() {
            let own_center = self.bounds().center();
            let moved = geometry::rotate_point(own_center, center, radians);
            self.translate(moved - own_center);
            self.rotation += radians;
        } else {
            self.coords = geometry::rotate_points(&self.coords, center, radians);
        }
    }

    /// Extent of the defining coordinates.
    pub fn bounds(&self) -> Rect {
        geometry::bounds_of(&self.coords).unwrap_or(Rect::NOTHING)
    }

    /// Extent of what is painted. Differs from [`Self::bounds`] only for
    /// turned box kinds.
    pub fn painted_bounds(&self) -> Option<Rect> {
        let rect = geometry::bounds_of(&self.coords)?;
        match self.kind {
            _ if self.rotation == 0.0 => Some(rect),
            PrimitiveKind::Oval => Some(geometry::turned_ellipse_bounds(rect, self.rotation)),
            PrimitiveKind::Rectangle => geometry::bounds_of(&self.outline()),
            PrimitiveKind::Polygon | PrimitiveKind::Line => Some(rect),
        }
    }

    /// The rendered outline as a point list.
    pub fn outline(&self) -> Vec<Pos2> {
        let rect = self.bounds();
        match self.kind {
            PrimitiveKind::Oval => geometry::ellipse_points(rect, self.rotation, ELLIPSE_SEGMENTS),
            PrimitiveKind::Rectangle => {
                let corners = [
                    rect.left_top(),
                    rect.right_top(),
                    rect.right_bottom(),
                    rect.left_bottom(),
                ];
                geometry::rotate_points(&corners, rect.center(), self.rotation)
            }
            PrimitiveKind::Polygon | PrimitiveKind::Line => self.coords.clone(),
        }
    }

    pub fn is_closed(&self) -> bool {
        !matches!(self.kind, PrimitiveKind::Line)
    }

    /// True when `pos` falls inside a filled, closed primitive.
    pub fn contains(&self, pos: Pos2) -> bool {
        self.style.fill.is_some()
            && self.is_closed()
            && hit_testing::point_in_polygon(pos, &self.outline())
    }

    /// Distance from `pos` to what is painted; zero inside filled shapes.
    pub fn distance(&self, pos: Pos2) -> f32 {
        if self.contains(pos) {
            return 0.0;
        }
        let edge = hit_testing::distance_to_polyline(pos, &self.outline(), self.is_closed());
        (edge - self.style.width / 2.0).max(0.0)
    }

    /// Whether a pointer at `pos` touches this primitive within `tolerance`.
    pub fn hit_test(&self, pos: Pos2, tolerance: f32) -> bool {
        !self.style.hidden && self.distance(pos) <= tolerance
    }
}
