//! Primitive factory: maps a drag rectangle to a drawn primitive.

use std::f32::consts::TAU;

use egui::{PointerButton, Pos2, pos2};

use crate::color::Rgb;
use crate::config::EditorConfig;
use crate::primitive::{ItemId, PrimitiveKind, Style};
use crate::surface::DrawingSurface;

/// A parametric shape ready to be drawn from a drag rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    Circle,
    Triangle { reverse: bool },
    Square { reverse: bool },
    Polygon { sides: u32, reverse: bool },
}

impl Shape {
    pub fn name(&self) -> &'static str {
        match self {
            Shape::Circle => "circle",
            Shape::Triangle { .. } => "triangle",
            Shape::Square { .. } => "square",
            Shape::Polygon { .. } => "polygon",
        }
    }

    /// Primitive kind and coordinates for a drag from `start` to `end`.
    pub fn geometry(&self, start: Pos2, end: Pos2) -> (PrimitiveKind, Vec<Pos2>) {
        let (x1, y1, x2, y2) = (start.x, start.y, end.x, end.y);
        match *self {
            Shape::Circle => (PrimitiveKind::Oval, vec![start, end]),
            Shape::Triangle { reverse } => {
                let center_x = (x1 + x2) / 2.0;
                let points = if reverse {
                    vec![pos2(center_x, y2), pos2(x1, y1), pos2(x2, y1)]
                } else {
                    vec![pos2(center_x, y1), pos2(x1, y2), pos2(x2, y2)]
                };
                (PrimitiveKind::Polygon, points)
            }
            Shape::Square { reverse } => {
                let (from, to) = if reverse { (end, start) } else { (start, end) };
                let points = vec![from, pos2(to.x, from.y), to, pos2(from.x, to.y)];
                (PrimitiveKind::Polygon, points)
            }
            Shape::Polygon { sides, reverse } => {
                let center = pos2((x1 + x2) / 2.0, (y1 + y2) / 2.0);
                let radius = (x2 - x1).abs().min((y2 - y1).abs()) / 2.0;
                let step = TAU / sides as f32;
                let points = (0..sides)
                    .map(|i| {
                        let theta = if reverse { -(i as f32) * step } else { i as f32 * step };
                        pos2(
                            center.x + radius * theta.cos(),
                            center.y + radius * theta.sin(),
                        )
                    })
                    .collect();
                (PrimitiveKind::Polygon, points)
            }
        }
    }

    /// Previews are dashed outlines; committed shapes are filled.
    pub fn style(color: Rgb, preview: bool, config: &EditorConfig) -> Style {
        Style {
            fill: (!preview).then_some(color),
            outline: Some(color),
            width: config.normal_outline_width,
            dash: preview.then_some(config.preview_dash),
            hidden: false,
        }
    }

    pub fn draw<S: DrawingSurface>(
        &self,
        surface: &mut S,
        start: Pos2,
        end: Pos2,
        color: Rgb,
        preview: bool,
        config: &EditorConfig,
    ) -> ItemId {
        let (kind, coords) = self.geometry(start, end);
        surface.create(kind, coords, Self::style(color, preview, config))
    }
}

/// Which kind of shape the shape tool draws next.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShapeKind {
    Circle,
    Triangle,
    Square,
    Polygon,
}

/// The shape tool's settings: current kind, polygon side count and the
/// orientation toggle.
#[derive(Debug, Clone, PartialEq)]
pub struct ShapePalette {
    kind: ShapeKind,
    sides: u32,
    min_sides: u32,
    default_sides: u32,
    reverse: bool,
}

impl ShapePalette {
    pub fn new(config: &EditorConfig) -> Self {
        Self {
            kind: ShapeKind::Circle,
            sides: config.default_polygon_sides,
            min_sides: config.min_polygon_sides,
            default_sides: config.default_polygon_sides,
            reverse: false,
        }
    }

    pub fn kind(&self) -> ShapeKind {
        self.kind
    }

    pub fn sides(&self) -> u32 {
        self.sides
    }

    pub fn is_reversed(&self) -> bool {
        self.reverse
    }

    pub fn set_reverse(&mut self, reverse: bool) {
        self.reverse = reverse;
    }

    /// Circle -> Triangle -> Square -> Polygon -> Circle. Entering Polygon
    /// resets the side count to its default.
    pub fn cycle(&mut self) -> ShapeKind {
        self.kind = match self.kind {
            ShapeKind::Circle => ShapeKind::Triangle,
            ShapeKind::Triangle => ShapeKind::Square,
            ShapeKind::Square => {
                self.sides = self.default_sides;
                ShapeKind::Polygon
            }
            ShapeKind::Polygon => ShapeKind::Circle,
        };
        self.kind
    }

    pub fn increase_sides(&mut self) -> u32 {
        self.sides = (self.sides + 1).max(self.min_sides);
        self.sides
    }

    pub fn decrease_sides(&mut self) -> u32 {
        self.sides = self.sides.saturating_sub(1).max(self.min_sides);
        self.sides
    }

    /// The concrete shape for a drag started with `button`; the secondary
    /// button flips the orientation toggle for that drag.
    pub fn shape_for(&self, button: PointerButton) -> Shape {
        let reverse = self.reverse != (button == PointerButton::Secondary);
        match self.kind {
            ShapeKind::Circle => Shape::Circle,
            ShapeKind::Triangle => Shape::Triangle { reverse },
            ShapeKind::Square => Shape::Square { reverse },
            ShapeKind::Polygon => Shape::Polygon {
                sides: self.sides,
                reverse,
            },
        }
    }

    pub fn label(&self) -> String {
        match self.kind {
            ShapeKind::Circle => "Circle".to_owned(),
            ShapeKind::Triangle => "Triangle".to_owned(),
            ShapeKind::Square => "Square".to_owned(),
            ShapeKind::Polygon => format!("Polygon ({} sides)", self.sides),
        }
    }
}

impl Default for ShapePalette {
    fn default() -> Self {
        Self::new(&EditorConfig::default())
    }
}
