use egui::{Color32, Painter, Rect, Shape, Stroke, Vec2};

use crate::primitive::{Primitive, PrimitiveKind};
use crate::surface::DrawingSurface;

/// Paints a drawing surface with an egui painter.
#[derive(Debug, Clone)]
pub struct Renderer {
    background: Color32,
}

impl Renderer {
    pub fn new(background: impl Into<Color32>) -> Self {
        Self {
            background: background.into(),
        }
    }

    pub fn background(&self) -> Color32 {
        self.background
    }

    /// Offset from surface coordinates to screen coordinates. A cropped
    /// surface draws its viewport at the top-left of the canvas.
    pub fn screen_offset<S: DrawingSurface>(surface: &S, canvas_rect: Rect) -> Vec2 {
        let origin = surface.viewport().map_or(Vec2::ZERO, |viewport| viewport.min.to_vec2());
        canvas_rect.min.to_vec2() - origin
    }

    /// Renders the surface into `canvas_rect`, bottom item first.
    pub fn render<S: DrawingSurface>(&self, painter: &Painter, canvas_rect: Rect, surface: &S) {
        let offset = Self::screen_offset(surface, canvas_rect);
        let clip = match surface.viewport() {
            Some(viewport) => viewport.translate(offset).intersect(canvas_rect),
            None => canvas_rect,
        };
        let painter = painter.with_clip_rect(clip);

        painter.rect_filled(clip, 0.0, self.background);
        for id in surface.ids() {
            if let Ok(primitive) = surface.primitive(id) {
                painter.extend(Self::shapes_for(primitive, offset));
            }
        }
    }

    /// The egui shapes that draw one primitive; empty when it is hidden.
    pub fn shapes_for(primitive: &Primitive, offset: Vec2) -> Vec<Shape> {
        let style = primitive.style();
        if style.hidden {
            return Vec::new();
        }
        let points: Vec<_> = primitive.outline().into_iter().map(|p| p + offset).collect();
        if points.is_empty() {
            return Vec::new();
        }

        let mut shapes = Vec::new();
        if let Some(fill) = style.fill.filter(|_| primitive.is_closed()) {
            shapes.push(Shape::convex_polygon(points.clone(), fill, Stroke::NONE));
        }

        let Some(outline) = style.outline else {
            return shapes;
        };
        let stroke = Stroke::new(style.width, outline);
        match (style.dash, primitive.kind()) {
            (Some(dash), kind) => {
                let mut path = points;
                if kind != PrimitiveKind::Line {
                    if let Some(first) = path.first().copied() {
                        path.push(first);
                    }
                }
                shapes.extend(Shape::dashed_line(&path, stroke, dash.on, dash.off));
            }
            (None, PrimitiveKind::Line) => shapes.push(Shape::line(points, stroke)),
            (None, _) => shapes.push(Shape::closed_line(points, stroke)),
        }
        shapes
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new(Color32::WHITE)
    }
}
