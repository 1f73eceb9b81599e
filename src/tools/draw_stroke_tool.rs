use egui::Pos2;
use log::{debug, info};

use crate::command::Command;
use crate::primitive::{ItemId, PrimitiveKind, Style};
use crate::surface::DrawingSurface;
use crate::tools::{PointerInput, Tool, ToolContext};

/// What a freehand stroke paints with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrokeKind {
    /// Current color at brush width
    Pencil,
    /// Background color at a multiple of the brush width
    Eraser,
}

/// Freehand drawing: one polyline per press-drag-release.
#[derive(Debug, Clone)]
pub struct DrawStrokeTool {
    kind: StrokeKind,
    // Transient state: the stroke being drawn (if any)
    points: Vec<Pos2>,
    item: Option<ItemId>,
}

impl DrawStrokeTool {
    pub fn new(kind: StrokeKind) -> Self {
        Self {
            kind,
            points: Vec::new(),
            item: None,
        }
    }

    pub fn stroke_kind(&self) -> StrokeKind {
        self.kind
    }

    fn style<S: DrawingSurface>(&self, ctx: &ToolContext<'_, S>) -> Style {
        let (color, width) = match self.kind {
            StrokeKind::Pencil => (ctx.color, ctx.brush_size),
            StrokeKind::Eraser => (
                ctx.config.background,
                ctx.brush_size * ctx.config.eraser_width_factor,
            ),
        };
        Style {
            fill: None,
            outline: Some(color),
            width,
            dash: None,
            hidden: false,
        }
    }

    fn reset(&mut self) {
        self.points.clear();
        self.item = None;
    }
}

impl Tool for DrawStrokeTool {
    fn name(&self) -> &'static str {
        match self.kind {
            StrokeKind::Pencil => "Pencil",
            StrokeKind::Eraser => "Eraser",
        }
    }

    fn deactivate<S: DrawingSurface>(&mut self, _ctx: &mut ToolContext<'_, S>) {
        // A stroke cut short by a tool switch stays on the surface but is
        // not recorded.
        self.reset();
    }

    fn on_pointer_down<S: DrawingSurface>(
        &mut self,
        input: PointerInput,
        _ctx: &mut ToolContext<'_, S>,
    ) -> Option<Command> {
        self.reset();
        self.points.push(input.pos);
        None
    }

    fn on_pointer_move<S: DrawingSurface>(
        &mut self,
        input: PointerInput,
        ctx: &mut ToolContext<'_, S>,
    ) -> Option<Command> {
        if self.points.is_empty() {
            return None;
        }
        self.points.push(input.pos);

        match self.item {
            Some(item) => {
                if let Err(err) = ctx.surface.set_coords(item, self.points.clone()) {
                    debug!("Stroke lost mid-drag: {err}");
                    self.reset();
                }
            }
            None => {
                let style = self.style(ctx);
                self.item = Some(ctx.surface.create(
                    PrimitiveKind::Line,
                    self.points.clone(),
                    style,
                ));
            }
        }
        None
    }

    fn on_pointer_up<S: DrawingSurface>(
        &mut self,
        _input: PointerInput,
        _ctx: &mut ToolContext<'_, S>,
    ) -> Option<Command> {
        let item = self.item.take();
        let count = self.points.len();
        self.points.clear();

        // a click without motion leaves nothing behind
        let item = item?;
        info!("{} stroke {item} with {count} points", self.name());
        Some(Command::AddStroke(item))
    }
}
