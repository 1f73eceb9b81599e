use egui::{PointerButton, Pos2};
use log::{debug, warn};

use crate::command::Command;
use crate::lifecycle;
use crate::primitive::ItemId;
use crate::surface::DrawingSurface;
use crate::tools::{PointerInput, Tool, ToolContext};

#[derive(Debug, Clone, Copy, PartialEq)]
struct ShapeDrag {
    start: Pos2,
    last: Pos2,
    button: PointerButton,
}

/// Places palette shapes: dashed preview while dragging, committed group on
/// release.
#[derive(Debug, Clone, Default)]
pub struct ShapeTool {
    drag: Option<ShapeDrag>,
    preview: Option<ItemId>,
}

impl ShapeTool {
    pub fn new() -> Self {
        Self::default()
    }

    /// The live preview primitive, if a drag is in progress.
    pub fn preview(&self) -> Option<ItemId> {
        self.preview
    }

    /// Redraw the live preview after the palette changed mid-drag.
    pub fn refresh_preview<S: DrawingSurface>(&mut self, ctx: &mut ToolContext<'_, S>) {
        let Some(drag) = self.drag else {
            return;
        };
        if self.preview.is_none() {
            return;
        }
        let shape = ctx.palette.shape_for(drag.button);
        lifecycle::draw_preview(
            ctx.surface,
            &mut self.preview,
            shape,
            drag.start,
            drag.last,
            ctx.color,
            ctx.config,
        );
    }
}

impl Tool for ShapeTool {
    fn name(&self) -> &'static str {
        "Shape"
    }

    fn deactivate<S: DrawingSurface>(&mut self, ctx: &mut ToolContext<'_, S>) {
        lifecycle::cancel_preview(ctx.surface, &mut self.preview);
        self.drag = None;
    }

    fn on_pointer_down<S: DrawingSurface>(
        &mut self,
        input: PointerInput,
        ctx: &mut ToolContext<'_, S>,
    ) -> Option<Command> {
        lifecycle::cancel_preview(ctx.surface, &mut self.preview);
        self.drag = Some(ShapeDrag {
            start: input.pos,
            last: input.pos,
            button: input.button,
        });
        None
    }

    fn on_pointer_move<S: DrawingSurface>(
        &mut self,
        input: PointerInput,
        ctx: &mut ToolContext<'_, S>,
    ) -> Option<Command> {
        let drag = self.drag.as_mut()?;
        drag.last = input.pos;
        let (start, button) = (drag.start, drag.button);

        let shape = ctx.palette.shape_for(button);
        lifecycle::draw_preview(
            ctx.surface,
            &mut self.preview,
            shape,
            start,
            input.pos,
            ctx.color,
            ctx.config,
        );
        None
    }

    fn on_pointer_up<S: DrawingSurface>(
        &mut self,
        input: PointerInput,
        ctx: &mut ToolContext<'_, S>,
    ) -> Option<Command> {
        let drag = self.drag.take()?;
        let extent = input.pos - drag.start;
        if extent.x == 0.0 || extent.y == 0.0 {
            debug!("Flat drag {extent:?}, no shape placed");
            lifecycle::cancel_preview(ctx.surface, &mut self.preview);
            return None;
        }

        let shape = ctx.palette.shape_for(drag.button);
        let (color, config) = (ctx.color, ctx.config);
        let mut command_ctx = ctx.command_context();
        match lifecycle::finalize_shape(
            &mut command_ctx,
            &mut self.preview,
            shape,
            drag.start,
            input.pos,
            color,
            config,
        ) {
            Ok(group) => Some(Command::CreateShape(group)),
            Err(err) => {
                warn!("Could not place {}: {err}", shape.name());
                None
            }
        }
    }
}
