use log::{debug, info};

use crate::command::Command;
use crate::primitive::PrimitiveKind;
use crate::surface::DrawingSurface;
use crate::tools::{PointerInput, Tool, ToolContext};

/// Recolors the item closest to the click.
#[derive(Debug, Clone, Default)]
pub struct FillTool;

impl FillTool {
    pub fn new() -> Self {
        Self
    }
}

impl Tool for FillTool {
    fn name(&self) -> &'static str {
        "Fill"
    }

    fn deactivate<S: DrawingSurface>(&mut self, _ctx: &mut ToolContext<'_, S>) {}

    fn on_pointer_down<S: DrawingSurface>(
        &mut self,
        input: PointerInput,
        ctx: &mut ToolContext<'_, S>,
    ) -> Option<Command> {
        let groups = &*ctx.groups;
        let Some(item) = ctx
            .surface
            .find_closest(input.pos, &|id| !groups.is_bookkeeping(id))
        else {
            debug!("Nothing to fill at {:?}", input.pos);
            return None;
        };

        let color = ctx.color;
        match ctx.surface.primitive_mut(item) {
            Ok(primitive) => {
                // lines have no interior; recolor the stroke instead
                if primitive.kind() == PrimitiveKind::Line {
                    primitive.style_mut().outline = Some(color);
                } else {
                    primitive.style_mut().fill = Some(color);
                }
                info!("Filled item {item} with {color}");
            }
            Err(err) => debug!("Fill target vanished: {err}"),
        }
        None
    }

    fn on_pointer_move<S: DrawingSurface>(
        &mut self,
        _input: PointerInput,
        _ctx: &mut ToolContext<'_, S>,
    ) -> Option<Command> {
        None
    }

    fn on_pointer_up<S: DrawingSurface>(
        &mut self,
        _input: PointerInput,
        _ctx: &mut ToolContext<'_, S>,
    ) -> Option<Command> {
        None
    }
}
