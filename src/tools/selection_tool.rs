//! The selection & manipulation engine: picks a group under the pointer and
//! turns a drag into a move, resize or rotate of that group.

use egui::{PointerButton, Pos2};
use log::{debug, info};

use crate::command::Command;
use crate::config::EditorConfig;
use crate::error::{PaintError, PaintResult};
use crate::geometry::{self, Corner};
use crate::group::{GroupId, GroupRegistry};
use crate::lifecycle;
use crate::primitive::ItemId;
use crate::selection::{DragSnapshot, InteractionMode, RotationGrab};
use crate::surface::DrawingSurface;
use crate::tools::{PointerInput, Tool, ToolContext};

#[derive(Debug, Clone, Default)]
pub struct SelectionTool;

impl SelectionTool {
    pub fn new() -> Self {
        Self
    }

    /// Pick the topmost group under `input` and decide what a drag will do.
    fn press<S: DrawingSurface>(
        &mut self,
        input: PointerInput,
        ctx: &mut ToolContext<'_, S>,
    ) -> PaintResult<()> {
        clear_emphasis(ctx.surface, ctx.groups, ctx.config);
        ctx.selection.begin(input.pos);

        let hits = ctx.surface.find_overlapping(input.pos, ctx.config.hit_tolerance);
        let Some(group_id) = hits
            .iter()
            .rev()
            .find_map(|item| ctx.groups.group_of(*item))
        else {
            debug!("No group under {:?}", input.pos);
            ctx.selection.clear();
            return Ok(());
        };
        let group = ctx
            .groups
            .get(group_id)
            .ok_or(PaintError::StaleGroup(group_id))?;
        let (content, bbox, corners) = (group.content(), group.bbox(), *group.corners());

        ctx.selection.select(group_id);
        emphasize(ctx.surface, content, bbox, ctx.config)?;

        let Some(corner) = corners.near(input.pos, ctx.config.corner_proximity) else {
            debug!("Selected {group_id} for moving");
            return Ok(());
        };

        let primitive = ctx.surface.primitive(content)?;
        let coords = primitive.coords().to_vec();
        let bounds = geometry::bounds_of(&coords).ok_or(PaintError::EmptyGeometry)?;
        ctx.selection.set_snapshot(DragSnapshot {
            coords,
            rotation: primitive.rotation(),
            bounds,
        });

        if wants_resize(input) {
            ctx.selection.set_mode(InteractionMode::Resize);
        } else {
            let center = corners.center();
            ctx.selection.set_grab(RotationGrab {
                center,
                angle: geometry::pointer_angle(center, input.pos),
            });
            ctx.selection.set_mode(InteractionMode::Rotate);
        }
        debug!(
            "Grabbed {group_id} at {} corner: {:?}",
            corner.as_str(),
            ctx.selection.mode()
        );
        Ok(())
    }

    fn drag<S: DrawingSurface>(
        &mut self,
        input: PointerInput,
        ctx: &mut ToolContext<'_, S>,
    ) -> PaintResult<()> {
        let Some(group_id) = ctx.selection.selected() else {
            return Ok(());
        };
        match ctx.selection.mode() {
            InteractionMode::Idle => {}
            InteractionMode::NormalMove => {
                let Some(anchor) = ctx.selection.anchor() else {
                    return Ok(());
                };
                let delta = input.pos - anchor;
                let group = ctx
                    .groups
                    .get_mut(group_id)
                    .ok_or(PaintError::StaleGroup(group_id))?;
                for item in group.item_ids() {
                    ctx.surface.translate(item, delta)?;
                }
                group.corners_mut().translate(delta);
            }
            InteractionMode::Resize => {
                let (Some(origin), Some(snapshot)) =
                    (ctx.selection.origin(), ctx.selection.snapshot())
                else {
                    return Ok(());
                };
                let size = match geometry::resized_extent(snapshot.bounds, input.pos - origin) {
                    Ok(size) => size,
                    Err(err) => {
                        debug!("Resize rejected: {err}");
                        ctx.selection.set_anchor(input.pos);
                        return Ok(());
                    }
                };
                let coords = geometry::remap_points(&snapshot.coords, snapshot.bounds, size);
                // a sliver can still round down to nothing in f32
                let collapsed = geometry::bounds_of(&coords)
                    .is_none_or(|rect| rect.width() <= 0.0 || rect.height() <= 0.0);
                if collapsed {
                    ctx.selection.set_anchor(input.pos);
                    return Ok(());
                }
                let content = content_of(ctx.groups, group_id)?;
                ctx.surface.set_coords(content, coords)?;
                let config = ctx.config;
                lifecycle::sync_bookkeeping(&mut ctx.command_context(), group_id, config)?;
            }
            InteractionMode::Rotate => {
                let (Some(grab), Some(snapshot)) = (ctx.selection.grab(), ctx.selection.snapshot())
                else {
                    return Ok(());
                };
                let theta = geometry::pointer_angle(grab.center, input.pos) - grab.angle;
                let (coords, rotation) = (snapshot.coords.clone(), snapshot.rotation);
                let content = content_of(ctx.groups, group_id)?;

                // absolute: always start over from the press-time geometry.
                // Handles stay on the bbox corners and follow on release.
                let primitive = ctx.surface.primitive_mut(content)?;
                primitive.replace_coords(coords);
                primitive.set_rotation(rotation);
                primitive.rotate_about(grab.center, theta);
            }
        }
        ctx.selection.set_anchor(input.pos);
        Ok(())
    }

    fn release<S: DrawingSurface>(&mut self, ctx: &mut ToolContext<'_, S>) -> PaintResult<()> {
        let mode = ctx.selection.mode();
        if let (Some(group_id), InteractionMode::Rotate) = (ctx.selection.selected(), mode) {
            // corners follow the turned content once the gesture is over
            let config = ctx.config;
            lifecycle::sync_bookkeeping(&mut ctx.command_context(), group_id, config)?;
        }
        ctx.selection.release();
        Ok(())
    }
}

/// Secondary button or Shift resizes from a corner; a plain primary press rotates.
fn wants_resize(input: PointerInput) -> bool {
    input.button == PointerButton::Secondary || input.modifiers.shift
}

fn content_of(groups: &GroupRegistry, id: GroupId) -> PaintResult<ItemId> {
    groups
        .get(id)
        .map(|group| group.content())
        .ok_or(PaintError::StaleGroup(id))
}

/// Hide every bbox and give every content outline its normal look.
fn clear_emphasis<S: DrawingSurface>(surface: &mut S, groups: &GroupRegistry, config: &EditorConfig) {
    for group in groups.iter() {
        let _ = surface.set_hidden(group.bbox(), true);
        if let Ok(primitive) = surface.primitive_mut(group.content()) {
            let style = primitive.style_mut();
            style.width = config.normal_outline_width;
            style.dash = None;
        }
    }
}

/// Show the bbox and thicken and dash the content outline.
fn emphasize<S: DrawingSurface>(
    surface: &mut S,
    content: ItemId,
    bbox: ItemId,
    config: &EditorConfig,
) -> PaintResult<()> {
    surface.set_hidden(bbox, false)?;
    let style = surface.primitive_mut(content)?.style_mut();
    style.width = config.selected_outline_width;
    style.dash = Some(config.selected_dash);
    Ok(())
}

impl Tool for SelectionTool {
    fn name(&self) -> &'static str {
        "Select"
    }

    fn deactivate<S: DrawingSurface>(&mut self, ctx: &mut ToolContext<'_, S>) {
        clear_emphasis(ctx.surface, ctx.groups, ctx.config);
        ctx.selection.clear();
    }

    fn on_pointer_down<S: DrawingSurface>(
        &mut self,
        input: PointerInput,
        ctx: &mut ToolContext<'_, S>,
    ) -> Option<Command> {
        if let Err(err) = self.press(input, ctx) {
            debug!("Selection dropped: {err}");
            ctx.selection.clear();
        }
        None
    }

    fn on_pointer_move<S: DrawingSurface>(
        &mut self,
        input: PointerInput,
        ctx: &mut ToolContext<'_, S>,
    ) -> Option<Command> {
        if let Err(err) = self.drag(input, ctx) {
            debug!("Selection dropped: {err}");
            ctx.selection.clear();
        }
        None
    }

    fn on_pointer_up<S: DrawingSurface>(
        &mut self,
        _input: PointerInput,
        ctx: &mut ToolContext<'_, S>,
    ) -> Option<Command> {
        if let Err(err) = self.release(ctx) {
            debug!("Selection dropped: {err}");
            ctx.selection.clear();
        }
        if let Some(group) = ctx.selection.selected() {
            info!("{group} released");
        }
        None
    }

    /// Highlight whichever handles sit under the pointer.
    fn on_hover<S: DrawingSurface>(&mut self, pos: Pos2, ctx: &mut ToolContext<'_, S>) {
        for group in ctx.groups.iter() {
            for corner in Corner::ALL {
                let handle = group.handle(corner);
                let Ok(primitive) = ctx.surface.primitive_mut(handle) else {
                    continue;
                };
                let color = if primitive.bounds().contains(pos) {
                    ctx.config.handle_highlight
                } else {
                    ctx.config.handle_color
                };
                primitive.style_mut().fill = Some(color);
            }
        }
    }
}
