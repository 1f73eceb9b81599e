//! Shape lifecycle: previews while dragging, and turning a committed content
//! primitive into a group with a bounding box and four corner handles.

use egui::{Pos2, vec2};
use log::{debug, info};

use crate::color::Rgb;
use crate::command::CommandContext;
use crate::config::EditorConfig;
use crate::error::{PaintError, PaintResult};
use crate::geometry::BBoxCorners;
use crate::group::{Group, GroupId};
use crate::primitive::{ItemId, PrimitiveKind, Style};
use crate::shapes::Shape;
use crate::surface::DrawingSurface;

/// Replace the live preview with a fresh one for the current drag rectangle.
pub fn draw_preview<S: DrawingSurface>(
    surface: &mut S,
    preview: &mut Option<ItemId>,
    shape: Shape,
    start: Pos2,
    end: Pos2,
    color: Rgb,
    config: &EditorConfig,
) {
    cancel_preview(surface, preview);
    *preview = Some(shape.draw(surface, start, end, color, true, config));
}

/// Remove the live preview, if there is one.
pub fn cancel_preview<S: DrawingSurface>(surface: &mut S, preview: &mut Option<ItemId>) {
    if let Some(id) = preview.take() {
        if let Err(err) = surface.delete(id) {
            debug!("Preview already gone: {err}");
        }
    }
}

/// Commit a shape at the end of a drag: drop the preview, draw the filled
/// content primitive and wrap it into a new group.
pub fn finalize_shape<S: DrawingSurface>(
    ctx: &mut CommandContext<'_, S>,
    preview: &mut Option<ItemId>,
    shape: Shape,
    start: Pos2,
    end: Pos2,
    color: Rgb,
    config: &EditorConfig,
) -> PaintResult<GroupId> {
    cancel_preview(ctx.surface, preview);
    let content = shape.draw(ctx.surface, start, end, color, false, config);
    let group = register_group(ctx, content, config).inspect_err(|_| {
        // never leave an unowned content primitive behind
        let _ = ctx.surface.delete(content);
    })?;
    info!("Committed {} as {group}", shape.name());
    Ok(group)
}

/// Build the bounding box and handles for an existing content primitive and
/// register the group.
///
/// The box comes from what is painted, not the drag rectangle: polygons do
/// not fill their drag rectangle and turned ovals outgrow it.
pub fn register_group<S: DrawingSurface>(
    ctx: &mut CommandContext<'_, S>,
    content: ItemId,
    config: &EditorConfig,
) -> PaintResult<GroupId> {
    let rect = ctx
        .surface
        .primitive(content)?
        .painted_bounds()
        .ok_or(PaintError::EmptyGeometry)?;
    let corners = BBoxCorners::from_rect(rect);

    let bbox = ctx.surface.create(
        PrimitiveKind::Rectangle,
        vec![rect.min, rect.max],
        Style {
            fill: None,
            outline: Some(config.bbox_color),
            width: config.normal_outline_width,
            dash: Some(config.bbox_dash),
            hidden: true,
        },
    );

    let handles = corners
        .points()
        .map(|corner| create_handle(ctx.surface, corner, config));

    let id = ctx.groups.insert(Group::new(content, bbox, handles, corners));
    debug!("Registered {id}: bbox {bbox}, handles {handles:?}, corners {corners:?}");
    Ok(id)
}

fn create_handle<S: DrawingSurface>(surface: &mut S, center: Pos2, config: &EditorConfig) -> ItemId {
    surface.create(
        PrimitiveKind::Oval,
        handle_coords(center, config.handle_radius),
        Style {
            fill: Some(config.handle_color),
            outline: Some(config.handle_outline),
            width: 1.0,
            dash: None,
            hidden: false,
        },
    )
}

/// The two defining corners of a handle oval centered on `center`.
pub fn handle_coords(center: Pos2, radius: f32) -> Vec<Pos2> {
    let offset = vec2(radius, radius);
    vec![center - offset, center + offset]
}

/// Rebuild a group's corners from its content's painted extent and move the
/// bbox rectangle and handles onto them.
pub fn sync_bookkeeping<S: DrawingSurface>(
    ctx: &mut CommandContext<'_, S>,
    id: GroupId,
    config: &EditorConfig,
) -> PaintResult<()> {
    let group = ctx.groups.get_mut(id).ok_or(PaintError::StaleGroup(id))?;
    let rect = ctx
        .surface
        .primitive(group.content())?
        .painted_bounds()
        .ok_or(PaintError::EmptyGeometry)?;
    let corners = BBoxCorners::from_rect(rect);
    group.set_corners(corners);

    ctx.surface.set_coords(group.bbox(), vec![rect.min, rect.max])?;
    for (handle, corner) in group.handles().into_iter().zip(corners.points()) {
        ctx.surface
            .set_coords(handle, handle_coords(corner, config.handle_radius))?;
    }
    Ok(())
}

/// Remove a group and every one of its primitives. Returns false when the
/// group was already gone.
pub fn delete_group<S: DrawingSurface>(ctx: &mut CommandContext<'_, S>, id: GroupId) -> bool {
    let Some(group) = ctx.groups.remove(id) else {
        debug!("{id} already deleted");
        return false;
    };
    for item in group.item_ids() {
        if let Err(err) = ctx.surface.delete(item) {
            debug!("Deleting {id}: {err}");
        }
    }
    info!("Deleted {id}");
    true
}
