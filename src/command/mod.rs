mod context;
mod history;

use log::debug;

use crate::error::{PaintError, PaintResult};
use crate::group::GroupId;
use crate::lifecycle;
use crate::primitive::ItemId;
use crate::surface::DrawingSurface;

pub use context::CommandContext;
pub use history::CommandHistory;

/// One undoable user action. Each entry owns everything the action created,
/// so undoing it removes all of it at once.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// A shape drawn with the shape tool
    CreateShape(GroupId),
    /// A shape pasted from the clipboard
    Paste(GroupId),
    /// A freehand pencil or eraser stroke
    AddStroke(ItemId),
}

impl Command {
    pub fn name(&self) -> &'static str {
        match self {
            Command::CreateShape(_) => "Create Shape",
            Command::Paste(_) => "Paste",
            Command::AddStroke(_) => "Add Stroke",
        }
    }

    /// Remove what this command created. Fails with a stale-reference error
    /// when it was already deleted some other way.
    pub fn undo<S: DrawingSurface>(&self, ctx: &mut CommandContext<'_, S>) -> PaintResult<()> {
        match *self {
            Command::CreateShape(group) | Command::Paste(group) => {
                if lifecycle::delete_group(ctx, group) {
                    Ok(())
                } else {
                    Err(PaintError::StaleGroup(group))
                }
            }
            Command::AddStroke(item) => {
                ctx.surface.delete(item)?;
                debug!("Removed stroke {item}");
                Ok(())
            }
        }
    }
}
