use log::{debug, info};

use super::{Command, CommandContext};
use crate::surface::DrawingSurface;

/// Last-action history. There is no redo: undoing deletes.
#[derive(Debug, Default)]
pub struct CommandHistory {
    undo_stack: Vec<Command>,
}

impl CommandHistory {
    /// Creates a new empty command history
    pub fn new() -> Self {
        Self {
            undo_stack: Vec::new(),
        }
    }

    pub fn push(&mut self, command: Command) {
        debug!("Recorded {command:?}");
        self.undo_stack.push(command);
    }

    /// Undo the most recent command that still has something to remove.
    ///
    /// Entries whose items were already deleted are dropped on the way.
    /// Returns false, without touching the surface, when nothing was undone.
    pub fn undo<S: DrawingSurface>(&mut self, ctx: &mut CommandContext<'_, S>) -> bool {
        while let Some(command) = self.undo_stack.pop() {
            match command.undo(ctx) {
                Ok(()) => {
                    info!("Undid {}", command.name());
                    return true;
                }
                Err(err) => debug!("Skipping {command:?}: {err}"),
            }
        }
        debug!("Nothing to undo");
        false
    }

    /// Returns true if there are commands that can be undone
    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    pub fn undo_stack(&self) -> &[Command] {
        &self.undo_stack
    }

    pub fn len(&self) -> usize {
        self.undo_stack.len()
    }

    pub fn is_empty(&self) -> bool {
        self.undo_stack.is_empty()
    }

    /// Clear the command history
    pub fn clear(&mut self) {
        self.undo_stack.clear();
    }
}
