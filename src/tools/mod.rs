use egui::{Modifiers, PointerButton, Pos2};

use crate::color::Rgb;
use crate::command::{Command, CommandContext};
use crate::config::EditorConfig;
use crate::group::GroupRegistry;
use crate::selection::SelectionState;
use crate::shapes::ShapePalette;
use crate::surface::DrawingSurface;

mod draw_stroke_tool;
mod fill_tool;
mod selection_tool;
mod shape_tool;

pub use draw_stroke_tool::{DrawStrokeTool, StrokeKind};
pub use fill_tool::FillTool;
pub use selection_tool::SelectionTool;
pub use shape_tool::ShapeTool;

/// The tool modes; exactly one is active at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ToolKind {
    Pencil,
    Eraser,
    Fill,
    Shape,
    Select,
}

impl ToolKind {
    pub const ALL: [ToolKind; 5] = [
        ToolKind::Pencil,
        ToolKind::Eraser,
        ToolKind::Fill,
        ToolKind::Shape,
        ToolKind::Select,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            ToolKind::Pencil => "Pencil",
            ToolKind::Eraser => "Eraser",
            ToolKind::Fill => "Fill",
            ToolKind::Shape => "Shape",
            ToolKind::Select => "Select",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            ToolKind::Pencil => "✏",
            ToolKind::Eraser => "⌫",
            ToolKind::Fill => "🪣",
            ToolKind::Shape => "⬟",
            ToolKind::Select => "⬚",
        }
    }
}

/// One pointer sample in canvas coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerInput {
    pub pos: Pos2,
    pub button: PointerButton,
    pub modifiers: Modifiers,
}

impl PointerInput {
    pub fn new(pos: Pos2, button: PointerButton, modifiers: Modifiers) -> Self {
        Self {
            pos,
            button,
            modifiers,
        }
    }

    pub fn primary(pos: Pos2) -> Self {
        Self::new(pos, PointerButton::Primary, Modifiers::NONE)
    }
}

/// Everything a tool may read or mutate while handling an event.
pub struct ToolContext<'a, S: DrawingSurface> {
    pub surface: &'a mut S,
    pub groups: &'a mut GroupRegistry,
    pub selection: &'a mut SelectionState,
    pub config: &'a EditorConfig,
    pub palette: &'a ShapePalette,
    pub color: Rgb,
    pub brush_size: f32,
}

impl<S: DrawingSurface> ToolContext<'_, S> {
    pub fn command_context(&mut self) -> CommandContext<'_, S> {
        CommandContext::new(self.surface, self.groups)
    }
}

/// Tool trait defines the interface for all drawing tools.
///
/// Pointer handlers return the command to record in the undo history when
/// the gesture created something.
pub trait Tool {
    fn name(&self) -> &'static str;

    /// Called when the tool is selected.
    fn activate<S: DrawingSurface>(&mut self, _ctx: &mut ToolContext<'_, S>) {}

    /// Called when the tool is deselected. Must drop any in-progress state
    /// (stroke buffers, previews).
    fn deactivate<S: DrawingSurface>(&mut self, ctx: &mut ToolContext<'_, S>);

    fn on_pointer_down<S: DrawingSurface>(
        &mut self,
        input: PointerInput,
        ctx: &mut ToolContext<'_, S>,
    ) -> Option<Command>;

    /// Pointer motion while a button is held.
    fn on_pointer_move<S: DrawingSurface>(
        &mut self,
        input: PointerInput,
        ctx: &mut ToolContext<'_, S>,
    ) -> Option<Command>;

    fn on_pointer_up<S: DrawingSurface>(
        &mut self,
        input: PointerInput,
        ctx: &mut ToolContext<'_, S>,
    ) -> Option<Command>;

    /// Pointer motion with no button held.
    fn on_hover<S: DrawingSurface>(&mut self, _pos: Pos2, _ctx: &mut ToolContext<'_, S>) {}
}

/// Enum representing all available tool types, dispatched without boxing.
#[derive(Debug, Clone)]
pub enum ToolType {
    DrawStroke(DrawStrokeTool),
    Fill(FillTool),
    Shape(ShapeTool),
    Selection(SelectionTool),
}

impl ToolType {
    pub fn new(kind: ToolKind) -> Self {
        match kind {
            ToolKind::Pencil => Self::DrawStroke(DrawStrokeTool::new(StrokeKind::Pencil)),
            ToolKind::Eraser => Self::DrawStroke(DrawStrokeTool::new(StrokeKind::Eraser)),
            ToolKind::Fill => Self::Fill(FillTool::new()),
            ToolKind::Shape => Self::Shape(ShapeTool::new()),
            ToolKind::Select => Self::Selection(SelectionTool::new()),
        }
    }

    pub fn kind(&self) -> ToolKind {
        match self {
            Self::DrawStroke(tool) => match tool.stroke_kind() {
                StrokeKind::Pencil => ToolKind::Pencil,
                StrokeKind::Eraser => ToolKind::Eraser,
            },
            Self::Fill(_) => ToolKind::Fill,
            Self::Shape(_) => ToolKind::Shape,
            Self::Selection(_) => ToolKind::Select,
        }
    }

    pub fn as_shape_tool_mut(&mut self) -> Option<&mut ShapeTool> {
        match self {
            Self::Shape(tool) => Some(tool),
            _ => None,
        }
    }
}

impl Default for ToolType {
    fn default() -> Self {
        Self::new(ToolKind::Pencil)
    }
}

impl Tool for ToolType {
    fn name(&self) -> &'static str {
        match self {
            Self::DrawStroke(tool) => tool.name(),
            Self::Fill(tool) => tool.name(),
            Self::Shape(tool) => tool.name(),
            Self::Selection(tool) => tool.name(),
        }
    }

    fn activate<S: DrawingSurface>(&mut self, ctx: &mut ToolContext<'_, S>) {
        match self {
            Self::DrawStroke(tool) => tool.activate(ctx),
            Self::Fill(tool) => tool.activate(ctx),
            Self::Shape(tool) => tool.activate(ctx),
            Self::Selection(tool) => tool.activate(ctx),
        }
    }

    fn deactivate<S: DrawingSurface>(&mut self, ctx: &mut ToolContext<'_, S>) {
        match self {
            Self::DrawStroke(tool) => tool.deactivate(ctx),
            Self::Fill(tool) => tool.deactivate(ctx),
            Self::Shape(tool) => tool.deactivate(ctx),
            Self::Selection(tool) => tool.deactivate(ctx),
        }
    }

    fn on_pointer_down<S: DrawingSurface>(
        &mut self,
        input: PointerInput,
        ctx: &mut ToolContext<'_, S>,
    ) -> Option<Command> {
        match self {
            Self::DrawStroke(tool) => tool.on_pointer_down(input, ctx),
            Self::Fill(tool) => tool.on_pointer_down(input, ctx),
            Self::Shape(tool) => tool.on_pointer_down(input, ctx),
            Self::Selection(tool) => tool.on_pointer_down(input, ctx),
        }
    }

    fn on_pointer_move<S: DrawingSurface>(
        &mut self,
        input: PointerInput,
        ctx: &mut ToolContext<'_, S>,
    ) -> Option<Command> {
        match self {
            Self::DrawStroke(tool) => tool.on_pointer_move(input, ctx),
            Self::Fill(tool) => tool.on_pointer_move(input, ctx),
            Self::Shape(tool) => tool.on_pointer_move(input, ctx),
            Self::Selection(tool) => tool.on_pointer_move(input, ctx),
        }
    }

    fn on_pointer_up<S: DrawingSurface>(
        &mut self,
        input: PointerInput,
        ctx: &mut ToolContext<'_, S>,
    ) -> Option<Command> {
        match self {
            Self::DrawStroke(tool) => tool.on_pointer_up(input, ctx),
            Self::Fill(tool) => tool.on_pointer_up(input, ctx),
            Self::Shape(tool) => tool.on_pointer_up(input, ctx),
            Self::Selection(tool) => tool.on_pointer_up(input, ctx),
        }
    }

    fn on_hover<S: DrawingSurface>(&mut self, pos: Pos2, ctx: &mut ToolContext<'_, S>) {
        match self {
            Self::DrawStroke(tool) => tool.on_hover(pos, ctx),
            Self::Fill(tool) => tool.on_hover(pos, ctx),
            Self::Shape(tool) => tool.on_hover(pos, ctx),
            Self::Selection(tool) => tool.on_hover(pos, ctx),
        }
    }
}
