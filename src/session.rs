//! The editor session: owns the surface, the group bookkeeping, the selection
//! and the history, and routes input to the active tool.

use egui::{Key, Modifiers, Pos2};
use log::{debug, info, warn};

use crate::color::Rgb;
use crate::command::{Command, CommandContext, CommandHistory};
use crate::config::EditorConfig;
use crate::error::{PaintError, PaintResult};
use crate::geometry;
use crate::group::{GroupId, GroupRegistry};
use crate::input::InputEvent;
use crate::lifecycle;
use crate::primitive::{PrimitiveKind, Style};
use crate::selection::SelectionState;
use crate::shapes::{ShapeKind, ShapePalette};
use crate::surface::{Canvas, DrawingSurface};
use crate::tools::{PointerInput, Tool, ToolContext, ToolKind, ToolType};

/// A copied content primitive, detached from any surface.
#[derive(Debug, Clone, PartialEq)]
pub struct ClipboardEntry {
    pub kind: PrimitiveKind,
    pub coords: Vec<Pos2>,
    pub rotation: f32,
    pub style: Style,
}

pub struct EditorSession<S: DrawingSurface = Canvas> {
    surface: S,
    groups: GroupRegistry,
    selection: SelectionState,
    history: CommandHistory,
    tool: ToolType,
    color: Rgb,
    brush_size: f32,
    palette: ShapePalette,
    clipboard: Option<ClipboardEntry>,
    config: EditorConfig,
}

impl EditorSession<Canvas> {
    pub fn new(config: EditorConfig) -> Self {
        Self::with_surface(Canvas::new(), config)
    }
}

impl Default for EditorSession<Canvas> {
    fn default() -> Self {
        Self::new(EditorConfig::default())
    }
}

impl<S: DrawingSurface> EditorSession<S> {
    pub fn with_surface(surface: S, config: EditorConfig) -> Self {
        Self {
            surface,
            groups: GroupRegistry::new(),
            selection: SelectionState::new(),
            history: CommandHistory::new(),
            tool: ToolType::default(),
            color: Rgb::BLACK,
            brush_size: config.default_brush_size,
            palette: ShapePalette::new(&config),
            clipboard: None,
            config,
        }
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn groups(&self) -> &GroupRegistry {
        &self.groups
    }

    pub fn selection(&self) -> &SelectionState {
        &self.selection
    }

    pub fn history(&self) -> &CommandHistory {
        &self.history
    }

    pub fn tool(&self) -> &ToolType {
        &self.tool
    }

    pub fn tool_kind(&self) -> ToolKind {
        self.tool.kind()
    }

    pub fn color(&self) -> Rgb {
        self.color
    }

    pub fn brush_size(&self) -> f32 {
        self.brush_size
    }

    pub fn palette(&self) -> &ShapePalette {
        &self.palette
    }

    pub fn clipboard(&self) -> Option<&ClipboardEntry> {
        self.clipboard.as_ref()
    }

    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    /// Run `f` against the active tool with a context borrowing the rest of
    /// the session.
    fn with_tool<R>(&mut self, f: impl FnOnce(&mut ToolType, &mut ToolContext<'_, S>) -> R) -> R {
        let mut ctx = ToolContext {
            surface: &mut self.surface,
            groups: &mut self.groups,
            selection: &mut self.selection,
            config: &self.config,
            palette: &self.palette,
            color: self.color,
            brush_size: self.brush_size,
        };
        f(&mut self.tool, &mut ctx)
    }

    fn command_context(&mut self) -> CommandContext<'_, S> {
        CommandContext::new(&mut self.surface, &mut self.groups)
    }

    fn record(&mut self, command: Option<Command>) {
        if let Some(command) = command {
            self.history.push(command);
        }
    }

    /// Switch tools. The outgoing tool drops its stroke buffer or preview
    /// and, for Select, the selection.
    pub fn set_tool(&mut self, kind: ToolKind) {
        if self.tool.kind() == kind {
            return;
        }
        self.with_tool(|tool, ctx| tool.deactivate(ctx));
        self.tool = ToolType::new(kind);
        self.with_tool(|tool, ctx| tool.activate(ctx));
        info!("Switched to {} tool", kind.name());
    }

    pub fn handle_input(&mut self, event: InputEvent) {
        match event {
            InputEvent::PointerDown {
                pos,
                button,
                modifiers,
            } => self.pointer_down(PointerInput::new(pos, button, modifiers)),
            InputEvent::PointerMove {
                pos,
                held: Some(button),
                modifiers,
            } => self.pointer_move(PointerInput::new(pos, button, modifiers)),
            InputEvent::PointerMove { pos, held: None, .. } => self.hover(pos),
            InputEvent::PointerUp {
                pos,
                button,
                modifiers,
            } => self.pointer_up(PointerInput::new(pos, button, modifiers)),
            InputEvent::DoubleClick { pos } => self.double_click(pos),
            InputEvent::Key { key, modifiers } => {
                self.handle_key(key, modifiers);
            }
        }
    }

    pub fn pointer_down(&mut self, input: PointerInput) {
        let command = self.with_tool(|tool, ctx| tool.on_pointer_down(input, ctx));
        self.record(command);
    }

    pub fn pointer_move(&mut self, input: PointerInput) {
        let command = self.with_tool(|tool, ctx| tool.on_pointer_move(input, ctx));
        self.record(command);
    }

    pub fn pointer_up(&mut self, input: PointerInput) {
        let command = self.with_tool(|tool, ctx| tool.on_pointer_up(input, ctx));
        self.record(command);
    }

    /// Switch to Select and pick the group under `pos`.
    pub fn double_click(&mut self, pos: Pos2) {
        self.set_tool(ToolKind::Select);
        let input = PointerInput::primary(pos);
        self.pointer_down(input);
        self.pointer_up(input);
    }

    pub fn hover(&mut self, pos: Pos2) {
        self.with_tool(|tool, ctx| tool.on_hover(pos, ctx));
    }

    /// Keyboard shortcuts. Returns whether the key was consumed.
    pub fn handle_key(&mut self, key: Key, modifiers: Modifiers) -> bool {
        match key {
            Key::Delete | Key::Backspace => self.delete_selected(),
            Key::ArrowUp => {
                self.key_up();
                true
            }
            Key::ArrowDown => {
                self.key_down();
                true
            }
            Key::Z if modifiers.command => self.undo(),
            _ => false,
        }
    }

    /// Up: one more polygon side, or the reversed orientation.
    pub fn key_up(&mut self) {
        if self.palette.kind() == ShapeKind::Polygon {
            self.palette.increase_sides();
        } else {
            self.palette.set_reverse(true);
        }
        self.refresh_preview();
    }

    /// Down: one fewer polygon side, or the normal orientation.
    pub fn key_down(&mut self) {
        if self.palette.kind() == ShapeKind::Polygon {
            self.palette.decrease_sides();
        } else {
            self.palette.set_reverse(false);
        }
        self.refresh_preview();
    }

    pub fn cycle_shape(&mut self) -> ShapeKind {
        let kind = self.palette.cycle();
        info!("Shape: {}", self.palette.label());
        self.set_tool(ToolKind::Shape);
        self.refresh_preview();
        kind
    }

    pub fn increase_sides(&mut self) -> u32 {
        let sides = self.palette.increase_sides();
        self.refresh_preview();
        sides
    }

    pub fn decrease_sides(&mut self) -> u32 {
        let sides = self.palette.decrease_sides();
        self.refresh_preview();
        sides
    }

    fn refresh_preview(&mut self) {
        self.with_tool(|tool, ctx| {
            if let Some(shape_tool) = tool.as_shape_tool_mut() {
                shape_tool.refresh_preview(ctx);
            }
        });
    }

    /// Delete the selected group. Returns false when nothing was selected.
    pub fn delete_selected(&mut self) -> bool {
        let Some(id) = self.selection.selected() else {
            return false;
        };
        self.selection.clear();
        lifecycle::delete_group(&mut self.command_context(), id)
    }

    /// Undo the last action that still has something on the surface.
    pub fn undo(&mut self) -> bool {
        let mut ctx = CommandContext::new(&mut self.surface, &mut self.groups);
        let undone = self.history.undo(&mut ctx);
        if let Some(id) = self.selection.selected() {
            if !self.groups.contains(id) {
                debug!("Selected {id} went away with undo");
                self.selection.clear();
            }
        }
        undone
    }

    /// Parse the RGB text fields. Invalid input leaves the color unchanged.
    pub fn set_color_from_text(&mut self, r: &str, g: &str, b: &str) -> PaintResult<Rgb> {
        let color = Rgb::from_text(r, g, b).inspect_err(|err| warn!("Rejected color: {err}"))?;
        self.set_color(color);
        Ok(color)
    }

    /// Set the drawing color. Eraser and Fill hand over to Pencil so the new
    /// color is immediately drawable.
    pub fn set_color(&mut self, color: Rgb) {
        self.color = color;
        info!("Color set to {color}");
        if matches!(self.tool.kind(), ToolKind::Eraser | ToolKind::Fill) {
            self.set_tool(ToolKind::Pencil);
        }
    }

    pub fn set_brush_size(&mut self, size: f32) {
        if size > 0.0 {
            self.brush_size = size;
        } else {
            warn!("Ignoring brush size {size}");
        }
    }

    /// Turn the selected content about the centroid of its points, then move
    /// the bbox and handles onto its new extent.
    pub fn rotate_selected(&mut self, degrees: f32) -> bool {
        let Some(id) = self.selection.selected() else {
            debug!("Nothing selected to rotate");
            return false;
        };
        match self.try_rotate(id, degrees.to_radians()) {
            Ok(()) => {
                info!("Rotated {id} by {degrees} degrees");
                true
            }
            Err(err) => {
                debug!("Rotate skipped: {err}");
                if err.is_stale() {
                    self.selection.clear();
                }
                false
            }
        }
    }

    fn try_rotate(&mut self, id: GroupId, radians: f32) -> PaintResult<()> {
        let content = self
            .groups
            .get(id)
            .ok_or(PaintError::StaleGroup(id))?
            .content();
        let coords = self.surface.coords(content)?;
        let pivot = geometry::centroid(&coords).ok_or(PaintError::EmptyGeometry)?;
        self.surface.rotate_about(content, pivot, radians)?;
        let mut ctx = CommandContext::new(&mut self.surface, &mut self.groups);
        lifecycle::sync_bookkeeping(&mut ctx, id, &self.config)
    }

    pub fn rotate_left(&mut self) -> bool {
        self.rotate_selected(-self.config.rotate_step_degrees)
    }

    pub fn rotate_right(&mut self) -> bool {
        self.rotate_selected(self.config.rotate_step_degrees)
    }

    pub fn copy_selected(&mut self) -> bool {
        let Some(id) = self.selection.selected() else {
            return false;
        };
        let Some(content) = self.groups.get(id).map(|group| group.content()) else {
            self.selection.clear();
            return false;
        };
        match self.surface.primitive(content) {
            Ok(primitive) => {
                let mut style = primitive.style().clone();
                // copy the shape, not its selection emphasis
                style.width = self.config.normal_outline_width;
                style.dash = None;
                self.clipboard = Some(ClipboardEntry {
                    kind: primitive.kind(),
                    coords: primitive.coords().to_vec(),
                    rotation: primitive.rotation(),
                    style,
                });
                info!("Copied {id}");
                true
            }
            Err(err) => {
                debug!("Copy skipped: {err}");
                self.selection.clear();
                false
            }
        }
    }

    pub fn cut_selected(&mut self) -> bool {
        self.copy_selected() && self.delete_selected()
    }

    /// Paste the clipboard as a new group, shifted by the paste offset.
    pub fn paste(&mut self) -> Option<GroupId> {
        let entry = self.clipboard.clone()?;
        let offset = egui::vec2(self.config.paste_offset, self.config.paste_offset);
        let coords = entry.coords.iter().map(|point| *point + offset).collect();

        let content = self.surface.create(entry.kind, coords, entry.style);
        if let Ok(primitive) = self.surface.primitive_mut(content) {
            primitive.set_rotation(entry.rotation);
        }
        let mut ctx = CommandContext::new(&mut self.surface, &mut self.groups);
        match lifecycle::register_group(&mut ctx, content, &self.config) {
            Ok(id) => {
                self.history.push(Command::Paste(id));
                info!("Pasted {id}");
                Some(id)
            }
            Err(err) => {
                warn!("Paste failed: {err}");
                let _ = ctx.surface.delete(content);
                None
            }
        }
    }

    /// Keep only the selected group and crop the view to its extent.
    pub fn crop_to_selection(&mut self) -> bool {
        let Some(id) = self.selection.selected() else {
            return false;
        };
        let Some(group) = self.groups.get(id) else {
            self.selection.clear();
            return false;
        };
        let keep = group.item_ids();
        let Some(rect) = self
            .surface
            .primitive(group.content())
            .ok()
            .and_then(|primitive| primitive.painted_bounds())
        else {
            self.selection.clear();
            return false;
        };

        let mut ctx = CommandContext::new(&mut self.surface, &mut self.groups);
        for other in ctx.groups.ids().into_iter().filter(|other| *other != id) {
            lifecycle::delete_group(&mut ctx, other);
        }
        for item in ctx.surface.ids() {
            if !keep.contains(&item) {
                let _ = ctx.surface.delete(item);
            }
        }
        self.surface.set_viewport(Some(rect));
        info!("Cropped to {id} at {rect:?}");
        true
    }

    /// File > New: an empty surface with no history.
    pub fn clear_canvas(&mut self) {
        self.with_tool(|tool, ctx| tool.deactivate(ctx));
        self.surface.clear();
        self.groups.clear();
        self.selection.clear();
        self.history.clear();
        info!("Canvas cleared");
    }
}
