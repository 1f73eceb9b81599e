use egui::{Pos2, Rect};

use crate::group::GroupId;

/// What a drag does to the selected group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InteractionMode {
    /// Nothing selected
    #[default]
    Idle,
    NormalMove,
    Resize,
    Rotate,
}

/// Content geometry captured when a resize or rotate drag starts; every drag
/// event recomputes the transform from this, never from the previous event.
#[derive(Debug, Clone, PartialEq)]
pub struct DragSnapshot {
    pub coords: Vec<Pos2>,
    pub rotation: f32,
    /// Extent of `coords`; its size is the pre-drag width and height
    pub bounds: Rect,
}

/// Pivot and pointer angle at the moment a rotate drag was grabbed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RotationGrab {
    pub center: Pos2,
    pub angle: f32,
}

/// Selection bookkeeping owned by the editor session.
#[derive(Debug, Clone, Default)]
pub struct SelectionState {
    selected: Option<GroupId>,
    mode: InteractionMode,
    /// Pointer position at the last processed event
    anchor: Option<Pos2>,
    /// Pointer position at press time
    origin: Option<Pos2>,
    snapshot: Option<DragSnapshot>,
    grab: Option<RotationGrab>,
}

impl SelectionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected(&self) -> Option<GroupId> {
        self.selected
    }

    pub fn mode(&self) -> InteractionMode {
        self.mode
    }

    pub fn anchor(&self) -> Option<Pos2> {
        self.anchor
    }

    pub fn origin(&self) -> Option<Pos2> {
        self.origin
    }

    pub fn snapshot(&self) -> Option<&DragSnapshot> {
        self.snapshot.as_ref()
    }

    pub fn grab(&self) -> Option<RotationGrab> {
        self.grab
    }

    pub fn is_selected(&self, id: GroupId) -> bool {
        self.selected == Some(id)
    }

    /// Start a gesture at `pos`: records the drag anchor and drops whatever
    /// the previous gesture captured.
    pub(crate) fn begin(&mut self, pos: Pos2) {
        self.anchor = Some(pos);
        self.origin = Some(pos);
        self.snapshot = None;
        self.grab = None;
    }

    pub(crate) fn select(&mut self, id: GroupId) {
        self.selected = Some(id);
        self.mode = InteractionMode::NormalMove;
    }

    pub(crate) fn set_mode(&mut self, mode: InteractionMode) {
        self.mode = mode;
    }

    pub(crate) fn set_anchor(&mut self, pos: Pos2) {
        self.anchor = Some(pos);
    }

    pub(crate) fn set_snapshot(&mut self, snapshot: DragSnapshot) {
        self.snapshot = Some(snapshot);
    }

    pub(crate) fn set_grab(&mut self, grab: RotationGrab) {
        self.grab = Some(grab);
    }

    /// End the current gesture; the selection itself survives.
    pub(crate) fn release(&mut self) {
        self.mode = if self.selected.is_some() {
            InteractionMode::NormalMove
        } else {
            InteractionMode::Idle
        };
        self.snapshot = None;
        self.grab = None;
    }

    /// Forget the selection entirely.
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}
