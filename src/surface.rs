use egui::{Pos2, Rect, Vec2};

use crate::error::{PaintError, PaintResult};
use crate::id_generator::IdGenerator;
use crate::primitive::{ItemId, Primitive, PrimitiveKind, Style};

/// Everything the editor needs from a rendering surface.
///
/// Implemented in full by every surface; there are no optional capabilities.
/// Any query against an id that was deleted returns
/// [`PaintError::StaleItem`].
pub trait DrawingSurface {
    /// Add a primitive on top of the draw order.
    fn create(&mut self, kind: PrimitiveKind, coords: Vec<Pos2>, style: Style) -> ItemId;

    fn delete(&mut self, id: ItemId) -> PaintResult<()>;

    fn primitive(&self, id: ItemId) -> PaintResult<&Primitive>;

    fn primitive_mut(&mut self, id: ItemId) -> PaintResult<&mut Primitive>;

    /// Ids in draw order, bottom first.
    fn ids(&self) -> Vec<ItemId>;

    /// Visible items touched by a pointer at `pos`, in draw order.
    fn find_overlapping(&self, pos: Pos2, tolerance: f32) -> Vec<ItemId>;

    /// The visible item closest to `pos` among those `accept` lets through,
    /// topmost on ties.
    fn find_closest(&self, pos: Pos2, accept: &dyn Fn(ItemId) -> bool) -> Option<ItemId>;

    fn clear(&mut self);

    /// Region the surface is cropped to, if any.
    fn viewport(&self) -> Option<Rect>;

    fn set_viewport(&mut self, viewport: Option<Rect>);

    fn exists(&self, id: ItemId) -> bool {
        self.primitive(id).is_ok()
    }

    fn kind(&self, id: ItemId) -> PaintResult<PrimitiveKind> {
        Ok(self.primitive(id)?.kind())
    }

    fn coords(&self, id: ItemId) -> PaintResult<Vec<Pos2>> {
        Ok(self.primitive(id)?.coords().to_vec())
    }

    fn set_coords(&mut self, id: ItemId, coords: Vec<Pos2>) -> PaintResult<()> {
        if coords.is_empty() {
            return Err(PaintError::EmptyGeometry);
        }
        self.primitive_mut(id)?.replace_coords(coords);
        Ok(())
    }

    fn translate(&mut self, id: ItemId, delta: Vec2) -> PaintResult<()> {
        self.primitive_mut(id)?.translate(delta);
        Ok(())
    }

    fn rotate_about(&mut self, id: ItemId, center: Pos2, radians: f32) -> PaintResult<()> {
        self.primitive_mut(id)?.rotate_about(center, radians);
        Ok(())
    }

    fn set_hidden(&mut self, id: ItemId, hidden: bool) -> PaintResult<()> {
        self.primitive_mut(id)?.style_mut().hidden = hidden;
        Ok(())
    }

    fn len(&self) -> usize {
        self.ids().len()
    }

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// In-memory drawing surface: an ordered list of primitives.
#[derive(Debug, Default)]
pub struct Canvas {
    items: Vec<Primitive>,
    ids: IdGenerator,
    viewport: Option<Rect>,
}

impl Canvas {
    pub fn new() -> Self {
        Self::default()
    }

    /// Primitives in draw order, bottom first.
    pub fn items(&self) -> &[Primitive] {
        &self.items
    }

    fn position(&self, id: ItemId) -> PaintResult<usize> {
        self.items
            .iter()
            .position(|item| item.id() == id)
            .ok_or(PaintError::StaleItem(id))
    }
}

impl DrawingSurface for Canvas {
    fn create(&mut self, kind: PrimitiveKind, coords: Vec<Pos2>, style: Style) -> ItemId {
        let id = self.ids.generate_id();
        self.items.push(Primitive::new(id, kind, coords, style));
        id
    }

    fn delete(&mut self, id: ItemId) -> PaintResult<()> {
        let index = self.position(id)?;
        self.items.remove(index);
        Ok(())
    }

    fn primitive(&self, id: ItemId) -> PaintResult<&Primitive> {
        self.items
            .iter()
            .find(|item| item.id() == id)
            .ok_or(PaintError::StaleItem(id))
    }

    fn primitive_mut(&mut self, id: ItemId) -> PaintResult<&mut Primitive> {
        self.items
            .iter_mut()
            .find(|item| item.id() == id)
            .ok_or(PaintError::StaleItem(id))
    }

    fn ids(&self) -> Vec<ItemId> {
        self.items.iter().map(Primitive::id).collect()
    }

    fn find_overlapping(&self, pos: Pos2, tolerance: f32) -> Vec<ItemId> {
        self.items
            .iter()
            .filter(|item| item.hit_test(pos, tolerance))
            .map(Primitive::id)
            .collect()
    }

    fn find_closest(&self, pos: Pos2, accept: &dyn Fn(ItemId) -> bool) -> Option<ItemId> {
        self.items
            .iter()
            .filter(|item| !item.is_hidden() && accept(item.id()))
            .map(|item| (item.id(), item.distance(pos)))
            // later items win ties: they are drawn on top
            .fold(None, |best: Option<(ItemId, f32)>, (id, distance)| match best {
                Some((_, best_distance)) if best_distance < distance => best,
                _ => Some((id, distance)),
            })
            .map(|(id, _)| id)
    }

    fn clear(&mut self) {
        self.items.clear();
        self.viewport = None;
    }

    fn viewport(&self) -> Option<Rect> {
        self.viewport
    }

    fn set_viewport(&mut self, viewport: Option<Rect>) {
        self.viewport = viewport;
    }

    fn len(&self) -> usize {
        self.items.len()
    }
}
