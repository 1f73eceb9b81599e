use crate::primitive::ItemId;

/// Monotonic item id source owned by one surface; ids are never reused, so a
/// deleted id stays stale forever.
#[derive(Debug, Clone)]
pub struct IdGenerator {
    next: ItemId,
}

impl IdGenerator {
    pub fn new() -> Self {
        Self { next: 1 }
    }

    pub fn generate_id(&mut self) -> ItemId {
        let id = self.next;
        self.next += 1;
        id
    }
}

impl Default for IdGenerator {
    fn default() -> Self {
        Self::new()
    }
}
