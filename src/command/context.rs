use crate::group::GroupRegistry;
use crate::surface::DrawingSurface;

/// Mutable access to everything a command touches: the surface and the
/// group bookkeeping that lives beside it.
#[derive(Debug)]
pub struct CommandContext<'a, S: DrawingSurface> {
    pub surface: &'a mut S,
    pub groups: &'a mut GroupRegistry,
}

impl<'a, S: DrawingSurface> CommandContext<'a, S> {
    pub fn new(surface: &'a mut S, groups: &'a mut GroupRegistry) -> Self {
        Self { surface, groups }
    }
}
