use egui::{Context, Event, Key, Modifiers, PointerButton, Pos2, Rect, Vec2};

/// Represents the input events the editor reacts to, in surface coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// Mouse button was pressed on the canvas
    PointerDown {
        pos: Pos2,
        button: PointerButton,
        modifiers: Modifiers,
    },
    /// Mouse moved; `held` is the button that started the current drag
    PointerMove {
        pos: Pos2,
        held: Option<PointerButton>,
        modifiers: Modifiers,
    },
    /// Mouse button was released
    PointerUp {
        pos: Pos2,
        button: PointerButton,
        modifiers: Modifiers,
    },
    /// Primary button clicked twice in quick succession
    DoubleClick { pos: Pos2 },
    /// Key pressed
    Key { key: Key, modifiers: Modifiers },
}

const BUTTONS: [PointerButton; 2] = [PointerButton::Primary, PointerButton::Secondary];

/// Handles converting raw egui input into surface-relative [`InputEvent`]s
#[derive(Debug, Default)]
pub struct InputHandler {
    last_pointer_pos: Option<Pos2>,
    canvas_rect: Option<Rect>,
    /// Surface to screen offset, as painted by the renderer
    screen_offset: Vec2,
    /// Button that started the drag in progress; drags keep reporting once
    /// the pointer leaves the canvas
    dragging: Option<PointerButton>,
}

impl InputHandler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Update the screen rectangle the canvas occupies and the offset the
    /// surface is painted at inside it.
    pub fn set_canvas(&mut self, rect: Rect, screen_offset: Vec2) {
        self.canvas_rect = Some(rect);
        self.screen_offset = screen_offset;
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging.is_some()
    }

    /// Screen position to surface position
    fn to_surface(&self, pos: Pos2) -> Pos2 {
        pos - self.screen_offset
    }

    fn on_canvas(&self, pos: Pos2) -> bool {
        self.canvas_rect.is_some_and(|rect| rect.contains(pos))
    }

    /// Process raw egui input and generate our InputEvents
    pub fn process_input(&mut self, ctx: &Context) -> Vec<InputEvent> {
        let mut events = Vec::new();
        let wants_keyboard = ctx.wants_keyboard_input();

        ctx.input(|input| {
            let modifiers = input.modifiers;
            let hover = input.pointer.hover_pos();

            if let Some(pos) = hover {
                if Some(pos) != self.last_pointer_pos
                    && (self.dragging.is_some() || self.on_canvas(pos))
                {
                    events.push(InputEvent::PointerMove {
                        pos: self.to_surface(pos),
                        held: self.dragging,
                        modifiers,
                    });
                }
                self.last_pointer_pos = Some(pos);
            }

            for button in BUTTONS {
                if input.pointer.button_pressed(button) && self.dragging.is_none() {
                    if let Some(pos) = hover.filter(|pos| self.on_canvas(*pos)) {
                        self.dragging = Some(button);
                        events.push(InputEvent::PointerDown {
                            pos: self.to_surface(pos),
                            button,
                            modifiers,
                        });
                    }
                }
                if input.pointer.button_released(button) && self.dragging == Some(button) {
                    self.dragging = None;
                    let pos = hover.or(self.last_pointer_pos).unwrap_or_default();
                    events.push(InputEvent::PointerUp {
                        pos: self.to_surface(pos),
                        button,
                        modifiers,
                    });
                }
            }

            if input.pointer.button_double_clicked(PointerButton::Primary) {
                if let Some(pos) = hover.filter(|pos| self.on_canvas(*pos)) {
                    events.push(InputEvent::DoubleClick {
                        pos: self.to_surface(pos),
                    });
                }
            }

            // text fields own the keyboard while focused
            if wants_keyboard {
                return;
            }
            for event in &input.events {
                if let Event::Key {
                    key,
                    pressed: true,
                    modifiers,
                    ..
                } = event
                {
                    events.push(InputEvent::Key {
                        key: *key,
                        modifiers: *modifiers,
                    });
                }
            }
        });

        events
    }
}
