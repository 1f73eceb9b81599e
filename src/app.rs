use crate::config::EditorConfig;
use crate::input::InputHandler;
use crate::panels::{central_panel, tools_panel};
use crate::renderer::Renderer;
use crate::session::EditorSession;

/// Contents of the R, G and B text fields of the toolbar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RgbFields {
    pub r: String,
    pub g: String,
    pub b: String,
}

impl Default for RgbFields {
    fn default() -> Self {
        Self {
            r: "0".to_owned(),
            g: "0".to_owned(),
            b: "0".to_owned(),
        }
    }
}

/// The desktop shell: a toolbar on top of the drawing canvas.
pub struct PaintApp {
    session: EditorSession,
    renderer: Renderer,
    input: InputHandler,
    rgb_fields: RgbFields,
}

impl Default for PaintApp {
    fn default() -> Self {
        Self::with_config(EditorConfig::default())
    }
}

impl PaintApp {
    /// Called once before the first frame.
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        Self::with_config(EditorConfig::from_env())
    }

    pub fn with_config(config: EditorConfig) -> Self {
        let renderer = Renderer::new(config.background);
        Self {
            session: EditorSession::new(config),
            renderer,
            input: InputHandler::new(),
            rgb_fields: RgbFields::default(),
        }
    }

    pub fn session(&self) -> &EditorSession {
        &self.session
    }

    pub fn session_mut(&mut self) -> &mut EditorSession {
        &mut self.session
    }

    pub fn renderer(&self) -> &Renderer {
        &self.renderer
    }

    pub fn rgb_fields_mut(&mut self) -> &mut RgbFields {
        &mut self.rgb_fields
    }

    /// Apply the RGB text fields. On success the fields are normalized to
    /// the parsed values; on failure they are left for the user to fix.
    pub fn apply_rgb_fields(&mut self) {
        let RgbFields { r, g, b } = &self.rgb_fields;
        if let Ok(color) = self.session.set_color_from_text(r, g, b) {
            self.sync_rgb_fields(color);
        }
    }

    pub fn sync_rgb_fields(&mut self, color: crate::color::Rgb) {
        self.rgb_fields = RgbFields {
            r: color.r.to_string(),
            g: color.g.to_string(),
            b: color.b.to_string(),
        };
    }

    /// Translate this frame's raw input over `canvas_rect` into session events.
    pub fn handle_input(&mut self, ctx: &egui::Context, canvas_rect: egui::Rect) {
        let offset = Renderer::screen_offset(self.session.surface(), canvas_rect);
        self.input.set_canvas(canvas_rect, offset);
        for event in self.input.process_input(ctx) {
            self.session.handle_input(event);
        }
    }
}

impl eframe::App for PaintApp {
    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        tools_panel(self, ctx);
        central_panel(self, ctx);
    }
}
