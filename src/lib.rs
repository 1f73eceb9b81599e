#![warn(clippy::all, rust_2018_idioms)]

pub mod app;
pub mod color;
pub mod command;
pub mod components;
pub mod config;
pub mod error;
pub mod geometry;
pub mod group;
pub mod id_generator;
pub mod input;
pub mod lifecycle;
pub mod panels;
pub mod primitive;
pub mod renderer;
pub mod selection;
pub mod session;
pub mod shapes;
pub mod surface;
pub mod tools;

pub use app::PaintApp;
pub use color::Rgb;
pub use command::{Command, CommandHistory};
pub use config::EditorConfig;
pub use error::{PaintError, PaintResult};
pub use group::{Group, GroupId, GroupRegistry};
pub use input::InputEvent;
pub use primitive::{ItemId, Primitive, PrimitiveKind, Style};
pub use renderer::Renderer;
pub use selection::{InteractionMode, SelectionState};
pub use session::EditorSession;
pub use shapes::{Shape, ShapeKind, ShapePalette};
pub use surface::{Canvas, DrawingSurface};
pub use tools::{Tool, ToolKind};
