#![warn(clippy::all, rust_2018_idioms)]
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")] // hide console window on Windows in release

// When compiling natively:
#[cfg(not(target_arch = "wasm32"))]
fn main() -> eframe::Result {
    env_logger::init(); // Log to stderr (if you run with `RUST_LOG=debug`).

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1000.0, 700.0])
            .with_min_inner_size([400.0, 300.0])
            .with_title("Sketch Paint"),
        ..Default::default()
    };
    eframe::run_native(
        "sketch_paint",
        native_options,
        Box::new(|cc| Ok(Box::new(sketch_paint::PaintApp::new(cc)))),
    )
}

// The editor is desktop-only; web builds get an empty entry point.
#[cfg(target_arch = "wasm32")]
fn main() {}
