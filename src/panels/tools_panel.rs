use crate::PaintApp;
use crate::color::Rgb;
use crate::components::tool_button::ToolButton;
use crate::shapes::ShapeKind;
use crate::tools::ToolKind;

/// Top toolbar: tools, shape controls, transforms, clipboard, brush and color.
pub fn tools_panel(app: &mut PaintApp, ctx: &egui::Context) {
    egui::TopBottomPanel::top("tools_panel").show(ctx, |ui| {
        ui.horizontal_wrapped(|ui| {
            ui.menu_button("File", |ui| {
                if ui.button("New").clicked() {
                    app.session_mut().clear_canvas();
                    ui.close_menu();
                }
            });
            ui.separator();

            let active = app.session().tool_kind();
            for kind in ToolKind::ALL {
                if ToolButton::new(kind, active == kind).show(ui).clicked() {
                    app.session_mut().set_tool(kind);
                }
            }
            ui.separator();

            shape_controls(app, ui);
            ui.separator();

            let session = app.session_mut();
            if ui.button("⟲").on_hover_text("Rotate left").clicked() {
                session.rotate_left();
            }
            if ui.button("⟳").on_hover_text("Rotate right").clicked() {
                session.rotate_right();
            }
            if ui.button("Crop").clicked() {
                session.crop_to_selection();
            }
            ui.separator();

            if ui.button("Copy").clicked() {
                session.copy_selected();
            }
            if ui.button("Cut").clicked() {
                session.cut_selected();
            }
            if ui.add_enabled(session.clipboard().is_some(), egui::Button::new("Paste")).clicked() {
                session.paste();
            }
            ui.separator();

            brush_controls(app, ui);
            ui.separator();

            color_controls(app, ui);
            ui.separator();

            let can_undo = app.session().history().can_undo();
            if ui.add_enabled(can_undo, egui::Button::new("Undo")).clicked() {
                app.session_mut().undo();
            }
        });
    });
}

fn shape_controls(app: &mut PaintApp, ui: &mut egui::Ui) {
    let session = app.session_mut();
    let label = format!("🔄 Shape: {}", session.palette().label());
    if ui.button(label).clicked() {
        session.cycle_shape();
    }
    let polygon = session.palette().kind() == ShapeKind::Polygon;
    if ui.add_enabled(polygon, egui::Button::new("+")).clicked() {
        session.increase_sides();
    }
    if ui.add_enabled(polygon, egui::Button::new("-")).clicked() {
        session.decrease_sides();
    }
}

fn brush_controls(app: &mut PaintApp, ui: &mut egui::Ui) {
    let session = app.session_mut();
    let current = session.brush_size();
    let sizes = session.config().brush_sizes.clone();
    egui::ComboBox::from_label("Brush")
        .selected_text(format!("{current}"))
        .show_ui(ui, |ui| {
            for size in sizes {
                if ui.selectable_label(size == current, format!("{size}")).clicked() {
                    session.set_brush_size(size);
                }
            }
        });
}

fn color_controls(app: &mut PaintApp, ui: &mut egui::Ui) {
    let fields = app.rgb_fields_mut();
    for (label, text) in [("R", &mut fields.r), ("G", &mut fields.g), ("B", &mut fields.b)] {
        ui.label(label);
        ui.add(egui::TextEdit::singleline(text).desired_width(32.0));
    }
    if ui.button("Set Color").clicked() {
        app.apply_rgb_fields();
    }

    let mut picked = app.session().color().channels();
    if egui::color_picker::color_edit_button_srgb(ui, &mut picked).changed() {
        let color = Rgb::from(picked);
        app.session_mut().set_color(color);
        app.sync_rgb_fields(color);
    }
}
