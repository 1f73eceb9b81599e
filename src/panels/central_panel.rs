use crate::PaintApp;

/// The drawing canvas: feeds pointer and keyboard input to the session and
/// paints the surface.
pub fn central_panel(app: &mut PaintApp, ctx: &egui::Context) {
    egui::CentralPanel::default()
        .frame(egui::Frame::none())
        .show(ctx, |ui| {
            let (response, painter) =
                ui.allocate_painter(ui.available_size(), egui::Sense::click_and_drag());
            let canvas_rect = response.rect;

            app.handle_input(ctx, canvas_rect);

            app.renderer()
                .render(&painter, canvas_rect, app.session().surface());
        });
}
