use crate::PaintApp;
use crate::components::ToolButton;
use crate::tool::Tool;

pub fn toolbar(app: &mut PaintApp, ctx: &egui::Context) {
    egui::TopBottomPanel::top("toolbar").show(ctx, |ui| {
        ui.horizontal(|ui| {
            let active_tool = app.session().tool();
            for tool in Tool::ALL {
                if ToolButton::new(tool, active_tool == tool).show(ui).clicked() {
                    log::info!("Tool selected from UI: {tool}");
                    app.session_mut().set_tool(tool);
                }
            }

            ui.separator();

            let mut color = app.session().color();
            if egui::color_picker::color_edit_button_srgba(
                ui,
                &mut color,
                egui::color_picker::Alpha::Opaque,
            )
            .changed()
            {
                app.session_mut().set_color(color);
            }

            let mut stroke_width = app.session().stroke_width();
            if ui
                .add(egui::Slider::new(&mut stroke_width, 1.0..=20.0).text("Width"))
                .changed()
            {
                app.session_mut().set_stroke_width(stroke_width);
            }

            ui.separator();

            let can_undo = app.session().can_undo();
            let can_redo = app.session().can_redo();
            if ui.add_enabled(can_undo, egui::Button::new("⟲ Undo")).clicked() {
                app.undo();
            }
            if ui.add_enabled(can_redo, egui::Button::new("⟳ Redo")).clicked() {
                app.redo();
            }

            ui.separator();

            if ui.button("⬇ Export").clicked() {
                app.export();
            }
            ui.toggle_value(app.show_history_mut(), "History");

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.label(app.status());
            });
        });
    });
}
