use crate::PaintApp;
use crate::command::RedoPolicy;

/// Side panel listing the undo and redo stacks
pub fn history_panel(app: &PaintApp, ctx: &egui::Context) {
    egui::SidePanel::right("history_panel")
        .resizable(true)
        .default_width(220.0)
        .show(ctx, |ui| {
            ui.heading("History");

            let history = app.session().history();
            let past = history.past();
            let future = history.future();

            ui.horizontal(|ui| {
                ui.label(format!("Undo stack size: {}", past.len()));
                ui.label(format!("Redo stack size: {}", future.len()));
            });
            ui.weak(match history.redo_policy() {
                RedoPolicy::SingleStep => "Redo restores the last undo only",
                RedoPolicy::Stacked => "Redo steps through every undo",
            });

            egui::Grid::new("history_grid")
                .num_columns(2)
                .spacing([40.0, 4.0])
                .striped(true)
                .show(ui, |ui| {
                    ui.strong("Undo Stack");
                    ui.strong("Redo Stack");
                    ui.end_row();

                    let max_len = past.len().max(future.len());
                    for i in 0..max_len {
                        match past.get(i) {
                            Some(entry) => {
                                ui.label(format!("{} ({})", entry.kind.label(), entry.shapes.len()));
                            }
                            None => {
                                ui.label("");
                            }
                        }
                        match future.get(i) {
                            Some(entry) => {
                                ui.label(format!("{} ({})", entry.kind.label(), entry.shapes.len()));
                            }
                            None => {
                                ui.label("");
                            }
                        }
                        ui.end_row();
                    }
                });
        });
}
