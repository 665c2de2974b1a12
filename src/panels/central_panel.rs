use egui::{Pos2, Response, Sense, Ui};

use crate::PaintApp;
use crate::manipulation::ManipulationEnd;
use crate::renderer::resize_handle_rect;
use crate::shape::geometry::HIT_TOLERANCE;
use crate::tool::Tool;
use crate::widgets::ResizeHandle;

pub fn canvas_panel(app: &mut PaintApp, ctx: &egui::Context) {
    egui::CentralPanel::default()
        .frame(egui::Frame::none())
        .show(ctx, |ui| {
            let (response, painter) = ui.allocate_painter(ui.available_size(), Sense::click_and_drag());
            let canvas_rect = response.rect;
            app.set_canvas_rect(canvas_rect);

            // Pointer events drive creation gestures; with the select tool
            // the session ignores them.
            let events = app.input_mut().process_input(ctx, response.contains_pointer());
            for event in &events {
                app.session_mut().handle_input(event);
            }

            let origin = canvas_rect.min;
            let renderer = app.renderer();
            renderer.draw_background(&painter, canvas_rect);
            for shape in app.session().shapes() {
                renderer.draw_shape(&painter, origin, &app.manipulator().preview(shape));
            }

            if app.session().tool() == Tool::Select {
                if let Some(end) = manipulate_shapes(app, ui, &response, origin) {
                    app.session_mut().apply_manipulation(end);
                }
            } else {
                app.manipulator_mut().cancel();
            }

            if app.session().state().is_drawing() || app.manipulator().is_active() {
                ctx.request_repaint();
            }
        });
}

/// Select-mode drag and resize. A drag on the canvas moves the topmost shape
/// whose outline is under the press; resize handles sit above the canvas and
/// take their own drags. Returns the manipulation that finished this frame.
fn manipulate_shapes(
    app: &mut PaintApp,
    ui: &mut Ui,
    canvas: &Response,
    origin: Pos2,
) -> Option<ManipulationEnd> {
    let mut finished = None;

    if canvas.drag_started() {
        let press_origin = ui.input(|i| i.pointer.press_origin());
        let picked = press_origin
            .and_then(|pos| app.session().shape_at((pos - origin).to_pos2(), HIT_TOLERANCE))
            .cloned();
        if let Some(shape) = picked {
            app.manipulator_mut().begin_translate(&shape);
        }
    }
    if canvas.dragged() {
        app.manipulator_mut().drag_by(canvas.drag_delta());
    }
    if canvas.drag_stopped() {
        finished = finish_active(app);
    }

    if let Some(shape) = app
        .manipulator()
        .active_shape()
        .and_then(|id| app.session().find_shape(id))
    {
        let preview = app.manipulator().preview(shape);
        app.renderer().draw_selection(ui.painter(), origin, &preview);
    }

    for index in 0..app.session().shapes().len() {
        let shape = app.session().shapes()[index].clone();
        let id = shape.id();
        let Some(handle_rect) = resize_handle_rect(&app.manipulator().preview(&shape), origin) else {
            continue;
        };

        let handle = ResizeHandle::new(id, handle_rect).show(ui);
        if handle.drag_started() {
            app.manipulator_mut().begin_resize(&shape);
        }
        if handle.dragged() && app.manipulator().active_shape() == Some(id) {
            app.manipulator_mut().drag_by(handle.drag_delta());
        }
        if handle.drag_stopped() && app.manipulator().active_shape() == Some(id) {
            finished = app.manipulator_mut().finish(&shape);
        }
    }

    finished
}

fn finish_active(app: &mut PaintApp) -> Option<ManipulationEnd> {
    let id = app.manipulator().active_shape()?;
    match app.session().find_shape(id).cloned() {
        Some(shape) => app.manipulator_mut().finish(&shape),
        None => {
            app.manipulator_mut().cancel();
            None
        }
    }
}
