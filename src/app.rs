use std::sync::Arc;

use egui::Rect;
use log::{error, info};
use parking_lot::Mutex;

use crate::config::CanvasConfig;
use crate::event::{EventHandler, SessionEvent};
use crate::export::{self, ExportOptions};
use crate::input::InputHandler;
use crate::manipulation::Manipulator;
use crate::panels::{canvas_panel, history_panel, toolbar};
use crate::renderer::ShapeRenderer;
use crate::state::DrawingSession;

/// Keeps the toolbar status line in sync with session events
struct StatusLine(Arc<Mutex<String>>);

impl EventHandler for StatusLine {
    fn handle_event(&mut self, event: &SessionEvent) {
        *self.0.lock() = event.describe();
    }
}

pub struct PaintApp {
    session: DrawingSession,
    renderer: ShapeRenderer,
    input: InputHandler,
    manipulator: Manipulator,
    config: CanvasConfig,
    canvas_rect: Rect,
    status: Arc<Mutex<String>>,
    show_history: bool,
}

impl Default for PaintApp {
    fn default() -> Self {
        Self::with_config(CanvasConfig::default())
    }
}

impl PaintApp {
    /// Called once before the first frame.
    pub fn new(cc: &eframe::CreationContext<'_>, config: CanvasConfig) -> Self {
        cc.egui_ctx.set_visuals(egui::Visuals::light());
        Self::with_config(config)
    }

    pub fn with_config(config: CanvasConfig) -> Self {
        let session = DrawingSession::with_config(&config);
        let status = Arc::new(Mutex::new(String::from("Ready")));
        session
            .event_bus()
            .subscribe(Box::new(StatusLine(Arc::clone(&status))));

        Self {
            session,
            renderer: ShapeRenderer::new(
                config.background,
                config.arrow_pointer_length,
                config.arrow_pointer_width,
            ),
            input: InputHandler::new(Rect::NOTHING),
            manipulator: Manipulator::new(),
            config,
            canvas_rect: Rect::NOTHING,
            status,
            show_history: false,
        }
    }

    pub fn session(&self) -> &DrawingSession {
        &self.session
    }

    pub fn session_mut(&mut self) -> &mut DrawingSession {
        &mut self.session
    }

    pub fn renderer(&self) -> &ShapeRenderer {
        &self.renderer
    }

    pub fn manipulator(&self) -> &Manipulator {
        &self.manipulator
    }

    pub fn manipulator_mut(&mut self) -> &mut Manipulator {
        &mut self.manipulator
    }

    pub fn input_mut(&mut self) -> &mut InputHandler {
        &mut self.input
    }

    pub fn set_canvas_rect(&mut self, rect: Rect) {
        self.canvas_rect = rect;
        self.input.set_canvas_rect(rect);
    }

    pub fn status(&self) -> String {
        self.status.lock().clone()
    }

    fn set_status(&self, status: impl Into<String>) {
        *self.status.lock() = status.into();
    }

    pub fn show_history_mut(&mut self) -> &mut bool {
        &mut self.show_history
    }

    pub fn undo(&mut self) {
        self.manipulator.cancel();
        self.session.undo();
    }

    pub fn redo(&mut self) {
        self.manipulator.cancel();
        self.session.redo();
    }

    /// Write the current shapes to the configured PNG path, drawn the same
    /// way the canvas draws them
    pub fn export(&mut self) {
        let size = self.canvas_rect.size();
        let (pointer_length, pointer_width) = self.renderer.arrow_pointer();
        let options = ExportOptions::new(size.x.max(0.0) as u32, size.y.max(0.0) as u32)
            .with_background(self.renderer.background())
            .with_arrow_pointer(pointer_length, pointer_width);
        let snapshot = self.session.snapshot();
        let path = self.config.export_path.clone();

        match export::export_png(&snapshot, &options, &path) {
            Ok(()) => {
                info!("Canvas exported to {}", path.display());
                self.set_status(format!("Saved {}", path.display()));
            }
            Err(err) => {
                error!("Export failed: {err}");
                self.set_status(format!("Export failed: {err}"));
            }
        }
    }
}

impl eframe::App for PaintApp {
    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        toolbar(self, ctx);
        if self.show_history {
            history_panel(self, ctx);
        }
        canvas_panel(self, ctx);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tool::Tool;
    use egui::Pos2;

    #[test]
    fn test_status_follows_session_events() {
        let mut app = PaintApp::default();
        assert_eq!(app.status(), "Ready");
        app.session_mut().set_tool(Tool::Circle);
        assert_eq!(app.status(), "Tool: circle");
        app.session_mut().begin_gesture(Tool::Circle, Pos2::new(1.0, 1.0));
        app.session_mut().end_gesture();
        app.undo();
        assert_eq!(app.status(), "Undo");
    }

    #[test]
    fn test_export_uses_canvas_background() {
        let path = std::env::temp_dir().join(format!("vector_paint_app_{}.png", std::process::id()));
        let config = CanvasConfig {
            background: egui::Color32::from_rgb(0x20, 0x40, 0x60),
            export_path: path.clone(),
            ..CanvasConfig::default()
        };
        let mut app = PaintApp::with_config(config);
        app.set_canvas_rect(Rect::from_min_size(Pos2::new(0.0, 30.0), egui::vec2(8.0, 6.0)));
        app.export();

        let image = image::open(&path).unwrap().to_rgba8();
        assert_eq!(image.dimensions(), (8, 6));
        assert_eq!(*image.get_pixel(3, 3), image::Rgba([0x20, 0x40, 0x60, 0xff]));
        std::fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_export_without_canvas_reports_failure() {
        let mut app = PaintApp::default();
        app.export();
        assert!(app.status().starts_with("Export failed"));
    }
}
