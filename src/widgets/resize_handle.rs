use egui::{Color32, CursorIcon, Id, Rect, Response, Stroke, Ui};

use crate::id_generator::ShapeId;

/// Side length of the square resize handle, in points
pub const HANDLE_SIZE: f32 = 10.0;

/// The bottom-right resize handle shown on a shape in select mode
pub struct ResizeHandle {
    shape_id: ShapeId,
    rect: Rect,
}

impl ResizeHandle {
    pub fn new(shape_id: ShapeId, rect: Rect) -> Self {
        Self { shape_id, rect }
    }

    pub fn id(&self) -> Id {
        Id::new(("resize_handle", self.shape_id))
    }

    /// Show the resize handle and return the response
    pub fn show(&self, ui: &mut Ui) -> Response {
        ui.painter()
            .rect_filled(self.rect, 2.0, Color32::from_rgb(30, 120, 255));
        ui.painter()
            .rect_stroke(self.rect, 2.0, Stroke::new(1.0, Color32::WHITE));

        ui.interact(self.rect, self.id(), egui::Sense::drag())
            .on_hover_cursor(CursorIcon::ResizeNwSe)
    }
}
