use eframe::egui;
use crate::tool::Tool;

const BUTTON_SIZE: f32 = 32.0;

/// Square toolbar button showing a tool's glyph, highlighted while the tool is active.
pub struct ToolButton {
    pub tool: Tool,
    pub selected: bool,
}

impl ToolButton {
    pub fn new(tool: Tool, selected: bool) -> Self {
        Self { tool, selected }
    }

    pub fn show(&self, ui: &mut egui::Ui) -> egui::Response {
        let (rect, response) =
            ui.allocate_exact_size(egui::Vec2::splat(BUTTON_SIZE), egui::Sense::click());

        if ui.is_rect_visible(rect) {
            let widget = ui.style().interact_selectable(&response, self.selected);
            let painter = ui.painter();
            painter.rect_filled(rect, widget.rounding, widget.weak_bg_fill);
            painter.text(
                rect.center(),
                egui::Align2::CENTER_CENTER,
                self.tool.icon(),
                egui::FontId::proportional(18.0),
                widget.text_color(),
            );
            if self.selected {
                painter.rect_stroke(rect, widget.rounding, ui.visuals().selection.stroke);
            }
        }

        response.on_hover_text(self.tool.name())
    }
}
