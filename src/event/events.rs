use egui::Color32;

use crate::command::CommitKind;
use crate::id_generator::ShapeId;
use crate::tool::Tool;

#[derive(Debug, Clone, PartialEq)]
pub enum SessionEvent {
    ToolChanged {
        old: Tool,
        new: Tool,
    },
    ColorChanged(Color32),
    GestureStarted {
        shape_id: ShapeId,
        tool: Tool,
    },
    GestureEnded {
        shape_id: ShapeId,
    },
    Committed {
        kind: CommitKind,
        history_len: usize,
    },
    Undone,
    Redone,
}

impl SessionEvent {
    /// Short human readable description for status lines
    pub fn describe(&self) -> String {
        match self {
            SessionEvent::ToolChanged { new, .. } => format!("Tool: {new}"),
            SessionEvent::ColorChanged(color) => {
                format!("Color: #{:02x}{:02x}{:02x}", color.r(), color.g(), color.b())
            }
            SessionEvent::GestureStarted { tool, .. } => format!("Drawing {tool}"),
            SessionEvent::GestureEnded { .. } => "Ready".to_owned(),
            SessionEvent::Committed { kind, .. } => kind.label().to_owned(),
            SessionEvent::Undone => "Undo".to_owned(),
            SessionEvent::Redone => "Redo".to_owned(),
        }
    }
}
