//! The gesture state machine for the drawing session.
//!
//! ```text
//! ┌──────────┐  pointer-down (drawing tool)  ┌─────────────┐
//! │          ├──────────────────────────────►│             │
//! │   Idle   │                               │   Drawing   │ ◄─┐ pointer-move
//! │          │◄──────────────────────────────┤             ├───┘
//! └──────────┘          pointer-up           └─────────────┘
//! ```
//!
//! Only one gesture is ever active; the shape id carried by `Drawing` is the
//! token that ties pointer-move events to the shape being created.

use crate::id_generator::ShapeId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EditorState {
    /// No active gesture
    #[default]
    Idle,
    /// A shape is being created or extended
    Drawing { shape_id: ShapeId },
}

impl EditorState {
    /// Validates whether a transition to the new state is allowed
    pub fn can_transition_to(&self, new_state: &EditorState) -> bool {
        match (self, new_state) {
            (EditorState::Idle, EditorState::Drawing { .. }) => true,
            (EditorState::Drawing { .. }, EditorState::Idle) => true,
            // Ending twice is harmless
            (EditorState::Idle, EditorState::Idle) => true,
            // A new gesture must not start while another is in flight
            (EditorState::Drawing { .. }, EditorState::Drawing { .. }) => false,
        }
    }

    pub fn is_idle(&self) -> bool {
        matches!(self, EditorState::Idle)
    }

    pub fn is_drawing(&self) -> bool {
        matches!(self, EditorState::Drawing { .. })
    }

    /// Returns the id of the shape being drawn, if any
    pub fn drawing_shape(&self) -> Option<ShapeId> {
        match self {
            EditorState::Drawing { shape_id } => Some(*shape_id),
            EditorState::Idle => None,
        }
    }
}
