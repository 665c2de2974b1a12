mod history;

use std::sync::Arc;

use serde::Deserialize;

use crate::shape::Shape;

pub use history::History;

/// An immutable copy of the full shape collection at one point in history
pub type Snapshot = Arc<[Shape]>;

/// What kind of edit produced a history entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommitKind {
    /// The empty base state
    Initial,
    AddShape,
    Translate,
    Resize,
}

impl CommitKind {
    pub fn label(&self) -> &'static str {
        match self {
            CommitKind::Initial => "Initial",
            CommitKind::AddShape => "Add Shape",
            CommitKind::Translate => "Move Shape",
            CommitKind::Resize => "Resize Shape",
        }
    }
}

/// One committed state in the undo/redo history
#[derive(Debug, Clone)]
pub struct HistoryEntry {
    pub kind: CommitKind,
    pub shapes: Snapshot,
}

impl HistoryEntry {
    pub fn new(kind: CommitKind, shapes: &[Shape]) -> Self {
        Self {
            kind,
            shapes: Arc::from(shapes),
        }
    }
}

/// How repeated undos feed the redo stack
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RedoPolicy {
    /// Each undo replaces the redo stack with the single state it left,
    /// so at most one step can be redone
    #[default]
    SingleStep,
    /// Each undo pushes onto the redo stack, allowing several redos in a row
    Stacked,
}
