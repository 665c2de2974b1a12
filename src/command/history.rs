use std::collections::VecDeque;

use log::debug;

use super::{CommitKind, HistoryEntry, RedoPolicy, Snapshot};
use crate::shape::Shape;

/// Linear undo/redo history of shape collection snapshots.
///
/// `past` always holds at least the base entry. The last entry of `past`
/// is the most recently committed (or redone) state.
#[derive(Debug, Clone)]
pub struct History {
    /// Committed snapshots, oldest first
    past: Vec<HistoryEntry>,
    /// Snapshots available for redo, most recently undone first
    future: VecDeque<HistoryEntry>,
    redo_policy: RedoPolicy,
}

impl Default for History {
    fn default() -> Self {
        Self::new(RedoPolicy::default())
    }
}

impl History {
    /// Creates a history whose only entry is the empty base state
    pub fn new(redo_policy: RedoPolicy) -> Self {
        Self {
            past: vec![HistoryEntry::new(CommitKind::Initial, &[])],
            future: VecDeque::new(),
            redo_policy,
        }
    }

    /// Record `shapes` as a new committed state and drop everything redoable
    pub fn commit(&mut self, kind: CommitKind, shapes: &[Shape]) {
        self.past.push(HistoryEntry::new(kind, shapes));
        self.future.clear();
        debug!("Committed {}: {} entries in history", kind.label(), self.past.len());
    }

    /// Step back one entry. `current` is the live shape collection, which
    /// becomes the redo candidate. Returns the snapshot to install, or `None`
    /// if only the base state is left.
    pub fn undo(&mut self, current: &[Shape]) -> Option<Snapshot> {
        if self.past.len() <= 1 {
            debug!("Nothing to undo");
            return None;
        }

        let undone = self.past.pop()?;
        let entry = HistoryEntry::new(undone.kind, current);
        match self.redo_policy {
            RedoPolicy::SingleStep => {
                self.future.clear();
                self.future.push_front(entry);
            }
            RedoPolicy::Stacked => self.future.push_front(entry),
        }

        self.past.last().map(|entry| entry.shapes.clone())
    }

    /// Re-apply the most recently undone state, if any
    pub fn redo(&mut self) -> Option<Snapshot> {
        let Some(entry) = self.future.pop_front() else {
            debug!("Nothing to redo");
            return None;
        };
        let shapes = entry.shapes.clone();
        self.past.push(entry);
        Some(shapes)
    }

    /// Returns true if there is a state before the current one
    pub fn can_undo(&self) -> bool {
        self.past.len() > 1
    }

    /// Returns true if there are states that can be redone
    pub fn can_redo(&self) -> bool {
        !self.future.is_empty()
    }

    pub fn past(&self) -> &[HistoryEntry] {
        &self.past
    }

    pub fn future(&self) -> &VecDeque<HistoryEntry> {
        &self.future
    }

    pub fn redo_policy(&self) -> RedoPolicy {
        self.redo_policy
    }
}
