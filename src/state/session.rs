//! The drawing session: current tool and color, the live shape collection,
//! the in-flight gesture and the undo/redo history.
//!
//! Every undoable mutation goes through [`DrawingSession::commit`], so the
//! history invariant lives in one place. Pointer-move updates during a
//! gesture mutate the live shapes only; the gesture's single checkpoint is
//! the shape creation itself.

use egui::{Color32, Pos2};
use log::{debug, info, warn};

use super::EditorState;
use crate::command::{CommitKind, History, Snapshot};
use crate::config::CanvasConfig;
use crate::event::{EventBus, SessionEvent};
use crate::id_generator::{ShapeId, generate_id};
use crate::input::InputEvent;
use crate::manipulation::ManipulationEnd;
use crate::shape::{Shape, factory, geometry};
use crate::tool::Tool;

#[derive(Debug)]
pub struct DrawingSession {
    tool: Tool,
    color: Color32,
    stroke_width: f32,
    /// Paint order, oldest first
    shapes: Vec<Shape>,
    state: EditorState,
    history: History,
    event_bus: EventBus,
}

impl Default for DrawingSession {
    fn default() -> Self {
        Self::new()
    }
}

impl DrawingSession {
    /// Empty session with the select tool and black 2px strokes
    pub fn new() -> Self {
        Self {
            tool: Tool::Select,
            color: Color32::BLACK,
            stroke_width: geometry::DEFAULT_STROKE_WIDTH,
            shapes: Vec::new(),
            state: EditorState::Idle,
            history: History::default(),
            event_bus: EventBus::new(),
        }
    }

    pub fn with_config(config: &CanvasConfig) -> Self {
        Self {
            tool: config.initial_tool,
            color: config.default_color,
            stroke_width: config.stroke_width,
            history: History::new(config.redo_policy),
            ..Self::new()
        }
    }

    pub fn tool(&self) -> Tool {
        self.tool
    }

    pub fn color(&self) -> Color32 {
        self.color
    }

    pub fn stroke_width(&self) -> f32 {
        self.stroke_width
    }

    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    pub fn find_shape(&self, id: ShapeId) -> Option<&Shape> {
        self.shapes.iter().find(|shape| shape.id() == id)
    }

    /// Topmost shape whose outline passes within `tolerance` of `pos`.
    /// A shape's interior does not count, so shapes underneath stay reachable.
    pub fn shape_at(&self, pos: Pos2, tolerance: f32) -> Option<&Shape> {
        self.shapes.iter().rev().find(|shape| shape.hit_test(pos, tolerance))
    }

    /// Read-only copy of the current shapes, e.g. for export
    pub fn snapshot(&self) -> Snapshot {
        Snapshot::from(self.shapes.as_slice())
    }

    pub fn state(&self) -> &EditorState {
        &self.state
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn event_bus(&self) -> &EventBus {
        &self.event_bus
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Select the tool used by subsequent gestures
    pub fn set_tool(&mut self, tool: Tool) {
        if tool == self.tool {
            return;
        }
        let old = self.tool;
        self.tool = tool;
        info!("Tool changed: {old} -> {tool}");
        self.event_bus.emit(SessionEvent::ToolChanged { old, new: tool });
    }

    /// Set the stroke color for shapes created from now on.
    /// Existing shapes keep their own stroke.
    pub fn set_color(&mut self, color: Color32) {
        if color == self.color {
            return;
        }
        self.color = color;
        self.event_bus.emit(SessionEvent::ColorChanged(color));
    }

    /// Set the stroke width for shapes created from now on
    pub fn set_stroke_width(&mut self, stroke_width: f32) {
        self.stroke_width = stroke_width.max(0.0);
    }

    /// Start a creation gesture at `point`.
    ///
    /// The new shape has zero extent and is committed to history right away,
    /// so even a click without movement can be undone. The select tool
    /// creates nothing and returns `None`.
    pub fn begin_gesture(&mut self, tool: Tool, point: Pos2) -> Option<ShapeId> {
        let id = generate_id();
        let Some(shape) = factory::create_for_tool(tool, id, point, self.color, self.stroke_width)
        else {
            debug!("Tool {tool} does not create shapes");
            return None;
        };

        let next = EditorState::Drawing { shape_id: id };
        if !self.state.can_transition_to(&next) {
            warn!("Pointer down during an active gesture; ending the previous one");
            self.end_gesture();
        }

        debug!("Begin {} {id} at {point:?}", shape.kind_name());
        self.shapes.push(shape);
        self.commit(CommitKind::AddShape);
        self.transition(next);
        self.event_bus.emit(SessionEvent::GestureStarted { shape_id: id, tool });
        Some(id)
    }

    /// Extend the in-flight shape towards `point`. Not committed.
    pub fn extend_gesture(&mut self, point: Pos2) {
        if self.tool == Tool::Select {
            return;
        }
        let Some(shape_id) = self.state.drawing_shape() else {
            return;
        };
        match self.shapes.iter_mut().find(|shape| shape.id() == shape_id) {
            Some(shape) => shape.drag_to(point),
            None => debug!("Gesture shape {shape_id} no longer exists"),
        }
    }

    /// Finish the current gesture, if any. Calling it again does nothing.
    pub fn end_gesture(&mut self) {
        let Some(shape_id) = self.state.drawing_shape() else {
            return;
        };
        if let Some(shape) = self.shapes.iter_mut().find(|shape| shape.id() == shape_id) {
            shape.normalize();
        }
        self.transition(EditorState::Idle);
        self.event_bus.emit(SessionEvent::GestureEnded { shape_id });
    }

    fn transition(&mut self, next: EditorState) {
        if self.state.can_transition_to(&next) {
            self.state = next;
        } else {
            warn!("Rejected gesture transition {:?} -> {next:?}", self.state);
        }
    }

    /// Route a pointer event through the gesture state machine
    pub fn handle_input(&mut self, event: &InputEvent) {
        match event {
            InputEvent::PointerDown { position } => {
                if self.tool.creates_shapes() {
                    self.begin_gesture(self.tool, *position);
                }
            }
            InputEvent::PointerMove { position } => self.extend_gesture(*position),
            InputEvent::PointerUp { .. } => self.end_gesture(),
        }
    }

    /// Commit a finished drag of shape `id` to node position `position`.
    /// Returns false if no such shape exists.
    pub fn commit_translate(&mut self, id: ShapeId, position: Pos2) -> bool {
        let Some(shape) = self.shapes.iter_mut().find(|shape| shape.id() == id) else {
            debug!("Translate of unknown shape {id} ignored");
            return false;
        };
        shape.translate_to(position);
        self.commit(CommitKind::Translate);
        true
    }

    /// Commit a finished resize of shape `id` to absolute `width`, `height`
    /// (radius in both axes for circles). Returns false if the shape does not
    /// exist or cannot be resized.
    pub fn commit_resize(&mut self, id: ShapeId, width: f32, height: f32) -> bool {
        let Some(shape) = self.shapes.iter_mut().find(|shape| shape.id() == id) else {
            debug!("Resize of unknown shape {id} ignored");
            return false;
        };
        if !shape.resize_to(width, height) {
            debug!("{} {id} has no resize handles", shape.kind_name());
            return false;
        }
        self.commit(CommitKind::Resize);
        true
    }

    /// Apply the end of a select-tool manipulation reported by the canvas
    pub fn apply_manipulation(&mut self, end: ManipulationEnd) -> bool {
        match end {
            ManipulationEnd::Translated { id, position } => self.commit_translate(id, position),
            ManipulationEnd::Resized { id, width, height } => self.commit_resize(id, width, height),
        }
    }

    /// Step back one committed state
    pub fn undo(&mut self) {
        let Some(snapshot) = self.history.undo(&self.shapes) else {
            return;
        };
        self.shapes = snapshot.to_vec();
        info!("Undo: {} shapes", self.shapes.len());
        self.event_bus.emit(SessionEvent::Undone);
    }

    /// Re-apply the most recently undone state
    pub fn redo(&mut self) {
        let Some(snapshot) = self.history.redo() else {
            return;
        };
        self.shapes = snapshot.to_vec();
        info!("Redo: {} shapes", self.shapes.len());
        self.event_bus.emit(SessionEvent::Redone);
    }

    fn commit(&mut self, kind: CommitKind) {
        self.history.commit(kind, &self.shapes);
        self.event_bus.emit(SessionEvent::Committed {
            kind,
            history_len: self.history.past().len(),
        });
    }
}
