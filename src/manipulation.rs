//! Direct manipulation of existing shapes with the select tool.
//!
//! While a shape is dragged or resized the canvas shows it through a
//! transient node offset or extent; the shape itself is untouched until the
//! manipulation ends and the session commits the result. Finishing always
//! clears the transient state, so consecutive resizes never compound.

use egui::{Pos2, Vec2};
use log::debug;

use crate::id_generator::ShapeId;
use crate::shape::Shape;

/// What the canvas reports to the session when a manipulation ends
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ManipulationEnd {
    /// Drag finished with the shape's node at `position`
    Translated { id: ShapeId, position: Pos2 },
    /// Resize finished with absolute extents (radius in both axes for circles)
    Resized { id: ShapeId, width: f32, height: f32 },
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Manipulation {
    Translating { offset: Vec2 },
    Resizing { base: Vec2, delta: Vec2 },
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct Active {
    id: ShapeId,
    manipulation: Manipulation,
}

#[derive(Debug, Default)]
pub struct Manipulator {
    active: Option<Active>,
}

impl Manipulator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_active(&self) -> bool {
        self.active.is_some()
    }

    pub fn active_shape(&self) -> Option<ShapeId> {
        self.active.map(|active| active.id)
    }

    pub fn begin_translate(&mut self, shape: &Shape) {
        debug!("Begin dragging {} {}", shape.kind_name(), shape.id());
        self.active = Some(Active {
            id: shape.id(),
            manipulation: Manipulation::Translating {
                offset: Vec2::ZERO,
            },
        });
    }

    /// Start resizing from the bottom-right handle. Shapes without resize
    /// handles are ignored.
    pub fn begin_resize(&mut self, shape: &Shape) {
        let Some(base) = shape.resize_extent() else {
            return;
        };
        debug!("Begin resizing {} {}", shape.kind_name(), shape.id());
        self.active = Some(Active {
            id: shape.id(),
            manipulation: Manipulation::Resizing {
                base,
                delta: Vec2::ZERO,
            },
        });
    }

    /// Accumulate pointer movement for the active manipulation
    pub fn drag_by(&mut self, pointer_delta: Vec2) {
        if let Some(active) = &mut self.active {
            match &mut active.manipulation {
                Manipulation::Translating { offset } => *offset += pointer_delta,
                Manipulation::Resizing { delta, .. } => *delta += pointer_delta,
            }
        }
    }

    /// Transient node offset for `id`
    pub fn offset(&self, id: ShapeId) -> Vec2 {
        match self.active {
            Some(Active {
                id: active_id,
                manipulation: Manipulation::Translating { offset },
            }) if active_id == id => offset,
            _ => Vec2::ZERO,
        }
    }

    /// Transient resize extent for `id`: the extent at the start of the
    /// resize plus the handle movement so far. `None` unless `id` is being
    /// resized.
    pub fn resized_extent(&self, id: ShapeId) -> Option<Vec2> {
        match self.active {
            Some(Active {
                id: active_id,
                manipulation: Manipulation::Resizing { base, delta },
            }) if active_id == id => Some(base + delta),
            _ => None,
        }
    }

    /// The shape as it should be drawn this frame, with any transient offset
    /// or extent applied
    pub fn preview(&self, shape: &Shape) -> Shape {
        let mut preview = shape.clone();
        let id = shape.id();
        let offset = self.offset(id);
        if offset != Vec2::ZERO {
            preview.translate_to(shape.position() + offset);
        }
        if let Some(extent) = self.resized_extent(id) {
            preview.resize_to(extent.x, extent.y);
        }
        preview
    }

    /// Finish the active manipulation. The transient offset and extent are
    /// cleared; the returned value carries the absolute result to commit.
    /// `shape` must be the current state of the manipulated shape.
    pub fn finish(&mut self, shape: &Shape) -> Option<ManipulationEnd> {
        let active = self.active.take()?;
        if active.id != shape.id() {
            debug!("Manipulated shape {} was replaced", active.id);
            return None;
        }
        match active.manipulation {
            Manipulation::Translating { offset } => Some(ManipulationEnd::Translated {
                id: active.id,
                position: shape.position() + offset,
            }),
            Manipulation::Resizing { base, delta } => {
                let extent = base + delta;
                Some(ManipulationEnd::Resized {
                    id: active.id,
                    width: extent.x,
                    height: extent.y,
                })
            }
        }
    }

    /// Drop the active manipulation without committing anything
    pub fn cancel(&mut self) {
        self.active = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::id_generator::generate_id;
    use crate::shape::factory;
    use egui::Color32;

    fn rect(x: f32, y: f32, w: f32, h: f32) -> Shape {
        let mut shape = factory::create_rectangle(generate_id(), Pos2::new(x, y), Color32::BLACK, 2.0);
        shape.drag_to(Pos2::new(x + w, y + h));
        shape
    }

    #[test]
    fn test_translate_end_reports_absolute_position() {
        let shape = rect(10.0, 10.0, 20.0, 20.0);
        let mut manipulator = Manipulator::new();
        manipulator.begin_translate(&shape);
        manipulator.drag_by(Vec2::new(5.0, 0.0));
        manipulator.drag_by(Vec2::new(5.0, 3.0));
        assert_eq!(manipulator.offset(shape.id()), Vec2::new(10.0, 3.0));

        let end = manipulator.finish(&shape);
        assert_eq!(
            end,
            Some(ManipulationEnd::Translated {
                id: shape.id(),
                position: Pos2::new(20.0, 13.0)
            })
        );
        assert_eq!(manipulator.offset(shape.id()), Vec2::ZERO);
        assert!(!manipulator.is_active());
    }

    #[test]
    fn test_arrow_translate_reports_offset_from_origin() {
        let mut arrow = factory::create_arrow(generate_id(), Pos2::new(1.0, 1.0), Color32::BLACK, 2.0);
        arrow.drag_to(Pos2::new(5.0, 5.0));
        let mut manipulator = Manipulator::new();
        manipulator.begin_translate(&arrow);
        manipulator.drag_by(Vec2::new(2.0, 2.0));

        assert_eq!(manipulator.preview(&arrow).flat_points(), vec![3.0, 3.0, 7.0, 7.0]);
        assert_eq!(
            manipulator.finish(&arrow),
            Some(ManipulationEnd::Translated {
                id: arrow.id(),
                position: Pos2::new(2.0, 2.0)
            })
        );
    }

    #[test]
    fn test_resize_extent_resets_after_finish() {
        let shape = rect(0.0, 0.0, 20.0, 10.0);
        let mut manipulator = Manipulator::new();
        manipulator.begin_resize(&shape);
        manipulator.drag_by(Vec2::new(20.0, 10.0));
        assert_eq!(manipulator.resized_extent(shape.id()), Some(Vec2::new(40.0, 20.0)));
        assert_eq!(manipulator.preview(&shape).resize_extent(), Some(Vec2::new(40.0, 20.0)));

        assert_eq!(
            manipulator.finish(&shape),
            Some(ManipulationEnd::Resized {
                id: shape.id(),
                width: 40.0,
                height: 20.0
            })
        );
        assert_eq!(manipulator.resized_extent(shape.id()), None);
    }

    #[test]
    fn test_zero_size_rectangle_can_grow() {
        let shape = rect(5.0, 5.0, 0.0, 0.0);
        let mut manipulator = Manipulator::new();
        manipulator.begin_resize(&shape);
        manipulator.drag_by(Vec2::new(12.0, 8.0));
        assert_eq!(manipulator.preview(&shape).resize_extent(), Some(Vec2::new(12.0, 8.0)));
        assert_eq!(
            manipulator.finish(&shape),
            Some(ManipulationEnd::Resized {
                id: shape.id(),
                width: 12.0,
                height: 8.0
            })
        );
    }

    #[test]
    fn test_scribble_has_no_resize() {
        let scribble = factory::create_scribble(generate_id(), Pos2::ZERO, Color32::BLACK, 2.0);
        let mut manipulator = Manipulator::new();
        manipulator.begin_resize(&scribble);
        assert!(!manipulator.is_active());
    }

    #[test]
    fn test_finish_for_other_shape_is_dropped() {
        let a = rect(0.0, 0.0, 5.0, 5.0);
        let b = rect(0.0, 0.0, 5.0, 5.0);
        let mut manipulator = Manipulator::new();
        manipulator.begin_translate(&a);
        assert_eq!(manipulator.finish(&b), None);
        assert!(!manipulator.is_active());
    }
}
