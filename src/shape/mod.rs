use egui::{Color32, Pos2, Rect, Vec2};

pub mod geometry;

use crate::id_generator::ShapeId;

/// A drawable primitive on the canvas.
///
/// Each shape carries its own stroke color and width, so changing the session
/// color never affects shapes that already exist. Extents are signed while a
/// gesture is in flight; see [`Shape::normalize`].
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    Rectangle {
        id: ShapeId,
        x: f32,
        y: f32,
        width: f32,
        height: f32,
        stroke: Color32,
        stroke_width: f32,
    },
    Circle {
        id: ShapeId,
        x: f32,
        y: f32,
        radius: f32,
        stroke: Color32,
        stroke_width: f32,
    },
    Arrow {
        id: ShapeId,
        /// Tail and tip
        points: [Pos2; 2],
        stroke: Color32,
        stroke_width: f32,
    },
    Scribble {
        id: ShapeId,
        points: Vec<Pos2>,
        stroke: Color32,
        stroke_width: f32,
    },
}

impl Shape {
    pub fn id(&self) -> ShapeId {
        match self {
            Shape::Rectangle { id, .. }
            | Shape::Circle { id, .. }
            | Shape::Arrow { id, .. }
            | Shape::Scribble { id, .. } => *id,
        }
    }

    pub fn stroke(&self) -> Color32 {
        match self {
            Shape::Rectangle { stroke, .. }
            | Shape::Circle { stroke, .. }
            | Shape::Arrow { stroke, .. }
            | Shape::Scribble { stroke, .. } => *stroke,
        }
    }

    pub fn stroke_width(&self) -> f32 {
        match self {
            Shape::Rectangle { stroke_width, .. }
            | Shape::Circle { stroke_width, .. }
            | Shape::Arrow { stroke_width, .. }
            | Shape::Scribble { stroke_width, .. } => *stroke_width,
        }
    }

    /// Get the shape type as a string
    pub fn kind_name(&self) -> &'static str {
        match self {
            Shape::Rectangle { .. } => "rectangle",
            Shape::Circle { .. } => "circle",
            Shape::Arrow { .. } => "arrow",
            Shape::Scribble { .. } => "scribble",
        }
    }

    /// Points in the flat `[x1, y1, x2, y2, ...]` layout renderers expect.
    /// Empty for Rectangle and Circle.
    pub fn flat_points(&self) -> Vec<f32> {
        match self {
            Shape::Arrow { points, .. } => points.iter().flat_map(|p| [p.x, p.y]).collect(),
            Shape::Scribble { points, .. } => points.iter().flat_map(|p| [p.x, p.y]).collect(),
            Shape::Rectangle { .. } | Shape::Circle { .. } => Vec::new(),
        }
    }

    /// Apply one pointer-move of a creation gesture.
    ///
    /// The anchor is the shape's own origin (top-left for rectangles, `x,y` for
    /// circles, the tail for arrows). Scribbles append the pointer.
    pub fn drag_to(&mut self, pointer: Pos2) {
        match self {
            Shape::Rectangle {
                x, y, width, height, ..
            } => {
                let extent = geometry::rect_extent(Pos2::new(*x, *y), pointer);
                *width = extent.x;
                *height = extent.y;
            }
            Shape::Circle { x, y, radius, .. } => {
                *radius = geometry::drag_radius(Pos2::new(*x, *y), pointer);
            }
            Shape::Arrow { points, .. } => {
                points[1] = pointer;
            }
            Shape::Scribble { points, .. } => {
                points.push(pointer);
            }
        }
    }

    /// Rewrite a rectangle dragged up or left so it has a top-left anchor and
    /// non-negative extents. Other shapes are already non-negative.
    pub fn normalize(&mut self) {
        if let Shape::Rectangle {
            x, y, width, height, ..
        } = self
        {
            let rect = geometry::normalized_rect(*x, *y, *width, *height);
            *x = rect.min.x;
            *y = rect.min.y;
            *width = rect.width();
            *height = rect.height();
        }
    }

    /// The position a renderer node for this shape sits at.
    ///
    /// Rectangles and circles are positioned by `x,y`. Point-based shapes store
    /// absolute points, so their node always rests at the origin.
    pub fn position(&self) -> Pos2 {
        match self {
            Shape::Rectangle { x, y, .. } | Shape::Circle { x, y, .. } => Pos2::new(*x, *y),
            Shape::Arrow { .. } | Shape::Scribble { .. } => Pos2::ZERO,
        }
    }

    /// Commit a move of the shape's node to `position`.
    ///
    /// For point-based shapes the node position is an offset from the origin,
    /// which is baked into the points so the node can return to zero.
    pub fn translate_to(&mut self, position: Pos2) {
        match self {
            Shape::Rectangle { x, y, .. } | Shape::Circle { x, y, .. } => {
                *x = position.x;
                *y = position.y;
            }
            Shape::Arrow { points, .. } => {
                let delta = position.to_vec2();
                for point in points.iter_mut() {
                    *point += delta;
                }
            }
            Shape::Scribble { points, .. } => {
                let delta = position.to_vec2();
                for point in points.iter_mut() {
                    *point += delta;
                }
            }
        }
    }

    /// Current size as seen by a resize handle: `(width, height)` for
    /// rectangles, `(radius, radius)` for circles. `None` if the shape has no
    /// resize handle.
    pub fn resize_extent(&self) -> Option<Vec2> {
        match self {
            Shape::Rectangle { width, height, .. } => Some(Vec2::new(*width, *height)),
            Shape::Circle { radius, .. } => Some(Vec2::splat(*radius)),
            Shape::Arrow { .. } | Shape::Scribble { .. } => None,
        }
    }

    /// Replace the size, keeping the top-left anchor. A negative extent flips
    /// a rectangle to the other side of its anchor. A circle keeps a single
    /// radius, the mean of both axes. Returns false for shapes without resize
    /// handles.
    pub fn resize_to(&mut self, new_width: f32, new_height: f32) -> bool {
        match self {
            Shape::Rectangle { width, height, .. } => {
                *width = new_width;
                *height = new_height;
                self.normalize();
                true
            }
            Shape::Circle { radius, .. } => {
                *radius = (new_width.abs() + new_height.abs()) / 2.0;
                true
            }
            Shape::Arrow { .. } | Shape::Scribble { .. } => false,
        }
    }

    /// Axis-aligned bounds of the geometry, without stroke padding
    pub fn bounds(&self) -> Rect {
        match self {
            Shape::Rectangle {
                x, y, width, height, ..
            } => geometry::normalized_rect(*x, *y, *width, *height),
            Shape::Circle { x, y, radius, .. } => {
                Rect::from_center_size(Pos2::new(*x, *y), Vec2::splat(radius.abs() * 2.0))
            }
            Shape::Arrow { points, .. } => geometry::calculate_bounds(points, 0.0),
            Shape::Scribble { points, .. } => geometry::calculate_bounds(points, 0.0),
        }
    }

    /// Distance from `pos` to the stroked outline of the shape
    pub fn distance_to_outline(&self, pos: Pos2) -> f32 {
        match self {
            Shape::Rectangle { .. } => geometry::distance_to_rect_outline(pos, self.bounds()),
            Shape::Circle { x, y, radius, .. } => {
                geometry::distance_to_circle_outline(pos, Pos2::new(*x, *y), *radius)
            }
            Shape::Arrow { points, .. } => geometry::distance_to_segment(pos, points[0], points[1]),
            Shape::Scribble { points, .. } => geometry::distance_to_polyline(pos, points),
        }
    }

    /// Test if `pos` lies on the stroke, with `tolerance` of slack
    pub fn hit_test(&self, pos: Pos2, tolerance: f32) -> bool {
        self.distance_to_outline(pos) <= self.stroke_width() / 2.0 + tolerance
    }
}

/// Factory functions for creating shapes
pub mod factory {
    use super::*;
    use crate::tool::Tool;

    pub fn create_rectangle(id: ShapeId, origin: Pos2, stroke: Color32, stroke_width: f32) -> Shape {
        Shape::Rectangle {
            id,
            x: origin.x,
            y: origin.y,
            width: 0.0,
            height: 0.0,
            stroke,
            stroke_width,
        }
    }

    pub fn create_circle(id: ShapeId, origin: Pos2, stroke: Color32, stroke_width: f32) -> Shape {
        Shape::Circle {
            id,
            x: origin.x,
            y: origin.y,
            radius: 0.0,
            stroke,
            stroke_width,
        }
    }

    pub fn create_arrow(id: ShapeId, origin: Pos2, stroke: Color32, stroke_width: f32) -> Shape {
        Shape::Arrow {
            id,
            points: [origin, origin],
            stroke,
            stroke_width,
        }
    }

    pub fn create_scribble(id: ShapeId, origin: Pos2, stroke: Color32, stroke_width: f32) -> Shape {
        Shape::Scribble {
            id,
            points: vec![origin],
            stroke,
            stroke_width,
        }
    }

    /// Create the zero-extent shape a creation gesture with `tool` starts from.
    /// The select tool creates nothing.
    pub fn create_for_tool(
        tool: Tool,
        id: ShapeId,
        origin: Pos2,
        stroke: Color32,
        stroke_width: f32,
    ) -> Option<Shape> {
        match tool {
            Tool::Select => None,
            Tool::Rectangle => Some(create_rectangle(id, origin, stroke, stroke_width)),
            Tool::Circle => Some(create_circle(id, origin, stroke, stroke_width)),
            Tool::Arrow => Some(create_arrow(id, origin, stroke, stroke_width)),
            Tool::Scribble => Some(create_scribble(id, origin, stroke, stroke_width)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::id_generator::generate_id;
    use crate::tool::Tool;

    fn shape_for(tool: Tool, origin: Pos2) -> Shape {
        factory::create_for_tool(tool, generate_id(), origin, Color32::BLACK, 2.0).unwrap()
    }

    #[test]
    fn test_select_creates_nothing() {
        let shape = factory::create_for_tool(Tool::Select, generate_id(), Pos2::ZERO, Color32::BLACK, 2.0);
        assert!(shape.is_none());
    }

    #[test]
    fn test_scribble_starts_with_one_point() {
        let shape = shape_for(Tool::Scribble, Pos2::new(3.0, 4.0));
        assert_eq!(shape.flat_points(), vec![3.0, 4.0]);
    }

    #[test]
    fn test_rectangle_drag_in_negative_quadrant() {
        let mut shape = shape_for(Tool::Rectangle, Pos2::new(50.0, 50.0));
        shape.drag_to(Pos2::new(20.0, 10.0));
        match &shape {
            Shape::Rectangle { width, height, .. } => {
                assert_eq!(*width, -30.0);
                assert_eq!(*height, -40.0);
            }
            other => panic!("unexpected shape {other:?}"),
        }

        shape.normalize();
        match &shape {
            Shape::Rectangle {
                x, y, width, height, ..
            } => {
                assert_eq!((*x, *y, *width, *height), (20.0, 10.0, 30.0, 40.0));
            }
            other => panic!("unexpected shape {other:?}"),
        }
    }

    #[test]
    fn test_arrow_keeps_tail_fixed() {
        let mut shape = shape_for(Tool::Arrow, Pos2::new(1.0, 2.0));
        shape.drag_to(Pos2::new(5.0, 6.0));
        shape.drag_to(Pos2::new(7.0, 8.0));
        assert_eq!(shape.flat_points(), vec![1.0, 2.0, 7.0, 8.0]);
    }

    #[test]
    fn test_scribble_keeps_every_point() {
        let mut shape = shape_for(Tool::Scribble, Pos2::new(0.0, 0.0));
        shape.drag_to(Pos2::new(1.0, 1.0));
        shape.drag_to(Pos2::new(1.0, 1.0));
        shape.drag_to(Pos2::new(2.0, 0.0));
        assert_eq!(shape.flat_points().len(), 8);
    }

    #[test]
    fn test_translate_point_shapes_by_offset() {
        let mut shape = shape_for(Tool::Arrow, Pos2::new(1.0, 1.0));
        shape.drag_to(Pos2::new(11.0, 1.0));
        assert_eq!(shape.position(), Pos2::ZERO);

        shape.translate_to(Pos2::new(5.0, -1.0));
        assert_eq!(shape.flat_points(), vec![6.0, 0.0, 16.0, 0.0]);
        // Still at the origin, so a second move adds on top of the first
        assert_eq!(shape.position(), Pos2::ZERO);
    }

    #[test]
    fn test_resize_circle_uses_mean_radius() {
        let mut shape = shape_for(Tool::Circle, Pos2::new(0.0, 0.0));
        assert!(shape.resize_to(10.0, -20.0));
        assert_eq!(shape.resize_extent(), Some(Vec2::splat(15.0)));

        let mut arrow = shape_for(Tool::Arrow, Pos2::ZERO);
        assert!(!arrow.resize_to(10.0, 10.0));
    }

    #[test]
    fn test_resize_rectangle_past_its_anchor() {
        let mut shape = shape_for(Tool::Rectangle, Pos2::new(10.0, 10.0));
        shape.drag_to(Pos2::new(30.0, 30.0));

        assert!(shape.resize_to(-30.0, 20.0));
        assert_eq!(
            shape.bounds(),
            Rect::from_min_max(Pos2::new(-20.0, 10.0), Pos2::new(10.0, 30.0))
        );
        assert_eq!(shape.resize_extent(), Some(Vec2::new(30.0, 20.0)));
    }

    #[test]
    fn test_hit_test_on_outline_only() {
        let mut shape = shape_for(Tool::Rectangle, Pos2::new(0.0, 0.0));
        shape.drag_to(Pos2::new(100.0, 100.0));
        assert!(shape.hit_test(Pos2::new(0.0, 50.0), 1.0));
        assert!(!shape.hit_test(Pos2::new(50.0, 50.0), 1.0));
    }
}
