use egui::{Color32, Painter, Pos2, Rect, Stroke, Vec2};

use crate::shape::{Shape, geometry};
use crate::widgets::resize_handle::HANDLE_SIZE;

/// Paints shapes onto an egui painter.
///
/// Shapes are stored in canvas coordinates; the renderer shifts them by the
/// canvas origin. Rectangles with negative extents are drawn normalized.
#[derive(Debug, Clone)]
pub struct ShapeRenderer {
    background: Color32,
    arrow_pointer_length: f32,
    arrow_pointer_width: f32,
}

impl Default for ShapeRenderer {
    fn default() -> Self {
        Self::new(
            Color32::from_rgb(0xf5, 0xf5, 0xf5),
            geometry::ARROW_POINTER_LENGTH,
            geometry::ARROW_POINTER_WIDTH,
        )
    }
}

impl ShapeRenderer {
    pub fn new(background: Color32, arrow_pointer_length: f32, arrow_pointer_width: f32) -> Self {
        Self {
            background,
            arrow_pointer_length,
            arrow_pointer_width,
        }
    }

    pub fn background(&self) -> Color32 {
        self.background
    }

    pub fn arrow_pointer(&self) -> (f32, f32) {
        (self.arrow_pointer_length, self.arrow_pointer_width)
    }

    /// Fill the canvas area with the background color
    pub fn draw_background(&self, painter: &Painter, canvas: Rect) {
        painter.rect_filled(canvas, 0.0, self.background);
    }

    /// Draw a single shape; `origin` is the screen position of the canvas' top-left corner
    pub fn draw_shape(&self, painter: &Painter, origin: Pos2, shape: &Shape) {
        let offset = origin.to_vec2();
        let stroke = Stroke::new(shape.stroke_width(), shape.stroke());
        match shape {
            Shape::Rectangle { .. } => {
                painter.rect_stroke(shape.bounds().translate(offset), 0.0, stroke);
            }
            Shape::Circle { x, y, radius, .. } => {
                painter.circle_stroke(Pos2::new(*x, *y) + offset, radius.abs(), stroke);
            }
            Shape::Arrow { points, .. } => {
                let [start, end] = [points[0] + offset, points[1] + offset];
                painter.line_segment([start, end], stroke);
                let [left, tip, right] = geometry::arrow_head(
                    start,
                    end,
                    self.arrow_pointer_length,
                    self.arrow_pointer_width,
                );
                if left != tip {
                    painter.add(egui::Shape::convex_polygon(
                        vec![left, tip, right],
                        shape.stroke(),
                        stroke,
                    ));
                }
            }
            Shape::Scribble { points, .. } => {
                let points: Vec<Pos2> = points.iter().map(|p| *p + offset).collect();
                if let [only] = points.as_slice() {
                    painter.circle_filled(*only, shape.stroke_width() / 2.0, shape.stroke());
                } else {
                    painter.add(egui::Shape::line(points, stroke));
                }
            }
        }
    }

    /// Draw all shapes in paint order
    pub fn draw_shapes<'a>(
        &self,
        painter: &Painter,
        origin: Pos2,
        shapes: impl IntoIterator<Item = &'a Shape>,
    ) {
        for shape in shapes {
            self.draw_shape(painter, origin, shape);
        }
    }

    /// Dashed-looking selection outline around a shape being manipulated
    pub fn draw_selection(&self, painter: &Painter, origin: Pos2, shape: &Shape) {
        let padding = shape.stroke_width() / 2.0 + 3.0;
        let rect = shape.bounds().expand(padding).translate(origin.to_vec2());
        painter.rect_stroke(rect, 0.0, Stroke::new(1.0, Color32::from_rgb(33, 150, 243)));
    }
}

/// Screen rect of the bottom-right resize handle for a shape, if it has one
pub fn resize_handle_rect(shape: &Shape, origin: Pos2) -> Option<Rect> {
    shape.resize_extent()?;
    let corner = shape.bounds().right_bottom() + origin.to_vec2();
    Some(Rect::from_center_size(corner, Vec2::splat(HANDLE_SIZE)))
}
