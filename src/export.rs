//! Rasterize the canvas to an image and write it out as PNG.
//!
//! Only outlines are drawn: a pixel gets the stroke color when its center lies
//! within half a stroke width of the shape outline.

use std::path::Path;

use egui::{Color32, Pos2, Rect};
use image::{Rgba, RgbaImage};
use log::info;

use crate::error::ExportError;
use crate::shape::{Shape, geometry};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExportOptions {
    pub width: u32,
    pub height: u32,
    pub background: Color32,
    pub arrow_pointer_length: f32,
    pub arrow_pointer_width: f32,
}

impl ExportOptions {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            background: Color32::from_rgb(0xf5, 0xf5, 0xf5),
            arrow_pointer_length: geometry::ARROW_POINTER_LENGTH,
            arrow_pointer_width: geometry::ARROW_POINTER_WIDTH,
        }
    }

    pub fn with_background(mut self, background: Color32) -> Self {
        self.background = background;
        self
    }

    pub fn with_arrow_pointer(mut self, length: f32, width: f32) -> Self {
        self.arrow_pointer_length = length;
        self.arrow_pointer_width = width;
        self
    }
}

fn to_rgba(color: Color32) -> Rgba<u8> {
    Rgba(color.to_srgba_unmultiplied())
}

/// Distance from `pos` to the painted outline, including arrow heads
fn painted_distance(shape: &Shape, pos: Pos2, options: &ExportOptions) -> f32 {
    match shape {
        Shape::Arrow { points, .. } => {
            let [left, tip, right] = geometry::arrow_head(
                points[0],
                points[1],
                options.arrow_pointer_length,
                options.arrow_pointer_width,
            );
            let head = geometry::distance_to_polyline(pos, &[left, tip, right]);
            shape.distance_to_outline(pos).min(head)
        }
        _ => shape.distance_to_outline(pos),
    }
}

fn painted_bounds(shape: &Shape, options: &ExportOptions) -> Rect {
    let padding = shape.stroke_width() / 2.0 + 1.0;
    let head = match shape {
        Shape::Arrow { .. } => options.arrow_pointer_length.max(options.arrow_pointer_width),
        _ => 0.0,
    };
    shape.bounds().expand(padding + head)
}

fn draw_shape(raster: &mut RgbaImage, shape: &Shape, options: &ExportOptions) {
    let bounds = painted_bounds(shape, options);
    let (width, height) = raster.dimensions();
    let x_range = (bounds.min.x.floor().max(0.0) as u32)..(bounds.max.x.ceil().max(0.0) as u32).min(width);
    let y_range = (bounds.min.y.floor().max(0.0) as u32)..(bounds.max.y.ceil().max(0.0) as u32).min(height);
    let half_width = (shape.stroke_width() / 2.0).max(0.5);
    let color = to_rgba(shape.stroke());

    for y in y_range {
        for x in x_range.clone() {
            let center = Pos2::new(x as f32 + 0.5, y as f32 + 0.5);
            if painted_distance(shape, center, options) <= half_width {
                raster.put_pixel(x, y, color);
            }
        }
    }
}

/// Render `shapes` in paint order onto a fresh image
pub fn rasterize(shapes: &[Shape], options: &ExportOptions) -> RgbaImage {
    let mut raster = RgbaImage::from_pixel(options.width, options.height, to_rgba(options.background));
    for shape in shapes {
        draw_shape(&mut raster, shape, options);
    }
    raster
}

/// Rasterize and save as PNG at `path`
pub fn export_png(shapes: &[Shape], options: &ExportOptions, path: &Path) -> Result<(), ExportError> {
    if options.width == 0 || options.height == 0 {
        return Err(ExportError::EmptyCanvas {
            width: options.width,
            height: options.height,
        });
    }
    let raster = rasterize(shapes, options);
    raster.save_with_format(path, image::ImageFormat::Png)?;
    info!(
        "Exported {} shapes ({}x{}) to {}",
        shapes.len(),
        options.width,
        options.height,
        path.display()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::id_generator::generate_id;
    use crate::shape::factory;

    #[test]
    fn test_empty_canvas_is_background() {
        let options = ExportOptions::new(4, 3).with_background(Color32::WHITE);
        let image = rasterize(&[], &options);
        assert_eq!(image.dimensions(), (4, 3));
        assert!(image.pixels().all(|p| *p == Rgba([255, 255, 255, 255])));
    }

    #[test]
    fn test_zero_size_export_fails() {
        let err = export_png(&[], &ExportOptions::new(0, 10), Path::new("unused.png")).unwrap_err();
        assert!(matches!(err, ExportError::EmptyCanvas { width: 0, height: 10 }));
    }

    #[test]
    fn test_shapes_outside_image_are_clipped() {
        let mut rect = factory::create_rectangle(generate_id(), Pos2::new(-50.0, -50.0), Color32::RED, 2.0);
        rect.drag_to(Pos2::new(500.0, 500.0));
        let image = rasterize(&[rect], &ExportOptions::new(10, 10));
        assert_eq!(image.dimensions(), (10, 10));
    }
}
