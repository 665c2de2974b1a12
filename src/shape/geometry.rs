use egui::{Pos2, Rect, Vec2};

// Common constants for all shape types
pub const DEFAULT_STROKE_WIDTH: f32 = 2.0;
pub const ARROW_POINTER_LENGTH: f32 = 10.0;
pub const ARROW_POINTER_WIDTH: f32 = 10.0;
/// Extra slack around a stroke when hit testing with the pointer
pub const HIT_TOLERANCE: f32 = 6.0;

/// Signed rectangle extent from the anchor to the pointer.
/// Negative components mean the drag went left/up of the anchor.
pub fn rect_extent(origin: Pos2, pointer: Pos2) -> Vec2 {
    pointer - origin
}

/// Radius of a circle being dragged out from `origin`.
///
/// This is half the anchor-to-pointer distance, so the anchor is not the
/// geometric center of the circle while dragging.
pub fn drag_radius(origin: Pos2, pointer: Pos2) -> f32 {
    origin.distance(pointer) / 2.0
}

/// Turns a signed (x, y, width, height) into a rect with non-negative extents
pub fn normalized_rect(x: f32, y: f32, width: f32, height: f32) -> Rect {
    Rect::from_two_pos(Pos2::new(x, y), Pos2::new(x + width, y + height))
}

/// Calculate distance from a point to a line segment
pub fn distance_to_segment(point: Pos2, start: Pos2, end: Pos2) -> f32 {
    let line = end - start;
    let len_sq = line.length_sq();
    if len_sq == 0.0 {
        return point.distance(start);
    }

    let t = ((point - start).dot(line) / len_sq).clamp(0.0, 1.0);
    point.distance(start + line * t)
}

/// Distance from a point to the closest segment of a polyline
pub fn distance_to_polyline(point: Pos2, points: &[Pos2]) -> f32 {
    match points {
        [] => f32::INFINITY,
        [only] => point.distance(*only),
        _ => points
            .windows(2)
            .map(|pair| distance_to_segment(point, pair[0], pair[1]))
            .fold(f32::INFINITY, f32::min),
    }
}

/// Distance from a point to the outline of an axis-aligned rectangle
pub fn distance_to_rect_outline(point: Pos2, rect: Rect) -> f32 {
    let corners = [
        rect.left_top(),
        rect.right_top(),
        rect.right_bottom(),
        rect.left_bottom(),
        rect.left_top(),
    ];
    distance_to_polyline(point, &corners)
}

/// Distance from a point to the circumference of a circle
pub fn distance_to_circle_outline(point: Pos2, center: Pos2, radius: f32) -> f32 {
    (point.distance(center) - radius.abs()).abs()
}

/// The two barbs of an arrow head at `end`, as `[left, tip, right]`.
/// Degenerate arrows (start == end) get no head and all three points collapse onto `end`.
pub fn arrow_head(start: Pos2, end: Pos2, length: f32, width: f32) -> [Pos2; 3] {
    let dir = end - start;
    if dir.length_sq() == 0.0 {
        return [end, end, end];
    }
    let dir = dir.normalized();
    let normal = dir.rot90();
    let base = end - dir * length;
    let half = width / 2.0;
    [base + normal * half, end, base - normal * half]
}

/// Calculate the bounding box for a set of points
pub fn calculate_bounds(points: &[Pos2], padding: f32) -> Rect {
    if points.is_empty() {
        return Rect::NOTHING;
    }

    let mut min = Pos2::new(f32::INFINITY, f32::INFINITY);
    let mut max = Pos2::new(f32::NEG_INFINITY, f32::NEG_INFINITY);
    for point in points {
        min = min.min(*point);
        max = max.max(*point);
    }

    Rect::from_min_max(min, max).expand(padding)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_extent_is_signed() {
        let extent = rect_extent(Pos2::new(10.0, 10.0), Pos2::new(0.0, 40.0));
        assert_eq!(extent, Vec2::new(-10.0, 30.0));
    }

    #[test]
    fn test_drag_radius_is_half_distance() {
        let radius = drag_radius(Pos2::new(0.0, 0.0), Pos2::new(30.0, 40.0));
        assert_eq!(radius, 25.0);
    }

    #[test]
    fn test_normalized_rect_flips_negative_extent() {
        let rect = normalized_rect(50.0, 50.0, -20.0, -10.0);
        assert_eq!(rect.min, Pos2::new(30.0, 40.0));
        assert_eq!(rect.max, Pos2::new(50.0, 50.0));
    }

    #[test]
    fn test_distance_to_segment() {
        let start = Pos2::new(0.0, 0.0);
        let end = Pos2::new(10.0, 0.0);
        assert_eq!(distance_to_segment(Pos2::new(5.0, 3.0), start, end), 3.0);
        assert_eq!(distance_to_segment(Pos2::new(13.0, 4.0), start, end), 5.0);
        assert_eq!(distance_to_segment(Pos2::new(3.0, 4.0), start, start), 5.0);
    }

    #[test]
    fn test_arrow_head_points_back_from_tip() {
        let [left, tip, right] = arrow_head(Pos2::new(0.0, 0.0), Pos2::new(20.0, 0.0), 10.0, 10.0);
        assert_eq!(tip, Pos2::new(20.0, 0.0));
        assert!((left.x - 10.0).abs() < 1e-5);
        assert!((right.x - 10.0).abs() < 1e-5);
        assert!(((left.y - right.y).abs() - 10.0).abs() < 1e-5);
    }

    #[test]
    fn test_calculate_bounds() {
        let bounds = calculate_bounds(&[Pos2::new(1.0, 5.0), Pos2::new(4.0, 2.0)], 1.0);
        assert_eq!(bounds.min, Pos2::new(0.0, 1.0));
        assert_eq!(bounds.max, Pos2::new(5.0, 6.0));
        assert_eq!(calculate_bounds(&[], 1.0), Rect::NOTHING);
    }
}
