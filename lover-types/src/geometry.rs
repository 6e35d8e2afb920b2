//! Viewport geometry and the margin clamp used by popup dragging.

use serde::{Deserialize, Serialize};

/// Distance kept between a dragged popup and every viewport edge.
pub const DEFAULT_MARGIN_PX: f64 = 8.0;

/// A client-space point, in CSS pixels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn offset_from(self, origin: Point) -> Point {
        Point::new(self.x - origin.x, self.y - origin.y)
    }

    pub fn translate(self, delta: Point) -> Point {
        Point::new(self.x + delta.x, self.y + delta.y)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// Bounding box as reported by `getBoundingClientRect`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub const fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    pub fn origin(&self) -> Point {
        Point::new(self.left, self.top)
    }

    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }
}

/// Clamp one axis into `[margin, viewport - size - margin]`.
///
/// When the element plus both margins does not fit the viewport the range is
/// empty; the lower bound wins and the result is `margin`.
pub fn clamp_axis(proposed: f64, size: f64, viewport: f64, margin: f64) -> f64 {
    proposed.min(viewport - size - margin).max(margin)
}

/// Clamp a proposed top-left so an element of `size` stays inside `viewport`.
pub fn clamp_to_viewport(proposed: Point, size: Size, viewport: Size, margin: f64) -> Point {
    Point::new(
        clamp_axis(proposed.x, size.width, viewport.width, margin),
        clamp_axis(proposed.y, size.height, viewport.height, margin),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamp_keeps_in_range_values() {
        assert_eq!(clamp_axis(120.0, 200.0, 800.0, 8.0), 120.0);
    }

    #[test]
    fn clamp_pulls_back_from_both_edges() {
        assert_eq!(clamp_axis(-50.0, 200.0, 800.0, 8.0), 8.0);
        assert_eq!(clamp_axis(900.0, 200.0, 800.0, 8.0), 592.0);
    }

    #[test]
    fn clamp_result_stays_within_bounds_across_inputs() {
        let viewport = 640.0;
        let margin = 8.0;
        for size in [0.0, 10.0, 300.0, 624.0] {
            let mut proposed = -1000.0;
            while proposed <= 1000.0 {
                let result = clamp_axis(proposed, size, viewport, margin);
                assert!(result >= margin, "size={size} proposed={proposed}");
                assert!(
                    result <= viewport - size - margin,
                    "size={size} proposed={proposed}"
                );
                proposed += 37.5;
            }
        }
    }

    #[test]
    fn oversized_element_pins_to_margin() {
        // 700 + 2 * 8 > 600: lower bound wins.
        assert_eq!(clamp_axis(-300.0, 700.0, 600.0, 8.0), 8.0);
        assert_eq!(clamp_axis(250.0, 700.0, 600.0, 8.0), 8.0);
    }

    #[test]
    fn clamp_to_viewport_is_per_axis() {
        let clamped = clamp_to_viewport(
            Point::new(-100.0, 500.0),
            Size::new(200.0, 150.0),
            Size::new(800.0, 600.0),
            DEFAULT_MARGIN_PX,
        );
        assert_eq!(clamped, Point::new(8.0, 442.0));
    }
}
