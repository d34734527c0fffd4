//! Stroke geometry: points and the line segments a gesture is made of.

use super::color::Color;
use serde::{Deserialize, Serialize};

/// Surface-local coordinate in logical pixels.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Translates a page-space point into the space of an element whose
    /// top-left corner sits at `origin`.
    pub fn relative_to(self, origin: Point) -> Self {
        Self {
            x: self.x - origin.x,
            y: self.y - origin.y,
        }
    }
}

/// One rendered line segment, carrying the tool settings that were active
/// when it was drawn. Replays always use these stored settings, never the
/// canvas's current ones.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    /// Segment start
    pub from: Point,
    /// Segment end (equal to `from` for the first segment of a stroke)
    pub to: Point,
    /// Stroke color
    pub color: Color,
    /// Line thickness in pixels
    pub width: f64,
}

impl Segment {
    pub fn new(from: Point, to: Point, color: Color, width: f64) -> Self {
        Self {
            from,
            to,
            color,
            width,
        }
    }

    /// Returns `true` when both ends coincide (rendered as a round dot).
    pub fn is_dot(&self) -> bool {
        self.from == self.to
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::BLACK;

    #[test]
    fn relative_to_subtracts_origin() {
        let page = Point::new(130.0, 75.5);
        let local = page.relative_to(Point::new(100.0, 50.0));
        assert_eq!(local, Point::new(30.0, 25.5));
    }

    #[test]
    fn first_segment_of_stroke_is_a_dot() {
        let p = Point::new(4.0, 4.0);
        assert!(Segment::new(p, p, BLACK, 3.0).is_dot());
        assert!(!Segment::new(p, Point::new(5.0, 4.0), BLACK, 3.0).is_dot());
    }
}
