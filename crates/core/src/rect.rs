//! Axis-aligned rectangles in hangar floor coordinates.

use nalgebra::RealField;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Axis-aligned rectangle on the hangar floor.
///
/// `x` grows toward the hangar's width, `y` toward its length, with the
/// origin at the top-left corner of the floor.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Rect2D<S> {
    /// Minimum x coordinate.
    pub min_x: S,
    /// Minimum y coordinate.
    pub min_y: S,
    /// Maximum x coordinate.
    pub max_x: S,
    /// Maximum y coordinate.
    pub max_y: S,
}

impl<S: RealField + Copy> Rect2D<S> {
    /// Creates a new rectangle from min/max coordinates.
    pub fn new(min_x: S, min_y: S, max_x: S, max_y: S) -> Self {
        Self {
            min_x,
            min_y,
            max_x,
            max_y,
        }
    }

    /// Creates a rectangle from its top-left corner and extent.
    pub fn from_origin(x: S, y: S, width: S, length: S) -> Self {
        Self::new(x, y, x + width, y + length)
    }

    /// Extent along the x axis.
    pub fn width(&self) -> S {
        self.max_x - self.min_x
    }

    /// Extent along the y axis.
    pub fn length(&self) -> S {
        self.max_y - self.min_y
    }

    /// Checks whether the interiors of two rectangles intersect.
    ///
    /// Rectangles that only share an edge or a corner do not overlap.
    pub fn overlaps(&self, other: &Self) -> bool {
        self.min_x < other.max_x
            && self.max_x > other.min_x
            && self.min_y < other.max_y
            && self.max_y > other.min_y
    }

    /// Checks whether `other` lies entirely inside this rectangle.
    pub fn contains(&self, other: &Self) -> bool {
        other.min_x >= self.min_x
            && other.max_x <= self.max_x
            && other.min_y >= self.min_y
            && other.max_y <= self.max_y
    }

    /// Expands the rectangle by a margin on all sides.
    pub fn expand(&self, margin: S) -> Self {
        Self {
            min_x: self.min_x - margin,
            min_y: self.min_y - margin,
            max_x: self.max_x + margin,
            max_y: self.max_y + margin,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_from_origin() {
        let r = Rect2D::from_origin(2.0, 3.0, 10.0, 15.0);
        assert_relative_eq!(r.max_x, 12.0);
        assert_relative_eq!(r.max_y, 18.0);
        assert_relative_eq!(r.width() * r.length(), 150.0);
    }

    #[test]
    fn test_touching_edges_do_not_overlap() {
        let a = Rect2D::from_origin(0.0, 0.0, 8.0, 8.0);
        let b = Rect2D::from_origin(8.0, 0.0, 2.0, 8.0);
        assert!(!a.overlaps(&b));
        assert!(!b.overlaps(&a));
    }

    #[test]
    fn test_partial_overlap() {
        let a = Rect2D::new(0.0, 0.0, 10.0, 10.0);
        let b = Rect2D::new(5.0, 5.0, 15.0, 15.0);
        assert!(a.overlaps(&b));
        assert!(!a.contains(&b));
    }

    #[test]
    fn test_expand_and_contains() {
        let floor = Rect2D::new(0.0, 0.0, 100.0, 150.0);
        let footprint = Rect2D::from_origin(2.0, 2.0, 10.0, 15.0);
        assert!(floor.contains(&footprint.expand(2.0)));
        assert!(!floor.contains(&footprint.expand(3.0)));
    }
}
