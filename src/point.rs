//! Point capability consumed by the index.
//!
//! The index never constructs or mutates points. It only needs two orthogonal
//! coordinates and a squared Euclidean distance between two points.

/// Dense handle assigned to a point at insertion time (0, 1, 2, ... in insertion order).
///
/// Identity is the handle, not the coordinates: two points with equal coordinates
/// inserted twice get two distinct handles.
pub type PointId = usize;

/// A 2D point as seen by the index.
pub trait Point {
    /// Coordinate along the X axis
    fn x(&self) -> f64;

    /// Coordinate along the Y axis
    fn y(&self) -> f64;

    /// Squared Euclidean distance to `other`
    #[inline]
    fn distance_sqr(&self, other: &Self) -> f64 {
        let dx = self.x() - other.x();
        let dy = self.y() - other.y();
        dx * dx + dy * dy
    }
}

/// Plain value point with `f64` coordinates.
///
/// # Example
/// ```
/// use axdex::{Point, Point2D};
/// let a = Point2D::new(0.0, 0.0);
/// let b = Point2D::new(3.0, 4.0);
/// assert_eq!(a.distance_sqr(&b), 25.0);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point2D {
    /// X coordinate
    pub x: f64,
    /// Y coordinate
    pub y: f64,
}

impl Point2D {
    /// Creates a point from its coordinates
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl Point for Point2D {
    #[inline]
    fn x(&self) -> f64 {
        self.x
    }

    #[inline]
    fn y(&self) -> f64 {
        self.y
    }
}

impl From<(f64, f64)> for Point2D {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

impl Point for (f64, f64) {
    #[inline]
    fn x(&self) -> f64 {
        self.0
    }

    #[inline]
    fn y(&self) -> f64 {
        self.1
    }
}

impl Point for [f64; 2] {
    #[inline]
    fn x(&self) -> f64 {
        self[0]
    }

    #[inline]
    fn y(&self) -> f64 {
        self[1]
    }
}

// Lets callers index borrowed points without copying them.
impl<T: Point + ?Sized> Point for &T {
    #[inline]
    fn x(&self) -> f64 {
        (**self).x()
    }

    #[inline]
    fn y(&self) -> f64 {
        (**self).y()
    }

    #[inline]
    fn distance_sqr(&self, other: &Self) -> f64 {
        (**self).distance_sqr(*other)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_distance_sqr_point2d() {
        let a = Point2D::new(1.0, 1.0);
        let b = Point2D::new(4.0, 5.0);
        assert_eq!(a.distance_sqr(&b), 25.0);
        assert_eq!(b.distance_sqr(&a), 25.0);
        assert_eq!(a.distance_sqr(&a), 0.0);
    }

    #[test]
    fn test_tuple_and_array_points() {
        let t = (2.0, -1.0);
        let a = [2.0, -1.0];
        assert_eq!(t.x(), a.x());
        assert_eq!(t.y(), a.y());
        assert_eq!(t.distance_sqr(&(0.0, 0.0)), 5.0);
        assert_eq!(a.distance_sqr(&[0.0, 0.0]), 5.0);
    }

    #[test]
    fn test_reference_points_delegate() {
        let a = Point2D::new(0.0, 0.0);
        let b = Point2D::new(0.0, 2.0);
        let (ra, rb) = (&a, &b);
        assert_eq!(ra.distance_sqr(&rb), 4.0);
        assert_eq!(Point::y(&rb), 2.0);
    }
}
