//! Single-axis spatial index.

use crate::axis::{Axis, ProjectionAxis};
use crate::error::AxdexError;
use crate::point::{Point, PointId};

/// Spatial index answering bounded k-nearest-neighbor queries over a fixed point set.
///
/// Points are projected onto one coordinate ([`Axis`]) and sorted along it on the
/// first query. A query then walks outward from the query point's position on that
/// sorted line, using the 1D offset as a lower bound on the true 2D distance to stop
/// early.
///
/// The index has two phases: insert every point, then query. The first query (or an
/// explicit [`freeze`](Axdex::freeze)) freezes the index; inserting afterwards is a
/// precondition violation.
///
/// # Examples
/// ```
/// use axdex::{Axdex, Axis, Point2D};
///
/// let mut index = Axdex::with_capacity_and_axis(4, Axis::X);
/// let a = index.insert(Point2D::new(0.0, 0.0));
/// let b = index.insert(Point2D::new(1.0, 0.0));
/// let c = index.insert(Point2D::new(2.0, 0.0));
/// let _d = index.insert(Point2D::new(0.0, 5.0));
///
/// let mut results = Vec::new();
/// index.query_nearest_n(a, Some(3), 10.0, &mut results).unwrap();
/// assert_eq!(results, vec![a, b, c]);
/// ```
#[derive(Debug)]
pub struct Axdex<P> {
    /// Sorted projection used for pruning
    pub(crate) axis: ProjectionAxis,
    /// All points in insertion order; a point's index is its id
    pub(crate) points: Vec<P>,
}

impl<P: Point> Axdex<P> {
    /// Creates an empty index projecting onto the X axis
    #[must_use]
    pub fn new() -> Self {
        Self::with_capacity_and_axis(0, Axis::default())
    }

    /// Creates an index sized for `capacity` points, projecting onto the X axis
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_capacity_and_axis(capacity, Axis::default())
    }

    /// Creates an empty index projecting onto `axis`
    #[must_use]
    pub fn with_axis(axis: Axis) -> Self {
        Self::with_capacity_and_axis(0, axis)
    }

    /// Creates an index sized for `capacity` points, projecting onto `axis`.
    ///
    /// The index expects exactly `capacity` inserts before the first query. Other
    /// counts work; capacity only drives preallocation.
    ///
    /// # Arguments
    /// * `capacity` - Number of points that will be inserted
    /// * `axis` - Coordinate used for sorting and pruning, fixed for the index lifetime
    #[must_use]
    pub fn with_capacity_and_axis(capacity: usize, axis: Axis) -> Self {
        Self {
            axis: ProjectionAxis::with_capacity(capacity, axis),
            points: Vec::with_capacity(capacity),
        }
    }

    /// Adds a point and returns its id.
    ///
    /// # Panics
    /// If the index was already frozen by a query or [`freeze`](Axdex::freeze), or
    /// if a coordinate of `point` is NaN or infinite.
    /// Use [`try_insert`](Axdex::try_insert) to get an error instead.
    pub fn insert(&mut self, point: P) -> PointId {
        match self.try_insert(point) {
            Ok(id) => id,
            Err(err) => panic!("{err}"),
        }
    }

    /// Adds a point and returns its id.
    ///
    /// # Errors
    /// [`AxdexError::Frozen`] once the index is frozen, and
    /// [`AxdexError::NonFinite`] if a coordinate of `point` is NaN or infinite.
    /// Neither error changes the index.
    pub fn try_insert(&mut self, point: P) -> Result<PointId, AxdexError> {
        let id = self.points.len();
        if self.axis.is_frozen() {
            return Err(AxdexError::frozen(id));
        }
        // Distances to such a point are NaN, which has no place in a sorted result.
        if !(point.x().is_finite() && point.y().is_finite()) {
            return Err(AxdexError::non_finite(id));
        }

        self.axis.insert(id, &point);
        self.points.push(point);
        Ok(id)
    }

    /// Sorts the projection now instead of on the first query. No-op when already frozen.
    pub fn freeze(&mut self) {
        self.axis.freeze();
    }
}

impl<P> Axdex<P> {
    /// All points in insertion order; `points()[id]` is the point with that id
    pub fn points(&self) -> &[P] {
        &self.points
    }

    /// Returns the point with the given id
    pub fn get(&self, id: PointId) -> Option<&P> {
        self.points.get(id)
    }

    /// Returns the number of points
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns whether the index is empty
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Coordinate the index projects onto
    pub fn axis(&self) -> Axis {
        self.axis.axis()
    }

    /// Returns whether the index has left the build phase
    pub fn is_frozen(&self) -> bool {
        self.axis.is_frozen()
    }
}

impl<P: Point> Default for Axdex<P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P: Point> FromIterator<P> for Axdex<P> {
    fn from_iter<I: IntoIterator<Item = P>>(iter: I) -> Self {
        let iter = iter.into_iter();
        let mut index = Self::with_capacity(iter.size_hint().0);
        for point in iter {
            let _id = index.insert(point);
        }
        index
    }
}
