//! Generic lookup capability implemented by spatial indexes in this crate.

use crate::axdex::Axdex;
use crate::error::AxdexError;
use crate::point::{Point, PointId};

/// A spatial index that can look up a point's nearest neighbors.
pub trait SpatialIndex {
    /// Point type stored by the index
    type Point;

    /// Returns up to `n` nearest neighbors of the indexed point `id`, nearest first,
    /// cut off at `max_distance`. `n = None` searches for every neighbor in range.
    ///
    /// # Errors
    /// [`AxdexError::UnknownPoint`] if `id` is not a point of the index.
    fn nearest_n(
        &self,
        id: PointId,
        n: Option<usize>,
        max_distance: f64,
    ) -> Result<Vec<&Self::Point>, AxdexError>;

    /// Returns all points contained in the index.
    fn points(&self) -> &[Self::Point];
}

impl<P: Point> SpatialIndex for Axdex<P> {
    type Point = P;

    fn nearest_n(
        &self,
        id: PointId,
        n: Option<usize>,
        max_distance: f64,
    ) -> Result<Vec<&P>, AxdexError> {
        Self::nearest_n(self, id, n, max_distance)
    }

    fn points(&self) -> &[P] {
        Self::points(self)
    }
}
