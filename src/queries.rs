//! Bounded k-nearest-neighbor queries for [`Axdex`].

use tracing::{trace, warn};

use crate::axdex::Axdex;
use crate::axis::AxisEntry;
use crate::error::AxdexError;
use crate::point::{Point, PointId};
use crate::results::ResultAccumulator;

impl<P: Point> Axdex<P> {
    /// Two-pointer expansion around the query point's position on the sorted axis.
    ///
    /// The squared axis offset never exceeds the squared 2D distance, so a direction
    /// whose next entry is already as far along the axis as the worst kept candidate
    /// (or past `max_distance`) is retired for good.
    fn query_nearest_n_internal(
        &self,
        id: PointId,
        n: Option<usize>,
        max_distance: f64,
    ) -> Result<ResultAccumulator<'_, P>, AxdexError> {
        let len = self.points.len();
        let Some(source) = self.points.get(id) else {
            warn!(id, len, "query point is not a member of the index");
            return Err(AxdexError::unknown_point(id, len));
        };

        let n = n.unwrap_or(len);
        let mut results = ResultAccumulator::new(source, n);
        if n == 0 {
            return Ok(results);
        }
        results.insert(id, 0.0);

        let pos = self
            .axis
            .position_for(id)
            .ok_or_else(|| AxdexError::unknown_point(id, len))?;
        let entries = &self.axis.frozen().entries;
        let origin = entries[pos].value;

        // `None` marks a direction with nothing left to offer.
        let mut left = pos.checked_sub(1);
        let mut right = Some(pos + 1).filter(|&i| i < entries.len());

        loop {
            if let Some(l) = left {
                if !results.has_potential(origin - entries[l].value, max_distance) {
                    left = None;
                }
            }
            if let Some(r) = right {
                if !results.has_potential(entries[r].value - origin, max_distance) {
                    right = None;
                }
            }

            let (l, r) = match (left, right) {
                (None, None) => break,
                cursors => cursors,
            };

            let left_candidate = l.map(|i| self.evaluate(&results, entries[i]));
            let right_candidate = r.map(|i| self.evaluate(&results, entries[i]));

            // Ties go left.
            let pick_left = match (left_candidate, right_candidate) {
                (Some((_, true, ld)), Some((_, true, rd))) => ld <= rd,
                (Some((_, true, _)), _) => true,
                _ => false,
            };

            match left_candidate {
                Some((candidate, true, distance)) if pick_left => {
                    results.insert(candidate, distance);
                    left = l.and_then(|i| i.checked_sub(1));
                }
                Some((_, false, _)) => left = l.and_then(|i| i.checked_sub(1)),
                _ => {}
            }

            match right_candidate {
                Some((candidate, true, distance)) if !pick_left => {
                    results.insert(candidate, distance);
                    right = r.map(|i| i + 1).filter(|&i| i < entries.len());
                }
                Some((_, false, _)) => right = r.map(|i| i + 1).filter(|&i| i < entries.len()),
                _ => {}
            }
        }

        trace!(id, n, max_distance, found = results.len(), "nearest_n query");
        Ok(results)
    }

    /// Viability and squared distance of the point behind `entry`
    #[inline]
    fn evaluate(
        &self,
        results: &ResultAccumulator<'_, P>,
        entry: AxisEntry,
    ) -> (PointId, bool, f64) {
        let (viable, distance) = results.viable(&self.points[entry.id]);
        (entry.id, viable, distance)
    }

    /// Queries for the `n` nearest neighbors of an indexed point
    ///
    /// Results are appended to the output vector (not cleared first), ordered by
    /// ascending squared distance. For any `n` other than `Some(0)` the query point
    /// itself comes first, since it is at distance 0 and occupies one of the `n`
    /// slots. `Some(0)` yields no results at all.
    ///
    /// The first query freezes the index.
    ///
    /// # Arguments
    /// * `id` - Id of the query point, as returned by `insert`
    /// * `n` - Maximum number of results; `None` means every indexed point
    /// * `max_distance` - Cutoff along the index axis (not a 2D radius); may be `f64::INFINITY`
    /// * `results` - Vector to append matching point ids to
    ///
    /// # Errors
    /// [`AxdexError::UnknownPoint`] if `id` is not in the index.
    ///
    /// # Examples
    /// ```
    /// use axdex::Axdex;
    ///
    /// let mut index = Axdex::with_capacity(4);
    /// let a = index.insert((0.0, 0.0));
    /// let b = index.insert((1.0, 0.0));
    /// let c = index.insert((2.0, 0.0));
    /// let _d = index.insert((0.0, 5.0));
    ///
    /// let mut results = Vec::new();
    /// index.query_nearest_n(a, Some(2), 10.0, &mut results).unwrap();
    /// assert_eq!(results, vec![a, b]);
    ///
    /// // Nothing else lies within 0.5 of C along X
    /// results.clear();
    /// index.query_nearest_n(c, None, 0.5, &mut results).unwrap();
    /// assert_eq!(results, vec![c]);
    /// ```
    pub fn query_nearest_n(
        &self,
        id: PointId,
        n: Option<usize>,
        max_distance: f64,
        results: &mut Vec<PointId>,
    ) -> Result<(), AxdexError> {
        let found = self.query_nearest_n_internal(id, n, max_distance)?;
        results.extend(found.into_ids());
        Ok(())
    }

    /// Returns the `n` nearest neighbors of an indexed point, nearest first.
    ///
    /// Same semantics as [`query_nearest_n`](Axdex::query_nearest_n), resolved to points.
    ///
    /// # Errors
    /// [`AxdexError::UnknownPoint`] if `id` is not in the index.
    pub fn nearest_n(
        &self,
        id: PointId,
        n: Option<usize>,
        max_distance: f64,
    ) -> Result<Vec<&P>, AxdexError> {
        let found = self.query_nearest_n_internal(id, n, max_distance)?;
        Ok(found.into_ids().map(|id| &self.points[id]).collect())
    }

    /// Returns `(id, squared distance)` pairs for the `n` nearest neighbors, nearest first
    ///
    /// # Errors
    /// [`AxdexError::UnknownPoint`] if `id` is not in the index.
    pub fn nearest_n_with_distances(
        &self,
        id: PointId,
        n: Option<usize>,
        max_distance: f64,
    ) -> Result<Vec<(PointId, f64)>, AxdexError> {
        let found = self.query_nearest_n_internal(id, n, max_distance)?;
        Ok(found.result().iter().map(|&(d, id)| (id, d)).collect())
    }
}
