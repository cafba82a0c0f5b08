//! Projection axis: a one-dimensional sorted view of the point set.
//!
//! The axis goes through two states:
//! - **Building**: entries are appended in insertion order.
//! - **Frozen**: entries sorted ascending by projection value, plus a table mapping
//!   each point handle to its position in the sorted sequence.
//!
//! The transition happens once, lazily on the first positional read (or through an
//! explicit `freeze`), and is never undone. It sits behind a
//! [`OnceLock`] so racing first queries from several threads sort exactly once.
//! The insertion-ordered entries are moved into the sorted view, never copied.

use std::mem;
use std::sync::{Mutex, OnceLock, PoisonError};

use tracing::debug;

use crate::point::{Point, PointId};

/// Coordinate used as the projection axis.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum Axis {
    /// Project onto the X coordinate
    #[default]
    X,
    /// Project onto the Y coordinate
    Y,
}

impl Axis {
    /// Returns the coordinate of `point` along this axis
    #[inline]
    #[must_use]
    pub fn value<P: Point + ?Sized>(self, point: &P) -> f64 {
        match self {
            Self::X => point.x(),
            Self::Y => point.y(),
        }
    }

    /// Picks the axis along which `points` spread the widest.
    ///
    /// A wider spread separates points better along the projection, so fewer
    /// candidates survive the pruning bound. Ties and empty input give [`Axis::X`].
    ///
    /// # Example
    /// ```
    /// use axdex::Axis;
    /// let points = [(0.0, 0.0), (1.0, 10.0), (2.0, -5.0)];
    /// assert_eq!(Axis::from_spread(&points), Axis::Y);
    /// ```
    #[must_use]
    pub fn from_spread<P: Point>(points: &[P]) -> Self {
        let mut min_x = f64::INFINITY;
        let mut max_x = f64::NEG_INFINITY;
        let mut min_y = f64::INFINITY;
        let mut max_y = f64::NEG_INFINITY;

        for p in points {
            min_x = min_x.min(p.x());
            max_x = max_x.max(p.x());
            min_y = min_y.min(p.y());
            max_y = max_y.max(p.y());
        }

        if points.is_empty() || max_y - min_y <= max_x - min_x {
            Self::X
        } else {
            Self::Y
        }
    }
}

/// A point handle paired with its projection value at insertion time
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct AxisEntry {
    pub(crate) id: PointId,
    pub(crate) value: f64,
}

/// Sorted entries and the handle -> position table
#[derive(Clone, Debug)]
pub(crate) struct FrozenAxis {
    pub(crate) entries: Vec<AxisEntry>,
    positions: Vec<usize>,
}

impl FrozenAxis {
    fn build(mut entries: Vec<AxisEntry>) -> Self {
        // Ties may land in any order.
        entries.sort_unstable_by(|a, b| a.value.total_cmp(&b.value));

        let mut positions = vec![0; entries.len()];
        for (pos, entry) in entries.iter().enumerate() {
            positions[entry.id] = pos;
        }

        Self { entries, positions }
    }

    /// Position of `id` in the sorted entries
    #[inline]
    pub(crate) fn position(&self, id: PointId) -> Option<usize> {
        self.positions.get(id).copied()
    }
}

/// Stores the projection of every point along one axis.
///
/// Handles must be inserted densely: the n-th call to `insert` carries id `n`.
#[derive(Debug)]
pub(crate) struct ProjectionAxis {
    axis: Axis,
    capacity: usize,
    /// Insertion-ordered entries (Building state), emptied on freeze
    pending: Mutex<Vec<AxisEntry>>,
    /// Sorted view (Frozen state)
    frozen: OnceLock<FrozenAxis>,
}

impl ProjectionAxis {
    /// Creates an axis sized for `capacity` points.
    ///
    /// The axis is expected to receive exactly `capacity` inserts before the first
    /// positional read; a different count still works but is logged on freeze.
    pub(crate) fn with_capacity(capacity: usize, axis: Axis) -> Self {
        Self {
            axis,
            capacity,
            pending: Mutex::new(Vec::with_capacity(capacity)),
            frozen: OnceLock::new(),
        }
    }

    #[inline]
    pub(crate) fn axis(&self) -> Axis {
        self.axis
    }

    #[inline]
    pub(crate) fn is_frozen(&self) -> bool {
        self.frozen.get().is_some()
    }

    /// Projection value of `point` along this axis; does not freeze.
    #[inline]
    pub(crate) fn value_for<P: Point + ?Sized>(&self, point: &P) -> f64 {
        self.axis.value(point)
    }

    /// Appends a point.
    ///
    /// # Panics
    /// If the axis is already frozen.
    pub(crate) fn insert<P: Point + ?Sized>(&mut self, id: PointId, point: &P) {
        assert!(
            !self.is_frozen(),
            "cannot add points to the index after it has been queried or frozen"
        );
        let entry = AxisEntry { id, value: self.value_for(point) };
        let pending = self.pending.get_mut().unwrap_or_else(PoisonError::into_inner);
        debug_assert_eq!(id, pending.len(), "point ids must be dense");
        pending.push(entry);
    }

    /// Returns the frozen view, sorting on first call.
    ///
    /// The pending entries are taken out of the building buffer, which is left
    /// empty and unallocated.
    pub(crate) fn frozen(&self) -> &FrozenAxis {
        self.frozen.get_or_init(|| {
            // A poisoned lock still holds every inserted entry.
            let mut pending = self.pending.lock().unwrap_or_else(PoisonError::into_inner);
            self.sort(mem::take(&mut *pending))
        })
    }

    /// Eagerly performs the Building -> Frozen transition. No-op when already frozen.
    pub(crate) fn freeze(&mut self) {
        let _frozen = self.frozen();
    }

    fn sort(&self, entries: Vec<AxisEntry>) -> FrozenAxis {
        if entries.len() != self.capacity {
            debug!(
                capacity = self.capacity,
                len = entries.len(),
                "axis frozen with a point count different from its declared capacity"
            );
        }
        debug!(axis = ?self.axis, len = entries.len(), "freezing projection axis");
        FrozenAxis::build(entries)
    }

    /// Position of `id` in the sorted sequence, freezing the axis if needed.
    #[inline]
    pub(crate) fn position_for(&self, id: PointId) -> Option<usize> {
        self.frozen().position(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Point2D;

    fn axis_with(points: &[(f64, f64)], axis: Axis) -> ProjectionAxis {
        let mut projection = ProjectionAxis::with_capacity(points.len(), axis);
        for (id, p) in points.iter().enumerate() {
            projection.insert(id, p);
        }
        projection
    }

    #[test]
    fn test_axis_value() {
        let p = Point2D::new(3.0, -7.0);
        assert_eq!(Axis::X.value(&p), 3.0);
        assert_eq!(Axis::Y.value(&p), -7.0);
        assert_eq!(Axis::default(), Axis::X);
    }

    #[test]
    fn test_insert_keeps_insertion_order_until_frozen() {
        let projection = axis_with(&[(5.0, 0.0), (1.0, 0.0), (3.0, 0.0)], Axis::X);
        assert!(!projection.is_frozen());
        let pending = projection.pending.lock().unwrap();
        let values: Vec<f64> = pending.iter().map(|e| e.value).collect();
        assert_eq!(values, vec![5.0, 1.0, 3.0]);
    }

    #[test]
    fn test_lazy_freeze_releases_pending_entries() {
        let projection = axis_with(&[(5.0, 0.0), (1.0, 0.0), (3.0, 0.0)], Axis::X);
        assert_eq!(projection.position_for(1), Some(0));

        let pending = projection.pending.lock().unwrap();
        assert!(pending.is_empty());
        assert_eq!(pending.capacity(), 0);
        assert_eq!(projection.frozen().entries.len(), 3);
    }

    #[test]
    fn test_position_for_freezes_and_sorts() {
        let projection = axis_with(&[(5.0, 0.0), (1.0, 0.0), (3.0, 0.0)], Axis::X);
        assert_eq!(projection.position_for(0), Some(2));
        assert!(projection.is_frozen());
        assert_eq!(projection.position_for(1), Some(0));
        assert_eq!(projection.position_for(2), Some(1));
        assert_eq!(projection.position_for(3), None);

        let values: Vec<f64> = projection.frozen().entries.iter().map(|e| e.value).collect();
        assert_eq!(values, vec![1.0, 3.0, 5.0]);
    }

    #[test]
    fn test_positions_consistent_with_entries() {
        let points: Vec<(f64, f64)> = (0..50).map(|i| (((i * 37) % 11) as f64, i as f64)).collect();
        let projection = axis_with(&points, Axis::X);
        let frozen = projection.frozen();
        for (pos, entry) in frozen.entries.iter().enumerate() {
            assert_eq!(frozen.position(entry.id), Some(pos));
        }
        assert!(frozen.entries.windows(2).all(|w| w[0].value <= w[1].value));
    }

    #[test]
    fn test_y_axis_is_honored() {
        let projection = axis_with(&[(0.0, 9.0), (1.0, -2.0), (2.0, 4.0)], Axis::Y);
        assert_eq!(projection.axis(), Axis::Y);
        assert_eq!(projection.position_for(1), Some(0));
        assert_eq!(projection.position_for(2), Some(1));
        assert_eq!(projection.position_for(0), Some(2));
    }

    #[test]
    fn test_explicit_freeze() {
        let mut projection = axis_with(&[(2.0, 0.0), (1.0, 0.0)], Axis::X);
        projection.freeze();
        assert!(projection.is_frozen());
        assert_eq!(projection.pending.lock().unwrap().capacity(), 0);
        assert_eq!(projection.frozen().entries.len(), 2);
        projection.freeze();
        assert_eq!(projection.position_for(1), Some(0));
    }

    #[test]
    #[should_panic(expected = "cannot add points")]
    fn test_insert_after_freeze_panics() {
        let mut projection = axis_with(&[(2.0, 0.0)], Axis::X);
        assert_eq!(projection.position_for(0), Some(0));
        projection.insert(1, &(3.0, 0.0));
    }

    #[test]
    fn test_from_spread() {
        assert_eq!(Axis::from_spread::<(f64, f64)>(&[]), Axis::X);
        assert_eq!(Axis::from_spread(&[(0.0, 0.0), (10.0, 1.0)]), Axis::X);
        assert_eq!(Axis::from_spread(&[(0.0, 0.0), (1.0, 10.0)]), Axis::Y);
        assert_eq!(Axis::from_spread(&[(0.0, 0.0), (5.0, 5.0)]), Axis::X);
    }
}
