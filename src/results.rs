//! Per-query candidate buffer.

use crate::point::{Point, PointId};

/// Fixed-capacity buffer of the best candidates seen so far for one query.
///
/// Slots are kept ascending by squared distance to the source point. Only the
/// filled prefix is stored; unfilled trailing slots are simply absent.
#[derive(Clone, Debug)]
pub(crate) struct ResultAccumulator<'a, P> {
    /// Query point distances are measured from
    source: &'a P,
    /// `(distance_sqr, id)` ascending by distance, no duplicate ids
    slots: Vec<(f64, PointId)>,
    capacity: usize,
    /// Distance of the last slot; meaningful only when full
    worst: f64,
}

impl<'a, P: Point> ResultAccumulator<'a, P> {
    pub(crate) fn new(source: &'a P, capacity: usize) -> Self {
        Self {
            source,
            slots: Vec::with_capacity(capacity),
            capacity,
            worst: f64::NEG_INFINITY,
        }
    }

    #[inline]
    pub(crate) fn is_full(&self) -> bool {
        self.slots.len() >= self.capacity
    }

    /// Returns whether `candidate` could enter the buffer, with its squared
    /// distance to the source
    #[inline]
    pub(crate) fn viable(&self, candidate: &P) -> (bool, f64) {
        let distance_sqr = candidate.distance_sqr(self.source);
        (!self.is_full() || distance_sqr < self.worst, distance_sqr)
    }

    /// Returns whether a direction along the axis may still yield viable points.
    ///
    /// `delta` is the axis offset between the source and the next candidate in
    /// that direction. The squared offset never exceeds the true squared distance,
    /// so once it reaches `worst` nothing farther along the direction can win.
    #[inline]
    pub(crate) fn has_potential(&self, delta: f64, max_distance: f64) -> bool {
        // Negated so a NaN offset or radius also cuts the direction off.
        if !(delta.abs() <= max_distance) {
            return false;
        }

        !self.is_full() || delta * delta < self.worst
    }

    /// Inserts a candidate, keeping the slots sorted. No-op for an id already present.
    ///
    /// An id always arrives with the same distance, its distance to the source.
    pub(crate) fn insert(&mut self, id: PointId, distance_sqr: f64) {
        if self.capacity == 0 {
            return;
        }

        // A point already kept sits in the run of slots at exactly its distance.
        let start = self.slots.partition_point(|&(d, _)| d < distance_sqr);
        // Equal distances keep their arrival order.
        let pos = self.slots.partition_point(|&(d, _)| d <= distance_sqr);
        if self.slots[start..pos].iter().any(|&(_, existing)| existing == id) {
            return;
        }
        if pos >= self.capacity {
            return;
        }

        if self.is_full() {
            self.slots.pop();
        }
        self.slots.insert(pos, (distance_sqr, id));

        if self.is_full() {
            if let Some(&(d, _)) = self.slots.last() {
                self.worst = d;
            }
        }
    }

    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.slots.len()
    }

    /// Filled slots as `(distance_sqr, id)`
    #[inline]
    pub(crate) fn result(&self) -> &[(f64, PointId)] {
        &self.slots
    }

    pub(crate) fn into_ids(self) -> impl Iterator<Item = PointId> {
        self.slots.into_iter().map(|(_, id)| id)
    }
}
