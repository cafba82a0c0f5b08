//! Error types for index operations.

use thiserror::Error;

use crate::point::PointId;

/// Errors returned by [`Axdex`](crate::Axdex) operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum AxdexError {
    /// Insertion attempted after the index was frozen by a query or by `freeze()`.
    #[error("cannot insert into a frozen index ({len} points): build fully, then query")]
    Frozen {
        /// Number of points the index was frozen with
        len: usize,
    },

    /// Point rejected because one of its coordinates is NaN or infinite.
    #[error("point {id} has a non-finite coordinate: coordinates must be finite")]
    NonFinite {
        /// Handle the point would have received
        id: PointId,
    },

    /// Query handle does not belong to the index.
    #[error("unknown point id {id}: index holds {len} points")]
    UnknownPoint {
        /// Handle passed to the query
        id: PointId,
        /// Number of points in the index
        len: usize,
    },
}

impl AxdexError {
    /// Create a `Frozen` error.
    #[must_use]
    pub fn frozen(len: usize) -> Self {
        Self::Frozen { len }
    }

    /// Create a `NonFinite` error.
    #[must_use]
    pub fn non_finite(id: PointId) -> Self {
        Self::NonFinite { id }
    }

    /// Create an `UnknownPoint` error.
    #[must_use]
    pub fn unknown_point(id: PointId, len: usize) -> Self {
        Self::UnknownPoint { id, len }
    }
}
