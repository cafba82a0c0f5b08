//! Prelude module for convenient imports
//!
//! This module re-exports the most commonly used types from the crate.
//! Users can import everything they need with:
//!
//! ```
//! use axdex::prelude::*;
//! ```

pub use crate::{Axdex, AxdexError, Axis, Point, Point2D, PointId, SpatialIndex};
