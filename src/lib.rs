//! # Axdex - Single-Axis Spatial Index
//!
//! A Rust library answering bounded k-nearest-neighbor queries over a fixed set
//! of 2D points: "return up to `n` points nearest to this point, no farther than
//! `max_distance` along the index axis."
//!
//! ## Features
//!
//! - **Exact Results**: Neighbors are ranked by true 2D squared distance
//! - **Single Sorted Axis**: Points are projected onto X or Y and sorted once
//! - **Admissible Pruning**: The 1D offset bounds the 2D distance, so the search stops early
//! - **Static Optimization**: Built once, then queried many times, from many threads
//!
//! ## Quick Start
//!
//! ```rust
//! use axdex::prelude::*;
//!
//! // Create an index projecting onto the X axis
//! let mut index = Axdex::with_capacity_and_axis(4, Axis::X);
//!
//! // Insert points; each insert returns the point id
//! let a = index.insert(Point2D::new(0.0, 0.0));
//! let b = index.insert(Point2D::new(1.0, 0.0));
//! let c = index.insert(Point2D::new(2.0, 0.0));
//! let _d = index.insert(Point2D::new(0.0, 5.0));
//!
//! // The first query freezes the index
//! let mut results = Vec::new();
//! index.query_nearest_n(a, Some(3), 10.0, &mut results).unwrap();
//! assert_eq!(results, vec![a, b, c]);
//!
//! // `None` asks for every point within range
//! let all = index.nearest_n(a, None, f64::INFINITY).unwrap();
//! assert_eq!(all.len(), 4);
//! ```
//!
//! ## How It Works
//!
//! Every point is stored with its coordinate along the chosen axis. On the first
//! query those values are sorted and each point id is mapped to its position in the
//! sorted list. A query starts at the query point's position and expands a left and
//! a right cursor outward, always taking the closer viable candidate. Because the
//! squared offset along one axis never exceeds the squared 2D distance, a direction
//! is abandoned as soon as its offset reaches the worst distance kept so far.
//!
//! Pruning works best when the chosen axis separates the points well; see
//! [`Axis::from_spread`]. A poor axis only costs time, never correctness.

pub mod axdex;
pub mod axis;
pub mod error;
pub mod index;
pub mod point;
pub mod prelude;
mod queries;
mod results;

pub use axdex::Axdex;
pub use axis::Axis;
pub use error::AxdexError;
pub use index::SpatialIndex;
pub use point::{Point, Point2D, PointId};

mod proptests;
