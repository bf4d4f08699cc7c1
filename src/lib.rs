#![deny(clippy::cast_lossless)]
#![doc(test(no_crate_inject))]
//! Triangles that lazily derive their circumscribed circle.
//!
//! The point-in-circumcircle test is the decision primitive of incremental
//! (Bowyer–Watson style) Delaunay construction: every triangle whose
//! circumcircle contains a newly inserted point is marked bad and later
//! replaced.
//!
//! ```rust
//! # use circumcircle::data::{Point, Triangle};
//! let tri = Triangle::new(
//!   Point::new([0.0, 0.0]),
//!   Point::new([2.0, 0.0]),
//!   Point::new([1.0, 1.0]),
//! );
//! assert_eq!(tri.circumcircle_contains(&Point::new([1.0, 1.0])), Ok(true));
//! assert_eq!(tri.circumcircle_contains(&Point::new([1.0, -1.5])), Ok(false));
//! ```
use num_traits::ToPrimitive;
use std::fmt::{Debug, Display};

pub mod data;
mod matrix;
mod transformation;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
  /// The vertices are colinear, coincide, or span a vanishing area.
  DegenerateTriangle,
  /// A coordinate is NaN, infinite, or cannot be represented as `f64`.
  NonFiniteCoordinate,
}

impl std::fmt::Display for Error {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> Result<(), std::fmt::Error> {
    match self {
      Error::DegenerateTriangle => write!(
        f,
        "Degenerate triangle: vertices are colinear or coincide and no circumcircle exists"
      ),
      Error::NonFiniteCoordinate => write!(f, "Non-finite coordinate"),
    }
  }
}

impl std::error::Error for Error {}

/// Coordinate types a [`Triangle`](data::Triangle) can be built from.
///
/// Circumcircles are always derived in `f64`, so the only arithmetic requirement
/// on the coordinate type is a conversion through [`ToPrimitive`].
pub trait CircleScalar: Debug + Display + Clone + PartialEq + ToPrimitive {}

impl<T> CircleScalar for T where T: Debug + Display + Clone + PartialEq + ToPrimitive {}

#[cfg(test)]
pub mod testing;
