use std::fmt;

use super::point::distance;
use super::{Point, PointLocation};

/// A circle in the plane, always in `f64`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle {
  pub center: Point<f64>,
  pub radius: f64,
}

impl Circle {
  pub fn new(center: Point<f64>, radius: f64) -> Circle {
    Circle { center, radius }
  }

  // Boundary counts as inside.
  pub fn contains(&self, pt: &Point<f64>) -> bool {
    distance(pt, &self.center) <= self.radius
  }

  /// Classify `pt` against the circle, treating everything within `epsilon` of
  /// the perimeter as on the boundary.
  pub fn locate(&self, pt: &Point<f64>, epsilon: f64) -> PointLocation {
    let delta = distance(pt, &self.center) - self.radius;
    if delta.abs() <= epsilon {
      PointLocation::OnBoundary
    } else if delta < 0.0 {
      PointLocation::Inside
    } else {
      PointLocation::Outside
    }
  }
}

impl fmt::Display for Circle {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "center={} radius={}", self.center, self.radius)
  }
}
