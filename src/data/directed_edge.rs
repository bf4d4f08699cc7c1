use num_traits::ToPrimitive;
use std::fmt;

use super::point::distance;
use super::{Point, Transform, Vector};

///////////////////////////////////////////////////////////////////////////////
// DirectedEdge

#[derive(Debug, Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash)]
// Directed edge from A to B.
pub struct DirectedEdge<T, const N: usize = 2> {
  pub src: Point<T, N>,
  pub dst: Point<T, N>,
}

impl<T, const N: usize> DirectedEdge<T, N> {
  pub fn new(src: Point<T, N>, dst: Point<T, N>) -> DirectedEdge<T, N> {
    DirectedEdge { src, dst }
  }

  pub fn reverse(self) -> DirectedEdge<T, N> {
    DirectedEdge {
      src: self.dst,
      dst: self.src,
    }
  }

  pub fn to_f64(&self) -> Option<DirectedEdge<f64, N>>
  where
    T: ToPrimitive,
  {
    Some(DirectedEdge::new(self.src.to_f64()?, self.dst.to_f64()?))
  }
}

impl<const N: usize> DirectedEdge<f64, N> {
  pub fn midpoint(&self) -> Point<f64, N> {
    let half = (&self.dst - &self.src) / 2.0;
    &self.src + &half
  }

  pub fn length(&self) -> f64 {
    distance(&self.src, &self.dst)
  }

  pub fn vector(&self) -> Vector<f64, N> {
    &self.dst - &self.src
  }
}

/// Rotate `edge` about its source point. Positive angles turn counter-clockwise.
///
/// The rotated edge keeps its source and its length.
///
/// ```rust
/// # use circumcircle::data::{rotate, DirectedEdge, Point};
/// let edge = DirectedEdge::new(Point::new([1.0, 1.0]), Point::new([3.0, 1.0]));
/// let turned = rotate(&edge, -90.0);
/// assert_eq!(turned.src, edge.src);
/// assert!((turned.dst.array[0] - 1.0).abs() < 1e-12);
/// assert!((turned.dst.array[1] + 1.0).abs() < 1e-12);
/// ```
pub fn rotate(edge: &DirectedEdge<f64>, degrees: f64) -> DirectedEdge<f64> {
  let rotated = &Transform::rotate(degrees).around(&edge.src) * edge;
  // Pin the pivot; the homogeneous round trip may drift by an ulp.
  DirectedEdge::new(edge.src, rotated.dst)
}

// (x1,y1)->(x2,y2)
impl<T: fmt::Display, const N: usize> fmt::Display for DirectedEdge<T, N> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}->{}", self.src, self.dst)
  }
}
