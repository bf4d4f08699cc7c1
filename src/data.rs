mod circle;
mod directed_edge;
pub(crate) mod point;
mod triangle;
mod vector;

pub use circle::*;
pub use directed_edge::*;
pub use triangle::*;

pub use crate::transformation::Transform;
pub use point::{distance, Point};
pub use vector::Vector;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum PointLocation {
  Inside,
  OnBoundary,
  Outside,
}
