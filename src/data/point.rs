use array_init::{array_init, try_array_init};
use num_traits::float::FloatCore;
use num_traits::ToPrimitive;
use ordered_float::NotNan;
use rand::distributions::{Distribution, Standard};
use rand::Rng;
use std::fmt;
use std::ops::Deref;
use std::ops::Index;

use super::Vector;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct Point<T, const N: usize = 2> {
  pub array: [T; N],
}

// Random sampling.
impl<T, const N: usize> Distribution<Point<T, N>> for Standard
where
  Standard: Distribution<T>,
{
  fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Point<T, N> {
    Point {
      array: array_init(|_| rng.gen()),
    }
  }
}

// Methods on N-dimensional points.
impl<T, const N: usize> Point<T, N> {
  pub const fn new(array: [T; N]) -> Point<T, N> {
    Point { array }
  }

  /// # Panics
  ///
  /// Panics if any of the inputs are NaN.
  pub fn new_nn(array: [T; N]) -> Point<NotNan<T>, N>
  where
    T: FloatCore,
  {
    Point::new(array_init(|i| NotNan::new(array[i]).unwrap()))
  }

  pub fn as_vec(&self) -> Vector<T, N>
  where
    T: Clone,
  {
    Vector(self.array.clone())
  }

  pub fn cast<U, F>(&self, f: F) -> Point<U, N>
  where
    T: Clone,
    F: Fn(T) -> U,
  {
    Point {
      array: array_init(|i| f(self.array[i].clone())),
    }
  }

  /// Widen every coordinate to `f64`.
  ///
  /// Returns `None` if some coordinate has no `f64` representation. Values that
  /// convert but overflow (huge big-integers, for example) come back as
  /// infinities; see [`Point::is_finite`].
  pub fn to_f64(&self) -> Option<Point<f64, N>>
  where
    T: ToPrimitive,
  {
    try_array_init(|i| self.array[i].to_f64().ok_or(()))
      .ok()
      .map(Point::new)
  }
}

impl<const N: usize> Point<f64, N> {
  pub fn squared_euclidean_distance(&self, rhs: &Point<f64, N>) -> f64 {
    self
      .array
      .iter()
      .zip(rhs.array.iter())
      .map(|(a, b)| (a - b) * (a - b))
      .sum()
  }

  pub fn euclidean_distance(&self, rhs: &Point<f64, N>) -> f64 {
    self.squared_euclidean_distance(rhs).sqrt()
  }

  pub fn is_finite(&self) -> bool {
    self.array.iter().all(|c| c.is_finite())
  }
}

/// Euclidean distance between two points.
pub fn distance<const N: usize>(p: &Point<f64, N>, q: &Point<f64, N>) -> f64 {
  p.euclidean_distance(q)
}

impl<T> Point<T, 2> {
  pub fn x_coord(&self) -> &T {
    &self.array[0]
  }
  pub fn y_coord(&self) -> &T {
    &self.array[1]
  }
}

impl<T, const N: usize> Index<usize> for Point<T, N> {
  type Output = T;
  fn index(&self, key: usize) -> &T {
    self.array.index(key)
  }
}

impl<T, const N: usize> Deref for Point<T, N> {
  type Target = [T; N];
  fn deref(&self) -> &[T; N] {
    &self.array
  }
}

impl<T> From<(T, T)> for Point<T, 2> {
  fn from(point: (T, T)) -> Point<T, 2> {
    Point {
      array: [point.0, point.1],
    }
  }
}

// (x,y)
impl<T: fmt::Display, const N: usize> fmt::Display for Point<T, N> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "(")?;
    for (i, c) in self.array.iter().enumerate() {
      if i > 0 {
        write!(f, ",")?;
      }
      write!(f, "{}", c)?;
    }
    write!(f, ")")
  }
}

mod add;
mod sub;
