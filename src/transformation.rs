use array_init::array_init;
use num_traits::identities::One;
use num_traits::identities::Zero;
use num_traits::NumOps;
use std::ops::Div;
use std::ops::Mul;
use std::ops::Neg;

use crate::data::DirectedEdge;
use crate::data::Point;
use crate::data::Vector;
use crate::matrix::{Matrix, MatrixMul};

pub trait TransformScalar: One + Zero + Div<Output = Self> + MatrixMul {}
impl<T> TransformScalar for T where T: One + Zero + Div<Output = Self> + MatrixMul {}

/// Affine transformation in homogeneous coordinates.
#[derive(Clone, Debug)]
pub struct Transform<T, const N: usize>(Matrix<T>);

impl<T, const N: usize> Transform<T, N>
where
  T: TransformScalar,
{
  fn new(m: Matrix<T>) -> Transform<T, N> {
    assert_eq!(m.ncols(), N + 1);
    assert_eq!(m.nrows(), N + 1);
    Transform(m)
  }

  pub fn identity() -> Transform<T, N> {
    Transform::uniform_scale(T::one())
  }

  pub fn translate(vec: Vector<T, N>) -> Transform<T, N> {
    let mut m = Matrix::new(N + 1, N + 1);
    for i in 0..N {
      m[(i, i)] = T::one();
      m[(i, N)] = vec[i].clone();
    }
    m[(N, N)] = T::one();
    Transform::new(m)
  }

  pub fn uniform_scale(v: T) -> Transform<T, N> {
    let mut m = Matrix::new(N + 1, N + 1);
    for i in 0..N {
      m[(i, i)] = v.clone();
    }
    m[(N, N)] = T::one();
    Transform::new(m)
  }

  /// Conjugate `self` so that it acts around `origin` instead of around zero.
  pub fn around(self, origin: &Point<T, N>) -> Transform<T, N>
  where
    T: NumOps + Neg<Output = T>,
  {
    let to = Transform::translate(origin.as_vec());
    let back = Transform::translate(-origin.as_vec());
    to * self * back
  }
}

impl Transform<f64, 2> {
  /// Counter-clockwise rotation about the origin. Negative angles turn clockwise.
  pub fn rotate(degrees: f64) -> Transform<f64, 2> {
    let (sin, cos) = degrees.to_radians().sin_cos();
    let mut m = Matrix::new(3, 3);
    m[(0, 0)] = cos;
    m[(0, 1)] = -sin;
    m[(1, 0)] = sin;
    m[(1, 1)] = cos;
    m[(2, 2)] = 1.0;
    Transform::new(m)
  }
}

impl<T, const N: usize> Mul for Transform<T, N>
where
  T: TransformScalar,
{
  type Output = Transform<T, N>;
  fn mul(self, other: Transform<T, N>) -> Transform<T, N> {
    Transform::new(self.0 * other.0)
  }
}

impl<T, const N: usize> Mul<&Point<T, N>> for &Transform<T, N>
where
  T: TransformScalar,
{
  type Output = Point<T, N>;
  fn mul(self, other: &Point<T, N>) -> Point<T, N> {
    let mut v = Matrix::new(N + 1, 1);
    for i in 0..N {
      v[(i, 0)] = other.array[i].clone()
    }
    v[(N, 0)] = T::one();
    let ret = &self.0 * v;
    let normalizer = ret[(N, 0)].clone();
    Point::new(array_init(|i| ret[(i, 0)].clone() / normalizer.clone()))
  }
}

impl<T, const N: usize> Mul<&DirectedEdge<T, N>> for &Transform<T, N>
where
  T: TransformScalar,
{
  type Output = DirectedEdge<T, N>;
  fn mul(self, other: &DirectedEdge<T, N>) -> DirectedEdge<T, N> {
    DirectedEdge::new(self * &other.src, self * &other.dst)
  }
}
