use array_init::array_init;
use num_traits::identities::Zero;
use num_traits::NumOps;
use std::ops::AddAssign;
use std::ops::Index;
use std::ops::Mul;
use std::ops::Neg;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[repr(transparent)]
pub struct Vector<T, const N: usize = 2>(pub [T; N]);

impl<T, const N: usize> Vector<T, N>
where
  T: Clone,
{
  pub fn squared_magnitude(&self) -> T
  where
    T: Zero + AddAssign,
    for<'a> &'a T: Mul<&'a T, Output = T>,
  {
    let mut total = T::zero();
    for elt in self.0.iter() {
      total += elt * elt;
    }
    total
  }
}

impl<const N: usize> Vector<f64, N> {
  pub fn magnitude(&self) -> f64 {
    self.squared_magnitude().sqrt()
  }
}

impl<T, const N: usize> Index<usize> for Vector<T, N> {
  type Output = T;
  fn index(&self, index: usize) -> &T {
    self.0.index(index)
  }
}

mod div;
mod mul;

impl<T, const N: usize> Neg for Vector<T, N>
where
  T: NumOps + Neg<Output = T> + Clone,
{
  type Output = Self;
  fn neg(self) -> Self {
    Vector(array_init(|i| self.0.index(i).clone().neg()))
  }
}
