use array_init::try_array_init;
use claims::assert_lt;
use geometry_predicates::predicates::orient2d;
use std::cell::OnceCell;
use std::fmt;

use super::point::distance;
use super::{rotate, Circle, DirectedEdge, Point, PointLocation};
use crate::{CircleScalar, Error};

/// Tolerances used when deriving and querying a circumcircle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CircumcircleOptions {
  /// Relative (to the radius) slack allowed between the three
  /// vertex-to-center distances.
  pub equidistance_epsilon: f64,
  /// Relative (to the radius) half-width of the band around the perimeter that
  /// the containment queries treat as on the circle. Zero gives the exact `<=`
  /// test of [`Circle::contains`].
  pub boundary_epsilon: f64,
  /// A triangle whose area is at most `degenerate_area_epsilon * longest²` is
  /// rejected as degenerate.
  pub degenerate_area_epsilon: f64,
}

impl Default for CircumcircleOptions {
  fn default() -> Self {
    CircumcircleOptions {
      equidistance_epsilon: 1e-6,
      boundary_epsilon: 1e-6,
      degenerate_area_epsilon: 1e-12,
    }
  }
}

impl CircumcircleOptions {
  pub fn with_equidistance_epsilon(mut self, epsilon: f64) -> Self {
    self.equidistance_epsilon = epsilon;
    self
  }

  pub fn with_boundary_epsilon(mut self, epsilon: f64) -> Self {
    self.boundary_epsilon = epsilon;
    self
  }

  pub fn with_degenerate_area_epsilon(mut self, epsilon: f64) -> Self {
    self.degenerate_area_epsilon = epsilon;
    self
  }
}

/// Three points, the edges connecting them in cyclic order, and a lazily
/// derived circumcircle.
///
/// Points and edges never change after construction, so the circumcircle is
/// computed at most once and then reused, including a failed outcome. The
/// cache makes `Triangle` `!Sync`.
///
/// The `bad` flag has no meaning to the triangle itself. Triangulation drivers
/// use it to mark triangles whose circumcircle contains a freshly inserted
/// point.
#[derive(Debug, Clone)]
pub struct Triangle<T> {
  points: [Point<T>; 3],
  edges: [DirectedEdge<T>; 3],
  circumcircle: OnceCell<Result<Circle, Error>>,
  bad: bool,
  options: CircumcircleOptions,
}

impl<T> Triangle<T>
where
  T: CircleScalar,
{
  /// Never fails. Colinear or repeated points are only reported once the
  /// circumcircle is requested.
  pub fn new(p1: Point<T>, p2: Point<T>, p3: Point<T>) -> Triangle<T> {
    Triangle::with_options(p1, p2, p3, CircumcircleOptions::default())
  }

  pub fn with_options(
    p1: Point<T>,
    p2: Point<T>,
    p3: Point<T>,
    options: CircumcircleOptions,
  ) -> Triangle<T> {
    let edges = [
      DirectedEdge::new(p1.clone(), p2.clone()),
      DirectedEdge::new(p2.clone(), p3.clone()),
      DirectedEdge::new(p3.clone(), p1.clone()),
    ];
    Triangle {
      points: [p1, p2, p3],
      edges,
      circumcircle: OnceCell::new(),
      bad: false,
      options,
    }
  }

  pub fn options(&self) -> CircumcircleOptions {
    self.options
  }

  pub fn points(&self) -> [Point<T>; 3] {
    self.points.clone()
  }

  /// (P1→P2), (P2→P3), (P3→P1).
  pub fn edges(&self) -> [DirectedEdge<T>; 3] {
    self.edges.clone()
  }

  /// # Panics
  ///
  /// Panics if `index >= 3`.
  pub fn point_at(&self, index: usize) -> Point<T> {
    assert_lt!(index, 3);
    self.points[index].clone()
  }

  /// # Panics
  ///
  /// Panics if `index >= 3`.
  pub fn edge_at(&self, index: usize) -> DirectedEdge<T> {
    assert_lt!(index, 3);
    self.edges[index].clone()
  }

  /// The circle through all three vertices.
  ///
  /// Derived on first use and cached for the lifetime of the triangle.
  ///
  /// # Errors
  ///
  /// [`Error::DegenerateTriangle`] if the vertices are colinear, coincide, or
  /// enclose a vanishing area. [`Error::NonFiniteCoordinate`] if a vertex
  /// cannot be represented by finite `f64` coordinates.
  ///
  /// ```rust
  /// # use circumcircle::data::{Point, Triangle};
  /// let tri = Triangle::new(Point::new([0, 0]), Point::new([4, 0]), Point::new([0, 4]));
  /// let circle = tri.circumcircle().unwrap();
  /// assert!((circle.center.array[0] - 2.0).abs() < 1e-9);
  /// assert!((circle.center.array[1] - 2.0).abs() < 1e-9);
  /// assert!((circle.radius - 8.0_f64.sqrt()).abs() < 1e-9);
  /// ```
  pub fn circumcircle(&self) -> Result<Circle, Error> {
    *self
      .circumcircle
      .get_or_init(|| derive_circumcircle(&self.points, &self.edges, &self.options))
  }

  /// The cached circumcircle, if it has been derived. Never triggers the
  /// derivation.
  pub fn cached_circumcircle(&self) -> Option<Result<Circle, Error>> {
    self.circumcircle.get().copied()
  }

  /// True if `pt` lies inside or on the circumcircle. Points within
  /// `boundary_epsilon * radius` of the perimeter count as on it.
  pub fn circumcircle_contains(&self, pt: &Point<T>) -> Result<bool, Error> {
    Ok(self.locate_in_circumcircle(pt)? != PointLocation::Outside)
  }

  pub fn locate_in_circumcircle(&self, pt: &Point<T>) -> Result<PointLocation, Error> {
    let circle = self.circumcircle()?;
    let pt = pt.to_f64().ok_or(Error::NonFiniteCoordinate)?;
    Ok(circle.locate(&pt, self.options.boundary_epsilon * circle.radius))
  }

  pub fn is_bad(&self) -> bool {
    self.bad
  }

  pub fn set_bad(&mut self, bad: bool) {
    self.bad = bad
  }
}

impl<T: CircleScalar> From<[Point<T>; 3]> for Triangle<T> {
  fn from([p1, p2, p3]: [Point<T>; 3]) -> Triangle<T> {
    Triangle::new(p1, p2, p3)
  }
}

// Vertex sets are compared, not vertex order.
impl<T: PartialEq> PartialEq for Triangle<T> {
  fn eq(&self, other: &Triangle<T>) -> bool {
    self.points.iter().all(|p| other.points.contains(p))
      && other.points.iter().all(|p| self.points.contains(p))
  }
}

// [ (x1,y1) (x2,y2) (x3,y3) ]
impl<T: fmt::Display> fmt::Display for Triangle<T> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "[ ")?;
    for pt in self.points.iter() {
      write!(f, "{} ", pt)?;
    }
    write!(f, "]")
  }
}

// Largest minus smallest distance from `center` to the vertices.
fn spread(points: &[Point<f64>; 3], center: &Point<f64>) -> f64 {
  let [a, b, c] = points.each_ref().map(|p| distance(p, center));
  a.max(b).max(c) - a.min(b).min(c)
}

fn derive_circumcircle<T: CircleScalar>(
  points: &[Point<T>; 3],
  edges: &[DirectedEdge<T>; 3],
  options: &CircumcircleOptions,
) -> Result<Circle, Error> {
  let pts: [Point<f64>; 3] =
    try_array_init(|i| points[i].to_f64().ok_or(Error::NonFiniteCoordinate))?;
  let [ab, bc, ca]: [DirectedEdge<f64>; 3] =
    try_array_init(|i| edges[i].to_f64().ok_or(Error::NonFiniteCoordinate))?;
  if !pts.iter().all(Point::is_finite) {
    return Err(Error::NonFiniteCoordinate);
  }
  let [p1, p2, p3] = &pts;

  if orient2d(p1.array, p2.array, p3.array) == 0.0 {
    tracing::warn!(p1 = %p1, p2 = %p2, p3 = %p3, "colinear vertices, no circumcircle");
    return Err(Error::DegenerateTriangle);
  }

  let a = ab.length();
  let b = bc.length();
  let c = ca.length();

  // Heron
  let s = (a + b + c) / 2.0;
  let area = (s * (s - a) * (s - b) * (s - c)).sqrt();
  let longest = a.max(b).max(c);
  // Negated so that a NaN area is rejected as well.
  if !(area > options.degenerate_area_epsilon * longest * longest) {
    tracing::warn!(area, longest, "vanishing triangle area, no circumcircle");
    return Err(Error::DegenerateTriangle);
  }

  let radius = (a * b * c) / (4.0 * area);

  // The center lies on the perpendicular bisector of AB, |OM| away from the
  // midpoint M.
  let mid = ab.midpoint();
  let d = distance(p1, &mid);
  let length_om = (d * d - radius * radius).abs().sqrt();

  let bisector = rotate(&ab, -90.0);
  let mo = bisector.vector() * (length_om / bisector.length());

  let plus = &mid + &mo;
  let minus = &mid - &mo;
  let tolerance = options.equidistance_epsilon * radius;
  let plus_spread = spread(&pts, &plus);
  let center = if plus_spread <= tolerance {
    plus
  } else {
    let minus_spread = spread(&pts, &minus);
    tracing::trace!(plus_spread, minus_spread, "picking the tighter circumcenter");
    if minus_spread <= plus_spread {
      minus
    } else {
      plus
    }
  };

  let circle = Circle::new(center, radius);
  tracing::debug!(circle = %circle, "derived circumcircle");
  Ok(circle)
}
