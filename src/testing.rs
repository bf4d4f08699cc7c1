// This module contains strategies for:
//  * points
//  * edges
//  * well-shaped triangles
use crate::data::{DirectedEdge, Point, Triangle};

use proptest::prelude::*;

const RANGE: i32 = 1_000;

///////////////////////////////////////////////////////////////////////////////
// Points

pub fn any_i32() -> impl Strategy<Value = Point<i32>> {
  (-RANGE..=RANGE, -RANGE..=RANGE).prop_map(|(x, y)| Point::new([x, y]))
}

pub fn any_f64() -> impl Strategy<Value = Point<f64>> {
  let range = -f64::from(RANGE)..f64::from(RANGE);
  (range.clone(), range).prop_map(|(x, y)| Point::new([x, y]))
}

///////////////////////////////////////////////////////////////////////////////
// Edges

pub fn any_edge_f64() -> impl Strategy<Value = DirectedEdge<f64>> {
  (any_f64(), any_f64()).prop_map(|(src, dst)| DirectedEdge::new(src, dst))
}

///////////////////////////////////////////////////////////////////////////////
// Triangles

// Twice the area is at least a tenth of the longest squared edge. Keeps Heron's
// formula and the bisector construction well inside the default tolerances.
fn well_shaped(pts: &[Point<i32>; 3]) -> bool {
  let [a, b, c] = pts.each_ref().map(|p| p.cast(i64::from));
  let cross = (b[0] - a[0]) * (c[1] - a[1]) - (b[1] - a[1]) * (c[0] - a[0]);
  let longest = [(&a, &b), (&b, &c), (&c, &a)]
    .iter()
    .map(|(p, q)| (p[0] - q[0]).pow(2) + (p[1] - q[1]).pow(2))
    .max()
    .unwrap_or(0);
  longest > 0 && 10 * cross.abs() >= longest
}

pub fn any_triangle_i32() -> impl Strategy<Value = Triangle<i32>> {
  [any_i32(), any_i32(), any_i32()]
    .prop_filter("degenerate or sliver triangle", well_shaped)
    .prop_map(Triangle::from)
}

pub fn any_triangle_f64() -> impl Strategy<Value = Triangle<f64>> {
  [any_i32(), any_i32(), any_i32()]
    .prop_filter("degenerate or sliver triangle", well_shaped)
    .prop_map(|pts| Triangle::from(pts.map(|p| p.cast(f64::from))))
}
