use std::f64::consts::PI;

use crate::foundation::core::{Point, Vec2};

// Plain sum-of-squares rather than `hypot` so fillet coordinates match browser output bit
// for bit.
#[inline]
pub(crate) fn length(v: Vec2) -> f64 {
    (v.x * v.x + v.y * v.y).sqrt()
}

#[inline]
pub(crate) fn distance(a: Point, b: Point) -> f64 {
    length(a - b)
}

#[inline]
pub(crate) fn midpoint(a: Point, b: Point) -> Point {
    Point::new((a.x + b.x) / 2.0, (a.y + b.y) / 2.0)
}

/// Corner angle at a vertex, given the edge vectors pointing from it to its neighbours.
///
/// Returns `π - |θ|` where `θ` is the signed angle between the two vectors, so a straight
/// run yields `0` and a square corner `π/2`.
#[inline]
pub(crate) fn turn_angle(to_prev: Vec2, to_next: Vec2) -> f64 {
    let cross = to_prev.x * to_next.y - to_prev.y * to_next.x;
    let dot = to_prev.x * to_next.x + to_prev.y * to_next.y;
    PI - cross.atan2(dot).abs()
}

#[inline]
pub(crate) fn is_finite_point(p: Point) -> bool {
    p.x.is_finite() && p.y.is_finite()
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/math.rs"]
mod tests;
