use crate::foundation::core::{BezPath, Point};
use crate::foundation::error::{ClipError, ClipResult};
use crate::foundation::math::{distance, is_finite_point, length, midpoint, turn_angle};
use crate::path::svg::write_path_data;

/// How a corner radius that had to shrink at one vertex affects the vertices after it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CornerClamp {
    /// Every vertex starts from the requested radius.
    #[default]
    Independent,
    /// A radius reduced at one vertex becomes the requested radius for the remaining
    /// vertices of the same pass.
    Carried,
}

/// One rounded corner: straight edge ends at `entry`, curves through `corner` to `exit`.
#[derive(Clone, Copy, Debug, PartialEq)]
struct Fillet {
    entry: Point,
    corner: Point,
    exit: Point,
    radius: f64,
}

/// Traces a closed polygon with each vertex replaced by a quadratic fillet.
///
/// Fillet control points sit on the adjacent edges at `radius / (edge / 2)` of the edge
/// vector from the vertex, i.e. `2 * radius` away. The radius is reduced per vertex so a
/// fillet never reaches past the midpoint of either adjacent edge.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RoundedPathBuilder {
    clamp: CornerClamp,
}

impl RoundedPathBuilder {
    pub fn new(clamp: CornerClamp) -> Self {
        Self { clamp }
    }

    pub fn clamp(&self) -> CornerClamp {
        self.clamp
    }

    /// Build the rounded outline of `points` as a [`BezPath`].
    ///
    /// The path is one `MoveTo`, then a `LineTo` + `QuadTo` per vertex, then `ClosePath`.
    pub fn build(&self, points: &[Point], radius: f64) -> ClipResult<BezPath> {
        validate_polygon(points)?;
        if !radius.is_finite() || radius < 0.0 {
            return Err(ClipError::config(format!(
                "corner radius must be finite and >= 0 (got {radius})"
            )));
        }

        let n = points.len();
        let mut nominal = radius;
        let mut path = BezPath::new();
        for i in 0..n {
            let prev = points[(i + n - 1) % n];
            let next = points[(i + 1) % n];
            let f = fillet(prev, points[i], next, nominal);
            if !is_finite_point(f.entry) || !is_finite_point(f.exit) {
                return Err(ClipError::geometry(format!(
                    "fillet at vertex {i} is not finite (edges too short for float precision)"
                )));
            }
            if f.radius < nominal {
                tracing::trace!(
                    vertex = i,
                    requested = nominal,
                    used = f.radius,
                    "corner radius clamped"
                );
            }
            if self.clamp == CornerClamp::Carried {
                nominal = f.radius;
            }

            if i == 0 {
                path.move_to(f.entry);
            }
            path.line_to(f.entry);
            path.quad_to(f.corner, f.exit);
        }
        path.close_path();
        Ok(path)
    }

    /// Build the rounded outline of `points` as path data text.
    pub fn build_string(&self, points: &[Point], radius: f64) -> ClipResult<String> {
        self.build(points, radius).map(|p| write_path_data(&p))
    }
}

/// Rounded path data through `points`, clamping each corner independently.
pub fn build_rounded_path(points: &[Point], radius: f64) -> ClipResult<String> {
    RoundedPathBuilder::default().build_string(points, radius)
}

fn validate_polygon(points: &[Point]) -> ClipResult<()> {
    if points.len() < 3 {
        return Err(ClipError::geometry(format!(
            "rounded path needs at least 3 points (got {})",
            points.len()
        )));
    }
    for (i, p) in points.iter().enumerate() {
        if !is_finite_point(*p) {
            return Err(ClipError::geometry(format!(
                "point {i} is not finite: ({}, {})",
                p.x, p.y
            )));
        }
    }
    for i in 0..points.len() {
        let j = (i + 1) % points.len();
        if distance(points[i], points[j]) == 0.0 {
            return Err(ClipError::geometry(format!(
                "zero-length edge between points {i} and {j} at ({}, {})",
                points[i].x, points[i].y
            )));
        }
    }
    Ok(())
}

fn fillet(prev: Point, curr: Point, next: Point, radius: f64) -> Fillet {
    let to_prev = prev - curr;
    let to_next = next - curr;
    let shortest = length(to_prev).min(length(to_next));

    let half = turn_angle(to_prev, to_next) / 2.0;
    let mut radius = radius;
    if radius / half.sin() * half.cos() > shortest / 2.0 {
        radius = radius.min(shortest / (2.0 * half.cos()));
    }
    // Control points land at twice the radius; keep them on the near half of each edge.
    if 2.0 * radius > shortest / 2.0 {
        radius = shortest / 4.0;
    }

    let scale_prev = radius / distance(curr, midpoint(prev, curr));
    let scale_next = radius / distance(next, midpoint(curr, next));
    Fillet {
        entry: curr + to_prev * scale_prev,
        corner: curr,
        exit: curr + to_next * scale_next,
        radius,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/path/rounded.rs"]
mod tests;
