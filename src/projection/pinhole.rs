use crate::foundation::core::{Point, Rect, Vec3};
use crate::foundation::error::{ClipError, ClipResult};

/// Focal length used when none is configured.
pub const DEFAULT_FOCAL_LENGTH: f64 = 800.0;

/// Depth scale substituted for vertices at or behind the camera plane.
pub const DEFAULT_MIN_DEPTH: f64 = 1e-6;

/// Pinhole camera with a fixed focal length.
///
/// Projection is a per-vertex perspective divide: `depth = f / (f + z)`, then
/// `origin + (x, y) * depth`. There is no view matrix and no clipping; a vertex that reaches
/// the camera plane (`f + z <= 0`) gets `min_depth` instead of an infinite or negative scale.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Projector {
    focal_length: f64,
    min_depth: f64,
}

impl Default for Projector {
    fn default() -> Self {
        Self {
            focal_length: DEFAULT_FOCAL_LENGTH,
            min_depth: DEFAULT_MIN_DEPTH,
        }
    }
}

impl Projector {
    pub fn new(focal_length: f64) -> ClipResult<Self> {
        Self::with_min_depth(focal_length, DEFAULT_MIN_DEPTH)
    }

    pub fn with_min_depth(focal_length: f64, min_depth: f64) -> ClipResult<Self> {
        if !focal_length.is_finite() || focal_length <= 0.0 {
            return Err(ClipError::config(format!(
                "focal length must be finite and > 0 (got {focal_length})"
            )));
        }
        if !min_depth.is_finite() || min_depth <= 0.0 {
            return Err(ClipError::config(format!(
                "min depth must be finite and > 0 (got {min_depth})"
            )));
        }
        Ok(Self {
            focal_length,
            min_depth,
        })
    }

    pub fn focal_length(&self) -> f64 {
        self.focal_length
    }

    pub fn min_depth(&self) -> f64 {
        self.min_depth
    }

    /// Scale factor for a point at camera-relative depth `z`.
    pub fn depth(&self, z: f64) -> f64 {
        self.clamped_depth(z).0
    }

    fn clamped_depth(&self, z: f64) -> (f64, bool) {
        let raw = self.focal_length / (self.focal_length + z);
        if raw.is_finite() && raw > 0.0 {
            (raw, false)
        } else {
            (self.min_depth, true)
        }
    }

    /// Project `vertices` into `out` (cleared first) and return the bounds of the result.
    ///
    /// `origin.z` is added to each vertex depth; `origin.x`/`origin.y` translate the
    /// projected point. An empty input yields `Rect::ZERO`.
    pub fn project_into(
        &self,
        vertices: &[Vec3],
        origin: Vec3,
        out: &mut Vec<Point>,
    ) -> ClipResult<Rect> {
        if !origin.is_finite() {
            return Err(ClipError::geometry(format!(
                "projection origin is not finite: {origin}"
            )));
        }

        out.clear();
        out.reserve(vertices.len());
        let mut bounds: Option<Rect> = None;
        for (i, v) in vertices.iter().enumerate() {
            if !v.is_finite() {
                return Err(ClipError::geometry(format!("vertex {i} is not finite: {v}")));
            }
            let z = v.z + origin.z;
            let (depth, clamped) = self.clamped_depth(z);
            if clamped {
                tracing::warn!(
                    vertex = i,
                    z,
                    focal_length = self.focal_length,
                    "vertex at or behind the camera plane; depth clamped"
                );
            }
            let p = Point::new(origin.x + v.x * depth, origin.y + v.y * depth);
            bounds = Some(match bounds {
                Some(r) => r.union_pt(p),
                None => Rect::from_points(p, p),
            });
            out.push(p);
        }
        Ok(bounds.unwrap_or(Rect::ZERO))
    }
}

/// Project `vertices` through a pinhole camera at `origin` with `focal_length`.
pub fn project(vertices: &[Vec3], origin: Vec3, focal_length: f64) -> ClipResult<Vec<Point>> {
    let projector = Projector::new(focal_length)?;
    let mut out = Vec::with_capacity(vertices.len());
    projector.project_into(vertices, origin, &mut out)?;
    Ok(out)
}

#[cfg(test)]
#[path = "../../tests/unit/projection/pinhole.rs"]
mod tests;
