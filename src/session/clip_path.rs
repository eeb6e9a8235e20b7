use crate::config::SessionConfig;
use crate::foundation::core::{BezPath, EulerRotation, Point, Rect, Scale, Vec3};
use crate::foundation::error::{ClipError, ClipResult};
use crate::path::rounded::RoundedPathBuilder;
use crate::path::svg::write_path_data;
use crate::projection::pinhole::Projector;

/// Border radius of a freshly created session.
pub const DEFAULT_BORDER_RADIUS: f64 = 5.0;

/// Base shape of every frame: bottom-right, top-right, top-left, bottom-left.
pub const UNIT_QUAD: [Vec3; 4] = [
    Vec3::new(0.5, -0.5, 0.0),
    Vec3::new(0.5, 0.5, 0.0),
    Vec3::new(-0.5, 0.5, 0.0),
    Vec3::new(-0.5, -0.5, 0.0),
];

/// Placement of one frame.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Transform {
    /// Camera-relative origin; X/Y also translate the projected shape.
    pub position: Vec3,
    pub rotation: EulerRotation,
    /// Size of the frame before rotation, in screen units.
    pub scale: Scale,
    /// Requested corner radius in screen units. Corners too small for it get less.
    pub border_radius: f64,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            rotation: EulerRotation::IDENTITY,
            scale: Scale::default(),
            border_radius: DEFAULT_BORDER_RADIUS,
        }
    }
}

impl Transform {
    /// Unit quadrilateral scaled, then rotated, in camera-relative space.
    pub fn object_vertices(&self) -> [Vec3; 4] {
        let scale = self.scale.to_vec3();
        let rotation = self.rotation.to_mat3();
        UNIT_QUAD.map(|v| rotation * (v * scale))
    }
}

/// Clip path state for one animated frame.
///
/// Mutate the transform through [`ClipPathSession::transform_mut`], then call
/// [`ClipPathSession::update`]; nothing is recomputed implicitly. The cached path starts out
/// empty and is only replaced by a successful update.
#[derive(Clone, Debug)]
pub struct ClipPathSession {
    transform: Transform,
    projector: Projector,
    builder: RoundedPathBuilder,

    projected: Vec<Point>,
    bounds: Rect,
    bez: BezPath,
    path: String,
}

impl ClipPathSession {
    /// Session with the given focal length and default settings otherwise.
    pub fn new(focal_length: f64) -> ClipResult<Self> {
        Self::with_config(SessionConfig {
            focal_length,
            ..SessionConfig::default()
        })
    }

    pub fn with_config(config: SessionConfig) -> ClipResult<Self> {
        let projector = Projector::with_min_depth(config.focal_length, config.min_depth)?;
        Ok(Self {
            transform: Transform::default(),
            projector,
            builder: RoundedPathBuilder::new(config.corner_clamp),
            projected: Vec::with_capacity(UNIT_QUAD.len()),
            bounds: Rect::ZERO,
            bez: BezPath::new(),
            path: String::new(),
        })
    }

    pub fn config(&self) -> SessionConfig {
        SessionConfig {
            focal_length: self.projector.focal_length(),
            corner_clamp: self.builder.clamp(),
            min_depth: self.projector.min_depth(),
        }
    }

    pub fn transform(&self) -> &Transform {
        &self.transform
    }

    pub fn transform_mut(&mut self) -> &mut Transform {
        &mut self.transform
    }

    /// Project the transformed unit quadrilateral and rebuild the path.
    ///
    /// On error the previously cached path, projection and bounds are kept.
    #[tracing::instrument(level = "trace", skip(self), fields(transform = ?self.transform))]
    pub fn update(&mut self) -> ClipResult<&str> {
        let vertices = self.transform.object_vertices();
        let mut projected = Vec::with_capacity(vertices.len());
        let bounds = self
            .projector
            .project_into(&vertices, self.transform.position, &mut projected)?;
        self.rebuild(projected, bounds)
    }

    /// Rebuild only the path from the last projection, e.g. when just the border radius
    /// changed. Projects first if the session has never been updated.
    pub fn update_path(&mut self) -> ClipResult<&str> {
        if self.projected.is_empty() {
            return self.update();
        }
        let (bez, path) = self.rebuild_parts(&self.projected)?;
        let bounds = self.bounds;
        Ok(self.commit(bounds, bez, path))
    }

    /// Current path data; empty until the first successful update.
    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn bez_path(&self) -> &BezPath {
        &self.bez
    }

    /// Projected corners from the last successful update, in unit-quadrilateral order.
    pub fn projected(&self) -> &[Point] {
        &self.projected
    }

    /// Screen-space bounds of the projected corners.
    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    fn rebuild(&mut self, projected: Vec<Point>, bounds: Rect) -> ClipResult<&str> {
        let (bez, path) = self.rebuild_parts(&projected)?;
        self.projected = projected;
        Ok(self.commit(bounds, bez, path))
    }

    fn rebuild_parts(&self, projected: &[Point]) -> ClipResult<(BezPath, String)> {
        let radius = self.transform.border_radius;
        if !radius.is_finite() || radius < 0.0 {
            return Err(ClipError::config(format!(
                "border radius must be finite and >= 0 (got {radius})"
            )));
        }
        let bez = self.builder.build(projected, radius / 2.0)?;
        let path = write_path_data(&bez);
        Ok((bez, path))
    }

    fn commit(&mut self, bounds: Rect, bez: BezPath, path: String) -> &str {
        tracing::debug!(
            bounds = ?bounds,
            radius = self.transform.border_radius,
            "clip path rebuilt"
        );
        self.bounds = bounds;
        self.bez = bez;
        self.path = path;
        &self.path
    }
}

#[cfg(test)]
#[path = "../../tests/unit/session/clip_path.rs"]
mod tests;
