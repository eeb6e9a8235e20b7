use glam::DMat3;

use crate::foundation::error::{ClipError, ClipResult};

pub use glam::DVec3 as Vec3;
pub use kurbo::{BezPath, Point, Rect, Vec2};

/// Euler angles in radians, applied X then Y then Z as intrinsic rotations.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(from = "[f64; 3]", into = "[f64; 3]")]
pub struct EulerRotation {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl EulerRotation {
    pub const IDENTITY: Self = Self {
        x: 0.0,
        y: 0.0,
        z: 0.0,
    };

    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    pub fn from_degrees(x: f64, y: f64, z: f64) -> Self {
        Self::new(x.to_radians(), y.to_radians(), z.to_radians())
    }

    /// Rotation matrix `Rx * Ry * Rz`; applied to a column vector this rotates about Z
    /// first in world terms, which is X-then-Y-then-Z in the object's own frame.
    pub fn to_mat3(self) -> DMat3 {
        DMat3::from_rotation_x(self.x)
            * DMat3::from_rotation_y(self.y)
            * DMat3::from_rotation_z(self.z)
    }

    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }
}

impl From<[f64; 3]> for EulerRotation {
    fn from([x, y, z]: [f64; 3]) -> Self {
        Self::new(x, y, z)
    }
}

impl From<EulerRotation> for [f64; 3] {
    fn from(r: EulerRotation) -> Self {
        [r.x, r.y, r.z]
    }
}

/// Object scale: one factor for all axes, or one per axis.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(untagged)]
pub enum Scale {
    Uniform(f64),
    PerAxis(Vec3),
}

impl Default for Scale {
    fn default() -> Self {
        Self::Uniform(1.0)
    }
}

impl Scale {
    pub fn to_vec3(self) -> Vec3 {
        match self {
            Self::Uniform(s) => Vec3::splat(s),
            Self::PerAxis(v) => v,
        }
    }
}

impl From<f64> for Scale {
    fn from(s: f64) -> Self {
        Self::Uniform(s)
    }
}

impl From<Vec3> for Scale {
    fn from(v: Vec3) -> Self {
        Self::PerAxis(v)
    }
}

impl From<[f64; 3]> for Scale {
    fn from(v: [f64; 3]) -> Self {
        Self::PerAxis(Vec3::from_array(v))
    }
}

/// Pixel dimensions of the surface a clip path is drawn against.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            width: 800,
            height: 600,
        }
    }
}

impl Viewport {
    pub fn new(width: u32, height: u32) -> ClipResult<Self> {
        if width == 0 || height == 0 {
            return Err(ClipError::config("Viewport width and height must be > 0"));
        }
        Ok(Self { width, height })
    }

    pub fn center(self) -> Point {
        Point::new(f64::from(self.width) / 2.0, f64::from(self.height) / 2.0)
    }

    pub fn to_rect(self) -> Rect {
        Rect::new(0.0, 0.0, f64::from(self.width), f64::from(self.height))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
