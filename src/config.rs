//! Session settings and the JSON scene format read by the CLI.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use crate::foundation::core::Viewport;
use crate::foundation::error::{ClipError, ClipResult};
use crate::path::rounded::CornerClamp;
use crate::projection::pinhole::{DEFAULT_FOCAL_LENGTH, DEFAULT_MIN_DEPTH};
use crate::session::clip_path::{ClipPathSession, Transform};

/// Fixed settings of a [`ClipPathSession`].
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SessionConfig {
    /// Pinhole focal length in screen units. Must be > 0.
    pub focal_length: f64,
    pub corner_clamp: CornerClamp,
    /// Depth scale used for vertices at or behind the camera plane. Must be > 0.
    pub min_depth: f64,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            focal_length: DEFAULT_FOCAL_LENGTH,
            corner_clamp: CornerClamp::Independent,
            min_depth: DEFAULT_MIN_DEPTH,
        }
    }
}

/// One frame's session settings, transform and target viewport.
///
/// Every field is optional in JSON and falls back to its default.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Scene {
    pub session: SessionConfig,
    pub transform: Transform,
    pub viewport: Viewport,
}

impl Scene {
    /// Read and validate a scene from a JSON file.
    pub fn from_path(path: impl AsRef<Path>) -> ClipResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            ClipError::config(format!("open scene JSON '{}': {e}", path.display()))
        })?;
        Self::from_reader(BufReader::new(f))
    }

    /// Read and validate a scene from JSON.
    pub fn from_reader(r: impl Read) -> ClipResult<Self> {
        let scene: Self = serde_json::from_reader(r)
            .map_err(|e| ClipError::serde(format!("parse scene JSON: {e}")))?;
        scene.validate()?;
        Ok(scene)
    }

    pub fn from_json_str(s: &str) -> ClipResult<Self> {
        Self::from_reader(s.as_bytes())
    }

    pub fn to_json_pretty(&self) -> ClipResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| ClipError::serde(format!("serialize scene JSON: {e}")))
    }

    pub fn validate(&self) -> ClipResult<()> {
        let SessionConfig {
            focal_length,
            min_depth,
            ..
        } = self.session;
        if !focal_length.is_finite() || focal_length <= 0.0 {
            return Err(ClipError::config(format!(
                "session.focal_length must be finite and > 0 (got {focal_length})"
            )));
        }
        if !min_depth.is_finite() || min_depth <= 0.0 {
            return Err(ClipError::config(format!(
                "session.min_depth must be finite and > 0 (got {min_depth})"
            )));
        }
        let radius = self.transform.border_radius;
        if !radius.is_finite() || radius < 0.0 {
            return Err(ClipError::config(format!(
                "transform.border_radius must be finite and >= 0 (got {radius})"
            )));
        }
        Viewport::new(self.viewport.width, self.viewport.height)?;
        Ok(())
    }

    /// A session configured from this scene with its transform applied (not yet updated).
    pub fn session(&self) -> ClipResult<ClipPathSession> {
        let mut session = ClipPathSession::with_config(self.session)?;
        *session.transform_mut() = self.transform;
        Ok(session)
    }
}

#[cfg(test)]
#[path = "../tests/unit/config.rs"]
mod tests;
