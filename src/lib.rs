//! clipframe turns a transformed picture frame into clip-path data.
//!
//! A frame is the unit square scaled, rotated (Euler XYZ) and placed in front of a pinhole
//! camera. Each update runs three stages:
//!
//! 1. **Transform**: unit quadrilateral → scaled, rotated vertices ([`Transform`])
//! 2. **Project**: vertices → screen points via `f / (f + z)` ([`Projector`])
//! 3. **Outline**: screen points → rounded-corner path data ([`RoundedPathBuilder`])
//!
//! [`ClipPathSession`] owns one frame's transform and caches the resulting string, which can be
//! used as an SVG `d` attribute or a CSS `clip-path: path(...)` value.
//!
//! The computation is pure and deterministic. Degenerate geometry (coincident corners,
//! non-finite values) and invalid configuration are reported as [`ClipError`] instead of
//! leaking `NaN` into the output.
#![forbid(unsafe_code)]

mod foundation;
mod path;
mod projection;
mod session;

/// Session settings and the scene file format.
pub mod config;
/// Rasterized previews of clip paths.
pub mod preview;

pub use crate::config::{Scene, SessionConfig};
pub use crate::foundation::core::{
    BezPath, EulerRotation, Point, Rect, Scale, Vec2, Vec3, Viewport,
};
pub use crate::foundation::error::{ClipError, ClipResult};
pub use crate::path::presets::{
    MIN_PREVIEW_LENGTH, full_frame_path, preview_frame_path, preview_length,
};
pub use crate::path::rounded::{CornerClamp, RoundedPathBuilder, build_rounded_path};
pub use crate::path::svg::write_path_data;
pub use crate::path::tilt::tilt_path;
pub use crate::preview::{PreviewMask, rasterize_mask, svg_document};
pub use crate::projection::pinhole::{
    DEFAULT_FOCAL_LENGTH, DEFAULT_MIN_DEPTH, Projector, project,
};
pub use crate::session::clip_path::{
    ClipPathSession, DEFAULT_BORDER_RADIUS, Transform, UNIT_QUAD,
};
