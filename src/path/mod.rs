//! Path construction and path-data text.

pub(crate) mod presets;
pub(crate) mod rounded;
pub(crate) mod svg;
pub(crate) mod tilt;
