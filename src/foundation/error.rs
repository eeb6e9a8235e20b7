/// Convenience result type used across clipframe.
pub type ClipResult<T> = Result<T, ClipError>;

/// Top-level error taxonomy used by clipframe APIs.
#[derive(thiserror::Error, Debug)]
pub enum ClipError {
    /// Invalid configuration: focal length, radius, viewport, depth epsilon.
    #[error("configuration error: {0}")]
    Config(String),

    /// Geometry that cannot produce a well-formed path (too few points, coincident
    /// vertices, non-finite coordinates, unparseable path data).
    #[error("degenerate geometry: {0}")]
    Geometry(String),

    /// Errors while building or rasterizing a preview document.
    #[error("preview error: {0}")]
    Preview(String),

    /// Errors when serializing or deserializing scene files.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl ClipError {
    /// Build a [`ClipError::Config`] value.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Build a [`ClipError::Geometry`] value.
    pub fn geometry(msg: impl Into<String>) -> Self {
        Self::Geometry(msg.into())
    }

    /// Build a [`ClipError::Preview`] value.
    pub fn preview(msg: impl Into<String>) -> Self {
        Self::Preview(msg.into())
    }

    /// Build a [`ClipError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
