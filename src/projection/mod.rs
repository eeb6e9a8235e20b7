//! Pinhole projection of camera-relative vertices onto the 2D viewport.

pub(crate) mod pinhole;
