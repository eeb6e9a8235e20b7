//! Flat frame outlines for views that animate a clip region without perspective.

use crate::foundation::core::{BezPath, Point, Viewport};
use crate::path::svg::write_path_data;

/// Smallest side of the centered preview frame.
pub const MIN_PREVIEW_LENGTH: f64 = 100.0;

/// Side length of the centered preview frame for `viewport`: a tenth of its width, at least
/// [`MIN_PREVIEW_LENGTH`].
pub fn preview_length(viewport: Viewport) -> f64 {
    (f64::from(viewport.width) / 10.0).max(MIN_PREVIEW_LENGTH)
}

/// Square frame of side `length` centered in `viewport`, with each corner turned by a
/// quadratic curve that bulges `offset` outwards.
///
/// `length = 0, offset = 0` collapses to a point at the center, which is the usual start
/// state of a reveal.
pub fn preview_frame_path(viewport: Viewport, length: f64, offset: f64) -> String {
    let c = viewport.center();
    let top_right = Point::new(c.x + length / 2.0, c.y - length / 2.0);
    write_path_data(&frame(top_right, length, length, offset))
}

/// Frame covering the whole viewport with 1-unit corner curves.
pub fn full_frame_path(viewport: Viewport) -> String {
    let w = f64::from(viewport.width);
    let h = f64::from(viewport.height);
    write_path_data(&frame(Point::new(w, 0.0), w, h, 1.0))
}

// Starts at the top-right inner corner and runs clockwise in screen space.
fn frame(top_right: Point, width: f64, height: f64, offset: f64) -> BezPath {
    let Point { x, y } = top_right;
    let o = offset;
    let mut p = BezPath::new();
    p.move_to((x, y));
    p.quad_to((x + o, y), (x + o, y + o));
    p.line_to((x + o, y + height));
    p.quad_to((x + o, y + height + o), (x, y + height + o));
    p.line_to((x - width, y + height + o));
    p.quad_to((x - width - o, y + height + o), (x - width - o, y + height));
    p.line_to((x - width - o, y + o));
    p.quad_to((x - width - o, y), (x - width, y));
    p.close_path();
    p
}

#[cfg(test)]
#[path = "../../tests/unit/path/presets.rs"]
mod tests;
