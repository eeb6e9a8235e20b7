use kurbo::PathEl;

use crate::foundation::core::{BezPath, Point, Rect};
use crate::foundation::error::{ClipError, ClipResult};
use crate::path::svg::write_path_data;

/// Tilt existing path data about the center of its control-point bounds.
///
/// Every point (on-curve and control) is rotated about the X axis by `x_rad`, then about the
/// Y axis by `y_rad`, with the path lying in the `z = 0` plane. The result is flattened back
/// onto the plane orthographically; use a [`crate::ClipPathSession`] for perspective.
pub fn tilt_path(d: &str, x_rad: f64, y_rad: f64) -> ClipResult<String> {
    let path = BezPath::from_svg(d)
        .map_err(|e| ClipError::geometry(format!("invalid path data: {e}")))?;
    let Some(bounds) = control_bounds(&path) else {
        return Ok(write_path_data(&path));
    };

    let center = bounds.center();
    let (sin_x, cos_x) = x_rad.sin_cos();
    let (sin_y, cos_y) = y_rad.sin_cos();
    let tilt = |p: Point| {
        let x = p.x - center.x;
        let y = p.y - center.y;
        // X rotation of (x, y, 0), then the Y rotation's x component.
        let ry = y * cos_x;
        let rz = y * sin_x;
        Point::new(x * cos_y + rz * sin_y + center.x, ry + center.y)
    };

    let mut out = BezPath::new();
    for el in path.elements() {
        out.push(match *el {
            PathEl::MoveTo(p) => PathEl::MoveTo(tilt(p)),
            PathEl::LineTo(p) => PathEl::LineTo(tilt(p)),
            PathEl::QuadTo(c, p) => PathEl::QuadTo(tilt(c), tilt(p)),
            PathEl::CurveTo(c1, c2, p) => PathEl::CurveTo(tilt(c1), tilt(c2), tilt(p)),
            PathEl::ClosePath => PathEl::ClosePath,
        });
    }
    Ok(write_path_data(&out))
}

fn control_bounds(path: &BezPath) -> Option<Rect> {
    let mut bounds: Option<Rect> = None;
    let mut add = |p: Point| {
        bounds = Some(match bounds {
            Some(r) => r.union_pt(p),
            None => Rect::from_points(p, p),
        });
    };
    for el in path.elements() {
        match *el {
            PathEl::MoveTo(p) | PathEl::LineTo(p) => add(p),
            PathEl::QuadTo(c, p) => {
                add(c);
                add(p);
            }
            PathEl::CurveTo(c1, c2, p) => {
                add(c1);
                add(c2);
                add(p);
            }
            PathEl::ClosePath => {}
        }
    }
    bounds
}

#[cfg(test)]
#[path = "../../tests/unit/path/tilt.rs"]
mod tests;
