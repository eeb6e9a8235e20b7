use kurbo::PathEl;

use crate::foundation::core::{BezPath, Point};

/// Serialize `path` as compact path data: `M x,y`, `L x,y`, `Q cx,cy,ex,ey`,
/// `C c1x,c1y,c2x,c2y,ex,ey` and `Z`, separated by single spaces.
///
/// Numbers are printed the way ECMAScript's `Number#toString` prints them, so strings match
/// what a browser-side generator would have produced for the same geometry.
pub fn write_path_data(path: &BezPath) -> String {
    let mut out = String::new();
    let mut buf = ryu_js::Buffer::new();
    write_path_data_into(&mut out, path, &mut buf);
    out
}

pub(crate) fn write_path_data_into(out: &mut String, path: &BezPath, buf: &mut ryu_js::Buffer) {
    for (i, el) in path.elements().iter().enumerate() {
        if i > 0 {
            out.push(' ');
        }
        match *el {
            PathEl::MoveTo(p) => {
                out.push('M');
                push_points(out, &[p], buf);
            }
            PathEl::LineTo(p) => {
                out.push('L');
                push_points(out, &[p], buf);
            }
            PathEl::QuadTo(c, p) => {
                out.push('Q');
                push_points(out, &[c, p], buf);
            }
            PathEl::CurveTo(c1, c2, p) => {
                out.push('C');
                push_points(out, &[c1, c2, p], buf);
            }
            PathEl::ClosePath => out.push('Z'),
        }
    }
}

fn push_points(out: &mut String, points: &[Point], buf: &mut ryu_js::Buffer) {
    for (i, p) in points.iter().enumerate() {
        if i > 0 {
            out.push(',');
        }
        out.push_str(js_number_to_string(p.x, buf));
        out.push(',');
        out.push_str(js_number_to_string(p.y, buf));
    }
}

fn js_number_to_string(mut v: f64, buf: &mut ryu_js::Buffer) -> &str {
    if v == 0.0 {
        // -0 prints as "0" in JS.
        v = 0.0;
    }
    buf.format(v)
}

#[cfg(test)]
#[path = "../../tests/unit/path/svg.rs"]
mod tests;
