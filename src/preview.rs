//! Rasterized previews of clip paths.

use crate::foundation::core::{BezPath, Viewport};
use crate::foundation::error::{ClipError, ClipResult};

/// Largest preview edge in pixels.
pub const MAX_PREVIEW_DIM: u32 = 16_384;

/// Coverage of a clip path over a viewport, white on transparent, premultiplied RGBA8.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PreviewMask {
    pub width: u32,
    pub height: u32,
    pub rgba8_premul: Vec<u8>,
}

impl PreviewMask {
    /// Alpha at pixel `(x, y)`, `None` outside the mask.
    pub fn coverage(&self, x: u32, y: u32) -> Option<u8> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = ((y as usize) * (self.width as usize) + (x as usize)) * 4;
        self.rgba8_premul.get(i + 3).copied()
    }

    /// Straight-alpha copy of the pixels, as image encoders expect.
    pub fn to_straight_rgba8(&self) -> Vec<u8> {
        let mut out = self.rgba8_premul.clone();
        for px in out.chunks_exact_mut(4) {
            let a = u16::from(px[3]);
            if a == 0 {
                continue;
            }
            for c in &mut px[..3] {
                *c = ((u16::from(*c) * 255 + a / 2) / a).min(255) as u8;
            }
        }
        out
    }
}

/// Standalone SVG document filling `d` in white over `viewport`.
pub fn svg_document(d: &str, viewport: Viewport) -> String {
    let Viewport { width, height } = viewport;
    format!(
        r##"<svg xmlns="http://www.w3.org/2000/svg" width="{width}" height="{height}" viewBox="0 0 {width} {height}"><path d="{}" fill="#ffffff"/></svg>"##,
        escape_attr(d)
    )
}

/// Rasterize the region enclosed by path data `d` into a [`PreviewMask`].
#[tracing::instrument(skip(d))]
pub fn rasterize_mask(d: &str, viewport: Viewport) -> ClipResult<PreviewMask> {
    let Viewport { width, height } = viewport;
    if width == 0 || height == 0 || width > MAX_PREVIEW_DIM || height > MAX_PREVIEW_DIM {
        return Err(ClipError::config(format!(
            "preview size must be within 1..={MAX_PREVIEW_DIM} (got {width}x{height})"
        )));
    }
    // usvg drops unparseable path data silently; surface it instead.
    BezPath::from_svg(d).map_err(|e| ClipError::geometry(format!("invalid path data: {e}")))?;

    let svg = svg_document(d, viewport);
    let opts = usvg::Options::default();
    let tree = usvg::Tree::from_str(&svg, &opts)
        .map_err(|e| ClipError::preview(format!("parse preview svg: {e}")))?;

    let mut pixmap = resvg::tiny_skia::Pixmap::new(width, height)
        .ok_or_else(|| ClipError::preview("failed to allocate preview pixmap"))?;
    resvg::render(&tree, resvg::tiny_skia::Transform::identity(), &mut pixmap.as_mut());

    Ok(PreviewMask {
        width,
        height,
        rgba8_premul: pixmap.take(),
    })
}

fn escape_attr(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(ch),
        }
    }
    out
}

#[cfg(test)]
#[path = "../tests/unit/preview.rs"]
mod tests;
