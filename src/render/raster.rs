//! Raster badge backend: renders the shared badge markup onto a fixed
//! canvas and encodes it as PNG.

use std::sync::Arc;

use resvg::{tiny_skia, usvg};

use crate::render::{svg, wrap, Badge, BadgeRenderer};
use crate::{Error, RenderOptions, Result};

pub(crate) const CONTENT_TYPE_PNG: &str = "image/png";

/// Rasterizing backend with a fixed `width x canvas_height` canvas.
///
/// The wrapped line block is vertically centered on the canvas; the markup
/// itself comes from the SVG builder, so both backends share one visual
/// style. Fonts are loaded from the system once at construction.
pub struct RasterRenderer {
    options: RenderOptions,
    fontdb: Arc<usvg::fontdb::Database>,
}

impl BadgeRenderer for RasterRenderer {
    fn new(options: RenderOptions) -> Result<Self> {
        let mut db = usvg::fontdb::Database::new();
        db.load_system_fonts();
        Ok(Self {
            options,
            fontdb: Arc::new(db),
        })
    }

    fn render_badge(&self, text: &str) -> Result<Badge> {
        let o = &self.options;
        let lines = wrap::wrap(text, o.max_line_chars);

        let height = o.canvas_height;
        let block_top = height as i32 / 2 - lines.len() as i32 * o.line_height as i32 / 2;
        let first_baseline = block_top + o.font_size as i32;
        let markup = svg::document(&lines, o, height, first_baseline);

        let opt = usvg::Options {
            fontdb: self.fontdb.clone(),
            ..Default::default()
        };
        let tree = usvg::Tree::from_str(&markup, &opt)
            .map_err(|e| Error::RenderError(format!("invalid badge markup: {}", e)))?;

        let mut pixmap = tiny_skia::Pixmap::new(o.width, height)
            .ok_or_else(|| Error::RenderError("zero-sized canvas".into()))?;
        resvg::render(&tree, tiny_skia::Transform::identity(), &mut pixmap.as_mut());

        let png = pixmap
            .encode_png()
            .map_err(|e| Error::EncodeError(e.to_string()))?;
        Ok(Badge {
            content_type: CONTENT_TYPE_PNG,
            data: png,
        })
    }

    fn content_type(&self) -> &'static str {
        CONTENT_TYPE_PNG
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_png_with_fixed_canvas() {
        let renderer = RasterRenderer::new(RenderOptions::default()).unwrap();
        let badge = renderer
            .render_badge("The faster the feedback, the cheaper the fix.")
            .unwrap();
        assert_eq!(badge.content_type, CONTENT_TYPE_PNG);
        assert_eq!(&badge.data[..8], b"\x89PNG\r\n\x1a\n");

        let pixmap = tiny_skia::Pixmap::decode_png(&badge.data).unwrap();
        assert_eq!(pixmap.width(), 600);
        assert_eq!(pixmap.height(), 100);
    }

    #[test]
    fn identical_input_renders_identical_bytes() {
        let renderer = RasterRenderer::new(RenderOptions::default()).unwrap();
        let a = renderer.render_badge("Automation without purpose is just noise.").unwrap();
        let b = renderer.render_badge("Automation without purpose is just noise.").unwrap();
        assert_eq!(a.data, b.data);
    }
}
