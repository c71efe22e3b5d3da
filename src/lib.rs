//! Wisdombadge
//!
//! A small HTTP service that serves canned QA wisdom as JSON or as a rendered
//! image badge, plus the library surface backing it.
//!
//! # Features
//!
//! - **svg** (default): badges rendered as SVG documents via pure string building
//! - **raster**: badges rasterized onto a fixed canvas and encoded as PNG
//!
//! # Example
//!
//! ```
//! use wisdombadge::{BadgeRenderer, RenderOptions};
//!
//! # fn main() -> wisdombadge::Result<()> {
//! let renderer = wisdombadge::new_renderer(RenderOptions::default())?;
//! let badge = renderer.render_badge("Logs are love letters to your future self.")?;
//! assert!(badge.content_type.starts_with("image/"));
//! # Ok(())
//! # }
//! ```

pub mod error;
pub use error::{Error, Result};

pub mod render;
pub mod wisdom;

pub mod http;

pub use render::{Badge, BadgeRenderer};
pub use wisdom::WisdomStore;

/// Badge rendering configuration
///
/// All fields have defaults matching the service's fixed visual style; build
/// a customized value with struct-update syntax. There is no validation
/// beyond the defaults.
///
/// # Examples
///
/// ```
/// let opts = wisdombadge::RenderOptions {
///     width: 400,
///     ..Default::default()
/// };
/// assert_eq!(opts.line_height, 20);
/// ```
#[derive(Debug, Clone)]
pub struct RenderOptions {
    /// Badge width in pixels
    pub width: u32,
    /// Canvas height in pixels; only the raster backend uses this, the SVG
    /// backend derives its height from the wrapped line count
    pub canvas_height: u32,
    /// Horizontal inset reserved for backends that measure text
    pub padding_x: u32,
    /// Vertical padding above and below the text block
    pub padding_y: u32,
    /// Distance between consecutive text baselines
    pub line_height: u32,
    /// Font size in pixels
    pub font_size: u32,
    /// CSS font stack for the badge text
    pub font_family: String,
    /// Maximum characters per wrapped line
    pub max_line_chars: usize,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            width: 600,
            canvas_height: 100,
            padding_x: 20,
            padding_y: 16,
            line_height: 20,
            font_size: 14,
            font_family: "ui-sans-serif, system-ui, -apple-system, Segoe UI, Roboto, Ubuntu, Cantarell, Noto Sans, Arial".to_string(),
            max_line_chars: 60,
        }
    }
}

/// Create a renderer with the default backend
///
/// This prefers the raster backend when the `raster` feature is enabled.
// Prefer the raster backend when the feature is enabled (fixed-canvas PNG).
#[cfg(feature = "raster")]
pub fn new_renderer(options: RenderOptions) -> Result<impl BadgeRenderer> {
    render::raster::RasterRenderer::new(options)
}

// Fall back to the SVG backend, the default.
#[cfg(all(not(feature = "raster"), feature = "svg"))]
pub fn new_renderer(options: RenderOptions) -> Result<impl BadgeRenderer> {
    render::svg::SvgRenderer::new(options)
}
