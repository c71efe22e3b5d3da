//! Badge rendering: text wrapping, the renderer seam, and the backends.

pub mod svg;
pub mod wrap;

#[cfg(feature = "raster")]
pub mod raster;

use crate::{RenderOptions, Result};

/// A rendered badge artifact.
///
/// `data` holds UTF-8 SVG markup or binary PNG bytes depending on the
/// backend that produced it; `content_type` says which.
#[derive(Debug, Clone)]
pub struct Badge {
    pub content_type: &'static str,
    pub data: Vec<u8>,
}

/// Core trait for badge rendering backends
///
/// A backend is a pure function of (text, options): given the same input and
/// the same rendering stack it produces identical bytes. Backends hold no
/// per-request state, so one instance serves every request.
pub trait BadgeRenderer: Send + Sync {
    /// Create a backend with the given options
    fn new(options: RenderOptions) -> Result<Self>
    where
        Self: Sized;

    /// Render `text` into a badge artifact
    fn render_badge(&self, text: &str) -> Result<Badge>;

    /// Content type of the artifacts this backend produces
    fn content_type(&self) -> &'static str;
}
