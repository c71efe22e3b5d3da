//! SVG badge backend: pure string building, no DOM.

use crate::render::{wrap, Badge, BadgeRenderer};
use crate::{RenderOptions, Result};

pub(crate) const CONTENT_TYPE_SVG: &str = "image/svg+xml; charset=utf-8";

/// Horizontal gradient stops for the badge background.
pub(crate) const GRADIENT_START: &str = "#2E3440";
pub(crate) const GRADIENT_END: &str = "#3B4252";
/// Border and text colors.
pub(crate) const BORDER_COLOR: &str = "#5E81AC";
pub(crate) const TEXT_COLOR: &str = "#ECEFF4";

/// Escape the five XML special characters so user text cannot inject markup.
pub fn escape_xml(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#039;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Build the badge document for an already-wrapped line sequence.
///
/// `height` and `first_baseline` carry the vertical geometry, which is the
/// one point where the backends differ: the SVG backend grows the document
/// to fit the lines, the raster backend centers them on a fixed canvas.
/// Successive baselines sit `line_height` apart; text is anchored at the
/// horizontal midline.
pub(crate) fn document(
    lines: &[String],
    options: &RenderOptions,
    height: u32,
    first_baseline: i32,
) -> String {
    let mut svg = String::with_capacity(512 + lines.len() * 96);
    svg.push_str(&format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{}\" height=\"{}\" role=\"img\" aria-label=\"QA Wisdom\">",
        options.width, height
    ));
    svg.push_str(&format!(
        "<defs><linearGradient id=\"bg\" x1=\"0\" y1=\"0\" x2=\"1\" y2=\"0\">\
         <stop offset=\"0%\" stop-color=\"{}\"/>\
         <stop offset=\"100%\" stop-color=\"{}\"/>\
         </linearGradient></defs>",
        GRADIENT_START, GRADIENT_END
    ));
    svg.push_str(&format!(
        "<rect x=\"0\" y=\"0\" width=\"{}\" height=\"{}\" fill=\"url(#bg)\" rx=\"8\" ry=\"8\" stroke=\"{}\" stroke-width=\"1\"/>",
        options.width, height, BORDER_COLOR
    ));
    svg.push_str(&format!(
        "<g fill=\"{}\" font-family=\"{}\" font-size=\"{}\" font-weight=\"600\">",
        TEXT_COLOR,
        escape_xml(&options.font_family),
        options.font_size
    ));
    for (i, line) in lines.iter().enumerate() {
        let y = first_baseline + (i as u32 * options.line_height) as i32;
        svg.push_str(&format!(
            "<text x=\"{}\" y=\"{}\" text-anchor=\"middle\">{}</text>",
            options.width / 2,
            y,
            escape_xml(line)
        ));
    }
    svg.push_str("</g></svg>");
    svg
}

/// The default backend: emits the badge as an SVG document whose height
/// grows with the wrapped line count.
pub struct SvgRenderer {
    options: RenderOptions,
}

impl BadgeRenderer for SvgRenderer {
    fn new(options: RenderOptions) -> Result<Self> {
        Ok(Self { options })
    }

    fn render_badge(&self, text: &str) -> Result<Badge> {
        let o = &self.options;
        let lines = wrap::wrap(text, o.max_line_chars);
        let height = lines.len() as u32 * o.line_height + 2 * o.padding_y;
        let first_baseline = (o.padding_y + o.font_size) as i32;
        let markup = document(&lines, o, height, first_baseline);
        Ok(Badge {
            content_type: CONTENT_TYPE_SVG,
            data: markup.into_bytes(),
        })
    }

    fn content_type(&self) -> &'static str {
        CONTENT_TYPE_SVG
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render_markup(text: &str) -> String {
        let renderer = SvgRenderer::new(RenderOptions::default()).unwrap();
        let badge = renderer.render_badge(text).unwrap();
        String::from_utf8(badge.data).unwrap()
    }

    #[test]
    fn escapes_all_five_specials() {
        assert_eq!(
            escape_xml(r#"<a href="x">&'"#),
            "&lt;a href=&quot;x&quot;&gt;&amp;&#039;"
        );
    }

    #[test]
    fn height_tracks_line_count() {
        // Two lines at the default limit: 2 * 20 + 2 * 16.
        let markup = render_markup(
            "Quality is never an accident; it is always the result of intelligent effort.",
        );
        assert!(markup.contains("width=\"600\""));
        assert!(markup.contains("height=\"72\""));
        assert_eq!(markup.matches("<text ").count(), 2);
    }

    #[test]
    fn lines_are_center_anchored_and_baseline_spaced() {
        let markup = render_markup(
            "Quality is never an accident; it is always the result of intelligent effort.",
        );
        assert!(markup.contains("<text x=\"300\" y=\"30\" text-anchor=\"middle\">"));
        assert!(markup.contains("<text x=\"300\" y=\"50\" text-anchor=\"middle\">"));
    }

    #[test]
    fn injected_markup_is_escaped() {
        let markup = render_markup("<script>alert('x')</script>");
        assert!(!markup.contains("<script>"));
        assert!(markup.contains("&lt;script&gt;alert(&#039;x&#039;)&lt;/script&gt;"));
    }

    #[test]
    fn fixed_style_is_present() {
        let markup = render_markup("Rollback should be plan B, never plan A.");
        assert!(markup.contains(GRADIENT_START));
        assert!(markup.contains(GRADIENT_END));
        assert!(markup.contains("stroke=\"#5E81AC\""));
        assert!(markup.contains("fill=\"#ECEFF4\""));
        assert!(markup.contains("font-weight=\"600\""));
    }

    #[test]
    fn empty_text_yields_a_textless_badge() {
        let markup = render_markup("");
        assert!(markup.contains("height=\"32\""));
        assert_eq!(markup.matches("<text ").count(), 0);
    }
}
