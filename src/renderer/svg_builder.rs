//! SVG builder — accumulates SVG elements and produces the final string.
//!
//! Every drawable takes an explicit color so that a note's head, stem,
//! accidental, and ledger lines can all be re-inked together when the
//! lesson controller marks it correct or incorrect.

use super::constants::*;

pub(super) struct SvgBuilder {
    pub(super) elements: Vec<String>,
    width: f64,
    height: f64,
}

impl SvgBuilder {
    pub(super) fn new(width: f64, height: f64) -> Self {
        Self {
            elements: Vec::new(),
            width,
            height,
        }
    }

    pub(super) fn build(self) -> String {
        let mut svg = format!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 {} {}" width="{}" height="{}" style="font-family: 'Georgia', 'Times New Roman', serif;">"#,
            self.width, self.height, self.width, self.height
        );
        svg.push('\n');
        for el in &self.elements {
            svg.push_str("  ");
            svg.push_str(el);
            svg.push('\n');
        }
        svg.push_str("</svg>\n");
        svg
    }

    pub(super) fn line(&mut self, x1: f64, y1: f64, x2: f64, y2: f64, color: &str, width: f64) {
        self.elements.push(format!(
            r#"<line x1="{:.1}" y1="{:.1}" x2="{:.1}" y2="{:.1}" stroke="{}" stroke-width="{:.1}" stroke-linecap="round"/>"#,
            x1, y1, x2, y2, color, width
        ));
    }

    pub(super) fn dashed_line(&mut self, x1: f64, y1: f64, x2: f64, y2: f64, color: &str, width: f64) {
        self.elements.push(format!(
            r#"<line x1="{:.1}" y1="{:.1}" x2="{:.1}" y2="{:.1}" stroke="{}" stroke-width="{:.1}" stroke-dasharray="4 3"/>"#,
            x1, y1, x2, y2, color, width
        ));
    }

    pub(super) fn text(&mut self, x: f64, y: f64, content: &str, size: f64, weight: &str, fill: &str, anchor: &str) {
        let escaped = content
            .replace('&', "&amp;")
            .replace('<', "&lt;")
            .replace('>', "&gt;");
        self.elements.push(format!(
            r#"<text x="{:.1}" y="{:.1}" font-size="{:.0}" font-weight="{}" fill="{}" text-anchor="{}">{}</text>"#,
            x, y, size, weight, fill, anchor, escaped
        ));
    }

    pub(super) fn path(&mut self, d: &str, fill: &str, stroke: &str, stroke_width: f64) {
        self.elements.push(format!(
            r#"<path d="{}" fill="{}" stroke="{}" stroke-width="{:.1}" stroke-linecap="round"/>"#,
            d, fill, stroke, stroke_width
        ));
    }

    /// Filled quarter-note head, tilted like engraved notation.
    pub(super) fn notehead(&mut self, cx: f64, cy: f64, color: &str) {
        self.elements.push(format!(
            r#"<ellipse cx="{:.1}" cy="{:.1}" rx="{:.1}" ry="{:.1}" fill="{}" stroke="none" transform="rotate(-15,{:.1},{:.1})"/>"#,
            cx, cy, NOTEHEAD_RX, NOTEHEAD_RY, color, cx, cy
        ));
    }

    /// Clef as a text glyph (𝄞 / 𝄢), anchored so the glyph wraps the
    /// staff band starting at `staff_top`.
    pub(super) fn clef_glyph(&mut self, x: f64, staff_top: f64, treble: bool) {
        let (glyph, y) = if treble {
            ("\u{1d11e}", staff_top + 38.0)
        } else {
            ("\u{1d122}", staff_top + 30.0)
        };
        self.elements.push(format!(
            r#"<text x="{:.1}" y="{:.1}" font-size="46" fill="{}" text-anchor="start" class="clef">{}</text>"#,
            x, y, NOTE_COLOR, glyph
        ));
    }

    /// Sharp sign drawn from strokes: two verticals crossed by two
    /// slightly rising bars.
    pub(super) fn sharp_glyph(&mut self, x: f64, y: f64, color: &str) {
        let w = 1.0;
        self.line(x - 1.6, y - 5.0, x - 1.6, y + 5.5, color, w);
        self.line(x + 1.6, y - 5.5, x + 1.6, y + 5.0, color, w);
        self.line(x - 3.6, y - 1.4, x + 3.6, y - 2.6, color, 1.8);
        self.line(x - 3.6, y + 2.6, x + 3.6, y + 1.4, color, 1.8);
    }

    /// Flat sign: a stem with a small bowl closing on it.
    pub(super) fn flat_glyph(&mut self, x: f64, y: f64, color: &str) {
        self.line(x - 2.0, y - 8.0, x - 2.0, y + 3.0, color, 1.0);
        let bowl = format!(
            "M{:.1},{:.1} C{:.1},{:.1} {:.1},{:.1} {:.1},{:.1}",
            x - 2.0, y - 1.5,
            x + 3.5, y - 3.0,
            x + 3.0, y + 1.5,
            x - 2.0, y + 3.0,
        );
        self.path(&bowl, "none", color, 1.2);
    }
}
