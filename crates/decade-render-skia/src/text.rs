// File: crates/decade-render-skia/src/text.rs
// Summary: Skia textlayout shaper for chart labels, plus a glyph advance table usable as cloud metrics.

use std::collections::HashMap;

use decade_chart::TextMetrics;
use skia::textlayout::{FontCollection, Paragraph, ParagraphBuilder, ParagraphStyle, TextStyle};
use skia_safe as skia;

const SANS: &[&str] = &["Segoe UI", "Arial", "Helvetica", "Roboto", "DejaVu Sans", "sans-serif"];
const SERIF: &[&str] = &["Georgia", "Times New Roman", "DejaVu Serif", "serif"];

pub struct TextShaper {
    fonts: FontCollection,
}

impl TextShaper {
    pub fn new() -> Self {
        let mut fc = FontCollection::new();
        // Use system manager fallback
        fc.set_default_font_manager(skia::FontMgr::default(), None);
        Self { fonts: fc }
    }

    fn make_style(size: f32, color: skia::Color, family: Option<&str>) -> TextStyle {
        let mut ts = TextStyle::new();
        ts.set_font_size(size.max(1.0));
        ts.set_color(color);
        match family {
            Some(f) if f.eq_ignore_ascii_case("serif") => ts.set_font_families(SERIF),
            _ => ts.set_font_families(SANS),
        };
        ts
    }

    pub fn layout(&self, text: &str, size: f32, color: skia::Color, family: Option<&str>) -> Paragraph {
        let mut pstyle = ParagraphStyle::new();
        pstyle.set_text_align(skia::textlayout::TextAlign::Left);
        let mut builder = ParagraphBuilder::new(&pstyle, &self.fonts);
        let style = Self::make_style(size, color, family);
        builder.push_style(&style);
        builder.add_text(text);
        let mut paragraph = builder.build();
        paragraph.layout(10_000.0);
        paragraph
    }

    pub fn measure_width(&self, text: &str, size: f32, family: Option<&str>) -> f32 {
        let p = self.layout(text, size, skia::Color::from_argb(0, 0, 0, 0), family);
        p.max_intrinsic_width()
    }

    /// Draw with the baseline at `y`; `shift` is the fraction of width moved left (0.5 centers, 1 right-aligns).
    #[allow(clippy::too_many_arguments)]
    pub fn draw_aligned(
        &self,
        canvas: &skia::Canvas,
        text: &str,
        x: f32,
        y: f32,
        size: f32,
        color: skia::Color,
        family: Option<&str>,
        shift: f32,
    ) {
        let mut p = self.layout(text, size, color, family);
        let width = p.max_intrinsic_width();
        // Paragraph draws from top-left; adjust baseline by glyph height approximation
        p.paint(canvas, (x - width * shift, y - size * 0.8));
    }

    /// Per-character advances at 1px font size for the printable ASCII range.
    pub fn advance_table(&self) -> AdvanceTable {
        const PROBE: f32 = 100.0;
        let advances = (' '..='~')
            .map(|ch| {
                let w = self.measure_width(&ch.to_string(), PROBE, None);
                (ch, f64::from(w / PROBE))
            })
            .collect::<HashMap<_, _>>();
        let mean = if advances.is_empty() {
            0.6
        } else {
            advances.values().sum::<f64>() / advances.len() as f64
        };
        AdvanceTable { advances, fallback: mean }
    }
}

impl Default for TextShaper {
    fn default() -> Self {
        Self::new()
    }
}

/// Shaped glyph widths captured once, so cloud layout tasks can measure without touching Skia.
#[derive(Clone, Debug)]
pub struct AdvanceTable {
    advances: HashMap<char, f64>,
    fallback: f64,
}

impl AdvanceTable {
    pub fn advance(&self, ch: char) -> f64 {
        self.advances.get(&ch).copied().unwrap_or(self.fallback)
    }
}

impl TextMetrics for AdvanceTable {
    fn measure(&self, text: &str, font_size: f64) -> (f64, f64) {
        let em: f64 = text.chars().map(|c| self.advance(c)).sum();
        (em * font_size, font_size)
    }
}
