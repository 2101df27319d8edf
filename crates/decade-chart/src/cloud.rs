// File: crates/decade-chart/src/cloud.rs
// Summary: Rectangular word-cloud layout (spiral placement with box collision) and size normalization.
//
// Words are placed largest first. Each word starts near the box center and walks an
// Archimedean spiral until its padded bounding box neither leaves the box nor overlaps
// an already placed word. Words that run off the spiral are dropped.

use std::collections::BTreeMap;

use rand::Rng;

/// Size of the box every decade's words are packed into.
pub const CLOUD_SIZE: (f64, f64) = (150.0, 500.0);
/// Font size used when `sqrt(weight)` is not a finite number.
pub const FALLBACK_FONT_SIZE: f64 = 10.0;
/// Relative size used when every placed word has the same size.
pub const FLAT_REL_SIZE: f64 = 0.2;
/// Font size of a word with relative size 1.
pub const MAX_FONT_SIZE: f64 = 45.0;
/// Opacity floor for the smallest words.
pub const MIN_OPACITY: f64 = 0.04;
/// Vertical scatter applied to every rendered word, `[0, JITTER)`.
pub const JITTER: f64 = 300.0;

const PADDING: f64 = 1.0;

/// Measures text for collision boxes.
pub trait TextMetrics: Sync {
    /// `(width, height)` of `text` at `font_size`.
    fn measure(&self, text: &str, font_size: f64) -> (f64, f64);
}

/// Fixed-advance estimate: 0.6em per char, 1em tall.
#[derive(Clone, Copy, Debug, Default)]
pub struct ApproxMetrics;

impl TextMetrics for ApproxMetrics {
    fn measure(&self, text: &str, font_size: f64) -> (f64, f64) {
        (text.chars().count() as f64 * font_size * 0.6, font_size)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct CloudWord {
    pub text: String,
    pub weight: f64,
}

impl CloudWord {
    pub fn new(text: impl Into<String>, weight: f64) -> Self {
        Self { text: text.into(), weight }
    }

    /// `trunc(sqrt(weight))`, or [`FALLBACK_FONT_SIZE`] when the root is not finite.
    pub fn font_size(&self) -> f64 {
        let size = self.weight.sqrt();
        if size.is_finite() { size.trunc() } else { FALLBACK_FONT_SIZE }
    }
}

/// Word list for one decade's genre weights.
pub fn words_from_genres(genres: &BTreeMap<String, f64>) -> Vec<CloudWord> {
    genres.iter().map(|(name, &w)| CloudWord::new(name.clone(), w)).collect()
}

/// A laid out word. `x`/`y` are relative to the box center.
#[derive(Clone, Debug, PartialEq)]
pub struct PlacedWord {
    pub text: String,
    pub size: f64,
    pub x: f64,
    pub y: f64,
    pub rotate: f64,
}

/// Final visual attributes of a placed word.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WordStyle {
    pub rel_size: f64,
    pub font_size: f64,
    pub opacity: f64,
}

/// Normalize the placed sizes against their own min/max.
pub fn styles(words: &[PlacedWord]) -> Vec<WordStyle> {
    let (min, max) = words.iter().fold((f64::MAX, f64::MIN), |(lo, hi), w| {
        (lo.min(w.size), hi.max(w.size))
    });
    words
        .iter()
        .map(|w| {
            let mut rel = (w.size - min) / (max - min);
            if !rel.is_finite() {
                rel = FLAT_REL_SIZE;
            }
            WordStyle { rel_size: rel, font_size: rel * MAX_FONT_SIZE, opacity: rel.max(MIN_OPACITY) }
        })
        .collect()
}

#[derive(Clone, Copy, Debug, PartialEq)]
struct Rect {
    x0: f64,
    y0: f64,
    x1: f64,
    y1: f64,
}

impl Rect {
    fn overlaps(&self, o: &Rect) -> bool {
        self.x0 < o.x1 && o.x0 < self.x1 && self.y0 < o.y1 && o.y0 < self.y1
    }
}

pub struct CloudLayout<'m, M: TextMetrics> {
    size: (f64, f64),
    metrics: &'m M,
}

impl<'m, M: TextMetrics> CloudLayout<'m, M> {
    pub fn new(size: (f64, f64), metrics: &'m M) -> Self {
        Self { size, metrics }
    }

    /// Spiral point for step `t` scaled to the box aspect.
    fn spiral(&self, t: f64) -> (f64, f64) {
        let e = self.size.0 / self.size.1;
        let t = t * 0.1;
        (e * t * t.cos(), t * t.sin())
    }

    pub fn layout<R: Rng>(&self, words: &[CloudWord], rng: &mut R) -> Vec<PlacedWord> {
        let (w, h) = self.size;
        if !(w.is_finite() && h.is_finite() && w > 0.0 && h > 0.0) {
            return Vec::new();
        }
        let mut sized: Vec<(&CloudWord, f64)> = words
            .iter()
            .map(|word| (word, word.font_size()))
            .filter(|(_, s)| *s > 0.0)
            .collect();
        sized.sort_by(|a, b| b.1.total_cmp(&a.1));

        let mut placed: Vec<Rect> = Vec::with_capacity(sized.len());
        let mut out = Vec::with_capacity(sized.len());
        for (word, size) in sized {
            let (tw, th) = self.metrics.measure(&word.text, size);
            let half_w = tw / 2.0 + PADDING;
            let half_h = th / 2.0 + PADDING;
            let start_x = (w * (rng.gen::<f64>() + 0.5) / 2.0).floor();
            let start_y = (h * (rng.gen::<f64>() + 0.5) / 2.0).floor();
            let dt = if rng.gen::<f64>() < 0.5 { 1.0 } else { -1.0 };

            match self.place(start_x, start_y, half_w, half_h, dt, &placed) {
                Some((x, y)) => {
                    placed.push(Rect { x0: x - half_w, y0: y - half_h, x1: x + half_w, y1: y + half_h });
                    out.push(PlacedWord {
                        text: word.text.clone(),
                        size,
                        x: x - (w / 2.0).floor(),
                        y: y - (h / 2.0).floor(),
                        rotate: 0.0,
                    });
                }
                None => tracing::debug!(word = %word.text, size, "word did not fit in cloud"),
            }
        }
        out
    }

    fn place(&self, sx: f64, sy: f64, hw: f64, hh: f64, dt: f64, placed: &[Rect]) -> Option<(f64, f64)> {
        let (w, h) = self.size;
        let max_delta = (w * w + h * h).sqrt();
        let mut t = -dt;
        loop {
            t += dt;
            let (dx, dy) = self.spiral(t);
            let (dx, dy) = (dx.trunc(), dy.trunc());
            if dx.abs().min(dy.abs()) >= max_delta {
                return None;
            }
            let (x, y) = (sx + dx, sy + dy);
            let rect = Rect { x0: x - hw, y0: y - hh, x1: x + hw, y1: y + hh };
            if rect.x0 < 0.0 || rect.y0 < 0.0 || rect.x1 > w || rect.y1 > h {
                continue;
            }
            if !placed.iter().any(|p| p.overlaps(&rect)) {
                return Some((x, y));
            }
        }
    }
}
