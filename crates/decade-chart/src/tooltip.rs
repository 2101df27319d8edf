// File: crates/decade-chart/src/tooltip.rs
// Summary: Marker tooltip text and the single shared tooltip element's hover state.

use std::time::Duration;

use crate::data::DecadeRecord;
use crate::format::{grouped, one_decimal};

/// Fade-in length after a marker is entered.
pub const FADE_IN: Duration = Duration::from_millis(200);
/// Tooltip position relative to the pointer's page coordinates.
pub const CURSOR_OFFSET: (f64, f64) = (-10.0, 30.0);
/// Style the tooltip container starts with.
pub const INITIAL_STYLE: &str = "position: absolute; opacity: 0;";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TooltipContent {
    pub lines: Vec<String>,
}

impl TooltipContent {
    pub fn for_record(record: &DecadeRecord) -> Self {
        Self {
            lines: vec![
                format!("Budget: ${}", grouped(record.budget)),
                format!("Revenue: ${}", grouped(record.revenue)),
                format!("Rating: {}", one_decimal(record.average_rating)),
            ],
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
struct Fade {
    from: f64,
    to: f64,
    started: Duration,
}

/// Cubic in-out, the default transition easing.
fn cubic_in_out(t: f64) -> f64 {
    let t = t * 2.0;
    if t <= 1.0 {
        t * t * t / 2.0
    } else {
        let t = t - 2.0;
        (t * t * t + 2.0) / 2.0
    }
}

/// Transient tooltip element. Times are caller-supplied monotonic offsets.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Tooltip {
    lines: Vec<String>,
    left: f64,
    top: f64,
    opacity: f64,
    fade: Option<Fade>,
}

impl Tooltip {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn position(&self) -> (f64, f64) {
        (self.left, self.top)
    }

    /// Replace the content and fade towards fully opaque.
    pub fn hover(&mut self, content: TooltipContent, now: Duration) {
        let from = self.opacity_at(now);
        self.lines = content.lines;
        self.fade = Some(Fade { from, to: 1.0, started: now });
    }

    pub fn move_to(&mut self, page_x: f64, page_y: f64) {
        self.left = page_x + CURSOR_OFFSET.0;
        self.top = page_y + CURSOR_OFFSET.1;
    }

    /// Hide immediately and drop the content; any running fade is cancelled.
    pub fn leave(&mut self) {
        self.fade = None;
        self.opacity = 0.0;
        self.lines.clear();
    }

    pub fn opacity_at(&self, now: Duration) -> f64 {
        match self.fade {
            None => self.opacity,
            Some(f) => {
                let elapsed = now.saturating_sub(f.started).as_secs_f64();
                let t = (elapsed / FADE_IN.as_secs_f64()).clamp(0.0, 1.0);
                f.from + (f.to - f.from) * cubic_in_out(t)
            }
        }
    }

    pub fn is_visible(&self, now: Duration) -> bool {
        !self.lines.is_empty() && self.opacity_at(now) > 0.0
    }

    /// Inline CSS for the container at `now`.
    pub fn style_at(&self, now: Duration) -> String {
        if self.fade.is_none() && self.opacity == 0.0 && self.lines.is_empty() && self.left == 0.0 && self.top == 0.0 {
            return INITIAL_STYLE.to_string();
        }
        format!(
            "position: absolute; opacity: {}; left: {}px; top: {}px;",
            self.opacity_at(now),
            self.left,
            self.top
        )
    }
}
