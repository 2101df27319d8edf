// File: crates/decade-chart/src/theme.rs
// Summary: Page color themes and the sequential revenue palette.

use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// `#rrggbb`
    pub fn to_hex(self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// ColorBrewer YlOrBr, 9 classes, light to dark.
pub const YL_OR_BR_9: [Color; 9] = [
    Color::rgb(0xff, 0xff, 0xe5),
    Color::rgb(0xff, 0xf7, 0xbc),
    Color::rgb(0xfe, 0xe3, 0x91),
    Color::rgb(0xfe, 0xc4, 0x4f),
    Color::rgb(0xfe, 0x99, 0x29),
    Color::rgb(0xec, 0x70, 0x14),
    Color::rgb(0xcc, 0x4c, 0x02),
    Color::rgb(0x99, 0x34, 0x04),
    Color::rgb(0x66, 0x25, 0x06),
];

/// Palette slot for a relative revenue: `floor(rel * 8)` clamped into `0..=8`, NaN maps to 0.
pub fn revenue_bucket(rel: f64) -> usize {
    let last = YL_OR_BR_9.len() - 1;
    let idx = (rel * last as f64).floor();
    if idx.is_nan() || idx < 0.0 {
        0
    } else {
        (idx as usize).min(last)
    }
}

pub fn revenue_color(rel: f64) -> Color {
    YL_OR_BR_9[revenue_bucket(rel)]
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Theme {
    pub name: &'static str,
    pub background: Color,
    /// Resolves `currentColor`.
    pub foreground: Color,
    pub tooltip_background: Color,
    pub tooltip_text: Color,
}

impl Theme {
    pub fn dark() -> Self {
        Self {
            name: "dark",
            background: Color::rgb(0x17, 0x17, 0x17), // neutral-900
            foreground: Color::rgb(0xff, 0xff, 0xff),
            tooltip_background: Color::rgb(0xff, 0xff, 0xff),
            tooltip_text: Color::rgb(0x00, 0x00, 0x00),
        }
    }

    pub fn light() -> Self {
        Self {
            name: "light",
            background: Color::rgb(0xfa, 0xfa, 0xfc),
            foreground: Color::rgb(0x14, 0x14, 0x1e),
            tooltip_background: Color::rgb(0x26, 0x26, 0x26),
            tooltip_text: Color::rgb(0xff, 0xff, 0xff),
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}

/// Return a list of built-in theme presets.
pub fn presets() -> Vec<Theme> {
    vec![Theme::dark(), Theme::light()]
}

/// Find a theme by its `name`, falling back to dark.
pub fn find(name: &str) -> Theme {
    for t in presets() { if t.name.eq_ignore_ascii_case(name) { return t; } }
    Theme::dark()
}
