// File: crates/decade-chart/src/data.rs
// Summary: Dataset (meta + per-decade records) and presentation dimensions.

use std::collections::BTreeMap;
use std::fmt;
use std::path::Path;

use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime};
use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{ChartError, ChartResult};

/// Calendar year. Only year granularity is meaningful for this chart.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Year(pub i32);

impl Year {
    pub const fn get(self) -> i32 {
        self.0
    }

    /// Parse a bare year or any date-like string, keeping the year only.
    pub fn parse(raw: &str) -> ChartResult<Self> {
        let s = raw.trim();
        if let Ok(y) = s.parse::<i32>() {
            return Ok(Self(y));
        }
        if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
            return Ok(Self(dt.year()));
        }
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%.f") {
            return Ok(Self(dt.year()));
        }
        if let Ok(d) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
            return Ok(Self(d.year()));
        }
        Err(ChartError::invalid_year(s))
    }
}

impl fmt::Display for Year {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Serialize for Year {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_i32(self.0)
    }
}

impl<'de> Deserialize<'de> for Year {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct YearVisitor;

        impl Visitor<'_> for YearVisitor {
            type Value = Year;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a year number or a date-like string")
            }

            fn visit_i64<E: de::Error>(self, v: i64) -> Result<Year, E> {
                i32::try_from(v)
                    .map(Year)
                    .map_err(|_| E::custom(format!("year out of range: {v}")))
            }

            fn visit_u64<E: de::Error>(self, v: u64) -> Result<Year, E> {
                i32::try_from(v)
                    .map(Year)
                    .map_err(|_| E::custom(format!("year out of range: {v}")))
            }

            fn visit_f64<E: de::Error>(self, v: f64) -> Result<Year, E> {
                if v.is_finite() && v.abs() < i32::MAX as f64 {
                    Ok(Year(v.floor() as i32))
                } else {
                    Err(E::custom(format!("year out of range: {v}")))
                }
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<Year, E> {
                Year::parse(v).map_err(E::custom)
            }
        }

        deserializer.deserialize_any(YearVisitor)
    }
}

/// Min/max bounds computed upstream over the whole dataset.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartMeta {
    pub min_budget: f64,
    pub max_budget: f64,
    pub min_revenue: f64,
    pub max_revenue: f64,
    pub min_year: Year,
    pub max_year: Year,
}

impl ChartMeta {
    /// True when any bound pair is equal, inverted or non-finite.
    pub fn is_degenerate(&self) -> bool {
        let bad = |lo: f64, hi: f64| !lo.is_finite() || !hi.is_finite() || lo >= hi;
        bad(self.min_budget, self.max_budget)
            || bad(self.min_revenue, self.max_revenue)
            || self.min_year > self.max_year
    }
}

/// One aggregated 11-year window of movies.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DecadeRecord {
    pub start_year: Year,
    pub average_rating: f64,
    pub budget: f64,
    pub revenue: f64,
    #[serde(default)]
    pub genres: BTreeMap<String, f64>,
}

impl DecadeRecord {
    /// `"<start+1> - <start+11>"`.
    pub fn window_label(&self) -> String {
        let y = self.start_year.get();
        format!("{} - {}", y + 1, y + 11)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ChartData {
    pub meta: ChartMeta,
    pub data: Vec<DecadeRecord>,
}

impl ChartData {
    /// Merge the records document (JSON array) with the metadata document (JSON object).
    pub fn from_documents(data_json: &str, meta_json: &str) -> ChartResult<Self> {
        let data: Vec<DecadeRecord> = serde_json::from_str(data_json)?;
        let meta: ChartMeta = serde_json::from_str(meta_json)?;
        Ok(Self { meta, data })
    }

    pub fn load(data_path: impl AsRef<Path>, meta_path: impl AsRef<Path>) -> ChartResult<Self> {
        let read = |p: &Path| std::fs::read_to_string(p).map_err(|e| ChartError::io(p, e));
        let data_json = read(data_path.as_ref())?;
        let meta_json = read(meta_path.as_ref())?;
        Self::from_documents(&data_json, &meta_json)
    }
}

/// Screen margins, in pixels.
/// Contract: all fields are non-negative.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Margin {
    pub top: u32,
    pub right: u32,
    pub bottom: u32,
    pub left: u32,
}

impl Margin {
    pub const fn new(top: u32, right: u32, bottom: u32, left: u32) -> Self {
        Self { top, right, bottom, left }
    }
    pub const fn uniform(px: u32) -> Self {
        Self::new(px, px, px, px)
    }
    /// Total horizontal margin (left + right).
    pub const fn hsum(&self) -> u32 { self.left + self.right }
    /// Total vertical margin (top + bottom).
    pub const fn vsum(&self) -> u32 { self.top + self.bottom }
}

impl Default for Margin {
    fn default() -> Self {
        Self::uniform(50)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartDimensions {
    pub width: u32,
    pub height: u32,
    pub margin: Margin,
}

impl ChartDimensions {
    pub const fn new(width: u32, height: u32, margin: Margin) -> Self {
        Self { width, height, margin }
    }

    /// The size the published page renders at.
    pub const fn page_default() -> Self {
        Self::new(2400, 1200, Margin::uniform(50))
    }

    /// Height of the plot band: `height - top - bottom`, may be negative.
    pub fn inner_height(&self) -> f64 {
        self.height as f64 - self.margin.vsum() as f64
    }

    pub fn x_range(&self) -> (f64, f64) {
        (self.margin.left as f64, self.width as f64 - self.margin.right as f64)
    }
}

impl Default for ChartDimensions {
    fn default() -> Self {
        Self::page_default()
    }
}
