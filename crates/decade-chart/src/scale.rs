// File: crates/decade-chart/src/scale.rs
// Summary: Linear and time (calendar year) scales plus the chart's scale bundle.

use chrono::{Datelike, NaiveDate};

use crate::data::{ChartDimensions, ChartMeta, Year};
use crate::ticks::{nice_ticks, tick_step};

/// Years of padding added on both ends of the time domain.
pub const YEAR_PADDING: i32 = 10;

/// Linear map from `domain` to `range`. An empty domain maps everything to the range midpoint.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LinearScale {
    pub domain: (f64, f64),
    pub range: (f64, f64),
}

impl LinearScale {
    pub const fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self { domain, range }
    }

    #[inline]
    pub fn normalize(&self, v: f64) -> f64 {
        let span = self.domain.1 - self.domain.0;
        if span == 0.0 {
            return 0.5;
        }
        (v - self.domain.0) / span
    }

    #[inline]
    pub fn map(&self, v: f64) -> f64 {
        let t = self.normalize(v);
        self.range.0 + t * (self.range.1 - self.range.0)
    }

    #[inline]
    pub fn invert(&self, px: f64) -> f64 {
        let span = self.range.1 - self.range.0;
        if span == 0.0 {
            return self.domain.0;
        }
        self.domain.0 + (px - self.range.0) / span * (self.domain.1 - self.domain.0)
    }

    pub fn ticks(&self, count: usize) -> Vec<f64> {
        nice_ticks(self.domain.0, self.domain.1, count)
    }
}

/// Days since 0001-01-01 of Jan 1 of `year`; falls back to mean year length outside chrono's range.
pub fn year_start_days(year: i32) -> f64 {
    NaiveDate::from_ymd_opt(year, 1, 1)
        .map(|d| d.num_days_from_ce() as f64)
        .unwrap_or(year as f64 * 365.2425)
}

/// Horizontal time scale over calendar days, addressed by year.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TimeScale {
    pub start: Year,
    pub end: Year,
    days: LinearScale,
}

impl TimeScale {
    /// Domain runs from Jan 1 of `start` to Jan 1 of `end`.
    pub fn new(start: Year, end: Year, range: (f64, f64)) -> Self {
        let days = LinearScale::new((year_start_days(start.get()), year_start_days(end.get())), range);
        Self { start, end, days }
    }

    /// Pads `[min, max]` by [`YEAR_PADDING`] years on each side.
    pub fn padded(min: Year, max: Year, range: (f64, f64)) -> Self {
        Self::new(
            Year(min.get().saturating_sub(YEAR_PADDING)),
            Year(max.get().saturating_add(YEAR_PADDING)),
            range,
        )
    }

    #[inline]
    pub fn map_year(&self, year: Year) -> f64 {
        self.days.map(year_start_days(year.get()))
    }

    pub fn map_date(&self, date: NaiveDate) -> f64 {
        self.days.map(date.num_days_from_ce() as f64)
    }

    pub fn range(&self) -> (f64, f64) {
        self.days.range
    }

    /// Jan 1 of each year that is a multiple of the nice year step inside the domain.
    pub fn year_ticks(&self, count: usize) -> Vec<Year> {
        let (lo, hi) = if self.start <= self.end { (self.start.get(), self.end.get()) } else { (self.end.get(), self.start.get()) };
        if lo == hi || count == 0 {
            return vec![Year(lo)];
        }
        let step = tick_step(lo as f64, hi as f64, count).abs().max(1.0).round() as i64;
        let first = (lo as f64 / step as f64).ceil() as i64 * step;
        // i64 keeps `first` and the range end exact for years near i32::MAX
        (first..=i64::from(hi))
            .step_by(step as usize)
            .filter_map(|y| i32::try_from(y).ok())
            .map(Year)
            .collect()
    }
}

/// `(v - lo) / (hi - lo)`; 0 when the bounds are equal or anything is non-finite.
pub fn relative(v: f64, lo: f64, hi: f64) -> f64 {
    let r = (v - lo) / (hi - lo);
    if r.is_finite() { r } else { 0.0 }
}

/// Rating values shown on the vertical axis.
pub const RATING_DOMAIN: (f64, f64) = (0.0, 10.0);

/// Everything the draw pass needs to place records.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ChartScales {
    pub time: TimeScale,
    pub rating: LinearScale,
    pub meta: ChartMeta,
}

impl ChartScales {
    pub fn build(meta: &ChartMeta, dims: &ChartDimensions) -> Self {
        if meta.is_degenerate() {
            tracing::warn!(?meta, "degenerate metadata bounds; markers fall back to zero size");
        }
        let time = TimeScale::padded(meta.min_year, meta.max_year, dims.x_range());
        let rating = LinearScale::new(RATING_DOMAIN, (dims.inner_height(), 0.0));
        Self { time, rating, meta: *meta }
    }

    pub fn point(&self, year: Year, rating: f64) -> (f64, f64) {
        (self.time.map_year(year), self.rating.map(rating))
    }

    pub fn relative_budget(&self, budget: f64) -> f64 {
        relative(budget, self.meta.min_budget, self.meta.max_budget)
    }

    pub fn relative_revenue(&self, revenue: f64) -> f64 {
        relative(revenue, self.meta.min_revenue, self.meta.max_revenue)
    }
}
