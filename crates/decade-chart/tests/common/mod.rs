// File: crates/decade-chart/tests/common/mod.rs
// Purpose: Small deterministic datasets shared by the integration tests.

#![allow(dead_code)]

use std::collections::BTreeMap;

use decade_chart::{ChartData, ChartDimensions, ChartMeta, DecadeRecord, Margin, Year};

pub fn genres(pairs: &[(&str, f64)]) -> BTreeMap<String, f64> {
    pairs.iter().map(|(k, v)| (k.to_string(), *v)).collect()
}

pub fn record(start: i32, rating: f64, budget: f64, revenue: f64) -> DecadeRecord {
    DecadeRecord {
        start_year: Year(start),
        average_rating: rating,
        budget,
        revenue,
        genres: genres(&[("Drama", 400.0), ("Comedy", 225.0), ("Horror", 64.0)]),
    }
}

pub fn meta(min_year: i32, max_year: i32) -> ChartMeta {
    ChartMeta {
        min_budget: 100.0,
        max_budget: 1100.0,
        min_revenue: 1_000.0,
        max_revenue: 9_000.0,
        min_year: Year(min_year),
        max_year: Year(max_year),
    }
}

/// Three decades spanning the full budget/revenue bounds.
pub fn three_decades() -> ChartData {
    ChartData {
        meta: meta(1970, 1990),
        data: vec![
            record(1970, 6.5, 100.0, 1_000.0),
            record(1980, 6.2, 600.0, 5_000.0),
            record(1990, 7.1, 1100.0, 9_000.0),
        ],
    }
}

pub fn dims() -> ChartDimensions {
    ChartDimensions::new(800, 600, Margin::uniform(50))
}
