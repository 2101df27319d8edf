// File: crates/decade-chart/tests/scales.rs
// Purpose: Time/rating scale mapping and relative budget/revenue normalization.

mod common;

use decade_chart::scale::{relative, LinearScale, TimeScale};
use decade_chart::{ChartScales, Year};

#[test]
fn time_domain_is_padded_by_ten_years() {
    let scales = ChartScales::build(&common::meta(1970, 1990), &common::dims());
    assert_eq!(scales.time.start, Year(1960));
    assert_eq!(scales.time.end, Year(2000));
    assert_eq!(scales.time.map_year(Year(1960)), 50.0);
    assert_eq!(scales.time.map_year(Year(2000)), 750.0);
    // 1960..1980 and 1980..2000 both hold five leap years
    assert!((scales.time.map_year(Year(1980)) - 400.0).abs() < 1e-9);
}

#[test]
fn rating_axis_is_inverted() {
    let scales = ChartScales::build(&common::meta(1970, 1990), &common::dims());
    assert_eq!(scales.rating.map(0.0), 500.0);
    assert_eq!(scales.rating.map(10.0), 0.0);
    assert!((scales.rating.map(6.5) - 175.0).abs() < 1e-9);
}

#[test]
fn point_combines_both_scales() {
    let scales = ChartScales::build(&common::meta(1970, 1990), &common::dims());
    let (x, y) = scales.point(Year(1980), 5.0);
    assert!((x - 400.0).abs() < 1e-9);
    assert_eq!(y, 250.0);
}

#[test]
fn relative_values_hit_both_ends() {
    let scales = ChartScales::build(&common::meta(1970, 1990), &common::dims());
    assert_eq!(scales.relative_budget(100.0), 0.0);
    assert_eq!(scales.relative_budget(1100.0), 1.0);
    assert_eq!(scales.relative_revenue(5_000.0), 0.5);
}

#[test]
fn equal_bounds_fall_back_to_zero() {
    assert_eq!(relative(5.0, 3.0, 3.0), 0.0);
    assert_eq!(relative(f64::NAN, 0.0, 1.0), 0.0);
    assert_eq!(relative(2.0, 0.0, 4.0), 0.5);
}

#[test]
fn linear_scale_round_trips_through_invert() {
    let s = LinearScale::new((0.0, 10.0), (500.0, 0.0));
    for v in [0.0, 2.5, 7.1, 10.0] {
        assert!((s.invert(s.map(v)) - v).abs() < 1e-9);
    }
    assert_eq!(LinearScale::new((3.0, 3.0), (0.0, 100.0)).map(42.0), 50.0);
}

#[test]
fn year_ticks_are_whole_steps_inside_domain() {
    let time = TimeScale::padded(Year(1910), Year(2010), (50.0, 2350.0));
    let ticks = time.year_ticks(10);
    assert_eq!(ticks.first(), Some(&Year(1900)));
    assert_eq!(ticks.last(), Some(&Year(2020)));
    assert!(ticks.windows(2).all(|w| w[1].get() - w[0].get() == 10));

    let flat = TimeScale::new(Year(1990), Year(1990), (0.0, 10.0));
    assert_eq!(flat.year_ticks(10), vec![Year(1990)]);
}

#[test]
fn dates_inside_a_year_land_after_its_start() {
    use chrono::NaiveDate;

    let time = TimeScale::new(Year(1980), Year(1990), (0.0, 100.0));
    let mid = NaiveDate::from_ymd_opt(1985, 7, 1).expect("valid date");
    let x = time.map_date(mid);
    assert!(x > time.map_year(Year(1985)) && x < time.map_year(Year(1986)));
    assert_eq!(time.range(), (0.0, 100.0));
}

#[test]
fn linear_ticks_use_nice_steps() {
    let s = LinearScale::new((0.0, 10.0), (500.0, 0.0));
    assert_eq!(s.ticks(5), vec![0.0, 2.0, 4.0, 6.0, 8.0, 10.0]);
}

#[test]
fn year_ticks_near_the_top_of_the_year_range_terminate() {
    let time = TimeScale::padded(Year(i32::MAX - 40), Year(i32::MAX - 5), (0.0, 100.0));
    assert_eq!(time.end, Year(i32::MAX));
    let ticks = time.year_ticks(10);
    assert!(!ticks.is_empty());
    assert!(ticks.windows(2).all(|w| w[0] < w[1]));
    assert!(ticks.iter().all(|y| *y >= time.start && *y <= time.end));
}
