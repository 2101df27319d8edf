// File: crates/decade-chart/tests/ticks.rs
// Purpose: Nice tick selection and pixel offsets for linear axes.

use decade_chart::ticks::{compute_ticks, format_tick, nice_ticks, target_count, tick_step};

#[test]
fn ticks_stay_inside_domain_and_range() {
    let cases = [
        ((0.0, 10.0), (0.0, 300.0)),
        ((0.0, 1.0), (20.0, 500.0)),
        ((-3.7, 12.2), (0.0, 90.0)),
        ((1910.0, 2030.0), (50.0, 2350.0)),
        ((0.001, 0.004), (0.0, 31.0)),
    ];
    for ((a, b), (c, d)) in cases {
        let ticks = compute_ticks((a, b), (c, d));
        assert!(!ticks.is_empty(), "no ticks for [{a}, {b}]");
        for w in ticks.windows(2) {
            assert!(w[0].value < w[1].value, "not ascending: {:?}", ticks);
        }
        for t in &ticks {
            assert!(t.value >= a - 1e-9 && t.value <= b + 1e-9, "{} outside [{a}, {b}]", t.value);
            assert!(t.offset >= c - 1e-9 && t.offset <= d + 1e-9, "{} outside [{c}, {d}]", t.offset);
        }
    }
}

#[test]
fn equal_domain_yields_single_tick() {
    let ticks = compute_ticks((5.0, 5.0), (0.0, 300.0));
    assert_eq!(ticks.len(), 1);
    assert_eq!(ticks[0].value, 5.0);
    assert_eq!(ticks[0].offset, 150.0);
}

#[test]
fn non_finite_domain_does_not_panic() {
    let ticks = compute_ticks((f64::NAN, 1.0), (0.0, 100.0));
    assert_eq!(ticks.len(), 1);
    assert_eq!(ticks[0].offset, 0.0);
}

#[test]
fn target_count_is_thirty_pixels_per_tick() {
    assert_eq!(target_count((0.0, 300.0)), 10);
    assert_eq!(target_count((300.0, 0.0)), 10);
    assert_eq!(target_count((0.0, 29.0)), 1);
    assert_eq!(target_count((0.0, 0.0)), 1);
}

#[test]
fn one_two_five_steps() {
    assert_eq!(nice_ticks(0.0, 10.0, 10), (0..=10).map(f64::from).collect::<Vec<_>>());
    assert_eq!(nice_ticks(0.0, 10.0, 5), vec![0.0, 2.0, 4.0, 6.0, 8.0, 10.0]);
    assert_eq!(nice_ticks(0.0, 10.0, 2), vec![0.0, 5.0, 10.0]);
    assert_eq!(nice_ticks(0.0, 1.0, 5), vec![0.0, 0.2, 0.4, 0.6, 0.8, 1.0]);
    assert_eq!(tick_step(1900.0, 2020.0, 10), 10.0);
    assert_eq!(tick_step(2020.0, 1900.0, 10), -10.0);
}

#[test]
fn inverted_range_keeps_ascending_values() {
    // rating axis: 0 at the bottom (large y), 10 at the top
    let ticks = compute_ticks((0.0, 10.0), (300.0, 0.0));
    assert_eq!(ticks.first().map(|t| t.value), Some(0.0));
    assert_eq!(ticks.first().map(|t| t.offset), Some(300.0));
    assert_eq!(ticks.last().map(|t| t.offset), Some(0.0));
}

#[test]
fn labels_are_shortest_decimals() {
    assert_eq!(format_tick(1.0), "1");
    assert_eq!(format_tick(0.5), "0.5");
    assert_eq!(format_tick(-0.0), "0");
    assert_eq!(format_tick(2.25), "2.25");
}
