// File: crates/decade-chart/tests/tooltip.rs
// Purpose: Tooltip text formatting and the fade/move/leave state of the shared tooltip.

mod common;

use std::time::Duration;

use decade_chart::format::{grouped, one_decimal};
use decade_chart::tooltip::INITIAL_STYLE;
use decade_chart::{Tooltip, TooltipContent};

fn ms(v: u64) -> Duration {
    Duration::from_millis(v)
}

#[test]
fn content_lines_are_formatted() {
    let record = common::record(1990, 7.456, 1_234_567.0, 9_876_543.0);
    let content = TooltipContent::for_record(&record);
    assert_eq!(content.lines, ["Budget: $1,234,567", "Revenue: $9,876,543", "Rating: 7.5"]);
}

#[test]
fn grouping_rounds_half_up() {
    assert_eq!(grouped(0.0), "0");
    assert_eq!(grouped(999.5), "1,000");
    assert_eq!(grouped(1_000_000.0), "1,000,000");
    assert_eq!(grouped(-1_234.0), "-1,234");
    assert_eq!(grouped(f64::NAN), "0");
    assert_eq!(one_decimal(6.0), "6.0");
}

#[test]
fn one_decimal_rounds_exact_ties_up() {
    assert_eq!(one_decimal(6.25), "6.3");
    assert_eq!(one_decimal(0.25), "0.3");
    assert_eq!(one_decimal(0.15), "0.1");
    assert_eq!(one_decimal(7.456), "7.5");
    assert_eq!(one_decimal(9.95), "9.9");
    assert_eq!(one_decimal(9.96), "10.0");
    assert_eq!(one_decimal(-6.25), "-6.3");
    assert_eq!(one_decimal(0.0), "0.0");

    let content = TooltipContent::for_record(&common::record(1990, 6.25, 10.0, 20.0));
    assert_eq!(content.lines[2], "Rating: 6.3");
}

#[test]
fn starts_hidden_with_initial_style() {
    let tip = Tooltip::new();
    assert!(!tip.is_visible(ms(0)));
    assert_eq!(tip.style_at(ms(0)), INITIAL_STYLE);
}

#[test]
fn hover_fades_in_over_200ms() {
    let mut tip = Tooltip::new();
    let content = TooltipContent::for_record(&common::record(1990, 6.1, 10.0, 20.0));
    tip.hover(content, ms(1_000));
    assert_eq!(tip.opacity_at(ms(1_000)), 0.0);
    assert!((tip.opacity_at(ms(1_100)) - 0.5).abs() < 1e-9);
    assert_eq!(tip.opacity_at(ms(1_200)), 1.0);
    assert_eq!(tip.opacity_at(ms(5_000)), 1.0);
    assert_eq!(tip.lines().len(), 3);
}

#[test]
fn follows_cursor_with_offset() {
    let mut tip = Tooltip::new();
    tip.move_to(300.0, 120.0);
    assert_eq!(tip.position(), (290.0, 150.0));
}

#[test]
fn leave_hides_and_clears() {
    let mut tip = Tooltip::new();
    tip.hover(TooltipContent { lines: vec!["x".into()] }, ms(0));
    tip.leave();
    assert_eq!(tip.opacity_at(ms(50)), 0.0);
    assert!(tip.lines().is_empty());
    assert!(!tip.is_visible(ms(500)));
}

#[test]
fn rehover_replaces_lines() {
    let mut tip = Tooltip::new();
    tip.hover(TooltipContent { lines: vec!["a".into()] }, ms(0));
    tip.hover(TooltipContent { lines: vec!["b".into(), "c".into()] }, ms(300));
    assert_eq!(tip.lines(), ["b", "c"]);
    // already opaque, stays opaque
    assert_eq!(tip.opacity_at(ms(300)), 1.0);
}
