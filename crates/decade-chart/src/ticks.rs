// File: crates/decade-chart/src/ticks.rs
// Summary: "Nice" tick selection (1/2/5 steps) and pixel offsets for linear domains.

use crate::scale::LinearScale;

/// Pixels reserved per tick when the count is derived from the range length.
pub const PIXELS_PER_TICK: f64 = 30.0;

const E10: f64 = 7.0710678118654755; // sqrt(50)
const E5: f64 = 3.1622776601683795; // sqrt(10)
const E2: f64 = 1.4142135623730951; // sqrt(2)

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tick {
    pub value: f64,
    pub offset: f64,
}

/// Integer tick indices and increment. A negative increment means "divide by -inc".
fn tick_spec(start: f64, stop: f64, count: f64) -> (f64, f64, f64) {
    let step = (stop - start) / count.max(0.0);
    let power = step.log10().floor();
    let error = step / 10f64.powf(power);
    let factor = if error >= E10 {
        10.0
    } else if error >= E5 {
        5.0
    } else if error >= E2 {
        2.0
    } else {
        1.0
    };
    let (mut i1, mut i2, inc);
    if power < 0.0 {
        let base = 10f64.powf(-power) / factor;
        i1 = (start * base).round();
        i2 = (stop * base).round();
        if i1 / base < start { i1 += 1.0; }
        if i2 / base > stop { i2 -= 1.0; }
        inc = -base;
    } else {
        let base = 10f64.powf(power) * factor;
        i1 = (start / base).round();
        i2 = (stop / base).round();
        if i1 * base < start { i1 += 1.0; }
        if i2 * base > stop { i2 -= 1.0; }
        inc = base;
    }
    if i2 < i1 && (0.5..2.0).contains(&count) {
        return tick_spec(start, stop, count * 2.0);
    }
    (i1, i2, inc)
}

/// Nice tick values covering `[start, stop]`, ordered like the inputs.
pub fn nice_ticks(start: f64, stop: f64, count: usize) -> Vec<f64> {
    if count == 0 || !start.is_finite() || !stop.is_finite() {
        return Vec::new();
    }
    if start == stop {
        return vec![start];
    }
    let reverse = stop < start;
    let (lo, hi) = if reverse { (stop, start) } else { (start, stop) };
    let (i1, i2, inc) = tick_spec(lo, hi, count as f64);
    if i1.is_nan() || i2.is_nan() || i2 < i1 {
        return Vec::new();
    }
    let n = (i2 - i1) as usize + 1;
    let at = |i: f64| if inc < 0.0 { i / -inc } else { i * inc };
    let mut out: Vec<f64> = (0..n).map(|k| at(i1 + k as f64)).collect();
    if reverse {
        out.reverse();
    }
    out
}

/// Signed distance between adjacent nice ticks.
pub fn tick_step(start: f64, stop: f64, count: usize) -> f64 {
    let reverse = stop < start;
    let (lo, hi) = if reverse { (stop, start) } else { (start, stop) };
    let (_, _, inc) = tick_spec(lo, hi, count as f64);
    let step = if inc < 0.0 { 1.0 / -inc } else { inc };
    if reverse { -step } else { step }
}

/// Target tick count for a pixel range: one tick per [`PIXELS_PER_TICK`], at least one.
pub fn target_count(range: (f64, f64)) -> usize {
    let len = (range.1 - range.0).abs();
    if !len.is_finite() {
        return 1;
    }
    ((len / PIXELS_PER_TICK).floor() as usize).max(1)
}

/// Ticks for a linear mapping of `domain` onto `range`, ascending by value.
pub fn compute_ticks(domain: (f64, f64), range: (f64, f64)) -> Vec<Tick> {
    ticks_with_count(domain, range, target_count(range))
}

pub fn ticks_with_count(domain: (f64, f64), range: (f64, f64), count: usize) -> Vec<Tick> {
    if !domain.0.is_finite() || !domain.1.is_finite() {
        return vec![Tick { value: domain.0, offset: range.0 }];
    }
    let scale = LinearScale::new(domain, range);
    let mut values = nice_ticks(domain.0, domain.1, count.max(1));
    if values.is_empty() {
        values.push(domain.0.min(domain.1));
    }
    values.sort_by(f64::total_cmp);
    values
        .into_iter()
        .map(|value| Tick { value, offset: scale.map(value) })
        .collect()
}

/// Shortest decimal rendering of a tick value (`1`, `0.5`, `-2.25`).
pub fn format_tick(value: f64) -> String {
    if value == 0.0 {
        return "0".to_string();
    }
    format!("{value}")
}
