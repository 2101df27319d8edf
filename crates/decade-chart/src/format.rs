// File: crates/decade-chart/src/format.rs
// Summary: Number formatting for tooltip text.

/// Round half up (toward +inf) and group thousands with commas: `1234567.4` -> `1,234,567`.
pub fn grouped(value: f64) -> String {
    if !value.is_finite() {
        return "0".to_string();
    }
    let rounded = (value + 0.5).floor();
    let negative = rounded < 0.0;
    let digits = format!("{:.0}", rounded.abs());

    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if negative {
        out.push('-');
    }
    let lead = digits.len() % 3;
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (i + 3 - lead) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Fixed one decimal place, ties away from zero on the exact binary value:
/// `7.456` -> `7.5`, `6.25` -> `6.3`, `0.15` (stored as 0.1499..) -> `0.1`.
pub fn one_decimal(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    // enough digits that the expansion is exact where it decides the rounding
    let exact = format!("{:.30}", value.abs());
    let (int_part, frac) = exact.split_once('.').unwrap_or((exact.as_str(), ""));
    let mut digits: Vec<u8> = int_part.bytes().chain(frac.bytes().take(1)).map(|b| b - b'0').collect();
    if frac.is_empty() {
        digits.push(0);
    }
    if frac.as_bytes().get(1).is_some_and(|&d| d >= b'5') {
        let mut i = digits.len();
        loop {
            if i == 0 {
                digits.insert(0, 1);
                break;
            }
            i -= 1;
            if digits[i] == 9 {
                digits[i] = 0;
            } else {
                digits[i] += 1;
                break;
            }
        }
    }

    let split = digits.len() - 1;
    let mut out = String::with_capacity(digits.len() + 2);
    if value < 0.0 {
        out.push('-');
    }
    out.extend(digits[..split].iter().map(|d| char::from(b'0' + d)));
    out.push('.');
    out.push(char::from(b'0' + digits[split]));
    out
}
