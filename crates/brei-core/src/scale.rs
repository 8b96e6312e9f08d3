//! Portion scaling.
//!
//! Malformed input is never rejected here: a portion count that is missing,
//! unparsable or not positive counts as one portion, and a per-portion
//! quantity under the same conditions counts as zero.

/// Portion count used when the input is unusable.
pub const DEFAULT_PORTIONS: f64 = 1.0;

/// Per-portion quantity used when the input is unusable.
pub const DEFAULT_QUANTITY: f64 = 0.0;

/// Scale a per-portion quantity to a total for `portions` portions,
/// rounded to one decimal place.
///
/// Totals too large for `f64` saturate at `f64::MAX`.
pub fn scale(per_portion: f64, portions: f64) -> f64 {
    let per_portion = sanitize(per_portion, DEFAULT_QUANTITY);
    let portions = sanitize(portions, DEFAULT_PORTIONS);
    let total = per_portion * portions;
    if total.is_finite() {
        round_one(total)
    } else {
        f64::MAX
    }
}

/// Same as [`scale`], but over raw text as typed into a number field.
pub fn scale_raw(per_portion: &str, portions: &str) -> f64 {
    scale(parse_quantity(per_portion), parse_portions(portions))
}

/// Parse a portion count, falling back to [`DEFAULT_PORTIONS`].
pub fn parse_portions(raw: &str) -> f64 {
    parse_decimal(raw)
        .map(|v| sanitize(v, DEFAULT_PORTIONS))
        .unwrap_or(DEFAULT_PORTIONS)
}

/// Parse a per-portion quantity, falling back to [`DEFAULT_QUANTITY`].
pub fn parse_quantity(raw: &str) -> f64 {
    parse_decimal(raw)
        .map(|v| sanitize(v, DEFAULT_QUANTITY))
        .unwrap_or(DEFAULT_QUANTITY)
}

/// Render a total the way it is displayed: exactly one decimal.
///
/// Rounds the exact binary value, so 0.15 (stored as 0.1499...) shows as
/// "0.1". Exact ties such as 7.25 round away from zero.
pub fn format_total(value: f64) -> String {
    let quarters = value * 4.0;
    let is_tie = quarters.fract() == 0.0 && (value * 2.0).fract() != 0.0;
    if is_tie {
        format!("{:.1}", (value * 10.0).round() / 10.0)
    } else {
        format!("{:.1}", value)
    }
}

fn round_one(value: f64) -> f64 {
    format_total(value).parse().unwrap_or(value)
}

fn sanitize(value: f64, fallback: f64) -> f64 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        fallback
    }
}

/// Lenient decimal parsing: skips leading whitespace and reads the longest
/// numeric prefix, so "12g" is 12 and "abc" is `None`.
pub fn parse_decimal(raw: &str) -> Option<f64> {
    let s = raw.trim_start();
    let bytes = s.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        end += 1;
    }

    let int_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    let mut digits = end - int_start;

    if end < bytes.len() && bytes[end] == b'.' {
        let frac_start = end + 1;
        let mut frac_end = frac_start;
        while frac_end < bytes.len() && bytes[frac_end].is_ascii_digit() {
            frac_end += 1;
        }
        digits += frac_end - frac_start;
        if digits > 0 {
            end = frac_end;
        }
    }

    if digits == 0 {
        return None;
    }

    // Exponent only counts when at least one digit follows it.
    if end < bytes.len() && (bytes[end] == b'e' || bytes[end] == b'E') {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+') | Some(b'-')) {
            exp_end += 1;
        }
        let exp_digits_start = exp_end;
        while exp_end < bytes.len() && bytes[exp_end].is_ascii_digit() {
            exp_end += 1;
        }
        if exp_end > exp_digits_start {
            end = exp_end;
        }
    }

    s[..end].parse::<f64>().ok()
}
