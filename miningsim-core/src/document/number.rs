// Decimal exponents outside this range switch to scientific notation.
const FIXED_EXPONENTS: std::ops::Range<i32> = -4..16;

/// Formats a float the way the statistics documents expect: shortest
/// round-trip digits, whole numbers keep a `.0` suffix (`5.0`, not `5`), and
/// very small or very large magnitudes use a signed two-digit exponent
/// (`1e-05`, `1.5e+16`).
pub fn format_decimal(value: f64) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "inf" } else { "-inf" }.to_string();
    }

    // `{:e}` yields the shortest round-trip mantissa, e.g. "1.5e16".
    let scientific = format!("{value:e}");
    let Some((mantissa, exponent)) = scientific
        .split_once('e')
        .and_then(|(m, e)| Some((m, e.parse::<i32>().ok()?)))
    else {
        return format!("{value}");
    };

    if !FIXED_EXPONENTS.contains(&exponent) {
        let sign = if exponent < 0 { '-' } else { '+' };
        return format!("{mantissa}e{sign}{:02}", exponent.abs());
    }

    if value.fract() == 0.0 {
        format!("{value:.1}")
    } else {
        format!("{value}")
    }
}
