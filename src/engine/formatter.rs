/// Fractional digits kept in displayed results and ratios
pub const MAX_FRACTION_DIGITS: usize = 6;

/// Format a number for display, en-US style.
///
/// At most six fractional digits, no forced minimum, and the integer part
/// grouped with commas: `1234.5` becomes `"1,234.5"`. Rounding is done by the
/// standard formatter on the exact binary value (ties go to even), so a typed
/// decimal ending in 5 at the seventh place can round down when its binary
/// form sits just below the tie: `0.0000005` shows as `"0"`. A value that
/// rounds to zero is shown as `"0"`, never `"-0"`.
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        let infinity = if value.is_sign_positive() { "∞" } else { "-∞" };
        return infinity.to_string();
    }

    let fixed = format!("{:.*}", MAX_FRACTION_DIGITS, value.abs());
    let (integer, fraction) = fixed.split_once('.').unwrap_or((fixed.as_str(), ""));
    let fraction = fraction.trim_end_matches('0');
    let is_zero = fraction.is_empty() && integer.bytes().all(|b| b == b'0');

    let mut out = String::with_capacity(fixed.len() + integer.len() / 3 + 1);
    if value.is_sign_negative() && !is_zero {
        out.push('-');
    }
    out.push_str(&group_thousands(integer));
    if !fraction.is_empty() {
        out.push('.');
        out.push_str(fraction);
    }
    out
}

fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
