use crate::format::locale::NumberSymbols;
use crate::validators::value::number_text;

/// Upper bound on fraction digits, matching the widest fixed-point rendering
/// callers can ask for.
pub const MAX_DECIMALS: usize = 100;

// The exact expansion of any finite f64 needs at most 1074 fraction digits.
const EXACT_DIGITS: usize = 1100;

/// Fixed-point text for `value` with exactly `decimals` fraction digits.
///
/// Rounds the exact binary value half away from zero, so `2.5` gives `"3"` at
/// zero decimals while `1.005` gives `"1.00"` at two (its stored value sits just
/// below the midpoint). A negative value keeps its `-` even when it rounds to
/// zero. Magnitudes of `1e21` and above are not expanded and print in exponent
/// form instead.
pub fn to_fixed(value: f64, decimals: usize) -> String {
    if let Some(special) = unexpanded_text(value) {
        return special;
    }
    let (int_digits, frac_digits) = fixed_parts(value.abs(), decimals);
    let sign = if value < 0.0 { "-" } else { "" };
    if frac_digits.is_empty() {
        format!("{}{}", sign, int_digits)
    } else {
        format!("{}{}.{}", sign, int_digits, frac_digits)
    }
}

/// Locale-grouped text for `value` with exactly `decimals` fraction digits.
pub fn format_grouped(value: f64, decimals: usize, symbols: NumberSymbols) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "∞" } else { "-∞" }.to_string();
    }
    let (int_digits, frac_digits) = fixed_parts(value.abs(), decimals);
    let sign = if value < 0.0 { "-" } else { "" };
    let grouped = group_digits(&int_digits, symbols.group);
    if frac_digits.is_empty() {
        format!("{}{}", sign, grouped)
    } else {
        format!("{}{}{}{}", sign, grouped, symbols.decimal, frac_digits)
    }
}

/// Number with en-US grouping and a fixed number of decimals (default 0).
pub fn format_number(value: f64, decimals: Option<usize>) -> String {
    format_grouped(value, decimals.unwrap_or(0), NumberSymbols::EN_US)
}

/// `value` as a percentage with `decimals` fraction digits (default 1).
///
/// The value is already in percent: `12.345` renders as `"12.3%"`.
pub fn format_percentage(value: f64, decimals: Option<usize>) -> String {
    format!("{}%", to_fixed(value, decimals.unwrap_or(1)))
}

/// Abbreviates thousands and millions with `K` and `M`.
///
/// Magnitudes below one thousand are printed as-is.
pub fn format_compact(value: f64) -> String {
    match compact_parts(value) {
        Some((scaled, suffix)) => format!("{}{}", scaled, suffix),
        None => number_text(value),
    }
}

/// The scaled one-decimal text and suffix for a compactable value.
pub(crate) fn compact_parts(value: f64) -> Option<(String, char)> {
    if value.abs() >= 1_000_000.0 {
        Some((to_fixed(value / 1_000_000.0, 1), 'M'))
    } else if value.abs() >= 1_000.0 {
        Some((to_fixed(value / 1_000.0, 1), 'K'))
    } else {
        None
    }
}

fn unexpanded_text(value: f64) -> Option<String> {
    if value.is_finite() && value.abs() < 1e21 {
        None
    } else {
        Some(number_text(value))
    }
}

/// Integer and fraction digits of a non-negative finite `magnitude`, rounded
/// half away from zero on its exact decimal expansion.
fn fixed_parts(magnitude: f64, decimals: usize) -> (String, String) {
    let decimals = decimals.min(MAX_DECIMALS);
    let exact = format!("{:.*}", EXACT_DIGITS, magnitude);
    let (int_part, frac_part) = exact.split_once('.').unwrap_or((exact.as_str(), ""));

    let mut digits: Vec<u8> = int_part
        .bytes()
        .chain(frac_part.bytes().take(decimals))
        .collect();
    let round_up = frac_part
        .as_bytes()
        .get(decimals)
        .is_some_and(|&d| d >= b'5');

    if round_up {
        let mut carry = true;
        for d in digits.iter_mut().rev() {
            if *d == b'9' {
                *d = b'0';
            } else {
                *d += 1;
                carry = false;
                break;
            }
        }
        if carry {
            digits.insert(0, b'1');
        }
    }

    let split = digits.len() - decimals;
    let frac_digits = digits.split_off(split);
    (
        String::from_utf8_lossy(&digits).into_owned(),
        String::from_utf8_lossy(&frac_digits).into_owned(),
    )
}

fn group_digits(digits: &str, separator: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3 * separator.len());
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push_str(separator);
        }
        out.push(c);
    }
    out
}
