//! Text admissibility and parsing shared by the numeric types.

use std::str::FromStr;
use std::sync::OnceLock;

use regex::Regex;
use bigdecimal::BigDecimal;

fn leading_digit_rx() -> &'static Regex {
    static RX: OnceLock<Regex> = OnceLock::new();
    RX.get_or_init(|| Regex::new(r"\A\s*[+-]?\d").expect("static pattern"))
}

fn numeric_text_rx() -> &'static Regex {
    static RX: OnceLock<Regex> = OnceLock::new();
    RX.get_or_init(|| {
        Regex::new(r"\A[+-]?(\d+(\.\d*)?|\.\d+)([eE][+-]?\d+)?\z").expect("static pattern")
    })
}

/// Sign then digit, after optional leading whitespace.
pub(crate) fn has_leading_digit(text: &str) -> bool {
    leading_digit_rx().is_match(text)
}

/// Strips currency and grouping decoration (`$`, `,`, `_`, blanks) and
/// returns the remainder if it is a plain decimal literal.
pub(crate) fn numeric_text(text: &str) -> Option<String> {
    let stripped: String = text
        .chars()
        .filter(|c| !matches!(c, '$' | '€' | '£' | '¥' | ',' | '_') && !c.is_whitespace())
        .collect();
    numeric_text_rx().is_match(&stripped).then_some(stripped)
}

/// Integer prefix of `text`: optional sign then digits, ignoring the rest.
pub(crate) fn leading_integer(text: &str) -> Option<i64> {
    let text = text.trim_start();
    let (negative, digits) = match text.as_bytes().first() {
        Some(b'-') => (true, &text[1..]),
        Some(b'+') => (false, &text[1..]),
        _ => (false, text),
    };
    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    if end == 0 {
        return None;
    }
    let magnitude = &digits[..end];
    if negative {
        format!("-{}", magnitude).parse().ok()
    } else {
        magnitude.parse().ok()
    }
}

/// Fills in the digit a bare leading or trailing point leaves out
/// (`.5` to `0.5`, `3.` to `3.0`).
fn complete_mantissa(text: &str) -> String {
    let (mantissa, exponent) = match text.find(['e', 'E']) {
        Some(at) => text.split_at(at),
        None => (text, ""),
    };
    let (sign, digits) = match mantissa.strip_prefix(['+', '-']) {
        Some(rest) => mantissa.split_at(mantissa.len() - rest.len()),
        None => ("", mantissa),
    };
    let lead = if digits.starts_with('.') { "0" } else { "" };
    let trail = if digits.ends_with('.') { "0" } else { "" };
    format!("{}{}{}{}{}", sign, lead, digits, trail, exponent)
}

/// Exact decimal value of numeric text, at any magnitude or precision.
pub(crate) fn parse_decimal(text: &str) -> Option<BigDecimal> {
    let text = numeric_text(text)?;
    BigDecimal::from_str(&complete_mantissa(&text)).ok()
}

pub(crate) fn parse_float(text: &str) -> Option<f64> {
    numeric_text(text)?.parse().ok()
}

/// Decimal holding the shortest round-trip text of `value`.
pub(crate) fn decimal_from_f64(value: f64) -> Option<BigDecimal> {
    if !value.is_finite() {
        return None;
    }
    BigDecimal::from_str(&value.to_string()).ok()
}
