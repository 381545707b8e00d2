//! Thousands-separator formatting for converted amounts.

use crate::amount::Amount;

/// Insert a comma between every group of three digits in the integer part.
///
/// The string is split on its first period; the fractional suffix is
/// reattached unchanged. No comma is ever placed in front of the first digit.
///
/// ```
/// assert_eq!(fxquote_fx::add_commas("1234567890.12"), "1,234,567,890.12");
/// assert_eq!(fxquote_fx::add_commas("0.00"), "0.00");
/// ```
pub fn add_commas(num_str: &str) -> String {
    let (int_part, frac_part) = match num_str.split_once('.') {
        Some((int, frac)) => (int, Some(frac)),
        None => (num_str, None),
    };

    let len = int_part.chars().count();
    let mut formatted = String::with_capacity(num_str.len() + len / 3);
    for (i, c) in int_part.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            formatted.push(',');
        }
        formatted.push(c);
    }

    if let Some(frac) = frac_part {
        formatted.push('.');
        formatted.push_str(frac);
    }

    formatted
}

/// Render `value` with exactly two fraction digits and thousands separators.
///
/// The value is expected to be rounded to two places already.
pub fn format_amount(value: Amount) -> String {
    add_commas(&value.to_fixed(2))
}
