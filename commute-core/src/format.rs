//! Rupee formatting for reports.
//!
//! Amounts are grouped the Indian way: the last three digits, then pairs
//! (`₹12,34,567`). The compact form switches to crore, lakh and thousand
//! suffixes at 10,000,000, 100,000 and 1,000 respectively.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::calculations::common::round_half_up_to;

pub const RUPEE: &str = "₹";

const CRORE: Decimal = dec!(10000000);
const LAKH: Decimal = dec!(100000);
const THOUSAND: Decimal = dec!(1000);

/// Whole-rupee amount with Indian digit grouping.
///
/// ```
/// use rust_decimal_macros::dec;
/// use commute_core::format::format_currency;
///
/// assert_eq!(format_currency(dec!(1234567)), "₹12,34,567");
/// assert_eq!(format_currency(dec!(13989.17)), "₹13,989");
/// assert_eq!(format_currency(dec!(-1234)), "-₹1,234");
/// ```
pub fn format_currency(amount: Decimal) -> String {
    let (sign, digits) = rounded_parts(amount);
    format!("{sign}{RUPEE}{digits}")
}

/// Like [`format_currency`] without the rupee sign, for distances and
/// other plain quantities.
///
/// ```
/// use rust_decimal_macros::dec;
/// use commute_core::format::format_number;
///
/// assert_eq!(format_number(dec!(7800)), "7,800");
/// assert_eq!(format_number(dec!(-100000)), "-1,00,000");
/// ```
pub fn format_number(amount: Decimal) -> String {
    let (sign, digits) = rounded_parts(amount);
    format!("{sign}{digits}")
}

/// Short form used in lists and headlines.
///
/// ```
/// use rust_decimal_macros::dec;
/// use commute_core::format::format_currency_compact;
///
/// assert_eq!(format_currency_compact(dec!(25000000)), "₹2.5Cr");
/// assert_eq!(format_currency_compact(dec!(167870)), "₹1.7L");
/// assert_eq!(format_currency_compact(dec!(13989.17)), "₹14K");
/// assert_eq!(format_currency_compact(dec!(640)), "₹640");
/// ```
pub fn format_currency_compact(amount: Decimal) -> String {
    if amount >= CRORE {
        format!("{RUPEE}{}Cr", format_decimal(amount / CRORE, 1))
    } else if amount >= LAKH {
        format!("{RUPEE}{}L", format_decimal(amount / LAKH, 1))
    } else if amount >= THOUSAND {
        format!("{RUPEE}{}K", format_decimal(amount / THOUSAND, 0))
    } else {
        format_currency(amount)
    }
}

/// Formats with exactly `dp` decimal places, rounding half away from zero.
///
/// ```
/// use rust_decimal_macros::dec;
/// use commute_core::format::format_decimal;
///
/// assert_eq!(format_decimal(dec!(10.8333), 1), "10.8");
/// assert_eq!(format_decimal(dec!(12), 1), "12.0");
/// ```
pub fn format_decimal(
    value: Decimal,
    dp: u32,
) -> String {
    let mut rounded = round_half_up_to(value, dp);
    rounded.rescale(dp);
    rounded.to_string()
}

/// Sign prefix and grouped whole-unit digits of `amount`.
fn rounded_parts(amount: Decimal) -> (&'static str, String) {
    let rounded = round_half_up_to(amount, 0);
    let sign = if rounded < Decimal::ZERO { "-" } else { "" };
    (sign, group_indian(&rounded.abs().trunc().to_string()))
}

fn group_indian(digits: &str) -> String {
    if digits.len() <= 3 {
        return digits.to_string();
    }

    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut groups = Vec::new();
    let mut rest = head;
    while rest.len() > 2 {
        let (left, right) = rest.split_at(rest.len() - 2);
        groups.push(right);
        rest = left;
    }
    groups.push(rest);
    groups.reverse();

    format!("{},{}", groups.join(","), tail)
}
