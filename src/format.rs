//! USD and Number Formatting
//!
//! en-US display strings for prices, balances and amounts, matching the
//! browser's locale formatter (`Intl.NumberFormat("en-US")`):
//!   - `$1,234.50` / `-$1,234.50` for USD (always two fraction digits)
//!   - `1,234,567.891` for plain numbers (at most N fraction digits, no padding)
//!
//! Rounding runs on the shortest round-trip decimal form of the float,
//! half away from zero. That is why `1.005` renders as `1.01` here even
//! though its binary value sits just below the midpoint.
//! Non-finite values come out as `NaN` / `∞` / `-∞`.

use crate::error::{DisplayError, Result};
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thousands::Separable;

/// USD minor units (ISO 4217)
const USD_FRACTION_DIGITS: u32 = 2;

const INFINITY_SYMBOL: &str = "∞";

/// Maximum fraction digits for plain number formatting (0..=20)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct FractionDigits(u8);

impl FractionDigits {
    /// Pre-ES2023 `Intl.NumberFormat` limit. Newer engines accept up to 100,
    /// but 20 keeps every rounded literal inside Decimal's 28-digit scale.
    pub const MAX: u8 = 20;

    pub const DEFAULT: FractionDigits = FractionDigits(5);

    pub fn new(digits: u32) -> Result<Self> {
        if digits > u32::from(Self::MAX) {
            return Err(DisplayError::FractionDigitsOutOfRange {
                value: digits,
                max: Self::MAX,
            });
        }
        Ok(Self(digits as u8))
    }

    pub fn get(self) -> u32 {
        u32::from(self.0)
    }
}

impl Default for FractionDigits {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl TryFrom<u32> for FractionDigits {
    type Error = DisplayError;

    fn try_from(digits: u32) -> Result<Self> {
        Self::new(digits)
    }
}

impl From<FractionDigits> for u32 {
    fn from(digits: FractionDigits) -> Self {
        digits.get()
    }
}

/// Format a value as US dollars: `$1,234.50`, `-$0.99`, `$NaN`, `$∞`
pub fn format_usd(value: f64) -> String {
    if value.is_nan() {
        return "$NaN".to_string();
    }
    let sign = sign_prefix(value);
    if value.is_infinite() {
        return format!("{sign}${INFINITY_SYMBOL}");
    }

    let (int_digits, mut frac_digits) = round_half_expand(value.abs(), USD_FRACTION_DIGITS);
    while frac_digits.len() < USD_FRACTION_DIGITS as usize {
        frac_digits.push('0');
    }

    format!("{sign}${}.{frac_digits}", int_digits.separate_with_commas())
}

/// Format a value as an en-US grouped decimal with at most
/// `max_fraction_digits` digits after the point. Trailing zeros are dropped.
pub fn format_number(value: f64, max_fraction_digits: FractionDigits) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    let sign = sign_prefix(value);
    if value.is_infinite() {
        return format!("{sign}{INFINITY_SYMBOL}");
    }

    let (int_digits, frac_digits) = round_half_expand(value.abs(), max_fraction_digits.get());
    let frac_digits = frac_digits.trim_end_matches('0');
    let grouped = int_digits.separate_with_commas();

    if frac_digits.is_empty() {
        format!("{sign}{grouped}")
    } else {
        format!("{sign}{grouped}.{frac_digits}")
    }
}

/// Negative zero and negatives that round to zero keep their minus sign
fn sign_prefix(value: f64) -> &'static str {
    if value.is_sign_negative() {
        "-"
    } else {
        ""
    }
}

/// Round a finite, non-negative value to at most `scale` fraction digits.
///
/// Returns the integer digits and the fraction digits separately (fraction
/// may be shorter than `scale`, or empty).
fn round_half_expand(magnitude: f64, scale: u32) -> (String, String) {
    let shortest = magnitude.to_string();
    let Some((int_part, frac_part)) = shortest.split_once('.') else {
        // Integral floats print without a point, at any magnitude
        return (shortest, String::new());
    };

    // Half-away-from-zero only looks at the first digit past `scale`.
    // Cutting there also keeps the literal inside Decimal's 28 digits.
    let keep = frac_part.len().min(scale as usize + 1);
    let literal = format!("{int_part}.{}", &frac_part[..keep]);

    let rounded = match Decimal::from_str(&literal) {
        Ok(d) => d
            .round_dp_with_strategy(scale, RoundingStrategy::MidpointAwayFromZero)
            .to_string(),
        Err(_) => literal,
    };

    match rounded.split_once('.') {
        Some((int_digits, frac_digits)) => (int_digits.to_string(), frac_digits.to_string()),
        None => (rounded, String::new()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn digits(n: u32) -> FractionDigits {
        FractionDigits::new(n).unwrap()
    }

    #[test]
    fn test_format_usd_basic() {
        assert_eq!(format_usd(1234.5), "$1,234.50");
        assert_eq!(format_usd(0.0), "$0.00");
        assert_eq!(format_usd(12.0), "$12.00");
        assert_eq!(format_usd(1_000_000.0), "$1,000,000.00");
    }

    #[test]
    fn test_format_usd_negative() {
        assert_eq!(format_usd(-1234.5), "-$1,234.50");
        assert_eq!(format_usd(-0.0), "-$0.00");
        assert_eq!(format_usd(-0.001), "-$0.00");
    }

    #[test]
    fn test_format_usd_rounding() {
        assert_eq!(format_usd(0.005), "$0.01");
        assert_eq!(format_usd(1.005), "$1.01");
        assert_eq!(format_usd(0.004), "$0.00");
        assert_eq!(format_usd(999.995), "$1,000.00");
    }

    #[test]
    fn test_format_usd_large() {
        assert_eq!(format_usd(1e21), "$1,000,000,000,000,000,000,000.00");
    }

    #[test]
    fn test_format_usd_non_finite() {
        assert_eq!(format_usd(f64::NAN), "$NaN");
        assert_eq!(format_usd(f64::INFINITY), "$∞");
        assert_eq!(format_usd(f64::NEG_INFINITY), "-$∞");
    }

    #[test]
    fn test_format_number_fraction_digits() {
        assert_eq!(format_number(1.123456, digits(2)), "1.12");
        assert_eq!(format_number(1.123456, FractionDigits::default()), "1.12346");
        assert_eq!(format_number(1.5, digits(5)), "1.5");
        assert_eq!(format_number(12.0, digits(0)), "12");
        assert_eq!(format_number(2.5, digits(0)), "3");
        assert_eq!(format_number(1.005, digits(2)), "1.01");
    }

    #[test]
    fn test_format_number_grouping() {
        assert_eq!(format_number(1234567.891, FractionDigits::default()), "1,234,567.891");
        assert_eq!(format_number(999.9999999, digits(2)), "1,000");
        assert_eq!(
            format_number(1e21, FractionDigits::default()),
            "1,000,000,000,000,000,000,000"
        );
        assert_eq!(
            format_number(1.2345678901234568e29, FractionDigits::default()),
            "123,456,789,012,345,680,000,000,000,000"
        );
    }

    #[test]
    fn test_format_number_small_values() {
        assert_eq!(format_number(0.000001, FractionDigits::default()), "0");
        assert_eq!(format_number(-0.000001, FractionDigits::default()), "-0");
        assert_eq!(format_number(1e-7, digits(20)), "0.0000001");
        assert_eq!(format_number(0.1 + 0.2, digits(20)), "0.30000000000000004");
        assert_eq!(format_number(5e-324, digits(20)), "0");
    }

    #[test]
    fn test_format_number_signs_and_non_finite() {
        assert_eq!(format_number(-0.0, FractionDigits::default()), "-0");
        assert_eq!(format_number(-1234.5, FractionDigits::default()), "-1,234.5");
        assert_eq!(format_number(f64::NAN, FractionDigits::default()), "NaN");
        assert_eq!(format_number(f64::INFINITY, FractionDigits::default()), "∞");
        assert_eq!(format_number(f64::NEG_INFINITY, FractionDigits::default()), "-∞");
    }

    #[test]
    fn test_fraction_digits_range() {
        assert_eq!(FractionDigits::default().get(), 5);
        assert_eq!(FractionDigits::new(20).map(FractionDigits::get), Ok(20));
        assert_eq!(
            FractionDigits::new(21),
            Err(DisplayError::FractionDigitsOutOfRange { value: 21, max: 20 })
        );
    }
}
