//! Pool APR Estimate
//!
//! Annualizes recent trading volume into fee revenue and expresses it as a
//! percentage of pool liquidity:
//!
//!   apr = (((volume / window_days) * days_per_year * fee_rate) / liquidity) * 100
//!
//! Defaults: 7-day volume window, 365-day year, 0.25% LP fee.
//!
//! The rendered string has two fixed fraction digits with the first ".00"
//! removed ("9.13", "2.50", "0"). Exponent forms for huge values are hit
//! too: "1.00375e+24" renders as "1375e+24". Zero liquidity is not guarded here and
//! yields "Infinity" or "NaN"; callers decide what to show instead.

use crate::error::{DisplayError, Result};
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

/// Fraction digits of the rendered APR
const APR_FRACTION_DIGITS: u32 = 2;

/// Magnitude from which fixed-point rendering switches to exponent form
const EXPONENT_THRESHOLD: f64 = 1e21;

/// Parameters of the APR estimate
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AprParams {
    /// Number of days the supplied volume covers
    pub volume_window_days: f64,
    pub days_per_year: f64,
    /// LP fee as a fraction (0.0025 = 0.25%)
    pub fee_rate: f64,
}

impl Default for AprParams {
    fn default() -> Self {
        Self {
            volume_window_days: 7.0,
            days_per_year: 365.0,
            fee_rate: 0.0025,
        }
    }
}

impl AprParams {
    /// Validated constructor. Window and year must be positive and finite,
    /// fee rate within [0, 1].
    pub fn new(volume_window_days: f64, days_per_year: f64, fee_rate: f64) -> Result<Self> {
        if !(volume_window_days.is_finite() && volume_window_days > 0.0) {
            return Err(DisplayError::InvalidAprParameter {
                name: "volume_window_days",
                value: volume_window_days,
            });
        }
        if !(days_per_year.is_finite() && days_per_year > 0.0) {
            return Err(DisplayError::InvalidAprParameter {
                name: "days_per_year",
                value: days_per_year,
            });
        }
        if !(0.0..=1.0).contains(&fee_rate) {
            return Err(DisplayError::InvalidAprParameter {
                name: "fee_rate",
                value: fee_rate,
            });
        }

        Ok(Self {
            volume_window_days,
            days_per_year,
            fee_rate,
        })
    }

    /// Raw APR in percent, before rendering
    pub fn apr_value(&self, volume: f64, liquidity: f64) -> f64 {
        let daily_volume = volume / self.volume_window_days;
        let fee_revenue = daily_volume * self.days_per_year * self.fee_rate;
        (fee_revenue / liquidity) * 100.0
    }

    /// Rendered APR, e.g. "9.13", "0", "Infinity"
    pub fn apr_string(&self, volume: f64, liquidity: f64) -> String {
        let fixed = to_fixed(self.apr_value(volume, liquidity), APR_FRACTION_DIGITS);
        // First ".00" anywhere, not only a suffix: exponent forms lose it
        // from the mantissa ("1.00375e+24" -> "1375e+24").
        fixed.replacen(".00", "", 1)
    }
}

/// APR string for 7-day `volume` against current `liquidity` at the 0.25% fee
pub fn get_apr(volume: f64, liquidity: f64) -> String {
    AprParams::default().apr_string(volume, liquidity)
}

/// Fixed-point rendering with `digits` fraction digits.
///
/// Rounds the exact binary value of `value`, ties away from zero. Magnitudes
/// of 1e21 and above fall back to shortest exponent form ("1.5e+22").
fn to_fixed(value: f64, digits: u32) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }

    let magnitude = value.abs();
    // Strictly negative only: -0.0 renders unsigned
    let sign = if value < 0.0 { "-" } else { "" };

    if magnitude >= EXPONENT_THRESHOLD {
        let exponent_form = format!("{magnitude:e}").replacen('e', "e+", 1);
        return format!("{sign}{exponent_form}");
    }

    let Some(exact) = Decimal::from_f64_retain(magnitude) else {
        return format!("{sign}{magnitude:.*}", digits as usize);
    };
    let mut rounded = exact.round_dp_with_strategy(digits, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(digits);

    format!("{sign}{rounded}")
}
