//! Amount extraction from decorated input such as `"$1,525"` or `"¥1,000"`.

use std::fmt;
use std::str::FromStr;

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use crate::error::{FxError, FxResult};

/// A monetary amount.
///
/// Values that fit a `Decimal` are kept exact. Anything larger falls back to
/// `f64`, so every finite number a float parser accepts is still usable.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Amount {
    Exact(Decimal),
    Float(f64),
}

impl Amount {
    /// Whether the amount is zero.
    pub fn is_zero(&self) -> bool {
        match self {
            Amount::Exact(v) => v.is_zero(),
            Amount::Float(v) => *v == 0.0,
        }
    }

    /// Multiply by a rate factor.
    ///
    /// An exact product that leaves the `Decimal` range is recomputed in
    /// `f64`. Returns `None` only when the float product is not finite.
    pub fn checked_mul(self, factor: Decimal) -> Option<Amount> {
        match self {
            Amount::Exact(v) => v
                .checked_mul(factor)
                .map(Amount::Exact)
                .or_else(|| Self::float_mul(v.to_f64()?, factor)),
            Amount::Float(v) => Self::float_mul(v, factor),
        }
    }

    fn float_mul(value: f64, factor: Decimal) -> Option<Amount> {
        let product = value * factor.to_f64()?;
        product.is_finite().then_some(Amount::Float(product))
    }

    /// Round to `dp` places, half away from zero.
    pub fn round_dp(self, dp: u32) -> Amount {
        match self {
            Amount::Exact(v) => {
                Amount::Exact(v.round_dp_with_strategy(dp, RoundingStrategy::MidpointAwayFromZero))
            }
            // Whole floats, which includes everything past 2^52, have no places to round.
            Amount::Float(v) if v.fract() == 0.0 => self,
            Amount::Float(v) => {
                let scale = 10f64.powi(dp as i32);
                let scaled = v * scale;
                if scaled.is_finite() {
                    // f64::round already rounds half away from zero
                    Amount::Float(scaled.round() / scale)
                } else {
                    self
                }
            }
        }
    }

    /// Plain fixed-point rendering with exactly `dp` fraction digits.
    pub fn to_fixed(self, dp: u32) -> String {
        match self {
            Amount::Exact(mut v) => {
                v.rescale(dp);
                v.to_string()
            }
            Amount::Float(v) => format!("{:.*}", dp as usize, v),
        }
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Amount::Exact(v) => write!(f, "{}", v),
            Amount::Float(v) => write!(f, "{}", v),
        }
    }
}

impl From<Decimal> for Amount {
    fn from(value: Decimal) -> Self {
        Amount::Exact(value)
    }
}

fn is_amount_char(c: char) -> bool {
    c.is_ascii_digit() || c == ',' || c == '.'
}

/// First maximal run of digits, commas and periods in `input`.
fn numeric_run(input: &str) -> Option<&str> {
    let start = input.find(is_amount_char)?;
    let rest = &input[start..];
    let len = rest.find(|c: char| !is_amount_char(c)).unwrap_or(rest.len());
    Some(&rest[..len])
}

/// Extract the numeric value from a free-form amount string.
///
/// The first run of `[0-9,.]` is taken, commas are dropped as thousands
/// decoration and the rest is parsed as a number. Anything around the run
/// (currency symbols, trailing text) is ignored. A run too large for a float
/// is as unparseable as one without digits.
pub fn parse_amount(input: &str) -> FxResult<Amount> {
    let run = numeric_run(input)
        .ok_or_else(|| FxError::InvalidAmount(format!("no number in {input:?}")))?;
    let cleaned: String = run.chars().filter(|&c| c != ',').collect();

    if !cleaned.bytes().any(|b| b.is_ascii_digit()) {
        return Err(FxError::InvalidAmount(format!("no digits in {run:?}")));
    }

    let normalized = match cleaned.split_once('.') {
        Some((_, frac)) if frac.contains('.') => {
            return Err(FxError::InvalidAmount(format!(
                "more than one decimal point in {run:?}"
            )));
        }
        Some((int, "")) => int.to_string(),
        Some(("", frac)) => format!("0.{frac}"),
        Some((int, frac)) => format!("{int}.{frac}"),
        None => cleaned,
    };

    if let Ok(exact) = Decimal::from_str(&normalized) {
        return Ok(Amount::Exact(exact));
    }

    normalized
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .map(Amount::Float)
        .ok_or_else(|| FxError::InvalidAmount(format!("{run:?} is out of range")))
}
