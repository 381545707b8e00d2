//! Currency conversion against a [`RateTable`].

use chrono::{DateTime, Utc};
use fxquote_common::{Currency, CurrencyPair};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};
use uuid::Uuid;

use crate::amount::Amount;
use crate::error::{FxError, FxResult};
use crate::format::format_amount;
use crate::rates::RateTable;

/// Decimal places of a converted amount.
pub const OUTPUT_DECIMAL_PLACES: u32 = 2;

/// Represents a completed currency conversion.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Conversion {
    /// Unique conversion ID.
    pub id: Uuid,
    /// Source and target currencies.
    pub pair: CurrencyPair,
    /// Input amount.
    pub input: Amount,
    /// Factor taken from the rate table (zero for an unknown pair).
    pub rate: Decimal,
    /// Output amount, rounded to two places.
    pub output: Amount,
    /// When the conversion was executed.
    pub executed_at: DateTime<Utc>,
}

impl Conversion {
    /// Whether the rate lookup missed and the output is a placeholder zero.
    pub fn is_unknown_pair(&self) -> bool {
        self.rate.is_zero()
    }

    /// Output as shown to clients, e.g. `$46,427.10`.
    pub fn display_amount(&self) -> String {
        format!("${}", format_amount(self.output))
    }
}

/// Convert `amount` from `source` to `target`.
///
/// The product is rounded to two places, half away from zero. A pair that is
/// not in the table converts at factor zero.
pub fn convert(
    table: &RateTable,
    source: Currency,
    target: Currency,
    amount: Amount,
) -> FxResult<Conversion> {
    let pair = CurrencyPair::new(source, target);
    let rate = table.get(&pair).unwrap_or_else(|| {
        warn!(pair = %pair, "No rate for currency pair, converting at zero");
        Decimal::ZERO
    });

    let output = amount
        .checked_mul(rate)
        .ok_or(FxError::AmountOutOfRange)?
        .round_dp(OUTPUT_DECIMAL_PLACES);

    debug!(input = %amount, rate = %rate, output = %output, "Computed conversion");

    Ok(Conversion {
        id: Uuid::now_v7(),
        pair,
        input: amount,
        rate,
        output,
        executed_at: Utc::now(),
    })
}
