//! `GET /convert` handler.

use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use axum::Json;
use fxquote_common::Currency;
use fxquote_fx::{convert, parse_amount};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

use crate::error::ApiError;
use crate::state::AppState;

/// Query string of `/convert`.
#[derive(Debug, Default)]
pub struct ConvertQuery {
    pub source: Option<String>,
    pub target: Option<String>,
    pub amount: Option<String>,
}

impl ConvertQuery {
    /// Collect the parameters from decoded key/value pairs.
    ///
    /// A repeated key keeps its first value; unknown keys are ignored.
    pub fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        let mut query = Self::default();
        for (key, value) in pairs {
            let slot = match key.as_str() {
                "source" => &mut query.source,
                "target" => &mut query.target,
                "amount" => &mut query.amount,
                _ => continue,
            };
            if slot.is_none() {
                *slot = Some(value);
            }
        }
        query
    }

    /// Source, target and amount, each present and non-empty.
    fn required(self) -> Result<(String, String, String), ApiError> {
        fn non_empty(value: Option<String>) -> Option<String> {
            value.filter(|v| !v.is_empty())
        }

        match (
            non_empty(self.source),
            non_empty(self.target),
            non_empty(self.amount),
        ) {
            (Some(source), Some(target), Some(amount)) => Ok((source, target, amount)),
            _ => Err(ApiError::MissingInput),
        }
    }
}

/// Body of a successful conversion.
#[derive(Debug, Serialize, Deserialize)]
pub struct ConvertResponse {
    pub msg: String,
    pub amount: String,
}

/// Convert `amount` from `source` to `target` using the shared rate table.
///
/// An undecodable query string is treated like a missing parameter.
#[instrument(skip_all)]
pub async fn convert_handler(
    State(state): State<AppState>,
    query: Result<Query<Vec<(String, String)>>, QueryRejection>,
) -> Result<Json<ConvertResponse>, ApiError> {
    let Query(pairs) = query.map_err(|e| {
        debug!(error = %e, "Rejected query string");
        ApiError::MissingInput
    })?;
    let (source, target, amount) = ConvertQuery::from_pairs(pairs).required()?;

    let value = parse_amount(&amount).map_err(|e| {
        debug!(amount = %amount, error = %e, "Rejected amount");
        ApiError::from(e)
    })?;

    let conversion = convert(
        &state.rates,
        Currency::new(source),
        Currency::new(target),
        value,
    )?;
    let shown = conversion.display_amount();

    info!(
        conversion_id = %conversion.id,
        pair = %conversion.pair,
        rate = %conversion.rate,
        output = %shown,
        "Conversion completed"
    );

    Ok(Json(ConvertResponse {
        msg: "success".to_string(),
        amount: shown,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn query(source: &str, target: &str, amount: &str) -> ConvertQuery {
        ConvertQuery {
            source: Some(source.to_string()),
            target: Some(target.to_string()),
            amount: Some(amount.to_string()),
        }
    }

    #[test]
    fn test_required_accepts_complete_query() {
        let (source, target, amount) = query("USD", "TWD", "$1,525").required().unwrap();
        assert_eq!(source, "USD");
        assert_eq!(target, "TWD");
        assert_eq!(amount, "$1,525");
    }

    #[test]
    fn test_required_rejects_missing_or_empty() {
        assert!(matches!(
            ConvertQuery::default().required(),
            Err(ApiError::MissingInput)
        ));
        assert!(matches!(
            query("USD", "", "1").required(),
            Err(ApiError::MissingInput)
        ));
        let mut no_amount = query("USD", "TWD", "1");
        no_amount.amount = None;
        assert!(matches!(no_amount.required(), Err(ApiError::MissingInput)));
    }

    #[test]
    fn test_from_pairs_keeps_first_value() {
        let pairs = [
            ("source", "USD"),
            ("target", "TWD"),
            ("amount", "1"),
            ("source", "JPY"),
            ("note", "ignored"),
        ]
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();

        let query = ConvertQuery::from_pairs(pairs);
        assert_eq!(query.source.as_deref(), Some("USD"));
        assert_eq!(query.target.as_deref(), Some("TWD"));
        assert_eq!(query.amount.as_deref(), Some("1"));
    }

    #[test]
    fn test_from_pairs_first_empty_value_wins() {
        let pairs = vec![
            ("source".to_string(), String::new()),
            ("source".to_string(), "USD".to_string()),
        ];

        let query = ConvertQuery::from_pairs(pairs);
        assert_eq!(query.source.as_deref(), Some(""));
    }
}
