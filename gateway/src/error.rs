//! Client-facing error responses.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use fxquote_fx::FxError;
use serde_json::json;
use thiserror::Error;

/// Errors returned by the conversion endpoint.
#[derive(Debug, Error)]
pub enum ApiError {
    /// `source`, `target` or `amount` missing or empty.
    #[error("Invalid input")]
    MissingInput,

    /// The amount could not be turned into a number.
    #[error("Invalid amount")]
    InvalidAmount(#[source] FxError),
}

impl ApiError {
    /// HTTP status for this error.
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::MissingInput | ApiError::InvalidAmount(_) => StatusCode::BAD_REQUEST,
        }
    }
}

impl From<FxError> for ApiError {
    fn from(err: FxError) -> Self {
        ApiError::InvalidAmount(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status(), Json(json!({ "error": self.to_string() }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(ApiError::MissingInput.to_string(), "Invalid input");
        assert_eq!(
            ApiError::from(FxError::AmountOutOfRange).to_string(),
            "Invalid amount"
        );
    }

    #[test]
    fn test_status_is_client_error() {
        assert_eq!(ApiError::MissingInput.status(), StatusCode::BAD_REQUEST);
        let err = ApiError::from(FxError::InvalidAmount("abc".to_string()));
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
    }
}
