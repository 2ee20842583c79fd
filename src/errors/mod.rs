//! Error handling with a consistent JSON error body.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

/// Error detail returned to the caller.
#[derive(Debug, Serialize)]
pub struct ApiError {
    pub code: String,
    pub message: String,
}

/// JSON body for error responses: `{"error": {"code", "message"}}`.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: ApiError,
}

/// Application error type mapping to HTTP status codes.
///
/// Filtering and pagination never fail (invalid input clamps to defaults),
/// so the only errors this API can produce come from loading the static
/// data files.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Failed to read data for '{resource}': {source}")]
    DataLoad {
        resource: &'static str,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse data for '{resource}': {source}")]
    DataParse {
        resource: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error("Internal error: {0}")]
    Internal(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        tracing::error!(error = %self, "Request failed");

        // Internal details stay in the logs; callers get a generic body.
        let body = ErrorBody {
            error: ApiError {
                code: "INTERNAL_ERROR".to_string(),
                message: "An internal error occurred".to_string(),
            },
        };

        (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn data_load_display() {
        let err = AppError::DataLoad {
            resource: "characters",
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "missing"),
        };
        assert!(err.to_string().contains("characters"));
    }

    #[test]
    fn error_body_shape() {
        let body = ErrorBody {
            error: ApiError {
                code: "INTERNAL_ERROR".to_string(),
                message: "An internal error occurred".to_string(),
            },
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["error"]["code"], "INTERNAL_ERROR");
    }
}
