//! API error type and HTTP status mapping.
//!
//! Every per-request failure is caught here and turned into a JSON error
//! body; startup errors are handled with anyhow in main and never reach
//! this type.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::services::GenerateError;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error(transparent)]
    Generate(#[from] GenerateError),

    // Generic wrapper for other errors - auto-convert from anyhow::Error
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl ApiError {
    /// Helper to create validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    fn status(&self) -> StatusCode {
        match self {
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::Generate(err) => match err {
                GenerateError::Timeout(_) => StatusCode::GATEWAY_TIMEOUT,
                GenerateError::Upstream(_) | GenerateError::NoCandidates => StatusCode::BAD_GATEWAY,
                GenerateError::Decode { .. } | GenerateError::EmptyResult => {
                    StatusCode::INTERNAL_SERVER_ERROR
                },
            },
            Self::Other(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = self.to_string();

        // The raw model text is kept out of the response body; it is only
        // useful server-side.
        if let Self::Generate(GenerateError::Decode { raw, .. }) = &self {
            tracing::error!("undecodable model response ({} bytes): {}", raw.len(), message);
        } else if status.is_server_error() {
            tracing::error!("request failed: {}", message);
        }

        let body = Json(serde_json::json!({
            "error": message,
            "code": status.as_u16(),
        }));

        (status, body).into_response()
    }
}

pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_maps_to_bad_request() {
        assert_eq!(ApiError::validation("blank").status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn generate_errors_map_to_5xx() {
        let cases = [
            (GenerateError::Timeout(20), StatusCode::GATEWAY_TIMEOUT),
            (GenerateError::Upstream("refused".into()), StatusCode::BAD_GATEWAY),
            (GenerateError::NoCandidates, StatusCode::BAD_GATEWAY),
            (
                GenerateError::Decode { message: "eof".into(), raw: "{".into() },
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
            (GenerateError::EmptyResult, StatusCode::INTERNAL_SERVER_ERROR),
        ];
        for (err, expected) in cases {
            assert_eq!(ApiError::from(err).status(), expected);
        }
    }
}
