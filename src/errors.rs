use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use tracing::error;

use crate::provider::ProviderError;

const INTERNAL_SERVER_ERROR: &str = "Internal Server Error";

#[derive(Debug)]
pub struct AppError {
    status: StatusCode,
    error: String,
    message: String,
    source: Option<anyhow::Error>,
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    stack: Option<String>,
}

impl AppError {
    pub fn bad_request(error: impl Into<String>, message: impl Into<String>) -> Self {
        Self::client(StatusCode::BAD_REQUEST, error, message)
    }

    pub fn client(
        status: StatusCode,
        error: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            status,
            error: error.into(),
            message: message.into(),
            source: None,
        }
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn error(&self) -> &str {
        &self.error
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl From<anyhow::Error> for AppError {
    fn from(value: anyhow::Error) -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            error: INTERNAL_SERVER_ERROR.to_string(),
            message: value.to_string(),
            source: Some(value),
        }
    }
}

impl From<ProviderError> for AppError {
    fn from(value: ProviderError) -> Self {
        match value {
            ProviderError::UnsupportedCountry(country) => Self::bad_request(
                "Param country is invalid",
                format!("Unsupported country code: {}", country),
            ),
            other => anyhow::Error::from(other).into(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let stack = self.source.map(|source| {
            error!("{:?}", source);
            format!("{:?}", source)
        });
        let body = ErrorBody {
            error: self.error,
            message: self.message,
            stack,
        };
        (self.status, Json(body)).into_response()
    }
}
