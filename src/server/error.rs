//! JSON error envelope for the HTTP API

use crate::analysis::ProfileUrlError;
use crate::analyzer::AnalyzeError;
use crate::github::GitHubError;
use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use log::error;
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

/// Body of every non-200 response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorEnvelope {
    pub error: String,
    pub details: Value,
}

/// An error on its way out of a handler.
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub envelope: ErrorEnvelope,
}

impl ApiError {
    fn new(status: StatusCode, error: impl Into<String>, details: Value) -> Self {
        Self {
            status,
            envelope: ErrorEnvelope {
                error: error.into(),
                details,
            },
        }
    }
}

impl From<AnalyzeError> for ApiError {
    fn from(err: AnalyzeError) -> Self {
        match err {
            AnalyzeError::Validation(ProfileUrlError::Missing) => Self::new(
                StatusCode::BAD_REQUEST,
                ProfileUrlError::Missing.to_string(),
                Value::Null,
            ),
            AnalyzeError::Validation(e) => Self::new(
                StatusCode::BAD_REQUEST,
                "Invalid GitHub URL",
                Value::String(e.to_string()),
            ),
            AnalyzeError::Provider(e) => {
                error!("GitHub lookup failed: {e}");
                let details = match e {
                    GitHubError::Provider { status, body } => {
                        json!({ "status": status, "body": body })
                    }
                    other => Value::String(other.to_string()),
                };
                Self::new(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Failed to fetch GitHub data",
                    details,
                )
            }
            AnalyzeError::InvalidMetrics(e) => {
                error!("Scoring failed: {e}");
                Self::new(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Failed to score GitHub profile",
                    Value::String(e.to_string()),
                )
            }
        }
    }
}

impl From<ProfileUrlError> for ApiError {
    fn from(err: ProfileUrlError) -> Self {
        AnalyzeError::from(err).into()
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::new(
            StatusCode::BAD_REQUEST,
            "Invalid request body",
            Value::String(rejection.body_text()),
        )
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(self.envelope)).into_response()
    }
}
