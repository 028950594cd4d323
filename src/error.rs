//! HTTP-boundary error type.
//!
//! Every failure leaving a handler is an [`AppError`] rendered as
//! `{"success": false, "error": {"code", "message", "details"}}`.

use axum::{
    Json,
    extract::rejection::QueryRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::{Value, json};
use validator::ValidationErrors;

use crate::domain::errors::PanchangError;

#[derive(Serialize)]
struct ErrorBody {
    success: bool,
    error: ErrorInfo,
}

#[derive(Serialize)]
struct ErrorInfo {
    code: &'static str,
    message: String,
    details: Value,
}

#[derive(Debug)]
pub enum AppError {
    Validation { message: String, details: Value },
    NotFound { message: String, details: Value },
    Internal { message: String, details: Value },
}

impl AppError {
    pub fn bad_request(message: impl Into<String>, details: Value) -> Self {
        Self::Validation {
            message: message.into(),
            details,
        }
    }
    pub fn not_found(message: impl Into<String>, details: Value) -> Self {
        Self::NotFound {
            message: message.into(),
            details,
        }
    }
    pub fn internal(message: impl Into<String>, details: Value) -> Self {
        Self::Internal {
            message: message.into(),
            details,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message, details) = match self {
            AppError::Validation { message, details } => (
                StatusCode::BAD_REQUEST,
                "validation_error",
                message,
                details,
            ),
            AppError::NotFound { message, details } => {
                (StatusCode::NOT_FOUND, "not_found", message, details)
            }
            AppError::Internal { message, details } => {
                tracing::error!(%message, %details, "Request failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal_error",
                    message,
                    details,
                )
            }
        };

        let body = ErrorBody {
            success: false,
            error: ErrorInfo {
                code,
                message,
                details,
            },
        };

        (status, Json(body)).into_response()
    }
}

impl From<PanchangError> for AppError {
    fn from(e: PanchangError) -> Self {
        match e {
            PanchangError::InvalidDate { ref input, ref reason } => AppError::bad_request(
                "Invalid date, expected YYYY-MM-DD",
                json!({ "date": input, "reason": reason }),
            ),
            PanchangError::InvalidCoordinate {
                latitude,
                longitude,
            } => AppError::bad_request(
                "Coordinates out of range",
                json!({ "lat": latitude, "lon": longitude }),
            ),
            PanchangError::InvalidCityTable(_) | PanchangError::Ephemeris(_) => {
                AppError::internal("Panchang computation failed", json!({ "reason": e.to_string() }))
            }
        }
    }
}

impl From<ValidationErrors> for AppError {
    fn from(errors: ValidationErrors) -> Self {
        let details = serde_json::to_value(&errors).unwrap_or_else(|_| json!({}));
        AppError::bad_request("Invalid query parameters", details)
    }
}

impl From<QueryRejection> for AppError {
    fn from(rejection: QueryRejection) -> Self {
        AppError::bad_request(
            "Invalid query string",
            json!({ "reason": rejection.body_text() }),
        )
    }
}
