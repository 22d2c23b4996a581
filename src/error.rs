//! Unified API error handling
//!
//! Provides consistent error responses across all endpoints.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

use crate::services::DispatchError;
use crate::validation::{FieldError, ValidationErrors};

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Invalid form data: {0}")]
    Validation(#[from] ValidationErrors),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Email service not configured")]
    EmailNotConfigured,

    #[error("Email delivery failed: {0}")]
    EmailDelivery(#[from] DispatchError),

    #[error("Internal server error")]
    Internal(#[from] anyhow::Error),
}

#[derive(Serialize)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Vec<FieldError>>,
}

impl ApiError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::BadRequest(message.into())
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound(message.into())
    }

    fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation(_) | Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::EmailNotConfigured => StatusCode::SERVICE_UNAVAILABLE,
            Self::EmailDelivery(_) => StatusCode::BAD_GATEWAY,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::BadRequest(_) => "BAD_REQUEST",
            Self::NotFound(_) => "NOT_FOUND",
            Self::EmailNotConfigured => "EMAIL_NOT_CONFIGURED",
            Self::EmailDelivery(_) => "EMAIL_SERVICE_ERROR",
            Self::Internal(_) => "INTERNAL_ERROR",
        }
    }

    fn public_message(&self) -> String {
        match self {
            Self::Validation(_) => "Invalid form data".to_string(),
            Self::BadRequest(msg) | Self::NotFound(msg) => msg.clone(),
            Self::EmailNotConfigured => {
                "Email service not configured. Please set RESEND_API_KEY.".to_string()
            }
            // Provider messages are passed through to the caller
            Self::EmailDelivery(e) => e.to_string(),
            // Don't leak internal error details
            Self::Internal(_) => "An internal error occurred".to_string(),
        }
    }

    fn details(&self) -> Option<Vec<FieldError>> {
        match self {
            Self::Validation(errors) => Some(errors.errors().to_vec()),
            _ => None,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match &self {
            Self::Internal(e) => {
                tracing::error!(error = ?e, "Internal server error");
            }
            Self::EmailDelivery(e) => {
                tracing::error!(error = %e, "Email delivery failed");
            }
            Self::EmailNotConfigured => {
                tracing::error!("RESEND_API_KEY is missing or still the placeholder value");
            }
            Self::Validation(errors) => {
                tracing::warn!(
                    fields = ?errors.fields().collect::<Vec<_>>(),
                    "Validation failed"
                );
            }
            _ => {
                tracing::warn!(error = %self, "API error");
            }
        }

        let status = self.status_code();
        let body = ErrorResponse {
            code: self.error_code().to_string(),
            message: self.public_message(),
            details: self.details(),
        };

        (status, Json(body)).into_response()
    }
}

pub type ApiResult<T> = Result<T, ApiError>;
