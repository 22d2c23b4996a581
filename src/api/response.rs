//! Standard API response types

use axum::{
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::services::QuoteDelivery;

/// `{ "data": ... }` wrapper for read endpoints
#[derive(Debug, Serialize)]
pub struct DataResponse<T: Serialize> {
    pub data: T,
}

impl<T: Serialize> DataResponse<T> {
    pub fn new(data: T) -> Self {
        Self { data }
    }
}

impl<T: Serialize> IntoResponse for DataResponse<T> {
    fn into_response(self) -> Response {
        Json(self).into_response()
    }
}

/// Result of a form submission that triggered email delivery
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionResponse {
    pub success: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email_ids: Option<QuoteDelivery>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email_id: Option<String>,
}

impl SubmissionResponse {
    pub fn quote(delivery: QuoteDelivery) -> Self {
        Self {
            success: true,
            message: "Quote request submitted successfully".to_string(),
            email_ids: Some(delivery),
            email_id: None,
        }
    }

    pub fn contact(email_id: String) -> Self {
        Self {
            success: true,
            message: "Message sent successfully".to_string(),
            email_ids: None,
            email_id: Some(email_id),
        }
    }
}

impl IntoResponse for SubmissionResponse {
    fn into_response(self) -> Response {
        Json(self).into_response()
    }
}
