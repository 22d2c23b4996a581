use axum::{body::Bytes, extract::State, http::HeaderMap};
use serde_json::Value;
use std::sync::Arc;

use super::parse_json;
use crate::api::SubmissionResponse;
use crate::app::AppState;
use crate::error::{ApiError, ApiResult};
use crate::middleware::RequestIdExt;
use crate::services::notify_contact_request;
use crate::validation::validate_contact_form;

/// Validate a contact form and forward it to the business inbox
pub async fn submit_contact(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    body: Bytes,
) -> ApiResult<SubmissionResponse> {
    let mailer = state.mailer.as_ref().ok_or(ApiError::EmailNotConfigured)?;

    let input: Value = parse_json(&body)?;
    let form = validate_contact_form(&input)?;

    tracing::info!(
        request_id = %headers.request_id(),
        name = %form.name,
        subject = %form.subject,
        "Processing contact message"
    );

    let email_id = notify_contact_request(&**mailer, &state.mailboxes, &form).await?;

    Ok(SubmissionResponse::contact(email_id))
}
