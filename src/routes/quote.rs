use axum::{body::Bytes, extract::State, http::HeaderMap, Json};
use chrono::{Datelike, Utc};
use serde_json::Value;
use std::sync::Arc;

use super::parse_json;
use crate::api::SubmissionResponse;
use crate::app::AppState;
use crate::catalog;
use crate::domain::Season;
use crate::error::{ApiError, ApiResult};
use crate::middleware::RequestIdExt;
use crate::pricing::{self, Estimate, EstimateRequest};
use crate::services::notify_quote_request;
use crate::validation::validate_quote_request;

/// Price a quote with seasonal and recurring adjustments.
///
/// Inline `addOns` must carry prices in the accepted range. `addOnIds` are
/// resolved against the catalog and priced after them.
pub async fn estimate_quote(body: Bytes) -> ApiResult<Json<Estimate>> {
    let mut request: EstimateRequest = parse_json(&body)?;

    for add_on in &request.add_ons {
        pricing::check_add_on_price(&add_on.price).map_err(|e| {
            ApiError::bad_request(format!("Invalid price for add-on '{}': {}", add_on.id, e))
        })?;
    }

    for id in &request.add_on_ids {
        let service = catalog::get_by_id(id)
            .ok_or_else(|| ApiError::bad_request(format!("Unknown service '{}'", id)))?;
        request.add_ons.push(catalog::as_add_on(service));
    }

    let current_season = Season::from_month(Utc::now().month());
    let estimate = pricing::estimate(&request, current_season);

    tracing::debug!(
        service_type = %request.service_type,
        property_size = %request.property_size,
        total = %estimate.quote.total_price,
        "Estimate calculated"
    );

    Ok(Json(estimate))
}

/// Validate a quote request and send the business and customer emails
pub async fn submit_quote(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    body: Bytes,
) -> ApiResult<SubmissionResponse> {
    let mailer = state.mailer.as_ref().ok_or(ApiError::EmailNotConfigured)?;

    let input: Value = parse_json(&body)?;
    let quote = validate_quote_request(&input)?;

    tracing::info!(
        request_id = %headers.request_id(),
        customer = %quote.customer_name,
        service_type = %quote.service_type,
        urgency = %quote.urgency,
        additional_services = quote.additional_services.len(),
        "Processing quote request"
    );

    let delivery = notify_quote_request(&**mailer, &state.mailboxes, &quote).await?;

    Ok(SubmissionResponse::quote(delivery))
}
