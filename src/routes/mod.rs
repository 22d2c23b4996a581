pub mod catalog;
pub mod contact;
pub mod health;
pub mod quote;

use axum::{routing::get, routing::post, Router};
use serde::de::DeserializeOwned;
use std::sync::Arc;

use crate::app::AppState;
use crate::error::{ApiError, ApiResult};

/// Build the API router with all routes
pub fn api_router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/health", get(health::health_check))
        // Catalog
        .route("/services", get(catalog::list_services))
        .route("/services/:service_id", get(catalog::get_service))
        // Quotes
        .route("/quote", post(quote::submit_quote))
        .route("/quote/estimate", post(quote::estimate_quote))
        // Contact
        .route("/contact", post(contact::submit_contact))
}

/// Decode a JSON request body, reporting syntax and shape errors as 400s
pub(crate) fn parse_json<T: DeserializeOwned>(body: &[u8]) -> ApiResult<T> {
    serde_json::from_slice(body)
        .map_err(|e| ApiError::bad_request(format!("Invalid JSON body: {}", e)))
}
