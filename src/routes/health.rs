use axum::{extract::State, Json};
use serde::Serialize;
use std::sync::Arc;

use crate::app::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub services: ServiceHealth,
}

#[derive(Serialize)]
pub struct ServiceHealth {
    pub email: String,
}

/// Health check endpoint. A missing email key degrades submissions but the
/// catalog and estimates keep working, so the status stays healthy.
pub async fn health_check(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    let email = if state.email_configured() {
        "configured"
    } else {
        "not_configured"
    };

    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        services: ServiceHealth {
            email: email.to_string(),
        },
    })
}
