use anyhow::Result;
use axum::{http::HeaderValue, Router};
use std::sync::Arc;
use tower_http::{
    cors::{AllowHeaders, AllowMethods, CorsLayer},
    limit::RequestBodyLimitLayer,
    trace::{DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;

use crate::config::Settings;
use crate::middleware::request_id_layer;
use crate::routes;
use crate::services::{EmailSender, Mailboxes, ResendClient};

/// Shared application state, immutable after startup
pub struct AppState {
    pub settings: Settings,
    pub mailboxes: Mailboxes,
    /// `None` when no usable Resend API key is configured
    pub mailer: Option<Arc<dyn EmailSender>>,
}

impl AppState {
    pub fn new(settings: Settings, mailer: Option<Arc<dyn EmailSender>>) -> Arc<Self> {
        let mailboxes = Mailboxes::from_settings(&settings);
        Arc::new(Self {
            settings,
            mailboxes,
            mailer,
        })
    }

    /// Build state with a Resend client when an API key is configured
    pub fn from_settings(settings: Settings) -> Result<Arc<Self>> {
        let mailer: Option<Arc<dyn EmailSender>> = match settings.email_api_key() {
            Some(key) => Some(Arc::new(ResendClient::new(
                &settings.resend_api_url,
                key,
                settings.email_timeout_seconds,
            )?)),
            None => {
                tracing::warn!("RESEND_API_KEY not set; quote and contact submissions will be rejected");
                None
            }
        };

        Ok(Self::new(settings, mailer))
    }

    pub fn email_configured(&self) -> bool {
        self.mailer.is_some()
    }
}

/// Build the complete application with all middleware
pub fn create_app(state: Arc<AppState>) -> Router {
    let cors = build_cors_layer(&state.settings);

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::DEBUG))
        .on_request(DefaultOnRequest::new().level(Level::DEBUG))
        .on_response(DefaultOnResponse::new().level(Level::DEBUG));

    let (set_request_id, propagate_request_id) = request_id_layer();
    let body_limit = RequestBodyLimitLayer::new(state.settings.max_body_bytes);

    Router::new()
        .merge(routes::api_router())
        // Applied bottom-up
        .layer(body_limit)
        .layer(propagate_request_id)
        .layer(trace_layer)
        .layer(set_request_id)
        .layer(cors)
        .with_state(state)
}

fn build_cors_layer(settings: &Settings) -> CorsLayer {
    let origins: Vec<HeaderValue> = settings
        .cors_allow_origins
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();

    let max_age = if settings.env.is_dev() {
        std::time::Duration::from_secs(86400)
    } else {
        std::time::Duration::from_secs(3600)
    };

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods(AllowMethods::list([
            axum::http::Method::GET,
            axum::http::Method::POST,
            axum::http::Method::OPTIONS,
        ]))
        .allow_headers(AllowHeaders::list([
            axum::http::header::CONTENT_TYPE,
            axum::http::header::ACCEPT,
            axum::http::HeaderName::from_static("x-request-id"),
        ]))
        .max_age(max_age)
}
