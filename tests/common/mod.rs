#![allow(dead_code)]

use async_trait::async_trait;
use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request, StatusCode},
    Router,
};
use lawncare_backend::{
    app::{create_app, AppState},
    config::{Environment, Settings},
    services::{EmailSender, OutgoingEmail, SendError, SentEmail},
};
use serde_json::{json, Value};
use std::sync::{Arc, Mutex};
use tower::ServiceExt;
use url::Url;

pub const BUSINESS_EMAIL: &str = "owner@example.com";

pub fn settings(api_key: Option<&str>, api_url: &str) -> Settings {
    Settings {
        env: Environment::Dev,
        server_addr: "127.0.0.1:0".to_string(),
        max_body_bytes: 16 * 1024,
        cors_allow_origins: vec!["http://localhost:3000".to_string()],
        resend_api_key: api_key.map(str::to_string),
        resend_api_url: Url::parse(api_url).unwrap(),
        email_timeout_seconds: 5,
        email_from: "onboarding@resend.dev".to_string(),
        business_email: BUSINESS_EMAIL.to_string(),
        email_redirect_to: None,
    }
}

/// In-memory sender; fails every message addressed to `fail_for`
#[derive(Default)]
pub struct StubSender {
    pub sent: Mutex<Vec<OutgoingEmail>>,
    pub fail_for: Option<String>,
}

#[async_trait]
impl EmailSender for StubSender {
    async fn send(&self, email: &OutgoingEmail) -> Result<SentEmail, SendError> {
        let mut sent = self.sent.lock().unwrap();
        sent.push(email.clone());

        if self.fail_for.as_deref() == email.to.first().map(String::as_str) {
            return Err(SendError::Rejected {
                status: 403,
                message: "Domain is not verified".to_string(),
            });
        }

        Ok(SentEmail {
            id: format!("stub-{}", sent.len()),
        })
    }
}

pub fn app_with_sender(sender: Option<Arc<StubSender>>) -> Router {
    let mailer = sender.map(|s| s as Arc<dyn EmailSender>);
    let state = AppState::new(settings(None, "https://api.resend.com"), mailer);
    create_app(state)
}

pub async fn send(app: Router, method: Method, uri: &str, body: Option<String>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&bytes).into_owned()))
    };

    (status, value)
}

pub async fn get(app: Router, uri: &str) -> (StatusCode, Value) {
    send(app, Method::GET, uri, None).await
}

pub async fn post_json(app: Router, uri: &str, body: &Value) -> (StatusCode, Value) {
    send(app, Method::POST, uri, Some(body.to_string())).await
}

pub fn valid_quote() -> Value {
    json!({
        "customerName": "John Smith",
        "email": "john@example.com",
        "phone": "9191234567",
        "address": "123 Oak Street, Holly Springs",
        "serviceType": "premium",
        "propertySize": "large",
        "additionalServices": ["mulching", "edging"],
        "message": "Back gate is unlocked",
        "preferredContactMethod": "email",
        "preferredCallTime": "morning",
        "urgency": "asap"
    })
}
