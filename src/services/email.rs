//! Transactional email delivery through the Resend API.
//!
//! The [`EmailSender`] trait is the seam between notification logic and the
//! provider; [`ResendClient`] is the production implementation.

use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, error, instrument};
use url::Url;

/// A rendered message ready to hand to the provider
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OutgoingEmail {
    pub from: String,
    pub to: Vec<String>,
    pub subject: String,
    pub html: String,
}

/// Provider receipt for an accepted message
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SentEmail {
    pub id: String,
}

#[derive(Debug, Error)]
pub enum SendError {
    /// The provider answered with a non-success status
    #[error("{message}")]
    Rejected { status: u16, message: String },

    #[error("Email service unavailable: {0}")]
    Transport(String),

    #[error("Invalid email service response: {0}")]
    InvalidResponse(String),
}

#[async_trait]
pub trait EmailSender: Send + Sync {
    async fn send(&self, email: &OutgoingEmail) -> Result<SentEmail, SendError>;
}

/// Error body returned by Resend
#[derive(Debug, Deserialize)]
struct ResendErrorResponse {
    message: String,
}

/// Client for the Resend email API.
#[derive(Clone)]
pub struct ResendClient {
    client: Client,
    endpoint: String,
    api_key: String,
}

impl ResendClient {
    /// Create a new Resend client.
    pub fn new(base_url: &Url, api_key: &str, timeout_seconds: u64) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_seconds))
            .build()
            .context("Failed to create HTTP client")?;

        let endpoint = format!("{}/emails", base_url.as_str().trim_end_matches('/'));

        tracing::info!(endpoint = %endpoint, "Email client initialized");

        Ok(Self {
            client,
            endpoint,
            api_key: api_key.to_string(),
        })
    }
}

#[async_trait]
impl EmailSender for ResendClient {
    #[instrument(skip(self, email), fields(subject = %email.subject))]
    async fn send(&self, email: &OutgoingEmail) -> Result<SentEmail, SendError> {
        debug!(url = %self.endpoint, recipients = email.to.len(), "Email API request");

        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .json(email)
            .send()
            .await
            .map_err(|e| {
                error!(error = %e, "Email API request failed");
                SendError::Transport(e.to_string())
            })?;

        let status = response.status();

        if status.is_success() {
            return response.json::<SentEmail>().await.map_err(|e| {
                error!(error = %e, "Failed to parse email API response");
                SendError::InvalidResponse(e.to_string())
            });
        }

        let message = response
            .json::<ResendErrorResponse>()
            .await
            .ok()
            .map(|body| body.message)
            .unwrap_or_else(|| format!("Email service error: {}", status));

        error!(status = %status, message = %message, "Email API rejected message");

        Err(SendError::Rejected {
            status: status.as_u16(),
            message,
        })
    }
}
