use anyhow::{Context, Result};
use std::env;
use url::Url;

/// Placeholder key shipped in the sample `.env`; treated as "not configured"
pub const PLACEHOLDER_API_KEY: &str = "re_placeholder_key_here";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Environment {
    Dev,
    Staging,
    Prod,
}

impl Environment {
    pub fn from_str(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "prod" | "production" => Self::Prod,
            "staging" => Self::Staging,
            _ => Self::Dev,
        }
    }

    pub fn is_dev(&self) -> bool {
        matches!(self, Self::Dev)
    }
}

#[derive(Debug, Clone)]
pub struct Settings {
    pub env: Environment,
    pub server_addr: String,
    pub max_body_bytes: usize,

    // CORS
    pub cors_allow_origins: Vec<String>,

    // Email (Resend)
    pub resend_api_key: Option<String>,
    pub resend_api_url: Url,
    pub email_timeout_seconds: u64,
    pub email_from: String,
    pub business_email: String,
    /// Deliver every email here instead of the real recipient
    pub email_redirect_to: Option<String>,
}

impl Settings {
    pub fn from_env() -> Result<Self> {
        let env = Environment::from_str(&env::var("ENV").unwrap_or_else(|_| "dev".to_string()));
        let server_addr = env::var("SERVER_ADDR").unwrap_or_else(|_| "0.0.0.0:8080".to_string());
        let max_body_bytes = env::var("MAX_BODY_BYTES")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(64 * 1024);

        // CORS
        let cors_allow_origins = env::var("CORS_ALLOW_ORIGINS")
            .unwrap_or_else(|_| "http://localhost:3000".to_string())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        // Email. A missing key is reported per request, not at startup.
        let resend_api_key = non_empty_var("RESEND_API_KEY");
        let resend_api_url = Url::parse(
            &env::var("RESEND_API_URL").unwrap_or_else(|_| "https://api.resend.com".to_string()),
        )
        .context("RESEND_API_URL must be a valid URL")?;
        let email_timeout_seconds = env::var("EMAIL_TIMEOUT_SECONDS")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(15);
        let email_from =
            env::var("EMAIL_FROM").unwrap_or_else(|_| "onboarding@resend.dev".to_string());
        let business_email = env::var("BUSINESS_EMAIL")
            .unwrap_or_else(|_| "fermanisandsonslawncare@gmail.com".to_string());
        let email_redirect_to = non_empty_var("EMAIL_REDIRECT_TO");

        Ok(Settings {
            env,
            server_addr,
            max_body_bytes,
            cors_allow_origins,
            resend_api_key,
            resend_api_url,
            email_timeout_seconds,
            email_from,
            business_email,
            email_redirect_to,
        })
    }

    /// API key usable for sending, if one is configured
    pub fn email_api_key(&self) -> Option<&str> {
        self.resend_api_key
            .as_deref()
            .filter(|key| *key != PLACEHOLDER_API_KEY)
    }
}

fn non_empty_var(key: &str) -> Option<String> {
    env::var(key)
        .ok()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}
