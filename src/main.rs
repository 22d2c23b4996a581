use anyhow::{Context, Result};

use lawncare_backend::{app, config, logging};

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    let settings = config::Settings::from_env()?;

    logging::init_logging(&settings.env);

    tracing::info!(
        env = ?settings.env,
        server_addr = %settings.server_addr,
        business_email = %settings.business_email,
        redirect = ?settings.email_redirect_to,
        "Starting lawn care backend"
    );

    let state = app::AppState::from_settings(settings.clone())?;
    tracing::info!(email_configured = state.email_configured(), "Application state ready");

    let app = app::create_app(state);

    let listener = tokio::net::TcpListener::bind(&settings.server_addr)
        .await
        .with_context(|| format!("Failed to bind {}", settings.server_addr))?;
    tracing::info!("Listening on {}", settings.server_addr);

    axum::serve(listener, app).await?;

    Ok(())
}
