//! Tracing subscriber setup

use crate::config::Environment;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Filter used when `RUST_LOG` is not set
fn default_directives(env: &Environment) -> &'static str {
    match env {
        Environment::Dev => "lawncare_backend=debug,tower_http=debug,info",
        Environment::Staging => "lawncare_backend=debug,tower_http=info,info",
        Environment::Prod => "lawncare_backend=info,tower_http=info,warn",
    }
}

/// Install the global subscriber: JSON lines in prod, pretty output elsewhere.
/// File and line locations are only included in dev.
pub fn init_logging(env: &Environment) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directives(env)));

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_target(true)
        .with_thread_ids(false)
        .with_file(env.is_dev())
        .with_line_number(env.is_dev());

    let registry = tracing_subscriber::registry().with(filter);

    let installed = if matches!(env, Environment::Prod) {
        registry.with(fmt_layer.json()).try_init()
    } else {
        registry.with(fmt_layer.pretty()).try_init()
    };

    match installed {
        Ok(()) => tracing::info!(env = ?env, "Logging initialized"),
        Err(e) => tracing::warn!(error = %e, "Logging was already initialized"),
    }
}
