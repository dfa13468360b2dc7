//! IAM guardrail server: reverses IAM users adding themselves to groups.
//!
//! Main entry point: loads configuration, builds the IAM client, and serves
//! the event ingress until shutdown.

use std::sync::Arc;

use tracing_subscriber::{EnvFilter, fmt};

use guardrail_api::AppState;
use guardrail_core::config::AppConfig;
use guardrail_core::error::AppError;
use guardrail_iam::AwsIamClient;
use guardrail_service::GuardrailHandler;

#[tokio::main]
async fn main() {
    let config = match load_configuration() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    init_logging(&config);

    if let Err(e) = run(config).await {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }
}

/// Load configuration from file and environment
fn load_configuration() -> Result<AppConfig, AppError> {
    let config_path =
        std::env::var("GUARDRAIL_CONFIG").unwrap_or_else(|_| "config/default.toml".to_string());

    let config = AppConfig::load(&config_path)?;
    config.validate()?;
    Ok(config)
}

/// Initialize tracing/logging
fn init_logging(config: &AppConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    match config.logging.format.as_str() {
        "json" => {
            fmt()
                .json()
                .with_env_filter(filter)
                .with_target(true)
                .with_thread_ids(true)
                .init();
        }
        _ => {
            fmt()
                .pretty()
                .with_env_filter(filter)
                .with_target(true)
                .init();
        }
    }
}

/// Main server run function
async fn run(config: AppConfig) -> Result<(), AppError> {
    tracing::info!("Starting IAM guardrail v{}", env!("CARGO_PKG_VERSION"));

    // ── Step 1: Identity client ──────────────────────────────────
    let iam_client = AwsIamClient::new(&config.iam).await?;
    let guardrail = GuardrailHandler::new(Arc::new(iam_client));

    // ── Step 2: HTTP ingress ─────────────────────────────────────
    let state = AppState::new(config, guardrail);
    guardrail_api::serve(state, async {
        shutdown_signal().await;
        tracing::info!("Shutdown signal received, draining in-flight events...");
    })
    .await?;

    tracing::info!("IAM guardrail shut down gracefully");
    Ok(())
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM)
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
